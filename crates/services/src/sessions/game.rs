use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use quiz_core::Clock;
use quiz_core::model::{Difficulty, QuestionBank};

use super::options::AnswerSheet;
use super::pool::LevelPool;
use super::progress::LevelProgress;
use super::{PASS_MARK, QUESTIONS_PER_LEVEL};

//
// ─── PHASES AND PROMPT CHOICES ─────────────────────────────────────────────────
//

/// Where the game currently is. Each phase maps to one screen or prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Picking a difficulty; no question is loaded.
    SelectingDifficulty,
    /// A question is on display awaiting an answer.
    Playing,
    /// The last answer was wrong; waiting on retry-or-continue.
    WrongAnswer,
    /// The level ended; waiting on the advancement prompt.
    LevelComplete,
    /// All levels passed. Terminal.
    Complete,
}

/// Player's choice on the wrong-answer prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrongAnswerChoice {
    Retry,
    Continue,
}

/// Player's choice on the level-completion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionChoice {
    Advance,
    Dismiss,
}

//
// ─── QUIZ GAME ─────────────────────────────────────────────────────────────────
//

/// The quiz state machine: question sequencing, scoring, and level
/// advancement for one player.
///
/// Every user action has one handler, and a handler called in the wrong phase
/// is a no-op; the presentation layer only offers actions the current phase
/// supports, so there is nothing to report back. State lives for one process
/// run and is never persisted.
#[derive(Debug, Clone)]
pub struct QuizGame {
    bank: Arc<QuestionBank>,
    clock: Clock,
    difficulty: Difficulty,
    pool: LevelPool,
    current: Option<AnswerSheet>,
    asked: usize,
    correct: usize,
    phase: GamePhase,
    completion_acknowledged: bool,
    level_started_at: Option<DateTime<Utc>>,
    level_completed_at: Option<DateTime<Utc>>,
}

impl QuizGame {
    /// Starts a new game on the difficulty-selection screen, Easy pre-chosen.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, clock: Clock) -> Self {
        Self {
            bank,
            clock,
            difficulty: Difficulty::Easy,
            pool: LevelPool::empty(),
            current: None,
            asked: 0,
            correct: 0,
            phase: GamePhase::SelectingDifficulty,
            completion_acknowledged: false,
            level_started_at: None,
            level_completed_at: None,
        }
    }

    /// Starts a level at the given difficulty: resets the counters, draws a
    /// fresh pool, and serves the first question.
    ///
    /// No-op outside `SelectingDifficulty`.
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) {
        if self.phase != GamePhase::SelectingDifficulty {
            return;
        }

        self.reset_level();
        self.difficulty = difficulty;
        self.pool = LevelPool::draw(&self.bank, difficulty);
        self.level_started_at = Some(self.clock.now());
        self.level_completed_at = None;
        self.advance();
    }

    /// Grades the selected option against the current question.
    ///
    /// A correct answer scores and moves on; a wrong one opens the
    /// wrong-answer prompt without touching the counters. No-op outside
    /// `Playing`.
    pub fn submit_answer(&mut self, option: &str) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(sheet) = self.current.as_ref() else {
            return;
        };

        if sheet.is_correct(option) {
            self.correct += 1;
            self.advance();
        } else {
            self.phase = GamePhase::WrongAnswer;
        }
    }

    /// Settles the wrong-answer prompt.
    ///
    /// `Retry` re-deals the same question with a fresh option order; the same
    /// slot can be retried any number of times. `Continue` moves on, and the
    /// missed question is consumed for the rest of the level. No-op outside
    /// `WrongAnswer`.
    pub fn resolve_wrong_answer(&mut self, choice: WrongAnswerChoice) {
        if self.phase != GamePhase::WrongAnswer {
            return;
        }

        match choice {
            WrongAnswerChoice::Retry => {
                if let Some(sheet) = self.current.as_mut() {
                    sheet.reshuffle();
                }
                self.phase = GamePhase::Playing;
            }
            WrongAnswerChoice::Continue => self.advance(),
        }
    }

    /// Settles the level-completion prompt.
    ///
    /// `Advance` with the pass mark met steps to the next difficulty and
    /// returns to selection with it pre-chosen, or ends the game after Hard.
    /// `Dismiss`, and `Advance` below the mark, only mark the prompt as
    /// acknowledged: the game stays in `LevelComplete` and the way forward is
    /// [`Self::change_difficulty`]. No-op outside `LevelComplete`.
    pub fn resolve_level_complete(&mut self, choice: CompletionChoice) {
        if self.phase != GamePhase::LevelComplete {
            return;
        }

        if choice == CompletionChoice::Advance && self.passed() {
            match self.difficulty.next() {
                Some(next) => {
                    self.reset_level();
                    self.difficulty = next;
                    self.phase = GamePhase::SelectingDifficulty;
                }
                None => self.phase = GamePhase::Complete,
            }
            return;
        }

        self.completion_acknowledged = true;
    }

    /// Returns to difficulty selection with the current tier pre-chosen,
    /// dropping the level in progress.
    ///
    /// Valid while a level is underway or finished; no-op during the
    /// wrong-answer prompt and after the game is complete.
    pub fn change_difficulty(&mut self) {
        if !matches!(self.phase, GamePhase::Playing | GamePhase::LevelComplete) {
            return;
        }

        self.reset_level();
        self.phase = GamePhase::SelectingDifficulty;
    }

    /// Serves the next question, or ends the level once the per-level limit
    /// or the pool runs out.
    fn advance(&mut self) {
        let next = if self.asked >= QUESTIONS_PER_LEVEL {
            None
        } else {
            self.pool.pop()
        };

        match next {
            Some(question) => {
                self.asked += 1;
                self.current = Some(AnswerSheet::deal(question));
                self.phase = GamePhase::Playing;
            }
            None => {
                // The last question stays on display behind the prompt.
                self.phase = GamePhase::LevelComplete;
                self.level_completed_at = Some(self.clock.now());
            }
        }
    }

    fn reset_level(&mut self) {
        self.pool = LevelPool::empty();
        self.current = None;
        self.asked = 0;
        self.correct = 0;
        self.completion_acknowledged = false;
    }

    // Accessors
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The question currently on display, if any.
    #[must_use]
    pub fn current(&self) -> Option<&AnswerSheet> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> LevelProgress {
        LevelProgress {
            asked: self.asked,
            correct: self.correct,
            remaining: self.pool.len(),
            is_complete: matches!(
                self.phase,
                GamePhase::LevelComplete | GamePhase::Complete
            ),
        }
    }

    /// Whether the score meets the advancement mark.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.correct >= PASS_MARK
    }

    /// Whether the completion prompt was settled without advancing.
    #[must_use]
    pub fn completion_acknowledged(&self) -> bool {
        self.completion_acknowledged
    }

    /// Time spent on the current level, frozen once the level completes.
    ///
    /// `None` before the first level starts.
    #[must_use]
    pub fn level_elapsed(&self) -> Option<Duration> {
        let started = self.level_started_at?;
        let end = self.level_completed_at.unwrap_or_else(|| self.clock.now());
        Some(end - started)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
