use quiz_core::model::Difficulty;
use services::{AnswerSheet, CompletionChoice, GamePhase, QuizGame, WrongAnswerChoice};

use super::time_fmt::format_elapsed;

/// One user action arriving from the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Choose(Difficulty),
    Toggle(usize),
    Submit,
    WrongAnswer(WrongAnswerChoice),
    Completion(CompletionChoice),
    ChangeDifficulty,
}

/// View-model pairing the game with the checkbox selection state.
///
/// The four answer options are plain checkboxes, so any subset can be
/// ticked; `Submit` grades the first ticked option and does nothing when
/// none is ticked. Ticks are cleared whenever the displayed question
/// changes, and kept while the wrong-answer prompt is up.
pub struct GameVm {
    game: QuizGame,
    checked: [bool; 4],
}

impl GameVm {
    #[must_use]
    pub fn new(game: QuizGame) -> Self {
        Self {
            game,
            checked: [false; 4],
        }
    }

    pub fn apply(&mut self, intent: GameIntent) {
        match intent {
            GameIntent::Choose(difficulty) => {
                self.game.choose_difficulty(difficulty);
                self.clear_ticks();
            }
            GameIntent::Toggle(index) => {
                if let Some(slot) = self.checked.get_mut(index) {
                    *slot = !*slot;
                }
            }
            GameIntent::Submit => self.submit(),
            GameIntent::WrongAnswer(choice) => {
                self.game.resolve_wrong_answer(choice);
                self.clear_ticks();
            }
            GameIntent::Completion(choice) => {
                self.game.resolve_level_complete(choice);
                self.clear_ticks();
            }
            GameIntent::ChangeDifficulty => {
                self.game.change_difficulty();
                self.clear_ticks();
            }
        }
    }

    fn submit(&mut self) {
        let Some(index) = self.checked.iter().position(|&ticked| ticked) else {
            return;
        };
        let Some(option) = self
            .game
            .current()
            .map(|sheet| sheet.options()[index].clone())
        else {
            return;
        };

        self.game.submit_answer(&option);
        if self.game.phase() != GamePhase::WrongAnswer {
            self.clear_ticks();
        }
    }

    fn clear_ticks(&mut self) {
        self.checked = [false; 4];
    }

    // Accessors for the view
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.game.phase()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.game.difficulty()
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.game.current().map(|sheet| sheet.question().text())
    }

    #[must_use]
    pub fn options(&self) -> Option<&[String; 4]> {
        self.game.current().map(AnswerSheet::options)
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<&str> {
        self.game
            .current()
            .map(|sheet| sheet.question().correct_answer())
    }

    #[must_use]
    pub fn is_ticked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.game.progress().correct
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.game.passed()
    }

    #[must_use]
    pub fn completion_acknowledged(&self) -> bool {
        self.game.completion_acknowledged()
    }

    /// The `Time: M:SS` line for the completion prompt.
    #[must_use]
    pub fn elapsed_label(&self) -> Option<String> {
        self.game.level_elapsed().map(format_elapsed)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
