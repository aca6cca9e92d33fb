use std::collections::VecDeque;

use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Difficulty, Question, QuestionBank};

use super::QUESTIONS_PER_LEVEL;

/// The working set of questions for one level.
///
/// Drawn from the bank by filtering on difficulty, shuffled uniformly, then
/// capped at [`QUESTIONS_PER_LEVEL`]. Questions come off the front one at a
/// time and are never re-queued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelPool {
    questions: VecDeque<Question>,
}

impl LevelPool {
    /// Draws a fresh pool for the given difficulty.
    ///
    /// An empty result is valid; it means the bank has no questions at that
    /// difficulty.
    #[must_use]
    pub fn draw(bank: &QuestionBank, difficulty: Difficulty) -> Self {
        let mut matching: Vec<Question> = bank
            .iter()
            .filter(|q| q.difficulty() == difficulty)
            .cloned()
            .collect();

        let mut rng = rng();
        matching.as_mut_slice().shuffle(&mut rng);
        matching.truncate(QUESTIONS_PER_LEVEL);

        Self {
            questions: matching.into(),
        }
    }

    /// The pool a game holds before any level starts.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Takes the next question off the front of the pool.
    pub fn pop(&mut self) -> Option<Question> {
        self.questions.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
