use crate::model::{Difficulty, Question};

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// The full set of questions loaded for a run.
///
/// Built once at startup and read-only afterwards; level pools are drawn from
/// it by filtering on difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// A bank with no questions, used when loading fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions at the given difficulty.
    #[must_use]
    pub fn count_at(&self, difficulty: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|q| q.difficulty() == difficulty)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
