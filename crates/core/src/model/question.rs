use crate::model::Difficulty;

/// A single multiple-choice question: one correct answer and three distractors.
///
/// Fields hold the loaded text verbatim. The game compares answers by exact
/// string equality, so nothing here is trimmed or normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    correct_answer: String,
    distractors: [String; 3],
    difficulty: Difficulty,
}

impl Question {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        distractors: [String; 3],
        difficulty: Difficulty,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            distractors,
            difficulty,
        }
    }

    // Accessors
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn distractors(&self) -> &[String; 3] {
        &self.distractors
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
