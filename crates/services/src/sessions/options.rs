use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::Question;

/// The question on display together with its four dealt answer options.
///
/// The options are always the correct answer plus the three distractors; only
/// their order changes between deals. Answer checks compare option text to the
/// correct answer verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    question: Question,
    options: [String; 4],
}

impl AnswerSheet {
    /// Deals a freshly shuffled sheet for the question.
    #[must_use]
    pub fn deal(question: Question) -> Self {
        let [d1, d2, d3] = question.distractors().clone();
        let options = [question.correct_answer().to_owned(), d1, d2, d3];
        let mut sheet = Self { question, options };
        sheet.reshuffle();
        sheet
    }

    /// Re-randomizes the option order, keeping the same four strings.
    pub fn reshuffle(&mut self) {
        let mut rng = rng();
        self.options.as_mut_slice().shuffle(&mut rng);
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    /// Whether the given option text is the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.question.correct_answer()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
