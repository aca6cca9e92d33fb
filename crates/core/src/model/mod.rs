mod bank;
mod difficulty;
mod question;

pub use bank::QuestionBank;
pub use difficulty::{Difficulty, DifficultyError};
pub use question::Question;
