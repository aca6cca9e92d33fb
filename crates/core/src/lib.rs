pub mod model;
pub mod time;

pub use model::{Difficulty, DifficultyError, Question, QuestionBank};
pub use time::Clock;
