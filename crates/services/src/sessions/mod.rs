mod game;
mod options;
mod pool;
mod progress;

/// Most questions a level asks.
pub const QUESTIONS_PER_LEVEL: usize = 10;

/// Correct answers needed to unlock the next difficulty.
pub const PASS_MARK: usize = 9;

// Public API of the game subsystem.
pub use game::{CompletionChoice, GamePhase, QuizGame, WrongAnswerChoice};
pub use options::AnswerSheet;
pub use pool::LevelPool;
pub use progress::LevelProgress;
