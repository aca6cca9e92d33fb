#![forbid(unsafe_code)]

pub mod sessions;

pub use quiz_core::Clock;

pub use sessions::{
    AnswerSheet, CompletionChoice, GamePhase, LevelPool, LevelProgress, PASS_MARK,
    QUESTIONS_PER_LEVEL, QuizGame, WrongAnswerChoice,
};
