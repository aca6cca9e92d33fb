pub mod record;
pub mod source;

pub use record::{RecordError, parse_record};
pub use source::{
    FileQuestionSource, InMemoryQuestionSource, QuestionSource, SourceError, read_bank,
};
