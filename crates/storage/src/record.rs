use thiserror::Error;

use quiz_core::model::{Difficulty, DifficultyError, Question};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Why a line could not be parsed into a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    #[error("expected {RECORD_FIELDS} ';'-separated fields, got {0}")]
    FieldCount(usize),

    #[error("difficulty is not an integer: {0:?}")]
    DifficultyNotInteger(String),

    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
}

//
// ─── RECORD PARSING ────────────────────────────────────────────────────────────
//

/// Number of fields in a question record.
pub const RECORD_FIELDS: usize = 6;

/// Parses one `question;correct;d1;d2;d3;level` line into a [`Question`].
///
/// Trailing separators are tolerated: empty fields at the end of the line are
/// dropped before the field count is checked. Interior empty fields are kept
/// verbatim, so answers may legitimately be empty strings. There is no escape
/// syntax; a `;` inside question or answer text splits the record.
///
/// # Errors
///
/// Returns `RecordError` when the line does not have exactly six fields or the
/// difficulty field does not name a known level.
pub fn parse_record(line: &str) -> Result<Question, RecordError> {
    let mut fields: Vec<&str> = line.split(';').collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }

    if fields.len() != RECORD_FIELDS {
        return Err(RecordError::FieldCount(fields.len()));
    }

    let level: i64 = fields[5]
        .parse()
        .map_err(|_| RecordError::DifficultyNotInteger(fields[5].to_owned()))?;
    let difficulty = Difficulty::from_level(level)?;

    Ok(Question::new(
        fields[0],
        fields[1],
        [
            fields[2].to_owned(),
            fields[3].to_owned(),
            fields[4].to_owned(),
        ],
        difficulty,
    ))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
