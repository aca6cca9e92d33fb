use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use quiz_core::model::QuestionBank;

use crate::record::parse_record;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors surfaced while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("cannot read questions from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

//
// ─── SOURCES ───────────────────────────────────────────────────────────────────
//

/// Where question banks come from.
///
/// The game loads once at startup; implementations do not need to support
/// reloading.
pub trait QuestionSource {
    /// Loads the full question bank.
    ///
    /// Records that fail to parse are skipped with a warning; they never fail
    /// the load.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the underlying source cannot be read at all.
    fn load(&self) -> Result<QuestionBank, SourceError>;
}

/// Reads questions line by line, skipping records that do not parse.
///
/// Empty lines are ignored without a warning.
///
/// # Errors
///
/// Returns `io::Error` if a line cannot be read.
pub fn read_bank<R: BufRead>(reader: R) -> io::Result<QuestionBank> {
    let mut questions = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match parse_record(&line) {
            Ok(question) => questions.push(question),
            Err(err) => warn!("skipping question on line {}: {err}", index + 1),
        }
    }
    Ok(QuestionBank::new(questions))
}

/// Question bank backed by a semicolon-delimited text file.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for FileQuestionSource {
    fn load(&self) -> Result<QuestionBank, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        read_bank(BufReader::new(file)).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory source for tests and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionSource {
    bank: QuestionBank,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }
}

impl QuestionSource for InMemoryQuestionSource {
    fn load(&self) -> Result<QuestionBank, SourceError> {
        Ok(self.bank.clone())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
