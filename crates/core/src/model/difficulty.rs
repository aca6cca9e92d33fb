use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DifficultyError {
    #[error("difficulty level must be 1, 2, or 3 (got {0})")]
    UnknownLevel(i64),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier of a question. Levels 1 through 3 map to Easy, Medium, Hard.
///
/// Tiers are ordered: clearing one at the pass mark unlocks the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Maps a numeric level to a tier.
    ///
    /// # Errors
    ///
    /// Returns `DifficultyError::UnknownLevel` for levels outside 1..=3.
    pub fn from_level(level: i64) -> Result<Self, DifficultyError> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(DifficultyError::UnknownLevel(other)),
        }
    }

    /// The numeric level of this tier.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// The tier above this one, or `None` past `Hard`.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Difficulty::Easy => Some(Difficulty::Medium),
            Difficulty::Medium => Some(Difficulty::Hard),
            Difficulty::Hard => None,
        }
    }

    /// User-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
