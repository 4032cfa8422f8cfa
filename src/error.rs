//! Error types for crossword puzzles.

use std::fmt;

/// Result type alias for crossword operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the strict clue-loading path.
///
/// The interactive widget never fails: malformed input is reported through
/// [`crate::validate`] and the grid is built anyway. These errors come out
/// of [`crate::clue::parse_clues_strict`] and, for unparseable JSON only,
/// [`crate::Puzzle::from_json`].
#[derive(Debug)]
pub enum Error {
    /// Clue data is not valid JSON, or does not match the record shape.
    Json(serde_json::Error),
    /// A clue record field has the wrong type.
    InvalidClue {
        record: usize,
        field: &'static str,
        expected: &'static str,
    },
    /// A clue record has an empty answer.
    EmptyAnswer { record: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid clue data: {e}"),
            Self::InvalidClue {
                record,
                field,
                expected,
            } => {
                write!(f, "clue {record}: \"{field}\" is not a {expected}")
            }
            Self::EmptyAnswer { record } => write!(f, "clue {record}: answer is empty"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
