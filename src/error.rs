//! Error types for textinput.

use std::fmt;

/// Result type alias for textinput operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reason the mutation pipeline refused an edit.
///
/// A rejection is not a failure of the widget: the value and caret are left
/// exactly as they were before the edit was attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The edit would push the value past the character limit.
    CharacterLimit { limit: usize, attempted: usize },
    /// A line break was introduced while the input is single-line.
    LineBreakInSingleLine,
    /// The wrapped value no longer fits the viewport.
    ///
    /// `measured` and `available` are rows in multi-line mode and columns in
    /// single-line mode.
    ExceedsSize { measured: usize, available: usize },
    /// A registered validator returned `false`.
    Validator { index: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CharacterLimit { limit, attempted } => {
                write!(f, "character limit {limit} exceeded ({attempted} chars)")
            }
            Self::LineBreakInSingleLine => write!(f, "line break in single-line input"),
            Self::ExceedsSize {
                measured,
                available,
            } => write!(f, "text size {measured} does not fit in {available}"),
            Self::Validator { index } => write!(f, "rejected by validator #{index}"),
        }
    }
}

/// Error type for textinput operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A programmatic edit was rejected by the pipeline.
    Rejected(Rejection),
    /// An option value is out of its accepted range.
    InvalidOption { name: &'static str, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(r) => write!(f, "edit rejected: {r}"),
            Self::InvalidOption { name, reason } => {
                write!(f, "invalid option `{name}`: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Rejection> for Error {
    fn from(r: Rejection) -> Self {
        Self::Rejected(r)
    }
}
