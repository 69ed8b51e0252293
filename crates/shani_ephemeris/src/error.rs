//! Error types for ephemeris table construction and loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::rashi::UnknownRashi;

/// Errors from building, validating, or loading a transit table.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The table has no records.
    Empty,
    /// Record `index` does not exit after it enters.
    InvertedRecord { index: usize },
    /// Record `index` does not start where the previous record ends.
    Discontinuity { index: usize },
    /// Record `index` is not the sign following the previous record's sign.
    SignSequence { index: usize },
    /// A sign name in table data did not resolve.
    UnknownSign(String),
    /// Table data could not be parsed.
    Parse(String),
    /// I/O error.
    Io(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "ephemeris table is empty"),
            Self::InvertedRecord { index } => {
                write!(f, "record {index}: exit date is not after entry date")
            }
            Self::Discontinuity { index } => {
                write!(f, "record {index}: entry date does not match previous exit date")
            }
            Self::SignSequence { index } => {
                write!(f, "record {index}: sign does not follow previous sign")
            }
            Self::UnknownSign(name) => write!(f, "unknown sign in table: {name}"),
            Self::Parse(msg) => write!(f, "table parse error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<std::io::Error> for EphemerisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for EphemerisError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<UnknownRashi> for EphemerisError {
    fn from(e: UnknownRashi) -> Self {
        Self::UnknownSign(e.0)
    }
}
