//! Error types for Sade Sati calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use shani_ephemeris::UnknownRashi;

/// Errors from Sade Sati calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SadeSatiError {
    /// The natal Moon sign name did not resolve to a rashi.
    InvalidInput(String),
    /// The check date lies outside the ephemeris table.
    DataCoverage {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl Display for SadeSatiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(name) => write!(f, "invalid moon sign: {name:?}"),
            Self::DataCoverage { date, start, end } => write!(
                f,
                "date {date} outside ephemeris coverage ({start} to {end})"
            ),
        }
    }
}

impl Error for SadeSatiError {}

impl From<UnknownRashi> for SadeSatiError {
    fn from(e: UnknownRashi) -> Self {
        Self::InvalidInput(e.0)
    }
}
