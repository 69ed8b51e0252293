//! Saturn transit records and the validated transit table.
//!
//! A table is an ordered run of [`SaturnTransit`] records in which each
//! record starts on the day the previous one ends and advances by exactly
//! one sign. Construction through [`EphemerisTable::new`] enforces this, so
//! every lookup can assume continuous, non-overlapping coverage.

use std::borrow::Cow;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::data::REFERENCE_TRANSITS;
use crate::error::EphemerisError;
use crate::rashi::Rashi;

/// Saturn's occupancy of one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaturnTransit {
    /// Sign occupied.
    #[serde(rename = "sign")]
    pub rashi: Rashi,
    /// Ingress date, inclusive.
    pub entry: NaiveDate,
    /// Egress date, inclusive (equal to the next record's entry).
    pub exit: NaiveDate,
}

/// One record as written in a JSON table, sign not yet resolved.
#[derive(Deserialize)]
struct RawTransit {
    sign: String,
    entry: NaiveDate,
    exit: NaiveDate,
}

impl TryFrom<RawTransit> for SaturnTransit {
    type Error = EphemerisError;

    fn try_from(raw: RawTransit) -> Result<Self, Self::Error> {
        Ok(Self {
            rashi: raw.sign.parse()?,
            entry: raw.entry,
            exit: raw.exit,
        })
    }
}

impl SaturnTransit {
    /// 1-based number of the occupied sign.
    pub const fn sign_number(&self) -> u8 {
        self.rashi.number()
    }

    /// Whether `date` falls in `[entry, exit]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entry <= date && date <= self.exit
    }

    /// Length of the transit in days.
    pub fn duration_days(&self) -> i64 {
        self.exit.signed_duration_since(self.entry).num_days()
    }
}

/// A chronologically ordered, gap-free sequence of Saturn transits.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisTable {
    transits: Cow<'static, [SaturnTransit]>,
}

impl EphemerisTable {
    /// Build a table from owned records, validating continuity and sign order.
    pub fn new(transits: Vec<SaturnTransit>) -> Result<Self, EphemerisError> {
        validate(&transits)?;
        debug!(records = transits.len(), "ephemeris table validated");
        Ok(Self {
            transits: Cow::Owned(transits),
        })
    }

    /// The built-in reference table (1998 to 2062).
    pub fn reference() -> Self {
        Self {
            transits: Cow::Borrowed(&REFERENCE_TRANSITS),
        }
    }

    /// Parse a JSON array of `{ "sign", "entry", "exit" }` records.
    ///
    /// Sign names resolve like [`Rashi`]'s `FromStr`; an unresolved name
    /// fails with [`EphemerisError::UnknownSign`].
    pub fn from_json(content: &str) -> Result<Self, EphemerisError> {
        let raw: Vec<RawTransit> = serde_json::from_str(content)?;
        let transits = raw
            .into_iter()
            .map(SaturnTransit::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(transits)
    }

    /// Load a JSON table from a path.
    pub fn from_path(path: &Path) -> Result<Self, EphemerisError> {
        debug!(path = %path.display(), "loading ephemeris table");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize the table to pretty-printed JSON in the `from_json` layout.
    pub fn to_json(&self) -> Result<String, EphemerisError> {
        Ok(serde_json::to_string_pretty(self.transits())?)
    }

    /// All records in chronological order.
    pub fn transits(&self) -> &[SaturnTransit] {
        &self.transits
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.transits.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.transits.is_empty()
    }

    /// First covered day.
    pub fn start(&self) -> NaiveDate {
        self.transits[0].entry
    }

    /// Last covered day.
    pub fn end(&self) -> NaiveDate {
        self.transits[self.transits.len() - 1].exit
    }

    /// Whether `date` lies inside the covered span.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }

    /// Find the record containing `date`, with its index.
    ///
    /// Both interval ends are inclusive; the first match in chronological
    /// order wins, so an ingress day shared by two records belongs to the
    /// earlier one. Returns `None` outside the covered span.
    pub fn resolve(&self, date: NaiveDate) -> Option<(usize, &SaturnTransit)> {
        let found = self
            .transits
            .iter()
            .enumerate()
            .find(|(_, t)| t.contains(date));
        match found {
            Some((i, t)) => trace!(%date, index = i, sign = t.rashi.western_name(), "resolved"),
            None => debug!(%date, start = %self.start(), end = %self.end(), "date outside table"),
        }
        found
    }

    /// Saturn's sign on `date`, if covered.
    pub fn position(&self, date: NaiveDate) -> Option<Rashi> {
        self.resolve(date).map(|(_, t)| t.rashi)
    }
}

impl Default for EphemerisTable {
    fn default() -> Self {
        Self::reference()
    }
}

fn validate(transits: &[SaturnTransit]) -> Result<(), EphemerisError> {
    if transits.is_empty() {
        return Err(EphemerisError::Empty);
    }
    for (index, t) in transits.iter().enumerate() {
        if t.exit <= t.entry {
            return Err(EphemerisError::InvertedRecord { index });
        }
        if index == 0 {
            continue;
        }
        let prev = &transits[index - 1];
        if t.entry != prev.exit {
            return Err(EphemerisError::Discontinuity { index });
        }
        if t.rashi != prev.rashi.next() {
            return Err(EphemerisError::SignSequence { index });
        }
    }
    Ok(())
}
