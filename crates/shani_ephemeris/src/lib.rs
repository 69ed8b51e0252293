//! Saturn sign-transit ephemeris.
//!
//! This crate provides:
//! - `Rashi`, the 12 zodiac signs, with English/Sanskrit name resolution
//! - `SaturnTransit` records and the validated `EphemerisTable`
//! - The built-in reference table covering 2000 through 2060
//! - Position lookup: which sign Saturn occupies on a given date
//!
//! Tables are plain values. Callers pass one explicitly to every
//! computation, so synthetic or extended tables can stand in for the
//! reference data.

pub mod data;
pub mod error;
pub mod rashi;
pub mod table;

pub use data::{REFERENCE_LEN, REFERENCE_TRANSITS};
pub use error::EphemerisError;
pub use rashi::{ALL_RASHIS, Rashi, UnknownRashi};
pub use table::{EphemerisTable, SaturnTransit};
