//! Sade Sati: Saturn's seven-and-a-half-year transit over the natal Moon.
//!
//! This crate provides:
//! - House counting from the Moon sign and phase classification
//! - Location of complete Sade Sati windows in a transit table
//! - A composed report with dates, impact, life areas and remedies
//! - Dhaiya (4th/8th house) detection and a full occurrence timeline
//!
//! All functions are pure over an [`EphemerisTable`] passed by the caller.

pub mod error;
pub mod period;
pub mod phase;
pub mod report;

pub use error::SadeSatiError;
pub use period::{
    DAYS_PER_YEAR, SadeSatiWindow, locate_period, sade_sati_timeline, years_between,
};
pub use phase::{
    ALL_PHASES, Dhaiya, ImpactLevel, REMEDIES, SadeSatiPhase, house_from_moon, house_from_numbers,
};
pub use report::{
    SadeSatiResult, calculate_for_rashi, calculate_sade_sati, calculate_sade_sati_today,
};
pub use shani_ephemeris::EphemerisTable;
