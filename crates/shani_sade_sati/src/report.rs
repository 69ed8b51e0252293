//! Sade Sati report for a natal Moon sign on a given date.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use shani_ephemeris::{EphemerisTable, Rashi};
use tracing::debug;

use crate::error::SadeSatiError;
use crate::period::{SadeSatiWindow, locate_period, sade_sati_timeline, years_between};
use crate::phase::{Dhaiya, ImpactLevel, REMEDIES, SadeSatiPhase, house_from_moon};

/// Full Sade Sati assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SadeSatiResult {
    pub is_active: bool,
    pub phase: SadeSatiPhase,
    pub moon_sign: Rashi,
    pub saturn_sign: Rashi,
    /// House of Saturn counted from the Moon sign (1..=12).
    pub house_from_moon: u8,
    pub check_date: NaiveDate,
    /// Current Saturn transit bounds, set while active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_phase_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_phase_end: Option<NaiveDate>,
    /// Whole occurrence bounds, set while active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sade_sati_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sade_sati_end: Option<NaiveDate>,
    /// Next occurrence, set while not active and the table reaches it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_sade_sati_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_sade_sati_end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_until_start: Option<f64>,
    pub description: &'static str,
    pub impact: ImpactLevel,
    pub life_areas: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhaiya: Option<Dhaiya>,
    pub remedies: &'static [&'static str],
}

/// Assess Sade Sati for a Moon sign given by name (English or Sanskrit).
pub fn calculate_sade_sati(
    table: &EphemerisTable,
    moon_sign: &str,
    check_date: NaiveDate,
) -> Result<SadeSatiResult, SadeSatiError> {
    let moon: Rashi = moon_sign.parse()?;
    calculate_for_rashi(table, moon, check_date)
}

/// [`calculate_sade_sati`] for today's local date.
pub fn calculate_sade_sati_today(
    table: &EphemerisTable,
    moon_sign: &str,
) -> Result<SadeSatiResult, SadeSatiError> {
    calculate_sade_sati(table, moon_sign, Local::now().date_naive())
}

/// Assess Sade Sati for a resolved Moon sign.
pub fn calculate_for_rashi(
    table: &EphemerisTable,
    moon: Rashi,
    check_date: NaiveDate,
) -> Result<SadeSatiResult, SadeSatiError> {
    let (_, transit) = table
        .resolve(check_date)
        .ok_or(SadeSatiError::DataCoverage {
            date: check_date,
            start: table.start(),
            end: table.end(),
        })?;

    let house = house_from_moon(moon, transit.rashi);
    let phase = SadeSatiPhase::from_house(house);
    debug!(
        moon = moon.western_name(),
        saturn = transit.rashi.western_name(),
        house,
        ?phase,
        %check_date,
        "sade sati phase"
    );

    let mut result = SadeSatiResult {
        is_active: phase.is_active(),
        phase,
        moon_sign: moon,
        saturn_sign: transit.rashi,
        house_from_moon: house,
        check_date,
        current_phase_start: None,
        current_phase_end: None,
        sade_sati_start: None,
        sade_sati_end: None,
        next_sade_sati_start: None,
        next_sade_sati_end: None,
        years_until_start: None,
        description: phase.description(),
        impact: phase.impact(),
        life_areas: phase.life_areas(),
        dhaiya: Dhaiya::from_house(house),
        remedies: &REMEDIES,
    };

    if phase.is_active() {
        let window = containing_window(table, moon, check_date);
        let rising_start = window.map_or(transit.entry, |w| w.rising_start);
        let setting_end = window.map_or(transit.exit, |w| w.setting_end);
        let (start, end) = match phase {
            SadeSatiPhase::Rising => (transit.entry, setting_end),
            SadeSatiPhase::Setting => (rising_start, transit.exit),
            _ => (rising_start, setting_end),
        };
        result.current_phase_start = Some(transit.entry);
        result.current_phase_end = Some(transit.exit);
        result.sade_sati_start = Some(start);
        result.sade_sati_end = Some(end);
    } else if let Some(next) = locate_period(table, moon, check_date) {
        result.next_sade_sati_start = Some(next.full_start());
        result.next_sade_sati_end = Some(next.full_end());
        result.years_until_start = Some(years_between(check_date, next.full_start()));
    }

    Ok(result)
}

/// The occurrence containing `date`, scanning from the start of the table.
///
/// `None` when the table does not hold all three transits of it, e.g. the
/// rising transit predates the first record.
fn containing_window(
    table: &EphemerisTable,
    moon: Rashi,
    date: NaiveDate,
) -> Option<SadeSatiWindow> {
    let window = sade_sati_timeline(table, moon)
        .into_iter()
        .find(|w| w.contains(date));
    if window.is_none() {
        debug!(moon = moon.western_name(), %date, "active phase without complete window in table");
    }
    window
}
