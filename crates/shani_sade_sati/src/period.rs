//! Locating complete Sade Sati windows in a transit table.
//!
//! One Sade Sati is three consecutive sign transits: the sign before the
//! Moon sign, the Moon sign, and the sign after it. Each sign is occupied
//! once per Saturn cycle, so a forward scan of the table finds them in
//! order without interleaving.

use chrono::NaiveDate;
use serde::Serialize;
use shani_ephemeris::{EphemerisTable, Rashi};
use tracing::debug;

use crate::phase::SadeSatiPhase;

/// Year length used for elapsed-time reporting.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// A complete Sade Sati occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SadeSatiWindow {
    /// Saturn enters the 12th from the Moon.
    pub rising_start: NaiveDate,
    /// Saturn enters the Moon sign.
    pub peak_start: NaiveDate,
    /// Saturn enters the 2nd from the Moon.
    pub setting_start: NaiveDate,
    /// Saturn leaves the 2nd from the Moon.
    pub setting_end: NaiveDate,
}

impl SadeSatiWindow {
    pub const fn full_start(&self) -> NaiveDate {
        self.rising_start
    }

    pub const fn full_end(&self) -> NaiveDate {
        self.setting_end
    }

    /// Whether `date` falls in `[full_start, full_end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.rising_start <= date && date <= self.setting_end
    }

    /// Start and end of one phase, `None` for [`SadeSatiPhase::NotActive`].
    pub fn phase_span(&self, phase: SadeSatiPhase) -> Option<(NaiveDate, NaiveDate)> {
        match phase {
            SadeSatiPhase::Rising => Some((self.rising_start, self.peak_start)),
            SadeSatiPhase::Peak => Some((self.peak_start, self.setting_start)),
            SadeSatiPhase::Setting => Some((self.setting_start, self.setting_end)),
            SadeSatiPhase::NotActive => None,
        }
    }

    /// Length of the whole window in years.
    pub fn duration_years(&self) -> f64 {
        years_between(self.rising_start, self.setting_end)
    }
}

/// Elapsed years from `from` to `to`, rounded to one decimal.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    let days = to.signed_duration_since(from).num_days() as f64;
    (days / DAYS_PER_YEAR * 10.0).round() / 10.0
}

/// Find the first Sade Sati for `moon` whose rising phase starts on or
/// after `reference`.
///
/// Returns `None` when the table ends before all three transits are found.
pub fn locate_period(
    table: &EphemerisTable,
    moon: Rashi,
    reference: NaiveDate,
) -> Option<SadeSatiWindow> {
    let transits = table.transits();
    let twelfth = moon.prev();
    let second = moon.next();

    let window = transits
        .iter()
        .position(|t| t.rashi == twelfth && t.entry >= reference)
        .and_then(|rising| {
            let peak = rising + 1 + transits[rising + 1..].iter().position(|t| t.rashi == moon)?;
            let setting =
                peak + 1 + transits[peak + 1..].iter().position(|t| t.rashi == second)?;
            Some(SadeSatiWindow {
                rising_start: transits[rising].entry,
                peak_start: transits[peak].entry,
                setting_start: transits[setting].entry,
                setting_end: transits[setting].exit,
            })
        });

    if window.is_none() {
        debug!(
            moon = moon.western_name(),
            %reference,
            table_end = %table.end(),
            "no complete sade sati after reference"
        );
    }
    window
}

/// Every complete Sade Sati for `moon` in the table, in chronological order.
pub fn sade_sati_timeline(table: &EphemerisTable, moon: Rashi) -> Vec<SadeSatiWindow> {
    let mut windows = Vec::new();
    let mut reference = table.start();
    while let Some(w) = locate_period(table, moon, reference) {
        windows.push(w);
        match w.rising_start.succ_opt() {
            Some(next) => reference = next,
            None => break,
        }
    }
    windows
}
