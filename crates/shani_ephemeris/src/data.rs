//! Built-in Saturn transit table.
//!
//! Sidereal (Lahiri) sign ingress dates of Saturn, one record per sign,
//! from the Aries ingress of 1998 through the Gemini transit that spans
//! the end of 2060. Retrograde re-entries are folded into the final
//! ingress, so every sign appears once per cycle.

use chrono::NaiveDate;

use crate::rashi::Rashi;
use crate::table::SaturnTransit;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date in reference table"),
    }
}

const fn transit(rashi: Rashi, entry: NaiveDate, exit: NaiveDate) -> SaturnTransit {
    SaturnTransit { rashi, entry, exit }
}

/// Number of records in [`REFERENCE_TRANSITS`].
pub const REFERENCE_LEN: usize = 27;

/// Saturn's continuous sign occupancy, chronological and gap-free.
pub static REFERENCE_TRANSITS: [SaturnTransit; REFERENCE_LEN] = [
    transit(Rashi::Mesha, ymd(1998, 4, 17), ymd(2000, 6, 7)),
    transit(Rashi::Vrishabha, ymd(2000, 6, 7), ymd(2002, 7, 23)),
    transit(Rashi::Mithuna, ymd(2002, 7, 23), ymd(2004, 9, 6)),
    transit(Rashi::Karka, ymd(2004, 9, 6), ymd(2007, 7, 16)),
    transit(Rashi::Simha, ymd(2007, 7, 16), ymd(2009, 9, 9)),
    transit(Rashi::Kanya, ymd(2009, 9, 9), ymd(2012, 8, 4)),
    transit(Rashi::Tula, ymd(2012, 8, 4), ymd(2014, 11, 2)),
    transit(Rashi::Vrischika, ymd(2014, 11, 2), ymd(2017, 10, 26)),
    transit(Rashi::Dhanu, ymd(2017, 10, 26), ymd(2020, 1, 24)),
    transit(Rashi::Makara, ymd(2020, 1, 24), ymd(2023, 1, 17)),
    transit(Rashi::Kumbha, ymd(2023, 1, 17), ymd(2025, 3, 29)),
    transit(Rashi::Meena, ymd(2025, 3, 29), ymd(2027, 5, 31)),
    transit(Rashi::Mesha, ymd(2027, 5, 31), ymd(2029, 7, 21)),
    transit(Rashi::Vrishabha, ymd(2029, 7, 21), ymd(2031, 9, 5)),
    transit(Rashi::Mithuna, ymd(2031, 9, 5), ymd(2033, 10, 20)),
    transit(Rashi::Karka, ymd(2033, 10, 20), ymd(2036, 8, 28)),
    transit(Rashi::Simha, ymd(2036, 8, 28), ymd(2038, 10, 23)),
    transit(Rashi::Kanya, ymd(2038, 10, 23), ymd(2041, 9, 17)),
    transit(Rashi::Tula, ymd(2041, 9, 17), ymd(2043, 12, 16)),
    transit(Rashi::Vrischika, ymd(2043, 12, 16), ymd(2046, 12, 9)),
    transit(Rashi::Dhanu, ymd(2046, 12, 9), ymd(2049, 3, 8)),
    transit(Rashi::Makara, ymd(2049, 3, 8), ymd(2052, 3, 1)),
    transit(Rashi::Kumbha, ymd(2052, 3, 1), ymd(2054, 5, 12)),
    transit(Rashi::Meena, ymd(2054, 5, 12), ymd(2056, 7, 13)),
    transit(Rashi::Mesha, ymd(2056, 7, 13), ymd(2058, 9, 3)),
    transit(Rashi::Vrishabha, ymd(2058, 9, 3), ymd(2060, 10, 18)),
    transit(Rashi::Mithuna, ymd(2060, 10, 18), ymd(2062, 12, 3)),
];
