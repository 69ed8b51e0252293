//! House counting from the natal Moon and Sade Sati phase classification.
//!
//! Houses are counted from the Moon sign as house 1. Saturn in the 12th,
//! 1st, and 2nd houses marks the rising, peak, and setting phases of Sade
//! Sati; the 4th and 8th mark the shorter Dhaiya transits.

use serde::Serialize;
use shani_ephemeris::Rashi;

/// House occupied by Saturn, counted from the Moon sign (1..=12).
pub fn house_from_moon(moon: Rashi, saturn: Rashi) -> u8 {
    house_from_numbers(moon.number(), saturn.number())
}

/// Same as [`house_from_moon`] on raw 1-based sign numbers.
pub fn house_from_numbers(moon_sign: u8, saturn_sign: u8) -> u8 {
    let offset = (saturn_sign as i16 - moon_sign as i16).rem_euclid(12);
    (offset + 1) as u8
}

/// Phase of Sade Sati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SadeSatiPhase {
    /// Saturn in the 12th house from the Moon.
    Rising,
    /// Saturn in the Moon sign.
    Peak,
    /// Saturn in the 2nd house from the Moon.
    Setting,
    NotActive,
}

/// All phases, active ones first in transit order.
pub const ALL_PHASES: [SadeSatiPhase; 4] = [
    SadeSatiPhase::Rising,
    SadeSatiPhase::Peak,
    SadeSatiPhase::Setting,
    SadeSatiPhase::NotActive,
];

impl SadeSatiPhase {
    /// Classify a house offset (1..=12).
    pub const fn from_house(house: u8) -> Self {
        match house {
            12 => Self::Rising,
            1 => Self::Peak,
            2 => Self::Setting,
            _ => Self::NotActive,
        }
    }

    pub const fn is_active(self) -> bool {
        !matches!(self, Self::NotActive)
    }

    /// Short label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Peak => "Peak",
            Self::Setting => "Setting",
            Self::NotActive => "Not active",
        }
    }

    /// Narrative description of the phase.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Rising => {
                "Saturn transits the 12th house from your Moon sign. This first phase of \
                 Sade Sati often brings rising expenses, disturbed sleep and strain within \
                 the family."
            }
            Self::Peak => {
                "Saturn transits your Moon sign itself. The middle phase is the most \
                 demanding, testing health, career and emotional resilience."
            }
            Self::Setting => {
                "Saturn transits the 2nd house from your Moon sign. The closing phase eases \
                 gradually, with lingering pressure on savings, speech and family matters."
            }
            Self::NotActive => {
                "Saturn is outside the 12th, 1st and 2nd houses from your Moon sign, so \
                 Sade Sati is not in effect."
            }
        }
    }

    /// Qualitative intensity.
    pub const fn impact(self) -> ImpactLevel {
        match self {
            Self::Rising | Self::Setting => ImpactLevel::Moderate,
            Self::Peak => ImpactLevel::High,
            Self::NotActive => ImpactLevel::Low,
        }
    }

    /// Life areas most affected during the phase.
    pub const fn life_areas(self) -> &'static [&'static str] {
        match self {
            Self::Rising => &[
                "Finances and expenses",
                "Family relationships",
                "Sleep and mental peace",
                "Foreign travel",
            ],
            Self::Peak => &[
                "Health",
                "Career",
                "Mental stress",
                "Personal relationships",
                "Reputation",
            ],
            Self::Setting => &[
                "Accumulated wealth",
                "Family",
                "Speech and communication",
                "Diet and health habits",
            ],
            Self::NotActive => &[],
        }
    }
}

/// Qualitative impact of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Dhaiya (small panoti): the two-and-a-half-year Saturn transits of the
/// 4th and 8th houses from the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dhaiya {
    /// Saturn in the 4th house (Kantaka Shani).
    Kantaka,
    /// Saturn in the 8th house (Ashtama Shani).
    Ashtama,
}

impl Dhaiya {
    /// Dhaiya for a house offset, if any.
    pub const fn from_house(house: u8) -> Option<Self> {
        match house {
            4 => Some(Self::Kantaka),
            8 => Some(Self::Ashtama),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Kantaka => "Kantaka Shani",
            Self::Ashtama => "Ashtama Shani",
        }
    }

    pub const fn house(self) -> u8 {
        match self {
            Self::Kantaka => 4,
            Self::Ashtama => 8,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Kantaka => {
                "Saturn transits the 4th house from your Moon sign, weighing on domestic \
                 comfort, property and peace of mind."
            }
            Self::Ashtama => {
                "Saturn transits the 8th house from your Moon sign, a period associated with \
                 obstacles, sudden changes and health vigilance."
            }
        }
    }
}

/// Traditional Saturn remedies, shown for every result.
pub const REMEDIES: [&str; 7] = [
    "Recite the Hanuman Chalisa on Tuesdays and Saturdays",
    "Chant the Shani mantra \"Om Sham Shanaischaraya Namah\" 108 times on Saturdays",
    "Light a sesame oil lamp under a peepal tree on Saturday evenings",
    "Donate black sesame, mustard oil or black cloth on Saturdays",
    "Serve the elderly and those who do manual labour",
    "Keep a disciplined routine and avoid shortcuts in work and money matters",
    "Wear a blue sapphire only after consulting a qualified astrologer",
];
