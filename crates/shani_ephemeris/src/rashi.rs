//! Rashi (zodiac sign) identity, numbering, and name resolution.
//!
//! Signs are numbered 1..=12 from Mesha (Aries) to Meena (Pisces). Both the
//! English and the Sanskrit names resolve to the same sign, including the
//! common short transliterations (`Mesh`, `Kumbh`, `Meen`, ...).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (number 1 first).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        match self {
            Self::Mesha => 1,
            Self::Vrishabha => 2,
            Self::Mithuna => 3,
            Self::Karka => 4,
            Self::Simha => 5,
            Self::Kanya => 6,
            Self::Tula => 7,
            Self::Vrischika => 8,
            Self::Dhanu => 9,
            Self::Makara => 10,
            Self::Kumbha => 11,
            Self::Meena => 12,
        }
    }

    /// Rashi for a 1-based sign number, `None` outside 1..=12.
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(ALL_RASHIS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Move `steps` signs through the zodiac (negative moves backwards).
    pub fn offset(self, steps: i8) -> Self {
        let idx = (self.number() as i16 - 1 + steps as i16).rem_euclid(12);
        ALL_RASHIS[idx as usize]
    }

    /// Next rashi in zodiacal order (Meena wraps to Mesha).
    pub fn next(self) -> Self {
        self.offset(1)
    }

    /// Previous rashi in zodiacal order (Mesha wraps to Meena).
    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.western_name(), self.name())
    }
}

/// A sign name that matches no rashi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRashi(pub String);

impl Display for UnknownRashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown zodiac sign: {:?}", self.0)
    }
}

impl Error for UnknownRashi {}

// Lowercase aliases beyond the canonical English and Sanskrit names.
const ALIASES: &[(&str, Rashi)] = &[
    ("mesh", Rashi::Mesha),
    ("vrishabh", Rashi::Vrishabha),
    ("vrishab", Rashi::Vrishabha),
    ("vrushabh", Rashi::Vrishabha),
    ("mithun", Rashi::Mithuna),
    ("kark", Rashi::Karka),
    ("karkata", Rashi::Karka),
    ("karkataka", Rashi::Karka),
    ("singh", Rashi::Simha),
    ("simh", Rashi::Simha),
    ("kanyaa", Rashi::Kanya),
    ("tulaa", Rashi::Tula),
    ("vrishchika", Rashi::Vrischika),
    ("vrishchik", Rashi::Vrischika),
    ("vrischik", Rashi::Vrischika),
    ("dhanus", Rashi::Dhanu),
    ("dhanush", Rashi::Dhanu),
    ("makar", Rashi::Makara),
    ("kumbh", Rashi::Kumbha),
    ("meen", Rashi::Meena),
    ("mina", Rashi::Meena),
];

impl FromStr for Rashi {
    type Err = UnknownRashi;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(UnknownRashi(s.to_string()));
        }
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| {
                r.western_name().eq_ignore_ascii_case(&key) || r.name().eq_ignore_ascii_case(&key)
            })
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|&(_, r)| r)
            })
            .ok_or_else(|| UnknownRashi(s.to_string()))
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.western_name())
    }
}

impl<'de> Deserialize<'de> for Rashi {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
