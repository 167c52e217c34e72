//! Rashi (sidereal zodiac sign) enum and longitude mapping.

use serde::{Deserialize, Serialize};

/// The 12 rashis in zodiacal order starting from Mesha (0°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

/// All 12 rashis in zodiacal order.
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

/// Classical element of a rashi, used for navamsha seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tattva {
    Agni,
    Prithvi,
    Vayu,
    Jala,
}

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

    /// Western name of the same sign.
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

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Odd rashis (Mesha, Mithuna, ...) are the 1st, 3rd, 5th... counting
    /// from Mesha = 1.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    /// Element of the rashi. Fire/Earth/Air/Water repeats in zodiacal order.
    pub const fn tattva(self) -> Tattva {
        match self.index() % 4 {
            0 => Tattva::Agni,
            1 => Tattva::Prithvi,
            2 => Tattva::Vayu,
            _ => Tattva::Jala,
        }
    }
}

/// Rashi containing a sidereal longitude. Input must already be normalized
/// to [0, 360).
pub fn rashi_of(longitude: f64) -> Rashi {
    let idx = ((longitude / 30.0) as usize).min(11);
    ALL_RASHIS[idx]
}

/// Degrees into the rashi, in [0, 30).
pub fn degrees_in_rashi(longitude: f64) -> f64 {
    longitude % 30.0
}
