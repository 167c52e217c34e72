//! Vedic planet (graha) enum and rashi lordship.
//!
//! The 9 grahas form the foundation of every strength calculation.
//! Each rashi has a planetary lord, which is a universal Vedic convention.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
/// Shadbala proper is defined only for these seven.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// The 5 grahas eligible for cheshta bala and graha yuddha (planetary war):
/// Mars through Saturn. The luminaries never retrograde and never war.
pub const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// True for Mars..Saturn, the planets with real geocentric retrogression.
    pub const fn is_tara_graha(self) -> bool {
        matches!(
            self,
            Self::Mangal | Self::Buddh | Self::Guru | Self::Shukra | Self::Shani
        )
    }

    /// Approximate mean geocentric daily motion in degrees, used to scale
    /// cheshta bala and as the war tie-break rank. None for the nodes.
    pub const fn mean_daily_motion(self) -> Option<f64> {
        match self {
            Self::Surya => Some(0.9856),
            Self::Chandra => Some(13.176),
            Self::Mangal => Some(0.524),
            Self::Buddh => Some(1.383),
            Self::Guru => Some(0.0831),
            Self::Shukra => Some(1.2),
            Self::Shani => Some(0.0334),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Apparent-brightness rank for graha yuddha resolution: 0 is brightest.
    /// Venus > Jupiter > Mercury > Mars > Saturn. None for non-combatants.
    pub const fn war_brightness_rank(self) -> Option<u8> {
        match self {
            Self::Shukra => Some(0),
            Self::Guru => Some(1),
            Self::Buddh => Some(2),
            Self::Mangal => Some(3),
            Self::Shani => Some(4),
            Self::Surya | Self::Chandra | Self::Rahu | Self::Ketu => None,
        }
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (universal convention):
/// Mesha/Vrischika → Mangal, Vrishabha/Tula → Shukra, Mithuna/Kanya → Buddh,
/// Karka → Chandra, Simha → Surya, Dhanu/Meena → Guru, Makara/Kumbha → Shani.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the lord of a rashi by 0-based index.
///
/// Returns None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(crate::rashi::ALL_RASHIS[rashi_index as usize]))
}
