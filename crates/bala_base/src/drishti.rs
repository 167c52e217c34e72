//! Graha drishti (planetary aspect) tables on house distances.
//!
//! Aspects are counted by inclusive house distance from the aspecting graha.
//! Every graha casts the full 7th aspect. The partial aspects carry
//! fractional strength, except where a graha holds a special aspect on that
//! distance, which it casts at full strength: Mars on the 4th and 8th,
//! Jupiter on the 5th and 9th, Saturn on the 3rd and 10th. Rahu and Ketu
//! cast only the 7th.

use serde::Serialize;

use crate::graha::Graha;
use crate::relationships::{BeneficNature, natural_benefic_malefic};

/// Strength class of a recognized aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectKind {
    Full,
    ThreeQuarter,
    Half,
    Quarter,
}

impl AspectKind {
    /// Fraction of the aspecting graha's virupa weight carried.
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::ThreeQuarter => 0.75,
            Self::Half => 0.5,
            Self::Quarter => 0.25,
        }
    }
}

/// A recognized aspect at a house distance: its strength class and whether
/// it is one of the graha's special aspects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drishti {
    pub kind: AspectKind,
    pub special: bool,
}

/// True if `graha` holds a special full-strength aspect on this distance.
pub const fn is_special_aspect(graha: Graha, house_distance: u8) -> bool {
    match graha {
        Graha::Mangal => matches!(house_distance, 4 | 8),
        Graha::Guru => matches!(house_distance, 5 | 9),
        Graha::Shani => matches!(house_distance, 3 | 10),
        _ => false,
    }
}

/// Aspect cast by `graha` on a body `house_distance` houses away (inclusive
/// count, 1..=12). None when no aspect falls on that distance.
pub const fn drishti_at(graha: Graha, house_distance: u8) -> Option<Drishti> {
    if house_distance == 7 {
        return Some(Drishti {
            kind: AspectKind::Full,
            special: false,
        });
    }
    if graha.is_node() {
        return None;
    }
    if is_special_aspect(graha, house_distance) {
        return Some(Drishti {
            kind: AspectKind::Full,
            special: true,
        });
    }
    match house_distance {
        3 | 10 => Some(Drishti {
            kind: AspectKind::Quarter,
            special: false,
        }),
        5 | 9 => Some(Drishti {
            kind: AspectKind::Half,
            special: false,
        }),
        4 | 8 => Some(Drishti {
            kind: AspectKind::ThreeQuarter,
            special: false,
        }),
        _ => None,
    }
}

/// Base virupa weight a graha contributes through a full aspect. Benefics
/// strengthen, malefics afflict; the split is decided by `aspect_nature`.
pub const fn aspect_virupa_weight(graha: Graha) -> f64 {
    match graha {
        Graha::Guru | Graha::Shukra => 15.0,
        Graha::Chandra => 10.0,
        Graha::Buddh => 8.0,
        Graha::Shani | Graha::Mangal => 10.0,
        Graha::Surya => 5.0,
        Graha::Rahu | Graha::Ketu => 8.0,
    }
}

/// Benefic/malefic role of an aspecting graha. Uses the natural
/// classification; the nodes aspect as malefics.
pub const fn aspect_nature(graha: Graha) -> BeneficNature {
    natural_benefic_malefic(graha)
}

/// Virupa carried by `graha`'s aspect at `house_distance`, or None when no
/// aspect falls there.
pub fn aspect_virupa(graha: Graha, house_distance: u8) -> Option<f64> {
    drishti_at(graha, house_distance).map(|d| aspect_virupa_weight(graha) * d.kind.fraction())
}
