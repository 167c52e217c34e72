//! Varga (divisional chart) longitude mapping.
//!
//! Each varga divides the 30-degree rashi span into N equal parts and maps
//! each part to a target rashi. Only the saptavarga set needed for
//! saptavargaja strength is supported: D1, D2, D3, D7, D9, D12, D30.
//!
//! Mapping rules are the traditional Parashari ones. D2 cycles from twice
//! the natal rashi, D3 progresses by trines, D7 starts from the natal rashi
//! for odd rashis and the 7th from it for even, D9 seeds by element, D12
//! cycles from the natal rashi, and D30 starts from Mesha for odd rashis
//! and Meena for even.

use crate::rashi::{ALL_RASHIS, Rashi, Tattva};
use crate::util::normalize_360;

/// The seven divisional charts of the saptavarga scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varga {
    /// Rashi chart, identity mapping.
    D1,
    /// Hora.
    D2,
    /// Drekkana.
    D3,
    /// Saptamsha.
    D7,
    /// Navamsha.
    D9,
    /// Dwadashamsha.
    D12,
    /// Trimshamsha.
    D30,
}

/// The saptavarga charts in weight order.
pub const SAPTAVARGA: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

impl Varga {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D12 => 12,
            Self::D30 => 30,
        }
    }

    /// Sanskrit name of the divisional chart.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D12 => "Dwadashamsha",
            Self::D30 => "Trimshamsha",
        }
    }
}

/// Target rashi index for division `div_idx` of `natal_rashi`.
fn target_rashi_index(varga: Varga, natal_rashi: Rashi, div_idx: u16) -> u8 {
    let natal = natal_rashi.index() as u16;
    let target = match varga {
        Varga::D1 => natal,

        // Cycle from twice the natal rashi.
        Varga::D2 => (natal * 2) % 12 + div_idx,

        // Trine progression.
        Varga::D3 => natal + div_idx * 4,

        // Odd rashis start from themselves, even from the 7th.
        Varga::D7 => {
            let start = if natal_rashi.is_odd() {
                natal
            } else {
                (natal + 6) % 12
            };
            start + div_idx
        }

        // Element-seeded: Fire from Mesha, Earth from Makara, Air from
        // Tula, Water from Karka.
        Varga::D9 => {
            let start = match natal_rashi.tattva() {
                Tattva::Agni => 0,
                Tattva::Prithvi => 9,
                Tattva::Vayu => 6,
                Tattva::Jala => 3,
            };
            start + div_idx
        }

        // Cycle from the natal rashi.
        Varga::D12 => natal + div_idx,

        // Odd rashis from Mesha, even from Meena.
        Varga::D30 => {
            let start = if natal_rashi.is_odd() { 0 } else { 11 };
            start + div_idx
        }
    };
    (target % 12) as u8
}

/// Transform a sidereal longitude through a varga division. Returns the
/// varga longitude in [0, 360).
pub fn varga_longitude(sidereal_lon: f64, varga: Varga) -> f64 {
    let lon = normalize_360(sidereal_lon);
    if varga == Varga::D1 {
        return lon;
    }

    let rashi_idx = ((lon / 30.0) as usize).min(11);
    let natal_rashi = ALL_RASHIS[rashi_idx];
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;
    let divisions = varga.divisions();
    let deg_per_div = 30.0 / divisions as f64;

    let div_idx = ((pos_in_rashi / deg_per_div) as u16).min(divisions - 1);
    let target = target_rashi_index(varga, natal_rashi, div_idx);

    let pos_in_div = pos_in_rashi - div_idx as f64 * deg_per_div;
    let scaled = pos_in_div / deg_per_div * 30.0;

    (target as f64 * 30.0 + scaled) % 360.0
}

/// Rashi occupied in a varga chart.
pub fn varga_rashi(sidereal_lon: f64, varga: Varga) -> Rashi {
    crate::rashi::rashi_of(varga_longitude(sidereal_lon, varga))
}
