//! Sthana Bala (positional strength).
//!
//! Five sub-scores summed per planet: uccha (exaltation distance),
//! saptavargaja (dignity across the seven vargas), ojayugma (odd/even
//! rashi and navamsha placement by gender), kendradi (house class), and
//! drekkana (decanate by gender). Rahu/Ketu receive only the kendradi
//! placement score.

use serde::Serialize;

use bala_base::chart::Chart;
use bala_base::graha::{Graha, SAPTA_GRAHAS};
use bala_base::rashi::Rashi;
use bala_base::relationships::{
    Dignity, GrahaGender, dignity_in_rashi_with_positions, exaltation_degree, graha_gender,
};
use bala_base::util::normalize_360;
use bala_base::varga::{SAPTAVARGA, Varga, varga_rashi};

/// Sthana sub-scores in virupa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SthanaBala {
    pub uccha: f64,
    pub saptavargaja: f64,
    pub ojayugma: f64,
    pub kendradi: f64,
    pub drekkana: f64,
    pub total: f64,
}

/// Uccha Bala: 60 at the exaltation degree, falling linearly to 0 at the
/// debilitation degree 180 away.
pub fn uccha_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    let exalt = match exaltation_degree(graha) {
        Some(e) => e,
        None => return 0.0,
    };
    let lon = normalize_360(sidereal_lon);
    let diff = (lon - exalt).abs();
    let dist = if diff > 180.0 { 360.0 - diff } else { diff };
    60.0 * (1.0 - dist / 180.0)
}

/// Dignity points per varga for saptavargaja strength.
fn dignity_points(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 30.0,
        Dignity::Moolatrikona => 22.5,
        Dignity::OwnSign => 20.0,
        Dignity::AdhiMitra => 15.0,
        Dignity::Mitra => 10.0,
        Dignity::Sama => 7.5,
        Dignity::Shatru => 5.0,
        Dignity::AdhiShatru => 2.5,
        Dignity::Debilitated => 1.25,
    }
}

/// Rashi of each sapta graha in one varga, indexed by `Graha::index()`.
fn varga_positions(chart: &Chart, varga: Varga) -> [Rashi; 7] {
    let mut rashis = [Rashi::Mesha; 7];
    for (i, g) in SAPTA_GRAHAS.iter().enumerate() {
        if let Some(pos) = chart.position(*g) {
            rashis[i] = varga_rashi(pos.longitude, varga);
        }
    }
    rashis
}

/// Saptavargaja Bala: dignity points summed over D1, D2, D3, D7, D9, D12,
/// and D30, using each varga's own placements for the temporal component.
pub fn saptavargaja_bala(chart: &Chart, graha: Graha) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let pos = match chart.position(graha) {
        Some(p) => p,
        None => return 0.0,
    };
    let mut total = 0.0;
    for varga in SAPTAVARGA {
        let rashis = varga_positions(chart, varga);
        let varga_lon = bala_base::varga::varga_longitude(pos.longitude, varga);
        let dignity = dignity_in_rashi_with_positions(graha, varga_lon, &rashis);
        total += dignity_points(dignity);
    }
    total
}

/// Ojayugma Bala: 15 each for a congenial rashi and navamsha placement.
/// Male and neuter grahas favor odd rashis, female grahas even.
pub fn ojayugma_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let rashi = bala_base::rashi::rashi_of(normalize_360(sidereal_lon));
    let navamsha = varga_rashi(sidereal_lon, Varga::D9);

    let favors_odd = !matches!(graha_gender(graha), GrahaGender::Female);
    let mut score = 0.0;
    if rashi.is_odd() == favors_odd {
        score += 15.0;
    }
    if navamsha.is_odd() == favors_odd {
        score += 15.0;
    }
    score
}

/// Kendradi Bala: kendra houses 60, panaphara 30, apoklima 15.
pub fn kendradi_bala(house: u8) -> f64 {
    match house {
        1 | 4 | 7 | 10 => 60.0,
        2 | 5 | 8 | 11 => 30.0,
        3 | 6 | 9 | 12 => 15.0,
        _ => 0.0,
    }
}

/// Drekkana Bala: 15 for a male graha in the first decanate, female in
/// the second, neuter in the third.
pub fn drekkana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let deg = bala_base::rashi::degrees_in_rashi(normalize_360(sidereal_lon));
    let decanate = if deg < 10.0 {
        1
    } else if deg < 20.0 {
        2
    } else {
        3
    };
    match (graha_gender(graha), decanate) {
        (GrahaGender::Male, 1) | (GrahaGender::Female, 2) | (GrahaGender::Neuter, 3) => 15.0,
        _ => 0.0,
    }
}

/// Full Sthana breakdown for one planet. Nodes keep only kendradi.
pub fn sthana_bala(chart: &Chart, graha: Graha) -> SthanaBala {
    let pos = match chart.position(graha) {
        Some(p) => p,
        None => {
            return SthanaBala {
                uccha: 0.0,
                saptavargaja: 0.0,
                ojayugma: 0.0,
                kendradi: 0.0,
                drekkana: 0.0,
                total: 0.0,
            };
        }
    };
    let u = uccha_bala(graha, pos.longitude);
    let s = saptavargaja_bala(chart, graha);
    let o = ojayugma_bala(graha, pos.longitude);
    let k = kendradi_bala(pos.house);
    let d = drekkana_bala(graha, pos.longitude);
    SthanaBala {
        uccha: u,
        saptavargaja: s,
        ojayugma: o,
        kendradi: k,
        drekkana: d,
        total: u + s + o + k + d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bala_base::chart::{Motion, PlanetPosition};
    use bala_base::graha::ALL_GRAHAS;
    use chrono::{FixedOffset, TimeZone};

    const EPS: f64 = 1e-6;

    fn chart() -> Chart {
        let tz = FixedOffset::east_opt(0).unwrap();
        Chart {
            ascendant: 0.0,
            birth_time: tz.with_ymd_and_hms(1990, 1, 1, 12, 0, 0).unwrap(),
            positions: ALL_GRAHAS
                .iter()
                .enumerate()
                .map(|(i, g)| PlanetPosition {
                    graha: *g,
                    longitude: i as f64 * 37.0 % 360.0,
                    house: (i % 12 + 1) as u8,
                    motion: Motion::Direct,
                    speed_deg_per_day: 1.0,
                    combust: false,
                })
                .collect(),
            house_cusps: (0..12).map(|i| i as f64 * 30.0).collect(),
        }
    }

    #[test]
    fn uccha_at_exaltation_and_debilitation() {
        assert!((uccha_bala(Graha::Surya, 10.0) - 60.0).abs() < EPS);
        assert!(uccha_bala(Graha::Surya, 190.0).abs() < EPS);
        assert!((uccha_bala(Graha::Surya, 100.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn uccha_zero_for_nodes() {
        assert!(uccha_bala(Graha::Rahu, 100.0).abs() < EPS);
    }

    #[test]
    fn kendradi_classes() {
        for h in [1u8, 4, 7, 10] {
            assert!((kendradi_bala(h) - 60.0).abs() < EPS);
        }
        for h in [2u8, 5, 8, 11] {
            assert!((kendradi_bala(h) - 30.0).abs() < EPS);
        }
        for h in [3u8, 6, 9, 12] {
            assert!((kendradi_bala(h) - 15.0).abs() < EPS);
        }
    }

    #[test]
    fn drekkana_by_gender() {
        assert!((drekkana_bala(Graha::Surya, 5.0) - 15.0).abs() < EPS);
        assert!(drekkana_bala(Graha::Surya, 15.0).abs() < EPS);
        assert!((drekkana_bala(Graha::Chandra, 15.0) - 15.0).abs() < EPS);
        assert!((drekkana_bala(Graha::Buddh, 25.0) - 15.0).abs() < EPS);
    }

    #[test]
    fn ojayugma_male_in_odd_rashi() {
        // Sun at 5 Mesha: odd rashi, navamsha also starts from Mesha for
        // fire rashis so the second division is Vrishabha (even).
        let score = ojayugma_bala(Graha::Surya, 5.0);
        assert!((score - 15.0).abs() < EPS);
    }

    #[test]
    fn ojayugma_female_in_even_rashi() {
        // Moon at 33 deg: Vrishabha is even, and the earth-seeded navamsha
        // lands in Makara, also even. Both halves score.
        let score = ojayugma_bala(Graha::Chandra, 33.0);
        assert!((score - 30.0).abs() < EPS);
    }

    #[test]
    fn saptavargaja_in_band() {
        let c = chart();
        for g in SAPTA_GRAHAS {
            let s = saptavargaja_bala(&c, g);
            assert!(
                (7.0 * 1.25..=7.0 * 30.0).contains(&s),
                "{} got {s}",
                g.name()
            );
        }
    }

    #[test]
    fn saptavargaja_exalted_everywhere_beats_average() {
        let c = chart();
        // Sun at its exaltation degree scores Exalted in D1 at minimum.
        let mut exalted = c.clone();
        for p in exalted.positions.iter_mut() {
            if p.graha == Graha::Surya {
                p.longitude = 10.0;
            }
        }
        assert!(saptavargaja_bala(&exalted, Graha::Surya) > 7.0 * 1.25);
    }

    #[test]
    fn nodes_keep_only_kendradi() {
        let c = chart();
        let b = sthana_bala(&c, Graha::Rahu);
        assert!(b.uccha.abs() < EPS);
        assert!(b.saptavargaja.abs() < EPS);
        assert!(b.ojayugma.abs() < EPS);
        assert!(b.drekkana.abs() < EPS);
        assert!((b.total - b.kendradi).abs() < EPS);
    }

    #[test]
    fn total_is_sum_of_parts() {
        let c = chart();
        for g in ALL_GRAHAS {
            let b = sthana_bala(&c, g);
            let sum = b.uccha + b.saptavargaja + b.ojayugma + b.kendradi + b.drekkana;
            assert!((b.total - sum).abs() < EPS, "{}", g.name());
        }
    }
}
