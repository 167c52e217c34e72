//! Integration tests for the standalone Kala and Drig analyses.

use bala_engine::{compute_drig_bala, compute_kala_bala};

use bala_base::chart::{Chart, Motion, PlanetPosition};
use bala_base::graha::Graha;

use chrono::{DateTime, FixedOffset, TimeZone};

const EPS: f64 = 1e-9;

fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    // 2024-01-17 is a Wednesday.
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 17, hour, minute, 0)
        .unwrap()
}

fn chart() -> Chart {
    let data: [(Graha, f64, u8); 9] = [
        (Graha::Surya, 270.0, 5),
        (Graha::Chandra, 33.0, 9),
        (Graha::Mangal, 298.0, 5),
        (Graha::Buddh, 165.0, 1),
        (Graha::Guru, 95.0, 11),
        (Graha::Shukra, 357.0, 7),
        (Graha::Shani, 200.0, 2),
        (Graha::Rahu, 45.0, 9),
        (Graha::Ketu, 225.0, 3),
    ];
    Chart {
        ascendant: 165.0,
        birth_time: at(6, 30),
        positions: data
            .iter()
            .map(|(g, lon, house)| PlanetPosition {
                graha: *g,
                longitude: *lon,
                house: *house,
                motion: Motion::Direct,
                speed_deg_per_day: 1.0,
                combust: false,
            })
            .collect(),
        house_cusps: (0..12).map(|i| ((5 + i) % 12) as f64 * 30.0).collect(),
    }
}

#[test]
fn kala_analysis_covers_seven_planets() {
    let analysis = compute_kala_bala(&chart(), at(6, 30)).unwrap();
    assert_eq!(analysis.planets.len(), 7);
    for p in &analysis.planets {
        assert!(!p.graha.is_node());
        let b = &p.breakdown;
        let sum = b.nathonnatha + b.paksha + b.tribhaga + b.hora + b.ayana + b.yuddha;
        assert!((b.total - sum).abs() < EPS, "{}", p.graha.name());
        assert!(p.required_virupa > 0.0);
    }
}

#[test]
fn context_snapshot_reflects_clock() {
    let day = compute_kala_bala(&chart(), at(9, 0)).unwrap();
    assert!(day.context.is_daytime);
    assert_eq!(day.context.weekday_lord, Graha::Buddh);

    let night = compute_kala_bala(&chart(), at(22, 0)).unwrap();
    assert!(!night.context.is_daytime);
}

#[test]
fn first_hora_lord_collects_hora_bala() {
    // Wednesday at 06:30 is Mercury's hora on Mercury's day.
    let analysis = compute_kala_bala(&chart(), at(6, 30)).unwrap();
    assert_eq!(analysis.context.hora_lord, Graha::Buddh);
    let mercury = analysis
        .planets
        .iter()
        .find(|p| p.graha == Graha::Buddh)
        .unwrap();
    assert!((mercury.breakdown.hora - 60.0).abs() < EPS);
    for p in analysis.planets.iter().filter(|p| p.graha != Graha::Buddh) {
        assert!(p.breakdown.hora.abs() < EPS, "{}", p.graha.name());
    }
}

#[test]
fn conjunct_pair_transfers_war_virupa() {
    let mut chart = chart();
    for p in chart.positions.iter_mut() {
        match p.graha {
            Graha::Buddh => p.longitude = 250.0,
            Graha::Shukra => p.longitude = 250.4,
            _ => {}
        }
    }
    let analysis = compute_kala_bala(&chart, at(12, 0)).unwrap();
    let venus = analysis
        .planets
        .iter()
        .find(|p| p.graha == Graha::Shukra)
        .unwrap();
    let mercury = analysis
        .planets
        .iter()
        .find(|p| p.graha == Graha::Buddh)
        .unwrap();
    assert!((venus.breakdown.yuddha - 30.0).abs() < EPS);
    assert!((mercury.breakdown.yuddha + 30.0).abs() < EPS);
    let net: f64 = analysis.planets.iter().map(|p| p.breakdown.yuddha).sum();
    assert!(net.abs() < EPS);
}

#[test]
fn kala_lists_capped() {
    let analysis = compute_kala_bala(&chart(), at(6, 30)).unwrap();
    assert!(!analysis.key_insights.is_empty());
    assert!(analysis.key_insights.len() <= 5);
    assert!(analysis.recommendations.len() <= 5);
}

#[test]
fn kala_rejects_invalid_chart() {
    let mut chart = chart();
    chart.house_cusps.pop();
    assert!(compute_kala_bala(&chart, at(6, 30)).is_err());
}

#[test]
fn drig_analysis_covers_planets_and_houses() {
    let analysis = compute_drig_bala(&chart()).unwrap();
    assert_eq!(analysis.planets.len(), 9);
    assert_eq!(analysis.houses.len(), 12);
    for p in &analysis.planets {
        assert!(
            (p.net_virupa - (p.benefic_virupa - p.malefic_virupa)).abs() < EPS,
            "{}",
            p.graha.name()
        );
    }
}

#[test]
fn drig_is_time_independent_and_deterministic() {
    let chart = chart();
    let first = compute_drig_bala(&chart).unwrap();
    let second = compute_drig_bala(&chart).unwrap();
    assert_eq!(first, second);
}

#[test]
fn drig_rejects_invalid_chart() {
    let mut chart = chart();
    chart.positions[0].longitude = -5.0;
    assert!(compute_drig_bala(&chart).is_err());
}

#[test]
fn drig_serializes_to_json() {
    let analysis = compute_drig_bala(&chart()).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["houses"].as_array().unwrap().len(), 12);
}
