//! Drik Bala (aspectual strength) and the standalone aspect analysis.
//!
//! Every recognized graha-drishti between two planets contributes virupa
//! signed by the aspecting planet's benefic or malefic nature. A planet's
//! drik component is the net of everything it receives. The standalone
//! analysis additionally itemizes every aspect, groups them per planet as
//! received and cast, and aggregates aspects landing on each house.

use serde::Serialize;

use bala_base::chart::Chart;
use bala_base::drishti::{AspectKind, aspect_nature, aspect_virupa_weight, drishti_at};
use bala_base::error::BalaError;
use bala_base::graha::{ALL_GRAHAS, Graha};
use bala_base::relationships::BeneficNature;
use bala_base::util::house_distance;

/// One recognized aspect between two planets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectInfo {
    pub source: Graha,
    pub target: Graha,
    /// Inclusive house distance from source to target, 1..=12.
    pub house_distance: u8,
    pub kind: AspectKind,
    pub special: bool,
    pub nature: BeneficNature,
    pub virupa: f64,
}

/// Aspect totals for one planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetDrigBala {
    pub graha: Graha,
    pub benefic_virupa: f64,
    pub malefic_virupa: f64,
    /// benefic minus malefic; this is the drik component in Shadbala.
    pub net_virupa: f64,
    pub aspects_received: Vec<AspectInfo>,
    pub aspects_cast: Vec<AspectInfo>,
}

/// Net influence class of a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HouseInfluence {
    Benefic,
    Malefic,
    Neutral,
}

/// Aggregate of aspects landing on one house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseAspects {
    pub house: u8,
    pub benefic_count: u8,
    pub malefic_count: u8,
    pub net_virupa: f64,
    pub influence: HouseInfluence,
}

/// Standalone aspectual-strength analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrigBalaAnalysis {
    pub planets: Vec<PlanetDrigBala>,
    pub houses: Vec<HouseAspects>,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
}

fn aspect_between(chart: &Chart, source: Graha, target: Graha) -> Option<AspectInfo> {
    if source == target {
        return None;
    }
    let from = chart.position(source)?;
    let to = chart.position(target)?;
    let distance = house_distance(from.house, to.house);
    let drishti = drishti_at(source, distance)?;
    Some(AspectInfo {
        source,
        target,
        house_distance: distance,
        kind: drishti.kind,
        special: drishti.special,
        nature: aspect_nature(source),
        virupa: aspect_virupa_weight(source) * drishti.kind.fraction(),
    })
}

/// All recognized aspects between ordered planet pairs.
pub fn aspect_matrix(chart: &Chart) -> Vec<AspectInfo> {
    let mut aspects = Vec::new();
    for source in ALL_GRAHAS {
        for target in ALL_GRAHAS {
            if let Some(a) = aspect_between(chart, source, target) {
                aspects.push(a);
            }
        }
    }
    aspects
}

/// Net drik virupa for one planet from the full matrix.
pub fn net_drik_virupa(aspects: &[AspectInfo], graha: Graha) -> f64 {
    aspects
        .iter()
        .filter(|a| a.target == graha)
        .map(|a| match a.nature {
            BeneficNature::Benefic => a.virupa,
            BeneficNature::Malefic => -a.virupa,
        })
        .sum()
}

fn house_aggregates(chart: &Chart) -> Vec<HouseAspects> {
    let mut houses = Vec::with_capacity(12);
    for house in 1..=12u8 {
        let mut benefic_count = 0u8;
        let mut malefic_count = 0u8;
        let mut net = 0.0;
        for source in ALL_GRAHAS {
            let from = match chart.position(source) {
                Some(p) => p,
                None => continue,
            };
            let distance = house_distance(from.house, house);
            // A planet does not aspect its own house.
            if distance == 1 {
                continue;
            }
            if let Some(d) = drishti_at(source, distance) {
                let virupa = aspect_virupa_weight(source) * d.kind.fraction();
                match aspect_nature(source) {
                    BeneficNature::Benefic => {
                        benefic_count += 1;
                        net += virupa;
                    }
                    BeneficNature::Malefic => {
                        malefic_count += 1;
                        net -= virupa;
                    }
                }
            }
        }
        let influence = if net > 0.0 {
            HouseInfluence::Benefic
        } else if net < 0.0 {
            HouseInfluence::Malefic
        } else {
            HouseInfluence::Neutral
        };
        houses.push(HouseAspects {
            house,
            benefic_count,
            malefic_count,
            net_virupa: net,
            influence,
        });
    }
    houses
}

/// Build the standalone Drig analysis. Time-independent.
pub fn drig_analysis(chart: &Chart) -> Result<DrigBalaAnalysis, BalaError> {
    let matrix = aspect_matrix(chart);
    let mut planets = Vec::with_capacity(9);
    for graha in ALL_GRAHAS {
        let received: Vec<AspectInfo> =
            matrix.iter().filter(|a| a.target == graha).copied().collect();
        let cast: Vec<AspectInfo> =
            matrix.iter().filter(|a| a.source == graha).copied().collect();
        let benefic: f64 = received
            .iter()
            .filter(|a| a.nature == BeneficNature::Benefic)
            .map(|a| a.virupa)
            .sum();
        let malefic: f64 = received
            .iter()
            .filter(|a| a.nature == BeneficNature::Malefic)
            .map(|a| a.virupa)
            .sum();
        planets.push(PlanetDrigBala {
            graha,
            benefic_virupa: benefic,
            malefic_virupa: malefic,
            net_virupa: benefic - malefic,
            aspects_received: received,
            aspects_cast: cast,
        });
    }
    let houses = house_aggregates(chart);
    let key_insights = drig_insights(chart, &planets, &houses);
    let recommendations = drig_recommendations(&planets);
    Ok(DrigBalaAnalysis {
        planets,
        houses,
        key_insights,
        recommendations,
    })
}

fn drig_insights(
    chart: &Chart,
    planets: &[PlanetDrigBala],
    houses: &[HouseAspects],
) -> Vec<String> {
    let mut insights = Vec::new();
    if let Some(best) = planets.iter().max_by(|a, b| {
        a.net_virupa
            .partial_cmp(&b.net_virupa)
            .unwrap_or(std::cmp::Ordering::Equal)
    }) {
        insights.push(format!(
            "{} receives the most supportive aspects ({:+.1} virupa net)",
            best.graha.english_name(),
            best.net_virupa
        ));
    }
    if let Some(worst) = planets.iter().min_by(|a, b| {
        a.net_virupa
            .partial_cmp(&b.net_virupa)
            .unwrap_or(std::cmp::Ordering::Equal)
    }) {
        if worst.net_virupa < 0.0 {
            insights.push(format!(
                "{} is the most afflicted by aspect ({:+.1} virupa net)",
                worst.graha.english_name(),
                worst.net_virupa
            ));
        }
    }
    for graha in ALL_GRAHAS {
        if let Some(p) = chart.position(graha) {
            if p.combust {
                insights.push(format!(
                    "{} is combust and its aspectual gains are diminished",
                    graha.english_name()
                ));
            }
        }
    }
    for h in houses {
        if h.influence == HouseInfluence::Malefic && h.malefic_count >= 3 {
            insights.push(format!(
                "House {} carries heavy malefic influence ({} malefic aspects)",
                h.house, h.malefic_count
            ));
        }
    }
    insights.truncate(5);
    insights
}

fn drig_recommendations(planets: &[PlanetDrigBala]) -> Vec<String> {
    let mut recs = Vec::new();
    for p in planets {
        if p.net_virupa < -10.0 {
            recs.push(format!(
                "Strengthen {} through its remedial practices; it carries a net malefic aspect load",
                p.graha.english_name()
            ));
        }
    }
    recs.truncate(5);
    recs
}
