//! Aggregation of the six components and classification of the result.
//!
//! Every planet's six components are summed in virupa, converted to rupas,
//! compared against its classical minimum, and rated on a five-level
//! scale. Strongest and weakest planets are chosen by absolute rupas with
//! the natural-strength rank as the deterministic tie-break.

use serde::Serialize;

use bala_base::chart::{Chart, Motion};
use bala_base::error::BalaError;
use bala_base::graha::{ALL_GRAHAS, Graha};

use crate::chesta::chesta_bala;
use crate::context::TemporalContext;
use crate::dig::dig_bala;
use crate::drik::{aspect_matrix, net_drik_virupa};
use crate::kala::{kala_bala, yuddha_transfers};
use crate::naisargika::{naisargika_bala, naisargika_rank};
use crate::sthana::sthana_bala;

/// Virupas per rupa.
pub const VIRUPA_PER_RUPA: f64 = 60.0;

/// Five-level strength rating on percentage of the required minimum.
/// Boundaries are half-open; exactly 80 rates Good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthRating {
    VeryWeak,
    Weak,
    Moderate,
    Good,
    Excellent,
}

impl StrengthRating {
    /// Rating for a percentage-of-required value.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Excellent
        } else if percentage >= 80.0 {
            Self::Good
        } else if percentage >= 60.0 {
            Self::Moderate
        } else if percentage >= 40.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very Weak",
        }
    }
}

/// One named strength contribution in virupa, with the documented maximum
/// for percentage displays. Components may legitimately be zero or, for
/// the aspectual net, negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalaComponent {
    pub name: &'static str,
    pub virupa: f64,
    pub max_virupa: f64,
}

/// Required total strength in rupas. Nodes carry a conventional 5.
pub const fn required_rupa(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 5.0,
        Graha::Chandra => 6.0,
        Graha::Mangal => 5.0,
        Graha::Buddh => 7.0,
        Graha::Guru => 6.5,
        Graha::Shukra => 5.5,
        Graha::Shani => 5.0,
        Graha::Rahu | Graha::Ketu => 5.0,
    }
}

/// Per-planet aggregate of the six components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetBala {
    pub graha: Graha,
    pub sthana: BalaComponent,
    pub dig: BalaComponent,
    pub kala: BalaComponent,
    pub chesta: BalaComponent,
    pub naisargika: BalaComponent,
    pub drik: BalaComponent,
    pub total_virupa: f64,
    pub total_rupa: f64,
    pub required_rupa: f64,
    pub percentage_of_required: f64,
    pub rating: StrengthRating,
    pub interpretation: String,
}

/// Full six-fold strength analysis of one chart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadbalaAnalysis {
    pub planets: Vec<PlanetBala>,
    pub strongest: Graha,
    pub weakest: Graha,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ShadbalaAnalysis {
    /// Aggregate for one graha.
    pub fn planet(&self, graha: Graha) -> Option<&PlanetBala> {
        self.planets.iter().find(|p| p.graha == graha)
    }
}

fn interpretation(graha: Graha, rating: StrengthRating) -> String {
    let name = graha.english_name();
    match rating {
        StrengthRating::Excellent => format!(
            "{name} exceeds its required strength and delivers its significations fully"
        ),
        StrengthRating::Good => {
            format!("{name} is close to full strength and functions reliably")
        }
        StrengthRating::Moderate => {
            format!("{name} holds moderate strength with mixed results")
        }
        StrengthRating::Weak => {
            format!("{name} falls short of its required strength and needs support")
        }
        StrengthRating::VeryWeak => {
            format!("{name} is severely underpowered in this chart")
        }
    }
}

/// Build the full Shadbala analysis. The chart must already be validated.
pub fn shadbala_analysis(
    chart: &Chart,
    ctx: &TemporalContext,
) -> Result<ShadbalaAnalysis, BalaError> {
    let yuddha = yuddha_transfers(chart)?;
    let matrix = aspect_matrix(chart);

    let mut planets = Vec::with_capacity(9);
    for graha in ALL_GRAHAS {
        let pos = chart.position(graha).ok_or_else(|| {
            BalaError::IncompleteChart(format!("missing {}", graha.name()))
        })?;

        let sthana = sthana_bala(chart, graha);
        let dig = dig_bala(graha, pos.house);
        let kala = if graha.is_node() {
            crate::kala::KalaBala {
                nathonnatha: 0.0,
                paksha: 0.0,
                tribhaga: 0.0,
                hora: 0.0,
                ayana: 0.0,
                yuddha: 0.0,
                total: 0.0,
            }
        } else {
            kala_bala(chart, graha, ctx, &yuddha)
        };
        let chesta = chesta_bala(pos);
        let nais = naisargika_bala(graha);
        let drik = net_drik_virupa(&matrix, graha);

        let total_virupa = sthana.total + dig + kala.total + chesta + nais + drik;
        let total_rupa = total_virupa / VIRUPA_PER_RUPA;
        let required = required_rupa(graha);
        let percentage = total_rupa / required * 100.0;
        let rating = StrengthRating::from_percentage(percentage);

        planets.push(PlanetBala {
            graha,
            sthana: BalaComponent {
                name: "Sthana",
                virupa: sthana.total,
                max_virupa: 375.0,
            },
            dig: BalaComponent {
                name: "Dig",
                virupa: dig,
                max_virupa: 60.0,
            },
            kala: BalaComponent {
                name: "Kala",
                virupa: kala.total,
                max_virupa: 330.0,
            },
            chesta: BalaComponent {
                name: "Chesta",
                virupa: chesta,
                max_virupa: 60.0,
            },
            naisargika: BalaComponent {
                name: "Naisargika",
                virupa: nais,
                max_virupa: 60.0,
            },
            drik: BalaComponent {
                name: "Drik",
                virupa: drik,
                max_virupa: 60.0,
            },
            total_virupa,
            total_rupa,
            required_rupa: required,
            percentage_of_required: percentage,
            rating,
            interpretation: interpretation(graha, rating),
        });
    }

    let strongest = select_extreme(&planets, true);
    let weakest = select_extreme(&planets, false);
    let key_insights = insights(chart, &planets, strongest, weakest);
    let recommendations = recommendations(&planets);

    Ok(ShadbalaAnalysis {
        planets,
        strongest,
        weakest,
        key_insights,
        recommendations,
    })
}

/// Pick the strongest or weakest planet by total rupas, breaking ties by
/// natural-strength rank.
fn select_extreme(planets: &[PlanetBala], strongest: bool) -> Graha {
    let mut best = &planets[0];
    for p in &planets[1..] {
        let better = if strongest {
            p.total_rupa > best.total_rupa
                || (p.total_rupa == best.total_rupa
                    && naisargika_rank(p.graha) < naisargika_rank(best.graha))
        } else {
            p.total_rupa < best.total_rupa
                || (p.total_rupa == best.total_rupa
                    && naisargika_rank(p.graha) > naisargika_rank(best.graha))
        };
        if better {
            best = p;
        }
    }
    best.graha
}

fn insights(
    chart: &Chart,
    planets: &[PlanetBala],
    strongest: Graha,
    weakest: Graha,
) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(p) = planets.iter().find(|p| p.graha == strongest) {
        out.push(format!(
            "{} is the strongest planet at {:.2} rupas ({:.0}% of required)",
            strongest.english_name(),
            p.total_rupa,
            p.percentage_of_required
        ));
    }
    if let Some(p) = planets.iter().find(|p| p.graha == weakest) {
        out.push(format!(
            "{} is the weakest planet at {:.2} rupas ({:.0}% of required)",
            weakest.english_name(),
            p.total_rupa,
            p.percentage_of_required
        ));
    }
    for p in planets {
        if let Some(pos) = chart.position(p.graha) {
            if pos.combust {
                out.push(format!(
                    "{} is combust, which tempers its effective strength",
                    p.graha.english_name()
                ));
            }
            if pos.motion == Motion::Retrograde && !p.graha.is_node() {
                out.push(format!(
                    "{} is retrograde, intensifying its motional strength",
                    p.graha.english_name()
                ));
            }
        }
    }
    let excellent = planets
        .iter()
        .filter(|p| p.rating == StrengthRating::Excellent)
        .count();
    if excellent >= 3 {
        out.push(format!(
            "{excellent} planets exceed their required strength, an unusually fortified chart"
        ));
    }
    out.truncate(5);
    out
}

fn recommendations(planets: &[PlanetBala]) -> Vec<String> {
    let mut out = Vec::new();
    for p in planets {
        match p.rating {
            StrengthRating::VeryWeak => out.push(format!(
                "Prioritize remedial measures for {}; it is far below its required strength",
                p.graha.english_name()
            )),
            StrengthRating::Weak => out.push(format!(
                "Support {} through its gemstone, mantra, or charitable remedies",
                p.graha.english_name()
            )),
            _ => {}
        }
    }
    if out.is_empty() {
        out.push(
            "All planets meet workable strength; focus on the strongest planet's significations"
                .to_string(),
        );
    }
    out.truncate(5);
    out
}
