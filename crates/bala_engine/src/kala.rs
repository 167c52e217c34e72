//! Kala Bala (temporal strength).
//!
//! Six sub-scores per planet: nathonnatha (day/night elevation), paksha
//! (lunar fortnight), tribhaga (day/night third ruler), hora (planetary
//! hour lord), ayana (declination from longitude), and yuddha (planetary
//! war transfer). All but yuddha live in [0, 60]; yuddha is a signed
//! zero-sum transfer of 30 virupa per war.
//!
//! The standalone Kala analysis additionally rates each planet against
//! its classical temporal minimum and snapshots the resolved context.

use serde::Serialize;

use bala_base::chart::Chart;
use bala_base::error::BalaError;
use bala_base::graha::{ALL_GRAHAS, Graha, TARA_GRAHAS};
use bala_base::relationships::{BeneficNature, moon_benefic_nature, natural_benefic_malefic};
use bala_base::util::{angular_separation, clamp_virupa, normalize_360};

use crate::analysis::StrengthRating;
use crate::context::TemporalContext;

/// Obliquity of the ecliptic used for the ayana declination estimate.
const OBLIQUITY_DEG: f64 = 23.44;

/// Contested virupa per planetary war.
pub const YUDDHA_TRANSFER: f64 = 30.0;

/// Kala sub-scores in virupa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KalaBala {
    pub nathonnatha: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub hora: f64,
    pub ayana: f64,
    pub yuddha: f64,
    pub total: f64,
}

/// Nathonnatha Bala: a triangular wave over the 24-hour day. Diurnal
/// planets (Sun, Jupiter, Venus) peak at noon, nocturnal planets (Moon,
/// Mars, Saturn) at midnight. Mercury is always at full strength.
pub fn nathonnatha_bala(graha: Graha, minutes_from_midnight: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    if graha == Graha::Buddh {
        return 60.0;
    }
    let from_noon = (minutes_from_midnight - 720.0).abs();
    let diurnal_score = (720.0 - from_noon) / 720.0 * 60.0;
    match graha {
        Graha::Surya | Graha::Guru | Graha::Shukra => diurnal_score,
        Graha::Chandra | Graha::Mangal | Graha::Shani => 60.0 - diurnal_score,
        _ => 0.0,
    }
}

/// Paksha Bala: benefics grow with the waxing Moon, malefics with the
/// waning. The Moon always scores on the benefic curve; Mercury follows
/// the Moon's phase-dependent nature.
pub fn paksha_bala(graha: Graha, lunar_elongation: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let elong = normalize_360(lunar_elongation);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    let benefic_score = phase / 3.0;

    let nature = match graha {
        Graha::Chandra => BeneficNature::Benefic,
        Graha::Buddh => moon_benefic_nature(elong),
        _ => natural_benefic_malefic(graha),
    };
    match nature {
        BeneficNature::Benefic => benefic_score,
        BeneficNature::Malefic => 60.0 - benefic_score,
    }
}

/// Tribhaga Bala: the ruler of the current day or night third gets the
/// full 60, everyone else nothing.
pub fn tribhaga_bala(graha: Graha, tribhaga_lord: Graha) -> f64 {
    if !graha.is_node() && graha == tribhaga_lord {
        60.0
    } else {
        0.0
    }
}

/// Hora Bala: the planetary hour lord gets the full 60.
pub fn hora_bala(graha: Graha, hora_lord: Graha) -> f64 {
    if !graha.is_node() && graha == hora_lord {
        60.0
    } else {
        0.0
    }
}

/// Declination estimated from sidereal longitude alone. The ayanamsa
/// correction is upstream's concern; the error this introduces stays
/// within the approximation already accepted for ayana bala.
fn declination_deg(longitude: f64) -> f64 {
    (longitude.to_radians().sin() * OBLIQUITY_DEG.to_radians().sin())
        .asin()
        .to_degrees()
}

/// Ayana Bala: northern-course planets (Sun, Mars, Jupiter) strengthen
/// with northern declination, southern-course planets (Moon, Venus,
/// Saturn) with southern. Mercury holds the middle at 30.
pub fn ayana_bala(graha: Graha, longitude: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    if graha == Graha::Buddh {
        return 30.0;
    }
    let norm = declination_deg(normalize_360(longitude)) / OBLIQUITY_DEG * 30.0;
    let score = match graha {
        Graha::Surya | Graha::Mangal | Graha::Guru => 30.0 + norm,
        Graha::Chandra | Graha::Shukra | Graha::Shani => 30.0 - norm,
        _ => 30.0,
    };
    clamp_virupa(score)
}

/// Decide the winner of a planetary war between two distinct combatants.
///
/// Brightness order wins outright (Venus > Jupiter > Mercury > Mars >
/// Saturn); if neither ranks, the lower mean daily motion wins. An
/// unresolvable pairing is a named error rather than a silent default.
pub fn yuddha_winner(a: Graha, b: Graha) -> Result<Graha, BalaError> {
    match (a.war_brightness_rank(), b.war_brightness_rank()) {
        (Some(ra), Some(rb)) if ra < rb => return Ok(a),
        (Some(ra), Some(rb)) if rb < ra => return Ok(b),
        (Some(_), None) => return Ok(a),
        (None, Some(_)) => return Ok(b),
        _ => {}
    }
    match (a.mean_daily_motion(), b.mean_daily_motion()) {
        (Some(ma), Some(mb)) if ma < mb => Ok(a),
        (Some(ma), Some(mb)) if mb < ma => Ok(b),
        _ => Err(BalaError::AmbiguousWarTie(a, b)),
    }
}

/// Yuddha transfers for all nine grahas, indexed by `Graha::index()`.
/// Each war within 1 degree moves 30 virupa from loser to winner; the
/// transfers sum to zero across the chart.
pub fn yuddha_transfers(chart: &Chart) -> Result<[f64; 9], BalaError> {
    let mut transfers = [0.0; 9];
    for (i, a) in TARA_GRAHAS.iter().enumerate() {
        for b in TARA_GRAHAS.iter().skip(i + 1) {
            let (pa, pb) = match (chart.position(*a), chart.position(*b)) {
                (Some(pa), Some(pb)) => (pa, pb),
                _ => continue,
            };
            if angular_separation(pa.longitude, pb.longitude) > 1.0 {
                continue;
            }
            let winner = yuddha_winner(*a, *b)?;
            let loser = if winner == *a { *b } else { *a };
            transfers[winner.index() as usize] += YUDDHA_TRANSFER;
            transfers[loser.index() as usize] -= YUDDHA_TRANSFER;
        }
    }
    Ok(transfers)
}

/// Kala breakdown for one planet given resolved context and war transfers.
pub fn kala_bala(
    chart: &Chart,
    graha: Graha,
    ctx: &TemporalContext,
    yuddha: &[f64; 9],
) -> KalaBala {
    let longitude = chart.position(graha).map(|p| p.longitude).unwrap_or(0.0);
    let n = nathonnatha_bala(graha, ctx.minutes_from_midnight);
    let p = paksha_bala(graha, ctx.lunar_elongation);
    let t = tribhaga_bala(graha, ctx.tribhaga_lord);
    let h = hora_bala(graha, ctx.hora_lord);
    let a = ayana_bala(graha, longitude);
    let y = yuddha[graha.index() as usize];
    KalaBala {
        nathonnatha: n,
        paksha: p,
        tribhaga: t,
        hora: h,
        ayana: a,
        yuddha: y,
        total: n + p + t + h + a + y,
    }
}

/// Classical temporal minimum in virupa. Nodes have no temporal minimum.
pub const fn required_kala_virupa(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 164.0,
        Graha::Chandra => 133.0,
        Graha::Mangal => 96.0,
        Graha::Buddh => 165.0,
        Graha::Guru => 165.0,
        Graha::Shukra => 133.0,
        Graha::Shani => 96.0,
        Graha::Rahu | Graha::Ketu => 0.0,
    }
}

/// Per-planet entry of the standalone Kala analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetKalaBala {
    pub graha: Graha,
    pub breakdown: KalaBala,
    pub required_virupa: f64,
    pub percentage_of_required: f64,
    pub rating: StrengthRating,
}

/// Standalone temporal-strength analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KalaBalaAnalysis {
    pub context: TemporalContext,
    pub planets: Vec<PlanetKalaBala>,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Build the standalone Kala analysis for the seven classical planets.
pub fn kala_analysis(chart: &Chart, ctx: &TemporalContext) -> Result<KalaBalaAnalysis, BalaError> {
    let yuddha = yuddha_transfers(chart)?;
    let mut planets = Vec::with_capacity(7);
    for graha in ALL_GRAHAS.iter().filter(|g| !g.is_node()) {
        let breakdown = kala_bala(chart, *graha, ctx, &yuddha);
        let required = required_kala_virupa(*graha);
        let percentage = if required > 0.0 {
            breakdown.total / required * 100.0
        } else {
            0.0
        };
        planets.push(PlanetKalaBala {
            graha: *graha,
            breakdown,
            required_virupa: required,
            percentage_of_required: percentage,
            rating: StrengthRating::from_percentage(percentage),
        });
    }
    let key_insights = kala_insights(ctx, &planets);
    let recommendations = kala_recommendations(&planets);
    Ok(KalaBalaAnalysis {
        context: *ctx,
        planets,
        key_insights,
        recommendations,
    })
}

fn kala_insights(ctx: &TemporalContext, planets: &[PlanetKalaBala]) -> Vec<String> {
    let mut insights = Vec::new();
    insights.push(format!(
        "{} hora, ruled by {}",
        if ctx.is_daytime { "Daytime" } else { "Nighttime" },
        ctx.hora_lord.english_name()
    ));
    insights.push(format!(
        "{} paksha, tithi {}",
        match ctx.paksha {
            crate::context::Paksha::Shukla => "Waxing",
            crate::context::Paksha::Krishna => "Waning",
        },
        ctx.tithi
    ));
    if let Some(best) = planets.iter().max_by(|a, b| {
        a.percentage_of_required
            .partial_cmp(&b.percentage_of_required)
            .unwrap_or(std::cmp::Ordering::Equal)
    }) {
        insights.push(format!(
            "{} holds the strongest temporal position at {:.0}% of its minimum",
            best.graha.english_name(),
            best.percentage_of_required
        ));
    }
    for p in planets {
        if p.breakdown.yuddha < 0.0 {
            insights.push(format!(
                "{} is weakened by a planetary war",
                p.graha.english_name()
            ));
        }
    }
    insights.truncate(5);
    insights
}

fn kala_recommendations(planets: &[PlanetKalaBala]) -> Vec<String> {
    let mut recs = Vec::new();
    for p in planets {
        if matches!(
            p.rating,
            StrengthRating::Weak | StrengthRating::VeryWeak
        ) {
            recs.push(format!(
                "Favor activities ruled by {} during its own hora to offset its weak temporal standing",
                p.graha.english_name()
            ));
        }
    }
    recs.truncate(5);
    recs
}
