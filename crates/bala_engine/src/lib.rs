//! Shadbala engine: six-fold planetary strength from a resolved chart.
//!
//! The engine takes a fully resolved birth chart plus the timestamp it was
//! cast for and produces:
//! - The full six-component Shadbala analysis ([`compute_shadbala`])
//! - A standalone aspectual-strength report ([`compute_drig_bala`])
//! - A standalone temporal-strength report ([`compute_kala_bala`])
//!
//! All scores are in virupa (60 virupa = 1 rupa). Entry points validate the
//! chart before computing; downstream functions assume a valid chart.

pub mod analysis;
pub mod chesta;
pub mod context;
pub mod dig;
pub mod drik;
pub mod kala;
pub mod naisargika;
pub mod sthana;

use chrono::{DateTime, FixedOffset};
use log::debug;

use bala_base::chart::Chart;
use bala_base::error::BalaError;

pub use analysis::{
    BalaComponent, PlanetBala, ShadbalaAnalysis, StrengthRating, required_rupa,
};
pub use chesta::chesta_bala;
pub use context::{Paksha, TemporalContext};
pub use dig::dig_bala;
pub use drik::{DrigBalaAnalysis, HouseAspects, PlanetDrigBala, drig_analysis};
pub use kala::{KalaBala, KalaBalaAnalysis, PlanetKalaBala, kala_bala};
pub use naisargika::naisargika_bala;
pub use sthana::{SthanaBala, sthana_bala};

/// Compute the full six-fold strength analysis for every graha.
pub fn compute_shadbala(
    chart: &Chart,
    as_of: DateTime<FixedOffset>,
) -> Result<ShadbalaAnalysis, BalaError> {
    chart.validate()?;
    let ctx = TemporalContext::resolve(chart, as_of);
    debug!(
        "computing shadbala: daytime={} hora_lord={}",
        ctx.is_daytime,
        ctx.hora_lord.name()
    );
    analysis::shadbala_analysis(chart, &ctx)
}

/// Compute the standalone aspectual-strength (Drig Bala) report.
pub fn compute_drig_bala(chart: &Chart) -> Result<DrigBalaAnalysis, BalaError> {
    chart.validate()?;
    debug!("computing drig bala for {} positions", chart.positions.len());
    drik::drig_analysis(chart)
}

/// Compute the standalone temporal-strength (Kala Bala) report.
pub fn compute_kala_bala(
    chart: &Chart,
    as_of: DateTime<FixedOffset>,
) -> Result<KalaBalaAnalysis, BalaError> {
    chart.validate()?;
    let ctx = TemporalContext::resolve(chart, as_of);
    debug!(
        "computing kala bala: tithi={} tribhaga_lord={}",
        ctx.tithi,
        ctx.tribhaga_lord.name()
    );
    kala::kala_analysis(chart, &ctx)
}
