//! Temporal context derived from the as-of instant and the chart.
//!
//! All clock-derived state used by the temporal calculators is resolved
//! here once: day/night flag, fraction through the day or night segment,
//! weekday lord, hora lord, tribhaga lord, and the lunar phase quantities
//! taken from the chart's Sun and Moon.
//!
//! Day runs 06:00 to 18:00 local time. Sunrise computation belongs to the
//! ephemeris collaborator, not this engine.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};
use serde::Serialize;

use bala_base::chart::Chart;
use bala_base::graha::Graha;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paksha {
    /// Waxing, elongation in [0, 180).
    Shukla,
    /// Waning, elongation in [180, 360).
    Krishna,
}

/// Clock and lunar state shared by the Kala sub-calculators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemporalContext {
    pub is_daytime: bool,
    /// Fraction elapsed through the current day or night segment, [0, 1).
    pub segment_fraction: f64,
    /// Minutes since local midnight, [0, 1440).
    pub minutes_from_midnight: f64,
    pub weekday_lord: Graha,
    pub hora_lord: Graha,
    pub tribhaga_lord: Graha,
    /// Moon's elongation ahead of the Sun, [0, 360).
    pub lunar_elongation: f64,
    pub paksha: Paksha,
    /// Tithi number 1..=30.
    pub tithi: u8,
}

/// Hora succession order, each hour passing to the next lord in sequence.
const HORA_SEQUENCE: [Graha; 7] = [
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
];

/// Lord of a weekday.
pub const fn weekday_lord(weekday: Weekday) -> Graha {
    match weekday {
        Weekday::Sun => Graha::Surya,
        Weekday::Mon => Graha::Chandra,
        Weekday::Tue => Graha::Mangal,
        Weekday::Wed => Graha::Buddh,
        Weekday::Thu => Graha::Guru,
        Weekday::Fri => Graha::Shukra,
        Weekday::Sat => Graha::Shani,
    }
}

/// Hora lord for an hour of the day. The first hora of the day (06:00)
/// belongs to the weekday lord; each following hour advances through the
/// succession order. Hours before 06:00 count from the previous day start.
pub fn hora_lord(day_lord: Graha, hour: u32) -> Graha {
    let start = HORA_SEQUENCE
        .iter()
        .position(|g| *g == day_lord)
        .unwrap_or(0);
    let horas_since_start = if hour >= 6 { hour - 6 } else { hour + 18 };
    HORA_SEQUENCE[(start + horas_since_start as usize) % 7]
}

/// Ruler of the current one-third segment of day or night.
///
/// Day thirds are ruled by Mercury, Sun, Saturn; night thirds by Moon,
/// Venus, Mars.
pub fn tribhaga_lord(is_daytime: bool, segment_fraction: f64) -> Graha {
    let third = if segment_fraction < 1.0 / 3.0 {
        0
    } else if segment_fraction < 2.0 / 3.0 {
        1
    } else {
        2
    };
    if is_daytime {
        [Graha::Buddh, Graha::Surya, Graha::Shani][third]
    } else {
        [Graha::Chandra, Graha::Shukra, Graha::Mangal][third]
    }
}

impl TemporalContext {
    /// Resolve the temporal context for a chart at an explicit instant.
    /// The lunar quantities come from the chart positions; only the clock
    /// state follows `as_of`.
    pub fn resolve(chart: &Chart, as_of: DateTime<FixedOffset>) -> Self {
        let minutes = as_of.hour() as f64 * 60.0 + as_of.minute() as f64 + as_of.second() as f64 / 60.0;
        let is_daytime = (360.0..1080.0).contains(&minutes);

        // Fraction through the 12-hour day or night segment. Night wraps
        // through midnight, counted from 18:00.
        let segment_fraction = if is_daytime {
            (minutes - 360.0) / 720.0
        } else if minutes >= 1080.0 {
            (minutes - 1080.0) / 720.0
        } else {
            (minutes + 360.0) / 720.0
        };

        let day_lord = weekday_lord(as_of.weekday());
        let hora = hora_lord(day_lord, as_of.hour());
        let tribhaga = tribhaga_lord(is_daytime, segment_fraction);

        let elongation = chart.lunar_elongation().unwrap_or(0.0);
        let paksha = if elongation < 180.0 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        };
        let tithi = ((elongation / 12.0) as u8 + 1).min(30);

        Self {
            is_daytime,
            segment_fraction,
            minutes_from_midnight: minutes,
            weekday_lord: day_lord,
            hora_lord: hora,
            tribhaga_lord: tribhaga,
            lunar_elongation: elongation,
            paksha,
            tithi,
        }
    }
}
