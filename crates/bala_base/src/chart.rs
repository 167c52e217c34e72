//! Resolved birth chart consumed by the strength calculators.
//!
//! The chart arrives fully computed from an external ephemeris collaborator:
//! sidereal longitudes, house assignments, motion states, and combustion
//! flags are all trusted as given, but shapes and ranges are validated
//! before any computation starts.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::BalaError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::rashi::{Rashi, rashi_of};

/// Motion state of a planet at chart time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    Direct,
    Retrograde,
    Stationary,
}

/// One planet's resolved position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    /// House number, 1..=12, under the chart builder's house system.
    pub house: u8,
    pub motion: Motion,
    /// Signed daily motion in degrees; negative while retrograde.
    pub speed_deg_per_day: f64,
    /// True when the planet sits close enough to the Sun to be combust.
    pub combust: bool,
}

impl PlanetPosition {
    /// Rashi occupied by this position.
    pub fn rashi(&self) -> Rashi {
        rashi_of(self.longitude)
    }
}

/// A fully resolved birth chart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Ascendant sidereal longitude in [0, 360).
    pub ascendant: f64,
    /// Birth instant with its UTC offset.
    pub birth_time: DateTime<FixedOffset>,
    /// Exactly one position per graha, any order.
    pub positions: Vec<PlanetPosition>,
    /// Twelve house-cusp longitudes in [0, 360), cusp of house 1 first.
    pub house_cusps: Vec<f64>,
}

fn check_angle(context: &str, degrees: f64) -> Result<(), BalaError> {
    if (0.0..360.0).contains(&degrees) && degrees.is_finite() {
        Ok(())
    } else {
        Err(BalaError::InvalidAngle {
            context: context.to_string(),
            degrees,
        })
    }
}

impl Chart {
    /// Validate chart shape and ranges. Called by every compute entry point
    /// before any arithmetic.
    pub fn validate(&self) -> Result<(), BalaError> {
        if self.house_cusps.len() != 12 {
            return Err(BalaError::IncompleteChart(format!(
                "expected 12 house cusps, got {}",
                self.house_cusps.len()
            )));
        }

        check_angle("ascendant", self.ascendant)?;
        for (i, cusp) in self.house_cusps.iter().enumerate() {
            check_angle(&format!("cusp of house {}", i + 1), *cusp)?;
        }

        for graha in ALL_GRAHAS {
            let count = self.positions.iter().filter(|p| p.graha == graha).count();
            if count != 1 {
                return Err(BalaError::IncompleteChart(format!(
                    "expected exactly one position for {}, got {count}",
                    graha.name()
                )));
            }
        }

        for pos in &self.positions {
            check_angle(&format!("{} longitude", pos.graha.name()), pos.longitude)?;
            if !(1..=12).contains(&pos.house) {
                return Err(BalaError::IncompleteChart(format!(
                    "{} house {} not in 1..=12",
                    pos.graha.name(),
                    pos.house
                )));
            }
        }

        Ok(())
    }

    /// Position of a graha. The chart must have been validated.
    pub fn position(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }

    /// Moon's elongation ahead of the Sun in [0, 360).
    pub fn lunar_elongation(&self) -> Option<f64> {
        let sun = self.position(Graha::Surya)?;
        let moon = self.position(Graha::Chandra)?;
        Some(crate::util::arc_forward(sun.longitude, moon.longitude))
    }
}
