//! Error taxonomy for chart validation and strength computation.

use thiserror::Error;

use crate::graha::Graha;

/// Failures surfaced by chart validation and the strength calculators.
///
/// All of these indicate contract violations by the chart builder, never
/// normal operation; callers should treat them as bugs upstream rather
/// than recoverable conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalaError {
    /// The chart is missing required planet positions or house cusps.
    #[error("incomplete chart: {0}")]
    IncompleteChart(String),

    /// A longitude fell outside [0, 360) and was not silently clamped.
    #[error("invalid angle for {context}: {degrees} not in [0, 360)")]
    InvalidAngle { context: String, degrees: f64 },

    /// A planetary war between two coincident planets could not be
    /// resolved by brightness or mean-motion rank.
    #[error("unresolvable planetary war between {0:?} and {1:?}")]
    AmbiguousWarTie(Graha, Graha),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = BalaError::IncompleteChart("missing Shani".into());
        assert_eq!(e.to_string(), "incomplete chart: missing Shani");

        let e = BalaError::InvalidAngle {
            context: "Surya longitude".into(),
            degrees: 361.5,
        };
        assert!(e.to_string().contains("361.5"));

        let e = BalaError::AmbiguousWarTie(Graha::Buddh, Graha::Shukra);
        assert!(e.to_string().contains("Buddh"));
    }
}
