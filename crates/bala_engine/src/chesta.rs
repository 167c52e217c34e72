//! Chesta Bala (motional strength).
//!
//! Defined for Mars, Mercury, Jupiter, Venus, and Saturn from daily motion
//! relative to the mean rate: slower than mean strengthens, faster weakens,
//! and retrograde state adds a fixed bonus on top. The luminaries never
//! retrograde and take a fixed substitute value; the nodes are excluded.

use bala_base::chart::{Motion, PlanetPosition};
use bala_base::graha::Graha;
use bala_base::util::clamp_virupa;

/// Fixed substitute for Sun and Moon.
pub const LUMINARY_CHESTA: f64 = 0.0;

/// Bonus added while retrograde, before the 60 cap.
pub const RETROGRADE_BONUS: f64 = 15.0;

/// Chesta Bala in [0, 60].
///
/// Monotonic in (mean - speed): a planet at its mean speed scores 30,
/// stationary scores 60, and direct motion at twice the mean scores 0.
pub fn chesta_bala(position: &PlanetPosition) -> f64 {
    let graha = position.graha;
    if graha.is_node() {
        return 0.0;
    }
    if matches!(graha, Graha::Surya | Graha::Chandra) {
        return LUMINARY_CHESTA;
    }
    let mean = match graha.mean_daily_motion() {
        Some(m) => m,
        None => return 0.0,
    };

    let base = 30.0 + 30.0 * (mean - position.speed_deg_per_day) / mean;
    let base = clamp_virupa(base);

    let with_bonus = if position.motion == Motion::Retrograde {
        base + RETROGRADE_BONUS
    } else {
        base
    };
    clamp_virupa(with_bonus)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn pos(graha: Graha, speed: f64, motion: Motion) -> PlanetPosition {
        PlanetPosition {
            graha,
            longitude: 100.0,
            house: 1,
            motion,
            speed_deg_per_day: speed,
            combust: false,
        }
    }

    #[test]
    fn mean_speed_scores_thirty() {
        let mean = Graha::Mangal.mean_daily_motion().unwrap();
        let b = chesta_bala(&pos(Graha::Mangal, mean, Motion::Direct));
        assert!((b - 30.0).abs() < EPS);
    }

    #[test]
    fn stationary_scores_sixty() {
        let b = chesta_bala(&pos(Graha::Guru, 0.0, Motion::Stationary));
        assert!((b - 60.0).abs() < EPS);
    }

    #[test]
    fn fast_direct_weakens() {
        let mean = Graha::Buddh.mean_daily_motion().unwrap();
        let slow = chesta_bala(&pos(Graha::Buddh, mean * 0.5, Motion::Direct));
        let fast = chesta_bala(&pos(Graha::Buddh, mean * 1.5, Motion::Direct));
        assert!(slow > fast);
        // Twice the mean bottoms out at zero.
        let b = chesta_bala(&pos(Graha::Buddh, mean * 2.0, Motion::Direct));
        assert!(b.abs() < EPS);
    }

    #[test]
    fn retrograde_bonus_capped() {
        // Negative speed already saturates the base at 60; the bonus
        // cannot push past the cap.
        let b = chesta_bala(&pos(Graha::Shani, -0.05, Motion::Retrograde));
        assert!((b - 60.0).abs() < EPS);
    }

    #[test]
    fn retrograde_bonus_applies_below_cap() {
        let mean = Graha::Shukra.mean_daily_motion().unwrap();
        let direct = chesta_bala(&pos(Graha::Shukra, mean, Motion::Direct));
        let retro = chesta_bala(&pos(Graha::Shukra, mean, Motion::Retrograde));
        assert!((retro - direct - RETROGRADE_BONUS).abs() < EPS);
    }

    #[test]
    fn luminaries_fixed() {
        assert!(chesta_bala(&pos(Graha::Surya, 1.0, Motion::Direct)).abs() < EPS);
        assert!(chesta_bala(&pos(Graha::Chandra, 13.0, Motion::Direct)).abs() < EPS);
    }

    #[test]
    fn nodes_excluded() {
        assert!(chesta_bala(&pos(Graha::Rahu, -0.05, Motion::Retrograde)).abs() < EPS);
    }
}
