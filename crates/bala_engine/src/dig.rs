//! Dig Bala (directional strength).
//!
//! Each planet has one house of maximum directional strength and scores
//! zero in the opposite house, interpolating linearly in house distance.
//! Rahu/Ketu carry no directional assignment and score zero.

use bala_base::graha::Graha;

/// House of maximum directional strength. None for the nodes.
///
/// Sun and Mars in the 10th, Moon and Venus in the 4th, Mercury and
/// Jupiter in the 1st, Saturn in the 7th.
pub const fn dig_bala_house(graha: Graha) -> Option<u8> {
    match graha {
        Graha::Surya | Graha::Mangal => Some(10),
        Graha::Chandra | Graha::Shukra => Some(4),
        Graha::Buddh | Graha::Guru => Some(1),
        Graha::Shani => Some(7),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Dig Bala: 60 * (1 - distance / 6), with distance the shorter way
/// around the chart from the house of maximum strength.
pub fn dig_bala(graha: Graha, house: u8) -> f64 {
    let max_house = match dig_bala_house(graha) {
        Some(h) => h,
        None => return 0.0,
    };
    if !(1..=12).contains(&house) {
        return 0.0;
    }
    let diff = (house as i16 - max_house as i16).unsigned_abs();
    let dist = diff.min(12 - diff).min(6);
    60.0 * (1.0 - dist as f64 / 6.0)
}
