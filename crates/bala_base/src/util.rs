//! Angular math helpers shared by the strength calculators.

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest angular separation between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Directed arc from `from` to `to` going forward through the zodiac,
/// in [0, 360).
pub fn arc_forward(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

/// House distance counted inclusively from `from_house` to `to_house`,
/// in 1..=12. A planet is 1 house from itself.
pub fn house_distance(from_house: u8, to_house: u8) -> u8 {
    let diff = to_house as i16 - from_house as i16;
    let d = if diff < 0 { diff + 12 } else { diff };
    d as u8 + 1
}

/// Clamp a virupa score to the canonical [0, 60] band.
pub fn clamp_virupa(v: f64) -> f64 {
    v.clamp(0.0, 60.0)
}
