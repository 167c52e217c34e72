//! Naisargika Bala (natural strength).
//!
//! Fixed, chart-independent constants per BPHS. Also supplies the
//! natural-strength rank used as the deterministic tie-break when two
//! planets have equal total rupas.

use bala_base::graha::Graha;

/// Natural strength in virupa: Sun 60, Moon 51.43, Venus 42.86,
/// Jupiter 34.29, Mercury 25.71, Mars 17.14, Saturn 8.57. Nodes 0.
pub const fn naisargika_bala(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 60.0,
        Graha::Chandra => 51.43,
        Graha::Shukra => 42.86,
        Graha::Guru => 34.29,
        Graha::Buddh => 25.71,
        Graha::Mangal => 17.14,
        Graha::Shani => 8.57,
        Graha::Rahu | Graha::Ketu => 0.0,
    }
}

/// Rank by natural strength, 0 strongest. Nodes trail the seven in their
/// traditional order.
pub const fn naisargika_rank(graha: Graha) -> u8 {
    match graha {
        Graha::Surya => 0,
        Graha::Chandra => 1,
        Graha::Shukra => 2,
        Graha::Guru => 3,
        Graha::Buddh => 4,
        Graha::Mangal => 5,
        Graha::Shani => 6,
        Graha::Rahu => 7,
        Graha::Ketu => 8,
    }
}
