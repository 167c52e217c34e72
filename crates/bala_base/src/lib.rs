//! Foundation types and tables for Shadbala computation.
//!
//! This crate provides:
//! - Graha and rashi enums with their classical tables
//! - The resolved birth chart data model and its validation
//! - Dignity, friendship, and gender relationship tables
//! - Saptavarga divisional-chart longitude mapping
//! - Graha-drishti aspect tables on house distances
//! - Angular math helpers and the shared error taxonomy
//!
//! All tables follow the classical BPHS assignments. The crate performs no
//! ephemeris work; charts arrive fully resolved.

pub mod chart;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod rashi;
pub mod relationships;
pub mod util;
pub mod varga;

pub use chart::{Chart, Motion, PlanetPosition};
pub use drishti::{AspectKind, Drishti, aspect_nature, aspect_virupa, drishti_at};
pub use error::BalaError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, TARA_GRAHAS, rashi_lord};
pub use rashi::{ALL_RASHIS, Rashi, degrees_in_rashi, rashi_of};
pub use relationships::{
    BeneficNature, Dignity, GrahaGender, dignity_in_rashi, dignity_in_rashi_with_positions,
    exaltation_degree, graha_gender, moon_benefic_nature, natural_benefic_malefic,
};
pub use util::{angular_separation, arc_forward, house_distance, normalize_360};
pub use varga::{SAPTAVARGA, Varga, varga_longitude, varga_rashi};
