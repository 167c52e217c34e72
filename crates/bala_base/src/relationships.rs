//! Graha dignity and relationship tables.
//!
//! Exaltation/debilitation degrees, moolatrikona ranges, own signs, natural
//! (naisargika) and temporal (tatkalika) friendship, the five-fold compound
//! relationship, dignity determination, benefic/malefic classification, and
//! graha gender. Classical BPHS assignments throughout.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_of};
use crate::util::normalize_360;

/// Exaltation degree (sidereal) for the sapta grahas. None for Rahu/Ketu.
///
/// Sun 10 Ari, Moon 3 Tau, Mars 28 Cap, Mercury 15 Vir, Jupiter 5 Can,
/// Venus 27 Pis, Saturn 20 Lib.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation degree = exaltation + 180 mod 360. None for Rahu/Ketu.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) => {
            let d = e + 180.0;
            if d >= 360.0 { Some(d - 360.0) } else { Some(d) }
        }
        None => None,
    }
}

/// Moolatrikona range as (rashi, start_deg_in_rashi, end_deg_in_rashi).
/// None for Rahu/Ketu.
pub const fn moolatrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 4.0, 20.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 16.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign rashis. Empty for Rahu/Ketu.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaisargikaMaitri {
    Mitra,
    Shatru,
    Sama,
}

/// Natural (naisargika) friendship per the BPHS table. Pairings with
/// Rahu/Ketu and self-pairings are Sama.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Sama,

        (Surya, Chandra | Mangal | Guru) => Mitra,
        (Surya, Shukra | Shani) => Shatru,

        (Chandra, Surya | Buddh) => Mitra,

        (Mangal, Surya | Chandra | Guru) => Mitra,
        (Mangal, Buddh) => Shatru,

        (Buddh, Surya | Shukra) => Mitra,
        (Buddh, Chandra) => Shatru,

        (Guru, Surya | Chandra | Mangal) => Mitra,
        (Guru, Buddh | Shukra) => Shatru,

        (Shukra, Buddh | Shani) => Mitra,
        (Shukra, Surya | Chandra) => Shatru,

        (Shani, Buddh | Shukra) => Mitra,
        (Shani, Surya | Chandra | Mangal) => Shatru,

        _ => Sama,
    }
}

/// Temporal relationship based on rashi placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TatkalikaMaitri {
    Mitra,
    Shatru,
}

/// Temporal friendship: friend when `other` sits in the 2nd, 3rd, 4th,
/// 10th, 11th, or 12th rashi from `graha`.
pub fn tatkalika_maitri(graha_rashi: Rashi, other_rashi: Rashi) -> TatkalikaMaitri {
    let dist = (other_rashi.index() as i16 - graha_rashi.index() as i16 + 12) % 12;
    match dist {
        1 | 2 | 3 | 9 | 10 | 11 => TatkalikaMaitri::Mitra,
        _ => TatkalikaMaitri::Shatru,
    }
}

/// Five-fold compound relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanchadhaMaitri {
    AdhiShatru,
    Shatru,
    Sama,
    Mitra,
    AdhiMitra,
}

/// Combine natural and temporal friendship into the compound relationship.
pub fn panchadha_maitri(
    naisargika: NaisargikaMaitri,
    tatkalika: TatkalikaMaitri,
) -> PanchadhaMaitri {
    use NaisargikaMaitri as N;
    use PanchadhaMaitri as P;
    use TatkalikaMaitri as T;

    match (naisargika, tatkalika) {
        (N::Mitra, T::Mitra) => P::AdhiMitra,
        (N::Mitra, T::Shatru) => P::Sama,
        (N::Sama, T::Mitra) => P::Mitra,
        (N::Sama, T::Shatru) => P::Shatru,
        (N::Shatru, T::Mitra) => P::Sama,
        (N::Shatru, T::Shatru) => P::AdhiShatru,
    }
}

/// Dignity of a graha in a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
    Debilitated,
}

fn is_exalted(graha: Graha, lon: f64) -> bool {
    match exaltation_degree(graha) {
        Some(e) => rashi_of(e) == rashi_of(normalize_360(lon)),
        None => false,
    }
}

fn is_debilitated(graha: Graha, lon: f64) -> bool {
    match debilitation_degree(graha) {
        Some(d) => rashi_of(d) == rashi_of(normalize_360(lon)),
        None => false,
    }
}

fn is_in_moolatrikona(graha: Graha, lon: f64) -> bool {
    match moolatrikona_range(graha) {
        Some((mt_rashi, start, end)) => {
            let lon = normalize_360(lon);
            if rashi_of(lon) != mt_rashi {
                return false;
            }
            let deg = lon - mt_rashi.index() as f64 * 30.0;
            deg >= start && deg < end
        }
        None => false,
    }
}

/// Dignity from placement alone, without temporal context.
///
/// Priority: exaltation > debilitation > moolatrikona > own sign >
/// naisargika friendship with the rashi lord. Rahu/Ketu are always Sama.
pub fn dignity_in_rashi(graha: Graha, sidereal_lon: f64) -> Dignity {
    if graha.is_node() {
        return Dignity::Sama;
    }

    if is_exalted(graha, sidereal_lon) {
        return Dignity::Exalted;
    }
    if is_debilitated(graha, sidereal_lon) {
        return Dignity::Debilitated;
    }
    if is_in_moolatrikona(graha, sidereal_lon) {
        return Dignity::Moolatrikona;
    }

    let rashi = rashi_of(normalize_360(sidereal_lon));
    if own_signs(graha).contains(&rashi) {
        return Dignity::OwnSign;
    }

    match naisargika_maitri(graha, rashi_lord(rashi)) {
        NaisargikaMaitri::Mitra => Dignity::Mitra,
        NaisargikaMaitri::Shatru => Dignity::Shatru,
        NaisargikaMaitri::Sama => Dignity::Sama,
    }
}

/// Full dignity including the temporal (compound) friendship with the rashi
/// lord. `sapta_rashis` holds the natal rashi of each sapta graha, indexed
/// by `Graha::index()`.
pub fn dignity_in_rashi_with_positions(
    graha: Graha,
    sidereal_lon: f64,
    sapta_rashis: &[Rashi; 7],
) -> Dignity {
    if graha.is_node() {
        return Dignity::Sama;
    }

    if is_exalted(graha, sidereal_lon) {
        return Dignity::Exalted;
    }
    if is_debilitated(graha, sidereal_lon) {
        return Dignity::Debilitated;
    }
    if is_in_moolatrikona(graha, sidereal_lon) {
        return Dignity::Moolatrikona;
    }

    let rashi = rashi_of(normalize_360(sidereal_lon));
    if own_signs(graha).contains(&rashi) {
        return Dignity::OwnSign;
    }

    let lord = rashi_lord(rashi);
    let nais = naisargika_maitri(graha, lord);
    let graha_rashi = sapta_rashis[graha.index() as usize];
    let lord_rashi = sapta_rashis[lord.index() as usize];
    let tatk = tatkalika_maitri(graha_rashi, lord_rashi);

    match panchadha_maitri(nais, tatk) {
        PanchadhaMaitri::AdhiMitra => Dignity::AdhiMitra,
        PanchadhaMaitri::Mitra => Dignity::Mitra,
        PanchadhaMaitri::Sama => Dignity::Sama,
        PanchadhaMaitri::Shatru => Dignity::Shatru,
        PanchadhaMaitri::AdhiShatru => Dignity::AdhiShatru,
    }
}

/// Natural benefic/malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Natural classification of each graha. Moon and Mercury are taken in
/// their default (benefic) role here; use `moon_benefic_nature` for the
/// phase-dependent variant.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

/// Moon's benefic nature from its elongation ahead of the Sun. Benefic
/// when the phase angle (proximity to full) is at least 72 degrees.
pub fn moon_benefic_nature(moon_sun_elongation: f64) -> BeneficNature {
    let elong = normalize_360(moon_sun_elongation);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    if phase >= 72.0 {
        BeneficNature::Benefic
    } else {
        BeneficNature::Malefic
    }
}

/// Graha gender classification, used for drekkana and ojayugma strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrahaGender {
    Male,
    Female,
    Neuter,
}

/// Gender per BPHS. Rahu/Ketu carry no classical assignment; Neuter.
pub const fn graha_gender(graha: Graha) -> GrahaGender {
    match graha {
        Graha::Surya | Graha::Mangal | Graha::Guru => GrahaGender::Male,
        Graha::Chandra | Graha::Shukra => GrahaGender::Female,
        Graha::Buddh | Graha::Shani | Graha::Rahu | Graha::Ketu => GrahaGender::Neuter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::{ALL_GRAHAS, SAPTA_GRAHAS};

    #[test]
    fn debilitation_opposite_exaltation() {
        for g in SAPTA_GRAHAS {
            let (e, d) = (
                exaltation_degree(g).unwrap(),
                debilitation_degree(g).unwrap(),
            );
            let diff = (e - d).abs();
            let diff = if diff > 180.0 { 360.0 - diff } else { diff };
            assert!((diff - 180.0).abs() < 1e-10, "{:?}: e={e} d={d}", g);
        }
    }

    #[test]
    fn exaltation_none_for_nodes() {
        assert!(exaltation_degree(Graha::Rahu).is_none());
        assert!(debilitation_degree(Graha::Ketu).is_none());
    }

    #[test]
    fn moolatrikona_sun_in_simha() {
        let (rashi, start, end) = moolatrikona_range(Graha::Surya).unwrap();
        assert_eq!(rashi, Rashi::Simha);
        assert!((start - 0.0).abs() < 1e-10);
        assert!((end - 20.0).abs() < 1e-10);
    }

    #[test]
    fn own_signs_mars() {
        assert_eq!(own_signs(Graha::Mangal), &[Rashi::Mesha, Rashi::Vrischika]);
        assert!(own_signs(Graha::Rahu).is_empty());
    }

    #[test]
    fn naisargika_moon_has_no_enemies() {
        for g in SAPTA_GRAHAS {
            assert_ne!(
                naisargika_maitri(Graha::Chandra, g),
                NaisargikaMaitri::Shatru,
                "{:?}",
                g
            );
        }
    }

    #[test]
    fn naisargika_sun_row() {
        assert_eq!(
            naisargika_maitri(Graha::Surya, Graha::Guru),
            NaisargikaMaitri::Mitra
        );
        assert_eq!(
            naisargika_maitri(Graha::Surya, Graha::Shukra),
            NaisargikaMaitri::Shatru
        );
        assert_eq!(
            naisargika_maitri(Graha::Surya, Graha::Buddh),
            NaisargikaMaitri::Sama
        );
    }

    #[test]
    fn naisargika_nodes_always_sama() {
        for g in ALL_GRAHAS {
            assert_eq!(naisargika_maitri(Graha::Rahu, g), NaisargikaMaitri::Sama);
            assert_eq!(naisargika_maitri(g, Graha::Ketu), NaisargikaMaitri::Sama);
        }
    }

    #[test]
    fn tatkalika_friend_offsets() {
        use crate::rashi::ALL_RASHIS;
        for offset in [1usize, 2, 3, 9, 10, 11] {
            assert_eq!(
                tatkalika_maitri(Rashi::Mesha, ALL_RASHIS[offset]),
                TatkalikaMaitri::Mitra,
                "offset {offset}"
            );
        }
        for offset in [0usize, 4, 5, 6, 7, 8] {
            assert_eq!(
                tatkalika_maitri(Rashi::Mesha, ALL_RASHIS[offset]),
                TatkalikaMaitri::Shatru,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn tatkalika_wraps() {
        assert_eq!(
            tatkalika_maitri(Rashi::Meena, Rashi::Mesha),
            TatkalikaMaitri::Mitra
        );
    }

    #[test]
    fn panchadha_all_six() {
        use NaisargikaMaitri as N;
        use PanchadhaMaitri as P;
        use TatkalikaMaitri as T;
        assert_eq!(panchadha_maitri(N::Mitra, T::Mitra), P::AdhiMitra);
        assert_eq!(panchadha_maitri(N::Mitra, T::Shatru), P::Sama);
        assert_eq!(panchadha_maitri(N::Sama, T::Mitra), P::Mitra);
        assert_eq!(panchadha_maitri(N::Sama, T::Shatru), P::Shatru);
        assert_eq!(panchadha_maitri(N::Shatru, T::Mitra), P::Sama);
        assert_eq!(panchadha_maitri(N::Shatru, T::Shatru), P::AdhiShatru);
    }

    #[test]
    fn dignity_sun_exalted_in_mesha() {
        assert_eq!(dignity_in_rashi(Graha::Surya, 10.0), Dignity::Exalted);
    }

    #[test]
    fn dignity_sun_debilitated_in_tula() {
        assert_eq!(dignity_in_rashi(Graha::Surya, 190.0), Dignity::Debilitated);
    }

    #[test]
    fn dignity_sun_moolatrikona_then_own_in_simha() {
        assert_eq!(dignity_in_rashi(Graha::Surya, 130.0), Dignity::Moolatrikona);
        assert_eq!(dignity_in_rashi(Graha::Surya, 145.0), Dignity::OwnSign);
    }

    #[test]
    fn dignity_compound_enemy_plus_friend_is_sama() {
        // Sun in Vrishabha, lord Venus, naisargika enemy. Venus one rashi
        // ahead of Sun makes the temporal component a friend.
        let rashis = [
            Rashi::Vrishabha, // Surya
            Rashi::Mesha,
            Rashi::Mesha,
            Rashi::Mesha,
            Rashi::Mesha,
            Rashi::Mithuna, // Shukra
            Rashi::Mesha,
        ];
        let d = dignity_in_rashi_with_positions(Graha::Surya, 45.0, &rashis);
        assert_eq!(d, Dignity::Sama);
    }

    #[test]
    fn dignity_nodes_sama() {
        assert_eq!(dignity_in_rashi(Graha::Rahu, 100.0), Dignity::Sama);
    }

    #[test]
    fn moon_nature_by_phase() {
        assert_eq!(moon_benefic_nature(180.0), BeneficNature::Benefic);
        assert_eq!(moon_benefic_nature(10.0), BeneficNature::Malefic);
        assert_eq!(moon_benefic_nature(350.0), BeneficNature::Malefic);
    }

    #[test]
    fn gender_assignments() {
        assert_eq!(graha_gender(Graha::Surya), GrahaGender::Male);
        assert_eq!(graha_gender(Graha::Shukra), GrahaGender::Female);
        assert_eq!(graha_gender(Graha::Buddh), GrahaGender::Neuter);
    }
}
