//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine à états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - la seule erreur acceptée : division par zéro (et alors l'état doit être
//!   resté strictement inchangé)
//! - invariants clés après CHAQUE touche :
//!   affichage lisible, au plus un point, jamais vide,
//!   pas d'opérateur orphelin (operation None => accumulateur None)

use std::time::{Duration, Instant};

use super::lecture::lire_decimal;
use super::moteur::{ErreurCalcul, Moteur};
use super::touches::{Operateur, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    match rng.pick(16) {
        // chiffres majoritaires (sinon les séquences ne calculent rien)
        0..=7 => {
            let c = (b'0' + rng.pick(10) as u8) as char;
            Touche::Chiffre(c)
        }
        8 | 9 => Touche::Point,
        10 => Touche::Operation(Operateur::Plus),
        11 => Touche::Operation(Operateur::Moins),
        12 => Touche::Operation(Operateur::Fois),
        13 => Touche::Operation(Operateur::Division),
        14 => Touche::Egal,
        _ => Touche::Effacer,
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(m: &Moteur, contexte: &str) {
    let aff = m.affichage();

    assert!(!aff.is_empty(), "affichage vide ({contexte})");
    assert!(
        aff.matches('.').count() <= 1,
        "plus d'un point dans {aff:?} ({contexte})"
    );
    assert!(
        lire_decimal(aff).is_some(),
        "affichage non lisible: {aff:?} ({contexte})"
    );
    if m.operation().is_none() {
        assert!(
            m.accumulateur().is_none(),
            "accumulateur orphelin ({contexte})"
        );
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_sous_touches_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes séquences => mêmes états (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut m = Moteur::default();
        for pas in 0..60 {
            let t = gen_touche(&mut rng);
            let avant = m.clone();

            match m.appuyer(t) {
                Ok(_) => vus_ok += 1,
                Err(ErreurCalcul::DivisionParZero) => {
                    // seule erreur admise, et l'état doit être resté intact
                    assert_eq!(m, avant, "état modifié malgré l'erreur (pas {pas})");
                    vus_err += 1;
                }
            }

            check_invariants(&m, &format!("touche {t:?}, pas {pas}"));
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 1000, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_effacer_ramene_toujours_a_l_initial() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let initial = Moteur::default();

    for _ in 0..100 {
        budget(t0, max);

        let mut m = Moteur::default();
        for _ in 0..40 {
            let _ = m.appuyer(gen_touche(&mut rng)); // erreurs ignorées ici
        }

        m.effacer();
        assert_eq!(m, initial, "effacer n'a pas restitué l'état initial");
    }
}

#[test]
fn fuzz_safe_aller_retour_format_lecture() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    use super::format::formater_resultat;
    use num_rational::BigRational;

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let n = rng.pick(2_000_000) as i64 - 1_000_000;
        let d = rng.pick(999_983) as i64 + 1; // jamais nul
        let x = BigRational::new(n.into(), d.into());

        let une_fois = formater_resultat(&x);
        let relu = lire_decimal(&une_fois)
            .unwrap_or_else(|| panic!("sortie non relisible: {une_fois:?}"));
        assert_eq!(
            formater_resultat(&relu),
            une_fois,
            "aller-retour instable pour {n}/{d}"
        );
    }
}
