//! Scénarios utilisateur de bout en bout : suites de touches réalistes,
//! vérifiées sur l'affichage final (et parfois l'état interne).
//!
//! Les tests unitaires fins vivent à côté du code (moteur.rs, format.rs,
//! lecture.rs) ; ici on vérifie les enchaînements complets.

use super::format::formater_resultat;
use super::lecture::lire_decimal;
use super::moteur::Moteur;
use super::touches::Touche;

/* ------------------------ Helpers scénario ------------------------ */

/// Tape une suite de touches ; renvoie None si une touche a levé une erreur
/// (division par zéro), l'affichage final sinon.
fn scenario(touches: &str) -> Option<String> {
    let mut m = Moteur::default();
    for c in touches.chars() {
        let t = Touche::du_clavier(c)
            .unwrap_or_else(|| panic!("touche inconnue dans le scénario: {c:?}"));
        if m.appuyer(t).is_err() {
            return None;
        }
    }
    Some(m.affichage().to_string())
}

fn affiche(touches: &str) -> String {
    scenario(touches).unwrap_or_else(|| panic!("erreur inattendue pour {touches:?}"))
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn addition_simple() {
    assert_eq!(affiche("2+3="), "5");
}

#[test]
fn chaine_longue_gauche_droite() {
    // 10 - 2 × 3 = (10-2)×3 = 24, puis / 4 = 6
    assert_eq!(affiche("10-2*3="), "24");
    assert_eq!(affiche("10-2*3=/4="), "6");
}

#[test]
fn chainage_sans_egal_affiche_les_intermediaires() {
    // "2+3+" montre déjà 5 (résolution au 2e opérateur)
    assert_eq!(affiche("2+3+"), "5");
    assert_eq!(affiche("2+3+4="), "9");
}

#[test]
fn decimaux_en_chaine() {
    assert_eq!(affiche("1.5*2="), "3");
    assert_eq!(affiche("7.5/3="), "2.5");
}

#[test]
fn division_par_zero_bloque_le_scenario() {
    assert_eq!(scenario("5/0="), None);
    assert_eq!(scenario("1+2/0+"), None);
    // le même calcul avec un diviseur non nul passe
    assert_eq!(affiche("1+2/3="), "1");
}

#[test]
fn zero_point_zero_est_un_diviseur_nul() {
    assert_eq!(scenario("5/0.0="), None);
    assert_eq!(scenario("5/0.="), None);
}

#[test]
fn effacer_puis_reprendre() {
    assert_eq!(affiche("12+34c7*6="), "42");
}

#[test]
fn egal_repete_est_neutre() {
    // le 2e "=" ne retombe pas sur l'opération close (garde attente + opération vidée)
    assert_eq!(affiche("2+3=="), "5");
    assert_eq!(affiche("2+3==="), "5");
}

#[test]
fn operateurs_successifs_resolvent_avec_l_affichage() {
    // "2 + +" : le 2e "+" résout 2+2 (l'affichage tient lieu de 2e opérande)
    assert_eq!(affiche("2++"), "4");
}

#[test]
fn nouveau_calcul_apres_egal() {
    assert_eq!(affiche("8/2=9-4="), "5");
}

/* ------------------------ Aller-retour lecture/format ------------------------ */

#[test]
fn aller_retour_format_lecture() {
    // formater(lire(formater(x))) == formater(x) pour des x représentatifs
    for (n, d) in [
        (1i64, 3i64),
        (2, 3),
        (-2, 3),
        (1, 7),
        (22, 7),
        (5, 1),
        (-5, 2),
        (1, 100_000_000),
        (123_456_789, 1000),
    ] {
        let x = num_rational::BigRational::new(n.into(), d.into());
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
