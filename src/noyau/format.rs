// src/noyau/format.rs
//
// Affichage : rationnel exact -> littéral décimal.
//
// Règle d'affichage (contrat de la calculatrice) :
// - entier mathématique : pas de point décimal ("2", jamais "2.0")
// - sinon : arrondi à 8 décimales (demi vers l'infini), zéros finaux retirés
// - jamais "-0" : une valeur qui s'arrondit à zéro s'affiche "0"

use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::lecture::pow10;

/// Précision d'affichage après la virgule.
const DECIMALES: usize = 8;

/// Formate un résultat en littéral décimal (voir règle en tête de fichier).
///
/// La sortie est toujours relisible par `lire_decimal` (aller-retour stable :
/// formater(lire(formater(x))) == formater(x)).
pub fn formater_resultat(r: &BigRational) -> String {
    if r.is_integer() {
        return r.to_integer().to_string();
    }

    let echelle = pow10(DECIMALES);

    // arrondi demi vers l'infini, comme toFixed
    let arrondi = (r * BigRational::from_integer(echelle.clone()))
        .round()
        .to_integer();

    if arrondi.is_zero() {
        return "0".to_string();
    }

    let neg = arrondi.is_negative();
    let abs = arrondi.abs();

    let partie_entiere = &abs / &echelle;
    let partie_frac = &abs % &echelle;

    if partie_frac.is_zero() {
        // l'arrondi est retombé sur un entier (ex: 1.999999996)
        return signe(neg, partie_entiere.to_string());
    }

    let mut frac = partie_frac.to_str_radix(10);
    while frac.len() < DECIMALES {
        frac.insert(0, '0');
    }
    while frac.ends_with('0') {
        frac.pop();
    }

    signe(neg, format!("{partie_entiere}.{frac}"))
}

fn signe(neg: bool, corps: String) -> String {
    if neg {
        format!("-{corps}")
    } else {
        corps
    }
}
