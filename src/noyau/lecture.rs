// src/noyau/lecture.rs
//
// Lecture : littéral décimal -> rationnel exact.
//
// Le moteur ne lit que ses propres productions (affichage), donc la grammaire
// est volontairement étroite :
//   [-] chiffres [ '.' chiffres* ]
// "0." est accepté (état transitoire après la touche point).

use num_bigint::BigInt;
use num_rational::BigRational;

pub(super) fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Lit un littéral décimal en rationnel exact.
///
/// Retourne None si la chaîne ne suit pas la grammaire ci-dessus
/// (chaîne vide, deux points, signe seul, caractère étranger…).
pub fn lire_decimal(s: &str) -> Option<BigRational> {
    let (neg, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let (entier, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    // partie entière obligatoire (pas de ".5" : le moteur produit "0.5")
    if entier.is_empty() || !entier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let numerateur = BigInt::parse_bytes(format!("{entier}{frac}").as_bytes(), 10)?;
    let numerateur = if neg { -numerateur } else { numerateur };

    Some(BigRational::new(numerateur, pow10(frac.len())))
}
