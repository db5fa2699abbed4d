//! Noyau calculatrice de bureau
//!
//! Organisation interne :
//! - touches.rs : touches d'entrée + opérateurs + mapping clavier
//! - moteur.rs  : machine à états (affichage, accumulateur, opération)
//! - lecture.rs : littéral décimal -> rationnel exact
//! - format.rs  : rationnel exact -> littéral décimal (règle 8 décimales)

pub mod format;
pub mod lecture;
pub mod moteur;
pub mod touches;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::{ErreurCalcul, Moteur, Signal};
pub use touches::{Operateur, Touche};
