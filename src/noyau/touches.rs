// src/noyau/touches.rs

use num_rational::BigRational;
use num_traits::Zero;

use super::moteur::ErreurCalcul;

/// Opérateur binaire de la calculatrice.
///
/// Enum fermé : un opérateur « non reconnu » est irreprésentable ici
/// (l'ancien comportement « retourner b tel quel » est durci au niveau du type).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Operateur {
    /// Symbole affiché sur les boutons (glyphes classiques : ×, ÷).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Division => "÷",
        }
    }

    /// Applique l'opérateur sur deux rationnels exacts.
    ///
    /// Seule la division peut échouer (diviseur nul) ; les trois autres
    /// opérations sont totales.
    pub fn appliquer(self, a: &BigRational, b: &BigRational) -> Result<BigRational, ErreurCalcul> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Division => {
                if b.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                Ok(a / b)
            }
        }
    }
}

/// Touche de la calculatrice : l'événement d'entrée à la frontière
/// (boutons comme clavier produisent les mêmes touches).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Un chiffre '0'..='9'.
    Chiffre(char),
    /// Le point décimal.
    Point,
    /// Un des quatre opérateurs.
    Operation(Operateur),
    /// Égal (évalue l'opération en attente).
    Egal,
    /// C : remise à zéro totale.
    Effacer,
}

impl Touche {
    /// Mapping clavier (partie « caractères »).
    ///
    /// - chiffres -> Chiffre ; '.' -> Point
    /// - '+' '-' '*' '/' -> Operation (× et ÷ acceptés aussi, pour les boutons)
    /// - '=' -> Egal ; 'c'/'C' -> Effacer
    ///
    /// Enter et Escape sont des touches sans caractère : la vue les traite
    /// directement via les événements clavier egui. Côté web, le canvas egui
    /// consomme les événements (preventDefault), donc '/' ne déclenche pas la
    /// recherche rapide du navigateur.
    pub fn du_clavier(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' => Some(Touche::Point),
            '+' => Some(Touche::Operation(Operateur::Plus)),
            '-' => Some(Touche::Operation(Operateur::Moins)),
            '*' | '×' => Some(Touche::Operation(Operateur::Fois)),
            '/' | '÷' => Some(Touche::Operation(Operateur::Division)),
            '=' => Some(Touche::Egal),
            'c' | 'C' => Some(Touche::Effacer),
            _ => None,
        }
    }
}
