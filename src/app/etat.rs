//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur + ce qui n'appartient qu'à la présentation
//! (message d'erreur, échéance du pulse) et offrir l'unique point d'entrée
//! des touches, sans logique d'affichage.
//!
//! Contrats (Loi de Clément, version UI) :
//! - Aucune arithmétique ici (tout passe par le noyau).
//! - Actions déterministes, sans effet de bord caché.
//! - Après une division par zéro : l'erreur s'affiche et seule la touche C
//!   est acceptée (l'utilisateur doit effacer avant de continuer).

use crate::noyau::{Moteur, Signal, Touche};

/// Durée du pulse visuel après un résultat (300 ms à l'origine).
const PULSE_DUREE: f64 = 0.300;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub moteur: Moteur,

    // --- sorties UI ---
    pub erreur: String, // message d'erreur (division par zéro)

    // --- pulse ---
    // Échéance sur l'horloge egui (input.time, monotone natif + web).
    // None = pas de pulse en cours.
    pub pulse_fin: Option<f64>,
}

impl AppCalc {
    /// Point d'entrée unique des touches (boutons + clavier).
    ///
    /// `maintenant` = horloge egui courante (pour armer le pulse).
    pub fn appuyer(&mut self, touche: Touche, maintenant: f64) {
        // Erreur affichée => on exige C avant toute autre touche.
        if !self.erreur.is_empty() && touche != Touche::Effacer {
            return;
        }

        match self.moteur.appuyer(touche) {
            Ok(Signal::ResultatProduit) => {
                self.erreur.clear();
                self.pulse_fin = Some(maintenant + PULSE_DUREE);
            }
            Ok(Signal::Aucun) => {
                self.erreur.clear();
            }
            Err(e) => {
                // le moteur est resté intact ; on ne corrompt pas l'affichage
                self.erreur = e.to_string();
            }
        }
    }

    /// Le pulse est-il encore actif à l'instant donné ?
    /// Purge l'échéance une fois expirée (annulable par nature : rien à faire).
    pub fn pulse_actif(&mut self, maintenant: f64) -> bool {
        match self.pulse_fin {
            Some(fin) if maintenant < fin => true,
            Some(_) => {
                self.pulse_fin = None;
                false
            }
            None => false,
        }
    }
}
