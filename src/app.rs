// src/app.rs
//
// Calculatrice de bureau — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Tout le clavier est géré dans vue.rs (pas de champ texte, donc pas de
//   focus à arbitrer : les événements de la frame suffisent, Escape compris).
// - Ici: panneau central seulement.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
