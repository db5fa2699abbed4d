// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : affichage du moteur, rendu tel quel (monospace, aligné à droite)
// - Pulse : fond de l'écran surligné 300 ms après un résultat
// - Clavier : chiffres/./+-*/=c via les événements texte, Enter = égal,
//   Escape = C (le canvas egui consomme les événements côté web, donc '/'
//   n'ouvre pas la recherche rapide du navigateur)
// - Tactile : gros boutons, grille 4 colonnes

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Operateur, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        let maintenant = ui.input(|i| i.time);

        self.clavier(ui, maintenant);

        ui.heading("Calculatrice de bureau");
        ui.add_space(6.0);

        self.ui_ecran(ui, maintenant);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, format!("Erreur : {}", self.erreur));
            ui.label("Appuyez sur C pour continuer.");
        }

        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);

        // Tant que le pulse court, on redessine pour le voir expirer.
        if self.pulse_fin.is_some() {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(30));
        }
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let pulse = self.pulse_actif(maintenant);

        // Fond surligné pendant le pulse, fond “écran” sinon.
        let fond = if pulse {
            ui.visuals().selection.bg_fill
        } else {
            ui.visuals().extreme_bg_color
        };

        egui::Frame::group(ui.style()).fill(fond).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.moteur.affichage())
                        .monospace()
                        .size(32.0),
                );
            });
        });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        use Operateur::*;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre('7'), maintenant);
                self.bouton(ui, "8", Touche::Chiffre('8'), maintenant);
                self.bouton(ui, "9", Touche::Chiffre('9'), maintenant);
                self.bouton(ui, Division.symbole(), Touche::Operation(Division), maintenant);
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'), maintenant);
                self.bouton(ui, "5", Touche::Chiffre('5'), maintenant);
                self.bouton(ui, "6", Touche::Chiffre('6'), maintenant);
                self.bouton(ui, Fois.symbole(), Touche::Operation(Fois), maintenant);
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'), maintenant);
                self.bouton(ui, "2", Touche::Chiffre('2'), maintenant);
                self.bouton(ui, "3", Touche::Chiffre('3'), maintenant);
                self.bouton(ui, Moins.symbole(), Touche::Operation(Moins), maintenant);
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'), maintenant);
                self.bouton(ui, ".", Touche::Point, maintenant);
                self.bouton(ui, "=", Touche::Egal, maintenant);
                self.bouton(ui, Plus.symbole(), Touche::Operation(Plus), maintenant);
                ui.end_row();
            });

        ui.add_space(4.0);

        let c = ui
            .add_sized([262.0, 40.0], egui::Button::new("C"))
            .on_hover_text("Remise à zéro totale (Escape)");
        if c.clicked() {
            self.appuyer(Touche::Effacer, maintenant);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche, maintenant: f64) {
        let resp = ui.add_sized([60.0, 40.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche, maintenant);
        }
    }

    /* ------------------------ Clavier ------------------------ */

    /// Mapping clavier global : pas de champ texte ici, donc pas de question
    /// de focus ; on lit directement les événements de la frame.
    fn clavier(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let evenements = ui.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                // chiffres, '.', opérateurs, '=', 'c'/'C'
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(t) = Touche::du_clavier(c) {
                            self.appuyer(t, maintenant);
                        }
                    }
                }
                // touches sans caractère
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::Egal, maintenant),
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::Effacer, maintenant),
                _ => {}
            }
        }
    }
}
