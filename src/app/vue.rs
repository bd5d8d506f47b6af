// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé 6×5 : chaque clic = une touche (appuyer)
// - Clavier : champ éditable, Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Historique sous le pavé : clic = expression recopiée dans l’entrée

use eframe::egui;

use super::etat::AppCalc;
use super::touches::{ButtonId, RANGEES};

const TAILLE_TOUCHE: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        self.ui_historique(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: sin(π/2)+3^2")
                .id_salt("entree_edit")
                .font(egui::TextStyle::Monospace),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // Un TextEdit singleline perd le focus sur Enter : on teste lost_focus.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer();
        }

        ui.add_space(4.0);
        match &self.dernier_resultat {
            Some(r) => ui.weak(format!("Ans = {r}")),
            None => ui.weak("Ans : aucun résultat"),
        };
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in RANGEES {
                    for touche in rangee {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: ButtonId) {
        let texte = egui::RichText::new(touche.label()).size(18.0);
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Historique");
            let vide = self.historique.is_empty();
            if ui.add_enabled(!vide, egui::Button::new("Effacer")).clicked() {
                self.effacer_historique();
            }
        });

        if self.historique.is_empty() {
            ui.weak("Aucun calcul pour l’instant.");
            return;
        }

        // index cliqué, appliqué après l’itération (emprunt de self.historique)
        let mut clique = None;
        egui::ScrollArea::vertical()
            .max_height(160.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (i, (expression, resultat)) in self.historique.iter().enumerate() {
                    let ligne = egui::RichText::new(format!("{expression} = {resultat}")).monospace();
                    if ui.selectable_label(false, ligne).clicked() {
                        clique = Some(i);
                    }
                }
            });

        if let Some(i) = clique {
            self.rappeler_historique(i);
        }
    }
}
