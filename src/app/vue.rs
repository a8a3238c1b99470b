// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : aperçu (expression) + résultat
// - Pavé : chiffres, glyphes × ÷ −, parenthèses, C, DEL, =
// - Bouton thème 🌙 / ☀
//
// Le clavier est géré dans app.rs (global, pas de champ texte à focaliser).

use eframe::egui::{self, RichText};

use super::etat::AppCalc;
use super::theme::palette;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 52.0];

#[derive(Clone, Copy, Debug)]
enum Touche {
    Inserer(&'static str),
    Effacer,
    Retour,
    Egal,
}

/// Pavé 4 colonnes : (libellé, touche)
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("C", Touche::Effacer),
        ("DEL", Touche::Retour),
        ("(", Touche::Inserer("(")),
        (")", Touche::Inserer(")")),
    ],
    [
        ("7", Touche::Inserer("7")),
        ("8", Touche::Inserer("8")),
        ("9", Touche::Inserer("9")),
        ("÷", Touche::Inserer("÷")),
    ],
    [
        ("4", Touche::Inserer("4")),
        ("5", Touche::Inserer("5")),
        ("6", Touche::Inserer("6")),
        ("×", Touche::Inserer("×")),
    ],
    [
        ("1", Touche::Inserer("1")),
        ("2", Touche::Inserer("2")),
        ("3", Touche::Inserer("3")),
        ("−", Touche::Inserer("−")),
    ],
    [
        ("0", Touche::Inserer("0")),
        (".", Touche::Inserer(".")),
        ("=", Touche::Egal),
        ("+", Touche::Inserer("+")),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icone = if self.theme_clair { "☀" } else { "🌙" };
                if ui.button(icone).on_hover_text("Thème clair / sombre").clicked() {
                    self.basculer_theme();
                }
            });
        });

        ui.add_space(6.0);
        self.ui_ecran(ui);
        ui.add_space(10.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let p = palette(self.theme_clair);

        egui::Frame::group(ui.style())
            .fill(p.carte)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // trop long pour le cadre : "…" (texte complet au survol)
                    ui.add(
                        egui::Label::new(
                            RichText::new(self.texte_apercu())
                                .monospace()
                                .size(18.0)
                                .color(p.attenue),
                        )
                        .truncate(),
                    );
                    ui.add(
                        egui::Label::new(
                            RichText::new(self.texte_resultat()).monospace().size(34.0),
                        )
                        .truncate(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (libelle, touche) in ligne {
                        self.bouton(ui, libelle, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche) {
        let resp = ui.add_sized(
            TAILLE_TOUCHE,
            egui::Button::new(RichText::new(libelle).size(22.0)),
        );
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Inserer(v) => self.ajouter(v),
            Touche::Effacer => self.effacer(),
            Touche::Retour => self.retour_arriere(),
            Touche::Egal => self.egaler(),
        }
    }
}
