// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + theme.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, natif + web) :
// - 0-9 + - * / ( ) .  : ajout (même règle du point que les boutons)
// - Enter ou =         : évaluer (Enter ignoré si un bouton a le focus : egui le clique déjà)
// - Backspace          : effacer un caractère
// - Escape             : tout effacer

pub mod etat;
pub mod theme;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActionClavier {
    Egaler,
    Retour,
    Effacer,
}

/// Touche spéciale -> action. `widget_focalise` : un widget (bouton du pavé) a le focus.
fn action_clavier(key: egui::Key, widget_focalise: bool) -> Option<ActionClavier> {
    match key {
        egui::Key::Enter if widget_focalise => None,
        egui::Key::Enter => Some(ActionClavier::Egaler),
        egui::Key::Backspace => Some(ActionClavier::Retour),
        egui::Key::Escape => Some(ActionClavier::Effacer),
        _ => None,
    }
}

impl AppCalc {
    fn clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());
        let widget_focalise = ctx.memory(|m| m.focused()).is_some();

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match action_clavier(key, widget_focalise) {
                    Some(ActionClavier::Egaler) => self.egaler(),
                    Some(ActionClavier::Retour) => self.retour_arriere(),
                    Some(ActionClavier::Effacer) => self.effacer(),
                    None => {}
                },
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        // Thème : poussé seulement quand il change
        if self.theme_applique != Some(self.theme_clair) {
            theme::appliquer(ctx, self.theme_clair);
            self.theme_applique = Some(self.theme_clair);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
