// src/app/theme.rs
//
// Palettes clair / sombre (fond, texte, texte atténué, carte d’affichage).

use eframe::egui::{self, Color32};

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub fond: Color32,
    pub texte: Color32,
    pub attenue: Color32,
    pub carte: Color32,
}

pub fn palette(clair: bool) -> Palette {
    if clair {
        Palette {
            fond: Color32::from_rgb(0xf7, 0xfb, 0xff),
            texte: Color32::from_rgb(0x06, 0x20, 0x2a),
            attenue: Color32::from_rgba_unmultiplied(6, 32, 42, 179),
            carte: Color32::from_rgba_unmultiplied(2, 6, 23, 8),
        }
    } else {
        Palette {
            fond: Color32::from_rgb(0x0f, 0x17, 0x24),
            texte: Color32::from_rgb(0xe6, 0xee, 0xf8),
            attenue: Color32::from_rgba_unmultiplied(230, 238, 248, 153),
            carte: Color32::from_rgba_unmultiplied(255, 255, 255, 10),
        }
    }
}

/// Pousse le thème dans egui (à n’appeler qu’au changement).
pub fn appliquer(ctx: &egui::Context, clair: bool) {
    let p = palette(clair);

    ctx.set_theme(if clair {
        egui::Theme::Light
    } else {
        egui::Theme::Dark
    });

    let mut visuals = if clair {
        egui::Visuals::light()
    } else {
        egui::Visuals::dark()
    };
    visuals.panel_fill = p.fond;
    visuals.window_fill = p.fond;
    visuals.override_text_color = Some(p.texte);
    ctx.set_visuals(visuals);
}
