//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (expression en cours, dernier résultat, thème)
//! et offrir les opérations des touches (ajout, DEL, C, =) sans logique d’affichage.
//!
//! Contrats :
//! - Un seul point de contact avec le noyau : `egaler()`.
//! - Toutes les erreurs du noyau deviennent le même affichage : "Error".
//! - Actions déterministes, sans effet de bord caché.

use tracing::{debug, info};

use crate::noyau::{evaluer, formater_affichage, formater_nombre};

/// Texte affiché pour TOUTE erreur d’évaluation.
pub const TEXTE_ERREUR: &str = "Error";

/// Dernier résultat affiché.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Dernier {
    /// Rien encore (ou après C).
    #[default]
    Aucun,
    Valeur(f64),
    Erreur,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sortie ---
    pub dernier: Dernier,

    // --- apparence ---
    pub theme_clair: bool,
    // thème réellement poussé dans egui (None : jamais appliqué)
    pub(crate) theme_applique: Option<bool>,
}

/// Séparateurs de jetons numériques (ASCII + glyphes d’affichage).
fn est_separateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '×' | '÷' | '−')
}

impl AppCalc {
    /* ------------------------ Actions “touches” ------------------------ */

    /// Ajoute la valeur d’une touche à l’expression.
    ///
    /// Point décimal :
    /// - ignoré si le dernier nombre en contient déjà un
    /// - précédé de "0" s’il commence un nombre ("." -> "0.")
    pub fn ajouter(&mut self, valeur: &str) {
        if valeur == "." {
            let dernier_jeton = self.expression.rsplit(est_separateur).next().unwrap_or("");
            if dernier_jeton.contains('.') {
                debug!(expression = %self.expression, "second point ignoré");
                return;
            }
            if dernier_jeton.is_empty() {
                self.expression.push('0');
            }
        }
        self.expression.push_str(valeur);
    }

    /// Touche clavier “texte” : chiffres, opérateurs, parenthèses, point ; '=' évalue.
    pub fn touche(&mut self, c: char) {
        match c {
            '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.' => {
                let mut buf = [0u8; 4];
                self.ajouter(c.encode_utf8(&mut buf));
            }
            '=' => self.egaler(),
            _ => {}
        }
    }

    /// DEL : retire le dernier caractère (un glyphe compte pour un).
    pub fn retour_arriere(&mut self) {
        self.expression.pop();
    }

    /// C : remise à zéro (expression + résultat).
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.dernier = Dernier::Aucun;
    }

    /// = : évalue via le noyau.
    ///
    /// - expression vide : rien
    /// - succès : le résultat remplace l’expression (on peut enchaîner)
    /// - échec  : "Error", l’expression reste pour correction
    pub fn egaler(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        match evaluer(&self.expression) {
            Ok(v) => {
                debug!(expression = %self.expression, resultat = v, "évaluation");
                self.dernier = Dernier::Valeur(v);
                self.expression = formater_nombre(v);
            }
            Err(e) => {
                debug!(expression = %self.expression, erreur = %e, "évaluation refusée");
                self.dernier = Dernier::Erreur;
            }
        }
    }

    /// Bascule clair / sombre.
    pub fn basculer_theme(&mut self) {
        self.theme_clair = !self.theme_clair;
        info!(clair = self.theme_clair, "thème");
    }

    /* ------------------------ Textes d’affichage ------------------------ */

    /// Aperçu : l’expression brute, ou "0" si vide.
    pub fn texte_apercu(&self) -> &str {
        if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }

    /// Résultat : "0", le nombre formaté (exposant si très grand / très petit), ou "Error".
    pub fn texte_resultat(&self) -> String {
        match self.dernier {
            Dernier::Aucun => "0".to_string(),
            Dernier::Valeur(v) => formater_affichage(v),
            Dernier::Erreur => TEXTE_ERREUR.to_string(),
        }
    }
}
