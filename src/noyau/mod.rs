//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - nettoyage.rs : glyphes + alphabet + fusion des opérateurs doublés
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + évaluation de la RPN
//! - format.rs    : arrondi 12 chiffres + texte relisible
//! - erreur.rs    : taxonomie des échecs
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nettoyage;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluer;
pub use format::{formater_affichage, formater_nombre};
