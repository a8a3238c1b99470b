//! Noyau — évaluation (pipeline réel)
//!
//! glyphes -> alphabet -> fusion opérateurs -> jetons -> RPN -> valeur -> mise en forme
//!
//! Fonction pure : aucune donnée partagée, l’entrée n’est jamais modifiée.

use tracing::trace;

use super::erreur::ErreurCalc;
use super::format::mettre_en_forme;
use super::jetons::{format_tokens, tokenize};
use super::nettoyage::{fusionner_operateurs, normaliser_glyphes, valider_caracteres};
use super::rpn::{evaluer_rpn, to_rpn};

/// API publique : évalue une expression saisie.
///
/// Retourne la valeur finie arrondie à 12 chiffres significatifs,
/// ou la première erreur rencontrée dans le pipeline.
pub fn evaluer(brut: &str) -> Result<f64, ErreurCalc> {
    // 1) Glyphes d’affichage
    let normal = normaliser_glyphes(brut);

    // 2) Alphabet (lettres d’abord)
    valider_caracteres(&normal)?;

    // 3) Opérateurs doublés (une passe)
    let propre = fusionner_operateurs(&normal);
    trace!(entree = brut, propre = %propre, "expression nettoyée");

    // 4) Jetons + RPN + valeur
    let jetons = tokenize(&propre)?;
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_tokens(&rpn), "rpn");
    let brute = evaluer_rpn(&rpn)?;

    // 5) Fini ? arrondi
    mettre_en_forme(brute)
}
