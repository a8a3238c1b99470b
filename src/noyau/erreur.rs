// src/noyau/erreur.rs
//
// Erreurs du noyau (distinctes en interne, aplaties en "Error" côté UI).

use thiserror::Error;

/// Échecs possibles de l’évaluation d’une expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalc {
    /// Lettre présente dans l’entrée (refus avant toute analyse).
    #[error("caractères invalides")]
    CaracteresInvalides,

    /// Symbole hors de l’alphabet de la calculatrice (ou entrée vide).
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Structure arithmétique inanalysable (parenthèses, opérateur pendant, ...).
    #[error("syntaxe malformée: {0}")]
    SyntaxeMalformee(String),

    /// Division par zéro, dépassement, NaN.
    #[error("résultat non fini")]
    ResultatNonFini,
}

impl ErreurCalc {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurCalc::SyntaxeMalformee(msg.into())
    }
}
