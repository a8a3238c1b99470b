// src/noyau/nettoyage.rs
//
// Étapes de préparation AVANT l’analyse :
// 1) glyphes d’affichage (× ÷ −) -> symboles ASCII
// 2) validation de l’alphabet (lettres refusées en premier)
// 3) fusion des opérateurs doublés (UNE seule passe, sans retour arrière)

use super::erreur::ErreurCalc;

/* ------------------------ Glyphes ------------------------ */

/// Remplace les glyphes d’affichage par leurs opérateurs canoniques.
pub fn normaliser_glyphes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            autre => autre,
        })
        .collect()
}

/* ------------------------ Alphabet ------------------------ */

pub(crate) fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || est_operateur(c) || matches!(c, '(' | ')' | '.') || c.is_whitespace()
}

/// Vérifie l’alphabet :
/// - une lettre ASCII => CaracteresInvalides (prioritaire)
/// - tout autre intrus (ou chaîne vide) => ExpressionInvalide
pub fn valider_caracteres(s: &str) -> Result<(), ErreurCalc> {
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ErreurCalc::CaracteresInvalides);
    }
    if s.is_empty() || !s.chars().all(est_autorise) {
        return Err(ErreurCalc::ExpressionInvalide);
    }
    Ok(())
}

/* ------------------------ Opérateurs doublés ------------------------ */

/// Fusionne les paires `op [espaces] op` :
/// - second == '-' : on garde les deux (ex: "5 * -3" -> "5 *-3")
/// - sinon         : on garde seulement le second (ex: "5++3" -> "5+3")
///
/// Les espaces entre les deux opérateurs disparaissent.
/// La lecture reprend APRÈS la paire : "5+++3" -> "5++3" (pas de point fixe).
pub fn fusionner_operateurs(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let a = chars[i];

        if est_operateur(a) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }

            if j < chars.len() && est_operateur(chars[j]) {
                let b = chars[j];
                if b == '-' {
                    out.push(a);
                }
                out.push(b);
                i = j + 1;
                continue;
            }
        }

        out.push(a);
        i += 1;
    }

    out
}
