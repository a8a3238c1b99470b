// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en refusant les formes invalides
// - Puis évaluer la RPN sur une pile de f64 (itératif : pas de récursion)
//
// Règles:
// - Précédences : unaire (Pos/Neg) > * / > + -
// - Binaires associatifs à gauche ; unaires préfixes (associatifs à droite)
// - '+' / '-' sont unaires quand on n’attend PAS d’opérateur :
//   début, après '(' ou après un autre opérateur ("5*-3", "(-2)", "+-3")

use super::erreur::ErreurCalc;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Pos | Tok::Neg => 3,
        _ => 0,
    }
}

fn est_unaire(t: &Tok) -> bool {
    matches!(t, Tok::Pos | Tok::Neg)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(5), Star, Minus, Num(3)]
///   rpn:    [Num(5), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    if tokens.is_empty() {
        return Err(ErreurCalc::syntaxe("expression vide"));
    }

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter les unaires et les opérandes collés.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérateur manquant entre deux valeurs"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérateur manquant avant '('"));
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // couvre "()" et "(5+)"
                if !prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurCalc::syntaxe("parenthèse fermante sans ouvrante"));
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // unaire préfixe : rien à dépiler (il s’applique à ce qui suit)
                ops.push(if tok == Tok::Plus { Tok::Pos } else { Tok::Neg });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérateur sans opérande gauche"));
                }

                // dépile tant que la précédence (associativité gauche) l’exige
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Pos | Tok::Neg => {
                return Err(ErreurCalc::syntaxe("jeton unaire inattendu en entrée"));
            }
        }
    }

    if !prev_was_value {
        return Err(ErreurCalc::syntaxe("opérateur pendant en fin d’expression"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de f64.
///
/// L’arithmétique est celle de l’IEEE-754 : 1/0 donne +inf, 0/0 donne NaN.
/// Le tri fini / non fini est fait plus loin (mise en forme du résultat).
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            t if est_unaire(t) => {
                let x = st.pop().ok_or_else(|| ErreurCalc::syntaxe("unaire sans opérande"))?;
                st.push(if matches!(t, Tok::Neg) { -x } else { x });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| ErreurCalc::syntaxe("expression invalide"))?;
                let a = st.pop().ok_or_else(|| ErreurCalc::syntaxe("expression invalide"))?;

                st.push(match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                });
            }

            _ => return Err(ErreurCalc::syntaxe("parenthèse inattendue en RPN")),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalc::syntaxe("expression invalide")),
    }
}
