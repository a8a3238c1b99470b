// src/noyau/jetons.rs

use super::erreur::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Formes unaires : produites par to_rpn (jamais par tokenize)
    Pos,
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne nettoyée en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Refuse:
/// - "++" / "--" collés (incrément/décrément : aucun sens sur un littéral)
/// - un nombre avec deux points, ou un point seul
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' | '-' => {
                if chars.get(i + 1) == Some(&c) {
                    return Err(ErreurCalc::syntaxe(format!("opérateur {c}{c} sans variable")));
                }
                out.push(if c == '+' { Tok::Plus } else { Tok::Minus });
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : suite contiguë de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let brut: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&brut)?));
            continue;
        }

        return Err(ErreurCalc::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Un jeton numérique : au plus un point, au moins un chiffre.
fn lire_nombre(brut: &str) -> Result<f64, ErreurCalc> {
    if brut.matches('.').count() > 1 {
        return Err(ErreurCalc::syntaxe(format!("nombre invalide: {brut}")));
    }
    if !brut.chars().any(|c| c.is_ascii_digit()) {
        return Err(ErreurCalc::syntaxe("point décimal seul"));
    }

    // ".5" et "5." : on complète pour rester sur la forme la plus classique
    let mut txt = String::with_capacity(brut.len() + 2);
    if brut.starts_with('.') {
        txt.push('0');
    }
    txt.push_str(brut);
    if brut.ends_with('.') {
        txt.push('0');
    }

    txt.parse::<f64>()
        .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: {brut}")))
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::Pos => "u+".to_string(),
            Tok::Neg => "u-".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
