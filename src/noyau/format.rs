// src/noyau/format.rs
//
// Mise en forme du résultat :
// - arrondi à N chiffres significatifs (efface le “bruit” flottant : 0.1+0.2 -> 0.3)
// - texte relisible par le noyau (pas de notation exponentielle)
// - texte d’écran (exposant au-delà de 1e21 / en deçà de 1e-6)

use super::erreur::ErreurCalc;

/// Nombre de chiffres significatifs conservés pour un résultat.
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Chiffres décimaux suffisants pour écrire EXACTEMENT n’importe quel f64
/// (le plus petit sous-normal en demande 751 significatifs).
const PRECISION_EXACTE: usize = 780;

/// Arrondit `v` à `chiffres` chiffres significatifs.
///
/// Égalité exacte (le reste vaut pile une demi-unité) : on arrondit la
/// magnitude vers le haut (100000000000.5 -> 100000000001, -2.5 à 1 chiffre -> -3).
/// Sinon : écriture scientifique décimale (arrondi correct de std), puis relecture.
/// Les valeurs nulles ou non finies sont rendues telles quelles.
pub fn arrondir_significatif(v: f64, chiffres: usize) -> f64 {
    if v == 0.0 || !v.is_finite() {
        return v;
    }
    let chiffres = chiffres.max(1);

    if let Some(haut) = arrondi_egalite_vers_le_haut(v, chiffres) {
        return haut;
    }

    let precision = chiffres - 1;
    let txt = format!("{v:.precision$e}");
    txt.parse::<f64>().unwrap_or(v)
}

/// Some(arrondi) seulement si `v` tombe exactement entre deux candidats.
fn arrondi_egalite_vers_le_haut(v: f64, chiffres: usize) -> Option<f64> {
    let exact = format!("{:.*e}", PRECISION_EXACTE, v.abs());
    let (mantisse, exposant) = exact.split_once('e')?;
    let exposant: i64 = exposant.parse().ok()?;
    let chiffres_exacts: Vec<u8> = mantisse.bytes().filter(u8::is_ascii_digit).collect();

    let (tete, reste) = chiffres_exacts.split_at(chiffres.min(chiffres_exacts.len()));
    match reste.split_first() {
        Some((b'5', apres)) if apres.iter().all(|&c| c == b'0') => {}
        _ => return None,
    }

    // u64 : jusqu’à 19 chiffres
    let tete: u64 = std::str::from_utf8(tete).ok()?.parse().ok()?;
    let signe = if v < 0.0 { "-" } else { "" };
    let txt = format!("{signe}{}e{}", tete + 1, exposant - (chiffres as i64 - 1));
    txt.parse::<f64>().ok()
}

/// Dernière étape du pipeline : non fini => erreur ; sinon arrondi (et -0 => 0).
pub fn mettre_en_forme(v: f64) -> Result<f64, ErreurCalc> {
    if !v.is_finite() {
        return Err(ErreurCalc::ResultatNonFini);
    }
    if v == 0.0 {
        return Ok(0.0);
    }
    Ok(arrondir_significatif(v, CHIFFRES_SIGNIFICATIFS))
}

/// Texte d’un résultat, tel qu’il sera réinjecté comme nouvelle expression.
/// (Display de f64 : plus court texte relisible, jamais d’exposant)
pub fn formater_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Texte d’écran d’un résultat.
///
/// Comme `formater_nombre`, sauf pour les très grandes (>= 1e21) ou très petites
/// (< 1e-6) magnitudes : notation exponentielle courte ("1e+300", "1.5e-7").
pub fn formater_affichage(v: f64) -> String {
    let m = v.abs();
    if v == 0.0 || (1e-6..1e21).contains(&m) {
        return formater_nombre(v);
    }
    let txt = format!("{v:e}");
    match txt.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => txt,
    }
}
