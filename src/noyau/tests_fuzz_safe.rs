//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline avec des chaînes quelconques sur l’alphabet du clavier.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : tout succès est fini et stable à la réinjection

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::format::formater_nombre;
use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

// chiffres surreprésentés, sinon presque tout échoue
const ALPHABET: [char; 24] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '1', '2', '3', '+', '-', '*', '/', '(',
    ')', '.', ' ', '×', '÷', '−',
];

fn gen_chaine(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(16) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_alphabet_clavier() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_chaine(&mut rng);

        match evaluer(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                assert_eq!(evaluer(&formater_nombre(v)), Ok(v), "expr={expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                // l’alphabet du clavier ne contient aucune lettre ni intrus
                assert!(
                    matches!(e, ErreurCalc::SyntaxeMalformee(_) | ErreurCalc::ResultatNonFini),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = a.clone();

    for _ in 0..200 {
        let ea = gen_chaine(&mut a);
        let eb = gen_chaine(&mut b);
        assert_eq!(ea, eb);
        assert_eq!(evaluer(&ea), evaluer(&eb));
    }
}

#[test]
fn fuzz_safe_intrus_ascii() {
    // tout ASCII imprimable hors alphabet : lettre => CaracteresInvalides, sinon ExpressionInvalide
    for c in (0x21u8..0x7f).map(char::from) {
        if c.is_ascii_digit() || "+-*/().".contains(c) {
            continue;
        }
        let expr = format!("1{c}2");
        let attendu = if c.is_ascii_alphabetic() {
            ErreurCalc::CaracteresInvalides
        } else {
            ErreurCalc::ExpressionInvalide
        };
        assert_eq!(evaluer(&expr), Err(attendu), "expr={expr:?}");
    }
}
