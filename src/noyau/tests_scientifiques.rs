//! Tests scientifiques (campagne) : comparaison à un évaluateur de référence.
//!
//! But : vérifier précédence, associativité et parenthèses sur des expressions générées.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//!
//! La référence calcule sur l’arbre généré (mêmes opérations f64, même ordre),
//! puis imprime l’arbre avec le MINIMUM de parenthèses : c’est le noyau qui
//! doit retrouver la structure.

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::format::{arrondir_significatif, formater_nombre, CHIFFRES_SIGNIFICATIFS};
use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
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

/* ------------------------ Arbre de référence ------------------------ */

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

enum Noeud {
    Lit(&'static str, f64),
    Neg(Box<Noeud>),
    Bin(Op, Box<Noeud>, Box<Noeud>),
}

fn prec(op: Op) -> u8 {
    match op {
        Op::Add | Op::Sub => 1,
        Op::Mul | Op::Div => 2,
    }
}

fn symbole(op: Op) -> &'static str {
    match op {
        Op::Add => "+",
        Op::Sub => "-",
        Op::Mul => "*",
        Op::Div => "/",
    }
}

impl Noeud {
    fn valeur(&self) -> f64 {
        match self {
            Noeud::Lit(_, v) => *v,
            Noeud::Neg(x) => -x.valeur(),
            Noeud::Bin(op, a, b) => {
                let (a, b) = (a.valeur(), b.valeur());
                match op {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                    Op::Div => a / b,
                }
            }
        }
    }

    /// Précédence du noeud vu de l’extérieur (littéraux et négations entre parenthèses : atomes).
    fn prec_externe(&self) -> u8 {
        match self {
            Noeud::Bin(op, _, _) => prec(*op),
            _ => 3,
        }
    }

    fn texte(&self) -> String {
        match self {
            Noeud::Lit(t, _) => t.to_string(),
            // toujours entre parenthèses : évite "5--3" (refusé par le noyau)
            Noeud::Neg(x) => format!("(-{})", x.texte_atome()),
            Noeud::Bin(op, a, b) => {
                let p = prec(*op);
                let ta = if a.prec_externe() < p {
                    format!("({})", a.texte())
                } else {
                    a.texte()
                };
                // associativité gauche : à droite, même précédence => parenthèses
                let tb = if b.prec_externe() <= p {
                    format!("({})", b.texte())
                } else {
                    b.texte()
                };
                format!("{ta}{}{tb}", symbole(*op))
            }
        }
    }

    fn texte_atome(&self) -> String {
        match self {
            Noeud::Bin(..) => format!("({})", self.texte()),
            _ => self.texte(),
        }
    }
}

const LITTERAUX: [(&str, f64); 10] = [
    ("0", 0.0),
    ("1", 1.0),
    ("2", 2.0),
    ("3", 3.0),
    ("7", 7.0),
    ("10", 10.0),
    ("0.1", 0.1),
    ("2.5", 2.5),
    (".3", 0.3),
    ("123.456", 123.456),
];

fn generer(rng: &mut Rng, depth: usize) -> Noeud {
    if depth == 0 || rng.pick(5) == 0 {
        let (t, v) = LITTERAUX[rng.pick(LITTERAUX.len() as u32) as usize];
        return Noeud::Lit(t, v);
    }
    match rng.pick(9) {
        0 => Noeud::Neg(Box::new(generer(rng, depth - 1))),
        k => {
            let op = match k % 4 {
                0 => Op::Add,
                1 => Op::Sub,
                2 => Op::Mul,
                _ => Op::Div,
            };
            Noeud::Bin(op, Box::new(generer(rng, depth - 1)), Box::new(generer(rng, depth - 1)))
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn sci_reference_precedence_associativite() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0x5EED_CA1C_u64);
    let mut vus_ok = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let arbre = generer(&mut rng, 5);
        let expr = arbre.texte();
        let attendu = arbre.valeur();

        let obtenu = evaluer(&expr);
        if attendu.is_finite() {
            let attendu = if attendu == 0.0 {
                0.0
            } else {
                arrondir_significatif(attendu, CHIFFRES_SIGNIFICATIFS)
            };
            assert_eq!(obtenu, Ok(attendu), "expr={expr:?}");
            vus_ok += 1;
        } else {
            assert_eq!(obtenu, Err(ErreurCalc::ResultatNonFini), "expr={expr:?}");
        }
    }

    assert!(vus_ok > 100, "trop peu de succès: {vus_ok}");
}

#[test]
fn sci_idempotence_reinjection() {
    let mut rng = Rng::new(0xB0B_u64);

    for _ in 0..200 {
        let expr = generer(&mut rng, 4).texte();
        if let Ok(v) = evaluer(&expr) {
            let texte = formater_nombre(v);
            assert_eq!(evaluer(&texte), Ok(v), "expr={expr:?} texte={texte:?}");
        }
    }
}

#[test]
fn sci_idempotence_cas_limites() {
    for expr in ["0.1+0.2", "1/3", "-2/3", "1/7", "99999999*99999999", "1/1024/1024/1024"] {
        if let Ok(v) = evaluer(expr) {
            let texte = formater_nombre(v);
            assert_eq!(evaluer(&texte), Ok(v), "expr={expr:?}");
        }
    }
}

#[test]
fn sci_egalites_treizieme_chiffre() {
    // 13e chiffre significatif == 5 exactement : magnitude arrondie vers le haut
    let cas = [
        ("100000000000.5", 100000000001.0),
        ("100000000002.5", 100000000003.0),
        ("-100000000000.5", -100000000001.0),
        ("999999999999.5", 1000000000000.0),
        ("100000000001*0.5", 50000000000.5),
        ("1000000000001/2", 500000000001.0),
    ];
    for (expr, attendu) in cas {
        assert_eq!(evaluer(expr), Ok(attendu), "expr={expr:?}");
        let texte = formater_nombre(attendu);
        assert_eq!(evaluer(&texte), Ok(attendu), "réinjection {texte:?}");
    }
}

#[test]
fn sci_glyphes_equivalents() {
    let paires = [
        ("5×3", "5*3"),
        ("8÷2", "8/2"),
        ("8−2", "8-2"),
        ("(1−4)×2÷3", "(1-4)*2/3"),
        ("5×−3", "5*-3"),
    ];
    for (glyphes, ascii) in paires {
        assert_eq!(evaluer(glyphes), evaluer(ascii), "{glyphes:?} vs {ascii:?}");
    }
}

#[test]
fn sci_parentheses_profondes() {
    let n = 200;
    let expr = format!("{}1+2{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluer(&expr), Ok(3.0));

    let manque = format!("{}1+2{}", "(".repeat(n), ")".repeat(n - 1));
    assert!(matches!(evaluer(&manque), Err(ErreurCalc::SyntaxeMalformee(_))));
}

#[test]
fn sci_longue_somme() {
    // 5000 termes : la RPN est évaluée sans récursion
    let expr = vec!["0.5"; 5000].join("+");
    assert_eq!(evaluer(&expr), Ok(2500.0));
}

#[test]
fn sci_depassement() {
    let grand = "9".repeat(400);
    assert_eq!(evaluer(&grand), Err(ErreurCalc::ResultatNonFini));
    let produit = format!("{0}*{0}", "1".to_string() + &"0".repeat(200));
    assert_eq!(evaluer(&produit), Err(ErreurCalc::ResultatNonFini));
}
