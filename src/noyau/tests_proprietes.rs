//! Tests de propriétés + fuzz safe : invariants + robustesse + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, jamais de résultat non fini, texte et valeur d’accord

use std::time::{Duration, Instant};

use super::format::{formater, DECIMALES};
use super::{evaluate, evaluate_to_string, EvalError};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Décimaux à un chiffre après la virgule au plus : les résultats restent des
/// décimaux courts, donc l’arrondi à 10 chiffres ne tombe jamais sur une frontière.
fn gen_atom(rng: &mut Rng) -> String {
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}.{}", rng.pick(10))
    } else {
        format!("{n}")
    }
}

/// + - * et moins unaire seulement (aucune erreur de domaine possible).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(5) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("{}-{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({})*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        _ => format!("-{}", gen_expr(rng, depth - 1)),
    }
}

/// Suite de touches du pavé tirées au hasard (souvent malformée, c’est le but).
fn gen_touches(rng: &mut Rng) -> String {
    const TOUCHES: [&str; 27] = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "(", ")", "+", "-", "*", "/", "^",
        "√", "π", "e", "sin", "cos", "tan", "log", "exp", "1",
    ];
    let n = rng.pick(8) as usize;
    (0..n)
        .map(|_| TOUCHES[rng.pick(TOUCHES.len() as u32) as usize])
        .collect()
}

/// Caractères quelconques (hors pavé compris).
fn gen_bruit(rng: &mut Rng) -> String {
    const CARS: [char; 16] = [
        '1', '9', '.', '(', ')', '+', '^', 'x', 'E', '$', ' ', '√', 'π', '÷', '_', '\'',
    ];
    let n = rng.pick(10) as usize;
    (0..n)
        .map(|_| CARS[rng.pick(CARS.len() as u32) as usize])
        .collect()
}

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/// Vérifie les invariants d’une évaluation quelconque et renvoie si elle a réussi.
fn check_invariants(expr: &str) -> bool {
    let v = evaluate(expr);
    let t = evaluate_to_string(expr);

    // Déterminisme
    assert_eq!(v, evaluate(expr), "expr={expr:?}");

    match (&v, &t) {
        (Ok(x), Ok(txt)) => {
            assert!(x.is_finite(), "expr={expr:?} x={x}");
            assert_eq!(txt.parse::<f64>().ok(), Some(*x), "expr={expr:?} txt={txt:?}");
            assert!(!txt.contains('e'), "exposant dans {txt:?}");
            true
        }
        (Err(_), Err(marque)) => {
            assert_eq!(*marque, "Error");
            false
        }
        _ => panic!("valeur et texte en désaccord: expr={expr:?} v={v:?} t={t:?}"),
    }
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_somme_de_deux_expressions() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let e1 = gen_expr(&mut rng, 2);
        let e2 = gen_expr(&mut rng, 2);

        let a = evaluate(&e1).unwrap_or_else(|e| panic!("e1={e1:?} err={e}"));
        let b = evaluate(&e2).unwrap_or_else(|e| panic!("e2={e2:?} err={e}"));

        let concat = format!("{e1}+{e2}");
        let attendu = formater(a + b, DECIMALES).unwrap_or_else(|| panic!("a+b non fini"));
        let obtenu = evaluate_to_string(&concat).unwrap_or_else(|e| panic!("{concat:?} => {e}"));

        assert_eq!(obtenu, attendu, "e1={e1:?} e2={e2:?}");
    }
}

#[test]
fn prop_exemples_de_reference() {
    assert!(matches!(evaluate("1/0"), Err(EvalError::Domain(_))));
    assert!(matches!(evaluate("log(-5)"), Err(EvalError::Domain(_))));
    assert!(matches!(evaluate("√(-1)"), Err(EvalError::Domain(_))));
    assert_eq!(evaluate("2^3^2"), Ok(512.0));
    assert_eq!(evaluate("sin(0)"), Ok(0.0));
    assert_eq!(evaluate("cos(0)"), Ok(1.0));
    assert_eq!(evaluate_to_string("0.1+0.2").as_deref(), Ok("0.3"));
}

/* ------------------------ Fuzz safe ------------------------ */

#[test]
fn fuzz_safe_touches_du_pave() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_touches(&mut rng);
        if check_invariants(&expr) {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_caracteres_quelconques() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2000 {
        budget(t0, max);
        let expr = gen_bruit(&mut rng);
        check_invariants(&expr);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(evaluate_to_string(&expr).as_deref(), Ok("400"));
}

#[test]
fn fuzz_safe_somme_plate_longue() {
    // Chaîne plate : une seule Chaine n-aire, parcourue en boucle (pile du thread de test)
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let expr = vec!["1"; 20_000].join("+");
    assert_eq!(evaluate(&expr), Ok(20_000.0));
    budget(t0, max);

    // mélange + - * / collé, tel qu’un collage dans le champ
    let expr = vec!["2*3/3-1"; 10_000].join("+");
    assert_eq!(evaluate_to_string(&expr).as_deref(), Ok("10000"));
    budget(t0, max);
}

#[test]
fn fuzz_safe_imbrication_extreme_refusee() {
    let expr = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(evaluate(&expr), Err(EvalError::Syntax(_))));

    let expr = format!("{}1", "√(".repeat(5_000));
    assert!(matches!(evaluate(&expr), Err(EvalError::Syntax(_))));
}
