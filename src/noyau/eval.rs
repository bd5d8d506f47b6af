//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> descente récursive -> Expr -> calcul f64 (domaine vérifié à chaque noeud)
//!          -> arrondi décimal exact (DECIMALES) -> valeur + texte
//!
//! Seule la grammaire de `analyse.rs` est évaluée : aucun autre chemin d’exécution.

use tracing::debug;

use super::analyse::parse;
use super::erreur::EvalError;
use super::expr::{BinOp, Expr, Fonction};
use super::format::{formater, DECIMALES};
use super::jetons::{format_tokens, tokenize};

/// Marqueur affiché à la place du tampon quand l’évaluation échoue.
pub const ERREUR_AFFICHEE: &str = "Error";

/// API publique : évalue une expression, résultat arrondi à DECIMALES chiffres.
pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    evaluer(text).map(|(v, _)| v)
}

/// Enveloppe texte : décimal arrondi, ou le marqueur "Error" (Syntax et Domain confondus).
pub fn evaluate_to_string(text: &str) -> Result<String, &'static str> {
    evaluer(text)
        .map(|(_, txt)| txt)
        .map_err(|_| ERREUR_AFFICHEE)
}

/// Pipeline complet + journal : (valeur arrondie, texte arrondi).
fn evaluer(text: &str) -> Result<(f64, String), EvalError> {
    let resultat = pipeline(text);

    match &resultat {
        Ok((_, txt)) => debug!(entree = text, resultat = %txt, "évaluation réussie"),
        Err(e) => debug!(entree = text, erreur = %e, "évaluation refusée"),
    }

    resultat
}

/// Le texte est calculé une seule fois depuis la valeur brute; la valeur en est relue.
fn pipeline(text: &str) -> Result<(f64, String), EvalError> {
    // 1) Jetons
    let jetons = tokenize(text)?;

    // 2) AST
    let expr = parse(&jetons)?;
    debug!(jetons = %format_tokens(&jetons), expr = %expr, "expression analysée");

    // 3) Calcul
    let brut = calculer(&expr)?;

    // 4) Arrondi
    let txt =
        formater(brut, DECIMALES).ok_or_else(|| EvalError::domain("résultat non fini"))?;
    let v = txt
        .parse::<f64>()
        .map_err(|_| EvalError::domain(format!("résultat illisible '{txt}'")))?;

    Ok((v, txt))
}

/// Calcul récursif sur l’imbrication seulement : une Chaine est parcourue en boucle.
/// Chaque noeud doit rester fini; les cas indéfinis sont refusés
/// AVANT le calcul quand ils sont connus (÷0, log ≤ 0, √ négatif).
fn calculer(expr: &Expr) -> Result<f64, EvalError> {
    let v = match expr {
        Expr::Number(v) => *v,
        Expr::Constant(c) => c.valeur(),
        Expr::Neg(x) => -calculer(x)?,

        Expr::Chaine { premier, suite } => {
            let mut acc = calculer(premier)?;
            for (op, x) in suite {
                acc = appliquer(*op, acc, calculer(x)?)?;
                fini(acc, expr)?;
            }
            acc
        }

        Expr::Binary { op, left, right } => appliquer(*op, calculer(left)?, calculer(right)?)?,

        Expr::Func { func, arg } => {
            let x = calculer(arg)?;
            match func {
                Fonction::Sin => x.sin(),
                Fonction::Cos => x.cos(),
                Fonction::Tan => x.tan(),
                Fonction::Exp => x.exp(),
                Fonction::Log => {
                    if x <= 0.0 {
                        return Err(EvalError::domain("log d’un nombre non positif"));
                    }
                    x.log10()
                }
                Fonction::Sqrt => {
                    if x < 0.0 {
                        return Err(EvalError::domain("√ d’un nombre négatif"));
                    }
                    x.sqrt()
                }
            }
        }
    };

    fini(v, expr)
}

fn appliquer(op: BinOp, a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => {
            if b == 0.0 {
                return Err(EvalError::domain("division par zéro"));
            }
            a / b
        }
        BinOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(EvalError::domain("zéro élevé à une puissance négative"));
            }
            a.powf(b)
        }
    })
}

/// NaN (ex: (-8)^(1/3)) ou dépassement (ex: exp(1000))
fn fini(v: f64, expr: &Expr) -> Result<f64, EvalError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvalError::domain(format!("résultat non fini dans {expr}")))
    }
}
