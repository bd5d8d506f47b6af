//! Noyau d’évaluation
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (mots entiers, √ π × ÷ −)
//! - expr.rs     : AST numérique
//! - analyse.rs  : descente récursive + garde-fou de profondeur
//! - eval.rs     : calcul f64 + contrôle du domaine + pipeline complet
//! - format.rs   : arrondi décimal exact (10 chiffres)
//! - erreur.rs   : EvalError (Syntax / Domain)

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate, evaluate_to_string, ERREUR_AFFICHEE};
