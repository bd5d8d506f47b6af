// src/noyau/erreur.rs
//
// Deux familles seulement :
// - Syntax : la chaîne ne respecte pas la grammaire (jeton inconnu, parenthèses, opérande vide)
// - Domain : opération mathématiquement indéfinie (÷0, log ≤ 0, √ négatif, non fini)
//
// L’UI les écrase toutes les deux en "Error"; la distinction reste pour les tests et le journal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Chaîne hors grammaire.
    #[error("erreur de syntaxe: {0}")]
    Syntax(String),

    /// Résultat indéfini (ou non fini).
    #[error("erreur de domaine: {0}")]
    Domain(String),
}

impl EvalError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
