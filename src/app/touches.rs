//! src/app/touches.rs
//!
//! Identifiants des touches du pavé (ButtonId) + disposition 6×5.
//!
//! Le libellé d’une touche est aussi son texte canonique : c’est exactement ce qui
//! est ajouté au tampon (`sin`, `√`, `π`...). Le noyau sait lire tous ces libellés.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Zero,
    Un,
    Deux,
    Trois,
    Quatre,
    Cinq,
    Six,
    Sept,
    Huit,
    Neuf,
    Point,
    ParOuvrante,
    ParFermante,
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Racine,
    Pi,
    E,
    Sin,
    Cos,
    Tan,
    Log,
    Exp,
    /// C : vide le tampon (garde Ans)
    Clear,
    /// DEL : retire le dernier caractère
    Del,
    /// = : évalue
    Egal,
    /// Ans : rappelle le dernier résultat
    Ans,
}

/// Ce que fait une touche, vu du contrôleur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Inserer(&'static str),
    Clear,
    Del,
    Evaluer,
    Rappel,
}

/// Disposition du pavé, rangée par rangée.
pub const RANGEES: [[ButtonId; 5]; 6] = {
    use ButtonId::*;
    [
        [Sept, Huit, Neuf, Divise, Sin],
        [Quatre, Cinq, Six, Fois, Cos],
        [Un, Deux, Trois, Moins, Tan],
        [Zero, Point, ParOuvrante, ParFermante, Log],
        [Racine, Pi, E, Puissance, Exp],
        [Clear, Del, Plus, Egal, Ans],
    ]
};

impl ButtonId {
    /// Toutes les touches, dans l’ordre du pavé.
    pub fn toutes() -> impl Iterator<Item = ButtonId> {
        RANGEES.into_iter().flatten()
    }

    pub fn label(self) -> &'static str {
        use ButtonId::*;
        match self {
            Zero => "0",
            Un => "1",
            Deux => "2",
            Trois => "3",
            Quatre => "4",
            Cinq => "5",
            Six => "6",
            Sept => "7",
            Huit => "8",
            Neuf => "9",
            Point => ".",
            ParOuvrante => "(",
            ParFermante => ")",
            Plus => "+",
            Moins => "-",
            Fois => "*",
            Divise => "/",
            Puissance => "^",
            Racine => "√",
            Pi => "π",
            E => "e",
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Log => "log",
            Exp => "exp",
            Clear => "C",
            Del => "DEL",
            Egal => "=",
            Ans => "Ans",
        }
    }

    pub fn action(self) -> Action {
        match self {
            ButtonId::Clear => Action::Clear,
            ButtonId::Del => Action::Del,
            ButtonId::Egal => Action::Evaluer,
            ButtonId::Ans => Action::Rappel,
            jeton => Action::Inserer(jeton.label()),
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("touche inconnue: {0:?}")]
pub struct ParseButtonError(pub String);

impl FromStr for ButtonId {
    type Err = ParseButtonError;

    /// Libellé exact (sensible à la casse : "C" et "DEL", pas "c").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonId::toutes()
            .find(|b| b.label() == s)
            .ok_or_else(|| ParseButtonError(s.to_string()))
    }
}
