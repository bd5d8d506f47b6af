// src/noyau/analyse.rs
//
// Descente récursive -> AST
//
// Grammaire :
//   expr   := term (('+'|'-') term)*
//   term   := factor (('*'|'/') factor)*
//   factor := base ('^' factor)?          (associatif à droite)
//   base   := nombre | constante | fonction '(' expr ')' | '(' expr ')' | '-' base
//
// Règles:
// - Ident(name):
//    - si name ∈ {sin, cos, tan, log, exp, sqrt} => fonction, '(' obligatoire
//    - si name ∈ {pi, e} => constante
//    - sinon => erreur de syntaxe (aucune variable)
// - Pas de multiplication implicite : "2pi" ou "2(3)" sont refusés.
// - `expr` et `term` bouclent et rendent une Chaine plate : la longueur d’une
//   somme ne coûte aucune pile, seule l’imbrication compte (PROFONDEUR_MAX).

use super::erreur::EvalError;
use super::expr::{BinOp, Constante, Expr, Fonction};
use super::jetons::{Jeton, Tok};

/// Garde-fou : profondeur d’imbrication maximale (parenthèses, moins unaire, ^, fonctions).
pub const PROFONDEUR_MAX: usize = 200;

/// Construit l’AST à partir des jetons. Tous les jetons doivent être consommés.
pub fn parse(jetons: &[Jeton]) -> Result<Expr, EvalError> {
    if jetons.is_empty() {
        return Err(EvalError::syntax("entrée vide"));
    }

    let mut a = Analyseur {
        jetons,
        i: 0,
        profondeur: 0,
    };
    let e = a.expr()?;

    if let Some(j) = a.courant() {
        let msg = match j.tok {
            Tok::RPar => format!("parenthèse fermante sans ouvrante (position {})", j.pos),
            _ => format!("jeton inattendu (position {})", j.pos),
        };
        return Err(EvalError::syntax(msg));
    }

    Ok(e)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    i: usize,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Jeton> {
        self.jetons.get(self.i)
    }

    fn avance(&mut self) -> Option<&'a Jeton> {
        let j = self.jetons.get(self.i);
        if j.is_some() {
            self.i += 1;
        }
        j
    }

    fn voit(&self, tok: &Tok) -> bool {
        matches!(self.courant(), Some(j) if &j.tok == tok)
    }

    fn entrer(&mut self) -> Result<(), EvalError> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(EvalError::syntax(format!(
                "imbrication trop profonde (max {PROFONDEUR_MAX})"
            )));
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    fn expr(&mut self) -> Result<Expr, EvalError> {
        self.entrer()?;

        let premier = self.term()?;
        let mut suite = Vec::new();
        loop {
            let op = match self.courant().map(|j| &j.tok) {
                Some(Tok::Plus) => BinOp::Add,
                Some(Tok::Minus) => BinOp::Sub,
                _ => break,
            };
            self.avance();
            suite.push((op, self.term()?));
        }

        self.sortir();
        Ok(Expr::chaine(premier, suite))
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let premier = self.factor()?;
        let mut suite = Vec::new();
        loop {
            let op = match self.courant().map(|j| &j.tok) {
                Some(Tok::Star) => BinOp::Mul,
                Some(Tok::Slash) => BinOp::Div,
                _ => break,
            };
            self.avance();
            suite.push((op, self.factor()?));
        }
        Ok(Expr::chaine(premier, suite))
    }

    fn factor(&mut self) -> Result<Expr, EvalError> {
        let base = self.base()?;
        if !self.voit(&Tok::Caret) {
            return Ok(base);
        }
        self.avance();

        // 2^3^2 = 2^(3^2) : on redescend dans factor
        self.entrer()?;
        let exposant = self.factor()?;
        self.sortir();

        Ok(Expr::binary(BinOp::Pow, base, exposant))
    }

    fn base(&mut self) -> Result<Expr, EvalError> {
        let j = match self.avance() {
            Some(j) => j,
            None => return Err(EvalError::syntax("expression incomplète")),
        };

        match &j.tok {
            Tok::Num(v) => Ok(Expr::Number(*v)),

            Tok::Minus => {
                self.entrer()?;
                let x = self.base()?;
                self.sortir();
                Ok(Expr::Neg(Box::new(x)))
            }

            Tok::LPar => {
                let e = self.expr()?;
                self.fermer(j.pos)?;
                Ok(e)
            }

            Tok::Ident(nom) => {
                if let Some(c) = Constante::depuis_nom(nom) {
                    return Ok(Expr::Constant(c));
                }
                let func = Fonction::depuis_nom(nom).ok_or_else(|| {
                    EvalError::syntax(format!("identifiant inconnu '{nom}' (position {})", j.pos))
                })?;

                match self.avance() {
                    Some(Jeton { tok: Tok::LPar, pos }) => {
                        let arg = self.expr()?;
                        self.fermer(*pos)?;
                        Ok(Expr::func(func, arg))
                    }
                    _ => Err(EvalError::syntax(format!(
                        "{} doit être suivi de '(' (position {})",
                        func.nom(),
                        j.pos
                    ))),
                }
            }

            Tok::RPar | Tok::Plus | Tok::Star | Tok::Slash | Tok::Caret => Err(
                EvalError::syntax(format!("opérande manquant (position {})", j.pos)),
            ),
        }
    }

    /// Consomme la ')' attendue pour la '(' ouverte en `ouvrante`.
    fn fermer(&mut self, ouvrante: usize) -> Result<(), EvalError> {
        if self.voit(&Tok::RPar) {
            self.avance();
            Ok(())
        } else {
            Err(EvalError::syntax(format!(
                "parenthèse non fermée (position {ouvrante})"
            )))
        }
    }
}
