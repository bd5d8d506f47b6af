// src/noyau/expr.rs
//
// AST numérique (f64), construit pour une seule évaluation puis jeté.
// - Number   : littéral
// - Constant : π ou e
// - Chaine   : suite plate de + - ou de * / (n-aire, évaluée en boucle)
// - Binary   : ^ seulement (associatif à droite, profondeur gardée par l’analyse)
// - Func     : sin cos tan log exp sqrt (argument entre parenthèses)
// - Neg      : moins unaire

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn symbole(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }
}

/// Fonctions unaires du pavé. Trig en radians, `Log` en base 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Exp,
    Sqrt,
}

impl Fonction {
    /// Identificateurs reconnus comme fonctions (mot entier, minuscules).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "log" => Some(Fonction::Log),
            "exp" => Some(Fonction::Exp),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Exp => "exp",
            Fonction::Sqrt => "sqrt",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "pi" => Some(Constante::Pi),
            "e" => Some(Constante::E),
            _ => None,
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constante),
    /// `premier op1 x1 op2 x2 ...`, groupé à gauche. Jamais vide : `suite` a au moins un terme.
    Chaine {
        premier: Box<Expr>,
        suite: Vec<(BinOp, Expr)>,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Func {
        func: Fonction,
        arg: Box<Expr>,
    },
    Neg(Box<Expr>),
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Referme une chaîne : un seul opérande => l’opérande lui-même.
    pub fn chaine(premier: Expr, suite: Vec<(BinOp, Expr)>) -> Expr {
        if suite.is_empty() {
            premier
        } else {
            Expr::Chaine {
                premier: Box::new(premier),
                suite,
            }
        }
    }

    pub fn func(func: Fonction, arg: Expr) -> Expr {
        Expr::Func {
            func,
            arg: Box::new(arg),
        }
    }
}

/// Forme entièrement parenthésée (journal + tests de structure).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(v) => write!(f, "{v}"),
            Expr::Constant(Constante::Pi) => write!(f, "π"),
            Expr::Constant(Constante::E) => write!(f, "e"),
            // "((a+b)-c)" sans récursion sur la longueur de la chaîne
            Expr::Chaine { premier, suite } => {
                for _ in suite {
                    f.write_str("(")?;
                }
                write!(f, "{premier}")?;
                for (op, x) in suite {
                    write!(f, "{}{x})", op.symbole())?;
                }
                Ok(())
            }
            Expr::Binary { op, left, right } => write!(f, "({left}{}{right})", op.symbole()),
            Expr::Func { func, arg } => write!(f, "{}({arg})", func.nom()),
            Expr::Neg(x) => write!(f, "(-{x})"),
        }
    }
}
