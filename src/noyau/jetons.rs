// src/noyau/jetons.rs

use super::erreur::EvalError;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes (mot entier, normalisé en minuscules).
    // NOTE: l’analyse décide si c’est une fonction (sin/cos/...) ou une constante (pi/e).
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Jeton + position (index de caractère) dans l’entrée, pour les messages d’erreur.
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 12.5, .5, 5.)
/// - opérateurs + - * / ^ (et × ÷ − collés depuis ailleurs)
/// - parenthèses ( )
/// - π (équivaut à ident("pi")), √ (équivaut à ident("sqrt"))
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
///
/// Un identifiant est toujours lu en entier : "exp" ne contient jamais la constante e.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, EvalError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        let pos = i;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' | '−' => Some(Tok::Minus),
            '*' | '×' => Some(Tok::Star),
            '/' | '÷' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            'π' => Some(Tok::Ident("pi".to_string())),
            '√' => Some(Tok::Ident("sqrt".to_string())),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton { tok, pos });
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Jeton {
                tok: Tok::Ident(word.to_lowercase()),
                pos,
            });
            continue;
        }

        // Nombre décimal : chiffres avec au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                }
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();

            if points > 1 {
                return Err(EvalError::syntax(format!(
                    "nombre invalide '{txt}' (position {pos})"
                )));
            }
            let v = txt.parse::<f64>().map_err(|_| {
                EvalError::syntax(format!("nombre invalide '{txt}' (position {pos})"))
            })?;

            out.push(Jeton {
                tok: Tok::Num(v),
                pos,
            });
            continue;
        }

        return Err(EvalError::syntax(format!(
            "caractère inattendu: '{c}' (position {pos})"
        )));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for j in tokens {
        let s = match &j.tok {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::{format_tokens, tokenize, Tok};

    fn toks(s: &str) -> Vec<Tok> {
        tokenize(s)
            .unwrap_or_else(|e| panic!("tokenize({s:?}) erreur: {e}"))
            .into_iter()
            .map(|j| j.tok)
            .collect()
    }

    #[test]
    fn mots_entiers() {
        // "exp" reste un seul identifiant (pas de e + xp)
        assert_eq!(
            toks("exp(e)"),
            vec![
                Tok::Ident("exp".into()),
                Tok::LPar,
                Tok::Ident("e".into()),
                Tok::RPar
            ]
        );
    }

    #[test]
    fn symboles_unicode() {
        assert_eq!(
            toks("√π"),
            vec![Tok::Ident("sqrt".into()), Tok::Ident("pi".into())]
        );
        assert_eq!(toks("2×3÷4−1").len(), 7);
        assert!(toks("2×3").contains(&Tok::Star));
        assert!(toks("6÷3").contains(&Tok::Slash));
        assert!(toks("6−3").contains(&Tok::Minus));
    }

    #[test]
    fn decimaux() {
        assert_eq!(toks("12.5"), vec![Tok::Num(12.5)]);
        assert_eq!(toks(".5"), vec![Tok::Num(0.5)]);
        assert_eq!(toks("5."), vec![Tok::Num(5.0)]);
    }

    #[test]
    fn decimaux_invalides() {
        assert!(tokenize("1.2.3").unwrap_err().is_syntax());
        assert!(tokenize(".").unwrap_err().is_syntax());
    }

    #[test]
    fn majuscules_et_espaces() {
        assert_eq!(
            toks("  SIN ( PI ) "),
            vec![
                Tok::Ident("sin".into()),
                Tok::LPar,
                Tok::Ident("pi".into()),
                Tok::RPar
            ]
        );
    }

    #[test]
    fn caractere_inconnu() {
        let e = tokenize("2 $ 3").unwrap_err();
        assert!(e.is_syntax());
        assert!(e.to_string().contains("position 2"));
    }

    #[test]
    fn format_lisible() {
        let j = tokenize("2^(1+x)").unwrap();
        assert_eq!(format_tokens(&j), "2 ^ ( 1 + x )");
    }
}
