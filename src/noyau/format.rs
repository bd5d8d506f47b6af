// src/noyau/format.rs
//
// Lecture décimale du résultat.
// Le f64 est converti EXACTEMENT en rationnel (valeur binaire réelle), puis arrondi
// à `decimales` chiffres (demi -> loin de zéro) et écrit en décimal simple :
// jamais d’exposant, zéros de fin retirés, "-0" -> "0".
//
// C’est ce qui fait que 0.1+0.2 s’affiche "0.3" et pas "0.30000000000000004".

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Précision d’affichage (chiffres après la virgule).
pub const DECIMALES: usize = 10;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal, zéros de fin retirés.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 || frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/// x -> entier “scalé” = round(x * 10^digits), calculé sur la valeur binaire exacte.
/// None si x n’est pas fini.
fn float_scaled(x: f64, digits: usize) -> Option<BigInt> {
    let r = BigRational::from_float(x)?;
    let scale = BigRational::from_integer(pow10(digits));
    Some((r * scale).round().to_integer())
}

/// Texte décimal arrondi à `decimales` chiffres. None si x est NaN/infini.
pub fn formater(x: f64, decimales: usize) -> Option<String> {
    let scaled = float_scaled(x, decimales)?;
    // -0 et les négatifs minuscules arrondis à zéro donnent un scaled nul, donc pas de signe
    Some(scaled_to_decimal(scaled, decimales))
}
