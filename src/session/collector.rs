//! Input parsing for the label prompts
//!
//! Pure functions turning one answered prompt into a value or an
//! [`InputError`]. Sequencing and re-prompting live in [`super::Session`].

use super::error::InputError;
use crate::models::{Nutrient, Nutrition};
use crate::nutrition::ServingUnit;

/// Length of the leading decimal number in `s`: optional sign, digits with an
/// optional fraction, optional exponent. Zero when no digit is found.
fn leading_number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

/// Read the number a token starts with, ignoring whatever trails it, so
/// `100g` reads as 100. Infinite and non-numeric tokens yield `None`.
fn parse_number(token: &str) -> Option<f64> {
    let s = token.trim_start();
    let len = leading_number_len(s);
    if len == 0 {
        return None;
    }
    s[..len].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the nutrition facts line.
///
/// Tokens are separated by single spaces, so two spaces in a row leave an
/// empty token that counts as absent. Absent optional nutrients become 0; an
/// optional token that isn't a number becomes NaN. Absent or non-numeric
/// mandatory nutrients fail the whole line. Tokens past the eleventh are
/// ignored.
pub fn parse_nutrition_line(line: &str) -> Result<Nutrition, InputError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    let mut missing = Vec::new();

    let nutrition = Nutrition::from_fn(|nutrient| {
        let token = tokens
            .get(nutrient.index())
            .copied()
            .filter(|t| !t.is_empty());

        match token {
            Some(t) => match parse_number(t) {
                Some(v) => v,
                None => {
                    if nutrient.is_mandatory() {
                        missing.push(nutrient);
                    }
                    f64::NAN
                }
            },
            None if nutrient.is_mandatory() => {
                missing.push(nutrient);
                f64::NAN
            }
            None => 0.0,
        }
    });

    if missing.is_empty() {
        Ok(nutrition)
    } else {
        Err(InputError::MissingMandatory { missing })
    }
}

/// Parse the unit answer, exactly `g` or `ml`
pub fn parse_unit(answer: &str) -> Result<ServingUnit, InputError> {
    ServingUnit::from_token(answer).ok_or_else(|| InputError::InvalidUnit(answer.to_string()))
}

/// Parse a serving size: a finite number greater than zero
pub fn parse_serving_size(answer: &str) -> Result<f64, InputError> {
    match parse_number(answer.trim()) {
        Some(v) if v > 0.0 => Ok(v),
        _ => Err(InputError::InvalidServingSize(answer.to_string())),
    }
}

/// Which mandatory nutrients a failed line lacked, for logging
pub fn describe_missing(missing: &[Nutrient]) -> String {
    missing
        .iter()
        .map(|n| n.label())
        .collect::<Vec<_>>()
        .join(", ")
}
