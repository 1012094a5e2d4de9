use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// Decimal literal with optional sign and exponent, or a signed `Infinity`.
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$")
        .expect("decimal literal pattern is valid")
});

// Unsigned hex, octal or binary integer literal.
static RADIX_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:[xX](?P<hex>[0-9a-fA-F]+)|[oO](?P<oct>[0-7]+)|[bB](?P<bin>[01]+))$")
        .expect("radix literal pattern is valid")
});

/// Error returned when a string cannot be read as a number.
#[derive(Debug, Error)]
#[error("'{input}' is not a number")]
pub struct ParseNumberError {
    input: String,
}

/// Parses free text the way a numeric form input is read.
///
/// Surrounding whitespace is ignored and whitespace-only input reads as 0.
/// Accepted: decimals of any length (`"12.5"`, `"-3"`, `".5"`), scientific
/// notation (`"2e3"`, `"-1e-30"`), `Infinity`, and `0x`/`0o`/`0b` integers.
/// Anything else, including digit groups with separators such as `,` or `_`,
/// is an error.
pub fn parse_number(s: &str) -> Result<f64, ParseNumberError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let parsed = if DECIMAL_LITERAL.is_match(trimmed) {
        parse_decimal_literal(trimmed)
    } else {
        RADIX_LITERAL.captures(trimmed).and_then(|caps| {
            let (digits, radix) = if let Some(hex) = caps.name("hex") {
                (hex, 16)
            } else if let Some(oct) = caps.name("oct") {
                (oct, 8)
            } else {
                (caps.name("bin")?, 2)
            };
            Some(radix_to_f64(digits.as_str(), radix))
        })
    };

    parsed.ok_or_else(|| {
        tracing::trace!(input = %s, "not a number");
        ParseNumberError {
            input: s.to_string(),
        }
    })
}

/// Returns `true` when [`parse_number`] would accept `s`.
pub fn is_numeric(s: &str) -> bool {
    parse_number(s).is_ok()
}

fn parse_decimal_literal(literal: &str) -> Option<f64> {
    let (negative, unsigned) = match literal.as_bytes()[0] {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };
    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

// Folds digit by digit so literals wider than u128 still read (as a float).
fn radix_to_f64(
    digits: &str,
    radix: u32,
) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}
