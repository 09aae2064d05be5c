use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

// ASCII digits only; `\d` would also accept other scripts' digits.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{2}$").expect("valid date pattern"));

/// Trims `raw` and checks it against `DD.MM.YY`.
pub fn parse_date(raw: &str) -> Result<String, ValidationError> {
    let date = raw.trim();
    if DATE_PATTERN.is_match(date) {
        Ok(date.to_string())
    } else {
        Err(ValidationError::InvalidDate {
            input: raw.to_string(),
        })
    }
}

/// Parses a distance in kilometers. Must be finite and strictly positive.
pub fn parse_distance(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(km) if km.is_finite() && km > 0.0 => Ok(km),
        _ => Err(ValidationError::InvalidDistance {
            input: raw.to_string(),
        }),
    }
}

/// Splits a `DATE:KM` command-line argument at the first `:`.
///
/// Only the shape is checked here; the halves go through the same
/// validation as the form.
pub fn split_entry_arg(arg: &str) -> Option<(&str, &str)> {
    let (date, km) = arg.split_once(':')?;
    if date.is_empty() || km.is_empty() {
        return None;
    }
    Some((date, km))
}
