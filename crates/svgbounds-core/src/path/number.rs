//! Numeric literal scanning for path data.

use serde::{Deserialize, Serialize};

use crate::error::{MalformedPathError, Result};

/// Which numeric literal grammar the tokenizer accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberGrammar {
    /// Path data number grammar: sign, digits, fraction and exponent.
    #[default]
    Full,
    /// Degraded mode: optional leading `-` followed by digits and dots.
    /// No `+` sign and no exponent.
    Legacy,
}

impl std::fmt::Display for NumberGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for NumberGrammar {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown number grammar '{}'", other)),
        }
    }
}

/// True if `b` can begin a numeric literal.
pub(crate) fn starts_number(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.')
}

fn skip_digits(bytes: &[u8], i: &mut usize) -> usize {
    let start = *i;
    while *i < bytes.len() && bytes[*i].is_ascii_digit() {
        *i += 1;
    }
    *i - start
}

/// Scans one numeric literal starting at `start`.
///
/// Returns the value and the byte offset just past the literal. A sign or a
/// second decimal point ends the literal, so `10-5` and `0.5.5` each yield two
/// numbers.
pub(crate) fn scan_number(
    input: &str,
    start: usize,
    grammar: NumberGrammar,
) -> Result<(f64, usize)> {
    let bytes = input.as_bytes();
    let mut i = start;

    let invalid = |end: usize| MalformedPathError::InvalidNumber {
        text: input[start..end.min(bytes.len())].to_string(),
        offset: start,
    };

    match grammar {
        NumberGrammar::Full => {
            if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
                i += 1;
            }
            let mut digits = skip_digits(bytes, &mut i);
            if i < bytes.len() && bytes[i] == b'.' {
                i += 1;
                digits += skip_digits(bytes, &mut i);
            }
            if digits == 0 {
                return Err(invalid(i).into());
            }
            if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
                i += 1;
                if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
                    i += 1;
                }
                if skip_digits(bytes, &mut i) == 0 {
                    return Err(invalid(i).into());
                }
            }
        }
        NumberGrammar::Legacy => {
            if i < bytes.len() && bytes[i] == b'-' {
                i += 1;
            }
            let body = i;
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                i += 1;
            }
            if i == body {
                return Err(invalid(i.max(start + 1)).into());
            }
            if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
                return Err(invalid(i + 1).into());
            }
        }
    }

    let text = &input[start..i];
    let value: f64 = text.parse().map_err(|_| invalid(i))?;
    if !value.is_finite() {
        return Err(MalformedPathError::NonFinite {
            text: text.to_string(),
            offset: start,
        }
        .into());
    }
    Ok((value, i))
}
