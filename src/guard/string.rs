//! String format guards
//!
//! Guards for strings (primitive or boxed) whose contents match a fixed
//! format. Patterns are compiled once, on first use.

use once_cell::sync::Lazy;
use regex::Regex;

use super::combinators::Guard;
use crate::value::Value;

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[+-]?[0-9]+(?:\.[0-9]*)?(?:e[+-]?[0-9]+)?$").expect("valid number pattern")
});

static HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[0-9a-f]*$").expect("valid hex pattern"));

static BASE64: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{4}|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)$")
        .expect("valid base64 pattern")
});

/// Guard for strings matching a pattern.
#[derive(Clone, Copy, Debug)]
pub struct Matches {
    pattern: &'static Lazy<Regex>,
}

impl Guard for Matches {
    type Target<'a> = &'a str;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value.string_data().filter(|s| self.pattern.is_match(s))
    }
}

/// Create a guard for decimal numerals with an optional sign, fraction and
/// exponent.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// assert!(is_number_string().check(&Value::from("-1.5e3")));
/// assert!(!is_number_string().check(&Value::from(".5")));
/// assert!(!is_number_string().check(&Value::from(15)));
/// ```
pub fn is_number_string() -> Matches {
    Matches { pattern: &NUMBER }
}

/// Create a guard for strings made of hexadecimal digits, in either case.
/// The empty string passes.
pub fn is_hex_string() -> Matches {
    Matches { pattern: &HEX }
}

/// Create a guard for padded base64 strings.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// assert!(is_base64_string().check(&Value::from("aGk=")));
/// assert!(!is_base64_string().check(&Value::from("aGk")));
/// assert!(!is_base64_string().check(&Value::from("")));
/// ```
pub fn is_base64_string() -> Matches {
    Matches { pattern: &BASE64 }
}
