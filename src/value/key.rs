//! Property keys and symbols
//!
//! A [`Key`] is one of three disjoint variants: a string, a non-negative
//! integer index, or a [`Symbol`]. String keys that spell a canonical array
//! index are folded into [`Key::Index`], so `"0"` and `0` name the same
//! property.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::Value;

// Ids below this are reserved for well-known symbols.
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(16);

static ITERATOR: Lazy<Symbol> = Lazy::new(|| Symbol::well_known(1, "Symbol.iterator"));
static ASYNC_ITERATOR: Lazy<Symbol> =
    Lazy::new(|| Symbol::well_known(2, "Symbol.asyncIterator"));

/// An opaque, unique property token.
///
/// Two symbols are equal only if they are clones of the same symbol; the
/// description is informational.
///
/// # Example
///
/// ```rust
/// use typeguard::Symbol;
///
/// let a = Symbol::new("tag");
/// let b = Symbol::new("tag");
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a fresh symbol with a description.
    pub fn new(description: impl Into<Arc<str>>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Some(description.into()),
        }
    }

    /// Create a fresh symbol without a description.
    pub fn anonymous() -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    /// The well-known `Symbol.iterator`.
    pub fn iterator() -> Self {
        ITERATOR.clone()
    }

    /// The well-known `Symbol.asyncIterator`.
    pub fn async_iterator() -> Self {
        ASYNC_ITERATOR.clone()
    }

    fn well_known(id: u64, description: &str) -> Self {
        Self {
            id,
            description: Some(Arc::from(description)),
        }
    }

    /// The description given at creation, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "Symbol({})", description),
            None => write!(f, "Symbol()"),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A property key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A string key that is not a canonical array index.
    String(Arc<str>),
    /// A non-negative integer index.
    Index(u32),
    /// A symbolic key.
    Symbol(Symbol),
}

impl Key {
    /// Convert a value into a key, the way a property access would.
    ///
    /// Strings (primitive or boxed), numbers (primitive or boxed, never NaN)
    /// and symbols convert; everything else returns `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::{Key, Value};
    ///
    /// assert_eq!(Key::from_value(&Value::from(3)), Some(Key::Index(3)));
    /// assert_eq!(Key::from_value(&Value::from("3")), Some(Key::Index(3)));
    /// assert_eq!(Key::from_value(&Value::from(-1.5)), Some(Key::from("-1.5")));
    /// assert_eq!(Key::from_value(&Value::Null), None);
    /// ```
    pub fn from_value(value: &Value) -> Option<Key> {
        if let Some(symbol) = value.as_symbol() {
            return Some(Key::Symbol(symbol.clone()));
        }
        if let Some(s) = value.string_data() {
            return Some(Key::from(s));
        }
        match value.number_data() {
            Some(n) if !n.is_nan() => Some(Key::from_number(n)),
            _ => None,
        }
    }

    fn from_number(n: f64) -> Key {
        if n.fract() == 0.0 && n >= 0.0 && n < u32::MAX as f64 {
            Key::Index(n as u32)
        } else {
            Key::String(Arc::from(number_to_string(n)))
        }
    }

    /// Returns `true` for symbolic keys.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    /// Returns the index if this key is an array index.
    pub fn as_index(&self) -> Option<u32> {
        match self {
            Key::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string if this key is a (non-index) string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(&**s),
            _ => None,
        }
    }

    // Enumeration order of own keys: indices, then strings, then symbols.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Key::Index(_) => 0,
            Key::String(_) => 1,
            Key::Symbol(_) => 2,
        }
    }
}

// Matches JavaScript's Number.prototype.toString: exponent notation outside
// [1e-6, 1e21), with an explicit `+` on positive exponents.
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", n)
    }
}

fn canonical_index(s: &str) -> Option<u32> {
    let index: u32 = s.parse().ok()?;
    (index != u32::MAX && index.to_string() == s).then_some(index)
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match canonical_index(s) {
            Some(index) => Key::Index(index),
            None => Key::String(Arc::from(s)),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::from(s.as_str())
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key::Index(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(index) if index != u32::MAX => Key::Index(index),
            _ => Key::String(Arc::from(index.to_string())),
        }
    }
}

impl From<Symbol> for Key {
    fn from(symbol: Symbol) -> Self {
        Key::Symbol(symbol)
    }
}

impl From<&Symbol> for Key {
    fn from(symbol: &Symbol) -> Self {
        Key::Symbol(symbol.clone())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(s) => write!(f, "{:?}", s),
            Key::Index(i) => write!(f, "{}", i),
            Key::Symbol(symbol) => write!(f, "[{}]", symbol),
        }
    }
}
