//! Dynamic values
//!
//! Guards classify values whose type is not known statically. This module
//! provides that universe: a closed [`Value`] enum with primitives,
//! functions and objects, property keys, own properties and prototype
//! chains.
//!
//! Values are immutable once built and cheap to clone. Equality is strict
//! equality: primitives compare by value (so `NaN != NaN`), while symbols,
//! functions and objects compare by identity.
//!
//! # Example
//!
//! ```rust
//! use typeguard::{Key, Object, Value};
//!
//! let point = Value::from(Object::builder().property("x", 1).property("y", 2).build());
//!
//! assert!(point.has_own(&Key::from("x")));
//! // inherited from Object.prototype
//! assert!(point.has_in_chain(&Key::from("toString")));
//! assert!(!point.has_own(&Key::from("toString")));
//! assert_eq!(point.get(&Key::from("y")), Some(Value::from(2)));
//! ```

mod function;
mod intrinsics;
mod key;
mod object;
#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;
use std::sync::Arc;

pub use function::{ClassBuilder, Function, FunctionKind};
pub use key::{Key, Symbol};
pub use object::{Object, ObjectBuilder, ObjectKind};

use intrinsics::intrinsics;
use key::number_to_string;

/// A dynamically typed value.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// A boolean primitive.
    Boolean(bool),
    /// A number primitive (IEEE 754 double, NaN included).
    Number(f64),
    /// An arbitrary precision integer primitive, bounded to `i128` here.
    BigInt(i128),
    /// A string primitive.
    String(Arc<str>),
    /// A symbol primitive.
    Symbol(Symbol),
    /// A callable object.
    Function(Function),
    /// A non-callable object.
    Object(Object),
}

impl Value {
    /// The name `typeof` would report for this value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::Value;
    ///
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::from("x").type_of(), "string");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Object(_) => "object",
        }
    }

    /// Returns `true` for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Borrow the object, if this is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Borrow the function, if this is one.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Borrow the symbol, if this is one.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Number payload of a number primitive or a boxed number, NaN included.
    pub(crate) fn number_data(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Object(object) => match object.kind() {
                ObjectKind::BoxedNumber(n) => Some(*n),
                _ => None,
            },
            _ => None,
        }
    }

    /// String payload of a string primitive or a boxed string.
    pub(crate) fn string_data(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            Value::Object(object) => match object.kind() {
                ObjectKind::BoxedString(s) => Some(&**s),
                _ => None,
            },
            _ => None,
        }
    }

    // The prototype a property lookup continues with. Primitives are looked
    // up through the prototype of their boxed form.
    fn prototype(&self) -> Option<Object> {
        let intrinsics = intrinsics();
        match self {
            Value::Undefined | Value::Null => None,
            Value::Boolean(_) => Some(intrinsics.boolean_prototype.clone()),
            Value::Number(_) => Some(intrinsics.number_prototype.clone()),
            Value::BigInt(_) => Some(intrinsics.bigint_prototype.clone()),
            Value::String(_) => Some(intrinsics.string_prototype.clone()),
            Value::Symbol(_) => Some(intrinsics.symbol_prototype.clone()),
            Value::Function(_) => Some(intrinsics.function_prototype.clone()),
            Value::Object(object) => object.prototype().cloned(),
        }
    }

    fn own_property(&self, key: &Key) -> Option<Value> {
        match self {
            Value::String(s) => object::string_property(s, key),
            Value::Function(function) => function.get_own(key),
            Value::Object(object) => object.get_own(key),
            _ => None,
        }
    }

    /// Returns `true` if `key` is an own property of this value.
    ///
    /// Primitives other than strings have no own properties.
    pub fn has_own(&self, key: &Key) -> bool {
        self.own_property(key).is_some()
    }

    /// Returns `true` if `key` is found on this value or anywhere on its
    /// prototype chain. `null` and `undefined` have no properties.
    pub fn has_in_chain(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Look up `key` on this value, then along its prototype chain.
    pub fn get(&self, key: &Key) -> Option<Value> {
        if let Some(found) = self.own_property(key) {
            return Some(found);
        }
        let mut next = self.prototype();
        while let Some(object) = next {
            if let Some(found) = object.get_own(key) {
                return Some(found);
            }
            next = object.prototype().cloned();
        }
        None
    }

    /// Own property keys in enumeration order: indices ascending, then
    /// strings, then symbols.
    pub fn own_keys(&self) -> Vec<Key> {
        match self {
            Value::String(s) => object::string_keys(s),
            Value::Function(function) => function.own_keys(),
            Value::Object(object) => object.own_keys(),
            _ => Vec::new(),
        }
    }

    /// SameValueZero comparison: strict equality, except that NaN equals NaN.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self == other,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", number_to_string(*n)),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(symbol) => write!(f, "{:?}", symbol),
            Value::Function(function) => write!(f, "{:?}", function),
            Value::Object(object) => write!(f, "{:?}", object),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Object(Object::array(elements))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_equality() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_ne!(Value::Null, Value::Undefined);
        assert_eq!(Value::from("a"), Value::from(String::from("a")));

        let a = Object::builder().build();
        let b = Object::builder().build();
        assert_eq!(Value::from(a.clone()), Value::from(a));
        assert_ne!(Value::from(b.clone()), Value::from(Object::builder().build()));
    }

    #[test]
    fn test_same_value_zero() {
        let nan = Value::from(f64::NAN);
        assert!(nan.same_value_zero(&Value::from(f64::NAN)));
        assert!(Value::from(0.0).same_value_zero(&Value::from(-0.0)));
    }

    #[test]
    fn test_primitive_lookup_goes_through_boxed_prototype() {
        let s = Value::from("abc");
        assert!(s.has_own(&Key::from("length")));
        assert!(s.has_own(&Key::Index(2)));
        assert!(!s.has_own(&Key::Index(3)));
        assert_eq!(s.get(&Key::from("length")), Some(Value::from(3)));
        assert!(s.has_in_chain(&Symbol::iterator().into()));

        let n = Value::from(5);
        assert!(!n.has_own(&Key::from("toFixed")));
        assert!(n.has_in_chain(&Key::from("toFixed")));
        assert!(n.has_in_chain(&Key::from("toString")));
    }

    #[test]
    fn test_nullish_has_no_properties() {
        let key = Key::from("toString");
        assert!(!Value::Null.has_in_chain(&key));
        assert!(!Value::Undefined.has_in_chain(&key));
        assert!(Value::Null.own_keys().is_empty());
    }

    #[test]
    fn test_type_of() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::from(1).type_of(), "number");
        assert_eq!(Value::from(1i128).type_of(), "bigint");
        assert_eq!(Value::from(Symbol::anonymous()).type_of(), "symbol");
        assert_eq!(Value::from(Function::arrow("f")).type_of(), "function");
        assert_eq!(Value::from(Vec::<Value>::new()).type_of(), "object");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
