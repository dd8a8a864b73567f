//! Primitive classifiers
//!
//! Leaf guards, one per dynamic type tag. Each is a unit struct with a
//! lowercase constructor function, total over every [`Value`] and narrowing
//! to the natural Rust view of the matched variant.
//!
//! Two numeric rules apply: [`is_number`] rejects NaN (primitive or boxed)
//! and [`is_date`] rejects invalid dates.

use super::combinators::Guard;
use super::property::{has_with, HasWith};
use crate::value::{Function, Key, Object, ObjectKind, Symbol, Value};

/// Guard for `undefined`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUndefined;

impl Guard for IsUndefined {
    type Target<'a> = ();

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        matches!(value, Value::Undefined).then_some(())
    }
}

/// Create a guard for `undefined`.
pub fn is_undefined() -> IsUndefined {
    IsUndefined
}

/// Guard for `null`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNull;

impl Guard for IsNull {
    type Target<'a> = ();

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        matches!(value, Value::Null).then_some(())
    }
}

/// Create a guard for `null`.
pub fn is_null() -> IsNull {
    IsNull
}

/// Guard for values carrying meaningful data.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsDefined;

impl Guard for IsDefined {
    type Target<'a> = &'a Value;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        if value.is_nullish() {
            return None;
        }
        if let Some(n) = value.number_data() {
            return (!n.is_nan()).then_some(value);
        }
        match value.as_object().map(Object::kind) {
            Some(ObjectKind::Date(time)) if time.is_nan() => None,
            _ => Some(value),
        }
    }
}

/// Create a guard rejecting `null`, `undefined`, NaN (primitive or boxed)
/// and invalid dates.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// assert!(is_defined().check(&Value::from(0)));
/// assert!(is_defined().check(&Value::from("")));
/// assert!(!is_defined().check(&Value::Null));
/// assert!(!is_defined().check(&Value::from(f64::NAN)));
/// assert!(!is_defined().check(&Value::from(Object::invalid_date())));
/// ```
pub fn is_defined() -> IsDefined {
    IsDefined
}

/// Guard for boolean primitives.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBoolean;

impl Guard for IsBoolean {
    type Target<'a> = bool;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        match value {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Create a guard for boolean primitives.
pub fn is_boolean() -> IsBoolean {
    IsBoolean
}

/// Guard for numbers, narrowing to `f64`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNumber;

impl Guard for IsNumber {
    type Target<'a> = f64;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value.number_data().filter(|n| !n.is_nan())
    }
}

/// Create a guard for numbers.
///
/// Number primitives and boxed numbers pass; NaN never does.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// assert_eq!(is_number().narrow(&Value::from(1.5)), Some(1.5));
/// assert!(is_number().check(&Value::from(Object::boxed_number(5.0))));
/// assert!(!is_number().check(&Value::from(f64::NAN)));
/// assert!(!is_number().check(&Value::from("5")));
/// ```
pub fn is_number() -> IsNumber {
    IsNumber
}

/// Guard for bigint primitives.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBigInt;

impl Guard for IsBigInt {
    type Target<'a> = i128;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        match value {
            Value::BigInt(n) => Some(*n),
            _ => None,
        }
    }
}

/// Create a guard for bigint primitives.
pub fn is_bigint() -> IsBigInt {
    IsBigInt
}

/// Guard for strings, narrowing to `&str`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsString;

impl Guard for IsString {
    type Target<'a> = &'a str;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value.string_data()
    }
}

/// Create a guard for strings, primitive or boxed.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let boxed = Value::from(Object::boxed_string("abc"));
/// assert_eq!(is_string().narrow(&boxed), Some("abc"));
/// assert!(!is_string().check(&Value::from(1)));
/// ```
pub fn is_string() -> IsString {
    IsString
}

/// Guard for symbols.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsSymbol;

impl Guard for IsSymbol {
    type Target<'a> = &'a Symbol;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value.as_symbol()
    }
}

/// Create a guard for symbols.
pub fn is_symbol() -> IsSymbol {
    IsSymbol
}

/// Guard for functions of any kind.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsFunction;

impl Guard for IsFunction {
    type Target<'a> = &'a Function;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value.as_function()
    }
}

/// Create a guard for functions.
pub fn is_function() -> IsFunction {
    IsFunction
}

/// Create a guard for callables. Same as [`is_function`].
pub fn is_callable() -> IsFunction {
    IsFunction
}

/// Guard that rejects everything.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsAny;

impl Guard for IsAny {
    type Target<'a> = &'a Value;

    #[inline]
    fn narrow<'a>(&self, _value: &'a Value) -> Option<Self::Target<'a>> {
        None
    }
}

/// Create a guard that is always false.
///
/// Useful as the identity of `or` and as a placeholder field guard.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// assert!(!is_any().check(&Value::from(1)));
/// assert!(or((is_any(), is_number())).check(&Value::from(1)));
/// ```
pub fn is_any() -> IsAny {
    IsAny
}

/// Guard for functions usable with `new`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsConstructor;

impl Guard for IsConstructor {
    type Target<'a> = &'a Function;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value.as_function().filter(|f| f.is_constructor())
    }
}

/// Create a guard for constructors: classes and declared functions.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// assert!(is_constructor().check(&Value::from(Function::class("A").build())));
/// assert!(!is_constructor().check(&Value::from(Function::arrow("f"))));
/// ```
pub fn is_constructor() -> IsConstructor {
    IsConstructor
}

/// Guard for non-null objects.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsObject;

impl Guard for IsObject {
    type Target<'a> = &'a Object;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value.as_object()
    }
}

/// Create a guard for non-null objects. Functions are not objects here.
pub fn is_object() -> IsObject {
    IsObject
}

/// Guard for ordinary keyed objects.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsRecord;

impl Guard for IsRecord {
    type Target<'a> = &'a Object;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value
            .as_object()
            .filter(|object| matches!(object.kind(), ObjectKind::Ordinary))
    }
}

/// Create a guard for ordinary objects: plain objects, null-prototype
/// objects and class instances, but not arrays or other built-ins.
pub fn is_record() -> IsRecord {
    IsRecord
}

/// Guard for arrays, narrowing to their elements.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsArray;

impl Guard for IsArray {
    type Target<'a> = &'a [Value];

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value.as_object()?.elements()
    }
}

/// Create a guard for arrays.
pub fn is_array() -> IsArray {
    IsArray
}

/// Guard for valid dates, narrowing to the time value in milliseconds.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsDate;

impl Guard for IsDate {
    type Target<'a> = f64;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        match value.as_object()?.kind() {
            ObjectKind::Date(time) if !time.is_nan() => Some(*time),
            _ => None,
        }
    }
}

/// Create a guard for valid dates.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// assert_eq!(is_date().narrow(&Value::from(Object::date(0.0))), Some(0.0));
/// assert!(!is_date().check(&Value::from(Object::invalid_date())));
/// ```
pub fn is_date() -> IsDate {
    IsDate
}

// One guard per built-in object kind whose target is the object itself.
macro_rules! kind_guard {
    ($(#[$doc:meta] $name:ident, $ctor:ident, $pat:pat),* $(,)?) => {
        $(
            #[$doc]
            #[derive(Clone, Copy, Default, Debug)]
            pub struct $name;

            impl Guard for $name {
                type Target<'a> = &'a Object;

                #[inline]
                fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
                    value
                        .as_object()
                        .filter(|object| matches!(object.kind(), $pat))
                }
            }

            #[$doc]
            pub fn $ctor() -> $name {
                $name
            }
        )*
    };
}

kind_guard! {
    /// Guard for regular expressions.
    IsRegExp, is_reg_exp, ObjectKind::RegExp { .. },
    /// Guard for maps.
    IsMap, is_map, ObjectKind::Map(_),
    /// Guard for sets.
    IsSet, is_set, ObjectKind::Set(_),
    /// Guard for weak maps.
    IsWeakMap, is_weak_map, ObjectKind::WeakMap,
    /// Guard for weak sets.
    IsWeakSet, is_weak_set, ObjectKind::WeakSet,
}

// Protocol guards: a method or field discovered through `has_with`.
macro_rules! protocol_guard {
    ($(#[$doc:meta] $name:ident, $ctor:ident, $key:expr, $field:expr;)*) => {
        $(
            #[$doc]
            #[derive(Clone, Debug)]
            pub struct $name(HasWith<IsFunction>);

            impl Guard for $name {
                type Target<'a> = &'a Value;

                #[inline]
                fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
                    self.0.narrow(value)
                }
            }

            #[$doc]
            pub fn $ctor() -> $name {
                $name(has_with($key, $field))
            }
        )*
    };
}

protocol_guard! {
    /// Guard for thenables: values with a callable `then`.
    IsPromise, is_promise, "then", is_function();
    /// Guard for values with a callable `Symbol.iterator`.
    IsIterable, is_iterable, Symbol::iterator(), is_function();
    /// Guard for values with a callable `Symbol.asyncIterator`.
    IsAsyncIterable, is_async_iterable, Symbol::async_iterator(), is_function();
}

/// Guard for values with a numeric `length`.
#[derive(Clone, Debug)]
pub struct IsArrayLike(HasWith<IsNumber>);

impl Guard for IsArrayLike {
    type Target<'a> = &'a Value;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        self.0.narrow(value)
    }
}

/// Create a guard for array-likes: arrays, strings, functions and any
/// object with a numeric `length`.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let like = Value::from(Object::builder().property("length", 2).build());
/// assert!(is_array_like().check(&like));
/// assert!(is_array_like().check(&Value::from("ab")));
/// assert!(!is_array_like().check(&Value::from(2)));
/// ```
pub fn is_array_like() -> IsArrayLike {
    IsArrayLike(has_with("length", is_number()))
}

/// Guard for values usable as property keys, narrowing to the [`Key`].
#[derive(Clone, Copy, Default, Debug)]
pub struct IsKey;

impl Guard for IsKey {
    type Target<'a> = Key;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        Key::from_value(value)
    }
}

/// Create a guard for keys: strings, numbers and symbols.
pub fn is_key() -> IsKey {
    IsKey
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullish() {
        assert_eq!(is_undefined().narrow(&Value::Undefined), Some(()));
        assert!(!is_undefined().check(&Value::Null));
        assert!(is_null().check(&Value::Null));
        assert!(!is_null().check(&Value::Undefined));
        assert!(!is_null().check(&Value::from(0)));
    }

    #[test]
    fn test_number_edge_cases() {
        assert!(!is_number().check(&Value::from(f64::NAN)));
        assert!(is_number().check(&Value::from(Object::boxed_number(5.0))));
        assert!(!is_number().check(&Value::from(Object::boxed_number(f64::NAN))));
        assert!(is_number().check(&Value::from(f64::INFINITY)));
        assert!(!is_number().check(&Value::from(1i128)));
    }

    #[test]
    fn test_defined() {
        assert!(is_defined().check(&Value::from(false)));
        assert!(is_defined().check(&Value::from(Object::date(1.0))));
        assert!(!is_defined().check(&Value::Undefined));
        assert!(!is_defined().check(&Value::from(Object::boxed_number(f64::NAN))));
    }

    #[test]
    fn test_boxed_boolean_is_not_boolean() {
        assert_eq!(is_boolean().narrow(&Value::from(false)), Some(false));
        assert!(!is_boolean().check(&Value::from(Object::boxed_boolean(true))));
        assert!(is_object().check(&Value::from(Object::boxed_boolean(true))));
    }

    #[test]
    fn test_object_excludes_functions_and_null() {
        assert!(!is_object().check(&Value::Null));
        assert!(!is_object().check(&Value::from(Function::arrow("f"))));
        assert!(is_object().check(&Value::from(Object::array(vec![]))));
    }

    #[test]
    fn test_record() {
        let class = Function::class("A").build();
        assert!(is_record().check(&Value::from(class.new_instance().build())));
        assert!(is_record().check(&Value::from(Object::builder().null_prototype().build())));
        assert!(!is_record().check(&Value::from(Object::array(vec![]))));
        assert!(!is_record().check(&Value::from(Object::map(vec![]))));
    }

    #[test]
    fn test_array_narrows_to_elements() {
        let value = Value::from(vec![Value::from(1), Value::from(2)]);
        assert_eq!(is_array().narrow(&value).map(<[Value]>::len), Some(2));
        assert!(!is_array().check(&Value::from(Object::set(vec![]))));
    }

    #[test]
    fn test_kind_guards() {
        let re = Value::from(Object::reg_exp("a+", "g"));
        let map = Value::from(Object::map(vec![]));
        let weak = Value::from(Object::weak_map());
        assert!(is_reg_exp().check(&re));
        assert!(is_map().check(&map));
        assert!(!is_map().check(&weak));
        assert!(is_weak_map().check(&weak));
        assert!(is_set().check(&Value::from(Object::set(vec![]))));
        assert!(is_weak_set().check(&Value::from(Object::weak_set())));
        assert!(!is_reg_exp().check(&Value::from("a+")));
    }

    #[test]
    fn test_promise_is_thenable() {
        assert!(is_promise().check(&Value::from(Object::promise())));
        let thenable = Object::builder()
            .property("then", Function::arrow("then"))
            .build();
        assert!(is_promise().check(&Value::from(thenable)));
        let not_callable = Object::builder().property("then", 1).build();
        assert!(!is_promise().check(&Value::from(not_callable)));
    }

    #[test]
    fn test_iterables() {
        assert!(is_iterable().check(&Value::from("abc")));
        assert!(is_iterable().check(&Value::from(Object::array(vec![]))));
        assert!(is_iterable().check(&Value::from(Object::set(vec![]))));
        assert!(!is_iterable().check(&Value::from(Object::builder().build())));
        assert!(!is_iterable().check(&Value::from(Object::weak_set())));

        let stream = Object::builder()
            .property(Symbol::async_iterator(), Function::async_fn("next"))
            .build();
        assert!(is_async_iterable().check(&Value::from(stream)));
        assert!(!is_async_iterable().check(&Value::from(Object::array(vec![]))));
    }

    #[test]
    fn test_array_like() {
        assert!(is_array_like().check(&Value::from(Object::array(vec![]))));
        assert!(is_array_like().check(&Value::from(Function::builtin("f", 1))));
        let bad = Object::builder().property("length", "2").build();
        assert!(!is_array_like().check(&Value::from(bad)));
    }

    #[test]
    fn test_any_rejects_everything() {
        for value in [
            Value::Undefined,
            Value::Null,
            Value::from(true),
            Value::from(0),
            Value::from(""),
            Value::from(Object::builder().build()),
            Value::from(Function::arrow("f")),
        ] {
            assert!(!is_any().check(&value));
        }
    }

    #[test]
    fn test_callable_is_function() {
        let arrow = Value::from(Function::arrow("f"));
        let class = Value::from(Function::class("A").build());
        assert!(is_callable().check(&arrow));
        assert!(is_callable().check(&class));
        assert!(!is_callable().check(&Value::from(Object::builder().build())));
    }

    #[test]
    fn test_key() {
        assert_eq!(is_key().narrow(&Value::from("a")), Some(Key::from("a")));
        assert_eq!(is_key().narrow(&Value::from(1)), Some(Key::Index(1)));
        let sym = Symbol::new("s");
        assert_eq!(
            is_key().narrow(&Value::from(sym.clone())),
            Some(Key::Symbol(sym))
        );
        assert!(!is_key().check(&Value::from(true)));
        assert!(!is_key().check(&Value::from(f64::NAN)));
    }
}
