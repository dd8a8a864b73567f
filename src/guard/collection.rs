//! Collection and membership guards
//!
//! Homogeneous containers ([`is_array_of`], [`is_record_of`]), nominal
//! instances ([`is_instance_of`]) and literal membership ([`is_one_of`],
//! [`is_equal_to`]).

use super::combinators::Guard;
use crate::value::{Function, Key, Object, ObjectKind, Value};

/// Guard for arrays whose every element passes an element guard.
#[derive(Clone, Debug)]
pub struct IsArrayOf<G> {
    element: G,
}

impl<G: Guard> Guard for IsArrayOf<G> {
    type Target<'a> = Vec<G::Target<'a>>;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        value
            .as_object()?
            .elements()?
            .iter()
            .map(|element| self.element.narrow(element))
            .collect()
    }

    fn check(&self, value: &Value) -> bool {
        match value.as_object().and_then(Object::elements) {
            Some(elements) => elements.iter().all(|element| self.element.check(element)),
            None => false,
        }
    }
}

/// Create a guard for arrays whose elements all pass `element`.
///
/// The empty array passes any element guard.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let numbers = Value::from(vec![Value::from(1), Value::from(2)]);
/// assert_eq!(is_array_of(is_number()).narrow(&numbers), Some(vec![1.0, 2.0]));
///
/// let mixed = Value::from(vec![Value::from(1), Value::from("2")]);
/// assert!(!is_array_of(is_number()).check(&mixed));
/// ```
pub fn is_array_of<G: Guard>(element: G) -> IsArrayOf<G> {
    IsArrayOf { element }
}

/// Guard for ordinary objects whose every own property value passes a
/// value guard.
#[derive(Clone, Debug)]
pub struct IsRecordOf<G> {
    value: G,
}

impl<G: Guard> Guard for IsRecordOf<G> {
    type Target<'a> = Vec<(&'a Key, G::Target<'a>)>;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        let object = record(value)?;
        object
            .properties()
            .iter()
            .map(|(key, field)| self.value.narrow(field).map(|it| (key, it)))
            .collect()
    }

    fn check(&self, value: &Value) -> bool {
        match record(value) {
            Some(object) => object.properties().values().all(|field| self.value.check(field)),
            None => false,
        }
    }
}

// Every own property of an ordinary object lives in its property map.
fn record(value: &Value) -> Option<&Object> {
    value
        .as_object()
        .filter(|object| matches!(object.kind(), ObjectKind::Ordinary))
}

/// Create a guard for ordinary objects whose own property values, symbol
/// keyed ones included, all pass `value`.
///
/// The empty object passes any value guard.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let scores = Value::from(Object::builder().property("a", 1).property("b", 2).build());
/// assert!(is_record_of(is_number()).check(&scores));
/// assert!(is_record_of(is_number()).check(&Value::from(Object::builder().build())));
/// assert!(!is_record_of(is_number()).check(&Value::from(vec![Value::from(1)])));
/// ```
pub fn is_record_of<G: Guard>(value: G) -> IsRecordOf<G> {
    IsRecordOf { value }
}

/// Guard for instances of a constructor.
#[derive(Clone, Debug)]
pub struct IsInstanceOf {
    constructor: Function,
}

impl Guard for IsInstanceOf {
    type Target<'a> = &'a Object;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        let prototype = self.constructor.prototype_object()?;
        value
            .as_object()
            .filter(|object| object.inherits_from(prototype))
    }
}

/// Create a guard for objects whose prototype chain contains the
/// prototype object of `constructor`.
///
/// Non-constructors have no prototype object, so nothing is an instance of
/// them.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let animal = Function::class("Animal").build();
/// let dog = Function::class("Dog").extends(&animal).build();
/// let rex = Value::from(dog.new_instance().build());
///
/// assert!(is_instance_of(&dog).check(&rex));
/// assert!(is_instance_of(&animal).check(&rex));
/// assert!(!is_instance_of(&dog).check(&Value::from(animal.new_instance().build())));
/// ```
pub fn is_instance_of(constructor: &Function) -> IsInstanceOf {
    IsInstanceOf {
        constructor: constructor.clone(),
    }
}

/// Guard for members of a fixed list of values.
#[derive(Clone, Debug)]
pub struct IsOneOf {
    values: Vec<Value>,
}

impl Guard for IsOneOf {
    type Target<'a> = &'a Value;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        self.values
            .iter()
            .any(|member| member.same_value_zero(value))
            .then_some(value)
    }
}

/// Create a guard for values in `values`, compared with SameValueZero:
/// strict equality, except that NaN matches NaN.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let direction = is_one_of(["up", "down"]);
/// assert!(direction.check(&Value::from("up")));
/// assert!(!direction.check(&Value::from("left")));
/// ```
pub fn is_one_of<I>(values: I) -> IsOneOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    IsOneOf {
        values: values.into_iter().map(Into::into).collect(),
    }
}

/// Guard for one exact value.
#[derive(Clone, Debug)]
pub struct IsEqualTo {
    expected: Value,
}

impl Guard for IsEqualTo {
    type Target<'a> = &'a Value;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        (value == &self.expected).then_some(value)
    }
}

/// Create a guard for values strictly equal to `expected`.
///
/// Objects and functions compare by identity, and NaN equals nothing.
pub fn is_equal_to(expected: impl Into<Value>) -> IsEqualTo {
    IsEqualTo {
        expected: expected.into(),
    }
}
