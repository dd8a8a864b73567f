//! Structural shape guards
//!
//! A [`Shape`] maps property keys to field guards. [`is_like`] accepts any
//! object on which every field is present and accepted by its guard;
//! [`is_similar_to`] also lets a field be absent when its guard accepts
//! `undefined`.
//!
//! Matching is structural only. Class identity is never consulted, so a
//! plain object carrying the right fields is indistinguishable from a class
//! instance that inherits them.
//!
//! # Example
//!
//! ```rust
//! use typeguard::prelude::*;
//!
//! let point = is_like(Shape::new().field("x", is_number()).field("y", is_number()));
//!
//! let plain = Value::from(Object::builder().property("x", 1).property("y", 2).build());
//! let class = Function::class("Point").member("x", 0).member("y", 0).build();
//! let instance = Value::from(class.new_instance().build());
//!
//! assert!(point.check(&plain));
//! assert!(point.check(&instance));
//! assert!(!point.check(&Value::from(Object::builder().property("x", 1).build())));
//! ```

use indexmap::IndexMap;

use super::combinators::{Erased, Guard};
use crate::error::ShapeError;
use crate::value::{Key, Object, Value};

/// An ordered mapping from property key to field guard.
#[derive(Clone, Debug, Default)]
pub struct Shape {
    fields: IndexMap<Key, Erased>,
}

impl Shape {
    /// An empty shape. Every object matches it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a field.
    pub fn field<G>(mut self, key: impl Into<Key>, guard: G) -> Self
    where
        G: Guard + 'static,
    {
        self.fields.insert(key.into(), Erased::new(guard));
        self
    }

    /// Build a shape from a dynamic shape object.
    ///
    /// Every own property, symbol keys included, must be a guard function
    /// (see [`Function::from_guard`](crate::Function::from_guard)).
    pub fn from_value(shape: &Value) -> Result<Self, ShapeError> {
        let object = match shape {
            Value::Object(object) => object,
            other => {
                return Err(reject(ShapeError::NotAnObject {
                    type_of: other.type_of(),
                }))
            }
        };

        let mut fields = IndexMap::new();
        for key in object.own_keys() {
            let guard = object
                .get_own(&key)
                .as_ref()
                .and_then(Value::as_function)
                .and_then(|function| function.guard().cloned());
            match guard {
                Some(guard) => {
                    fields.insert(key, guard);
                }
                None => return Err(reject(ShapeError::NotAGuard { key })),
            }
        }
        Ok(Self { fields })
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the shape has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.fields.keys()
    }
}

#[cfg(feature = "tracing")]
fn reject(err: ShapeError) -> ShapeError {
    tracing::warn!(error = %err, "rejected shape description");
    err
}

#[cfg(not(feature = "tracing"))]
fn reject(err: ShapeError) -> ShapeError {
    err
}

/// Guard for objects whose fields all match a shape.
#[derive(Clone, Debug)]
pub struct IsLike {
    shape: Shape,
}

impl IsLike {
    /// Build the guard from a dynamic shape object, failing on the first
    /// field that is not a guard function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::guard::IsLike;
    /// use typeguard::prelude::*;
    ///
    /// let shape = Value::from(
    ///     Object::builder()
    ///         .property("id", Function::from_guard("isNumber", is_number()))
    ///         .build(),
    /// );
    /// let guard = IsLike::from_value(&shape)?;
    /// assert!(guard.check(&Value::from(Object::builder().property("id", 1).build())));
    /// # Ok::<(), typeguard::ShapeError>(())
    /// ```
    pub fn from_value(shape: &Value) -> Result<Self, ShapeError> {
        Shape::from_value(shape).map(|shape| Self { shape })
    }

    /// The shape being matched.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Guard for IsLike {
    type Target<'a> = &'a Object;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        let object = value.as_object()?;
        self.shape
            .fields
            .iter()
            .all(|(key, guard)| value.get(key).is_some_and(|field| guard.check(&field)))
            .then_some(object)
    }
}

/// Create a guard for objects on which every field of `shape` is present
/// and accepted by its guard.
pub fn is_like(shape: Shape) -> IsLike {
    IsLike { shape }
}

/// Guard for objects whose looked-up fields all match a shape, absent
/// fields reading as `undefined`.
#[derive(Clone, Debug)]
pub struct IsSimilarTo {
    shape: Shape,
}

impl IsSimilarTo {
    /// Build the guard from a dynamic shape object.
    pub fn from_value(shape: &Value) -> Result<Self, ShapeError> {
        Shape::from_value(shape).map(|shape| Self { shape })
    }
}

impl Guard for IsSimilarTo {
    type Target<'a> = &'a Object;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        let object = value.as_object()?;
        self.shape
            .fields
            .iter()
            .all(|(key, guard)| guard.check(&value.get(key).unwrap_or_default()))
            .then_some(object)
    }
}

/// Create a guard like [`is_like`] that hands each field guard the looked-up
/// value, or `undefined` when the field is absent. A field whose guard
/// accepts `undefined` is therefore optional.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let named = is_similar_to(
///     Shape::new()
///         .field("name", is_string())
///         .field("nick", is_string().or(is_undefined())),
/// );
/// assert!(named.check(&Value::from(Object::builder().property("name", "a").build())));
/// assert!(!named.check(&Value::from(Object::builder().property("nick", "b").build())));
/// ```
pub fn is_similar_to(shape: Shape) -> IsSimilarTo {
    IsSimilarTo { shape }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{is_function, is_number, is_undefined};
    use crate::value::{Function, Symbol};

    fn class_a() -> Function {
        Function::class("A").member("a", 0).method("method").build()
    }

    #[test]
    fn test_like_matches_instances_and_plain_objects() {
        let a = class_a();
        let like_a = is_like(Shape::new().field("a", is_number()).field("method", is_function()));

        assert!(like_a.check(&Value::from(a.new_instance().build())));
        let duck = Object::builder()
            .property("a", 1)
            .property("method", Function::arrow("method"))
            .build();
        assert!(like_a.check(&Value::from(duck)));
        assert!(!like_a.check(&Value::from(Object::builder().property("a", 1).build())));
    }

    #[test]
    fn test_like_rejects_non_objects() {
        let empty = is_like(Shape::new());
        assert!(empty.check(&Value::from(Object::builder().build())));
        assert!(!empty.check(&Value::from("string")));
        assert!(!empty.check(&Value::Null));
        assert!(!empty.check(&Value::from(Function::arrow("f"))));
    }

    #[test]
    fn test_like_symbol_fields() {
        let id = Symbol::new("id");
        let guard = is_like(Shape::new().field(id.clone(), is_number()));
        let tagged = Object::builder().property(id, 1).build();
        assert!(guard.check(&Value::from(tagged)));
        assert!(!guard.check(&Value::from(Object::builder().build())));
    }

    #[test]
    fn test_like_absent_field_is_not_undefined() {
        let shape = Shape::new().field("x", is_undefined());
        let empty = Value::from(Object::builder().build());
        assert!(!is_like(shape.clone()).check(&empty));
        assert!(is_similar_to(shape).check(&empty));
    }

    #[test]
    fn test_from_value() {
        let id = Symbol::new("id");
        let shape = Value::from(
            Object::builder()
                .property("n", Function::from_guard("isNumber", is_number()))
                .property(id.clone(), Function::from_guard("isFunction", is_function()))
                .build(),
        );
        let guard = IsLike::from_value(&shape).unwrap();
        assert_eq!(guard.shape().len(), 2);

        let good = Object::builder()
            .property("n", 1)
            .property(id, Function::arrow("f"))
            .build();
        assert!(guard.check(&Value::from(good)));
    }

    #[test]
    fn test_from_value_rejects_non_guards() {
        let id = Symbol::new("id");
        let shape = Value::from(Object::builder().property(id.clone(), 1).build());
        assert_eq!(
            IsLike::from_value(&shape).unwrap_err(),
            ShapeError::NotAGuard { key: Key::Symbol(id) }
        );

        let plain_function = Value::from(
            Object::builder()
                .property("f", Function::arrow("f"))
                .build(),
        );
        assert!(IsSimilarTo::from_value(&plain_function).is_err());

        assert_eq!(
            IsLike::from_value(&Value::from(1)).unwrap_err(),
            ShapeError::NotAnObject { type_of: "number" }
        );
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_rejection_is_logged() {
            let shape = Value::from(Object::builder().property("bad", true).build());
            assert!(IsLike::from_value(&shape).is_err());
            assert!(logs_contain("rejected shape description"));
        }
    }
}
