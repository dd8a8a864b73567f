//! Error types
//!
//! Guards never fail: a value that does not match is a `false`, not an
//! error. The one error path is building a shape guard from a dynamic
//! shape description, where a malformed description is a programming
//! mistake reported at construction time.

use std::error::Error;
use std::fmt;

use crate::value::Key;

/// Error building a shape guard from a dynamic value.
///
/// # Example
///
/// ```rust
/// use typeguard::guard::IsLike;
/// use typeguard::{Key, Object, ShapeError, Value};
///
/// let shape = Value::from(Object::builder().property("name", "not a guard").build());
/// let err = IsLike::from_value(&shape).unwrap_err();
/// assert_eq!(err, ShapeError::NotAGuard { key: Key::from("name") });
/// assert_eq!(err.to_string(), "shape field \"name\" is not a guard function");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A field of the shape is not a guard function.
    NotAGuard {
        /// The offending field.
        key: Key,
    },
    /// The shape itself is not an object.
    NotAnObject {
        /// `typeof` of the given shape.
        type_of: &'static str,
    },
}

impl ShapeError {
    /// The offending key, if the error is about a single field.
    pub fn key(&self) -> Option<&Key> {
        match self {
            ShapeError::NotAGuard { key } => Some(key),
            ShapeError::NotAnObject { .. } => None,
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NotAGuard { key } => {
                write!(f, "shape field {} is not a guard function", key)
            }
            ShapeError::NotAnObject { type_of } => {
                write!(f, "shape must be an object, got {}", type_of)
            }
        }
    }
}

impl Error for ShapeError {}
