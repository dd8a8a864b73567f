//! # typeguard
//!
//! Composable runtime type guards over dynamic values.
//!
//! A guard inspects a [`Value`] whose type is not known statically and
//! reports whether it belongs to a type, shape or category. Each guard also
//! carries a narrowing contract: [`Guard::narrow`](guard::Guard::narrow)
//! returns the typed view of a matching value, so code on the true branch
//! works with an `f64`, a `&str` or a tuple of views instead of the raw
//! value.
//!
//! ## Quick Example
//!
//! ```rust
//! use typeguard::prelude::*;
//! use typeguard::Either;
//!
//! // number | string
//! let id = or((is_number(), is_string()));
//!
//! for value in [Value::from(7), Value::from("seven"), Value::Null] {
//!     match id.narrow(&value) {
//!         Some(Either::Left(n)) => println!("numeric id {}", n),
//!         Some(Either::Right(s)) => println!("named id {}", s),
//!         None => println!("no id"),
//!     }
//! }
//!
//! // structural matching: any object with the right fields passes
//! let user = is_like(Shape::new().field("id", id).field("name", is_string()));
//! let value = Value::from(
//!     Object::builder()
//!         .property("id", 1)
//!         .property("name", "ada")
//!         .build(),
//! );
//! assert!(user.check(&value));
//! ```
//!
//! ## Crate features
//!
//! - `serde`: `Deserialize` for [`Value`], to classify parsed input.
//! - `tracing`: trace events from [`guard::tracing`] and warnings on
//!   rejected shape descriptions.
//! - `cli`: the `gen-arity` binary printing the fixed-arity `or`/`and`
//!   implementations from [`codegen`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod codegen;
pub mod either;
pub mod error;
pub mod guard;
pub mod testing;
pub mod value;

// Re-exports
pub use either::Either;
pub use error::ShapeError;
pub use value::{
    ClassBuilder, Function, FunctionKind, Key, Object, ObjectBuilder, ObjectKind, Symbol, Value,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::guard::{
        and, has, has_with, is_any, is_array, is_array_like, is_array_of, is_async_iterable,
        is_base64_string, is_bigint, is_boolean, is_callable, is_constructor, is_date, is_defined,
        is_equal_to, is_function, is_hex_string, is_instance_of, is_iterable, is_key, is_key_of,
        is_like, is_map, is_not, is_null, is_number, is_number_string, is_object, is_one_of,
        is_promise, is_property, is_record, is_record_of, is_reg_exp, is_set, is_similar_to,
        is_string, is_symbol, is_undefined, is_weak_map, is_weak_set, or, Erased, Guard, GuardExt,
        Shape,
    };
    pub use crate::value::{Function, Object, Value};
}
