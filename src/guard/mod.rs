//! Composable runtime type guards
//!
//! A [`Guard`] classifies a dynamic [`Value`](crate::Value) and, when it
//! matches, narrows it to a typed view. Guards compose:
//!
//! - **Primitive classifiers**: [`is_number`], [`is_string`], [`is_date`], ...
//! - **Property and shape guards**: [`has`], [`has_with`], [`is_like`],
//!   [`is_similar_to`], [`is_key_of`]
//! - **Collection and membership guards**: [`is_array_of`], [`is_record_of`],
//!   [`is_instance_of`], [`is_one_of`], [`is_equal_to`]
//! - **Logical combinators**: [`or`], [`and`], [`is_not`], and the
//!   [`GuardExt`] methods
//!
//! Any `Fn(&Value) -> bool` closure is a guard too.
//!
//! # Example
//!
//! ```rust
//! use typeguard::prelude::*;
//!
//! let user = is_like(
//!     Shape::new()
//!         .field("name", is_string())
//!         .field("tags", is_array_of(is_string())),
//! );
//!
//! let value = Value::from(
//!     Object::builder()
//!         .property("name", "ada")
//!         .property("tags", vec![Value::from("admin")])
//!         .build(),
//! );
//! assert!(user.check(&value));
//! ```

mod collection;
mod combinators;
mod logic;
mod primitive;
mod property;
mod shape;
mod string;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use collection::{
    is_array_of, is_equal_to, is_instance_of, is_one_of, is_record_of, IsArrayOf, IsEqualTo,
    IsInstanceOf, IsOneOf, IsRecordOf,
};
pub use combinators::{is_not, Erased, Guard, GuardExt, Not};
pub use logic::{and, or, AllOf, And, AnyOf, Or};
pub use primitive::{
    is_any, is_array, is_array_like, is_async_iterable, is_bigint, is_boolean, is_callable,
    is_constructor, is_date, is_defined, is_function, is_iterable, is_key, is_map, is_null,
    is_number, is_object, is_promise, is_reg_exp, is_record, is_set, is_string, is_symbol,
    is_undefined, is_weak_map, is_weak_set, IsAny, IsArray, IsArrayLike, IsAsyncIterable,
    IsBigInt, IsBoolean, IsConstructor, IsDate, IsDefined, IsFunction, IsIterable, IsKey, IsMap,
    IsNull, IsNumber, IsObject, IsPromise, IsRecord, IsRegExp, IsSet, IsString, IsSymbol,
    IsUndefined, IsWeakMap, IsWeakSet,
};
pub use property::{has, has_with, is_key_of, is_property, Has, HasWith, IsKeyOf};
pub use shape::{is_like, is_similar_to, IsLike, IsSimilarTo, Shape};
pub use string::{is_base64_string, is_hex_string, is_number_string, Matches};

#[cfg(feature = "tracing")]
pub use self::tracing::{GuardTracingExt, Traced};
