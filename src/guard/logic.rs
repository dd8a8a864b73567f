//! Logical combinators over N guards
//!
//! [`or`] and [`and`] take a tuple of guards (or a `Vec` for an unbounded
//! number of guards of one type) and produce one guard evaluating them left
//! to right with short-circuit.
//!
//! Rust has no variadic generics, so the tuple implementations are emitted
//! per arity by [`codegen`](crate::codegen) at build time. Tuples of up to
//! [`DEFAULT_MAX_ARITY`](crate::codegen::DEFAULT_MAX_ARITY) guards narrow
//! precisely:
//!
//! - `or((a, b, c))` narrows to `Either<A, Either<B, C>>`, the union of the
//!   member targets, tagged with the first member that matched.
//! - `and((a, b, c))` narrows to `(A, B, C)`, every member's view at once.
//!
//! Beyond that, `or(vec)` and `and(vec)` still evaluate any number of guards
//! but narrow only to the element guard's target; with a `Vec<Erased>` that
//! is the fully erased `&Value`.
//!
//! # Example
//!
//! ```rust
//! use typeguard::prelude::*;
//! use typeguard::Either;
//!
//! let value = Value::from("x");
//! match or((is_number(), is_string())).narrow(&value) {
//!     Some(Either::Left(n)) => panic!("unexpected number {n}"),
//!     Some(Either::Right(s)) => assert_eq!(s, "x"),
//!     None => panic!("expected a match"),
//! }
//! ```

use super::combinators::Guard;
use crate::either::Either;
use crate::value::Value;

/// A list of guards combined with OR logic.
///
/// Implemented for tuples of 2 up to the generated maximum arity, and for
/// `Vec<G>`.
pub trait AnyOf: Send + Sync {
    /// Typed view of the first member that matched.
    type Union<'a>;

    /// Evaluate members left to right, stopping at the first match.
    fn narrow_any<'a>(&self, value: &'a Value) -> Option<Self::Union<'a>>;
}

/// A list of guards combined with AND logic.
///
/// Implemented for tuples of 2 up to the generated maximum arity, and for
/// `Vec<G>`.
pub trait AllOf: Send + Sync {
    /// Typed views of every member.
    type Intersection<'a>;

    /// Evaluate members left to right, stopping at the first failure.
    fn narrow_all<'a>(&self, value: &'a Value) -> Option<Self::Intersection<'a>>;
}

include!(concat!(env!("OUT_DIR"), "/arity.rs"));

/// OR combinator - passes when any member passes.
#[derive(Clone, Copy, Debug)]
pub struct Or<L>(pub L);

impl<L: AnyOf> Guard for Or<L> {
    type Target<'a> = L::Union<'a>;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        self.0.narrow_any(value)
    }
}

/// AND combinator - passes when every member passes.
#[derive(Clone, Copy, Debug)]
pub struct And<L>(pub L);

impl<L: AllOf> Guard for And<L> {
    type Target<'a> = L::Intersection<'a>;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        self.0.narrow_all(value)
    }
}

/// Create a guard passing when any of `guards` passes.
///
/// Members are evaluated left to right; once one matches, the rest are never
/// invoked.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let nullish = or((is_null(), is_undefined()));
/// assert!(nullish.check(&Value::Null));
/// assert!(nullish.check(&Value::Undefined));
/// assert!(!nullish.check(&Value::from(0)));
///
/// // any number of guards of one type
/// let small = or(vec![is_equal_to(1), is_equal_to(2), is_equal_to(3)]);
/// assert!(small.check(&Value::from(2)));
/// ```
pub fn or<L: AnyOf>(guards: L) -> Or<L> {
    Or(guards)
}

/// Create a guard passing when all of `guards` pass.
///
/// Members are evaluated left to right; once one fails, the rest are never
/// invoked.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let point = and((has_with("x", is_number()), has_with("y", is_number())));
/// let value = Value::from(Object::builder().property("x", 1).property("y", 2).build());
/// assert!(point.check(&value));
/// ```
pub fn and<L: AllOf>(guards: L) -> And<L> {
    And(guards)
}
