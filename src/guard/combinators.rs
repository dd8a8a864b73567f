//! Core guard trait and method combinators
//!
//! This module provides the foundational [`Guard`] trait, the type-erased
//! [`Erased`] guard and the method-chaining combinators of [`GuardExt`].

use std::fmt;
use std::sync::Arc;

use super::logic::{And, Or};
use crate::value::Value;

/// A composable runtime type check over dynamic values.
///
/// A guard answers two questions about a value: whether it belongs to the
/// guarded type ([`check`](Guard::check)), and, if so, what its typed view
/// is ([`narrow`](Guard::narrow)). The narrowed `Target` is the static
/// contract of the guard: code on the true branch works with the typed view
/// instead of the raw [`Value`].
///
/// Guards are pure: evaluating one never mutates the value or the guard.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let value = Value::from(42);
/// if let Some(n) = is_number().narrow(&value) {
///     // n: f64
///     assert_eq!(n, 42.0);
/// }
/// assert!(!is_string().check(&value));
/// ```
pub trait Guard: Send + Sync {
    /// The typed view of a value that passed the guard.
    type Target<'a>;

    /// Return the typed view of `value` if it passes the guard.
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>>;

    /// Check if `value` passes the guard.
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.narrow(value).is_some()
    }
}

// Blanket impl for closures and fn items
impl<F> Guard for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    type Target<'a> = &'a Value;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        self(value).then_some(value)
    }

    #[inline]
    fn check(&self, value: &Value) -> bool {
        self(value)
    }
}

/// A type-erased, shareable guard.
///
/// Erasing forgets the narrowed type: the target of an `Erased` guard is the
/// value itself. Use it to store guards of different types together, as
/// shapes and homogeneous `or`/`and` lists do.
#[derive(Clone)]
pub struct Erased(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Erased {
    /// Erase a guard.
    pub fn new<G>(guard: G) -> Self
    where
        G: Guard + 'static,
    {
        Erased(Arc::new(move |value: &Value| guard.check(value)))
    }
}

impl Guard for Erased {
    type Target<'a> = &'a Value;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        (self.0)(value).then_some(value)
    }

    #[inline]
    fn check(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Erased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Erased")
    }
}

/// Extension trait for guard combinators.
///
/// Provides method chaining for combining guards. `a.or(b)` and `a.and(b)`
/// build the same guards as `or((a, b))` and `and((a, b))`.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let text_or_number = is_string().or(is_number());
/// assert!(text_or_number.check(&Value::from("a")));
/// assert!(text_or_number.check(&Value::from(1)));
/// assert!(!text_or_number.check(&Value::Null));
/// ```
pub trait GuardExt: Guard + Sized {
    /// Combine with OR logic.
    ///
    /// The result passes when either guard passes; `other` is only
    /// evaluated when `self` fails.
    fn or<G: Guard>(self, other: G) -> Or<(Self, G)> {
        Or((self, other))
    }

    /// Combine with AND logic.
    ///
    /// The result passes when both guards pass; `other` is only evaluated
    /// when `self` passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::prelude::*;
    ///
    /// let named = is_object().and(has("name"));
    /// let value = Value::from(Object::builder().property("name", "x").build());
    /// assert!(named.check(&value));
    /// assert!(!named.check(&Value::from("name")));
    /// ```
    fn and<G: Guard>(self, other: G) -> And<(Self, G)> {
        And((self, other))
    }

    /// Invert the guard.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::prelude::*;
    ///
    /// let not_null = is_null().not();
    /// assert!(not_null.check(&Value::from(0)));
    /// assert!(!not_null.check(&Value::Null));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the narrowed type.
    fn erase(self) -> Erased
    where
        Self: 'static,
    {
        Erased::new(self)
    }
}

impl<G: Guard> GuardExt for G {}

/// NOT combinator - inverts the guard.
///
/// A negated guard cannot say anything about the value's type, so its
/// target is the value itself.
#[derive(Clone, Copy, Debug)]
pub struct Not<G>(pub G);

impl<G: Guard> Guard for Not<G> {
    type Target<'a> = &'a Value;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        (!self.0.check(value)).then_some(value)
    }
}

/// Create a guard that passes exactly when `guard` fails.
pub fn is_not<G: Guard>(guard: G) -> Not<G> {
    Not(guard)
}
