//! A neutral sum type for narrowed unions.
//!
//! `Either<L, R>` is what an `or` guard narrows to: `Left` holds the view of
//! the first member that matched, `Right` the view of the rest. Unions of
//! more than two members nest to the right, so `or((a, b, c))` narrows to
//! `Either<A, Either<B, C>>`.
//!
//! Unlike `Result`, neither variant implies an error condition.
//!
//! # Examples
//!
//! ```rust
//! use typeguard::prelude::*;
//! use typeguard::Either;
//!
//! let guard = or((is_number(), is_string()));
//! let describe = |value: &Value| {
//!     guard.narrow(value).map(|it| {
//!         it.fold(
//!             |n| format!("number {}", n),
//!             |s| format!("string {}", s),
//!         )
//!     })
//! };
//!
//! assert_eq!(describe(&Value::from(2)), Some("number 2".to_string()));
//! assert_eq!(describe(&Value::from("a")), Some("string a".to_string()));
//! assert_eq!(describe(&Value::Null), None);
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` if this is a Left value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a Right value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Convert into the Left value, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert_eq!(e.into_left(), Some(42));
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Convert into the Right value, if any.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Borrow both sides.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Map the Left value.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Map the Right value.
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Swap the variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Collapse both variants into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }
}

impl<T> Either<T, T> {
    /// Extract the value of a union whose two sides share one type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::prelude::*;
    ///
    /// // both members narrow to &Value
    /// let guard = or((has("id"), has("key")));
    /// let value = Value::from(Object::builder().property("key", 1).build());
    /// let it = guard.narrow(&value).map(|it| it.into_inner());
    /// assert!(matches!(it, Some(v) if v == &value));
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(it) | Either::Right(it) => it,
        }
    }
}
