//! Tracing support for guards.
//!
//! This module provides the `Traced` wrapper and `traced` method for logging
//! guard evaluations. Feature-gated behind `#[cfg(feature = "tracing")]`.

use super::combinators::Guard;
use crate::value::Value;

/// A guard that emits a trace event for every evaluation.
///
/// Created by [`GuardTracingExt::traced`].
#[cfg(feature = "tracing")]
#[derive(Clone, Debug)]
pub struct Traced<G> {
    pub(crate) inner: G,
    pub(crate) name: &'static str,
}

#[cfg(feature = "tracing")]
impl<G: Guard> Guard for Traced<G> {
    type Target<'a> = G::Target<'a>;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        let narrowed = self.inner.narrow(value);
        tracing::trace!(
            guard = self.name,
            type_of = value.type_of(),
            passed = narrowed.is_some(),
            "guard evaluated"
        );
        narrowed
    }
}

/// Extension trait for adding tracing to guards.
///
/// This trait is only available when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
pub trait GuardTracingExt: Guard + Sized {
    /// Wrap this guard so each evaluation emits a `trace!` event carrying
    /// `name`, the value's `typeof` and the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::guard::tracing::GuardTracingExt;
    /// use typeguard::prelude::*;
    ///
    /// let guard = is_number().traced("is_number");
    /// assert!(guard.check(&Value::from(1)));
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced { inner: self, name }
    }
}

#[cfg(feature = "tracing")]
impl<G: Guard> GuardTracingExt for G {}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use super::*;
    use crate::guard::{is_number, is_string, or};
    use tracing_test::traced_test;

    #[test]
    fn test_traced_keeps_narrowing() {
        let guard = is_string().traced("is_string");
        assert_eq!(guard.narrow(&Value::from("x")), Some("x"));
        assert_eq!(guard.narrow(&Value::Null), None);
    }

    #[traced_test]
    #[test]
    fn test_traced_emits_events() {
        let guard = or((is_number().traced("number"), is_string().traced("string")));
        assert!(guard.check(&Value::from("x")));
        assert!(logs_contain("guard=\"number\""));
        assert!(logs_contain("passed=false"));
        assert!(logs_contain("passed=true"));
    }
}
