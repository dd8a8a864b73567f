//! Testing utilities for guards
//!
//! Assertion macros that report the offending value on failure, and a named
//! corpus of sample values covering every kind of [`Value`], for table tests
//! of classifiers.
//!
//! # Examples
//!
//! ```rust
//! use typeguard::prelude::*;
//! use typeguard::{assert_narrows, assert_rejects};
//!
//! assert_narrows!(is_number(), Value::from(1), 1.0);
//! assert_rejects!(is_number(), Value::from("1"));
//! ```

use crate::guard::Guard;
use crate::value::{Function, FunctionKind, Object, Symbol, Value};

/// Assert that a guard accepts a value, optionally checking the narrowed
/// view.
///
/// This macro will panic if the guard rejects the value.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
/// use typeguard::assert_narrows;
///
/// assert_narrows!(is_string(), Value::from("a"));
/// assert_narrows!(is_string(), Value::from("a"), "a");
/// ```
#[macro_export]
macro_rules! assert_narrows {
    ($guard:expr, $value:expr) => {{
        let value: $crate::Value = $value;
        if !$crate::guard::Guard::check(&$guard, &value) {
            panic!("Expected guard to accept {:?}", value);
        }
    }};
    ($guard:expr, $value:expr, $expected:expr) => {{
        let value: $crate::Value = $value;
        match $crate::guard::Guard::narrow(&$guard, &value) {
            Some(narrowed) => assert_eq!(narrowed, $expected),
            None => panic!("Expected guard to accept {:?}", value),
        }
    }};
}

/// Assert that a guard rejects a value.
///
/// This macro will panic if the guard accepts the value.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
/// use typeguard::assert_rejects;
///
/// assert_rejects!(is_null(), Value::Undefined);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($guard:expr, $value:expr) => {{
        let value: $crate::Value = $value;
        if $crate::guard::Guard::check(&$guard, &value) {
            panic!("Expected guard to reject {:?}", value);
        }
    }};
}

/// A named corpus of values, one or more of every kind.
///
/// Names are stable so table tests can list the names a guard accepts.
///
/// | name | value |
/// |---|---|
/// | `null`, `undefined` | the nullish values |
/// | `nan`, `invalid_date` | values rejected by `is_defined` |
/// | `number`, `number_object`, `string`, `string_object`, `true`, `false`, `true_object`, `symbol`, `bigint` | primitives and their boxed forms |
/// | `arrow_function`, `declared_function`, `async_function`, `generator_function`, `class_a`, `class_b` | functions |
/// | `object`, `bare_object`, `instance_a`, `instance_b`, `duck_a`, `duck_b` | ordinary objects |
/// | `array`, `array_of_objects`, `array_like`, `record_of_strings` | containers |
/// | `date`, `regexp`, `promise`, `thenable`, `map`, `set`, `weak_map`, `weak_set` | built-ins |
///
/// `class_b` extends `class_a`, which has a `method` on its prototype.
/// `instance_a` owns field `a` and `instance_b` owns `a` and `b`;
/// `duck_a`/`duck_b` are plain objects with the same fields and an own
/// `method`.
pub fn sample_values() -> Vec<(&'static str, Value)> {
    let class_a = Function::class("A").method("method").build();
    let class_b = Function::class("B").extends(&class_a).build();
    let object = Object::builder().build();

    vec![
        ("null", Value::Null),
        ("undefined", Value::Undefined),
        ("nan", Value::from(f64::NAN)),
        ("invalid_date", Value::from(Object::invalid_date())),
        ("number", Value::from(-1)),
        ("number_object", Value::from(Object::boxed_number(0.0))),
        ("string", Value::from("")),
        ("string_object", Value::from(Object::boxed_string(""))),
        ("true", Value::from(true)),
        ("false", Value::from(false)),
        ("true_object", Value::from(Object::boxed_boolean(true))),
        ("symbol", Value::from(Symbol::anonymous())),
        ("bigint", Value::from(12345i128)),
        ("arrow_function", Value::from(Function::arrow("arrow"))),
        ("declared_function", Value::from(Function::declared("declared"))),
        ("async_function", Value::from(Function::async_fn("run"))),
        ("generator_function", Value::from(Function::generator("gen"))),
        ("class_a", Value::from(class_a.clone())),
        ("class_b", Value::from(class_b.clone())),
        ("object", Value::from(object.clone())),
        (
            "bare_object",
            Value::from(Object::builder().null_prototype().build()),
        ),
        (
            "instance_a",
            Value::from(class_a.new_instance().property("a", 0).build()),
        ),
        (
            "instance_b",
            Value::from(
                class_b
                    .new_instance()
                    .property("a", 0)
                    .property("b", 0)
                    .build(),
            ),
        ),
        (
            "duck_a",
            Value::from(
                Object::builder()
                    .property("a", 0)
                    .property("method", Function::new("method", FunctionKind::Method))
                    .build(),
            ),
        ),
        (
            "duck_b",
            Value::from(
                Object::builder()
                    .property("a", 0)
                    .property("b", 0)
                    .property("method", Function::new("method", FunctionKind::Method))
                    .build(),
            ),
        ),
        ("array", Value::from(Object::array(vec![]))),
        (
            "array_of_objects",
            Value::from(Object::array(vec![Value::from(object.clone())])),
        ),
        (
            "array_like",
            Value::from(
                Object::builder()
                    .property("length", 1)
                    .property(0u32, object.clone())
                    .build(),
            ),
        ),
        (
            "record_of_strings",
            Value::from(
                Object::builder()
                    .property(0u32, "")
                    .property("a", "")
                    .property(Symbol::anonymous(), "")
                    .build(),
            ),
        ),
        ("date", Value::from(Object::date(1_700_000_000_000.0))),
        ("regexp", Value::from(Object::reg_exp("regexp", ""))),
        ("promise", Value::from(Object::promise())),
        (
            "thenable",
            Value::from(
                Object::builder()
                    .property("then", Function::arrow("then"))
                    .build(),
            ),
        ),
        (
            "map",
            Value::from(Object::map(vec![(Value::from(1), Value::from(1))])),
        ),
        ("set", Value::from(Object::set(vec![Value::from(1)]))),
        ("weak_map", Value::from(Object::weak_map())),
        ("weak_set", Value::from(Object::weak_set())),
    ]
}

/// Names of the [`sample_values`] accepted by `guard`.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
/// use typeguard::testing::accepted_names;
///
/// assert_eq!(accepted_names(&is_bigint()), vec!["bigint"]);
/// ```
pub fn accepted_names<G: Guard>(guard: &G) -> Vec<&'static str> {
    sample_values()
        .into_iter()
        .filter(|(_, value)| guard.check(value))
        .map(|(name, _)| name)
        .collect()
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    /// Primitives of every kind (NaN and infinities included), the
    /// [`sample_values`] corpus, and arrays and objects nesting them.
    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let samples: Vec<Value> = sample_values().into_iter().map(|(_, value)| value).collect();
        let leaf = prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<f64>().prop_map(Value::from),
            prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(-0.0)].prop_map(Value::from),
            any::<i64>().prop_map(|n| Value::from(n as i128)),
            "[a-z0-9]{0,6}".prop_map(Value::from),
            proptest::sample::select(samples),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
                proptest::collection::vec(("[a-c]", inner), 0..4).prop_map(|fields| {
                    let mut builder = Object::builder();
                    for (key, value) in fields {
                        builder = builder.property(key, value);
                    }
                    Value::from(builder.build())
                }),
            ]
        })
        .boxed()
    }
}
