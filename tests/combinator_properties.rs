//! Property-based tests for the logical combinators

use typeguard::prelude::*;

#[test]
fn test_empty_collections_are_vacuously_accepted() {
    let never = |_: &Value| false;
    assert!(is_array_of(never).check(&Value::from(Vec::<Value>::new())));
    assert!(is_record_of(never).check(&Value::from(Object::builder().build())));
    assert!(and(Vec::<Erased>::new()).check(&Value::Undefined));
    assert!(!or(Vec::<Erased>::new()).check(&Value::Undefined));
}

#[cfg(feature = "proptest")]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use typeguard::{Key, Symbol};

    fn key_strategy() -> impl Strategy<Value = Key> {
        prop_oneof![
            "[a-c]|length|then|toString".prop_map(Key::from),
            (0u32..3).prop_map(Key::from),
            Just(Key::from(Symbol::iterator())),
        ]
    }

    // A small pool of leaf guards picked by index, so tuples stay statically typed.
    fn leaf(index: usize) -> Erased {
        match index % 8 {
            0 => is_number().erase(),
            1 => is_string().erase(),
            2 => is_object().erase(),
            3 => is_function().erase(),
            4 => is_defined().erase(),
            5 => is_array().erase(),
            6 => is_null().erase(),
            _ => has("a").erase(),
        }
    }

    proptest! {
        #[test]
        fn prop_or_agrees_with_logical_or(
            value in any::<Value>(),
            i in 0usize..8,
            j in 0usize..8,
        ) {
            let (p, q) = (leaf(i), leaf(j));
            let expected = p.check(&value) || q.check(&value);
            prop_assert_eq!(or((p.clone(), q.clone())).check(&value), expected);
            prop_assert_eq!(p.clone().or(q.clone()).check(&value), expected);
            prop_assert_eq!(or(vec![p, q]).check(&value), expected);
        }

        #[test]
        fn prop_and_agrees_with_logical_and(
            value in any::<Value>(),
            i in 0usize..8,
            j in 0usize..8,
            k in 0usize..8,
        ) {
            let (p, q, r) = (leaf(i), leaf(j), leaf(k));
            let expected = p.check(&value) && q.check(&value) && r.check(&value);
            prop_assert_eq!(and((p.clone(), q.clone(), r.clone())).check(&value), expected);
            prop_assert_eq!(and(vec![p, q, r]).check(&value), expected);
        }

        #[test]
        fn prop_not_negates(value in any::<Value>(), i in 0usize..8) {
            let p = leaf(i);
            prop_assert_eq!(is_not(p.clone()).check(&value), !p.check(&value));
            prop_assert_eq!(p.clone().not().check(&value), !p.check(&value));
        }

        #[test]
        fn prop_or_never_calls_guards_after_a_match(value in any::<Value>()) {
            let calls = AtomicUsize::new(0);
            let counter = |_: &Value| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            };
            let always = |_: &Value| true;
            prop_assert!(or((always, counter, counter)).check(&value));
            prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
        }

        #[test]
        fn prop_and_never_calls_guards_after_a_failure(value in any::<Value>()) {
            let calls = AtomicUsize::new(0);
            let counter = |_: &Value| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            };
            let never = |_: &Value| false;
            prop_assert!(!and((counter, never, counter)).check(&value));
            prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn prop_has_agrees_with_is_property(value in any::<Value>(), key in key_strategy()) {
            prop_assert_eq!(has(key.clone()).check(&value), is_property(&value, &key));
        }

        #[test]
        fn prop_nullish_values_have_no_properties(key in key_strategy()) {
            prop_assert!(!is_property(&Value::Null, &key));
            prop_assert!(!is_property(&Value::Undefined, &key));
        }

        #[test]
        fn prop_classifiers_are_total(value in any::<Value>()) {
            let guards = vec![
                is_undefined().erase(),
                is_null().erase(),
                is_defined().erase(),
                is_boolean().erase(),
                is_number().erase(),
                is_bigint().erase(),
                is_string().erase(),
                is_symbol().erase(),
                is_function().erase(),
                is_constructor().erase(),
                is_object().erase(),
                is_record().erase(),
                is_array().erase(),
                is_array_like().erase(),
                is_date().erase(),
                is_reg_exp().erase(),
                is_map().erase(),
                is_set().erase(),
                is_weak_map().erase(),
                is_weak_set().erase(),
                is_promise().erase(),
                is_iterable().erase(),
                is_async_iterable().erase(),
                is_key().erase(),
                is_number_string().erase(),
                is_hex_string().erase(),
                is_base64_string().erase(),
                is_array_of(is_number()).erase(),
                is_record_of(is_defined()).erase(),
                is_key_of(Object::builder().property("a", 1).build()).erase(),
            ];
            for guard in &guards {
                let _ = guard.check(&value);
            }
        }

        #[test]
        fn prop_number_never_accepts_nan(n in any::<f64>()) {
            let value = Value::from(n);
            prop_assert_eq!(is_number().check(&value), !n.is_nan());
            prop_assert_eq!(is_defined().check(&value), !n.is_nan());
        }

        #[test]
        fn prop_array_of_accepts_homogeneous_arrays(numbers in prop::collection::vec(any::<i32>(), 0..20)) {
            let value = Value::from(numbers.iter().copied().map(Value::from).collect::<Vec<_>>());
            let narrowed = is_array_of(is_number()).narrow(&value);
            prop_assert_eq!(
                narrowed,
                Some(numbers.iter().map(|n| *n as f64).collect::<Vec<_>>())
            );
        }

        #[test]
        fn prop_array_of_rejects_a_single_stray_element(
            numbers in prop::collection::vec(any::<i32>(), 0..10),
            position in 0usize..10,
        ) {
            let mut elements: Vec<Value> = numbers.into_iter().map(Value::from).collect();
            let position = position.min(elements.len());
            elements.insert(position, Value::from("stray"));
            prop_assert!(!is_array_of(is_number()).check(&Value::from(elements)));
        }
    }
}
