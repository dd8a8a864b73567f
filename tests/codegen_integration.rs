//! Integration tests for the fixed-arity generator

use typeguard::codegen::{self, arities, declarations, parse_max_arity, render, Family};
use typeguard::prelude::*;

#[test]
fn test_declaration_counts_for_every_maximum() {
    for max_arity in 0..=12usize {
        let tuples = max_arity.saturating_sub(1);
        for family in Family::ALL {
            assert_eq!(
                declarations(family, max_arity).len(),
                tuples + 1,
                "{:?} with max arity {}",
                family,
                max_arity
            );
        }
        assert_eq!(arities(max_arity).count(), tuples);
    }
}

#[test]
fn test_generated_source_is_balanced() {
    for max_arity in [2, 3, codegen::DEFAULT_MAX_ARITY] {
        let source = render(max_arity);
        assert_eq!(
            source.matches('{').count(),
            source.matches('}').count(),
            "unbalanced braces for max arity {}",
            max_arity
        );
        assert_eq!(source.matches('(').count(), source.matches(')').count());
        assert!(source.starts_with("// @generated"));
    }
}

#[test]
fn test_families_in_order() {
    let source = render(3);
    let first_or = source.find("AnyOf for (T1, T2)").unwrap();
    let general_or = source.find("AnyOf for Vec<G>").unwrap();
    let first_and = source.find("AllOf for (T1, T2)").unwrap();
    let general_and = source.find("AllOf for Vec<G>").unwrap();
    assert!(first_or < general_or);
    assert!(general_or < first_and);
    assert!(first_and < general_and);
}

#[test]
fn test_cli_argument_fallback() {
    assert_eq!(parse_max_arity(Some("3")), 3);
    assert_eq!(parse_max_arity(Some("ten")), 10);
    assert_eq!(parse_max_arity(Some("2.5")), 10);
    assert_eq!(parse_max_arity(None), 10);
}

#[test]
fn test_compiled_arity_matches_default() {
    // the crate is built from render(DEFAULT_MAX_ARITY), so a tuple of that
    // many guards must be usable for both families
    let n = Value::from(1);
    let any = or((
        is_string(),
        is_string(),
        is_string(),
        is_string(),
        is_string(),
        is_string(),
        is_string(),
        is_string(),
        is_string(),
        is_number(),
    ));
    let all = and((
        is_number(),
        is_defined(),
        is_number(),
        is_defined(),
        is_number(),
        is_defined(),
        is_number(),
        is_defined(),
        is_number(),
        is_defined(),
    ));
    assert!(any.check(&n));
    let (first, _, _, _, _, _, _, _, _, last) = all.narrow(&n).unwrap();
    assert_eq!(first, 1.0);
    assert_eq!(last, &n);
}
