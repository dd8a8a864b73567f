//! Fixed-arity declaration generator
//!
//! Rust cannot declare one generic impl over "a tuple of any number of
//! guards", so the `or`/`and` families are implemented once per tuple arity.
//! This module writes those implementations as source text. `build.rs` runs
//! it with [`DEFAULT_MAX_ARITY`] and the logical combinators include the
//! output; the `gen-arity` binary prints it for any maximum arity.
//!
//! For a maximum arity `N` each family gets `N - 1` tuple implementations,
//! for arities `2..=N`, followed by one general implementation over
//! `Vec<G>` that evaluates any number of guards in a loop.
//!
//! This file is also compiled into the build script, so it depends on
//! nothing but `std`.
//!
//! # Example
//!
//! ```rust
//! use typeguard::codegen::{arities, render, Family};
//!
//! assert_eq!(arities(3).collect::<Vec<_>>(), vec![2, 3]);
//!
//! let source = render(3);
//! assert!(source.contains("impl<T1, T2, T3> AnyOf for (T1, T2, T3)"));
//! assert!(source.contains("impl<G: Guard> AllOf for Vec<G>"));
//! ```

/// Maximum arity used when none (or an unparsable one) is given.
pub const DEFAULT_MAX_ARITY: usize = 10;

/// Largest maximum arity accepted by [`parse_max_arity`]. Output grows
/// quadratically with the arity.
pub const ARITY_LIMIT: usize = 64;

/// A combinator family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// `or`: any member passes, narrowing to a nested `Either` union.
    Or,
    /// `and`: every member passes, narrowing to a tuple.
    And,
}

impl Family {
    /// Both families, in emission order.
    pub const ALL: [Family; 2] = [Family::Or, Family::And];

    /// The list trait the family implements.
    pub fn trait_name(self) -> &'static str {
        match self {
            Family::Or => "AnyOf",
            Family::And => "AllOf",
        }
    }

    fn assoc_name(self) -> &'static str {
        match self {
            Family::Or => "Union",
            Family::And => "Intersection",
        }
    }

    fn method_name(self) -> &'static str {
        match self {
            Family::Or => "narrow_any",
            Family::And => "narrow_all",
        }
    }
}

/// Parse the maximum arity argument, falling back to [`DEFAULT_MAX_ARITY`]
/// when it is missing, not a non-negative integer, or above
/// [`ARITY_LIMIT`].
///
/// # Example
///
/// ```rust
/// use typeguard::codegen::{parse_max_arity, DEFAULT_MAX_ARITY};
///
/// assert_eq!(parse_max_arity(Some("4")), 4);
/// assert_eq!(parse_max_arity(Some("four")), DEFAULT_MAX_ARITY);
/// assert_eq!(parse_max_arity(None), DEFAULT_MAX_ARITY);
/// assert_eq!(parse_max_arity(Some("100000")), DEFAULT_MAX_ARITY);
/// ```
pub fn parse_max_arity(arg: Option<&str>) -> usize {
    arg.and_then(|arg| arg.trim().parse().ok())
        .filter(|max_arity| *max_arity <= ARITY_LIMIT)
        .unwrap_or(DEFAULT_MAX_ARITY)
}

/// Tuple arities emitted for `max_arity`.
///
/// Loop index `i` runs over `0..max_arity - 1` and declares `i + 2` type
/// parameters, so the arities are `2..=max_arity`. A maximum below 2 emits
/// no tuple declarations.
pub fn arities(max_arity: usize) -> impl Iterator<Item = usize> {
    (0..max_arity.saturating_sub(1)).map(|i| i + 2)
}

// One tuple implementation of `family` for `arity` guards. Callers go
// through `arities`, so `arity >= 2`.
fn tuple_declaration(family: Family, arity: usize) -> String {
    let params: Vec<String> = (1..=arity).map(|i| format!("T{}", i)).collect();
    let list = params.join(", ");

    let mut out = format!(
        "impl<{list}> {} for ({list})\nwhere\n",
        family.trait_name(),
        list = list
    );
    for param in &params {
        out.push_str(&format!("    {}: Guard,\n", param));
    }
    out.push_str("{\n");
    out.push_str(&format!(
        "    type {}<'a> = {};\n\n",
        family.assoc_name(),
        target_type(family, &params)
    ));
    out.push_str("    #[inline]\n");
    out.push_str(&format!(
        "    fn {}<'a>(&self, value: &'a Value) -> Option<Self::{}<'a>> {{\n",
        family.method_name(),
        family.assoc_name()
    ));
    match family {
        Family::Or => {
            for index in 0..arity - 1 {
                out.push_str(&format!(
                    "        if let Some(it) = self.{}.narrow(value) {{\n",
                    index
                ));
                out.push_str(&format!(
                    "            return Some({});\n",
                    union_variant(index, arity)
                ));
                out.push_str("        }\n");
            }
            out.push_str(&format!(
                "        self.{}.narrow(value).map(|it| {})\n",
                arity - 1,
                union_variant(arity - 1, arity)
            ));
        }
        Family::And => {
            let members: Vec<String> = (0..arity)
                .map(|index| format!("self.{}.narrow(value)?", index))
                .collect();
            out.push_str(&format!("        Some(({}))\n", members.join(", ")));
        }
    }
    out.push_str("    }\n}\n");
    out
}

/// The general implementation of `family` over `Vec<G>`, carrying the
/// loop that evaluates any number of guards.
pub fn general_declaration(family: Family) -> String {
    match family {
        Family::Or => "\
impl<G: Guard> AnyOf for Vec<G> {
    type Union<'a> = G::Target<'a>;

    fn narrow_any<'a>(&self, value: &'a Value) -> Option<Self::Union<'a>> {
        for guard in self {
            if let Some(it) = guard.narrow(value) {
                return Some(it);
            }
        }
        None
    }
}
"
        .to_string(),
        Family::And => "\
impl<G: Guard> AllOf for Vec<G> {
    type Intersection<'a> = Vec<G::Target<'a>>;

    fn narrow_all<'a>(&self, value: &'a Value) -> Option<Self::Intersection<'a>> {
        let mut all = Vec::with_capacity(self.len());
        for guard in self {
            all.push(guard.narrow(value)?);
        }
        Some(all)
    }
}
"
        .to_string(),
    }
}

/// Every declaration of `family`: the tuple implementations followed by the
/// general one.
pub fn declarations(family: Family, max_arity: usize) -> Vec<String> {
    arities(max_arity)
        .map(|arity| tuple_declaration(family, arity))
        .chain(std::iter::once(general_declaration(family)))
        .collect()
}

/// Render the complete generated source for `max_arity`.
pub fn render(max_arity: usize) -> String {
    let mut out = format!(
        "// @generated by gen-arity (max arity {}). Do not edit by hand.\n",
        max_arity
    );
    for family in Family::ALL {
        for declaration in declarations(family, max_arity) {
            out.push('\n');
            out.push_str(&declaration);
        }
    }
    out
}

// `Either<T1::Target<'a>, Either<T2::Target<'a>, T3::Target<'a>>>` or
// `(T1::Target<'a>, T2::Target<'a>, T3::Target<'a>)`
fn target_type(family: Family, params: &[String]) -> String {
    let targets: Vec<String> = params
        .iter()
        .map(|param| format!("{}::Target<'a>", param))
        .collect();
    match family {
        Family::And => format!("({})", targets.join(", ")),
        Family::Or => {
            let mut rest = targets.iter().rev();
            let last = rest.next().cloned().unwrap_or_default();
            rest.fold(last, |acc, target| {
                format!("Either<{}, {}>", target, acc)
            })
        }
    }
}

// Position `index` of `arity` in the right-nested union.
fn union_variant(index: usize, arity: usize) -> String {
    let depth = index;
    let inner = if index + 1 == arity {
        "it".to_string()
    } else {
        "Either::Left(it)".to_string()
    };
    format!(
        "{}{}{}",
        "Either::Right(".repeat(depth),
        inner,
        ")".repeat(depth)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_arity_range() {
        assert_eq!(arities(10).collect::<Vec<_>>(), (2..=10).collect::<Vec<_>>());
        assert_eq!(arities(2).collect::<Vec<_>>(), vec![2]);
        assert_eq!(arities(1).count(), 0);
        assert_eq!(arities(0).count(), 0);
    }

    #[test]
    fn test_three_emits_two_tuples_per_family() {
        let source = render(3);
        assert_eq!(count(&source, "AnyOf for ("), 2);
        assert_eq!(count(&source, "AllOf for ("), 2);
        assert_eq!(count(&source, "AnyOf for Vec<G>"), 1);
        assert_eq!(count(&source, "AllOf for Vec<G>"), 1);
    }

    #[test]
    fn test_default_emits_nine_tuples_per_family() {
        let source = render(parse_max_arity(None));
        assert_eq!(count(&source, "AnyOf for ("), 9);
        assert_eq!(count(&source, "AllOf for ("), 9);
        assert_eq!(declarations(Family::Or, DEFAULT_MAX_ARITY).len(), 10);
        assert!(source.contains("(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10)"));
        assert!(!source.contains("T11"));
    }

    #[test]
    fn test_or_declaration_text() {
        let expected = "\
impl<T1, T2, T3> AnyOf for (T1, T2, T3)
where
    T1: Guard,
    T2: Guard,
    T3: Guard,
{
    type Union<'a> = Either<T1::Target<'a>, Either<T2::Target<'a>, T3::Target<'a>>>;

    #[inline]
    fn narrow_any<'a>(&self, value: &'a Value) -> Option<Self::Union<'a>> {
        if let Some(it) = self.0.narrow(value) {
            return Some(Either::Left(it));
        }
        if let Some(it) = self.1.narrow(value) {
            return Some(Either::Right(Either::Left(it)));
        }
        self.2.narrow(value).map(|it| Either::Right(Either::Right(it)))
    }
}
";
        assert_eq!(tuple_declaration(Family::Or, 3), expected);
    }

    #[test]
    fn test_and_declaration_text() {
        let expected = "\
impl<T1, T2> AllOf for (T1, T2)
where
    T1: Guard,
    T2: Guard,
{
    type Intersection<'a> = (T1::Target<'a>, T2::Target<'a>);

    #[inline]
    fn narrow_all<'a>(&self, value: &'a Value) -> Option<Self::Intersection<'a>> {
        Some((self.0.narrow(value)?, self.1.narrow(value)?))
    }
}
";
        assert_eq!(tuple_declaration(Family::And, 2), expected);
    }

    #[test]
    fn test_malformed_argument_falls_back() {
        assert_eq!(parse_max_arity(Some("")), DEFAULT_MAX_ARITY);
        assert_eq!(parse_max_arity(Some("-3")), DEFAULT_MAX_ARITY);
        assert_eq!(parse_max_arity(Some(" 5 ")), 5);
    }

    #[test]
    fn test_oversized_argument_falls_back() {
        assert_eq!(parse_max_arity(Some("64")), ARITY_LIMIT);
        assert_eq!(parse_max_arity(Some("65")), DEFAULT_MAX_ARITY);
        assert_eq!(
            parse_max_arity(Some("18446744073709551615")),
            DEFAULT_MAX_ARITY
        );
    }

    #[test]
    fn test_small_maximum_emits_only_general_impls() {
        for max_arity in [0, 1] {
            let source = render(max_arity);
            assert!(!source.contains("(T1)"));
            assert!(!source.contains("for ("));
            assert_eq!(declarations(Family::Or, max_arity).len(), 1);
            assert_eq!(declarations(Family::And, max_arity).len(), 1);
        }
    }
}
