//! Property-based tests for the built-in monoids and the folding helpers.
//!
//! ## Semigroup Law
//! - Associativity: a.combine(b).combine(c) == a.combine(b.combine(c))
//!
//! ## Monoid Laws
//! - Left Identity: empty().combine(a) == a
//! - Right Identity: a.combine(empty()) == a
//!
//! ## Folding
//! - mconcat(xs) == xs.fold(empty(), combine)
//! - mconcat_map(f, xs) == mconcat(xs.map(f))

use algebrars::laws::{self, Law};
use algebrars::typeclass::{
    All, Any, Identity, Max, Min, Monoid, Product, Semigroup, Sum, mconcat, mconcat_map,
};
use proptest::prelude::*;

fn small() -> impl Strategy<Value = i64> {
    -10_000i64..10_000
}

fn factor() -> impl Strategy<Value = i64> {
    -100i64..100
}

// =============================================================================
// Built-in Monoids
// =============================================================================

proptest! {
    #[test]
    fn prop_sum_is_lawful(samples in prop::collection::vec(small(), 1..5)) {
        let samples: Vec<_> = samples.into_iter().map(Sum::new).collect();
        prop_assert_eq!(laws::verify_monoid(&samples), Ok(()));
    }

    #[test]
    fn prop_product_is_lawful(samples in prop::collection::vec(factor(), 1..4)) {
        let samples: Vec<_> = samples.into_iter().map(Product::new).collect();
        prop_assert_eq!(laws::verify_monoid(&samples), Ok(()));
    }

    #[test]
    fn prop_max_and_min_are_lawful(samples in prop::collection::vec(any::<i16>(), 1..5)) {
        let maxima: Vec<_> = samples.iter().copied().map(Max::new).collect();
        let minima: Vec<_> = samples.into_iter().map(Min::new).collect();
        prop_assert_eq!(laws::verify_monoid(&maxima), Ok(()));
        prop_assert_eq!(laws::verify_monoid(&minima), Ok(()));
    }

    #[test]
    fn prop_boolean_monoids_are_lawful(samples in prop::collection::vec(any::<bool>(), 1..5)) {
        let all: Vec<_> = samples.iter().copied().map(All::new).collect();
        let any_of: Vec<_> = samples.into_iter().map(Any::new).collect();
        prop_assert_eq!(laws::verify_monoid(&all), Ok(()));
        prop_assert_eq!(laws::verify_monoid(&any_of), Ok(()));
    }

    #[test]
    fn prop_string_and_vec_are_lawful(samples in prop::collection::vec("[a-c]{0,3}", 1..5)) {
        let vectors: Vec<Vec<char>> = samples.iter().map(|text| text.chars().collect()).collect();
        prop_assert_eq!(laws::verify_monoid(&samples), Ok(()));
        prop_assert_eq!(laws::verify_monoid(&vectors), Ok(()));
    }

    #[test]
    fn prop_identity_lifts_monoid(samples in prop::collection::vec("[xy]{0,2}", 1..4)) {
        let samples: Vec<_> = samples.into_iter().map(Identity::new).collect();
        prop_assert_eq!(laws::verify_monoid(&samples), Ok(()));
    }
}

// =============================================================================
// Folding Helpers
// =============================================================================

proptest! {
    #[test]
    fn prop_mconcat_is_left_fold_from_empty(values in prop::collection::vec("[a-z]{0,3}", 0..6)) {
        let expected = values.iter().fold(String::empty(), |accumulator, value| accumulator + value);
        prop_assert_eq!(mconcat(values), expected);
    }

    #[test]
    fn prop_mconcat_map_agrees_with_map_then_mconcat(values in prop::collection::vec(small(), 0..6)) {
        let mapped: Sum<i64> = mconcat(values.iter().copied().map(Sum::new));
        prop_assert_eq!(mconcat_map(Sum::new, values.clone()), mapped);
        prop_assert_eq!(mapped, Sum::new(values.iter().sum()));
    }

    #[test]
    fn prop_mconcat_splits_anywhere(values in prop::collection::vec(small(), 0..8), split in 0usize..8) {
        let split = split.min(values.len());
        let (front, back) = values.split_at(split);
        let whole: Sum<i64> = mconcat_map(Sum::new, values.iter().copied());
        let halves = mconcat_map::<Sum<i64>, _, _, _>(Sum::new, front.iter().copied())
            .combine(mconcat_map(Sum::new, back.iter().copied()));
        prop_assert_eq!(whole, halves);
    }
}

// =============================================================================
// Unlawful Instances
// =============================================================================

/// Keeps the right operand: associative, but `empty()` is not a right identity.
#[derive(Debug, Clone, PartialEq)]
struct Last(Option<i32>);

impl Semigroup for Last {
    fn combine(self, other: Self) -> Self {
        other
    }
}

impl Monoid for Last {
    fn empty() -> Self {
        Self(None)
    }
}

proptest! {
    #[test]
    fn prop_unlawful_right_identity_is_detected(value in any::<i32>()) {
        let violation = laws::monoid_identity(&Last(Some(value))).unwrap_err();
        prop_assert_eq!(violation.law, Law::MonoidRightIdentity);
    }

    #[test]
    fn prop_last_is_still_associative(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (a, b, c) = (Last(Some(a)), Last(Some(b)), Last(Some(c)));
        prop_assert_eq!(laws::semigroup_associativity(&a, &b, &c), Ok(()));
    }
}
