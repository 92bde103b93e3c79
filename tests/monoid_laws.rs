//! Property-based tests for Semigroup and Monoid laws.
//!
//! - **Associativity**: `(a.combine(b)).combine(c) == a.combine(b.combine(c))`
//! - **Left Identity**: `M::empty().combine(a) == a`
//! - **Right Identity**: `a.combine(M::empty()) == a`
//!
//! `Traversal::fold_map` depends on these laws holding for every monoid it is
//! used with.

use kaleido::typeclass::{All, Any, Max, Min, Monoid, Product, Semigroup, Sum};
use proptest::prelude::*;

fn check_monoid<M>(a: M, b: M, c: M) -> Result<(), TestCaseError>
where
    M: Monoid + Clone + PartialEq + std::fmt::Debug,
{
    prop_assert_eq!(
        a.clone().combine(b.clone()).combine(c.clone()),
        a.clone().combine(b.combine(c))
    );
    prop_assert_eq!(M::empty().combine(a.clone()), a.clone());
    prop_assert_eq!(a.clone().combine(M::empty()), a);
    Ok(())
}

// =============================================================================
// Wrapper monoids
// =============================================================================

proptest! {
    #[test]
    fn prop_sum_monoid_laws(a in -10_000..10_000i64, b in -10_000..10_000i64, c in -10_000..10_000i64) {
        check_monoid(Sum(a), Sum(b), Sum(c))?;
    }

    #[test]
    fn prop_product_monoid_laws(a in -100..100i64, b in -100..100i64, c in -100..100i64) {
        check_monoid(Product(a), Product(b), Product(c))?;
    }

    #[test]
    fn prop_max_monoid_laws(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        check_monoid(Max(a), Max(b), Max(c))?;
    }

    #[test]
    fn prop_min_monoid_laws(a in any::<u16>(), b in any::<u16>(), c in any::<u16>()) {
        check_monoid(Min(a), Min(b), Min(c))?;
    }

    #[test]
    fn prop_all_any_monoid_laws(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        check_monoid(All(a), All(b), All(c))?;
        check_monoid(Any(a), Any(b), Any(c))?;
    }
}

// =============================================================================
// Carrier monoids
// =============================================================================

proptest! {
    #[test]
    fn prop_string_monoid_laws(a in ".{0,6}", b in ".{0,6}", c in ".{0,6}") {
        check_monoid(a, b, c)?;
    }

    #[test]
    fn prop_vec_monoid_laws(
        a in proptest::collection::vec(any::<u8>(), 0..6),
        b in proptest::collection::vec(any::<u8>(), 0..6),
        c in proptest::collection::vec(any::<u8>(), 0..6)
    ) {
        check_monoid(a, b, c)?;
    }

    #[test]
    fn prop_option_monoid_laws(a in any::<Option<bool>>(), b in any::<Option<bool>>(), c in any::<Option<bool>>()) {
        check_monoid(a.map(Any), b.map(Any), c.map(Any))?;
    }

    #[test]
    fn prop_pair_monoid_laws(a in any::<(i16, bool)>(), b in any::<(i16, bool)>(), c in any::<(i16, bool)>()) {
        let wrap = |(number, flag): (i16, bool)| (Max(number), All(flag));
        check_monoid(wrap(a), wrap(b), wrap(c))?;
    }

    /// `combine_all` agrees with a left fold from `empty`.
    #[test]
    fn prop_combine_all_matches_fold(values in proptest::collection::vec(-1000..1000i32, 0..16)) {
        let total = Sum::combine_all(values.iter().copied().map(Sum));
        prop_assert_eq!(total, Sum(values.iter().sum::<i32>()));
    }

    #[test]
    fn prop_reduce_all_is_none_only_when_empty(values in proptest::collection::vec(any::<u8>(), 0..4)) {
        let reduced = Max::reduce_all(values.iter().copied().map(Max));
        prop_assert_eq!(reduced.is_none(), values.is_empty());
    }
}
