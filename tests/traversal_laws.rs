//! Property-based tests for Traversal laws.
//!
//! - **Identity Law**: `traversal.modify(source.clone(), |a| a) == source`
//! - **Composition Law**: `modify(modify(s, f), g) == modify(s, |a| g(f(a)))`
//! - **Alignment**: `get_all` after `set_all` yields the set value at every focus
//!
//! The same laws are checked for the restricted traversals produced by the
//! bulk operations, whose writes must land on the foci they read.

use kaleido::optics::{Traversal, option_each, vec_each};
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-1000..1000i32, 0..24)
}

fn nested_each() -> Traversal<Vec<Vec<i32>>, i32> {
    vec_each::<Vec<i32>>().compose(vec_each::<i32>())
}

// =============================================================================
// Identity and composition
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_each_identity_law(values in small_vec()) {
        prop_assert_eq!(vec_each::<i32>().modify(values.clone(), |value| value), values);
    }

    #[test]
    fn prop_vec_each_composition_law(values in small_vec()) {
        let each = vec_each::<i32>();
        let twice = each.modify(each.modify(values.clone(), |value| value + 1), |value| value * 2);
        let fused = each.modify(values, |value| (value + 1) * 2);
        prop_assert_eq!(twice, fused);
    }

    #[test]
    fn prop_nested_identity_law(values in proptest::collection::vec(small_vec(), 0..6)) {
        prop_assert_eq!(nested_each().modify(values.clone(), |value| value), values);
    }

    #[test]
    fn prop_nested_get_all_flattens(values in proptest::collection::vec(small_vec(), 0..6)) {
        let flattened: Vec<i32> = values.iter().flatten().copied().collect();
        prop_assert_eq!(nested_each().get_all(&values), flattened);
    }

    #[test]
    fn prop_option_each_length(value in any::<Option<i32>>()) {
        prop_assert_eq!(option_each::<i32>().length(&value), usize::from(value.is_some()));
    }
}

// =============================================================================
// Alignment of restricted traversals
// =============================================================================

proptest! {
    #[test]
    fn prop_set_all_then_get_all(values in small_vec(), replacement in any::<i32>()) {
        let each = vec_each::<i32>();
        let updated = each.set_all(values.clone(), replacement);
        prop_assert!(each.get_all(&updated).iter().all(|value| *value == replacement));
        prop_assert_eq!(updated.len(), values.len());
    }

    #[test]
    fn prop_filter_identity_law(values in small_vec()) {
        let even = vec_each::<i32>().filter(|value| value % 2 == 0);
        prop_assert_eq!(even.modify(values.clone(), |value| value), values);
    }

    #[test]
    fn prop_filter_only_touches_matches(values in small_vec()) {
        let even = vec_each::<i32>().filter(|value| value % 2 == 0);
        let updated = even.modify(values.clone(), |value| value + 1);
        for (before, after) in values.iter().zip(&updated) {
            if before % 2 == 0 {
                prop_assert_eq!(*after, before + 1);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn prop_reverse_reverse_reads_like_original(values in small_vec()) {
        let twice = vec_each::<i32>().reverse().reverse();
        prop_assert_eq!(twice.get_all(&values), values);
    }

    #[test]
    fn prop_reverse_reverse_writes_like_original(values in small_vec()) {
        let mut seen_original = Vec::new();
        let mut seen_twice = Vec::new();
        let original = vec_each::<i32>().modify(values.clone(), |value| {
            seen_original.push(value);
            value * 3
        });
        let twice = vec_each::<i32>().reverse().reverse().modify(values, |value| {
            seen_twice.push(value);
            value * 3
        });
        prop_assert_eq!(original, twice);
        prop_assert_eq!(seen_original, seen_twice);
    }

    #[test]
    fn prop_sort_identity_law(values in small_vec()) {
        let sorted = vec_each::<i32>().sort_by_key(|value| *value);
        prop_assert_eq!(sorted.modify(values.clone(), |value| value), values);
    }

    #[test]
    fn prop_sort_reads_sorted(values in small_vec()) {
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(vec_each::<i32>().sort_by(|a, b| a.cmp(b)).get_all(&values), expected);
    }

    #[test]
    fn prop_slice_reads_like_std_slice(values in small_vec(), start in 0..30usize, end in 0..30usize) {
        let expected: Vec<i32> = if start < end && start < values.len() {
            values[start..end.min(values.len())].to_vec()
        } else {
            Vec::new()
        };
        let sliced = vec_each::<i32>().slice(
            isize::try_from(start).unwrap(),
            isize::try_from(end).unwrap(),
        );
        prop_assert_eq!(sliced.get_all(&values), expected);
    }

    #[test]
    fn prop_distinct_has_no_duplicates(values in proptest::collection::vec(0..8i32, 0..24)) {
        let unique = vec_each::<i32>().distinct().get_all(&values);
        for (position, value) in unique.iter().enumerate() {
            prop_assert!(!unique[position + 1..].contains(value));
            prop_assert!(values.contains(value));
        }
    }

    #[test]
    fn prop_take_drop_partition(values in small_vec(), count in 0..30usize) {
        let each = vec_each::<i32>();
        let mut joined = each.clone().take(count).get_all(&values);
        joined.extend(each.drop(count).get_all(&values));
        prop_assert_eq!(joined, values);
    }
}
