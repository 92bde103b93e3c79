//! Tests for composing optics of every kind with every other kind.
//!
//! Each pair is checked two ways: the kind of the result must match
//! [`OpticKind::compose`], and the composed optic must read and write exactly
//! like running the outer optic and then the inner one by hand.

use kaleido::optics::OpticKind::{self, Iso, Lens, Optional, Prism, Traversal};
use kaleido::optics::{self, Optic, compose};
use rstest::rstest;

// =============================================================================
// Fixtures: one optic per kind over i32
// =============================================================================

fn negate() -> optics::Iso<i32, i32> {
    optics::Iso::new(|n: &i32| n.wrapping_neg(), i32::wrapping_neg)
}

fn whole() -> optics::Lens<i32, i32> {
    optics::Lens::new(|n: &i32| *n, |_, value| value)
}

fn non_negative() -> optics::Prism<i32, i32> {
    optics::Prism::new(|n: &i32| (*n >= 0).then_some(*n), |n| n)
}

fn even() -> optics::Optional<i32, i32> {
    optics::Optional::new(|n: &i32| (n % 2 == 0).then_some(*n), |_, value| value)
}

fn single() -> optics::Traversal<i32, i32> {
    optics::Traversal::new(
        |n: &i32| vec![*n],
        |n, function: &mut dyn FnMut(i32) -> i32| function(n),
    )
}

fn optic_of(kind: OpticKind) -> Optic<i32, i32> {
    match kind {
        Iso => negate().into(),
        Lens => whole().into(),
        Prism => non_negative().into(),
        Optional => even().into(),
        Traversal => single().into(),
    }
}

const SOURCES: [i32; 7] = [-3, -2, -1, 0, 1, 2, 3];

// =============================================================================
// Kind table
// =============================================================================

#[rstest]
fn test_composed_kind_matches_table(
    #[values(Iso, Lens, Prism, Optional, Traversal)] outer: OpticKind,
    #[values(Iso, Lens, Prism, Optional, Traversal)] inner: OpticKind,
) {
    let composed = optic_of(outer).then(optic_of(inner));
    assert_eq!(composed.kind(), outer.compose(inner));
}

#[rstest]
fn test_free_compose_agrees_with_then(
    #[values(Iso, Lens, Prism, Optional, Traversal)] outer: OpticKind,
    #[values(Iso, Lens, Prism, Optional, Traversal)] inner: OpticKind,
) {
    let chained = optic_of(outer).then(optic_of(inner));
    let free = compose(optic_of(outer), optic_of(inner));
    assert_eq!(chained.kind(), free.kind());
    for source in SOURCES {
        assert_eq!(chained.get_all(&source), free.get_all(&source));
    }
}

#[rstest]
#[case(Lens, Prism, Optional)]
#[case(Prism, Lens, Optional)]
#[case(Iso, Traversal, Traversal)]
#[case(Traversal, Iso, Traversal)]
#[case(Prism, Prism, Prism)]
#[case(Iso, Iso, Iso)]
fn test_selected_table_entries(
    #[case] outer: OpticKind,
    #[case] inner: OpticKind,
    #[case] expected: OpticKind,
) {
    assert_eq!(outer.compose(inner), expected);
    assert_eq!(optic_of(outer).then(optic_of(inner)).kind(), expected);
}

// =============================================================================
// Behaviour of every pair
// =============================================================================

#[rstest]
fn test_composed_reads_chain(
    #[values(Iso, Lens, Prism, Optional, Traversal)] outer: OpticKind,
    #[values(Iso, Lens, Prism, Optional, Traversal)] inner: OpticKind,
) {
    let composed = optic_of(outer).then(optic_of(inner));
    let outer_optic = optic_of(outer);
    let inner_optic = optic_of(inner);
    for source in SOURCES {
        let expected: Vec<i32> = outer_optic
            .get_all(&source)
            .iter()
            .flat_map(|focus| inner_optic.get_all(focus))
            .collect();
        assert_eq!(composed.get_all(&source), expected, "source {source}");
        assert_eq!(composed.get_option(&source), expected.first().copied());
    }
}

#[rstest]
fn test_composed_writes_chain(
    #[values(Iso, Lens, Prism, Optional, Traversal)] outer: OpticKind,
    #[values(Iso, Lens, Prism, Optional, Traversal)] inner: OpticKind,
) {
    let composed = optic_of(outer).then(optic_of(inner));
    let outer_optic = optic_of(outer);
    let inner_optic = optic_of(inner);
    for source in SOURCES {
        let expected = outer_optic.modify(source, |focus| inner_optic.modify(focus, |n| n + 10));
        assert_eq!(composed.modify(source, |n| n + 10), expected, "source {source}");
    }
}

#[rstest]
fn test_iso_is_identity_of_composition(
    #[values(Iso, Lens, Prism, Optional, Traversal)] kind: OpticKind,
) {
    let identity = || Optic::from(optics::iso_identity::<i32>());
    let left = identity().then(optic_of(kind));
    let right = optic_of(kind).then(identity());
    let plain = optic_of(kind);
    assert_eq!(left.kind(), kind);
    assert_eq!(right.kind(), kind);
    for source in SOURCES {
        assert_eq!(left.get_all(&source), plain.get_all(&source));
        assert_eq!(right.modify(source, |n| n * 2), plain.modify(source, |n| n * 2));
    }
}

#[rstest]
fn test_composition_is_associative_on_reads(
    #[values(Lens, Prism, Optional, Traversal)] first: OpticKind,
    #[values(Iso, Prism, Traversal)] second: OpticKind,
    #[values(Lens, Optional)] third: OpticKind,
) {
    let left = optic_of(first).then(optic_of(second)).then(optic_of(third));
    let right = optic_of(first).then(optic_of(second).then(optic_of(third)));
    assert_eq!(left.kind(), right.kind());
    for source in SOURCES {
        assert_eq!(left.get_all(&source), right.get_all(&source));
        assert_eq!(left.modify(source, |n| n - 1), right.modify(source, |n| n - 1));
    }
}

#[rstest]
fn test_into_conversions_follow_kind(
    #[values(Iso, Lens, Prism, Optional, Traversal)] kind: OpticKind,
) {
    assert_eq!(optic_of(kind).into_iso().is_some(), kind == Iso);
    assert_eq!(
        optic_of(kind).into_lens().is_some(),
        matches!(kind, Iso | Lens)
    );
    assert_eq!(
        optic_of(kind).into_prism().is_some(),
        matches!(kind, Iso | Prism)
    );
    assert_eq!(optic_of(kind).into_optional().is_some(), kind != Traversal);
    assert!(optic_of(kind).into_traversal().is_some());
}
