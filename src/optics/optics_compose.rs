//! Typed composers, one per ordered pair of optic kinds.
//!
//! Each function's return type is the kind that the pair produces:
//!
//! ```text
//! Iso > Lens > Optional > Traversal
//! Iso > Prism > Optional > Traversal
//! ```
//!
//! # Composition Rules
//!
//! - Iso + K -> K, K + Iso -> K
//! - Lens + Lens -> Lens
//! - Prism + Prism -> Prism
//! - Lens + Prism, Prism + Lens -> Optional
//! - anything + Optional -> Optional (unless Traversal is involved)
//! - anything + Traversal, Traversal + anything -> Traversal
//!
//! Call these directly to assert the kind you expect at compile time; use
//! [`Optic::then`](super::Optic::then) when the kinds are only known at runtime.
//!
//! # Example
//!
//! ```
//! use kaleido::optics::optics_compose::compose_lens_prism;
//! use kaleido::optics::{some_prism, Lens};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     nickname: Option<String>,
//! }
//!
//! let nickname = compose_lens_prism(
//!     Lens::new(
//!         |user: &User| user.nickname.clone(),
//!         |user: User, nickname| User { nickname, ..user },
//!     ),
//!     some_prism::<String>(),
//! );
//!
//! let named = User { nickname: Some("kal".to_string()) };
//! assert_eq!(nickname.get_option(&named), Some("kal".to_string()));
//! assert_eq!(nickname.set(User { nickname: None }, "x".to_string()), User { nickname: None });
//! ```

use super::iso::Iso;
use super::lens::Lens;
use super::optional::Optional;
use super::prism::Prism;
use super::traversal::Traversal;

// =============================================================================
// Iso + K -> K
// =============================================================================

/// Composes two isos into an iso.
#[must_use]
pub fn compose_iso_iso<S, A, B>(outer: Iso<S, A>, inner: Iso<A, B>) -> Iso<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Iso::new(
        move |source| read_inner.get(&read_outer.get(source)),
        move |value| outer.reverse_get(inner.reverse_get(value)),
    )
}

/// Composes an iso with a lens into a lens.
#[must_use]
pub fn compose_iso_lens<S, A, B>(outer: Iso<S, A>, inner: Lens<A, B>) -> Lens<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Lens::new(
        move |source| read_inner.get(&read_outer.get(source)),
        move |source, value| outer.reverse_get(inner.set(outer.get(&source), value)),
    )
}

/// Composes an iso with a prism into a prism.
#[must_use]
pub fn compose_iso_prism<S, A, B>(outer: Iso<S, A>, inner: Prism<A, B>) -> Prism<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    let (build_outer, build_inner) = (outer.clone(), inner.clone());
    Prism::with_replace(
        move |source| read_inner.get_option(&read_outer.get(source)),
        move |value| build_outer.reverse_get(build_inner.review(value)),
        move |source, value| outer.reverse_get(inner.replace(outer.get(&source), value)),
    )
}

/// Composes an iso with an optional into an optional.
#[must_use]
pub fn compose_iso_optional<S, A, B>(outer: Iso<S, A>, inner: Optional<A, B>) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| read_inner.get_option(&read_outer.get(source)),
        move |source, value| outer.reverse_get(inner.set(outer.get(&source), value)),
    )
}

/// Composes an iso with a traversal into a traversal.
#[must_use]
pub fn compose_iso_traversal<S, A, B>(outer: Iso<S, A>, inner: Traversal<A, B>) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| read_inner.get_all(&read_outer.get(source)),
        move |source, function| outer.reverse_get(inner.modify(outer.get(&source), function)),
    )
}

// =============================================================================
// Lens + K
// =============================================================================

/// Composes a lens with an iso into a lens.
#[must_use]
pub fn compose_lens_iso<S, A, B>(outer: Lens<S, A>, inner: Iso<A, B>) -> Lens<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Lens::new(
        move |source| read_inner.get(&read_outer.get(source)),
        move |source, value| outer.set(source, inner.reverse_get(value)),
    )
}

/// Composes two lenses into a lens.
///
/// `get` reads through both; `set` rebuilds the outer focus with the new inner
/// value and writes it back.
///
/// # Example
///
/// ```
/// use kaleido::optics::optics_compose::compose_lens_lens;
/// use kaleido::optics::{first_lens, second_lens};
///
/// let inner_second = compose_lens_lens(first_lens::<(i32, i32), i32>(), second_lens::<i32, i32>());
/// let nested = ((1, 2), 3);
///
/// assert_eq!(inner_second.get(&nested), 2);
/// assert_eq!(inner_second.set(nested, 20), ((1, 20), 3));
/// ```
#[must_use]
pub fn compose_lens_lens<S, A, B>(outer: Lens<S, A>, inner: Lens<A, B>) -> Lens<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Lens::new(
        move |source| read_inner.get(&read_outer.get(source)),
        move |source, value| {
            let focus = outer.get(&source);
            outer.set(source, inner.set(focus, value))
        },
    )
}

/// Composes a lens with a prism into an optional.
///
/// Writes replace the prism's focus inside the lens' focus; when the prism does
/// not match, the source is returned unchanged.
#[must_use]
pub fn compose_lens_prism<S, A, B>(outer: Lens<S, A>, inner: Prism<A, B>) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| read_inner.get_option(&read_outer.get(source)),
        move |source, value| {
            let focus = outer.get(&source);
            outer.set(source, inner.replace(focus, value))
        },
    )
}

/// Composes a lens with an optional into an optional.
#[must_use]
pub fn compose_lens_optional<S, A, B>(outer: Lens<S, A>, inner: Optional<A, B>) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| read_inner.get_option(&read_outer.get(source)),
        move |source, value| {
            let focus = outer.get(&source);
            outer.set(source, inner.set(focus, value))
        },
    )
}

/// Composes a lens with a traversal into a traversal.
#[must_use]
pub fn compose_lens_traversal<S, A, B>(outer: Lens<S, A>, inner: Traversal<A, B>) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| read_inner.get_all(&read_outer.get(source)),
        move |source, function| {
            let focus = outer.get(&source);
            outer.set(source, inner.modify(focus, function))
        },
    )
}

// =============================================================================
// Prism + K
// =============================================================================

/// Composes a prism with an iso into a prism.
#[must_use]
pub fn compose_prism_iso<S, A, B>(outer: Prism<S, A>, inner: Iso<A, B>) -> Prism<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    let (build_outer, build_inner) = (outer.clone(), inner.clone());
    Prism::with_replace(
        move |source| {
            read_outer
                .get_option(source)
                .map(|focus| read_inner.get(&focus))
        },
        move |value| build_outer.review(build_inner.reverse_get(value)),
        move |source, value| outer.replace(source, inner.reverse_get(value)),
    )
}

/// Composes a prism with a lens into an optional.
#[must_use]
pub fn compose_prism_lens<S, A, B>(outer: Prism<S, A>, inner: Lens<A, B>) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| {
            read_outer
                .get_option(source)
                .map(|focus| read_inner.get(&focus))
        },
        move |source, value| match outer.get_option(&source) {
            Some(focus) => outer.replace(source, inner.set(focus, value)),
            None => source,
        },
    )
}

/// Composes two prisms into a prism.
///
/// Matching short-circuits on the first miss; `review` builds the inner
/// source, then the outer one.
///
/// # Example
///
/// ```
/// use kaleido::optics::optics_compose::compose_prism_prism;
/// use kaleido::optics::{ok_prism, some_prism};
///
/// let present_ok = compose_prism_prism(ok_prism::<Option<i32>, String>(), some_prism::<i32>());
///
/// assert_eq!(present_ok.get_option(&Ok(Some(1))), Some(1));
/// assert_eq!(present_ok.get_option(&Ok(None)), None);
/// assert_eq!(present_ok.get_option(&Err("e".to_string())), None);
/// assert_eq!(present_ok.review(5), Ok(Some(5)));
/// ```
#[must_use]
pub fn compose_prism_prism<S, A, B>(outer: Prism<S, A>, inner: Prism<A, B>) -> Prism<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    let (build_outer, build_inner) = (outer.clone(), inner.clone());
    Prism::with_replace(
        move |source| {
            read_outer
                .get_option(source)
                .and_then(|focus| read_inner.get_option(&focus))
        },
        move |value| build_outer.review(build_inner.review(value)),
        move |source, value| match outer.get_option(&source) {
            Some(focus) => outer.replace(source, inner.replace(focus, value)),
            None => source,
        },
    )
}

/// Composes a prism with an optional into an optional.
#[must_use]
pub fn compose_prism_optional<S, A, B>(outer: Prism<S, A>, inner: Optional<A, B>) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| {
            read_outer
                .get_option(source)
                .and_then(|focus| read_inner.get_option(&focus))
        },
        move |source, value| match outer.get_option(&source) {
            Some(focus) => outer.replace(source, inner.set(focus, value)),
            None => source,
        },
    )
}

/// Composes a prism with a traversal into a traversal.
#[must_use]
pub fn compose_prism_traversal<S, A, B>(
    outer: Prism<S, A>,
    inner: Traversal<A, B>,
) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| {
            read_outer
                .get_option(source)
                .map(|focus| read_inner.get_all(&focus))
                .unwrap_or_default()
        },
        move |source, function| match outer.get_option(&source) {
            Some(focus) => outer.replace(source, inner.modify(focus, function)),
            None => source,
        },
    )
}

// =============================================================================
// Optional + K
// =============================================================================

/// Composes an optional with an iso into an optional.
#[must_use]
pub fn compose_optional_iso<S, A, B>(outer: Optional<S, A>, inner: Iso<A, B>) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| {
            read_outer
                .get_option(source)
                .map(|focus| read_inner.get(&focus))
        },
        move |source, value| outer.set(source, inner.reverse_get(value)),
    )
}

/// Composes an optional with a lens into an optional.
#[must_use]
pub fn compose_optional_lens<S, A, B>(outer: Optional<S, A>, inner: Lens<A, B>) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| {
            read_outer
                .get_option(source)
                .map(|focus| read_inner.get(&focus))
        },
        move |source, value| outer.modify(source, |focus| inner.set(focus, value)),
    )
}

/// Composes an optional with a prism into an optional.
#[must_use]
pub fn compose_optional_prism<S, A, B>(outer: Optional<S, A>, inner: Prism<A, B>) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| {
            read_outer
                .get_option(source)
                .and_then(|focus| read_inner.get_option(&focus))
        },
        move |source, value| outer.modify(source, |focus| inner.set(focus, value)),
    )
}

/// Composes two optionals into an optional.
///
/// Both lookups must succeed to read; a write is the identity when either
/// focus is absent.
#[must_use]
pub fn compose_optional_optional<S, A, B>(
    outer: Optional<S, A>,
    inner: Optional<A, B>,
) -> Optional<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Optional::new(
        move |source| {
            read_outer
                .get_option(source)
                .and_then(|focus| read_inner.get_option(&focus))
        },
        move |source, value| outer.modify(source, |focus| inner.set(focus, value)),
    )
}

/// Composes an optional with a traversal into a traversal.
#[must_use]
pub fn compose_optional_traversal<S, A, B>(
    outer: Optional<S, A>,
    inner: Traversal<A, B>,
) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| {
            read_outer
                .get_option(source)
                .map(|focus| read_inner.get_all(&focus))
                .unwrap_or_default()
        },
        move |source, function| outer.modify(source, |focus| inner.modify(focus, function)),
    )
}

// =============================================================================
// Traversal + K -> Traversal
// =============================================================================

/// Composes a traversal with an iso into a traversal.
#[must_use]
pub fn compose_traversal_iso<S, A, B>(outer: Traversal<S, A>, inner: Iso<A, B>) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| {
            read_outer
                .get_all(source)
                .iter()
                .map(|focus| read_inner.get(focus))
                .collect()
        },
        move |source, function| outer.modify(source, |focus| inner.modify(focus, &mut *function)),
    )
}

/// Composes a traversal with a lens into a traversal.
#[must_use]
pub fn compose_traversal_lens<S, A, B>(outer: Traversal<S, A>, inner: Lens<A, B>) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| {
            read_outer
                .get_all(source)
                .iter()
                .map(|focus| read_inner.get(focus))
                .collect()
        },
        move |source, function| outer.modify(source, |focus| inner.modify(focus, &mut *function)),
    )
}

/// Composes a traversal with a prism into a traversal.
///
/// Outer foci the prism does not match contribute nothing and are left unchanged.
#[must_use]
pub fn compose_traversal_prism<S, A, B>(
    outer: Traversal<S, A>,
    inner: Prism<A, B>,
) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| {
            read_outer
                .get_all(source)
                .iter()
                .filter_map(|focus| read_inner.get_option(focus))
                .collect()
        },
        move |source, function| outer.modify(source, |focus| inner.modify(focus, &mut *function)),
    )
}

/// Composes a traversal with an optional into a traversal.
#[must_use]
pub fn compose_traversal_optional<S, A, B>(
    outer: Traversal<S, A>,
    inner: Optional<A, B>,
) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| {
            read_outer
                .get_all(source)
                .iter()
                .filter_map(|focus| read_inner.get_option(focus))
                .collect()
        },
        move |source, function| outer.modify(source, |focus| inner.modify(focus, &mut *function)),
    )
}

/// Composes two traversals into a traversal.
///
/// Reads flatten the inner foci of every outer focus, in order.
#[must_use]
pub fn compose_traversal_traversal<S, A, B>(
    outer: Traversal<S, A>,
    inner: Traversal<A, B>,
) -> Traversal<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    let (read_outer, read_inner) = (outer.clone(), inner.clone());
    Traversal::new(
        move |source| {
            read_outer
                .get_all(source)
                .iter()
                .flat_map(|focus| read_inner.get_all(focus))
                .collect()
        },
        move |source, function| outer.modify(source, |focus| inner.modify(focus, &mut *function)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{first_lens, iso_swap, option_each, second_lens, some_prism, vec_each};

    #[derive(Clone, Debug, PartialEq)]
    enum Slot {
        Filled(Option<i32>),
        Empty,
    }

    fn filled() -> Prism<Slot, Option<i32>> {
        Prism::new(
            |slot: &Slot| match slot {
                Slot::Filled(value) => Some(*value),
                Slot::Empty => None,
            },
            Slot::Filled,
        )
    }

    #[test]
    fn test_iso_lens_writes_back_through_iso() {
        let swapped_first = compose_iso_lens(iso_swap::<i32, char>(), first_lens::<char, i32>());
        assert_eq!(swapped_first.get(&(1, 'a')), 'a');
        assert_eq!(swapped_first.set((1, 'a'), 'b'), (1, 'b'));
    }

    #[test]
    fn test_prism_lens_skips_unmatched() {
        let composed = compose_prism_lens(
            some_prism::<(i32, char)>(),
            second_lens::<i32, char>(),
        );
        assert_eq!(composed.get_option(&Some((1, 'a'))), Some('a'));
        assert_eq!(composed.set(Some((1, 'a')), 'z'), Some((1, 'z')));
        assert_eq!(composed.set(None, 'z'), None);
    }

    #[test]
    fn test_prism_prism_review_and_partial_write() {
        let inner_value = compose_prism_prism(filled(), some_prism::<i32>());
        assert_eq!(inner_value.get_option(&Slot::Filled(Some(2))), Some(2));
        assert_eq!(inner_value.get_option(&Slot::Filled(None)), None);
        assert_eq!(inner_value.review(7), Slot::Filled(Some(7)));
        assert_eq!(inner_value.set(Slot::Filled(None), 7), Slot::Filled(None));
        assert_eq!(inner_value.set(Slot::Empty, 7), Slot::Empty);
        assert_eq!(inner_value.set(Slot::Filled(Some(1)), 7), Slot::Filled(Some(7)));
    }

    #[test]
    fn test_optional_optional_absent_either_side() {
        let outer = filled().to_optional();
        let inner = some_prism::<i32>().to_optional();
        let composed = compose_optional_optional(outer, inner);
        assert_eq!(composed.set(Slot::Empty, 1), Slot::Empty);
        assert_eq!(composed.set(Slot::Filled(None), 1), Slot::Filled(None));
        assert_eq!(composed.modify(Slot::Filled(Some(1)), |n| n + 1), Slot::Filled(Some(2)));
    }

    #[test]
    fn test_traversal_prism_filters_and_preserves_shape() {
        let present = compose_traversal_prism(vec_each::<Option<i32>>(), some_prism::<i32>());
        let values = vec![Some(1), None, Some(3)];
        assert_eq!(present.get_all(&values), vec![1, 3]);
        assert_eq!(present.modify(values, |n| n * 10), vec![Some(10), None, Some(30)]);
    }

    #[test]
    fn test_lens_traversal_reaches_nested_collection() {
        let firsts = compose_lens_traversal(first_lens::<Vec<i32>, char>(), vec_each::<i32>());
        let source = (vec![1, 2], 'k');
        assert_eq!(firsts.get_all(&source), vec![1, 2]);
        assert_eq!(firsts.modify(source, |n| -n), (vec![-1, -2], 'k'));
    }

    #[test]
    fn test_traversal_traversal_flattens_in_order() {
        let all = compose_traversal_traversal(vec_each::<Option<i32>>(), option_each::<i32>());
        assert_eq!(all.get_all(&vec![Some(1), None, Some(2)]), vec![1, 2]);
    }
}
