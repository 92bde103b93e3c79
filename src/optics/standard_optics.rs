//! Standard optics that are commonly used.
//!
//! This module provides pre-defined optics over the standard library's
//! tuples, `Option`, `Result` and `Vec`.

use super::iso::Iso;
use super::lens::Lens;
use super::prism::Prism;
use super::traversal::Traversal;

/// Creates an identity Iso that doesn't transform the value.
///
/// The identity Iso satisfies:
/// - `iso.get(&x) == x`
/// - `iso.reverse_get(x.clone()) == x`
///
/// # Type Parameters
///
/// - `T`: The type to create an identity Iso for
///
/// # Returns
///
/// An identity Iso
///
/// # Example
///
/// ```
/// use kaleido::optics::iso_identity;
///
/// let identity_iso = iso_identity::<i32>();
///
/// assert_eq!(identity_iso.get(&42), 42);
/// assert_eq!(identity_iso.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T: Clone + 'static>() -> Iso<T, T> {
    Iso::new(|value: &T| value.clone(), |value: T| value)
}

/// Creates an Iso that swaps the elements of a pair.
///
/// Converts `(A, B)` to `(B, A)` and back.
///
/// # Example
///
/// ```
/// use kaleido::optics::iso_swap;
///
/// let swap = iso_swap::<i32, &str>();
///
/// assert_eq!(swap.get(&(1, "one")), ("one", 1));
/// assert_eq!(swap.reverse_get(("two", 2)), (2, "two"));
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> Iso<(A, B), (B, A)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    Iso::new(
        |(first, second): &(A, B)| (second.clone(), first.clone()),
        |(second, first): (B, A)| (first, second),
    )
}

/// Creates a Prism focusing on the value inside `Some`.
///
/// # Example
///
/// ```
/// use kaleido::optics::some_prism;
///
/// let some = some_prism::<i32>();
///
/// assert_eq!(some.get_option(&Some(3)), Some(3));
/// assert_eq!(some.get_option(&None), None);
/// assert_eq!(some.review(4), Some(4));
/// assert_eq!(some.set(None, 4), None);
/// ```
#[must_use]
pub fn some_prism<A: Clone + 'static>() -> Prism<Option<A>, A> {
    Prism::new(|option: &Option<A>| option.clone(), Some)
}

/// Creates a Prism focusing on the `Ok` value of a `Result`.
#[must_use]
pub fn ok_prism<T, E>() -> Prism<Result<T, E>, T>
where
    T: Clone + 'static,
    E: 'static,
{
    Prism::new(|result: &Result<T, E>| result.as_ref().ok().cloned(), Ok)
}

/// Creates a Prism focusing on the `Err` value of a `Result`.
///
/// # Example
///
/// ```
/// use kaleido::optics::err_prism;
///
/// let error = err_prism::<i32, String>();
///
/// assert_eq!(error.get_option(&Err("boom".to_string())), Some("boom".to_string()));
/// assert_eq!(error.get_option(&Ok(1)), None);
/// ```
#[must_use]
pub fn err_prism<T, E>() -> Prism<Result<T, E>, E>
where
    T: 'static,
    E: Clone + 'static,
{
    Prism::new(|result: &Result<T, E>| result.as_ref().err().cloned(), Err)
}

/// Creates a Lens focusing on the first element of a pair.
#[must_use]
pub fn first_lens<A, B>() -> Lens<(A, B), A>
where
    A: Clone + 'static,
    B: 'static,
{
    Lens::new(|pair: &(A, B)| pair.0.clone(), |(_, second): (A, B), first| {
        (first, second)
    })
}

/// Creates a Lens focusing on the second element of a pair.
#[must_use]
pub fn second_lens<A, B>() -> Lens<(A, B), B>
where
    A: 'static,
    B: Clone + 'static,
{
    Lens::new(|pair: &(A, B)| pair.1.clone(), |(first, _): (A, B), second| {
        (first, second)
    })
}

/// Creates a Traversal over every element of a `Vec`.
///
/// # Example
///
/// ```
/// use kaleido::optics::vec_each;
///
/// let each = vec_each::<i32>();
///
/// assert_eq!(each.get_all(&vec![1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
/// assert_eq!(each.modify(vec![1, 2, 3, 4, 5], |x| x * 2), vec![2, 4, 6, 8, 10]);
/// ```
#[must_use]
pub fn vec_each<A: Clone + 'static>() -> Traversal<Vec<A>, A> {
    Traversal::new(
        |elements: &Vec<A>| elements.clone(),
        |elements: Vec<A>, function: &mut dyn FnMut(A) -> A| {
            elements.into_iter().map(function).collect()
        },
    )
}

/// Creates a Traversal over the value of an `Option` (zero or one focus).
#[must_use]
pub fn option_each<A: Clone + 'static>() -> Traversal<Option<A>, A> {
    Traversal::new(
        |option: &Option<A>| option.iter().cloned().collect(),
        |option: Option<A>, function: &mut dyn FnMut(A) -> A| option.map(function),
    )
}

/// Creates a Traversal over the `Ok` value of a `Result` (zero or one focus).
#[must_use]
pub fn result_each<T, E>() -> Traversal<Result<T, E>, T>
where
    T: Clone + 'static,
    E: 'static,
{
    Traversal::new(
        |result: &Result<T, E>| result.iter().cloned().collect(),
        |result: Result<T, E>, function: &mut dyn FnMut(T) -> T| result.map(function),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_iso_swap_round_trip() {
        let swap = iso_swap::<i32, char>();
        assert_eq!(swap.reverse_get(swap.get(&(1, 'a'))), (1, 'a'));
    }

    #[rstest]
    #[case(Ok(2), Some(2), None)]
    #[case(Err("bad"), None, Some("bad"))]
    fn test_result_prisms(
        #[case] input: Result<i32, &'static str>,
        #[case] ok: Option<i32>,
        #[case] err: Option<&'static str>,
    ) {
        assert_eq!(ok_prism::<i32, &str>().get_option(&input), ok);
        assert_eq!(err_prism::<i32, &str>().get_option(&input), err);
    }

    #[test]
    fn test_pair_lenses() {
        let pair = (1, "one");
        assert_eq!(first_lens::<i32, &str>().get(&pair), 1);
        assert_eq!(second_lens::<i32, &str>().set(pair, "uno"), (1, "uno"));
    }

    #[test]
    fn test_option_and_result_each() {
        assert_eq!(option_each::<i32>().modify(Some(1), |n| n + 1), Some(2));
        assert_eq!(option_each::<i32>().modify(None, |n| n + 1), None);
        assert_eq!(result_each::<i32, String>().get_all(&Ok(5)), vec![5]);
        assert_eq!(
            result_each::<i32, String>().modify(Err("e".to_string()), |n| n + 1),
            Err("e".to_string())
        );
    }
}
