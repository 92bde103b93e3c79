//! Positional indexed optics over `Vec`.
//!
//! Three optics focus on the element at a position:
//!
//! - [`vec_index_lens`]: always has a focus; an out-of-range position is a
//!   programmer error and panics with [`OpticError::OutOfBounds`]
//! - [`vec_index_prism`]: reports an out-of-range position as `None`
//! - [`vec_index_traversal`]: has zero or one focus
//!
//! # Examples
//!
//! ```
//! use kaleido::optics::{vec_index_prism, vec_index_traversal};
//!
//! let third = vec_index_prism::<i32>(2);
//!
//! assert_eq!(third.get_option(&vec![1, 2, 3]), Some(3));
//! assert_eq!(third.get_option(&vec![1]), None);
//! assert_eq!(third.set(vec![1], 9), vec![1]);
//!
//! let second = vec_index_traversal::<i32>(1);
//! assert_eq!(second.modify(vec![1, 2, 3], |n| n * 10), vec![1, 20, 3]);
//! ```

use crate::error::{OpticError, defect};

use super::indexed::{IndexedLens, IndexedPrism, IndexedTraversal};
use super::prism::Prism;

/// Creates an indexed lens on the element at `index`.
///
/// # Panics
///
/// Reading or writing panics with [`OpticError::OutOfBounds`] when the index
/// is not below the length of the `Vec`.
///
/// # Example
///
/// ```
/// use kaleido::optics::vec_index_lens;
///
/// let first = vec_index_lens::<&str>(0);
///
/// assert_eq!(first.get(&vec!["a", "b"]), "a");
/// assert_eq!(first.set(vec!["a", "b"], "z"), vec!["z", "b"]);
/// assert_eq!(first.get_at(&1, &vec!["a", "b"]), "b");
/// ```
#[must_use]
pub fn vec_index_lens<A: Clone + 'static>(index: usize) -> IndexedLens<usize, Vec<A>, A> {
    IndexedLens::new(
        index,
        |&index: &usize, elements: &Vec<A>| match elements.get(index) {
            Some(element) => element.clone(),
            None => defect(OpticError::OutOfBounds {
                index,
                length: elements.len(),
            }),
        },
        |&index: &usize, mut elements: Vec<A>, value: A| {
            let length = elements.len();
            match elements.get_mut(index) {
                Some(slot) => *slot = value,
                None => defect(OpticError::OutOfBounds { index, length }),
            }
            elements
        },
    )
}

/// Creates an indexed prism on the element at `index`.
///
/// Out-of-range positions have no focus, and writes to them leave the `Vec`
/// unchanged. `review` builds a `Vec` long enough to hold the value at
/// `index`, padding the positions before it with `A::default()`.
///
/// # Example
///
/// ```
/// use kaleido::optics::vec_index_prism;
///
/// let third = vec_index_prism::<i32>(2);
///
/// assert_eq!(third.review(7), vec![0, 0, 7]);
/// assert_eq!(third.set(vec![1, 2, 3, 4], 0), vec![1, 2, 0, 4]);
/// ```
#[must_use]
pub fn vec_index_prism<A: Clone + Default + 'static>(
    index: usize,
) -> IndexedPrism<usize, Vec<A>, A> {
    IndexedPrism::from_family(index, |&index: &usize| {
        Prism::with_replace(
            move |elements: &Vec<A>| elements.get(index).cloned(),
            move |value: A| {
                let mut elements: Vec<A> = std::iter::repeat_with(A::default).take(index).collect();
                elements.push(value);
                elements
            },
            move |mut elements: Vec<A>, value: A| {
                if let Some(slot) = elements.get_mut(index) {
                    *slot = value;
                }
                elements
            },
        )
    })
}

/// Creates an indexed traversal on the element at `index` (zero or one focus).
#[must_use]
pub fn vec_index_traversal<A: Clone + 'static>(
    index: usize,
) -> IndexedTraversal<usize, Vec<A>, A> {
    IndexedTraversal::new(
        index,
        |&index: &usize, elements: &Vec<A>| elements.get(index).cloned().into_iter().collect(),
        |&index: &usize, elements: Vec<A>, function: &mut dyn FnMut(A) -> A| {
            if index >= elements.len() {
                return elements;
            }
            elements
                .into_iter()
                .enumerate()
                .map(|(position, element)| {
                    if position == index {
                        function(element)
                    } else {
                        element
                    }
                })
                .collect()
        },
    )
}
