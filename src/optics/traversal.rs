//! Traversal optics for focusing on zero or more elements.
//!
//! A Traversal is an optic that provides access to an ordered sequence of foci
//! within a structure. It generalizes Lens (exactly one focus), Prism and
//! Optional (zero or one focus).
//!
//! # Laws
//!
//! Every Traversal must satisfy:
//!
//! 1. **Modify Identity Law**: Applying the identity function yields the original.
//!    ```text
//!    traversal.modify(source.clone(), |x| x) == source
//!    ```
//!
//! 2. **Modify Composition Law**: Consecutive modifications equal a single composed one.
//!    ```text
//!    traversal.modify(traversal.modify(source.clone(), f), g) == traversal.modify(source, |x| g(f(x)))
//!    ```
//!
//! 3. **Alignment**: `modify` calls its function once per focus, in the order
//!    `get_all` returns them, and never changes how many foci there are.
//!
//! # Examples
//!
//! ```
//! use kaleido::optics::vec_each;
//!
//! let each = vec_each::<i32>();
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(each.get_all(&numbers), vec![1, 2, 3, 4, 5]);
//! assert_eq!(each.modify(numbers.clone(), |x| x * 2), vec![2, 4, 6, 8, 10]);
//! assert_eq!(each.set_all(numbers, 0), vec![0, 0, 0, 0, 0]);
//! ```

use std::sync::Arc;

use super::optic::Optic;
use super::optics_compose::compose_traversal_traversal;
use super::{Gatherer, Mapper};

/// A Traversal focuses on zero or more ordered elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The focus type (each focused element)
pub struct Traversal<S, A> {
    gatherer: Gatherer<S, A>,
    mapper: Mapper<S, A>,
}

impl<S: 'static, A: 'static> Traversal<S, A> {
    /// Creates a new `Traversal` from a collector and a mapper.
    ///
    /// # Arguments
    ///
    /// * `get_all` - Collects every focus, in order
    /// * `modify_all` - Rebuilds the source, passing each focus through the
    ///   supplied function in the same order `get_all` yields them
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::Traversal;
    ///
    /// let both = Traversal::new(
    ///     |pair: &(i32, i32)| vec![pair.0, pair.1],
    ///     |(left, right): (i32, i32), function: &mut dyn FnMut(i32) -> i32| {
    ///         let left = function(left);
    ///         (left, function(right))
    ///     },
    /// );
    ///
    /// assert_eq!(both.get_all(&(1, 2)), vec![1, 2]);
    /// assert_eq!(both.modify((1, 2), |x| x + 10), (11, 12));
    /// ```
    #[must_use]
    pub fn new<G, M>(get_all: G, modify_all: M) -> Self
    where
        G: Fn(&S) -> Vec<A> + Send + Sync + 'static,
        M: Fn(S, &mut dyn FnMut(A) -> A) -> S + Send + Sync + 'static,
    {
        Self {
            gatherer: Arc::new(get_all),
            mapper: Arc::new(modify_all),
        }
    }

    /// Returns every focus, in order.
    pub fn get_all(&self, source: &S) -> Vec<A> {
        (self.gatherer)(source)
    }

    /// Returns the first focus, if any.
    pub fn get_option(&self, source: &S) -> Option<A> {
        self.head_option(source)
    }

    /// Returns the first focus, if any.
    pub fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).into_iter().next()
    }

    /// Returns the last focus, if any.
    pub fn last_option(&self, source: &S) -> Option<A> {
        self.get_all(source).pop()
    }

    /// Returns the number of foci.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    ///
    /// assert_eq!(vec_each::<i32>().length(&vec![1, 2, 3]), 3);
    /// assert_eq!(vec_each::<i32>().length(&Vec::new()), 0);
    /// ```
    pub fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Returns `true` if there are no foci.
    pub fn is_empty(&self, source: &S) -> bool {
        self.get_all(source).is_empty()
    }

    /// Modifies every focus by applying a function.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `function` - Applied to each focus, in `get_all` order
    ///
    /// # Returns
    ///
    /// A new source with all foci modified
    pub fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.mapper)(source, &mut function)
    }

    /// Sets every focus to the same value.
    pub fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Folds over all foci from the left.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    ///
    /// let sum = vec_each::<i32>().fold(&vec![1, 2, 3], 0, |total, x| total + x);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold<B, F>(&self, source: &S, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.get_all(source)
            .iter()
            .fold(initial, |accumulator, element| function(accumulator, element))
    }

    /// Returns the first focus satisfying the predicate.
    pub fn find<P>(&self, source: &S, mut predicate: P) -> Option<A>
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source)
            .into_iter()
            .find(|element| predicate(element))
    }

    /// Tests if any focus satisfies a predicate (`false` when there are none).
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.any(source, predicate)
    }

    /// Tests if every focus satisfies a predicate (`true` when there are none).
    pub fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.all(source, predicate)
    }

    /// Composes this traversal with another traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    ///
    /// let nested = vec_each::<Vec<i32>>().compose(vec_each::<i32>());
    /// let data = vec![vec![1, 2], vec![3, 4, 5]];
    ///
    /// assert_eq!(nested.get_all(&data), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(nested.modify(data, |x| x * 10), vec![vec![10, 20], vec![30, 40, 50]]);
    /// ```
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Traversal<A, B>) -> Traversal<S, B> {
        compose_traversal_traversal(self, inner)
    }

    /// Composes this traversal with any optic; the result is always a Traversal.
    #[must_use]
    pub fn then<B: 'static>(self, inner: impl Into<Optic<A, B>>) -> Optic<S, B> {
        Optic::Traversal(self).then(inner)
    }

    /// Writes per-position replacements back through this traversal.
    ///
    /// `replacements` is aligned with `get_all`; `None` keeps the current focus.
    pub(crate) fn replace_positions(&self, source: S, replacements: Vec<Option<A>>) -> S {
        if replacements.iter().all(Option::is_none) {
            return source;
        }
        let mut replacements = replacements.into_iter();
        self.modify(source, |current| {
            replacements.next().flatten().unwrap_or(current)
        })
    }
}

/// Creates a traversal from a collector and a mapper.
///
/// Shorthand for [`Traversal::new`].
#[must_use]
pub fn traversal<S, A, G, M>(get_all: G, modify_all: M) -> Traversal<S, A>
where
    S: 'static,
    A: 'static,
    G: Fn(&S) -> Vec<A> + Send + Sync + 'static,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S + Send + Sync + 'static,
{
    Traversal::new(get_all, modify_all)
}

impl<S, A> Clone for Traversal<S, A> {
    fn clone(&self) -> Self {
        Self {
            gatherer: Arc::clone(&self.gatherer),
            mapper: Arc::clone(&self.mapper),
        }
    }
}

impl<S, A> std::fmt::Debug for Traversal<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Traversal").finish_non_exhaustive()
    }
}
