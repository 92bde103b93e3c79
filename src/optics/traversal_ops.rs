//! Bulk operations over a [`Traversal`].
//!
//! Intermediate operations (`filter`, `take`, `drop`, `slice`, `reverse`,
//! `sort_by_key`, `sort_by`, `distinct`) wrap a traversal and return another
//! traversal, so they stay composable and writable. Terminal operations
//! (`reduce`, `fold_map`, `all`, `any`) end the chain with a concrete value.
//!
//! Selection-style operations pick positions among the parent's foci. Reading
//! yields the picked foci in selection order; writing edits them in that same
//! order and puts every result back at the position it came from. Foci that
//! are not selected are left untouched.
//!
//! # Examples
//!
//! ```
//! use kaleido::optics::vec_each;
//!
//! let evens = vec_each::<i32>().filter(|n| n % 2 == 0).slice(1, 3);
//! let numbers: Vec<i32> = (1..=10).collect();
//!
//! assert_eq!(evens.get_all(&numbers), vec![4, 6]);
//! assert_eq!(evens.clone().reverse().get_all(&numbers), vec![6, 4]);
//! assert_eq!(
//!     evens.modify(numbers, |n| -n),
//!     vec![1, 2, 3, -4, 5, -6, 7, 8, 9, 10]
//! );
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use super::traversal::Traversal;
use crate::typeclass::Monoid;

type Selector<A> = Arc<dyn Fn(&[A]) -> Vec<usize> + Send + Sync>;

impl<S: 'static, A: 'static> Traversal<S, A> {
    /// Restricts the foci to those satisfying a predicate.
    ///
    /// Foci that fail the predicate are passed through unchanged on write.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    ///
    /// let odd = vec_each::<i32>().filter(|n| n % 2 == 1);
    /// assert_eq!(odd.get_all(&vec![1, 2, 3]), vec![1, 3]);
    /// assert_eq!(odd.modify(vec![1, 2, 3], |n| n * 10), vec![10, 2, 30]);
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        let read_predicate = Arc::clone(&predicate);
        let reader = self.clone();
        Self::new(
            move |source| {
                reader
                    .get_all(source)
                    .into_iter()
                    .filter(|element| read_predicate(element))
                    .collect()
            },
            move |source, function| {
                self.modify(source, |element| {
                    if predicate(&element) {
                        function(element)
                    } else {
                        element
                    }
                })
            },
        )
    }

    /// Keeps the first `count` foci (all of them if there are fewer).
    #[must_use]
    pub fn take(self, count: usize) -> Self {
        self.select(move |foci| (0..count.min(foci.len())).collect())
    }

    /// Skips the first `count` foci (all of them if there are fewer).
    #[must_use]
    pub fn drop(self, count: usize) -> Self {
        self.select(move |foci| (count.min(foci.len())..foci.len()).collect())
    }

    /// Keeps the foci in the half-open range `start..end`.
    ///
    /// Negative bounds count from the end. Both bounds are clamped to the
    /// number of foci, and `end <= start` selects nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    ///
    /// let numbers = vec![10, 20, 30, 40, 50];
    /// assert_eq!(vec_each::<i32>().slice(1, 3).get_all(&numbers), vec![20, 30]);
    /// assert_eq!(vec_each::<i32>().slice(1, -1).get_all(&numbers), vec![20, 30, 40]);
    /// assert_eq!(vec_each::<i32>().slice(-2, 100).get_all(&numbers), vec![40, 50]);
    /// assert!(vec_each::<i32>().slice(3, 1).get_all(&numbers).is_empty());
    /// ```
    #[must_use]
    pub fn slice(self, start: isize, end: isize) -> Self {
        self.select(move |foci| {
            let length = foci.len();
            let start = resolve_bound(start, length);
            let end = resolve_bound(end, length);
            if end <= start {
                Vec::new()
            } else {
                (start..end).collect()
            }
        })
    }

    /// Reverses the order of the foci.
    ///
    /// `t.reverse().reverse()` reads and writes exactly like `t`.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.select(|foci| (0..foci.len()).rev().collect())
    }

    /// Orders the foci by a key, keeping equal keys in their original order.
    ///
    /// On write, edits are applied in sorted order and each result is stored
    /// back at the focus it came from.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    ///
    /// let by_length = vec_each::<&str>().sort_by_key(|word| word.len());
    /// let words = vec!["ccc", "a", "bb", "d"];
    ///
    /// assert_eq!(by_length.get_all(&words), vec!["a", "d", "bb", "ccc"]);
    /// ```
    #[must_use]
    pub fn sort_by_key<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&A) -> K + Send + Sync + 'static,
    {
        self.select(move |foci| {
            let keys: Vec<K> = foci.iter().map(&key).collect();
            let mut positions: Vec<usize> = (0..foci.len()).collect();
            positions.sort_by(|&left, &right| keys[left].cmp(&keys[right]));
            positions
        })
    }

    /// Orders the foci with a comparator, keeping equal foci in their original order.
    #[must_use]
    pub fn sort_by<F>(self, compare: F) -> Self
    where
        F: Fn(&A, &A) -> Ordering + Send + Sync + 'static,
    {
        self.select(move |foci| {
            let mut positions: Vec<usize> = (0..foci.len()).collect();
            positions.sort_by(|&left, &right| compare(&foci[left], &foci[right]));
            positions
        })
    }

    /// Removes duplicate foci, keeping the first occurrence of each value.
    ///
    /// On write, the edit runs once per distinct value and its result replaces
    /// every occurrence of that value.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    ///
    /// let unique = vec_each::<i32>().distinct();
    /// assert_eq!(unique.get_all(&vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    /// assert_eq!(unique.modify(vec![3, 1, 3], |n| n + 1), vec![4, 2, 4]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Self
    where
        A: Clone + PartialEq,
    {
        let reader = self.clone();
        Self::new(
            move |source| {
                let mut unique: Vec<A> = Vec::new();
                for element in reader.get_all(source) {
                    if !unique.contains(&element) {
                        unique.push(element);
                    }
                }
                unique
            },
            move |source, function| {
                let foci = self.get_all(&source);
                if foci.is_empty() {
                    return source;
                }
                let mut unique: Vec<A> = Vec::new();
                let mut groups = Vec::with_capacity(foci.len());
                for element in &foci {
                    if let Some(group) = unique.iter().position(|seen| seen == element) {
                        groups.push(group);
                    } else {
                        groups.push(unique.len());
                        unique.push(element.clone());
                    }
                }
                let edited: Vec<A> = unique.into_iter().map(&mut *function).collect();
                let replacements = groups
                    .into_iter()
                    .map(|group| Some(edited[group].clone()))
                    .collect();
                self.replace_positions(source, replacements)
            },
        )
    }

    /// Left-folds every focus into an accumulator.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    ///
    /// let joined = vec_each::<&str>().reduce(&vec!["a", "b", "c"], String::new(), |mut acc, s| {
    ///     acc.push_str(s);
    ///     acc
    /// });
    /// assert_eq!(joined, "abc");
    /// ```
    pub fn reduce<B, F>(&self, source: &S, seed: B, reducer: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(seed, reducer)
    }

    /// Maps every focus into a monoid and combines the results.
    ///
    /// Returns `M::empty()` when there are no foci.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::vec_each;
    /// use kaleido::typeclass::{Max, Sum};
    ///
    /// let each = vec_each::<i32>();
    /// let total: Sum<i32> = each.fold_map(&vec![1, 2, 3], Sum::new);
    /// let largest: Max<i32> = each.fold_map(&vec![4, 9, 2], Max::new);
    ///
    /// assert_eq!(total.into_inner(), 6);
    /// assert_eq!(largest.into_inner(), 9);
    /// ```
    pub fn fold_map<M, F>(&self, source: &S, project: F) -> M
    where
        M: Monoid,
        F: FnMut(A) -> M,
    {
        M::combine_all(self.get_all(source).into_iter().map(project))
    }

    /// Returns `true` if every focus satisfies the predicate (`true` when there are none).
    pub fn all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().all(predicate)
    }

    /// Returns `true` if some focus satisfies the predicate (`false` when there are none).
    pub fn any<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().any(predicate)
    }

    fn select<F>(self, selector: F) -> Self
    where
        F: Fn(&[A]) -> Vec<usize> + Send + Sync + 'static,
    {
        let selector: Selector<A> = Arc::new(selector);
        let read_selector = Arc::clone(&selector);
        let reader = self.clone();
        Self::new(
            move |source| {
                let foci = reader.get_all(source);
                let positions = read_selector(foci.as_slice());
                pick(foci, &positions)
            },
            move |source, function| {
                let foci = self.get_all(&source);
                let positions = selector(foci.as_slice());
                if positions.is_empty() {
                    return source;
                }
                let mut slots: Vec<Option<A>> = foci.into_iter().map(Some).collect();
                let mut replacements: Vec<Option<A>> = slots.iter().map(|_| None).collect();
                for position in positions {
                    if let Some(element) = slots.get_mut(position).and_then(Option::take) {
                        replacements[position] = Some(function(element));
                    }
                }
                self.replace_positions(source, replacements)
            },
        )
    }
}

fn pick<A>(foci: Vec<A>, positions: &[usize]) -> Vec<A> {
    let mut slots: Vec<Option<A>> = foci.into_iter().map(Some).collect();
    positions
        .iter()
        .filter_map(|&position| slots.get_mut(position).and_then(Option::take))
        .collect()
}

fn resolve_bound(bound: isize, length: usize) -> usize {
    if bound < 0 {
        length.saturating_sub(bound.unsigned_abs())
    } else {
        bound.unsigned_abs().min(length)
    }
}
