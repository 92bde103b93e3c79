//! Indexed optics: optics that carry an index value alongside their focus.
//!
//! An indexed optic is a family of plain optics, one per index, together with
//! the index it currently points at. The plain accessors (`get`, `set`, ...)
//! use the carried index; the `*_at` accessors take an explicit one.
//!
//! Composing two indexed optics pairs their indices: the result is indexed by
//! `(outer_index, inner_index)` and its kind follows the same table as plain
//! composition.
//!
//! # Examples
//!
//! ```
//! use kaleido::optics::{vec_index_lens, vec_index_prism, OpticKind};
//!
//! let grid = vec![vec![1, 2], vec![3, 4]];
//!
//! let row = vec_index_lens::<Vec<i32>>(1);
//! assert_eq!(row.get(&grid), vec![3, 4]);
//! assert_eq!(row.get_at(&0, &grid), vec![1, 2]);
//!
//! let cell = row.then(vec_index_prism::<i32>(0));
//! assert_eq!(cell.kind(), OpticKind::Optional);
//! assert_eq!(cell.index(), &(1, 0));
//! assert_eq!(cell.get_option(&grid), Some(3));
//! assert_eq!(cell.get_option_at(&(0, 5), &grid), None);
//! ```

use std::sync::Arc;

use tracing::trace;

use super::kind::OpticKind;
use super::lens::Lens;
use super::optic::Optic;
use super::optics_compose::{
    compose_lens_lens, compose_lens_optional, compose_lens_prism, compose_lens_traversal,
    compose_optional_lens, compose_optional_optional, compose_optional_prism,
    compose_optional_traversal, compose_prism_lens, compose_prism_optional, compose_prism_prism,
    compose_prism_traversal, compose_traversal_lens, compose_traversal_optional,
    compose_traversal_prism, compose_traversal_traversal,
};
use super::optional::Optional;
use super::prism::Prism;
use super::traversal::Traversal;

type Family<I, O> = Arc<dyn Fn(&I) -> O + Send + Sync>;

fn pair_family<I, J, O, P, R>(
    outer: Family<I, O>,
    inner: Family<J, P>,
    compose: fn(O, P) -> R,
) -> Family<(I, J), R>
where
    I: 'static,
    J: 'static,
    O: 'static,
    P: 'static,
    R: 'static,
{
    Arc::new(move |(outer_index, inner_index): &(I, J)| {
        compose(outer(outer_index), inner(inner_index))
    })
}

// =============================================================================
// IndexedLens
// =============================================================================

/// A Lens that carries an index.
///
/// # Type Parameters
///
/// - `I`: The index type
/// - `S`: The source type
/// - `A`: The focus type
pub struct IndexedLens<I, S, A> {
    index: I,
    family: Family<I, Lens<S, A>>,
}

impl<I, S, A> IndexedLens<I, S, A>
where
    I: Clone + Send + Sync + 'static,
    S: 'static,
    A: 'static,
{
    /// Creates an indexed lens from index-aware getter and setter functions.
    ///
    /// # Arguments
    ///
    /// * `index` - The index this lens points at
    /// * `getter` - Reads the focus at a given index
    /// * `setter` - Replaces the focus at a given index
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::IndexedLens;
    ///
    /// let element = IndexedLens::new(
    ///     1usize,
    ///     |index: &usize, pair: &[i32; 2]| pair[*index],
    ///     |index: &usize, mut pair: [i32; 2], value| {
    ///         pair[*index] = value;
    ///         pair
    ///     },
    /// );
    ///
    /// assert_eq!(element.get(&[10, 20]), 20);
    /// assert_eq!(element.set_at(&0, [10, 20], 5), [5, 20]);
    /// ```
    #[must_use]
    pub fn new<G, St>(index: I, getter: G, setter: St) -> Self
    where
        G: Fn(&I, &S) -> A + Send + Sync + 'static,
        St: Fn(&I, S, A) -> S + Send + Sync + 'static,
    {
        let getter = Arc::new(getter);
        let setter = Arc::new(setter);
        Self::from_family(index, move |index: &I| {
            let (read_index, write_index) = (index.clone(), index.clone());
            let (getter, setter) = (Arc::clone(&getter), Arc::clone(&setter));
            Lens::new(
                move |source| getter(&read_index, source),
                move |source, value| setter(&write_index, source, value),
            )
        })
    }

    /// Creates an indexed lens from a function producing the lens for each index.
    #[must_use]
    pub fn from_family<F>(index: I, family: F) -> Self
    where
        F: Fn(&I) -> Lens<S, A> + Send + Sync + 'static,
    {
        Self {
            index,
            family: Arc::new(family),
        }
    }

    /// Returns the carried index.
    pub const fn index(&self) -> &I {
        &self.index
    }

    /// Returns the same lens pointed at another index.
    #[must_use]
    pub fn with_index(self, index: I) -> Self {
        Self { index, ..self }
    }

    /// Returns the plain lens at the carried index.
    #[must_use]
    pub fn optic(&self) -> Lens<S, A> {
        (self.family)(&self.index)
    }

    /// Gets the focus at the carried index.
    pub fn get(&self, source: &S) -> A {
        self.get_at(&self.index, source)
    }

    /// Gets the focus together with the carried index.
    pub fn get_indexed(&self, source: &S) -> (I, A) {
        (self.index.clone(), self.get(source))
    }

    /// Sets the focus at the carried index.
    pub fn set(&self, source: S, value: A) -> S {
        self.set_at(&self.index, source, value)
    }

    /// Modifies the focus at the carried index.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.modify_at(&self.index, source, function)
    }

    /// Gets the focus at an explicit index.
    pub fn get_at(&self, index: &I, source: &S) -> A {
        (self.family)(index).get(source)
    }

    /// Sets the focus at an explicit index.
    pub fn set_at(&self, index: &I, source: S, value: A) -> S {
        (self.family)(index).set(source, value)
    }

    /// Modifies the focus at an explicit index.
    pub fn modify_at<F>(&self, index: &I, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        (self.family)(index).modify(source, function)
    }

    /// Composes with another indexed optic, pairing the indices.
    #[must_use]
    pub fn then<J, B>(self, inner: impl Into<IndexedOptic<J, A, B>>) -> IndexedOptic<(I, J), S, B>
    where
        J: Clone + Send + Sync + 'static,
        B: 'static,
    {
        IndexedOptic::Lens(self).then(inner)
    }
}

// =============================================================================
// IndexedPrism
// =============================================================================

/// A Prism that carries an index.
pub struct IndexedPrism<I, S, A> {
    index: I,
    family: Family<I, Prism<S, A>>,
}

impl<I, S, A> IndexedPrism<I, S, A>
where
    I: Clone + Send + Sync + 'static,
    S: 'static,
    A: 'static,
{
    /// Creates an indexed prism from index-aware matcher and builder functions.
    ///
    /// Matched writes rebuild the source from the new focus; use
    /// [`IndexedPrism::from_family`] with [`Prism::with_replace`] to keep the
    /// rest of a container.
    #[must_use]
    pub fn new<M, B>(index: I, matcher: M, builder: B) -> Self
    where
        M: Fn(&I, &S) -> Option<A> + Send + Sync + 'static,
        B: Fn(&I, A) -> S + Send + Sync + 'static,
    {
        let matcher = Arc::new(matcher);
        let builder = Arc::new(builder);
        Self::from_family(index, move |index: &I| {
            let (match_index, build_index) = (index.clone(), index.clone());
            let (matcher, builder) = (Arc::clone(&matcher), Arc::clone(&builder));
            Prism::new(
                move |source| matcher(&match_index, source),
                move |value| builder(&build_index, value),
            )
        })
    }

    /// Creates an indexed prism from a function producing the prism for each index.
    #[must_use]
    pub fn from_family<F>(index: I, family: F) -> Self
    where
        F: Fn(&I) -> Prism<S, A> + Send + Sync + 'static,
    {
        Self {
            index,
            family: Arc::new(family),
        }
    }

    /// Returns the carried index.
    pub const fn index(&self) -> &I {
        &self.index
    }

    /// Returns the same prism pointed at another index.
    #[must_use]
    pub fn with_index(self, index: I) -> Self {
        Self { index, ..self }
    }

    /// Returns the plain prism at the carried index.
    #[must_use]
    pub fn optic(&self) -> Prism<S, A> {
        (self.family)(&self.index)
    }

    /// Attempts to get the focus at the carried index.
    pub fn get_option(&self, source: &S) -> Option<A> {
        self.get_option_at(&self.index, source)
    }

    /// Attempts to get the focus together with the carried index.
    pub fn get_option_indexed(&self, source: &S) -> Option<(I, A)> {
        self.get_option(source)
            .map(|value| (self.index.clone(), value))
    }

    /// Returns `true` if the source has a focus at the carried index.
    pub fn is_matching(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Builds a source from a focus at the carried index.
    pub fn review(&self, value: A) -> S {
        self.review_at(&self.index, value)
    }

    /// Replaces the focus at the carried index if present.
    pub fn set(&self, source: S, value: A) -> S {
        self.set_at(&self.index, source, value)
    }

    /// Modifies the focus at the carried index if present.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.modify_at(&self.index, source, function)
    }

    /// Attempts to get the focus at an explicit index.
    pub fn get_option_at(&self, index: &I, source: &S) -> Option<A> {
        (self.family)(index).get_option(source)
    }

    /// Builds a source from a focus at an explicit index.
    pub fn review_at(&self, index: &I, value: A) -> S {
        (self.family)(index).review(value)
    }

    /// Replaces the focus at an explicit index if present.
    pub fn set_at(&self, index: &I, source: S, value: A) -> S {
        (self.family)(index).set(source, value)
    }

    /// Modifies the focus at an explicit index if present.
    pub fn modify_at<F>(&self, index: &I, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        (self.family)(index).modify(source, function)
    }

    /// Composes with another indexed optic, pairing the indices.
    #[must_use]
    pub fn then<J, B>(self, inner: impl Into<IndexedOptic<J, A, B>>) -> IndexedOptic<(I, J), S, B>
    where
        J: Clone + Send + Sync + 'static,
        B: 'static,
    {
        IndexedOptic::Prism(self).then(inner)
    }
}

// =============================================================================
// IndexedOptional
// =============================================================================

/// An Optional that carries an index.
pub struct IndexedOptional<I, S, A> {
    index: I,
    family: Family<I, Optional<S, A>>,
}

impl<I, S, A> IndexedOptional<I, S, A>
where
    I: Clone + Send + Sync + 'static,
    S: 'static,
    A: 'static,
{
    /// Creates an indexed optional from index-aware getter and setter functions.
    #[must_use]
    pub fn new<G, St>(index: I, getter: G, setter: St) -> Self
    where
        G: Fn(&I, &S) -> Option<A> + Send + Sync + 'static,
        St: Fn(&I, S, A) -> S + Send + Sync + 'static,
    {
        let getter = Arc::new(getter);
        let setter = Arc::new(setter);
        Self::from_family(index, move |index: &I| {
            let (read_index, write_index) = (index.clone(), index.clone());
            let (getter, setter) = (Arc::clone(&getter), Arc::clone(&setter));
            Optional::new(
                move |source| getter(&read_index, source),
                move |source, value| setter(&write_index, source, value),
            )
        })
    }

    /// Creates an indexed optional from a function producing the optional for each index.
    #[must_use]
    pub fn from_family<F>(index: I, family: F) -> Self
    where
        F: Fn(&I) -> Optional<S, A> + Send + Sync + 'static,
    {
        Self {
            index,
            family: Arc::new(family),
        }
    }

    /// Returns the carried index.
    pub const fn index(&self) -> &I {
        &self.index
    }

    /// Returns the same optional pointed at another index.
    #[must_use]
    pub fn with_index(self, index: I) -> Self {
        Self { index, ..self }
    }

    /// Returns the plain optional at the carried index.
    #[must_use]
    pub fn optic(&self) -> Optional<S, A> {
        (self.family)(&self.index)
    }

    /// Attempts to get the focus at the carried index.
    pub fn get_option(&self, source: &S) -> Option<A> {
        self.get_option_at(&self.index, source)
    }

    /// Attempts to get the focus together with the carried index.
    pub fn get_option_indexed(&self, source: &S) -> Option<(I, A)> {
        self.get_option(source)
            .map(|value| (self.index.clone(), value))
    }

    /// Replaces the focus at the carried index if present.
    pub fn set(&self, source: S, value: A) -> S {
        self.set_at(&self.index, source, value)
    }

    /// Modifies the focus at the carried index if present.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.modify_at(&self.index, source, function)
    }

    /// Attempts to get the focus at an explicit index.
    pub fn get_option_at(&self, index: &I, source: &S) -> Option<A> {
        (self.family)(index).get_option(source)
    }

    /// Replaces the focus at an explicit index if present.
    pub fn set_at(&self, index: &I, source: S, value: A) -> S {
        (self.family)(index).set(source, value)
    }

    /// Modifies the focus at an explicit index if present.
    pub fn modify_at<F>(&self, index: &I, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        (self.family)(index).modify(source, function)
    }

    /// Composes with another indexed optic, pairing the indices.
    #[must_use]
    pub fn then<J, B>(self, inner: impl Into<IndexedOptic<J, A, B>>) -> IndexedOptic<(I, J), S, B>
    where
        J: Clone + Send + Sync + 'static,
        B: 'static,
    {
        IndexedOptic::Optional(self).then(inner)
    }
}

// =============================================================================
// IndexedTraversal
// =============================================================================

/// A Traversal that carries an index.
pub struct IndexedTraversal<I, S, A> {
    index: I,
    family: Family<I, Traversal<S, A>>,
}

impl<I, S, A> IndexedTraversal<I, S, A>
where
    I: Clone + Send + Sync + 'static,
    S: 'static,
    A: 'static,
{
    /// Creates an indexed traversal from index-aware collector and mapper functions.
    #[must_use]
    pub fn new<G, M>(index: I, get_all: G, modify_all: M) -> Self
    where
        G: Fn(&I, &S) -> Vec<A> + Send + Sync + 'static,
        M: Fn(&I, S, &mut dyn FnMut(A) -> A) -> S + Send + Sync + 'static,
    {
        let get_all = Arc::new(get_all);
        let modify_all = Arc::new(modify_all);
        Self::from_family(index, move |index: &I| {
            let (read_index, write_index) = (index.clone(), index.clone());
            let (get_all, modify_all) = (Arc::clone(&get_all), Arc::clone(&modify_all));
            Traversal::new(
                move |source| get_all(&read_index, source),
                move |source, function| modify_all(&write_index, source, function),
            )
        })
    }

    /// Creates an indexed traversal from a function producing the traversal for each index.
    #[must_use]
    pub fn from_family<F>(index: I, family: F) -> Self
    where
        F: Fn(&I) -> Traversal<S, A> + Send + Sync + 'static,
    {
        Self {
            index,
            family: Arc::new(family),
        }
    }

    /// Returns the carried index.
    pub const fn index(&self) -> &I {
        &self.index
    }

    /// Returns the same traversal pointed at another index.
    #[must_use]
    pub fn with_index(self, index: I) -> Self {
        Self { index, ..self }
    }

    /// Returns the plain traversal at the carried index.
    #[must_use]
    pub fn optic(&self) -> Traversal<S, A> {
        (self.family)(&self.index)
    }

    /// Returns every focus at the carried index.
    pub fn get_all(&self, source: &S) -> Vec<A> {
        self.get_all_at(&self.index, source)
    }

    /// Modifies every focus at the carried index.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.modify_at(&self.index, source, function)
    }

    /// Sets every focus at the carried index.
    pub fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.set_at(&self.index, source, value)
    }

    /// Returns every focus at an explicit index.
    pub fn get_all_at(&self, index: &I, source: &S) -> Vec<A> {
        (self.family)(index).get_all(source)
    }

    /// Modifies every focus at an explicit index.
    pub fn modify_at<F>(&self, index: &I, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.family)(index).modify(source, function)
    }

    /// Sets every focus at an explicit index.
    pub fn set_at(&self, index: &I, source: S, value: A) -> S
    where
        A: Clone,
    {
        (self.family)(index).set_all(source, value)
    }

    /// Composes with another indexed optic, pairing the indices.
    #[must_use]
    pub fn then<J, B>(self, inner: impl Into<IndexedOptic<J, A, B>>) -> IndexedOptic<(I, J), S, B>
    where
        J: Clone + Send + Sync + 'static,
        B: 'static,
    {
        IndexedOptic::Traversal(self).then(inner)
    }
}

// =============================================================================
// IndexedOptic
// =============================================================================

/// An indexed optic of any kind.
pub enum IndexedOptic<I, S, A> {
    /// An indexed lens.
    Lens(IndexedLens<I, S, A>),
    /// An indexed prism.
    Prism(IndexedPrism<I, S, A>),
    /// An indexed optional.
    Optional(IndexedOptional<I, S, A>),
    /// An indexed traversal.
    Traversal(IndexedTraversal<I, S, A>),
}

impl<I, S, A> IndexedOptic<I, S, A>
where
    I: Clone + Send + Sync + 'static,
    S: 'static,
    A: 'static,
{
    /// Returns the runtime kind of this optic.
    #[must_use]
    pub const fn kind(&self) -> OpticKind {
        match self {
            Self::Lens(_) => OpticKind::Lens,
            Self::Prism(_) => OpticKind::Prism,
            Self::Optional(_) => OpticKind::Optional,
            Self::Traversal(_) => OpticKind::Traversal,
        }
    }

    /// Returns the carried index.
    pub const fn index(&self) -> &I {
        match self {
            Self::Lens(lens) => lens.index(),
            Self::Prism(prism) => prism.index(),
            Self::Optional(optional) => optional.index(),
            Self::Traversal(traversal) => traversal.index(),
        }
    }

    /// Returns the same optic pointed at another index.
    #[must_use]
    pub fn with_index(self, index: I) -> Self {
        match self {
            Self::Lens(lens) => Self::Lens(lens.with_index(index)),
            Self::Prism(prism) => Self::Prism(prism.with_index(index)),
            Self::Optional(optional) => Self::Optional(optional.with_index(index)),
            Self::Traversal(traversal) => Self::Traversal(traversal.with_index(index)),
        }
    }

    /// Returns the plain optic at the carried index.
    #[must_use]
    pub fn optic(&self) -> Optic<S, A> {
        self.optic_at(self.index())
    }

    /// Returns the plain optic at an explicit index.
    #[must_use]
    pub fn optic_at(&self, index: &I) -> Optic<S, A> {
        match self {
            Self::Lens(lens) => Optic::Lens((lens.family)(index)),
            Self::Prism(prism) => Optic::Prism((prism.family)(index)),
            Self::Optional(optional) => Optic::Optional((optional.family)(index)),
            Self::Traversal(traversal) => Optic::Traversal((traversal.family)(index)),
        }
    }

    /// Returns the first focus at the carried index, if any.
    pub fn get_option(&self, source: &S) -> Option<A> {
        self.optic().get_option(source)
    }

    /// Returns the first focus at an explicit index, if any.
    pub fn get_option_at(&self, index: &I, source: &S) -> Option<A> {
        self.optic_at(index).get_option(source)
    }

    /// Returns every focus at the carried index.
    pub fn get_all(&self, source: &S) -> Vec<A> {
        self.optic().get_all(source)
    }

    /// Returns every focus at an explicit index.
    pub fn get_all_at(&self, index: &I, source: &S) -> Vec<A> {
        self.optic_at(index).get_all(source)
    }

    /// Replaces every focus at the carried index.
    pub fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.optic().set(source, value)
    }

    /// Replaces every focus at an explicit index.
    pub fn set_at(&self, index: &I, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.optic_at(index).set(source, value)
    }

    /// Modifies every focus at the carried index.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.optic().modify(source, function)
    }

    /// Modifies every focus at an explicit index.
    pub fn modify_at<F>(&self, index: &I, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.optic_at(index).modify(source, function)
    }

    /// Composes with another indexed optic, pairing the indices.
    ///
    /// The result is indexed by `(outer_index, inner_index)`.
    #[must_use]
    pub fn then<J, B>(self, inner: impl Into<IndexedOptic<J, A, B>>) -> IndexedOptic<(I, J), S, B>
    where
        J: Clone + Send + Sync + 'static,
        B: 'static,
    {
        let inner = inner.into();
        let outer_kind = self.kind();
        let inner_kind = inner.kind();
        trace!(
            outer = %outer_kind,
            inner = %inner_kind,
            result = %outer_kind.compose(inner_kind),
            "composing indexed optics"
        );
        match (self, inner) {
            (Self::Lens(outer), IndexedOptic::Lens(inner)) => {
                IndexedOptic::Lens(IndexedLens {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_lens_lens),
                })
            }
            (Self::Lens(outer), IndexedOptic::Prism(inner)) => {
                IndexedOptic::Optional(IndexedOptional {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_lens_prism),
                })
            }
            (Self::Lens(outer), IndexedOptic::Optional(inner)) => {
                IndexedOptic::Optional(IndexedOptional {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_lens_optional),
                })
            }
            (Self::Lens(outer), IndexedOptic::Traversal(inner)) => {
                IndexedOptic::Traversal(IndexedTraversal {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_lens_traversal),
                })
            }
            (Self::Prism(outer), IndexedOptic::Lens(inner)) => {
                IndexedOptic::Optional(IndexedOptional {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_prism_lens),
                })
            }
            (Self::Prism(outer), IndexedOptic::Prism(inner)) => {
                IndexedOptic::Prism(IndexedPrism {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_prism_prism),
                })
            }
            (Self::Prism(outer), IndexedOptic::Optional(inner)) => {
                IndexedOptic::Optional(IndexedOptional {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_prism_optional),
                })
            }
            (Self::Prism(outer), IndexedOptic::Traversal(inner)) => {
                IndexedOptic::Traversal(IndexedTraversal {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_prism_traversal),
                })
            }
            (Self::Optional(outer), IndexedOptic::Lens(inner)) => {
                IndexedOptic::Optional(IndexedOptional {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_optional_lens),
                })
            }
            (Self::Optional(outer), IndexedOptic::Prism(inner)) => {
                IndexedOptic::Optional(IndexedOptional {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_optional_prism),
                })
            }
            (Self::Optional(outer), IndexedOptic::Optional(inner)) => {
                IndexedOptic::Optional(IndexedOptional {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_optional_optional),
                })
            }
            (Self::Optional(outer), IndexedOptic::Traversal(inner)) => {
                IndexedOptic::Traversal(IndexedTraversal {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_optional_traversal),
                })
            }
            (Self::Traversal(outer), IndexedOptic::Lens(inner)) => {
                IndexedOptic::Traversal(IndexedTraversal {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_traversal_lens),
                })
            }
            (Self::Traversal(outer), IndexedOptic::Prism(inner)) => {
                IndexedOptic::Traversal(IndexedTraversal {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_traversal_prism),
                })
            }
            (Self::Traversal(outer), IndexedOptic::Optional(inner)) => {
                IndexedOptic::Traversal(IndexedTraversal {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_traversal_optional),
                })
            }
            (Self::Traversal(outer), IndexedOptic::Traversal(inner)) => {
                IndexedOptic::Traversal(IndexedTraversal {
                    index: (outer.index, inner.index),
                    family: pair_family(outer.family, inner.family, compose_traversal_traversal),
                })
            }
        }
    }

    /// Returns the indexed lens if this optic is one.
    #[must_use]
    pub fn into_lens(self) -> Option<IndexedLens<I, S, A>> {
        match self {
            Self::Lens(lens) => Some(lens),
            _ => None,
        }
    }

    /// Returns the indexed prism if this optic is one.
    #[must_use]
    pub fn into_prism(self) -> Option<IndexedPrism<I, S, A>> {
        match self {
            Self::Prism(prism) => Some(prism),
            _ => None,
        }
    }

    /// Returns the indexed optional if this optic is one.
    #[must_use]
    pub fn into_optional(self) -> Option<IndexedOptional<I, S, A>> {
        match self {
            Self::Optional(optional) => Some(optional),
            _ => None,
        }
    }

    /// Returns the indexed traversal if this optic is one.
    #[must_use]
    pub fn into_traversal(self) -> Option<IndexedTraversal<I, S, A>> {
        match self {
            Self::Traversal(traversal) => Some(traversal),
            _ => None,
        }
    }
}

macro_rules! indexed_impls {
    ($name:ident, $variant:ident) => {
        impl<I: Clone, S, A> Clone for $name<I, S, A> {
            fn clone(&self) -> Self {
                Self {
                    index: self.index.clone(),
                    family: Arc::clone(&self.family),
                }
            }
        }

        impl<I: std::fmt::Debug, S, A> std::fmt::Debug for $name<I, S, A> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("index", &self.index)
                    .finish_non_exhaustive()
            }
        }

        impl<I, S, A> From<$name<I, S, A>> for IndexedOptic<I, S, A> {
            fn from(optic: $name<I, S, A>) -> Self {
                Self::$variant(optic)
            }
        }
    };
}

indexed_impls!(IndexedLens, Lens);
indexed_impls!(IndexedPrism, Prism);
indexed_impls!(IndexedOptional, Optional);
indexed_impls!(IndexedTraversal, Traversal);

impl<I: Clone, S, A> Clone for IndexedOptic<I, S, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Lens(lens) => Self::Lens(lens.clone()),
            Self::Prism(prism) => Self::Prism(prism.clone()),
            Self::Optional(optional) => Self::Optional(optional.clone()),
            Self::Traversal(traversal) => Self::Traversal(traversal.clone()),
        }
    }
}

impl<I: std::fmt::Debug, S, A> std::fmt::Debug for IndexedOptic<I, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lens(lens) => std::fmt::Debug::fmt(lens, formatter),
            Self::Prism(prism) => std::fmt::Debug::fmt(prism, formatter),
            Self::Optional(optional) => std::fmt::Debug::fmt(optional, formatter),
            Self::Traversal(traversal) => std::fmt::Debug::fmt(traversal, formatter),
        }
    }
}
