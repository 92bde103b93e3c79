//! The closed sum of the five optic kinds and generic composition over it.
//!
//! [`Optic`] lets callers compose optics without knowing their kinds up front.
//! [`Optic::then`] matches on both operands and delegates to the typed composer
//! for that pair, so the result's [`kind`](Optic::kind) always equals
//! `OpticKind::compose(outer.kind(), inner.kind())`.
//!
//! # Examples
//!
//! ```
//! use kaleido::optics::{compose, some_prism, Lens, OpticKind};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Config { timeout: Option<u32> }
//!
//! let timeout = Lens::new(
//!     |config: &Config| config.timeout,
//!     |config: Config, timeout| Config { timeout, ..config },
//! );
//!
//! let seconds = compose(timeout, some_prism::<u32>());
//! assert_eq!(seconds.kind(), OpticKind::Optional);
//! assert_eq!(seconds.get_option(&Config { timeout: Some(30) }), Some(30));
//! assert_eq!(seconds.get_option(&Config { timeout: None }), None);
//! ```

use tracing::trace;

use super::iso::Iso;
use super::kind::OpticKind;
use super::lens::Lens;
use super::optics_compose::{
    compose_iso_iso, compose_iso_lens, compose_iso_optional, compose_iso_prism,
    compose_iso_traversal, compose_lens_iso, compose_lens_lens, compose_lens_optional,
    compose_lens_prism, compose_lens_traversal, compose_optional_iso, compose_optional_lens,
    compose_optional_optional, compose_optional_prism, compose_optional_traversal,
    compose_prism_iso, compose_prism_lens, compose_prism_optional, compose_prism_prism,
    compose_prism_traversal, compose_traversal_iso, compose_traversal_lens,
    compose_traversal_optional, compose_traversal_prism, compose_traversal_traversal,
};
use super::optional::Optional;
use super::prism::Prism;
use super::traversal::Traversal;

/// An optic of any kind.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
pub enum Optic<S, A> {
    /// Exactly one reversible focus.
    Iso(Iso<S, A>),
    /// Exactly one focus.
    Lens(Lens<S, A>),
    /// Zero or one focus with a total constructor.
    Prism(Prism<S, A>),
    /// Zero or one focus.
    Optional(Optional<S, A>),
    /// Zero or more ordered foci.
    Traversal(Traversal<S, A>),
}

impl<S: 'static, A: 'static> Optic<S, A> {
    /// Returns the runtime kind of this optic.
    #[must_use]
    pub const fn kind(&self) -> OpticKind {
        match self {
            Self::Iso(_) => OpticKind::Iso,
            Self::Lens(_) => OpticKind::Lens,
            Self::Prism(_) => OpticKind::Prism,
            Self::Optional(_) => OpticKind::Optional,
            Self::Traversal(_) => OpticKind::Traversal,
        }
    }

    /// Returns the first focus, if any.
    pub fn get_option(&self, source: &S) -> Option<A> {
        match self {
            Self::Iso(iso) => Some(iso.get(source)),
            Self::Lens(lens) => Some(lens.get(source)),
            Self::Prism(prism) => prism.get_option(source),
            Self::Optional(optional) => optional.get_option(source),
            Self::Traversal(traversal) => traversal.get_option(source),
        }
    }

    /// Returns every focus, in order.
    pub fn get_all(&self, source: &S) -> Vec<A> {
        match self {
            Self::Traversal(traversal) => traversal.get_all(source),
            other => other.get_option(source).into_iter().collect(),
        }
    }

    /// Replaces every focus with `value`.
    ///
    /// Partial kinds leave a source without a focus unchanged.
    pub fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        match self {
            Self::Iso(iso) => iso.set(source, value),
            Self::Lens(lens) => lens.set(source, value),
            Self::Prism(prism) => prism.set(source, value),
            Self::Optional(optional) => optional.set(source, value),
            Self::Traversal(traversal) => traversal.set_all(source, value),
        }
    }

    /// Applies `function` to every focus.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        match self {
            Self::Iso(iso) => iso.modify(source, function),
            Self::Lens(lens) => lens.modify(source, function),
            Self::Prism(prism) => prism.modify(source, function),
            Self::Optional(optional) => optional.modify(source, function),
            Self::Traversal(traversal) => traversal.modify(source, function),
        }
    }

    /// Returns `true` if some focus satisfies the predicate.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().any(predicate)
    }

    /// Returns `true` if every focus satisfies the predicate.
    pub fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().all(predicate)
    }

    /// Composes this optic with another, dispatching on both kinds.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::{vec_each, first_lens, OpticKind};
    ///
    /// let firsts = vec_each::<(i32, char)>().then(first_lens::<i32, char>());
    /// assert_eq!(firsts.kind(), OpticKind::Traversal);
    /// assert_eq!(firsts.get_all(&vec![(1, 'a'), (2, 'b')]), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn then<B: 'static>(self, inner: impl Into<Optic<A, B>>) -> Optic<S, B> {
        let inner = inner.into();
        let outer_kind = self.kind();
        let inner_kind = inner.kind();
        trace!(
            outer = %outer_kind,
            inner = %inner_kind,
            result = %outer_kind.compose(inner_kind),
            "composing optics"
        );
        match (self, inner) {
            (Self::Iso(outer), Optic::Iso(inner)) => Optic::Iso(compose_iso_iso(outer, inner)),
            (Self::Iso(outer), Optic::Lens(inner)) => Optic::Lens(compose_iso_lens(outer, inner)),
            (Self::Iso(outer), Optic::Prism(inner)) => {
                Optic::Prism(compose_iso_prism(outer, inner))
            }
            (Self::Iso(outer), Optic::Optional(inner)) => {
                Optic::Optional(compose_iso_optional(outer, inner))
            }
            (Self::Iso(outer), Optic::Traversal(inner)) => {
                Optic::Traversal(compose_iso_traversal(outer, inner))
            }
            (Self::Lens(outer), Optic::Iso(inner)) => Optic::Lens(compose_lens_iso(outer, inner)),
            (Self::Lens(outer), Optic::Lens(inner)) => {
                Optic::Lens(compose_lens_lens(outer, inner))
            }
            (Self::Lens(outer), Optic::Prism(inner)) => {
                Optic::Optional(compose_lens_prism(outer, inner))
            }
            (Self::Lens(outer), Optic::Optional(inner)) => {
                Optic::Optional(compose_lens_optional(outer, inner))
            }
            (Self::Lens(outer), Optic::Traversal(inner)) => {
                Optic::Traversal(compose_lens_traversal(outer, inner))
            }
            (Self::Prism(outer), Optic::Iso(inner)) => {
                Optic::Prism(compose_prism_iso(outer, inner))
            }
            (Self::Prism(outer), Optic::Lens(inner)) => {
                Optic::Optional(compose_prism_lens(outer, inner))
            }
            (Self::Prism(outer), Optic::Prism(inner)) => {
                Optic::Prism(compose_prism_prism(outer, inner))
            }
            (Self::Prism(outer), Optic::Optional(inner)) => {
                Optic::Optional(compose_prism_optional(outer, inner))
            }
            (Self::Prism(outer), Optic::Traversal(inner)) => {
                Optic::Traversal(compose_prism_traversal(outer, inner))
            }
            (Self::Optional(outer), Optic::Iso(inner)) => {
                Optic::Optional(compose_optional_iso(outer, inner))
            }
            (Self::Optional(outer), Optic::Lens(inner)) => {
                Optic::Optional(compose_optional_lens(outer, inner))
            }
            (Self::Optional(outer), Optic::Prism(inner)) => {
                Optic::Optional(compose_optional_prism(outer, inner))
            }
            (Self::Optional(outer), Optic::Optional(inner)) => {
                Optic::Optional(compose_optional_optional(outer, inner))
            }
            (Self::Optional(outer), Optic::Traversal(inner)) => {
                Optic::Traversal(compose_optional_traversal(outer, inner))
            }
            (Self::Traversal(outer), Optic::Iso(inner)) => {
                Optic::Traversal(compose_traversal_iso(outer, inner))
            }
            (Self::Traversal(outer), Optic::Lens(inner)) => {
                Optic::Traversal(compose_traversal_lens(outer, inner))
            }
            (Self::Traversal(outer), Optic::Prism(inner)) => {
                Optic::Traversal(compose_traversal_prism(outer, inner))
            }
            (Self::Traversal(outer), Optic::Optional(inner)) => {
                Optic::Traversal(compose_traversal_optional(outer, inner))
            }
            (Self::Traversal(outer), Optic::Traversal(inner)) => {
                Optic::Traversal(compose_traversal_traversal(outer, inner))
            }
        }
    }

    /// Widens this optic to a Traversal.
    #[must_use]
    pub fn to_traversal(self) -> Traversal<S, A> {
        match self {
            Self::Iso(iso) => iso.to_traversal(),
            Self::Lens(lens) => lens.to_traversal(),
            Self::Prism(prism) => prism.to_traversal(),
            Self::Optional(optional) => optional.to_traversal(),
            Self::Traversal(traversal) => traversal,
        }
    }

    /// Returns the Iso if this optic is one.
    #[must_use]
    pub fn into_iso(self) -> Option<Iso<S, A>> {
        match self {
            Self::Iso(iso) => Some(iso),
            _ => None,
        }
    }

    /// Returns a Lens if this optic has exactly one focus (an Iso or a Lens).
    #[must_use]
    pub fn into_lens(self) -> Option<Lens<S, A>> {
        match self {
            Self::Iso(iso) => Some(iso.to_lens()),
            Self::Lens(lens) => Some(lens),
            _ => None,
        }
    }

    /// Returns a Prism if this optic can build its source (an Iso or a Prism).
    #[must_use]
    pub fn into_prism(self) -> Option<Prism<S, A>> {
        match self {
            Self::Iso(iso) => Some(iso.to_prism()),
            Self::Prism(prism) => Some(prism),
            _ => None,
        }
    }

    /// Returns an Optional unless this optic is a Traversal.
    #[must_use]
    pub fn into_optional(self) -> Option<Optional<S, A>> {
        match self {
            Self::Iso(iso) => Some(iso.to_optional()),
            Self::Lens(lens) => Some(lens.to_optional()),
            Self::Prism(prism) => Some(prism.to_optional()),
            Self::Optional(optional) => Some(optional),
            Self::Traversal(_) => None,
        }
    }

    /// Returns this optic as a Traversal; every kind widens to one.
    #[must_use]
    pub fn into_traversal(self) -> Option<Traversal<S, A>> {
        Some(self.to_traversal())
    }
}

/// Composes two optics of any kinds.
///
/// Equivalent to `outer.into().then(inner)`.
#[must_use]
pub fn compose<S, A, B>(outer: impl Into<Optic<S, A>>, inner: impl Into<Optic<A, B>>) -> Optic<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    outer.into().then(inner)
}

impl<S, A> Clone for Optic<S, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Iso(iso) => Self::Iso(iso.clone()),
            Self::Lens(lens) => Self::Lens(lens.clone()),
            Self::Prism(prism) => Self::Prism(prism.clone()),
            Self::Optional(optional) => Self::Optional(optional.clone()),
            Self::Traversal(traversal) => Self::Traversal(traversal.clone()),
        }
    }
}

impl<S, A> std::fmt::Debug for Optic<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iso(iso) => formatter.debug_tuple("Optic").field(iso).finish(),
            Self::Lens(lens) => formatter.debug_tuple("Optic").field(lens).finish(),
            Self::Prism(prism) => formatter.debug_tuple("Optic").field(prism).finish(),
            Self::Optional(optional) => formatter.debug_tuple("Optic").field(optional).finish(),
            Self::Traversal(traversal) => formatter.debug_tuple("Optic").field(traversal).finish(),
        }
    }
}

impl<S, A> From<Iso<S, A>> for Optic<S, A> {
    fn from(iso: Iso<S, A>) -> Self {
        Self::Iso(iso)
    }
}

impl<S, A> From<Lens<S, A>> for Optic<S, A> {
    fn from(lens: Lens<S, A>) -> Self {
        Self::Lens(lens)
    }
}

impl<S, A> From<Prism<S, A>> for Optic<S, A> {
    fn from(prism: Prism<S, A>) -> Self {
        Self::Prism(prism)
    }
}

impl<S, A> From<Optional<S, A>> for Optic<S, A> {
    fn from(optional: Optional<S, A>) -> Self {
        Self::Optional(optional)
    }
}

impl<S, A> From<Traversal<S, A>> for Optic<S, A> {
    fn from(traversal: Traversal<S, A>) -> Self {
        Self::Traversal(traversal)
    }
}
