//! Prism optics for focusing on one variant of a sum type.
//!
//! A Prism matches a source partially (zero or one focus) and can always build
//! a source from a focus (`review`). It is the natural optic for enum variants.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **ReviewPreview Law**: Reviewing then matching yields the original value.
//!    ```text
//!    prism.get_option(&prism.review(value.clone())) == Some(value)
//!    ```
//!
//! 2. **PreviewReview Law**: If matching succeeds, reviewing the match yields the source.
//!    ```text
//!    if prism.get_option(&source) == Some(value) then
//!        prism.review(value) == source
//!    ```
//!
//! # Writes
//!
//! `review` is the total build. `set` and `modify` only touch sources that
//! match and return every other source unchanged. Prisms over containers
//! (see [`Prism::with_replace`]) keep the rest of the container intact on
//! those writes.
//!
//! # Examples
//!
//! ```
//! use kaleido::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.get_option(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.get_option(&Shape::Square(3.0)), None);
//! assert_eq!(circle.review(10.0), Shape::Circle(10.0));
//! ```

use std::sync::Arc;

use super::optic::Optic;
use super::optics_compose::compose_prism_prism;
use super::optional::Optional;
use super::traversal::Traversal;
use super::{Builder, Matcher, Setter};

/// A Prism focuses on a value that is present only for some sources.
///
/// # Type Parameters
///
/// - `S`: The source type (typically an enum)
/// - `A`: The focus type (the payload of the matched variant)
pub struct Prism<S, A> {
    matcher: Matcher<S, A>,
    builder: Builder<S, A>,
    replacer: Setter<S, A>,
}

impl<S: 'static, A: 'static> Prism<S, A> {
    /// Creates a new `Prism` from a matcher and a builder.
    ///
    /// Writes to a matching source rebuild it from the new focus.
    ///
    /// # Arguments
    ///
    /// * `matcher` - Extracts the focus if the source matches
    /// * `builder` - Builds a source from a focus
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::Prism;
    ///
    /// let parsed = Prism::new(
    ///     |text: &String| text.parse::<i32>().ok(),
    ///     |number: i32| number.to_string(),
    /// );
    ///
    /// assert_eq!(parsed.get_option(&"42".to_string()), Some(42));
    /// assert_eq!(parsed.get_option(&"forty-two".to_string()), None);
    /// assert_eq!(parsed.review(7), "7");
    /// ```
    #[must_use]
    pub fn new<M, B>(matcher: M, builder: B) -> Self
    where
        M: Fn(&S) -> Option<A> + Send + Sync + 'static,
        B: Fn(A) -> S + Send + Sync + 'static,
    {
        let builder: Builder<S, A> = Arc::new(builder);
        let rebuild = Arc::clone(&builder);
        Self {
            matcher: Arc::new(matcher),
            builder,
            replacer: Arc::new(move |_source: S, value: A| rebuild(value)),
        }
    }

    /// Creates a new `Prism` whose matched writes keep the rest of the source.
    ///
    /// Use this for prisms into containers, where rebuilding the whole source
    /// from the focus would drop unrelated data.
    ///
    /// # Arguments
    ///
    /// * `matcher` - Extracts the focus if the source matches
    /// * `builder` - Builds a minimal source from a focus
    /// * `replacer` - Replaces the focus of a matching source
    #[must_use]
    pub fn with_replace<M, B, R>(matcher: M, builder: B, replacer: R) -> Self
    where
        M: Fn(&S) -> Option<A> + Send + Sync + 'static,
        B: Fn(A) -> S + Send + Sync + 'static,
        R: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            matcher: Arc::new(matcher),
            builder: Arc::new(builder),
            replacer: Arc::new(replacer),
        }
    }

    /// Attempts to extract the focus.
    ///
    /// # Returns
    ///
    /// `Some(focus)` if the source matches, `None` otherwise
    pub fn get_option(&self, source: &S) -> Option<A> {
        (self.matcher)(source)
    }

    /// Builds a source from a focus.
    pub fn review(&self, value: A) -> S {
        (self.builder)(value)
    }

    /// Returns `true` if the source matches this prism.
    pub fn is_matching(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Replaces the focus of a matching source; other sources are returned unchanged.
    pub fn set(&self, source: S, value: A) -> S {
        if self.is_matching(&source) {
            (self.replacer)(source, value)
        } else {
            source
        }
    }

    /// Modifies the focus of a matching source; other sources are returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle = prism!(Shape, Circle);
    /// assert_eq!(circle.modify(Shape::Circle(2.0), |r| r * 2.0), Shape::Circle(4.0));
    /// assert_eq!(circle.modify(Shape::Square(2.0), |r| r * 2.0), Shape::Square(2.0));
    /// ```
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => (self.replacer)(source, function(value)),
            None => source,
        }
    }

    /// Modifies the focus of a matching source.
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the source matches, `None` otherwise
    pub fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get_option(&source)?;
        Some((self.replacer)(source, function(value)))
    }

    /// Returns `true` if the source matches and the focus satisfies the predicate.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_some_and(|value| predicate(&value))
    }

    /// Returns `true` if the source does not match or the focus satisfies the predicate.
    pub fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_none_or(|value| predicate(&value))
    }

    /// Composes this prism with another prism.
    ///
    /// Matching short-circuits on the first miss; `review` builds inside out.
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Prism<A, B>) -> Prism<S, B> {
        compose_prism_prism(self, inner)
    }

    /// Composes this prism with any optic, dispatching on the inner optic's kind.
    #[must_use]
    pub fn then<B: 'static>(self, inner: impl Into<Optic<A, B>>) -> Optic<S, B> {
        Optic::Prism(self).then(inner)
    }

    /// Views this prism as an Optional, forgetting `review`.
    #[must_use]
    pub fn to_optional(self) -> Optional<S, A> {
        let Self {
            matcher, replacer, ..
        } = self;
        Optional::new(move |source| matcher(source), move |source, value| {
            replacer(source, value)
        })
    }

    /// Views this prism as a Traversal with zero or one focus.
    #[must_use]
    pub fn to_traversal(self) -> Traversal<S, A> {
        let Self {
            matcher, replacer, ..
        } = self;
        let read = Arc::clone(&matcher);
        Traversal::new(
            move |source| read(source).into_iter().collect(),
            move |source, function| match matcher(&source) {
                Some(value) => replacer(source, function(value)),
                None => source,
            },
        )
    }

    pub(crate) fn replace(&self, source: S, value: A) -> S {
        (self.replacer)(source, value)
    }
}

/// Creates a prism from a matcher and a builder.
///
/// Shorthand for [`Prism::new`].
#[must_use]
pub fn prism<S, A, M, B>(matcher: M, builder: B) -> Prism<S, A>
where
    S: 'static,
    A: 'static,
    M: Fn(&S) -> Option<A> + Send + Sync + 'static,
    B: Fn(A) -> S + Send + Sync + 'static,
{
    Prism::new(matcher, builder)
}

impl<S, A> Clone for Prism<S, A> {
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            builder: Arc::clone(&self.builder),
            replacer: Arc::clone(&self.replacer),
        }
    }
}

impl<S, A> std::fmt::Debug for Prism<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Prism").finish_non_exhaustive()
    }
}

/// Creates a prism for a single-field tuple variant of an enum.
///
/// The payload type must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use kaleido::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum MyOption<T> {
///     Some(T),
///     None,
/// }
///
/// let some_prism = prism!(MyOption<i32>, Some);
///
/// assert_eq!(some_prism.get_option(&MyOption::Some(42)), Some(42));
/// assert_eq!(some_prism.get_option(&MyOption::None), None);
/// assert_eq!(some_prism.review(100), MyOption::Some(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::Prism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::Prism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::Prism::new(
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}
