//! Iso optics for lossless, reversible conversions.
//!
//! An Iso (isomorphism) is an optic that represents a bidirectional conversion
//! between two types where no information is lost. It is the strongest optic:
//! it can stand in for a Lens, a Prism, an Optional or a Traversal.
//!
//! # Laws
//!
//! Every Iso must satisfy two laws:
//!
//! 1. **`GetReverseGet` Law**: Converting forward then backward yields the original.
//!    ```text
//!    iso.reverse_get(iso.get(&source)) == source
//!    ```
//!
//! 2. **`ReverseGetGet` Law**: Converting backward then forward yields the original.
//!    ```text
//!    iso.get(&iso.reverse_get(value.clone())) == value
//!    ```
//!
//! # Examples
//!
//! ```
//! use kaleido::optics::Iso;
//!
//! let chars = Iso::new(
//!     |text: &String| text.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>(),
//! );
//!
//! let original = "hello".to_string();
//! let split = chars.get(&original);
//! assert_eq!(split, vec!['h', 'e', 'l', 'l', 'o']);
//! assert_eq!(chars.reverse_get(split), original);
//! ```

use std::sync::Arc;

use super::lens::Lens;
use super::optic::Optic;
use super::optics_compose::compose_iso_iso;
use super::optional::Optional;
use super::prism::Prism;
use super::traversal::Traversal;
use super::{Builder, Getter};

/// An Iso converts between two types without losing information.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
///
/// # Laws
///
/// 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(&source)) == source`
/// 2. **`ReverseGetGet` Law**: `iso.get(&iso.reverse_get(value.clone())) == value`
pub struct Iso<S, A> {
    forward: Getter<S, A>,
    backward: Builder<S, A>,
}

impl<S: 'static, A: 'static> Iso<S, A> {
    /// Creates a new `Iso` from a pair of mutually inverse functions.
    ///
    /// # Arguments
    ///
    /// * `forward` - Converts a source into the target
    /// * `backward` - Converts a target back into the source
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::Iso;
    ///
    /// let celsius = Iso::new(
    ///     |kelvin: &f64| kelvin - 273.15,
    ///     |celsius: f64| celsius + 273.15,
    /// );
    ///
    /// assert!((celsius.get(&273.15) - 0.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn new<F, B>(forward: F, backward: B) -> Self
    where
        F: Fn(&S) -> A + Send + Sync + 'static,
        B: Fn(A) -> S + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            backward: Arc::new(backward),
        }
    }

    /// Converts from the source type to the target type.
    ///
    /// # Arguments
    ///
    /// * `source` - The source value to convert
    ///
    /// # Returns
    ///
    /// The converted target value
    pub fn get(&self, source: &S) -> A {
        (self.forward)(source)
    }

    /// Converts from the target type back to the source type.
    ///
    /// # Arguments
    ///
    /// * `value` - The target value to convert back
    ///
    /// # Returns
    ///
    /// The converted source value
    pub fn reverse_get(&self, value: A) -> S {
        (self.backward)(value)
    }

    /// Replaces the focus. The old source carries no extra information, so
    /// this is `reverse_get(value)`.
    pub fn set(&self, _source: S, value: A) -> S {
        self.reverse_get(value)
    }

    /// Converts, applies a function, and converts back.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(&source)))
    }

    /// Tests the converted value against a predicate.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        predicate(&self.get(source))
    }

    /// Tests the converted value against a predicate; same as [`Iso::exists`].
    pub fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.exists(source, predicate)
    }

    /// Swaps the two directions of this iso.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::iso;
    ///
    /// let to_string = iso!(|n: &u8| n.to_string(), |s: String| s.parse().unwrap_or_default());
    /// let parse = to_string.reverse();
    ///
    /// assert_eq!(parse.get(&"12".to_string()), 12);
    /// ```
    #[must_use]
    pub fn reverse(self) -> Iso<A, S>
    where
        A: Clone,
    {
        let Self { forward, backward } = self;
        Iso::new(move |value: &A| backward(value.clone()), move |source: S| {
            forward(&source)
        })
    }

    /// Composes this iso with another iso.
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Iso<A, B>) -> Iso<S, B> {
        compose_iso_iso(self, inner)
    }

    /// Composes this iso with any optic; the result has the inner optic's kind.
    #[must_use]
    pub fn then<B: 'static>(self, inner: impl Into<Optic<A, B>>) -> Optic<S, B> {
        Optic::Iso(self).then(inner)
    }

    /// Views this iso as a Lens.
    #[must_use]
    pub fn to_lens(self) -> Lens<S, A> {
        let Self { forward, backward } = self;
        Lens::new(move |source| forward(source), move |_source, value| {
            backward(value)
        })
    }

    /// Views this iso as a Prism that always matches.
    #[must_use]
    pub fn to_prism(self) -> Prism<S, A> {
        let Self { forward, backward } = self;
        Prism::new(move |source| Some(forward(source)), move |value| {
            backward(value)
        })
    }

    /// Views this iso as an Optional that is always present.
    #[must_use]
    pub fn to_optional(self) -> Optional<S, A> {
        self.to_lens().to_optional()
    }

    /// Views this iso as a Traversal with exactly one focus.
    #[must_use]
    pub fn to_traversal(self) -> Traversal<S, A> {
        self.to_lens().to_traversal()
    }
}

/// Creates an iso from a pair of mutually inverse functions.
///
/// Shorthand for [`Iso::new`].
#[must_use]
pub fn iso<S, A, F, B>(forward: F, backward: B) -> Iso<S, A>
where
    S: 'static,
    A: 'static,
    F: Fn(&S) -> A + Send + Sync + 'static,
    B: Fn(A) -> S + Send + Sync + 'static,
{
    Iso::new(forward, backward)
}

impl<S, A> Clone for Iso<S, A> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            backward: Arc::clone(&self.backward),
        }
    }
}

impl<S, A> std::fmt::Debug for Iso<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Iso").finish_non_exhaustive()
    }
}

/// Creates an Iso from forward and backward functions.
///
/// # Syntax
///
/// ```text
/// iso!(forward_function, backward_function)
/// ```
///
/// # Example
///
/// ```
/// use kaleido::iso;
///
/// let swap = iso!(
///     |pair: &(i32, String)| (pair.1.clone(), pair.0),
///     |(text, number): (String, i32)| (number, text)
/// );
///
/// let tuple = (42, "hello".to_string());
/// let swapped = swap.get(&tuple);
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap.reverse_get(swapped), tuple);
/// ```
#[macro_export]
macro_rules! iso {
    ($forward:expr, $backward:expr) => {
        $crate::optics::Iso::new($forward, $backward)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars() -> Iso<String, Vec<char>> {
        Iso::new(
            |text: &String| text.chars().collect(),
            |chars: Vec<char>| chars.into_iter().collect(),
        )
    }

    #[test]
    fn test_iso_get_and_reverse_get() {
        let original = "hello".to_string();
        let split = chars().get(&original);
        assert_eq!(split, vec!['h', 'e', 'l', 'l', 'o']);
        assert_eq!(chars().reverse_get(split), original);
    }

    #[test]
    fn test_iso_modify() {
        let reversed = chars().modify("abc".to_string(), |mut chars| {
            chars.reverse();
            chars
        });
        assert_eq!(reversed, "cba");
    }

    #[test]
    fn test_iso_reverse_swaps_directions() {
        let joined = chars().reverse();
        assert_eq!(joined.get(&vec!['h', 'i']), "hi");
        assert_eq!(joined.reverse_get("yo".to_string()), vec!['y', 'o']);
    }

    #[test]
    fn test_iso_compose() {
        let length = Iso::new(|chars: &Vec<char>| chars.len(), |len: usize| vec!['x'; len]);
        let composed = chars().compose(length);
        assert_eq!(composed.get(&"four".to_string()), 4);
        assert_eq!(composed.reverse_get(2), "xx");
    }

    #[test]
    fn test_iso_conversions_preserve_behavior() {
        let text = "ab".to_string();
        assert_eq!(chars().to_lens().get(&text), vec!['a', 'b']);
        assert_eq!(chars().to_prism().get_option(&text), Some(vec!['a', 'b']));
        assert_eq!(chars().to_prism().review(vec!['z']), "z");
        assert!(chars().to_optional().is_present(&text));
        assert_eq!(chars().to_traversal().length(&text), 1);
    }
}
