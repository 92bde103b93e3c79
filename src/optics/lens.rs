//! Lens optics for focusing on exactly one part of a structure.
//!
//! A Lens is an optic that provides total get/set access to a field within a
//! larger structure. Lenses are composable, allowing access to deeply nested
//! fields.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value.clone())) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use kaleido::optics::Lens;
//! use kaleido::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::sync::Arc;

use super::optic::Optic;
use super::optics_compose::compose_lens_lens;
use super::optional::Optional;
use super::traversal::Traversal;
use super::{Getter, Setter};

/// A Lens focuses on exactly one value within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The focus type (the focused field)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source.clone(), lens.get(&source)) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value.clone())) == value`
/// 3. **PutPut Law**: `lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)`
pub struct Lens<S, A> {
    getter: Getter<S, A>,
    setter: Setter<S, A>,
}

impl<S: 'static, A: 'static> Lens<S, A> {
    /// Creates a new `Lens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - Extracts the focused value from the source
    /// * `setter` - Creates a new source with the focused value replaced
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = Lens::new(
    ///     |point: &Point| point.x,
    ///     |point: Point, x: i32| Point { x, ..point },
    /// );
    ///
    /// assert_eq!(x_lens.get(&Point { x: 10, y: 20 }), 10);
    /// ```
    #[must_use]
    pub fn new<G, St>(getter: G, setter: St) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        St: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        }
    }

    /// Gets the focused value.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The focused value
    pub fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    /// Sets the focused value, returning a new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focus
    ///
    /// # Returns
    ///
    /// A new source with the focus replaced
    pub fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }

    /// Modifies the focused value by applying a function.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Tests the focused value against a predicate.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        predicate(&self.get(source))
    }

    /// Tests the focused value against a predicate.
    ///
    /// A lens always has exactly one focus, so this agrees with [`Lens::exists`].
    pub fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.exists(source, predicate)
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Lens<A, B>) -> Lens<S, B> {
        compose_lens_lens(self, inner)
    }

    /// Composes this lens with any optic, dispatching on the inner optic's kind.
    #[must_use]
    pub fn then<B: 'static>(self, inner: impl Into<Optic<A, B>>) -> Optic<S, B> {
        Optic::Lens(self).then(inner)
    }

    /// Views this lens as an Optional whose focus is always present.
    #[must_use]
    pub fn to_optional(self) -> Optional<S, A> {
        let Self { getter, setter } = self;
        Optional::new(move |source| Some(getter(source)), move |source, value| {
            setter(source, value)
        })
    }

    /// Views this lens as a Traversal with exactly one focus.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let traversal = lens!(Point, x).to_traversal();
    /// assert_eq!(traversal.get_all(&Point { x: 10, y: 20 }), vec![10]);
    /// ```
    #[must_use]
    pub fn to_traversal(self) -> Traversal<S, A> {
        let Self { getter, setter } = self;
        let read = Arc::clone(&getter);
        Traversal::new(
            move |source| vec![read(source)],
            move |source, function| {
                let current = getter(&source);
                setter(source, function(current))
            },
        )
    }
}

/// Creates a lens from a getter and a setter.
///
/// Shorthand for [`Lens::new`].
#[must_use]
pub fn lens<S, A, G, St>(getter: G, setter: St) -> Lens<S, A>
where
    S: 'static,
    A: 'static,
    G: Fn(&S) -> A + Send + Sync + 'static,
    St: Fn(S, A) -> S + Send + Sync + 'static,
{
    Lens::new(getter, setter)
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        Self {
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<S, A> std::fmt::Debug for Lens<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Lens").finish_non_exhaustive()
    }
}

/// Creates a lens for a struct field.
///
/// The field type must implement `Clone`, since the lens returns owned values.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use kaleido::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let y_lens = lens!(Point, y);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(y_lens.get(&point), 20);
/// assert_eq!(y_lens.set(point, 0), Point { x: 10, y: 0 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_lens_get_and_set() {
        let x_lens = Lens::new(|point: &Point| point.x, |point: Point, x| Point { x, ..point });

        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens.get(&point), 10);

        let updated = x_lens.set(point, 100);
        assert_eq!(updated, Point { x: 100, y: 20 });
    }

    #[test]
    fn test_lens_modify() {
        let x_lens = lens!(Point, x);
        let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
        assert_eq!(doubled.x, 20);
    }

    #[test]
    fn test_lens_exists_and_for_all_agree() {
        let y_lens = lens!(Point, y);
        let point = Point { x: 1, y: 2 };
        assert!(y_lens.exists(&point, |y| *y == 2));
        assert!(!y_lens.for_all(&point, |y| *y > 2));
    }

    #[test]
    fn test_lens_to_optional_is_always_present() {
        let optional = lens!(Point, x).to_optional();
        let point = Point { x: 3, y: 4 };
        assert_eq!(optional.get_option(&point), Some(3));
        assert_eq!(optional.set(point, 9).x, 9);
    }

    #[test]
    fn test_lens_to_traversal() {
        let traversal = lens!(Point, y).to_traversal();
        let point = Point { x: 1, y: 2 };
        assert_eq!(traversal.get_all(&point), vec![2]);
        assert_eq!(traversal.modify(point, |y| y + 1), Point { x: 1, y: 3 });
    }

    #[test]
    fn test_lens_clone_shares_functions() {
        let x_lens = lens!(Point, x);
        let cloned = x_lens.clone();
        let point = Point { x: 5, y: 6 };
        assert_eq!(x_lens.get(&point), cloned.get(&point));
    }
}
