//! Optional optics for focusing on a value that may or may not exist.
//!
//! An Optional combines a partial read with a conditional write: `set` and
//! `modify` only change a source whose focus is present and return every other
//! source unchanged. It is what composing a Lens with a Prism produces.
//!
//! # Laws
//!
//! Every Optional must satisfy (when the focus is present):
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if optional.get_option(&source) == Some(value) then
//!        optional.set(source.clone(), value) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.get_option(&source).is_some() then
//!        optional.get_option(&optional.set(source, value.clone())) == Some(value)
//!    ```
//!
//! And when the focus is absent:
//!
//! 3. **Absent Identity Law**: `optional.set(source.clone(), value) == source`
//!
//! # Examples
//!
//! ```
//! use kaleido::optics::Optional;
//!
//! let first = Optional::new(
//!     |values: &Vec<i32>| values.first().copied(),
//!     |mut values: Vec<i32>, value| {
//!         values[0] = value;
//!         values
//!     },
//! );
//!
//! assert_eq!(first.get_option(&vec![1, 2]), Some(1));
//! assert_eq!(first.set(vec![1, 2], 9), vec![9, 2]);
//! assert_eq!(first.set(Vec::new(), 9), Vec::<i32>::new());
//! ```

use std::sync::Arc;

use super::optic::Optic;
use super::traversal::Traversal;
use super::{Matcher, Setter};

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The focus type (if present)
pub struct Optional<S, A> {
    getter: Matcher<S, A>,
    setter: Setter<S, A>,
}

impl<S: 'static, A: 'static> Optional<S, A> {
    /// Creates a new `Optional` from a partial getter and a setter.
    ///
    /// The setter is only ever called on sources whose focus is present, so it
    /// may assume the focus exists.
    ///
    /// # Arguments
    ///
    /// * `getter` - Extracts the focus if present
    /// * `setter` - Replaces a present focus
    #[must_use]
    pub fn new<G, St>(getter: G, setter: St) -> Self
    where
        G: Fn(&S) -> Option<A> + Send + Sync + 'static,
        St: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        }
    }

    /// Attempts to get the focus.
    ///
    /// # Returns
    ///
    /// `Some(focus)` if present, `None` otherwise
    pub fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    /// Returns `true` if the focus is present.
    pub fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Replaces the focus if present; otherwise returns the source unchanged.
    pub fn set(&self, source: S, value: A) -> S {
        if self.is_present(&source) {
            (self.setter)(source, value)
        } else {
            source
        }
    }

    /// Modifies the focus if present; otherwise returns the source unchanged.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => (self.setter)(source, function(value)),
            None => source,
        }
    }

    /// Modifies the focus if present.
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the focus is present, `None` otherwise
    pub fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get_option(&source)?;
        Some((self.setter)(source, function(value)))
    }

    /// Returns `true` if the focus is present and satisfies the predicate.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_some_and(|value| predicate(&value))
    }

    /// Returns `true` if the focus is absent or satisfies the predicate.
    pub fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_none_or(|value| predicate(&value))
    }

    /// Composes this optional with any optic, dispatching on the inner optic's kind.
    #[must_use]
    pub fn then<B: 'static>(self, inner: impl Into<Optic<A, B>>) -> Optic<S, B> {
        Optic::Optional(self).then(inner)
    }

    /// Views this optional as a Traversal with zero or one focus.
    #[must_use]
    pub fn to_traversal(self) -> Traversal<S, A> {
        let Self { getter, setter } = self;
        let read = Arc::clone(&getter);
        Traversal::new(
            move |source| read(source).into_iter().collect(),
            move |source, function| match getter(&source) {
                Some(value) => setter(source, function(value)),
                None => source,
            },
        )
    }
}

/// Creates an optional from a partial getter and a setter.
///
/// Shorthand for [`Optional::new`].
#[must_use]
pub fn optional<S, A, G, St>(getter: G, setter: St) -> Optional<S, A>
where
    S: 'static,
    A: 'static,
    G: Fn(&S) -> Option<A> + Send + Sync + 'static,
    St: Fn(S, A) -> S + Send + Sync + 'static,
{
    Optional::new(getter, setter)
}

impl<S, A> Clone for Optional<S, A> {
    fn clone(&self) -> Self {
        Self {
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<S, A> std::fmt::Debug for Optional<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Optional").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Account {
        email: Option<String>,
    }

    fn email() -> Optional<Account, String> {
        Optional::new(
            |account: &Account| account.email.clone(),
            |account: Account, email| Account {
                email: Some(email),
                ..account
            },
        )
    }

    #[test]
    fn test_optional_get_option() {
        let present = Account {
            email: Some("a@b.com".to_string()),
        };
        assert_eq!(email().get_option(&present), Some("a@b.com".to_string()));
        assert_eq!(email().get_option(&Account { email: None }), None);
    }

    #[test]
    fn test_optional_set_on_absent_is_identity() {
        let absent = Account { email: None };
        assert_eq!(email().set(absent.clone(), "x@y.z".to_string()), absent);
    }

    #[test]
    fn test_optional_set_on_present_replaces() {
        let present = Account {
            email: Some("a@b.com".to_string()),
        };
        let updated = email().set(present, "c@d.com".to_string());
        assert_eq!(updated.email.as_deref(), Some("c@d.com"));
    }

    #[test]
    fn test_optional_modify_option() {
        let absent = Account { email: None };
        assert_eq!(email().modify_option(absent, |e| e.to_uppercase()), None);
    }

    #[test]
    fn test_optional_is_present_exists_for_all() {
        let present = Account {
            email: Some("a@b.com".to_string()),
        };
        let absent = Account { email: None };
        assert!(email().is_present(&present));
        assert!(email().exists(&present, |e| e.contains('@')));
        assert!(!email().exists(&absent, |_| true));
        assert!(email().for_all(&absent, |_| false));
    }

    #[test]
    fn test_optional_to_traversal() {
        let traversal = email().to_traversal();
        let absent = Account { email: None };
        assert!(traversal.get_all(&absent).is_empty());
        assert_eq!(traversal.modify(absent.clone(), |e| e + "!"), absent);
    }
}
