//! Extra combinators on [`Optional`].
//!
//! `or_else` and `or_else_with` collapse an optional into a total [`Lens`] by
//! supplying a fallback focus. The collapsed lens still writes through the
//! optional, so a write to an absent focus leaves the source unchanged.
//! `filter` narrows an optional to foci that satisfy a predicate, and
//! `map_or` / `map_or_else` fold the optional focus into a concrete value.

use std::sync::Arc;

use super::lens::Lens;
use super::optional::Optional;

impl<S: 'static, A: 'static> Optional<S, A> {
    /// Collapses this optional into a lens that reads `default` when the focus
    /// is absent.
    ///
    /// Writes still go through the optional, so on a source without a focus
    /// `set` is the identity and PutGet does not hold there.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::some_prism;
    ///
    /// let port = some_prism::<u16>().to_optional().or_else(8080);
    ///
    /// assert_eq!(port.get(&Some(443)), 443);
    /// assert_eq!(port.get(&None), 8080);
    /// assert_eq!(port.set(None, 9000), None);
    /// ```
    #[must_use]
    pub fn or_else(self, default: A) -> Lens<S, A>
    where
        A: Clone + Send + Sync,
    {
        self.or_else_with(move || default.clone())
    }

    /// Collapses this optional into a lens that computes a fallback when the
    /// focus is absent.
    #[must_use]
    pub fn or_else_with<F>(self, default: F) -> Lens<S, A>
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        let reader = self.clone();
        Lens::new(
            move |source| reader.get_option(source).unwrap_or_else(&default),
            move |source, value| self.set(source, value),
        )
    }

    /// Narrows this optional to foci that satisfy a predicate.
    ///
    /// A focus that fails the predicate counts as absent for reads and writes.
    ///
    /// # Example
    ///
    /// ```
    /// use kaleido::optics::some_prism;
    ///
    /// let positive = some_prism::<i32>().to_optional().filter(|n| *n > 0);
    ///
    /// assert_eq!(positive.get_option(&Some(3)), Some(3));
    /// assert_eq!(positive.get_option(&Some(-3)), None);
    /// assert_eq!(positive.set(Some(-3), 10), Some(-3));
    /// assert_eq!(positive.set(Some(3), 10), Some(10));
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        let reader = self.clone();
        Self::new(
            move |source| reader.get_option(source).filter(|value| predicate(value)),
            move |source, value| self.set(source, value),
        )
    }

    /// Maps the focus with `function`, or returns `default` when it is absent.
    pub fn map_or<B, F>(&self, source: &S, default: B, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        self.get_option(source).map_or(default, function)
    }

    /// Maps the focus with `function`, or computes a fallback when it is absent.
    pub fn map_or_else<B, D, F>(&self, source: &S, default: D, function: F) -> B
    where
        D: FnOnce() -> B,
        F: FnOnce(A) -> B,
    {
        self.get_option(source).map_or_else(default, function)
    }
}

#[cfg(test)]
mod tests {
    use crate::optics::some_prism;

    #[test]
    fn test_or_else_with_is_lazy() {
        let lens = some_prism::<String>()
            .to_optional()
            .or_else_with(|| "fallback".to_string());
        assert_eq!(lens.get(&None), "fallback");
        assert_eq!(lens.get(&Some("set".to_string())), "set");
    }

    #[test]
    fn test_or_else_write_keeps_absent_source() {
        let lens = some_prism::<i32>().to_optional().or_else(0);
        assert_eq!(lens.modify(None, |n| n + 1), None);
        assert_eq!(lens.modify(Some(1), |n| n + 1), Some(2));
    }

    #[test]
    fn test_map_or_and_map_or_else() {
        let optional = some_prism::<i32>().to_optional();
        assert_eq!(optional.map_or(&Some(2), 0, |n| n * 3), 6);
        assert_eq!(optional.map_or(&None, 0, |n| n * 3), 0);
        assert_eq!(optional.map_or_else(&None, || -1, |n| n), -1);
    }
}
