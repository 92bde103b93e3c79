//! Newtype wrappers that select a `Semigroup`/`Monoid` for a carrier type.
//!
//! The same underlying type can be combined in more than one lawful way:
//! integers by addition (`Sum`) or multiplication (`Product`), ordered values
//! by `Max` or `Min`, booleans by conjunction (`All`) or disjunction (`Any`).
//! These wrappers make the choice explicit, which is what `fold_map` needs.
//!
//! # The Bounded Trait
//!
//! [`Bounded`] provides minimum and maximum values for a type, which gives
//! `Max` and `Min` their identity elements.

/// Additive semigroup/monoid (identity: `A::default()`).
///
/// # Examples
///
/// ```rust
/// use kaleido::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

/// Multiplicative semigroup/monoid (identity: one).
///
/// # Examples
///
/// ```rust
/// use kaleido::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
/// assert_eq!(Product::<i32>::empty(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

/// Keeps the larger of two values (identity: [`Bounded::MIN_VALUE`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

/// Keeps the smaller of two values (identity: [`Bounded::MAX_VALUE`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

/// Boolean conjunction (identity: `true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All(pub bool);

/// Boolean disjunction (identity: `false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any(pub bool);

macro_rules! wrapper_accessors {
    ($($wrapper:ident),+) => {
        $(
            impl<A> $wrapper<A> {
                /// Wraps a value.
                #[must_use]
                pub const fn new(value: A) -> Self {
                    Self(value)
                }

                /// Unwraps the inner value.
                #[must_use]
                pub fn into_inner(self) -> A {
                    self.0
                }
            }

            impl<A> From<A> for $wrapper<A> {
                fn from(value: A) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

wrapper_accessors!(Sum, Product, Max, Min);

impl All {
    /// Unwraps the inner boolean.
    #[must_use]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl Any {
    /// Unwraps the inner boolean.
    #[must_use]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

/// Types with a smallest and a largest value.
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_impl {
    ($($numeric:ty),+) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )+
    };
}

bounded_impl!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
