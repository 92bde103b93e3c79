//! Algebraic type classes used by the optics layer.
//!
//! - [`Semigroup`]: Associative binary operations (`combine`)
//! - [`Monoid`]: Semigroup with identity element (`empty`)
//!
//! ## Wrapper Types
//!
//! - [`Sum`], [`Product`]: Numeric wrappers for different monoid operations
//! - [`Max`], [`Min`]: Bounded ordering wrappers
//! - [`All`], [`Any`]: Boolean conjunction and disjunction
//! - [`Bounded`]: Trait for types with minimum and maximum values
//!
//! # Examples
//!
//! ```rust
//! use kaleido::typeclass::{Monoid, Semigroup, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Bounded, Max, Min, Product, Sum};
