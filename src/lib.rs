//! # kaleido
//!
//! Composable optics for reading and immutably updating values nested inside
//! larger structures.
//!
//! ## Overview
//!
//! - **Optics**: Lens, Prism, Optional, Traversal and Iso, built from plain
//!   getter/setter style functions
//! - **Composition**: a closed algebra over the five optic kinds; composing two
//!   optics always yields the weakest guarantee of the pair
//! - **Traversal operations**: filter, slice, sort, dedupe and fold over
//!   multi-focus optics, all of which survive further composition
//! - **Indexed optics**: optics that carry an index and pair indices on composition
//! - **Type Classes**: `Semigroup` and `Monoid`, used by `fold_map`
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup`, `Monoid` and the numeric wrappers
//! - `optics`: the optics themselves (implies `typeclass`)
//! - `serde`: serialization of [`optics::OpticKind`] and the monoid wrappers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kaleido::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Profile { nickname: Option<String> }
//!
//! let nickname = lens(
//!     |profile: &Profile| profile.nickname.clone(),
//!     |profile: Profile, nickname| Profile { nickname, ..profile },
//! )
//! .then(some_prism::<String>());
//!
//! assert_eq!(nickname.kind(), OpticKind::Optional);
//!
//! let profile = Profile { nickname: Some("kal".to_string()) };
//! assert_eq!(nickname.get_option(&profile), Some("kal".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kaleido::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::OpticError;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;
