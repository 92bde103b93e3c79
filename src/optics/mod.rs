//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. Optics allow you to focus on specific parts of a data
//! structure, enabling type-safe reading and updating of deeply nested fields.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens
//! Iso <: Prism
//! Lens <: Optional <: Traversal
//! Prism <: Optional <: Traversal
//! Lens + Prism = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Prism`]: Focus on a variant of an enum (match/review access)
//! - [`Optional`]: Focus on a value that may or may not exist (Lens + Prism composition)
//! - [`Iso`]: Isomorphism between types (bidirectional conversion)
//! - [`Traversal`]: Focus on multiple elements (batch access and bulk operations)
//! - [`Optic`]: Any of the above, composed by runtime kind
//! - [`IndexedLens`], [`IndexedPrism`], [`IndexedOptional`], [`IndexedTraversal`]:
//!   optics that carry an index
//!
//! Every optic is `Clone + Send + Sync`; cloning one only bumps reference counts.
//!
//! # Example with Lens
//!
//! ```
//! use kaleido::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with Optional (Lens + Optional)
//!
//! ```
//! use kaleido::optics::{Lens, Optional, OpticKind};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Contact { email: Option<String> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Profile { contact: Contact }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { profile: Profile }
//!
//! let profile = Lens::new(
//!     |user: &User| user.profile.clone(),
//!     |user: User, profile| User { profile, ..user },
//! );
//! let email = Optional::new(
//!     |profile: &Profile| profile.contact.email.clone(),
//!     |_profile: Profile, email| Profile { contact: Contact { email: Some(email) } },
//! );
//!
//! let user_email = profile.then(email);
//! assert_eq!(user_email.kind(), OpticKind::Optional);
//!
//! let with_email = User { profile: Profile { contact: Contact { email: Some("a@b.com".into()) } } };
//! let without = User { profile: Profile { contact: Contact { email: None } } };
//!
//! assert_eq!(user_email.get_option(&with_email), Some("a@b.com".to_string()));
//! assert_eq!(user_email.get_option(&without), None);
//! ```
//!
//! # Composition
//!
//! `then` composes any two optics; the result's kind is the weakest guarantee
//! of the pair (see [`OpticKind::compose`]). The typed composers in
//! [`optics_compose`] do the same for a fixed pair of kinds.

use std::sync::Arc;

mod at;
mod indexed;
mod iso;
mod ixed;
mod kind;
mod lens;
mod optic;
pub mod optics_compose;
mod optional;
mod optional_ops;
mod prism;
mod standard_optics;
mod traversal;
mod traversal_ops;

pub use kind::OpticKind;

pub use lens::Lens;
pub use lens::lens;

pub use prism::Prism;
pub use prism::prism;

pub use optional::Optional;
pub use optional::optional;

pub use traversal::Traversal;
pub use traversal::traversal;

pub use iso::Iso;
pub use iso::iso;

pub use optic::Optic;
pub use optic::compose;

pub use indexed::IndexedLens;
pub use indexed::IndexedOptic;
pub use indexed::IndexedOptional;
pub use indexed::IndexedPrism;
pub use indexed::IndexedTraversal;

pub use ixed::vec_index_lens;
pub use ixed::vec_index_prism;
pub use ixed::vec_index_traversal;

pub use at::map_key_lens;
pub use at::map_key_prism;

pub use standard_optics::err_prism;
pub use standard_optics::first_lens;
pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;
pub use standard_optics::ok_prism;
pub use standard_optics::option_each;
pub use standard_optics::result_each;
pub use standard_optics::second_lens;
pub use standard_optics::some_prism;
pub use standard_optics::vec_each;

pub(crate) type Getter<S, A> = Arc<dyn Fn(&S) -> A + Send + Sync>;
pub(crate) type Setter<S, A> = Arc<dyn Fn(S, A) -> S + Send + Sync>;
pub(crate) type Matcher<S, A> = Arc<dyn Fn(&S) -> Option<A> + Send + Sync>;
pub(crate) type Builder<S, A> = Arc<dyn Fn(A) -> S + Send + Sync>;
pub(crate) type Gatherer<S, A> = Arc<dyn Fn(&S) -> Vec<A> + Send + Sync>;
pub(crate) type Mapper<S, A> = Arc<dyn Fn(S, &mut dyn FnMut(A) -> A) -> S + Send + Sync>;

static_assertions::assert_impl_all!(Lens<std::rc::Rc<u8>, std::cell::Cell<u8>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Prism<std::rc::Rc<u8>, u8>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Optional<String, u8>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Traversal<Vec<u8>, u8>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Iso<String, Vec<char>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Optic<String, u8>: Send, Sync, Clone);
static_assertions::assert_impl_all!(IndexedOptic<usize, Vec<u8>, u8>: Send, Sync, Clone);
