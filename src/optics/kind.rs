//! The five optic kinds and the composition table over them.
//!
//! Every optic carries one of these kinds at runtime. Composing two optics
//! yields the weakest guarantee of the pair:
//!
//! ```text
//! outer\inner | Iso        Lens       Prism      Optional   Traversal
//! ------------+-------------------------------------------------------
//! Iso         | Iso        Lens       Prism      Optional   Traversal
//! Lens        | Lens       Lens       Optional   Optional   Traversal
//! Prism       | Prism      Optional   Prism      Optional   Traversal
//! Optional    | Optional   Optional   Optional   Optional   Traversal
//! Traversal   | Traversal  Traversal  Traversal  Traversal  Traversal
//! ```
//!
//! Iso is the identity of the table: it neither loses totality nor adds
//! partiality or multiplicity.

use std::fmt;

/// The runtime discriminator of an optic.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::OpticKind;
///
/// assert_eq!(OpticKind::Lens.compose(OpticKind::Prism), OpticKind::Optional);
/// assert_eq!(OpticKind::Iso.compose(OpticKind::Lens), OpticKind::Lens);
/// assert_eq!(OpticKind::Prism.compose(OpticKind::Traversal), OpticKind::Traversal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpticKind {
    /// Exactly one focus, reversible.
    Iso,
    /// Exactly one focus.
    Lens,
    /// Zero or one focus, with a total constructor.
    Prism,
    /// Zero or one focus, written only when present.
    Optional,
    /// Zero or more ordered foci.
    Traversal,
}

impl OpticKind {
    /// Every kind, strongest guarantee first.
    pub const ALL: [Self; 5] = [
        Self::Iso,
        Self::Lens,
        Self::Prism,
        Self::Optional,
        Self::Traversal,
    ];

    /// Looks up the kind produced by composing `self` (outer) with `inner`.
    #[must_use]
    pub const fn compose(self, inner: Self) -> Self {
        match (self, inner) {
            (Self::Traversal, _) | (_, Self::Traversal) => Self::Traversal,
            (Self::Iso, other) | (other, Self::Iso) => other,
            (Self::Lens, Self::Lens) => Self::Lens,
            (Self::Prism, Self::Prism) => Self::Prism,
            (Self::Lens | Self::Prism | Self::Optional, _) => Self::Optional,
        }
    }

    /// Returns `true` if every source has exactly one focus.
    #[must_use]
    pub const fn is_total(self) -> bool {
        matches!(self, Self::Iso | Self::Lens)
    }

    /// Returns `true` if a source may have more than one focus.
    #[must_use]
    pub const fn is_multi(self) -> bool {
        matches!(self, Self::Traversal)
    }

    /// Returns `true` if a focus can be built without a source.
    #[must_use]
    pub const fn is_constructible(self) -> bool {
        matches!(self, Self::Iso | Self::Prism)
    }

    /// Returns the kind's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iso => "Iso",
            Self::Lens => "Lens",
            Self::Prism => "Prism",
            Self::Optional => "Optional",
            Self::Traversal => "Traversal",
        }
    }
}

impl fmt::Display for OpticKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
