//! Errors raised by optics whose contract says they always succeed.
//!
//! Only positional and keyed *lenses* can fail: they promise a focus that the
//! source may not have. Their Prism and Traversal counterparts never fail and
//! report absence in-band as `None` or an empty `Vec`.
//!
//! | Error | Code |
//! |-------|------|
//! | [`OpticError::OutOfBounds`] | `OPTIC_OUT_OF_BOUNDS` |
//! | [`OpticError::NotFound`] | `OPTIC_NOT_FOUND` |
//!
//! Both are programmer errors. A lens that hits one panics with the error's
//! `Display` message after logging it.

use thiserror::Error;

/// A violated "always succeeds" contract of a lens.
///
/// # Examples
///
/// ```rust
/// use kaleido::error::OpticError;
///
/// let error = OpticError::OutOfBounds { index: 5, length: 3 };
/// assert_eq!(error.code(), "OPTIC_OUT_OF_BOUNDS");
/// assert_eq!(error.to_string(), "index 5 out of bounds for sequence of length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpticError {
    /// A positional lens was used on a sequence that is too short.
    #[error("index {index} out of bounds for sequence of length {length}")]
    OutOfBounds {
        /// The requested position.
        index: usize,
        /// The length of the sequence.
        length: usize,
    },

    /// A keyed lens was used on a map that does not contain the key.
    #[error("key {key} not found in map")]
    NotFound {
        /// The `Debug` rendering of the missing key.
        key: String,
    },
}

impl OpticError {
    /// Returns the stable, machine-readable code of this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "OPTIC_OUT_OF_BOUNDS",
            Self::NotFound { .. } => "OPTIC_NOT_FOUND",
        }
    }

    /// Builds a [`OpticError::NotFound`] from any debuggable key.
    #[must_use]
    pub fn not_found<K: std::fmt::Debug>(key: &K) -> Self {
        Self::NotFound {
            key: format!("{key:?}"),
        }
    }
}

/// Reports a broken lens contract and aborts the current operation.
///
/// # Panics
///
/// Always panics with the error's `Display` message.
#[cold]
#[track_caller]
pub(crate) fn defect(error: OpticError) -> ! {
    tracing::error!(code = error.code(), %error, "optic contract violated");
    panic!("{error}")
}
