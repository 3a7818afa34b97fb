//! `Verification` - three-way signature verification outcome.

use crate::core::error::CryptoError;

/// Outcome of a signature check.
///
/// The public `verify` functions collapse this to a `bool`; only
/// [`Verification::Valid`] maps to `true`.
#[derive(Debug)]
#[must_use]
pub enum Verification {
    /// The signature is cryptographically valid for the message and key.
    Valid,
    /// The signature does not match the message under the key.
    InvalidSignature,
    /// Verification could not be attempted (for example the key is malformed).
    Error(CryptoError),
}

impl Verification {
    /// Returns `true` only for [`Verification::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<Verification> for bool {
    fn from(outcome: Verification) -> Self {
        outcome.is_valid()
    }
}
