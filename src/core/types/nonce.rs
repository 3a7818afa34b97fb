//! `Nonce` - 96-bit AES-GCM nonce.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use rand_core::{OsRng, RngCore};

use crate::core::error::{CryptoError, CryptoResult};

/// Size of an AES-GCM nonce in bytes.
pub const NONCE_SIZE: usize = 12;

/// A 12-byte AEAD nonce.
///
/// A nonce must never be used twice with the same key. There is deliberately
/// no `Default` implementation: every nonce is either generated with
/// [`Nonce::generate`] or supplied explicitly by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Creates a nonce from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh nonce from the operating system RNG.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::RandomFailure` if the RNG is unavailable.
    pub fn generate() -> CryptoResult<Self> {
        let mut bytes = [0u8; NONCE_SIZE];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| CryptoError::RandomFailure)?;
        Ok(Self(bytes))
    }

    /// Returns the raw nonce bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; NONCE_SIZE] = bytes.try_into().map_err(|_| CryptoError::InvalidNonce {
            expected: NONCE_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64_STANDARD.encode(self.0))
    }
}

impl Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", hex::encode(self.0))
    }
}
