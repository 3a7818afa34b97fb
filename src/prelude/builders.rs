//! Builder patterns for key generation and private-key protection.
//!
//! # Security Profiles
//!
//! The PBKDF2 cost protecting the generated private key follows the
//! [`Pbkdf2Params`] profiles:
//!
//! | Profile | PBKDF2 iterations | Use Case |
//! |---------|-------------------|----------|
//! | `interactive()` | 100,000 | Keys unlocked on every login |
//! | `moderate()` | 310,000 | Balanced security (default) |
//! | `sensitive()` | 600,000 | Long-term storage |
//!
//! # Example
//!
//! ```rust,no_run
//! use player_crypto::prelude::*;
//!
//! // Use a preset profile
//! let pair = KeyPairBuilder::sensitive()
//!     .try_generate(b"password")
//!     .expect("generation should succeed");
//!
//! // Or customize parameters
//! let pair = KeyPairBuilder::new()
//!     .bits(3072)
//!     .iterations(200_000)
//!     .try_generate(b"password")
//!     .expect("generation should succeed");
//! ```

use crate::core::error::CryptoResult;
use crate::core::operations::asymmetric::{generate_key_pair, RSA_KEY_BITS};
use crate::core::operations::codec::Pbkdf2Params;
use crate::core::types::SerializedKeyPair;

/// Builder for RSA key pair generation.
///
/// Defaults to a 2048-bit modulus and the moderate PBKDF2 profile, matching
/// [`asym_gen`](crate::asym_gen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPairBuilder {
    bits: usize,
    pbkdf2: Pbkdf2Params,
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::moderate()
    }
}

impl KeyPairBuilder {
    /// Creates a new builder with default (moderate) parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self::moderate()
    }

    /// Interactive profile: 2048 bits, 100,000 PBKDF2 iterations.
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            bits: RSA_KEY_BITS,
            pbkdf2: Pbkdf2Params::interactive(),
        }
    }

    /// Moderate profile: 2048 bits, 310,000 PBKDF2 iterations.
    #[must_use]
    pub const fn moderate() -> Self {
        Self {
            bits: RSA_KEY_BITS,
            pbkdf2: Pbkdf2Params::moderate(),
        }
    }

    /// Sensitive profile: 2048 bits, 600,000 PBKDF2 iterations.
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            bits: RSA_KEY_BITS,
            pbkdf2: Pbkdf2Params::sensitive(),
        }
    }

    /// Sets the RSA modulus size in bits.
    ///
    /// Values below 2048 are rejected by [`try_generate`](Self::try_generate).
    #[must_use]
    pub const fn bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Sets the number of PBKDF2 iterations protecting the private key.
    #[must_use]
    pub const fn iterations(mut self, iterations: u32) -> Self {
        self.pbkdf2.iterations = iterations;
        self
    }

    /// Replaces the PBKDF2 parameters.
    #[must_use]
    pub const fn pbkdf2(mut self, params: Pbkdf2Params) -> Self {
        self.pbkdf2 = params;
        self
    }

    /// Returns the configured modulus size.
    #[must_use]
    pub const fn get_bits(&self) -> usize {
        self.bits
    }

    /// Returns the configured PBKDF2 parameters.
    #[must_use]
    pub const fn get_pbkdf2(&self) -> Pbkdf2Params {
        self.pbkdf2
    }

    /// Generates the key pair, encrypting the private half under `password`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeySize` for a modulus below 2048 bits,
    /// or any error from key generation and serialization.
    pub fn try_generate(self, password: &[u8]) -> CryptoResult<SerializedKeyPair> {
        generate_key_pair(self.bits, password, self.pbkdf2)
    }
}
