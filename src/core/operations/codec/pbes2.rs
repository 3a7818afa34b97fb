//! PBES2 protection for PKCS#8 private keys.
//!
//! Private keys are encrypted with PBKDF2-HMAC-SHA256 for key derivation and
//! AES-256-CBC for the key material, which is the strongest cipher PBES2 offers
//! and what OpenSSL-compatible tooling expects.

use pkcs8::pkcs5::pbes2;
use pkcs8::{LineEnding, PrivateKeyInfo};
use rand_core::{OsRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::error::{CryptoError, CryptoResult};
use crate::core::pem::ENCRYPTED_PRIVATE_KEY_LABEL;

/// PBKDF2 salt size in bytes.
pub const PBKDF2_SALT_SIZE: usize = 16;

/// AES-CBC initialization vector size in bytes.
pub const AES_CBC_IV_SIZE: usize = 16;

/// PBKDF2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Params {
    /// Number of iterations.
    pub iterations: u32,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self::moderate()
    }
}

impl Pbkdf2Params {
    /// Interactive profile: Fast, suitable for keys unlocked on every login.
    /// - Iterations: 100,000
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            iterations: 100_000,
        }
    }

    /// Moderate profile: Balanced security and performance.
    /// - Iterations: 310,000
    #[must_use]
    pub const fn moderate() -> Self {
        Self {
            iterations: 310_000,
        }
    }

    /// Sensitive profile: High security, slower computation.
    /// - Iterations: 600,000 (OWASP 2023 recommendation for PBKDF2-HMAC-SHA256)
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            iterations: 600_000,
        }
    }
}

/// Encrypts a DER-encoded PKCS#8 `PrivateKeyInfo` and returns PEM text.
pub(crate) fn encrypt_pkcs8_der(
    pkcs8_der: &[u8],
    password: &[u8],
    params: Pbkdf2Params,
) -> CryptoResult<Zeroizing<String>> {
    let mut salt = [0u8; PBKDF2_SALT_SIZE];
    let mut iv = [0u8; AES_CBC_IV_SIZE];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|_| CryptoError::RandomFailure)?;
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|_| CryptoError::RandomFailure)?;

    let pbes2_params = pbes2::Parameters::pbkdf2_sha256_aes256cbc(params.iterations, &salt, &iv)
        .map_err(|_| CryptoError::KeyEncode)?;

    let info = PrivateKeyInfo::try_from(pkcs8_der).map_err(|_| CryptoError::KeyEncode)?;
    let encrypted = info
        .encrypt_with_params(pbes2_params, password)
        .map_err(|_| CryptoError::KeyEncode)?;

    debug!(
        iterations = params.iterations,
        "encrypted private key with PBKDF2-SHA256/AES-256-CBC"
    );

    encrypted
        .to_pem(ENCRYPTED_PRIVATE_KEY_LABEL, LineEnding::LF)
        .map_err(|_| CryptoError::KeyEncode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles() {
        assert_eq!(Pbkdf2Params::interactive().iterations, 100_000);
        assert_eq!(Pbkdf2Params::moderate().iterations, 310_000);
        assert_eq!(Pbkdf2Params::sensitive().iterations, 600_000);
    }

    #[test]
    fn test_default_is_moderate() {
        assert_eq!(Pbkdf2Params::default(), Pbkdf2Params::moderate());
    }

    #[test]
    fn test_rejects_non_pkcs8_input() {
        let result = encrypt_pkcs8_der(b"not der", b"password", Pbkdf2Params::interactive());
        assert!(matches!(result, Err(CryptoError::KeyEncode)));
    }
}
