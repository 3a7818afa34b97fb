//! PEM label inspection.
//!
//! PEM text follows the format:
//!
//! ```text
//! -----BEGIN {label}-----
//! {base64 body}
//! -----END {label}-----
//! ```
//!
//! Decoding is strict RFC 7468 via `pem-rfc7468` (re-exported by `der`); the
//! body itself is decoded later by the `pkcs8`/`rsa` crates. This module only
//! looks at the label so that a key of the wrong kind (for example an
//! unencrypted private key handed to the encrypted-key loader) is reported
//! precisely instead of as a generic decode failure.

use pkcs8::der::pem::{self, PemLabel};
use pkcs8::{EncryptedPrivateKeyInfo, SubjectPublicKeyInfoRef};

use crate::core::error::{CryptoError, CryptoResult};

/// Label of a PKCS#8 password-encrypted private key.
pub const ENCRYPTED_PRIVATE_KEY_LABEL: &str = <EncryptedPrivateKeyInfo<'static>>::PEM_LABEL;

/// Label of a SubjectPublicKeyInfo public key.
pub const PUBLIC_KEY_LABEL: &str = <SubjectPublicKeyInfoRef<'static>>::PEM_LABEL;

/// Label of a PKCS#1 RSA public key.
pub const RSA_PUBLIC_KEY_LABEL: &str = <rsa::pkcs1::RsaPublicKey<'static>>::PEM_LABEL;

/// Returns the type label of the PEM document in `text`.
///
/// Surrounding whitespace is ignored. The pre- and post-encapsulation
/// boundaries must both be present and carry the same label.
///
/// # Errors
///
/// Returns `CryptoError::InvalidPem` if the encapsulation boundaries are
/// malformed or the label is empty.
pub fn parse_label(text: &str) -> CryptoResult<&str> {
    let label =
        pem::decode_label(text.trim().as_bytes()).map_err(|_| CryptoError::InvalidPem)?;

    if label.is_empty() {
        return Err(CryptoError::InvalidPem);
    }

    Ok(label)
}

/// Validates that `text` is PEM with the expected label.
///
/// # Errors
///
/// Returns `CryptoError::InvalidPem` for text that is not PEM at all and
/// `CryptoError::UnexpectedPemLabel` when the label differs.
pub fn validate_label(text: &str, expected: &'static str) -> CryptoResult<()> {
    let found = parse_label(text)?;

    if found != expected {
        return Err(CryptoError::UnexpectedPemLabel {
            expected,
            found: found.to_string(),
        });
    }

    Ok(())
}
