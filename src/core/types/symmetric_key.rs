//! `SymmetricKey` - AES-128-GCM key with base64 text form.
//!
//! Format: standard base64 (with padding) of the 16 raw key bytes.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use zeroize::Zeroize;

use crate::core::error::CryptoError;

/// Size of an AES-128 key in bytes.
pub const SYMMETRIC_KEY_SIZE: usize = 16;

/// A 128-bit symmetric key.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use player_crypto::core::types::SymmetricKey;
///
/// let key = SymmetricKey::from([0x2au8; 16]);
///
/// // Serialize to base64
/// let text = key.to_string();
/// assert_eq!(text, "KioqKioqKioqKioqKioqKg==");
///
/// // Parse from base64
/// let parsed = SymmetricKey::try_from(text.as_str());
/// assert!(parsed.is_ok());
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SymmetricKey {
    key: [u8; SYMMETRIC_KEY_SIZE],
}

impl SymmetricKey {
    /// Creates a new `SymmetricKey` from raw key bytes.
    #[must_use]
    pub const fn new(key: [u8; SYMMETRIC_KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SYMMETRIC_KEY_SIZE] {
        &self.key
    }
}

impl From<[u8; SYMMETRIC_KEY_SIZE]> for SymmetricKey {
    fn from(key: [u8; SYMMETRIC_KEY_SIZE]) -> Self {
        Self::new(key)
    }
}

impl AsRef<[u8]> for SymmetricKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl Display for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64_STANDARD.encode(self.key))
    }
}

impl Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl TryFrom<&str> for SymmetricKey {
    type Error = CryptoError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let mut key_bytes = BASE64_STANDARD.decode(encoded.trim())?;

        if key_bytes.len() != SYMMETRIC_KEY_SIZE {
            key_bytes.zeroize();
            return Err(CryptoError::InvalidKey);
        }

        let mut key = [0u8; SYMMETRIC_KEY_SIZE];
        key.copy_from_slice(&key_bytes);
        key_bytes.zeroize();

        Ok(Self::new(key))
    }
}

impl TryFrom<String> for SymmetricKey {
    type Error = CryptoError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for SymmetricKey {}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const TEST_KEY_B64: &str = "AAECAwQFBgcICQoLDA0ODw==";

    #[test]
    fn test_to_string() {
        let key = SymmetricKey::from(TEST_KEY);
        assert_eq!(key.to_string(), TEST_KEY_B64);
    }

    #[test]
    fn test_try_from_str() -> Result<(), CryptoError> {
        let key = SymmetricKey::try_from(TEST_KEY_B64)?;
        assert_eq!(key.as_bytes(), &TEST_KEY);
        Ok(())
    }

    #[test]
    fn test_try_from_str_trims_whitespace() -> Result<(), CryptoError> {
        let key = SymmetricKey::try_from(format!("{TEST_KEY_B64}\n"))?;
        assert_eq!(key.as_bytes(), &TEST_KEY);
        Ok(())
    }

    #[test]
    fn test_roundtrip() -> Result<(), CryptoError> {
        let original = SymmetricKey::from(TEST_KEY);
        let parsed = SymmetricKey::try_from(original.to_string())?;
        assert_eq!(original, parsed);
        Ok(())
    }

    #[test]
    fn test_invalid_key_length() {
        // 32 bytes: an AES-256 key is not accepted
        let result = SymmetricKey::try_from("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=");
        assert!(matches!(result, Err(CryptoError::InvalidKey)));

        // 8 bytes
        let result = SymmetricKey::try_from("MTIzNDU2Nzg=");
        assert!(matches!(result, Err(CryptoError::InvalidKey)));
    }

    #[test]
    fn test_invalid_base64() {
        let result = SymmetricKey::try_from("!!!invalid!!!");
        assert!(matches!(result, Err(CryptoError::Base64Decode(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = SymmetricKey::from(TEST_KEY);
        let debug_str = format!("{key:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains(TEST_KEY_B64));
    }

    #[test]
    fn test_equality() {
        let a = SymmetricKey::from(TEST_KEY);
        let b = SymmetricKey::from(TEST_KEY);
        assert_eq!(a, b);

        let c = SymmetricKey::from([0u8; 16]);
        assert_ne!(a, c);
    }
}
