//! `SealedMessage` - AEAD ciphertext bound to the nonce it was sealed under.
//!
//! Format: `{base64(nonce)}.{base64(ciphertext || tag)}`

use core::fmt::{self, Display};

use base64::prelude::*;

use crate::core::error::CryptoError;
use crate::core::types::Nonce;

/// A symmetric ciphertext together with its nonce.
///
/// Produced by [`sym_seal`](crate::core::operations::symmetric::sym_seal),
/// which always draws a fresh nonce, so a caller holding a `SealedMessage`
/// never has to pick or track a nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    nonce: Nonce,
    ciphertext: String,
}

impl SealedMessage {
    pub(crate) const fn new(nonce: Nonce, ciphertext: String) -> Self {
        Self { nonce, ciphertext }
    }

    /// Returns the nonce the message was sealed under.
    #[must_use]
    pub const fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Returns the base64 ciphertext (ciphertext and tag).
    #[must_use]
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }
}

impl Display for SealedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.nonce, self.ciphertext)
    }
}

impl TryFrom<&str> for SealedMessage {
    type Error = CryptoError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let (nonce_b64, ciphertext) = text
            .trim()
            .split_once('.')
            .ok_or(CryptoError::MalformedSealedMessage)?;

        let nonce_bytes = BASE64_STANDARD.decode(nonce_b64)?;
        let nonce = Nonce::try_from(nonce_bytes.as_slice())?;

        // Reject garbage early; the AEAD layer decodes again when opening.
        BASE64_STANDARD.decode(ciphertext)?;

        Ok(Self::new(nonce, ciphertext.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let sealed = SealedMessage::new(Nonce::from([0u8; 12]), "AQID".to_string());
        assert_eq!(sealed.to_string(), "AAAAAAAAAAAAAAAA.AQID");
    }

    #[test]
    fn test_roundtrip() -> Result<(), CryptoError> {
        let sealed = SealedMessage::new(Nonce::from([9u8; 12]), "AQIDBA==".to_string());
        let parsed = SealedMessage::try_from(sealed.to_string().as_str())?;
        assert_eq!(parsed, sealed);
        assert_eq!(parsed.nonce().as_bytes(), &[9u8; 12]);
        assert_eq!(parsed.ciphertext(), "AQIDBA==");
        Ok(())
    }

    #[test]
    fn test_missing_separator() {
        let result = SealedMessage::try_from("AAAAAAAAAAAAAAAA");
        assert!(matches!(result, Err(CryptoError::MalformedSealedMessage)));

        let result = SealedMessage::try_from("");
        assert!(matches!(result, Err(CryptoError::MalformedSealedMessage)));
    }

    #[test]
    fn test_short_nonce() {
        let result = SealedMessage::try_from("MTIzNDU2Nzg=.AQID");
        assert!(matches!(result, Err(CryptoError::InvalidNonce { .. })));
    }

    #[test]
    fn test_invalid_base64() {
        let result = SealedMessage::try_from("AAAAAAAAAAAAAAAA.!!!");
        assert!(matches!(result, Err(CryptoError::Base64Decode(_))));
    }
}
