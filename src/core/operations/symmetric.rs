//! Authenticated symmetric encryption (AES-128-GCM).
//!
//! Values are encrypted as their text form: `sym_encrypt(key, &42, nonce)`
//! encrypts the two bytes `"42"`, and decryption returns text. No associated
//! data is used. Ciphertexts carry the 16-byte GCM tag and are exchanged as
//! standard base64.
//!
//! Two styles are offered:
//!
//! - [`sym_encrypt`] / [`sym_decrypt`] take an explicit nonce. The caller is
//!   responsible for never reusing a nonce under the same key.
//! - [`sym_seal`] / [`sym_open`] draw a fresh nonce per message and return it
//!   inside a [`SealedMessage`].
//!
//! # Example
//!
//! ```rust
//! use player_crypto::{sym_decrypt, sym_encrypt, sym_gen};
//!
//! let (key, nonce) = sym_gen().expect("rng available");
//! let key = key.to_string();
//!
//! let ciphertext = sym_encrypt(&key, &42, &nonce).expect("encrypt");
//! let plaintext = sym_decrypt(&key, &ciphertext, &nonce).expect("decrypt");
//! assert_eq!(plaintext, "42");
//! ```

use core::fmt::Display;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::Aes128Gcm;
use base64::prelude::*;
use rand_core::{OsRng, RngCore};

use crate::core::error::{CryptoError, CryptoResult};
use crate::core::types::{Nonce, SealedMessage, SymmetricKey, SYMMETRIC_KEY_SIZE};

/// Size of the GCM authentication tag appended to every ciphertext.
pub const TAG_SIZE: usize = 16;

/// Generates a fresh random key and a fresh random nonce.
///
/// # Errors
///
/// Returns `CryptoError::RandomFailure` if the OS RNG is unavailable.
pub fn sym_gen() -> CryptoResult<(SymmetricKey, Nonce)> {
    let mut key = [0u8; SYMMETRIC_KEY_SIZE];
    OsRng
        .try_fill_bytes(&mut key)
        .map_err(|_| CryptoError::RandomFailure)?;

    Ok((SymmetricKey::new(key), Nonce::generate()?))
}

/// Encrypts the text form of `value` under a base64 key and explicit nonce.
///
/// Returns base64 of ciphertext || tag.
///
/// # Errors
///
/// Returns `CryptoError::Base64Decode` or `CryptoError::InvalidKey` if the key
/// text does not decode to 16 bytes.
pub fn sym_encrypt<T: Display + ?Sized>(
    key: &str,
    value: &T,
    nonce: &Nonce,
) -> CryptoResult<String> {
    let key = SymmetricKey::try_from(key)?;
    let plaintext = value.to_string();

    let ciphertext = seal_bytes(&key, nonce, plaintext.as_bytes())?;
    Ok(BASE64_STANDARD.encode(ciphertext))
}

/// Decrypts a base64 ciphertext produced by [`sym_encrypt`].
///
/// # Errors
///
/// Returns `CryptoError::AuthenticationFailed` if the tag does not verify,
/// which covers tampering as well as a wrong key or nonce. Malformed key or
/// ciphertext encodings and non-UTF-8 plaintext are also errors.
pub fn sym_decrypt(key: &str, ciphertext: &str, nonce: &Nonce) -> CryptoResult<String> {
    let key = SymmetricKey::try_from(key)?;
    let ciphertext = BASE64_STANDARD.decode(ciphertext.trim())?;

    let plaintext = open_bytes(&key, nonce, &ciphertext)?;
    Ok(String::from_utf8(plaintext)?)
}

/// Encrypts the text form of `value` under a freshly generated nonce.
///
/// # Errors
///
/// Same as [`sym_encrypt`], plus `CryptoError::RandomFailure`.
pub fn sym_seal<T: Display + ?Sized>(key: &str, value: &T) -> CryptoResult<SealedMessage> {
    let nonce = Nonce::generate()?;
    let ciphertext = sym_encrypt(key, value, &nonce)?;
    Ok(SealedMessage::new(nonce, ciphertext))
}

/// Decrypts a [`SealedMessage`] with the nonce it carries.
///
/// # Errors
///
/// Same as [`sym_decrypt`].
pub fn sym_open(key: &str, sealed: &SealedMessage) -> CryptoResult<String> {
    sym_decrypt(key, sealed.ciphertext(), sealed.nonce())
}

/// AES-128-GCM encryption of raw bytes with no associated data.
///
/// # Errors
///
/// Returns `CryptoError::EncryptionFailed` if the plaintext exceeds the GCM
/// length limit.
pub fn seal_bytes(key: &SymmetricKey, nonce: &Nonce, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = Aes128Gcm::new(key.as_bytes().into());
    cipher
        .encrypt(aes_gcm::Nonce::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)
}

/// AES-128-GCM decryption of raw bytes with no associated data.
///
/// # Errors
///
/// Returns `CryptoError::AuthenticationFailed` if the tag does not verify.
pub fn open_bytes(key: &SymmetricKey, nonce: &Nonce, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
    if ciphertext.len() < TAG_SIZE {
        return Err(CryptoError::AuthenticationFailed);
    }

    let cipher = Aes128Gcm::new(key.as_bytes().into());
    cipher
        .decrypt(aes_gcm::Nonce::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> CryptoResult<(String, Nonce)> {
        let (key, nonce) = sym_gen()?;
        Ok((key.to_string(), nonce))
    }

    #[test]
    fn test_roundtrip_text() -> CryptoResult<()> {
        let (key, nonce) = fresh()?;
        let ciphertext = sym_encrypt(&key, "attack at dawn", &nonce)?;
        assert_eq!(sym_decrypt(&key, &ciphertext, &nonce)?, "attack at dawn");
        Ok(())
    }

    #[test]
    fn test_integer_is_encrypted_as_text() -> CryptoResult<()> {
        let (key, nonce) = fresh()?;
        let ciphertext = sym_encrypt(&key, &42, &nonce)?;

        // "42" is two bytes, plus the tag
        let raw = BASE64_STANDARD.decode(&ciphertext)?;
        assert_eq!(raw.len(), 2 + TAG_SIZE);

        assert_eq!(sym_decrypt(&key, &ciphertext, &nonce)?, "42");
        Ok(())
    }

    #[test]
    fn test_empty_plaintext() -> CryptoResult<()> {
        let (key, nonce) = fresh()?;
        let ciphertext = sym_encrypt(&key, "", &nonce)?;
        assert_eq!(sym_decrypt(&key, &ciphertext, &nonce)?, "");
        Ok(())
    }

    #[test]
    fn test_sym_gen_is_random() -> CryptoResult<()> {
        let (k1, n1) = sym_gen()?;
        let (k2, n2) = sym_gen()?;
        assert_ne!(k1, k2);
        assert_ne!(n1, n2);
        Ok(())
    }

    #[test]
    fn test_wrong_key_fails() -> CryptoResult<()> {
        let (key, nonce) = fresh()?;
        let (other_key, _) = fresh()?;
        let ciphertext = sym_encrypt(&key, "secret", &nonce)?;

        let result = sym_decrypt(&other_key, &ciphertext, &nonce);
        assert!(matches!(result, Err(CryptoError::AuthenticationFailed)));
        Ok(())
    }

    #[test]
    fn test_wrong_nonce_fails() -> CryptoResult<()> {
        let (key, nonce) = fresh()?;
        let other_nonce = Nonce::generate()?;
        let ciphertext = sym_encrypt(&key, "secret", &nonce)?;

        let result = sym_decrypt(&key, &ciphertext, &other_nonce);
        assert!(matches!(result, Err(CryptoError::AuthenticationFailed)));
        Ok(())
    }

    #[test]
    fn test_tampered_ciphertext_fails() -> CryptoResult<()> {
        let (key, nonce) = fresh()?;
        let ciphertext = sym_encrypt(&key, "secret", &nonce)?;

        let mut raw = BASE64_STANDARD.decode(&ciphertext)?;
        raw[0] ^= 0x01;
        let tampered = BASE64_STANDARD.encode(raw);

        let result = sym_decrypt(&key, &tampered, &nonce);
        assert!(matches!(result, Err(CryptoError::AuthenticationFailed)));
        Ok(())
    }

    #[test]
    fn test_truncated_ciphertext_fails() -> CryptoResult<()> {
        let (key, nonce) = fresh()?;
        let result = sym_decrypt(&key, "AQID", &nonce);
        assert!(matches!(result, Err(CryptoError::AuthenticationFailed)));
        Ok(())
    }

    #[test]
    fn test_malformed_key_fails() -> CryptoResult<()> {
        let nonce = Nonce::generate()?;
        let result = sym_encrypt("not base64!", "data", &nonce);
        assert!(matches!(result, Err(CryptoError::Base64Decode(_))));

        let result = sym_encrypt("MTIzNDU2Nzg=", "data", &nonce);
        assert!(matches!(result, Err(CryptoError::InvalidKey)));
        Ok(())
    }

    #[test]
    fn test_non_utf8_plaintext_fails() -> CryptoResult<()> {
        let (key, nonce) = sym_gen()?;
        let ciphertext = BASE64_STANDARD.encode(seal_bytes(&key, &nonce, &[0xff, 0xfe])?);

        let result = sym_decrypt(&key.to_string(), &ciphertext, &nonce);
        assert!(matches!(result, Err(CryptoError::InvalidUtf8(_))));
        Ok(())
    }

    #[test]
    fn test_seal_open_roundtrip() -> CryptoResult<()> {
        let (key, _) = fresh()?;
        let sealed = sym_seal(&key, "move e2e4")?;
        assert_eq!(sym_open(&key, &sealed)?, "move e2e4");
        Ok(())
    }

    #[test]
    fn test_seal_uses_fresh_nonce() -> CryptoResult<()> {
        let (key, _) = fresh()?;
        let a = sym_seal(&key, "same")?;
        let b = sym_seal(&key, "same")?;
        assert_ne!(a.nonce(), b.nonce());
        assert_ne!(a.ciphertext(), b.ciphertext());
        Ok(())
    }

    #[test]
    fn test_sealed_text_roundtrip() -> CryptoResult<()> {
        let (key, _) = fresh()?;
        let sealed = sym_seal(&key, &1337)?;
        let parsed = SealedMessage::try_from(sealed.to_string().as_str())?;
        assert_eq!(sym_open(&key, &parsed)?, "1337");
        Ok(())
    }
}
