//! RSA key generation and RSA-OAEP encryption.
//!
//! Parameters:
//!   Modulus: 2048 bits (minimum accepted), public exponent 65537
//!   Padding: OAEP, SHA-256 digest, MGF1-SHA-256, empty label
//!
//! Plaintexts are checked against the OAEP bound (`k - 2*hLen - 2` bytes,
//! 190 for a 2048-bit key) before encryption so an oversized message is
//! reported as `CryptoError::MessageTooLong` rather than a generic failure.

use core::fmt::Display;
use std::time::Instant;

use rand_core::OsRng;
use rsa::traits::{Decryptor, PublicKeyParts, RandomizedEncryptor};
use rsa::{oaep, BigUint, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::debug;

use crate::core::error::{CryptoError, CryptoResult};
use crate::core::operations::codec::{
    load_private_key, load_public_key, serialize_private_key_with, serialize_public_key,
    Pbkdf2Params,
};
use crate::core::operations::hash::DIGEST_SIZE;
use crate::core::types::SerializedKeyPair;

/// Default and minimum RSA modulus size in bits.
pub const RSA_KEY_BITS: usize = 2048;

/// RSA public exponent (F4).
pub const RSA_PUBLIC_EXPONENT: u32 = 65_537;

/// Generates a 2048-bit key pair and serializes both halves.
///
/// The private half is encrypted under `password` with the default PBKDF2
/// cost. Key generation is CPU-bound and can take a noticeable, variable
/// amount of time.
///
/// # Errors
///
/// Returns `CryptoError::KeyGeneration`, `CryptoError::KeyEncode` or
/// `CryptoError::RandomFailure`.
pub fn asym_gen(password: &[u8]) -> CryptoResult<SerializedKeyPair> {
    generate_key_pair(RSA_KEY_BITS, password, Pbkdf2Params::default())
}

/// Generates a key pair of `bits` and serializes both halves.
///
/// # Errors
///
/// Returns `CryptoError::InvalidKeySize` if `bits` is below [`RSA_KEY_BITS`],
/// otherwise the same errors as [`asym_gen`].
pub fn generate_key_pair(
    bits: usize,
    password: &[u8],
    params: Pbkdf2Params,
) -> CryptoResult<SerializedKeyPair> {
    let private_key = generate_private_key(bits)?;

    Ok(SerializedKeyPair {
        private_key: serialize_private_key_with(&private_key, password, params)?,
        public_key: serialize_public_key(&private_key.to_public_key())?,
    })
}

/// Generates an unserialized RSA private key with exponent 65537.
///
/// # Errors
///
/// Returns `CryptoError::InvalidKeySize` for `bits < 2048` and
/// `CryptoError::KeyGeneration` if prime generation fails.
pub fn generate_private_key(bits: usize) -> CryptoResult<RsaPrivateKey> {
    if bits < RSA_KEY_BITS {
        return Err(CryptoError::InvalidKeySize(bits));
    }

    let started = Instant::now();
    let exponent = BigUint::from_bytes_be(&RSA_PUBLIC_EXPONENT.to_be_bytes());
    let key = RsaPrivateKey::new_with_exp(&mut OsRng, bits, &exponent)
        .map_err(|_| CryptoError::KeyGeneration)?;

    debug!(
        bits,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generated RSA key pair"
    );
    Ok(key)
}

/// Largest plaintext, in bytes, that RSA-OAEP-SHA256 accepts for `key`.
#[must_use]
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(2 * DIGEST_SIZE + 2)
}

/// Encrypts the text form of `value` to the PEM public key.
///
/// The output is modulus-sized (256 bytes for 2048-bit keys) and differs on
/// every call.
///
/// # Errors
///
/// - key parsing errors from [`load_public_key`]
/// - `CryptoError::MessageTooLong` if the UTF-8 text exceeds
///   [`max_plaintext_len`]
/// - `CryptoError::EncryptionFailed` if the primitive fails
pub fn asym_encrypt<T: Display + ?Sized>(public_key: &str, value: &T) -> CryptoResult<Vec<u8>> {
    let public_key = load_public_key(public_key)?;
    oaep_encrypt(&public_key, value.to_string().as_bytes())
}

/// Decrypts an RSA-OAEP ciphertext with a password-protected PEM private key.
///
/// # Errors
///
/// - key parsing errors from [`load_private_key`]
/// - `CryptoError::DecryptionFailed` for invalid padding or a ciphertext made
///   for another key
pub fn asym_decrypt(
    private_key: &str,
    password: &[u8],
    ciphertext: &[u8],
) -> CryptoResult<Vec<u8>> {
    let private_key = load_private_key(private_key, password)?;
    oaep_decrypt(&private_key, ciphertext)
}

/// RSA-OAEP-SHA256 encryption with an already parsed key.
///
/// # Errors
///
/// Returns `CryptoError::MessageTooLong` or `CryptoError::EncryptionFailed`.
pub fn oaep_encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
    let max = max_plaintext_len(public_key);
    if plaintext.len() > max {
        return Err(CryptoError::MessageTooLong {
            len: plaintext.len(),
            max,
        });
    }

    let encrypting_key = oaep::EncryptingKey::<Sha256>::new(public_key.clone());
    encrypting_key
        .encrypt_with_rng(&mut OsRng, plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)
}

/// RSA-OAEP-SHA256 decryption with an already parsed key.
///
/// # Errors
///
/// Returns `CryptoError::DecryptionFailed`.
pub fn oaep_decrypt(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
    let decrypting_key = oaep::DecryptingKey::<Sha256>::new(private_key.clone());
    decrypting_key
        .decrypt(ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}
