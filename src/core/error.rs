//! Error types for cryptographic operations.
//!
//! This module provides a unified error type for every fail-loud operation in
//! the crate. Error messages are intentionally vague for security-sensitive
//! operations (a wrong password and a corrupted key read the same) to avoid
//! leaking information that could aid attacks.

use thiserror::Error;

/// Errors that can occur in symmetric, asymmetric and key codec operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Symmetric key material is invalid (wrong size after decoding).
    #[error("Invalid key material")]
    InvalidKey,

    /// Nonce has the wrong length.
    #[error("Invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonce {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Base64 decoding error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Decrypted plaintext was not valid UTF-8 text.
    #[error("Plaintext is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The text does not contain a PEM encapsulation boundary.
    #[error("Invalid PEM encoding")]
    InvalidPem,

    /// A sealed message is not of the form `{nonce}.{ciphertext}`.
    #[error("Malformed sealed message")]
    MalformedSealedMessage,

    /// The PEM label does not match the kind of key expected.
    #[error("Unexpected PEM label: expected {expected}, found {found}")]
    UnexpectedPemLabel {
        /// Label the operation requires.
        expected: &'static str,
        /// Label present in the input.
        found: String,
    },

    /// A key could not be decoded (malformed PEM/DER or wrong password).
    /// Intentionally vague for security.
    #[error("Key decoding failed")]
    KeyDecode,

    /// A key could not be encoded.
    #[error("Key encoding failed")]
    KeyEncode,

    /// RSA key generation failed.
    #[error("Key generation failed")]
    KeyGeneration,

    /// Requested RSA modulus size is below the supported minimum.
    #[error("Unsupported RSA key size: {0} bits")]
    InvalidKeySize(usize),

    /// Plaintext exceeds the OAEP bound for the recipient's modulus.
    #[error("Message too long for RSA-OAEP: {len} bytes, maximum is {max}")]
    MessageTooLong {
        /// Plaintext length in bytes.
        len: usize,
        /// Largest plaintext the key accepts.
        max: usize,
    },

    /// Encryption failed.
    #[error("Encryption failed")]
    EncryptionFailed,

    /// Decryption failed (invalid padding, key/ciphertext mismatch).
    /// Intentionally vague for security.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// AEAD authentication tag verification failed.
    /// Intentionally vague for security.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Signature creation failed.
    #[error("Signing failed")]
    SigningFailed,

    /// The operating system random number generator failed.
    #[error("Random number generation failed")]
    RandomFailure,
}

/// Result type alias for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
