//! Cryptographic primitives for a player-facing client.
//!
//! This crate provides the handful of operations a client needs to talk to a
//! server and a smart card: authenticated symmetric encryption, RSA key
//! generation, RSA-OAEP encryption, RSA signatures, SHA-256 hashing and PEM
//! (de)serialization of RSA keys.
//!
//! # Quick Start
//!
//! ```rust
//! use player_crypto::{do_hash, sym_decrypt, sym_encrypt, sym_gen};
//!
//! // Symmetric round trip
//! let (key, nonce) = sym_gen().expect("rng available");
//! let key = key.to_string();
//! let ciphertext = sym_encrypt(&key, "hello", &nonce).expect("encrypt");
//! assert_eq!(sym_decrypt(&key, &ciphertext, &nonce).expect("decrypt"), "hello");
//!
//! // Hashing
//! assert_eq!(do_hash(b"").len(), 64);
//! ```
//!
//! # Operations
//!
//! | Operation | Algorithm | Output |
//! |-----------|-----------|--------|
//! | [`sym_gen`] | OS RNG | 16-byte key (base64) and 12-byte nonce |
//! | [`sym_encrypt`] / [`sym_decrypt`] | AES-128-GCM, explicit nonce | base64 ciphertext / text |
//! | [`sym_seal`] / [`sym_open`] | AES-128-GCM, fresh nonce | [`SealedMessage`] / text |
//! | [`asym_gen`] | RSA-2048, e = 65537 | PEM key pair |
//! | [`asym_encrypt`] / [`asym_decrypt`] | RSA-OAEP, SHA-256 | raw bytes |
//! | [`sign`] | RSA-PSS, SHA-256, max salt | raw signature |
//! | [`verify`] | RSA-PSS, SHA-256 | `bool` |
//! | [`verify_from_card`] | RSA-PKCS1-v1_5 over a SHA-256 digest | `bool` |
//! | [`do_hash`] | SHA-256 | lowercase hex |
//!
//! # Key Formats
//!
//! - Private keys: PKCS#8 `ENCRYPTED PRIVATE KEY` PEM, protected with
//!   PBES2 (PBKDF2-HMAC-SHA256 and AES-256-CBC) under a caller-supplied password
//! - Public keys: SubjectPublicKeyInfo `PUBLIC KEY` PEM (PKCS#1
//!   `RSA PUBLIC KEY` is accepted on load)
//!
//! # Error Handling
//!
//! Every operation except verification returns [`CryptoResult`]. The two
//! verification entry points are fail-closed and return `false` for any
//! malformed key, signature or message. [`verify_outcome`] and
//! [`verify_from_card_outcome`] expose the underlying three-way
//! [`Verification`] when the caller needs to tell errors apart from forgeries.
//!
//! # Security
//!
//! - Symmetric keys and private-key PEM text are zeroized on drop
//! - Debug output redacts key material and PINs
//! - Symmetric keys compare in constant time
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::error::{CryptoError, CryptoResult};

pub use crate::core::types::{
    Nonce, PlayerCredentials, SealedMessage, SerializedKeyPair, SymmetricKey, Verification,
    NONCE_SIZE, SYMMETRIC_KEY_SIZE,
};

pub use crate::core::operations::asymmetric::{
    asym_decrypt, asym_encrypt, asym_gen, max_plaintext_len,
};
pub use crate::core::operations::codec::{
    load_private_key, load_public_key, serialize_private_key, serialize_private_key_with,
    serialize_public_key, Pbkdf2Params, LEGACY_PASSWORD,
};
pub use crate::core::operations::hash::do_hash;
pub use crate::core::operations::signing::{
    sign, verify, verify_from_card, verify_from_card_outcome, verify_outcome,
};
pub use crate::core::operations::symmetric::{
    sym_decrypt, sym_encrypt, sym_gen, sym_open, sym_seal,
};
