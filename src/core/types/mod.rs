//! Value types passed across the crate boundary.
//!
//! - [`SymmetricKey`] - AES-128 key (base64 text form)
//! - [`Nonce`] - 12-byte AEAD nonce
//! - [`SealedMessage`] - AEAD ciphertext bound to its nonce
//! - [`SerializedKeyPair`] - PEM halves of a generated RSA key pair
//! - [`Verification`] - three-way signature verification outcome
//! - [`PlayerCredentials`] - nickname and smart-card PIN

mod credentials;
mod key_pair;
mod nonce;
mod sealed;
mod symmetric_key;
mod verification;

pub use credentials::PlayerCredentials;
pub use key_pair::SerializedKeyPair;
pub use nonce::{Nonce, NONCE_SIZE};
pub use sealed::SealedMessage;
pub use symmetric_key::{SymmetricKey, SYMMETRIC_KEY_SIZE};
pub use verification::Verification;
