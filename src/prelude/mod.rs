//! Ergonomic layer for the crypto service.
//!
//! The prelude module re-exports every operation and value type together with
//! the [`KeyPairBuilder`] configuration builder.
//!
//! # Usage
//!
//! ```rust
//! use player_crypto::prelude::*;
//! ```

mod builders;

pub use builders::KeyPairBuilder;

// Re-export core types for convenience
pub use crate::core::error::{CryptoError, CryptoResult};
pub use crate::core::operations::asymmetric::{asym_decrypt, asym_encrypt, asym_gen};
pub use crate::core::operations::codec::{
    load_private_key, load_public_key, serialize_private_key, serialize_private_key_with,
    serialize_public_key, Pbkdf2Params,
};
pub use crate::core::operations::hash::do_hash;
pub use crate::core::operations::signing::{sign, verify, verify_from_card};
pub use crate::core::operations::symmetric::{
    sym_decrypt, sym_encrypt, sym_gen, sym_open, sym_seal,
};
pub use crate::core::types::{
    Nonce, PlayerCredentials, SealedMessage, SerializedKeyPair, SymmetricKey, Verification,
};
