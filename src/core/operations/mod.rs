//! Cryptographic operations.
//!
//! - [`symmetric`] - AES-128-GCM encryption (`sym_*`)
//! - [`asymmetric`] - RSA key generation and RSA-OAEP (`asym_*`)
//! - [`signing`] - RSA-PSS signing and the two verification conventions
//! - [`hash`] - SHA-256 digest
//! - [`codec`] - PEM (de)serialization of RSA keys

pub mod asymmetric;
pub mod codec;
pub mod hash;
pub mod signing;
pub mod symmetric;
