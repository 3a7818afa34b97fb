//! Core types and operations.
//!
//! This module provides the building blocks of the crypto service:
//!
//! - [`error`] - Error type for fail-loud operations
//! - [`pem`] - PEM label inspection
//! - [`types`] - Keys, nonces, sealed messages and verification outcomes
//! - [`operations`] - Symmetric, asymmetric, signing, hashing and key codec

pub mod error;
pub mod operations;
pub mod pem;
pub mod types;

// Re-export commonly used items
pub use error::{CryptoError, CryptoResult};
