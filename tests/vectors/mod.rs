//! Test vector types for the published SHA-256 and AES-GCM test vectors.
//!
//! The JSON files next to this module follow one layout: a named suite holding
//! a list of cases, each flagged with `expect-fail`.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for SHA-256 digests.
#[derive(Debug, Deserialize)]
pub struct HashTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// ASCII message
    pub message: String,
    /// Expected lowercase hex digest
    pub digest: String,
}

/// Test vector for AES-128-GCM without associated data.
#[derive(Debug, Deserialize)]
pub struct AeadTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded 16-byte key
    pub key: String,
    /// Hex-encoded 12-byte nonce
    pub nonce: String,
    /// Hex-encoded plaintext
    pub plaintext: String,
    /// Hex-encoded ciphertext (without tag)
    pub ciphertext: String,
    /// Hex-encoded 16-byte tag
    pub tag: String,
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
