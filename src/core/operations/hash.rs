//! One-way digest.

use sha2::{Digest, Sha256};

/// SHA-256 output size in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Computes SHA-256 over `data` and returns it as lowercase hex.
///
/// The result is always 64 characters long.
///
/// # Example
///
/// ```rust
/// use player_crypto::do_hash;
///
/// assert_eq!(
///     do_hash(b"abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
#[must_use]
pub fn do_hash(data: &[u8]) -> String {
    hex::encode(digest(data))
}

/// Computes the raw SHA-256 digest of `data`.
#[must_use]
pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
    Sha256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            do_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_output_is_lowercase_hex() {
        let hash = do_hash(b"player-crypto");
        assert_eq!(hash.len(), 2 * DIGEST_SIZE);
        assert!(hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(do_hash(b"hello"), do_hash(b"hello"));
    }

    #[test]
    fn test_different_inputs() {
        assert_ne!(do_hash(b"hello"), do_hash(b"hellp"));
    }

    #[test]
    fn test_digest_matches_hex() {
        assert_eq!(hex::encode(digest(b"hello")), do_hash(b"hello"));
    }
}
