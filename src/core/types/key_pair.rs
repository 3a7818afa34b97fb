//! `SerializedKeyPair` - PEM text of a freshly generated RSA key pair.

use core::fmt::{self, Debug};

use zeroize::Zeroizing;

/// The two PEM halves returned by key generation.
///
/// The private half is a password-encrypted PKCS#8 document and is zeroized
/// when dropped. The public half is a SubjectPublicKeyInfo document.
#[derive(Clone)]
pub struct SerializedKeyPair {
    /// Encrypted PKCS#8 PEM of the private key.
    pub private_key: Zeroizing<String>,
    /// SubjectPublicKeyInfo PEM of the public key.
    pub public_key: String,
}

impl SerializedKeyPair {
    /// Splits the pair into `(private_key, public_key)`.
    #[must_use]
    pub fn into_parts(self) -> (Zeroizing<String>, String) {
        (self.private_key, self.public_key)
    }
}

impl Debug for SerializedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializedKeyPair")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .finish()
    }
}
