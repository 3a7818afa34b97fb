//! RSA signatures.
//!
//! Two conventions are in use because two different signers exist:
//!
//! - **Client-issued** messages: RSASSA-PSS, SHA-256, MGF1-SHA-256. Signing
//!   uses the maximum salt length the modulus allows; verification recovers
//!   whatever salt length the signer chose. See [`sign`] / [`verify`].
//! - **Card-issued** messages: the smart card signs with RSASSA-PKCS1-v1_5 and
//!   SHA-256 over a SHA-256 digest the client computed beforehand. See
//!   [`verify_from_card`].
//!
//! Verification never fails loudly. The `*_outcome` functions report a
//! three-way [`Verification`]; [`verify`] and [`verify_from_card`] collapse it
//! to `bool`, logging the unexpected-error case at `warn` level first.

use core::fmt::Display;

use rand_core::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{pkcs1v15, pss, Pss, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use signature::{RandomizedSigner, Verifier};
use tracing::warn;

use crate::core::error::{CryptoError, CryptoResult};
use crate::core::operations::codec::{load_private_key, load_public_key};
use crate::core::operations::hash::{digest, DIGEST_SIZE};
use crate::core::types::Verification;

/// PSS salt length for a modulus: `emLen - hLen - 2`, the largest salt EMSA-PSS
/// can encode (222 bytes for 2048-bit keys).
#[must_use]
pub fn pss_max_salt_len(key: &RsaPublicKey) -> usize {
    let em_bits = key.n().bits().saturating_sub(1);
    let em_len = em_bits.div_ceil(8);
    em_len.saturating_sub(DIGEST_SIZE + 2)
}

/// Signs the text form of `value` with RSASSA-PSS-SHA256 (maximum salt).
///
/// Signatures are randomized: signing the same data twice gives different
/// signatures, both of which verify.
///
/// # Errors
///
/// - key parsing errors from [`load_private_key`]
/// - `CryptoError::SigningFailed` if the primitive fails
pub fn sign<T: Display + ?Sized>(
    private_key: &str,
    password: &[u8],
    value: &T,
) -> CryptoResult<Vec<u8>> {
    let private_key = load_private_key(private_key, password)?;
    pss_sign(&private_key, value.to_string().as_bytes())
}

/// RSASSA-PSS-SHA256 signing with an already parsed key.
///
/// # Errors
///
/// Returns `CryptoError::SigningFailed`.
pub fn pss_sign(private_key: &RsaPrivateKey, message: &[u8]) -> CryptoResult<Vec<u8>> {
    let salt_len = pss_max_salt_len(&private_key.to_public_key());
    let signing_key =
        pss::SigningKey::<Sha256>::new_with_salt_len(private_key.clone(), salt_len);
    let signature = signing_key
        .try_sign_with_rng(&mut OsRng, message)
        .map_err(|_| CryptoError::SigningFailed)?;

    let bytes: Box<[u8]> = signature.into();
    Ok(bytes.into_vec())
}

/// Verifies a client-issued PSS signature. Returns `true` only if it is valid.
///
/// Never panics and never returns an error: a malformed key is logged and
/// reported as `false`.
#[must_use]
pub fn verify(public_key: &str, message: &str, signature: &[u8]) -> bool {
    report("verify", verify_outcome(public_key, message, signature))
}

/// Verifies a card-issued PKCS#1 v1.5 signature. Returns `true` only if it is
/// valid.
///
/// `public_key` is the PEM text of the card's key as raw bytes.
#[must_use]
pub fn verify_from_card<T: Display + ?Sized>(
    public_key: &[u8],
    message: &T,
    signature: &[u8],
) -> bool {
    report(
        "verify_from_card",
        verify_from_card_outcome(public_key, message, signature),
    )
}

/// Three-way form of [`verify`].
pub fn verify_outcome(public_key: &str, message: &str, signature: &[u8]) -> Verification {
    match load_public_key(public_key) {
        Ok(key) => pss_verify(&key, message.as_bytes(), signature),
        Err(err) => Verification::Error(err),
    }
}

/// Three-way form of [`verify_from_card`].
///
/// The message text is hashed with SHA-256 and that digest is the pre-image
/// the card signed with PKCS#1 v1.5/SHA-256.
pub fn verify_from_card_outcome<T: Display + ?Sized>(
    public_key: &[u8],
    message: &T,
    signature: &[u8],
) -> Verification {
    let key = match card_public_key(public_key) {
        Ok(key) => key,
        Err(err) => return Verification::Error(err),
    };

    let message_digest = digest(message.to_string().as_bytes());
    pkcs1v15_verify(&key, &message_digest, signature)
}

/// RSASSA-PSS-SHA256 verification with an already parsed key.
///
/// Any salt length from zero up to [`pss_max_salt_len`] is accepted. The
/// maximum and the digest length are tried first since those are what signers
/// produce in practice.
pub fn pss_verify(public_key: &RsaPublicKey, message: &[u8], signature: &[u8]) -> Verification {
    if signature.len() != public_key.size() {
        return Verification::InvalidSignature;
    }

    let hashed = digest(message);
    let valid = pss_salt_lengths(pss_max_salt_len(public_key)).any(|salt_len| {
        public_key
            .verify(Pss::new_with_salt::<Sha256>(salt_len), &hashed, signature)
            .is_ok()
    });

    if valid {
        Verification::Valid
    } else {
        Verification::InvalidSignature
    }
}

/// Candidate salt lengths, most likely first.
fn pss_salt_lengths(max: usize) -> impl Iterator<Item = usize> {
    let digest_len = DIGEST_SIZE.min(max);
    [max, digest_len]
        .into_iter()
        .chain((0..max).rev().filter(move |len| *len != digest_len))
}

/// RSASSA-PKCS1-v1_5-SHA256 verification with an already parsed key.
pub fn pkcs1v15_verify(
    public_key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> Verification {
    let verifying_key = pkcs1v15::VerifyingKey::<Sha256>::new(public_key.clone());

    let Ok(signature) = pkcs1v15::Signature::try_from(signature) else {
        return Verification::InvalidSignature;
    };

    match verifying_key.verify(message, &signature) {
        Ok(()) => Verification::Valid,
        Err(_) => Verification::InvalidSignature,
    }
}

fn card_public_key(public_key: &[u8]) -> CryptoResult<RsaPublicKey> {
    let text = core::str::from_utf8(public_key).map_err(|_| CryptoError::InvalidPem)?;
    load_public_key(text)
}

fn report(operation: &'static str, outcome: Verification) -> bool {
    if let Verification::Error(err) = &outcome {
        warn!(operation, error = %err, "signature verification could not be performed");
    }
    outcome.is_valid()
}
