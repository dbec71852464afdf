mod credential;
mod crypto;
mod error;
pub mod hex;

use anyhow::{Context, Result};
use subtle::ConstantTimeEq;

pub use crate::credential::Credential;
pub use crate::crypto::{CHECKSUM_LEN, ITERATIONS, SALT_LEN, checksum, digest};
pub use crate::error::{CredentialError, HexError};

/// Encodes `password` with a fresh random salt.
///
/// Returns the 80-character lowercase hex form of `salt ‖ checksum`.
///
/// # Errors
///
/// Fails if the OS random generator cannot supply a salt.
pub fn encode(password: &str) -> Result<String> {
    encode_bytes(password.as_bytes())
}

pub fn encode_bytes(password: &[u8]) -> Result<String> {
    let salt = crypto::generate_salt().context("failed to generate salt")?;
    let encoded = crypto::digest(password, &salt).to_hex();
    tracing::trace!("encoded new credential");
    Ok(encoded)
}

/// Checks `password` against a stored credential.
///
/// Malformed credentials never match. Use [`verify`] to tell a mismatch
/// apart from an unparseable credential.
pub fn matches(password: &str, encoded: &str) -> bool {
    matches_bytes(password.as_bytes(), encoded)
}

pub fn matches_bytes(password: &[u8], encoded: &str) -> bool {
    match verify_bytes(password, encoded) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting malformed credential");
            false
        }
    }
}

/// Checks `password` against a stored credential.
///
/// Returns `Ok(false)` for a well-formed credential that does not match.
///
/// # Errors
///
/// Returns an error if `encoded` is blank, is not valid hex, or is shorter
/// than a salt.
pub fn verify(password: &str, encoded: &str) -> Result<bool, CredentialError> {
    verify_bytes(password.as_bytes(), encoded)
}

pub fn verify_bytes(password: &[u8], encoded: &str) -> Result<bool, CredentialError> {
    if encoded.trim().is_empty() {
        return Err(CredentialError::Empty);
    }

    let decoded = crate::hex::decode(encoded)?;
    let salt = Credential::salt_of(&decoded)?;
    let expected = crypto::digest(password, &salt).to_bytes();

    Ok(bool::from(expected.as_slice().ct_eq(decoded.as_slice())))
}
