use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::{CHECKSUM_LEN, ITERATIONS, SALT_LEN};
use crate::credential::Credential;

/// Derives the checksum of `salt ‖ password`.
///
/// The first SHA-256 pass covers the salted password, every following pass
/// hashes the previous 32-byte output. The count is fixed at [`ITERATIONS`]
/// because stored credentials depend on it.
pub fn checksum(password: &[u8], salt: &[u8; SALT_LEN]) -> [u8; CHECKSUM_LEN] {
    let mut input = Zeroizing::new(Vec::with_capacity(SALT_LEN + password.len()));
    input.extend_from_slice(salt);
    input.extend_from_slice(password);

    let mut sum: [u8; CHECKSUM_LEN] = Sha256::digest(input.as_slice()).into();
    for _ in 1..ITERATIONS {
        sum = Sha256::digest(sum).into();
    }
    sum
}

/// Computes the full credential (salt followed by checksum) for `password`.
pub fn digest(password: &[u8], salt: &[u8; SALT_LEN]) -> Credential {
    Credential::new(*salt, checksum(password, salt))
}
