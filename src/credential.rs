//! Layout of an encoded credential.
//!
//! ```text
//! SALT (8) | CHECKSUM (32)
//! ```
//!
//! Stored and transmitted as 80 lowercase hex characters.

use std::fmt;
use std::str::FromStr;

use crate::crypto::{CHECKSUM_LEN, SALT_LEN};
use crate::error::CredentialError;
use crate::hex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    salt: [u8; SALT_LEN],
    checksum: [u8; CHECKSUM_LEN],
}

impl Credential {
    pub const LEN: usize = SALT_LEN + CHECKSUM_LEN;
    pub const HEX_LEN: usize = Self::LEN * 2;

    pub fn new(salt: [u8; SALT_LEN], checksum: [u8; CHECKSUM_LEN]) -> Self {
        Self { salt, checksum }
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn checksum(&self) -> &[u8; CHECKSUM_LEN] {
        &self.checksum
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut buf = [0u8; Self::LEN];
        buf[..SALT_LEN].copy_from_slice(&self.salt);
        buf[SALT_LEN..].copy_from_slice(&self.checksum);
        buf
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.to_bytes())
    }

    /// Parses exactly [`Credential::LEN`] bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CredentialError> {
        if data.len() != Self::LEN {
            return Err(CredentialError::InvalidLength(data.len()));
        }

        let mut salt = [0u8; SALT_LEN];
        let mut checksum = [0u8; CHECKSUM_LEN];
        salt.copy_from_slice(&data[..SALT_LEN]);
        checksum.copy_from_slice(&data[SALT_LEN..]);

        Ok(Self { salt, checksum })
    }

    /// Returns the salt prefix of a decoded credential of any length.
    ///
    /// Verification only needs the salt; the remaining bytes are compared
    /// as a whole afterwards.
    pub fn salt_of(decoded: &[u8]) -> Result<[u8; SALT_LEN], CredentialError> {
        decoded
            .get(..SALT_LEN)
            .and_then(|s| s.try_into().ok())
            .ok_or(CredentialError::TooShort(decoded.len()))
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Credential {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CredentialError::Empty);
        }
        Self::from_bytes(&hex::decode(s)?)
    }
}
