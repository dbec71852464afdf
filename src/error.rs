use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    OddLength(usize),
    InvalidDigit { index: usize, byte: u8 },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::OddLength(len) => write!(f, "hex input has odd length {len}"),
            HexError::InvalidDigit { index, byte } => {
                write!(f, "invalid hex digit 0x{byte:02x} at position {index}")
            }
        }
    }
}

impl std::error::Error for HexError {}

/// Reasons an encoded credential could not be checked at all.
///
/// A well-formed credential that simply does not match the password is not an
/// error; it verifies to `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    Empty,
    Hex(HexError),
    TooShort(usize),
    InvalidLength(usize),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Empty => write!(f, "encoded credential is empty"),
            CredentialError::Hex(e) => write!(f, "encoded credential is not valid hex: {e}"),
            CredentialError::TooShort(len) => {
                write!(f, "encoded credential too short: {len} bytes")
            }
            CredentialError::InvalidLength(len) => {
                write!(f, "encoded credential must be 40 bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for CredentialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CredentialError::Hex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HexError> for CredentialError {
    fn from(e: HexError) -> Self {
        CredentialError::Hex(e)
    }
}
