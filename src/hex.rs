//! Lowercase hexadecimal codec for encoded credentials.

use crate::error::HexError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encodes bytes as lowercase hex, high nibble first.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decodes a hex string. Both lowercase and uppercase digits are accepted.
///
/// # Errors
///
/// Returns an error if the input has an odd number of bytes or contains
/// anything other than `0-9`, `a-f` and `A-F`.
pub fn decode(input: &str) -> Result<Vec<u8>, HexError> {
    let raw = input.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength(raw.len()));
    }

    raw.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let hi = nibble(pair[0], 2 * i)?;
            let lo = nibble(pair[1], 2 * i + 1)?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn nibble(byte: u8, index: usize) -> Result<u8, HexError> {
    digit_value(byte).ok_or(HexError::InvalidDigit { index, byte })
}

const fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
