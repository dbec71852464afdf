//! Cryptographic primitives for encoded credentials.
//!
//! Provides salt generation and the iterated SHA-256 checksum.

pub mod digest;
pub mod random;

pub use digest::{checksum, digest};
pub use random::generate_salt;

/// Length of the salt (8 bytes).
pub const SALT_LEN: usize = 8;
/// Length of the checksum (32 bytes / SHA-256 output).
pub const CHECKSUM_LEN: usize = 32;
/// Total number of SHA-256 applications. Part of the stored format.
pub const ITERATIONS: usize = 1024;
