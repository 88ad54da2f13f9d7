//! Core type aliases shared across the basalt crates.

/// A 32-byte hash output.
pub type Hash = [u8; 32];

/// The all-zero hash. Root of an empty trie.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Storage key prefix for the well-known account balance slots.
pub const BALANCE_KEY_PREFIX: &[u8] = b"balance:";
