//! Hash primitives of the host ABI.
//!
//! The guest runtime addresses state by hashed keys, so these functions
//! must match the reference algorithms bit for bit: blake2b for general
//! hashing and trie nodes, keccak-256 for Ethereum-compatible digests,
//! and the twox family (xxhash64) for cheap non-cryptographic storage
//! keys. All multi-byte output is little-endian where the algorithm
//! produces integers.

use std::hash::Hasher;

use blake2::digest::consts::{U16, U32};
use blake2::{Blake2b, Digest};
use sha3::Keccak256;
use twox_hash::XxHash64;

use crate::types::Hash;

type Blake2b256 = Blake2b<U32>;
type Blake2b128 = Blake2b<U16>;

/// blake2b with a 256-bit digest.
pub fn blake2_256(data: &[u8]) -> Hash {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Blake2b256::digest(data));
    out
}

/// blake2b with a 128-bit digest.
pub fn blake2_128(data: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&Blake2b128::digest(data));
    out
}

/// keccak-256 (the pre-standard SHA-3 variant used by Ethereum).
pub fn keccak_256(data: &[u8]) -> Hash {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

/// xxhash64 with seed 0, little-endian.
pub fn twox_64(data: &[u8]) -> [u8; 8] {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(data);
    hasher.finish().to_le_bytes()
}

/// xxhash64 with seeds 0 and 1 concatenated, each little-endian.
pub fn twox_128(data: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&twox_64(data));
    let mut hasher = XxHash64::with_seed(1);
    hasher.write(data);
    out[8..].copy_from_slice(&hasher.finish().to_le_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn blake2_256_empty_vector() {
        assert_eq!(
            blake2_256(b""),
            hex!("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8")
        );
    }

    #[test]
    fn blake2_128_empty_vector() {
        assert_eq!(blake2_128(b""), hex!("cae66941d9efbd404e4d88758ea67670"));
    }

    #[test]
    fn keccak_256_empty_vector() {
        assert_eq!(
            keccak_256(b""),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn twox_128_empty_vector() {
        assert_eq!(twox_128(b""), hex!("99e9d85137db46ef4bbea33613baafd5"));
    }

    #[test]
    fn twox_64_is_first_half_of_twox_128() {
        for data in [&b""[..], b"abc", b"Timestamp DidUpdate"] {
            assert_eq!(twox_64(data), twox_128(data)[..8]);
        }
    }

    #[test]
    fn hashes_differ_for_different_input() {
        assert_ne!(blake2_256(b"a"), blake2_256(b"b"));
        assert_ne!(twox_128(b"a"), twox_128(b"b"));
        assert_ne!(keccak_256(b"a"), keccak_256(b"b"));
    }
}
