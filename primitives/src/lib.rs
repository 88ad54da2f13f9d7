//! `basalt-primitives` — foundational primitives for the basalt node.
//!
//! This crate provides the hash functions exposed through the host ABI
//! and the Merkle-Patricia trie that backs the state accessor. Everything
//! here is pure computation with no I/O and no engine dependencies.

pub mod types;
pub mod hashing;
pub mod trie;

pub use types::{Hash, ZERO_HASH};
pub use trie::Trie;
