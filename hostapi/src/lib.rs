//! `basalt-hostapi` — the node-side resources the WASM runtime drives.
//!
//! The host ABI terminates here: storage reads and writes land in a
//! [`Storage`] implementation, key generation and signing land in the
//! [`Keystore`], and signature verification goes through [`crypto`].
//! The runtime crate holds shared handles to these and dispatches into
//! them from guest host calls.

pub mod error;
pub mod storage;
pub mod trie_store;
pub mod keystore;
pub mod crypto;

pub use error::{KeystoreError, StorageError};
pub use storage::{AccountId, Storage};
pub use trie_store::TrieStore;
pub use keystore::{Keypair, Keystore};
