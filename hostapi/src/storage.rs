//! Storage accessor trait consumed by the runtime.

use basalt_primitives::Hash;

use crate::error::StorageError;

/// 32-byte account identifier used by the balance convenience slots.
pub type AccountId = [u8; 32];

/// Abstraction over the node's state trie.
///
/// The runtime holds one shared handle and the outer node another;
/// callers synchronize through a lock around the whole accessor, so
/// implementations do not need interior locking of their own.
pub trait Storage: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Insert or replace the value under `key`.
    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), StorageError>;

    /// Remove the entry under `key`.
    fn clear(&mut self, key: &[u8]) -> Result<(), StorageError>;

    /// All `(key, value)` pairs currently stored. Used for prefix
    /// clearing when the backend has no native prefix scan.
    fn entries(&self) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StorageError>;

    /// Merkle root of the current key-value set, with every child trie's
    /// root embedded in the parent under its storage key.
    fn root(&mut self) -> Result<Hash, StorageError>;

    /// Insert or replace `key` in the child trie under `parent_key`.
    fn set_child(&mut self, parent_key: &[u8], key: &[u8], value: &[u8])
        -> Result<(), StorageError>;

    /// Value under `key` in the child trie under `parent_key`, if any.
    fn get_child(&self, parent_key: &[u8], key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write an account balance to its well-known slot.
    fn set_balance(&mut self, account: &AccountId, amount: u64) -> Result<(), StorageError>;

    /// Read an account balance from its well-known slot. Absent slots
    /// read as zero.
    fn get_balance(&self, account: &AccountId) -> Result<u64, StorageError>;
}
