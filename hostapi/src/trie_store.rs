//! In-memory trie-backed storage.
//!
//! `TrieStore` keeps the main state trie and any child tries in memory.
//! Child tries are full tries of their own; their roots are folded into
//! the parent trie under the parent storage key whenever the root is
//! computed, so the main root commits to child state as well.

use std::collections::BTreeMap;

use basalt_primitives::types::BALANCE_KEY_PREFIX;
use basalt_primitives::{Hash, Trie};

use crate::error::StorageError;
use crate::storage::{AccountId, Storage};

/// In-memory implementation of [`Storage`] over the primitives trie.
#[derive(Debug, Clone, Default)]
pub struct TrieStore {
    trie: Trie,
    children: BTreeMap<Vec<u8>, Trie>,
}

impl TrieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn balance_key(account: &AccountId) -> Vec<u8> {
        let mut key = Vec::with_capacity(BALANCE_KEY_PREFIX.len() + account.len());
        key.extend_from_slice(BALANCE_KEY_PREFIX);
        key.extend_from_slice(account);
        key
    }
}

impl Storage for TrieStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.trie.get(key).map(|v| v.to_vec()))
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        self.trie.insert(key, value);
        Ok(())
    }

    fn clear(&mut self, key: &[u8]) -> Result<(), StorageError> {
        self.trie.remove(key);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StorageError> {
        Ok(self.trie.entries())
    }

    fn root(&mut self) -> Result<Hash, StorageError> {
        for (parent_key, child) in &self.children {
            let child_root = child.root();
            self.trie.insert(parent_key, &child_root);
        }
        Ok(self.trie.root())
    }

    fn set_child(
        &mut self,
        parent_key: &[u8],
        key: &[u8],
        value: &[u8],
    ) -> Result<(), StorageError> {
        self.children
            .entry(parent_key.to_vec())
            .or_default()
            .insert(key, value);
        Ok(())
    }

    fn get_child(&self, parent_key: &[u8], key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self
            .children
            .get(parent_key)
            .and_then(|child| child.get(key))
            .map(|v| v.to_vec()))
    }

    fn set_balance(&mut self, account: &AccountId, amount: u64) -> Result<(), StorageError> {
        self.trie
            .insert(&Self::balance_key(account), &amount.to_le_bytes());
        Ok(())
    }

    fn get_balance(&self, account: &AccountId) -> Result<u64, StorageError> {
        match self.trie.get(&Self::balance_key(account)) {
            None => Ok(0),
            Some(raw) => {
                let bytes: [u8; 8] = raw
                    .try_into()
                    .map_err(|_| StorageError::MalformedBalance(hex::encode(account)))?;
                Ok(u64::from_le_bytes(bytes))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basalt_primitives::ZERO_HASH;

    #[test]
    fn set_get_clear_round_trip() {
        let mut store = TrieStore::new();
        store.set(b"key", b"value").unwrap();
        assert_eq!(store.get(b"key").unwrap(), Some(b"value".to_vec()));

        store.clear(b"key").unwrap();
        assert_eq!(store.get(b"key").unwrap(), None);
    }

    #[test]
    fn root_is_deterministic_across_insertion_order() {
        let mut forward = TrieStore::new();
        forward.set(b"a", b"1").unwrap();
        forward.set(b"b", b"2").unwrap();

        let mut backward = TrieStore::new();
        backward.set(b"b", b"2").unwrap();
        backward.set(b"a", b"1").unwrap();

        assert_eq!(forward.root().unwrap(), backward.root().unwrap());
        assert_ne!(forward.root().unwrap(), ZERO_HASH);
    }

    #[test]
    fn child_storage_is_isolated_from_parent() {
        let mut store = TrieStore::new();
        store.set_child(b":child:A", b"k", b"v").unwrap();

        assert_eq!(store.get(b"k").unwrap(), None);
        assert_eq!(store.get_child(b":child:A", b"k").unwrap(), Some(b"v".to_vec()));
        assert_eq!(store.get_child(b":child:B", b"k").unwrap(), None);
    }

    #[test]
    fn child_root_is_embedded_in_parent_root() {
        let mut plain = TrieStore::new();
        plain.set(b"x", b"y").unwrap();
        let plain_root = plain.root().unwrap();

        let mut with_child = TrieStore::new();
        with_child.set(b"x", b"y").unwrap();
        with_child.set_child(b":child:A", b"k", b"v").unwrap();
        let child_root = with_child.root().unwrap();

        assert_ne!(plain_root, child_root);
        // The embedded child root is readable as a plain parent value.
        let embedded = with_child.get(b":child:A").unwrap();
        assert_eq!(embedded.map(|v| v.len()), Some(32));
    }

    #[test]
    fn child_mutation_changes_parent_root() {
        let mut store = TrieStore::new();
        store.set_child(b":child:A", b"k", b"v1").unwrap();
        let first = store.root().unwrap();
        store.set_child(b":child:A", b"k", b"v2").unwrap();
        let second = store.root().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn balances_live_in_a_prefixed_slot() {
        let mut store = TrieStore::new();
        let account = [7u8; 32];
        assert_eq!(store.get_balance(&account).unwrap(), 0);

        store.set_balance(&account, 1_000_000).unwrap();
        assert_eq!(store.get_balance(&account).unwrap(), 1_000_000);

        // The slot is a normal storage entry under the balance prefix.
        let mut key = b"balance:".to_vec();
        key.extend_from_slice(&account);
        assert_eq!(
            store.get(&key).unwrap(),
            Some(1_000_000u64.to_le_bytes().to_vec())
        );
    }

    #[test]
    fn malformed_balance_is_an_error() {
        let mut store = TrieStore::new();
        let account = [9u8; 32];
        let mut key = b"balance:".to_vec();
        key.extend_from_slice(&account);
        store.set(&key, b"not eight bytes").unwrap();

        assert!(matches!(
            store.get_balance(&account),
            Err(StorageError::MalformedBalance(_))
        ));
    }
}
