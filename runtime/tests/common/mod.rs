//! Shared harness for runtime integration tests.
//!
//! Builds a runtime around an in-memory trie store and keystore, keeping
//! typed handles to both so tests can assert on host-side state after
//! driving the guest through `exec`.

#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use basalt_hostapi::{Keystore, TrieStore};
use basalt_runtime::{Runtime, RuntimeConfig};

pub struct TestNode {
    pub storage: Arc<RwLock<TrieStore>>,
    pub keystore: Arc<RwLock<Keystore>>,
    pub runtime: Runtime,
}

/// Small memory so tests exercise real allocator bounds: 2 pages of
/// linear memory, growable to 16.
pub fn small_config() -> RuntimeConfig {
    RuntimeConfig {
        initial_pages: 2,
        max_memory_pages: Some(16),
    }
}

pub fn spawn(wat: &str) -> TestNode {
    let _ = env_logger::builder().is_test(true).try_init();
    let storage = Arc::new(RwLock::new(TrieStore::new()));
    let keystore = Arc::new(RwLock::new(Keystore::new()));
    let runtime = Runtime::new(
        wat.as_bytes(),
        storage.clone(),
        keystore.clone(),
        small_config(),
    )
    .expect("test module must instantiate");
    TestNode {
        storage,
        keystore,
        runtime,
    }
}

/// Split little-endian u32s out of a guest-produced byte buffer.
pub fn u32s(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
