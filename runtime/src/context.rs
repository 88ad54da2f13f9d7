//! Per-instance execution context.
//!
//! One `HostContext` lives in the Wasmtime store's user-data slot for
//! the lifetime of the runtime. Every host function gets it handed back
//! by the engine and reaches the storage accessor, keystore, and heap
//! allocator through it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use wasmtime::Memory;

use basalt_hostapi::{Keystore, Storage};

use crate::allocator::FreeingBumpAllocator;

/// Shared handle to the node's storage accessor.
pub type SharedStorage = Arc<RwLock<dyn Storage>>;
/// Shared handle to the node's keystore.
pub type SharedKeystore = Arc<RwLock<Keystore>>;

/// The bundle of host resources a WASM instance executes against.
pub struct HostContext {
    pub storage: SharedStorage,
    pub keystore: SharedKeystore,
    pub allocator: FreeingBumpAllocator,
    /// The instance's linear memory, installed after instantiation.
    /// Host calls resolve the current memory view through this handle on
    /// every invocation; the raw base pointer is never cached, so guest
    /// memory growth cannot leave the host reading a stale mapping.
    pub memory: Option<Memory>,
}

impl HostContext {
    /// Create a context with an empty allocator and no memory attached.
    /// The runtime wires both in once the instance exists.
    pub fn new(storage: SharedStorage, keystore: SharedKeystore) -> Self {
        Self {
            storage,
            keystore,
            allocator: FreeingBumpAllocator::new(0, 0),
            memory: None,
        }
    }

    /// Read access to storage. Lock poisoning is ignored; the runtime
    /// mutex already serializes all writers.
    pub fn storage(&self) -> RwLockReadGuard<'_, dyn Storage> {
        self.storage.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to storage.
    pub fn storage_mut(&self) -> RwLockWriteGuard<'_, dyn Storage + 'static> {
        self.storage.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read access to the keystore.
    pub fn keystore(&self) -> RwLockReadGuard<'_, Keystore> {
        self.keystore.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the keystore.
    pub fn keystore_mut(&self) -> RwLockWriteGuard<'_, Keystore> {
        self.keystore.write().unwrap_or_else(PoisonError::into_inner)
    }
}
