//! The runtime façade — instantiation and serialized guest calls.
//!
//! A [`Runtime`] owns one compiled WASM instance, its linear memory, and
//! the execution context installed in the store. Callers drive the guest
//! exclusively through [`Runtime::exec`]; a mutex around the store keeps
//! at most one guest call in flight.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use wasmtime::{Engine, Instance, Linker, Memory, MemoryType, Module, Store};

use crate::allocator::{AllocatorError, FreeingBumpAllocator};
use crate::config::RuntimeConfig;
use crate::context::{HostContext, SharedKeystore, SharedStorage};
use crate::error::RuntimeError;
use crate::imports::{self, HOST_MODULE};
use crate::memory;

/// A WASM guest runtime wired to the node's storage and keystore.
pub struct Runtime {
    store: Mutex<Store<HostContext>>,
    instance: Instance,
    memory: Memory,
}

impl Runtime {
    /// Instantiate a runtime from raw WASM bytecode.
    ///
    /// Compiles the module, registers the full host ABI under the `env`
    /// import module, provides a host-owned linear memory pre-sized per
    /// `config`, and wraps the heap allocator around that memory at
    /// offset 0.
    pub fn new(
        code: &[u8],
        storage: SharedStorage,
        keystore: SharedKeystore,
        config: RuntimeConfig,
    ) -> Result<Self, RuntimeError> {
        let engine = Engine::default();
        let module = Module::new(&engine, code)?;

        let mut store = Store::new(&engine, HostContext::new(storage, keystore));
        let memory = Memory::new(
            &mut store,
            MemoryType::new(config.initial_pages, config.max_memory_pages),
        )?;

        let mut linker = Linker::new(&engine);
        linker.define(&store, HOST_MODULE, "memory", memory)?;
        imports::register_host_functions(&mut linker)?;

        let instance = linker.instantiate(&mut store, &module)?;

        let heap_size = memory.data_size(&store) as u32;
        let ctx = store.data_mut();
        ctx.allocator = FreeingBumpAllocator::new(0, heap_size);
        ctx.memory = Some(memory);

        Ok(Self {
            store: Mutex::new(store),
            instance,
            memory,
        })
    }

    /// Instantiate a runtime from a `.wasm` file.
    pub fn from_file(
        path: &Path,
        storage: SharedStorage,
        keystore: SharedKeystore,
        config: RuntimeConfig,
    ) -> Result<Self, RuntimeError> {
        let code = std::fs::read(path)
            .map_err(|e| RuntimeError::Wasm(anyhow::anyhow!("reading {:?}: {}", path, e)))?;
        Self::new(&code, storage, keystore, config)
    }

    /// Call the exported guest function `function` with `input` and
    /// return its output.
    ///
    /// The input is staged into a freshly allocated guest buffer and the
    /// export invoked as `(ptr, len) -> i64`, where the returned value
    /// packs the output as `(len << 32) | ptr`. The input buffer is
    /// freed before returning; the output buffer stays owned by the
    /// guest side.
    pub fn exec(&self, function: &str, input: &[u8]) -> Result<Vec<u8>, RuntimeError> {
        let mut guard = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        let store = &mut *guard;

        let (data, ctx) = self.memory.data_and_store_mut(&mut *store);
        let input_ptr = ctx.allocator.allocate(data, input.len() as u32)?;
        memory::write_bytes(data, input_ptr, input)?;

        let func = self
            .instance
            .get_func(&mut *store, function)
            .ok_or_else(|| RuntimeError::MissingExport(function.to_string()))?;
        let func = func
            .typed::<(i32, i32), i64>(&*store)
            .map_err(|_| RuntimeError::MissingExport(function.to_string()))?;

        let call_result = func.call(&mut *store, (input_ptr as i32, input.len() as i32));

        // The input buffer is dead regardless of how the call went.
        let (data, ctx) = self.memory.data_and_store_mut(&mut *store);
        if let Err(e) = ctx.allocator.deallocate(data, input_ptr) {
            log::error!("exec: could not free input buffer: {}", e);
        }

        let packed = call_result.map_err(map_guest_error)? as u64;
        let output_ptr = packed as u32;
        let output_len = (packed >> 32) as u32;
        memory::read_bytes(self.memory.data(&*store), output_ptr, output_len)
    }
}

/// Map a failed guest call into a runtime error. Traps raised by the
/// allocator inside a host function keep their identity; everything
/// else is reported as the guest trapping.
fn map_guest_error(err: anyhow::Error) -> RuntimeError {
    if let Some(alloc) = err.chain().find_map(|e| e.downcast_ref::<AllocatorError>()) {
        return RuntimeError::Allocator(alloc.clone());
    }
    RuntimeError::GuestTrap(format!("{:#}", err))
}
