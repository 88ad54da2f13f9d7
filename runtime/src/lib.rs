//! `basalt-runtime` — the WASM host runtime of the basalt node.
//!
//! Hosts a guest runtime inside Wasmtime and bridges it to the node's
//! state trie and keystore through the `env.ext_*` host ABI:
//!
//! - **Allocator:** a freeing bump heap allocator managing temporary
//!   buffers inside the guest's linear memory
//! - **Host ABI:** the `ext_*` imports for storage, hashing, signatures,
//!   and memory management the guest links against
//! - **Façade:** [`Runtime::exec`] — serialized `(name, bytes) -> bytes`
//!   calls into the guest's exports
//!
//! One [`Runtime`] owns one WASM instance; a mutex keeps at most one
//! guest call in flight at a time.

pub mod error;
pub mod config;
pub mod allocator;
pub mod memory;
pub mod context;
pub mod imports;
pub mod runtime;
pub mod version;

pub use error::RuntimeError;
pub use config::RuntimeConfig;
pub use allocator::{AllocatorError, FreeingBumpAllocator, MAX_POSSIBLE_ALLOCATION};
pub use context::{HostContext, SharedKeystore, SharedStorage};
pub use runtime::Runtime;
pub use version::RuntimeVersion;
