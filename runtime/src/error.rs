//! Runtime error types.

use basalt_hostapi::StorageError;

use crate::allocator::AllocatorError;

/// Top-level error type for the runtime crate.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Wasmtime compilation, linking, or instantiation error.
    #[error("wasm engine error: {0}")]
    Wasm(#[from] anyhow::Error),

    /// The requested export does not exist or has the wrong signature.
    #[error("missing or mistyped export `{0}`")]
    MissingExport(String),

    /// The guest trapped during execution.
    #[error("guest trapped: {0}")]
    GuestTrap(String),

    /// Guest heap exhausted or misused.
    #[error(transparent)]
    Allocator(#[from] AllocatorError),

    /// A pointer/length pair escaped guest linear memory.
    #[error("guest memory access out of bounds: {0}")]
    MemoryOutOfBounds(String),

    /// Storage backend failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
