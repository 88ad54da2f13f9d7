//! Runtime configuration.

/// Configuration for the WASM host runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Initial linear memory size in 64 KiB pages. The heap allocator's
    /// capacity is the initial memory size.
    pub initial_pages: u32,

    /// Optional upper bound on linear memory growth, in pages.
    pub max_memory_pages: Option<u32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            initial_pages: 1024, // 64 MiB
            max_memory_pages: None,
        }
    }
}
