//! Host-side error types.

/// Errors surfaced by storage backends.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// Backend I/O failure. The runtime reports these to the guest as
    /// the absent-value sentinel rather than trapping it.
    #[error("storage i/o error: {0}")]
    Io(String),

    /// A balance slot held something other than an 8-byte value.
    #[error("malformed balance value for account 0x{0}")]
    MalformedBalance(String),
}

/// Errors surfaced by the keystore and signature operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KeystoreError {
    /// No keypair stored under the given public key.
    #[error("no keypair for the given public key")]
    KeyNotFound,

    /// Key material or signature bytes could not be processed.
    #[error("crypto failure: {0}")]
    Crypto(String),
}
