//! Guest runtime version decoding and well-known entry-point names.
//!
//! The guest's `Core_version` export returns a SCALE-encoded version
//! record; node-side callers decode it to find out which APIs the guest
//! implements before driving block production against it.

use codec::{Decode, Encode};

/// Runtime API call reporting the guest's version.
pub const CORE_VERSION: &str = "Core_version";
/// Runtime API call opening a block.
pub const CORE_INITIALIZE_BLOCK: &str = "Core_initialize_block";
/// Runtime API call executing a full block.
pub const CORE_EXECUTE_BLOCK: &str = "Core_execute_block";
/// Runtime API call returning the runtime metadata blob.
pub const METADATA_METADATA: &str = "Metadata_metadata";
/// Runtime API call validating a transaction for the pool.
pub const TAGGED_TRANSACTION_QUEUE_VALIDATE_TRANSACTION: &str =
    "TaggedTransactionQueue_validate_transaction";
/// Runtime API call listing the grandpa authority set.
pub const GRANDPA_AUTHORITIES: &str = "GrandpaApi_grandpa_authorities";
/// Runtime API call returning the babe configuration.
pub const BABE_API_CONFIGURATION: &str = "BabeApi_configuration";
/// Runtime API call producing inherent extrinsics.
pub const BLOCK_BUILDER_INHERENT_EXTRINSICS: &str = "BlockBuilder_inherent_extrinsics";
/// Runtime API call applying one extrinsic.
pub const BLOCK_BUILDER_APPLY_EXTRINSIC: &str = "BlockBuilder_apply_extrinsic";
/// Runtime API call sealing the open block.
pub const BLOCK_BUILDER_FINALIZE_BLOCK: &str = "BlockBuilder_finalize_block";

/// Identifier of a runtime API: the first 8 bytes of the hashed API name.
pub type ApiId = [u8; 8];

/// The version record returned by `Core_version`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct RuntimeVersion {
    pub spec_name: Vec<u8>,
    pub impl_name: Vec<u8>,
    pub authoring_version: u32,
    pub spec_version: u32,
    pub impl_version: u32,
    /// Supported APIs and the version of each.
    pub apis: Vec<(ApiId, u32)>,
}

impl RuntimeVersion {
    /// Decode the response bytes of a `Core_version` call.
    pub fn decode_from(bytes: &[u8]) -> Result<Self, codec::Error> {
        RuntimeVersion::decode(&mut &bytes[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuntimeVersion {
        RuntimeVersion {
            spec_name: b"basalt-node".to_vec(),
            impl_name: b"basalt".to_vec(),
            authoring_version: 1,
            spec_version: 4,
            impl_version: 0,
            apis: vec![(*b"Core\0\0\0\0", 1), (*b"Metadata", 1)],
        }
    }

    #[test]
    fn version_round_trips_through_scale() {
        let version = sample();
        let encoded = version.encode();
        assert_eq!(RuntimeVersion::decode_from(&encoded).unwrap(), version);
    }

    #[test]
    fn encoding_starts_with_compact_name_length() {
        let encoded = sample().encode();
        // Compact length of an 11-byte name is (11 << 2) in one byte.
        assert_eq!(encoded[0], 11 << 2);
        assert_eq!(&encoded[1..12], b"basalt-node");
    }

    #[test]
    fn truncated_input_fails_to_decode() {
        let encoded = sample().encode();
        assert!(RuntimeVersion::decode_from(&encoded[..encoded.len() - 3]).is_err());
    }
}
