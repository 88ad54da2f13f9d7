//! Signature verification and ECDSA public key recovery.
//!
//! Verification never fails loudly: malformed keys or signatures verify
//! as `false`, because the host ABI reports verification through a
//! return-code slot rather than trapping the guest.

use ed25519_dalek::Verifier;

use crate::error::KeystoreError;

/// Domain separation context for sr25519 signatures.
pub const SR25519_SIGNING_CTX: &[u8] = b"substrate";

/// Verify an sr25519 (schnorrkel) signature.
pub fn sr25519_verify(msg: &[u8], sig: &[u8; 64], public: &[u8; 32]) -> bool {
    let Ok(public) = schnorrkel::PublicKey::from_bytes(public) else {
        return false;
    };
    let Ok(sig) = schnorrkel::Signature::from_bytes(sig) else {
        return false;
    };
    let ctx = schnorrkel::signing_context(SR25519_SIGNING_CTX);
    public.verify(ctx.bytes(msg), &sig).is_ok()
}

/// Verify an ed25519 signature.
pub fn ed25519_verify(msg: &[u8], sig: &[u8; 64], public: &[u8; 32]) -> bool {
    let Ok(key) = ed25519_dalek::VerifyingKey::from_bytes(public) else {
        return false;
    };
    let sig = ed25519_dalek::Signature::from_bytes(sig);
    key.verify(msg, &sig).is_ok()
}

/// Recover the uncompressed secp256k1 public key from a 32-byte message
/// hash and a 65-byte compact signature carrying the recovery id in its
/// last byte. Recovery ids of 27/28 are normalized to 0/1.
pub fn secp256k1_ecdsa_recover(
    msg_hash: &[u8; 32],
    sig: &[u8; 65],
) -> Result<[u8; 65], KeystoreError> {
    let recovery_id = if sig[64] >= 27 { sig[64] - 27 } else { sig[64] };
    let recovery_id = libsecp256k1::RecoveryId::parse(recovery_id)
        .map_err(|e| KeystoreError::Crypto(e.to_string()))?;
    let signature = libsecp256k1::Signature::parse_standard_slice(&sig[..64])
        .map_err(|e| KeystoreError::Crypto(e.to_string()))?;
    let message = libsecp256k1::Message::parse(msg_hash);
    let public = libsecp256k1::recover(&message, &signature, &recovery_id)
        .map_err(|e| KeystoreError::Crypto(e.to_string()))?;
    Ok(public.serialize())
}
