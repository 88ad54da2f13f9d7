//! Scheme-partitioned keystore.
//!
//! Keeps keypairs indexed by public key, one partition per signature
//! scheme. The runtime inserts keypairs generated by the guest and looks
//! them up by public key when the guest asks for a signature. Removal is
//! not supported; keys live as long as the keystore.

use std::collections::HashMap;

use ed25519_dalek::Signer;

use crate::crypto::SR25519_SIGNING_CTX;
use crate::error::KeystoreError;

/// A keypair of any supported scheme.
pub enum Keypair {
    Sr25519(Box<schnorrkel::Keypair>),
    Ed25519(Box<ed25519_dalek::SigningKey>),
    Secp256k1(Box<libsecp256k1::SecretKey>),
}

/// In-memory keystore partitioned by scheme.
#[derive(Default)]
pub struct Keystore {
    sr25519: HashMap<[u8; 32], schnorrkel::Keypair>,
    ed25519: HashMap<[u8; 32], ed25519_dalek::SigningKey>,
    secp256k1: HashMap<[u8; 33], libsecp256k1::SecretKey>,
}

impl Keystore {
    /// Create an empty keystore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keypair into its scheme's partition.
    pub fn insert(&mut self, pair: Keypair) {
        match pair {
            Keypair::Sr25519(pair) => {
                self.sr25519.insert(pair.public.to_bytes(), *pair);
            }
            Keypair::Ed25519(key) => {
                self.ed25519.insert(key.verifying_key().to_bytes(), *key);
            }
            Keypair::Secp256k1(secret) => {
                let public = libsecp256k1::PublicKey::from_secret_key(&secret);
                self.secp256k1.insert(public.serialize_compressed(), *secret);
            }
        }
    }

    /// Derive an sr25519 keypair from a 32-byte seed, insert it, and
    /// return the public key.
    pub fn generate_sr25519(&mut self, seed: &[u8]) -> Result<[u8; 32], KeystoreError> {
        let mini = schnorrkel::MiniSecretKey::from_bytes(seed)
            .map_err(|e| KeystoreError::Crypto(e.to_string()))?;
        let pair = mini.expand_to_keypair(schnorrkel::ExpansionMode::Ed25519);
        let public = pair.public.to_bytes();
        self.sr25519.insert(public, pair);
        Ok(public)
    }

    /// Derive an ed25519 keypair from a 32-byte seed, insert it, and
    /// return the public key.
    pub fn generate_ed25519(&mut self, seed: &[u8]) -> Result<[u8; 32], KeystoreError> {
        let seed: [u8; 32] = seed
            .try_into()
            .map_err(|_| KeystoreError::Crypto("ed25519 seed must be 32 bytes".into()))?;
        let key = ed25519_dalek::SigningKey::from_bytes(&seed);
        let public = key.verifying_key().to_bytes();
        self.ed25519.insert(public, key);
        Ok(public)
    }

    /// Sign with the sr25519 keypair stored under `public`.
    pub fn sign_sr25519(&self, public: &[u8; 32], msg: &[u8]) -> Result<[u8; 64], KeystoreError> {
        let pair = self.sr25519.get(public).ok_or(KeystoreError::KeyNotFound)?;
        let ctx = schnorrkel::signing_context(SR25519_SIGNING_CTX);
        Ok(pair.sign(ctx.bytes(msg)).to_bytes())
    }

    /// Sign with the ed25519 keypair stored under `public`.
    pub fn sign_ed25519(&self, public: &[u8; 32], msg: &[u8]) -> Result<[u8; 64], KeystoreError> {
        let key = self.ed25519.get(public).ok_or(KeystoreError::KeyNotFound)?;
        Ok(key.sign(msg).to_bytes())
    }

    /// All sr25519 public keys, sorted.
    pub fn sr25519_public_keys(&self) -> Vec<[u8; 32]> {
        let mut keys: Vec<[u8; 32]> = self.sr25519.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// All ed25519 public keys, sorted.
    pub fn ed25519_public_keys(&self) -> Vec<[u8; 32]> {
        let mut keys: Vec<[u8; 32]> = self.ed25519.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}
