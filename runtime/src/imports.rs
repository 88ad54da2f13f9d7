//! Host ABI registration — the `env.ext_*` import surface.
//!
//! Registers every host function the guest runtime links against. Each
//! function resolves the current linear-memory view through the
//! execution context, decodes its pointer arguments, and dispatches to
//! the storage accessor, heap allocator, or keystore.
//!
//! Failure policy: functions with a documented return-code slot report
//! failures through that slot (`u32::MAX` return values, `0xFFFFFFFF`
//! written lengths) and storage I/O errors are logged and reported as
//! absent. Allocator misuse and out-of-range pointers have no slot to
//! report through, so they trap the guest.

use anyhow::{anyhow, Result};
use wasmtime::{Caller, Linker, Memory};

use basalt_hostapi::crypto;
use basalt_primitives::{hashing, trie};

use crate::context::HostContext;
use crate::error::RuntimeError;
use crate::memory::{read_array, read_bytes, read_u32, write_bytes, write_u32};

/// Import module name the guest links against.
pub const HOST_MODULE: &str = "env";

/// Sentinel for a storage lookup that found nothing.
const ABSENT: u32 = u32::MAX;

/// Register the full host ABI with the linker. Every name must be
/// present — guests import the whole table and instantiation fails on
/// any hole.
pub fn register_host_functions(linker: &mut Linker<HostContext>) -> Result<(), RuntimeError> {
    register_memory_fns(linker)?;
    register_print_fns(linker)?;
    register_storage_fns(linker)?;
    register_child_storage_fns(linker)?;
    register_hashing_fns(linker)?;
    register_crypto_fns(linker)?;
    register_offchain_stubs(linker)?;
    Ok(())
}

/// The instance's linear memory, re-resolved on every host call.
fn memory_of(caller: &Caller<'_, HostContext>) -> Result<Memory> {
    caller
        .data()
        .memory
        .ok_or_else(|| anyhow!("no linear memory attached to the execution context"))
}

// ── Guest heap ──

fn register_memory_fns(linker: &mut Linker<HostContext>) -> Result<(), RuntimeError> {
    linker.func_wrap(
        HOST_MODULE,
        "ext_malloc",
        |mut caller: Caller<'_, HostContext>, size: i32| -> Result<i32> {
            log::trace!("[ext_malloc] size={}", size);
            let mem = memory_of(&caller)?;
            let (data, ctx) = mem.data_and_store_mut(&mut caller);
            let ptr = ctx.allocator.allocate(data, size as u32)?;
            Ok(ptr as i32)
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_free",
        |mut caller: Caller<'_, HostContext>, ptr: i32| -> Result<()> {
            log::trace!("[ext_free] ptr={}", ptr);
            let mem = memory_of(&caller)?;
            let (data, ctx) = mem.data_and_store_mut(&mut caller);
            ctx.allocator.deallocate(data, ptr as u32)?;
            Ok(())
        },
    )?;

    Ok(())
}

// ── Logging ──

fn register_print_fns(linker: &mut Linker<HostContext>) -> Result<(), RuntimeError> {
    linker.func_wrap(
        HOST_MODULE,
        "ext_print_utf8",
        |caller: Caller<'_, HostContext>, ptr: i32, len: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let bytes = read_bytes(mem.data(&caller), ptr as u32, len as u32)?;
            log::info!("[ext_print_utf8] {}", String::from_utf8_lossy(&bytes));
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_print_hex",
        |caller: Caller<'_, HostContext>, ptr: i32, len: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let bytes = read_bytes(mem.data(&caller), ptr as u32, len as u32)?;
            log::info!("[ext_print_hex] 0x{}", hex::encode(bytes));
            Ok(())
        },
    )?;

    linker.func_wrap(HOST_MODULE, "ext_print_num", |value: i64| {
        log::info!("[ext_print_num] {}", value);
    })?;

    Ok(())
}

// ── Flat storage ──

fn register_storage_fns(linker: &mut Linker<HostContext>) -> Result<(), RuntimeError> {
    linker.func_wrap(
        HOST_MODULE,
        "ext_set_storage",
        |caller: Caller<'_, HostContext>,
         key_ptr: i32,
         key_len: i32,
         value_ptr: i32,
         value_len: i32|
         -> Result<()> {
            let mem = memory_of(&caller)?;
            let (key, value) = {
                let data = mem.data(&caller);
                (
                    read_bytes(data, key_ptr as u32, key_len as u32)?,
                    read_bytes(data, value_ptr as u32, value_len as u32)?,
                )
            };
            log::trace!(
                "[ext_set_storage] key=0x{} value_len={}",
                hex::encode(&key),
                value.len()
            );
            if let Err(e) = caller.data().storage_mut().set(&key, &value) {
                log::error!("[ext_set_storage] {}", e);
            }
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_clear_storage",
        |caller: Caller<'_, HostContext>, key_ptr: i32, key_len: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let key = read_bytes(mem.data(&caller), key_ptr as u32, key_len as u32)?;
            log::trace!("[ext_clear_storage] key=0x{}", hex::encode(&key));
            if let Err(e) = caller.data().storage_mut().clear(&key) {
                log::error!("[ext_clear_storage] {}", e);
            }
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_clear_prefix",
        |caller: Caller<'_, HostContext>, prefix_ptr: i32, prefix_len: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let prefix = read_bytes(mem.data(&caller), prefix_ptr as u32, prefix_len as u32)?;
            log::trace!("[ext_clear_prefix] prefix=0x{}", hex::encode(&prefix));
            let ctx = caller.data();
            let mut storage = ctx.storage_mut();
            match storage.entries() {
                Ok(entries) => {
                    for (key, _) in entries {
                        if key.starts_with(&prefix) {
                            if let Err(e) = storage.clear(&key) {
                                log::error!("[ext_clear_prefix] {}", e);
                            }
                        }
                    }
                }
                Err(e) => log::error!("[ext_clear_prefix] {}", e),
            }
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_get_storage_into",
        |mut caller: Caller<'_, HostContext>,
         key_ptr: i32,
         key_len: i32,
         value_ptr: i32,
         value_len: i32,
         value_offset: i32|
         -> Result<i32> {
            let mem = memory_of(&caller)?;
            let key = read_bytes(mem.data(&caller), key_ptr as u32, key_len as u32)?;
            let value = match caller.data().storage().get(&key) {
                Ok(Some(value)) => value,
                Ok(None) => {
                    log::trace!("[ext_get_storage_into] key=0x{} absent", hex::encode(&key));
                    return Ok(ABSENT as i32);
                }
                Err(e) => {
                    log::warn!("[ext_get_storage_into] {}", e);
                    return Ok(ABSENT as i32);
                }
            };
            if value.len() > value_len as usize {
                log::trace!("[ext_get_storage_into] value exceeds the provided buffer");
                return Ok(0);
            }
            let offset = (value_offset as usize).min(value.len());
            let available = value.len() - offset;
            let to_copy = available.min(value_len as usize);
            write_bytes(
                mem.data_mut(&mut caller),
                value_ptr as u32,
                &value[offset..offset + to_copy],
            )?;
            Ok(available as i32)
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_get_allocated_storage",
        |mut caller: Caller<'_, HostContext>,
         key_ptr: i32,
         key_len: i32,
         written_out: i32|
         -> Result<i32> {
            let mem = memory_of(&caller)?;
            let key = read_bytes(mem.data(&caller), key_ptr as u32, key_len as u32)?;
            log::trace!("[ext_get_allocated_storage] key=0x{}", hex::encode(&key));

            let lookup = caller.data().storage().get(&key);
            let value = match lookup {
                Ok(Some(value)) if value.len() < u32::MAX as usize => value,
                Ok(Some(_)) => {
                    log::error!("[ext_get_allocated_storage] value length exceeds u32");
                    write_u32(mem.data_mut(&mut caller), written_out as u32, ABSENT)?;
                    return Ok(0);
                }
                Ok(None) => {
                    write_u32(mem.data_mut(&mut caller), written_out as u32, ABSENT)?;
                    return Ok(0);
                }
                Err(e) => {
                    log::warn!("[ext_get_allocated_storage] {}", e);
                    write_u32(mem.data_mut(&mut caller), written_out as u32, ABSENT)?;
                    return Ok(0);
                }
            };

            let (data, ctx) = mem.data_and_store_mut(&mut caller);
            let ptr = match ctx.allocator.allocate(data, value.len() as u32) {
                Ok(ptr) => ptr,
                Err(e) => {
                    log::error!("[ext_get_allocated_storage] {}", e);
                    write_u32(data, written_out as u32, ABSENT)?;
                    return Ok(0);
                }
            };
            write_bytes(data, ptr, &value)?;
            write_u32(data, written_out as u32, value.len() as u32)?;
            // The guest owns the buffer now and frees it via ext_free.
            Ok(ptr as i32)
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_storage_root",
        |mut caller: Caller<'_, HostContext>, result_ptr: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let root = match caller.data().storage_mut().root() {
                Ok(root) => root,
                Err(e) => {
                    log::error!("[ext_storage_root] {}", e);
                    return Ok(());
                }
            };
            write_bytes(mem.data_mut(&mut caller), result_ptr as u32, &root)?;
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_storage_changes_root",
        |_a: i32, _b: i32, _c: i32| -> i32 {
            log::debug!("[ext_storage_changes_root] not implemented, returning 0");
            0
        },
    )?;

    Ok(())
}

// ── Child storage ──

fn register_child_storage_fns(linker: &mut Linker<HostContext>) -> Result<(), RuntimeError> {
    linker.func_wrap(
        HOST_MODULE,
        "ext_set_child_storage",
        |caller: Caller<'_, HostContext>,
         storage_key_ptr: i32,
         storage_key_len: i32,
         key_ptr: i32,
         key_len: i32,
         value_ptr: i32,
         value_len: i32|
         -> Result<()> {
            let mem = memory_of(&caller)?;
            let (storage_key, key, value) = {
                let data = mem.data(&caller);
                (
                    read_bytes(data, storage_key_ptr as u32, storage_key_len as u32)?,
                    read_bytes(data, key_ptr as u32, key_len as u32)?,
                    read_bytes(data, value_ptr as u32, value_len as u32)?,
                )
            };
            if let Err(e) = caller.data().storage_mut().set_child(&storage_key, &key, &value) {
                log::error!("[ext_set_child_storage] {}", e);
            }
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_get_child_storage_into",
        |mut caller: Caller<'_, HostContext>,
         storage_key_ptr: i32,
         storage_key_len: i32,
         key_ptr: i32,
         key_len: i32,
         value_ptr: i32,
         value_len: i32,
         value_offset: i32|
         -> Result<i32> {
            let mem = memory_of(&caller)?;
            let (storage_key, key) = {
                let data = mem.data(&caller);
                (
                    read_bytes(data, storage_key_ptr as u32, storage_key_len as u32)?,
                    read_bytes(data, key_ptr as u32, key_len as u32)?,
                )
            };
            let value = match caller.data().storage().get_child(&storage_key, &key) {
                Ok(Some(value)) => value,
                Ok(None) => return Ok(ABSENT as i32),
                Err(e) => {
                    log::warn!("[ext_get_child_storage_into] {}", e);
                    return Ok(ABSENT as i32);
                }
            };
            if value.len() > value_len as usize {
                return Ok(0);
            }
            let offset = (value_offset as usize).min(value.len());
            let available = value.len() - offset;
            let to_copy = available.min(value_len as usize);
            write_bytes(
                mem.data_mut(&mut caller),
                value_ptr as u32,
                &value[offset..offset + to_copy],
            )?;
            Ok(available as i32)
        },
    )?;

    Ok(())
}

// ── Hashing ──

fn register_hashing_fns(linker: &mut Linker<HostContext>) -> Result<(), RuntimeError> {
    linker.func_wrap(
        HOST_MODULE,
        "ext_blake2_256",
        |mut caller: Caller<'_, HostContext>, data_ptr: i32, len: i32, out: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let data = mem.data_mut(&mut caller);
            let input = read_bytes(data, data_ptr as u32, len as u32)?;
            write_bytes(data, out as u32, &hashing::blake2_256(&input))?;
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_blake2_128",
        |mut caller: Caller<'_, HostContext>, data_ptr: i32, len: i32, out: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let data = mem.data_mut(&mut caller);
            let input = read_bytes(data, data_ptr as u32, len as u32)?;
            write_bytes(data, out as u32, &hashing::blake2_128(&input))?;
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_keccak_256",
        |mut caller: Caller<'_, HostContext>, data_ptr: i32, len: i32, out: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let data = mem.data_mut(&mut caller);
            let input = read_bytes(data, data_ptr as u32, len as u32)?;
            write_bytes(data, out as u32, &hashing::keccak_256(&input))?;
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_twox_64",
        |mut caller: Caller<'_, HostContext>, data_ptr: i32, len: i32, out: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let data = mem.data_mut(&mut caller);
            let input = read_bytes(data, data_ptr as u32, len as u32)?;
            write_bytes(data, out as u32, &hashing::twox_64(&input))?;
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_twox_128",
        |mut caller: Caller<'_, HostContext>, data_ptr: i32, len: i32, out: i32| -> Result<()> {
            let mem = memory_of(&caller)?;
            let data = mem.data_mut(&mut caller);
            let input = read_bytes(data, data_ptr as u32, len as u32)?;
            write_bytes(data, out as u32, &hashing::twox_128(&input))?;
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_blake2_256_enumerated_trie_root",
        |mut caller: Caller<'_, HostContext>,
         values_ptr: i32,
         lens_ptr: i32,
         lens_len: i32,
         result_ptr: i32|
         -> Result<()> {
            let mem = memory_of(&caller)?;
            let data = mem.data_mut(&mut caller);
            let mut values = Vec::with_capacity(lens_len as usize);
            let mut position = 0u32;
            for index in 0..lens_len as u32 {
                let len = read_u32(data, lens_ptr as u32 + index * 4)?;
                values.push(read_bytes(data, values_ptr as u32 + position, len)?);
                position = position
                    .checked_add(len)
                    .ok_or_else(|| anyhow!("enumerated values overflow linear memory"))?;
            }
            let slices: Vec<&[u8]> = values.iter().map(|v| v.as_slice()).collect();
            let root = trie::enumerated_trie_root(&slices);
            write_bytes(data, result_ptr as u32, &root)?;
            Ok(())
        },
    )?;

    Ok(())
}

// ── Keys and signatures ──

fn register_crypto_fns(linker: &mut Linker<HostContext>) -> Result<(), RuntimeError> {
    linker.func_wrap(
        HOST_MODULE,
        "ext_sr25519_generate",
        |mut caller: Caller<'_, HostContext>,
         _id_ptr: i32,
         seed_ptr: i32,
         seed_len: i32,
         out: i32|
         -> Result<()> {
            let mem = memory_of(&caller)?;
            let seed = read_bytes(mem.data(&caller), seed_ptr as u32, seed_len as u32)?;
            let public = caller
                .data()
                .keystore_mut()
                .generate_sr25519(&seed)
                .map_err(|e| anyhow!("ext_sr25519_generate: {}", e))?;
            write_bytes(mem.data_mut(&mut caller), out as u32, &public)?;
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_ed25519_generate",
        |mut caller: Caller<'_, HostContext>,
         _id_ptr: i32,
         seed_ptr: i32,
         seed_len: i32,
         out: i32|
         -> Result<()> {
            let mem = memory_of(&caller)?;
            let seed = read_bytes(mem.data(&caller), seed_ptr as u32, seed_len as u32)?;
            let public = caller
                .data()
                .keystore_mut()
                .generate_ed25519(&seed)
                .map_err(|e| anyhow!("ext_ed25519_generate: {}", e))?;
            write_bytes(mem.data_mut(&mut caller), out as u32, &public)?;
            Ok(())
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_sr25519_sign",
        |mut caller: Caller<'_, HostContext>,
         _id_ptr: i32,
         pubkey_ptr: i32,
         msg_ptr: i32,
         msg_len_ptr: i32,
         out: i32|
         -> Result<i32> {
            let mem = memory_of(&caller)?;
            let (public, msg) = {
                let data = mem.data(&caller);
                let public = read_array::<32>(data, pubkey_ptr as u32)?;
                let msg_len = read_u32(data, msg_len_ptr as u32)?;
                (public, read_bytes(data, msg_ptr as u32, msg_len)?)
            };
            let signature = match caller.data().keystore().sign_sr25519(&public, &msg) {
                Ok(signature) => signature,
                Err(e) => {
                    log::warn!("[ext_sr25519_sign] {}", e);
                    return Ok(1);
                }
            };
            write_bytes(mem.data_mut(&mut caller), out as u32, &signature)?;
            Ok(0)
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_ed25519_sign",
        |mut caller: Caller<'_, HostContext>,
         _id_ptr: i32,
         pubkey_ptr: i32,
         msg_ptr: i32,
         msg_len_ptr: i32,
         out: i32|
         -> Result<i32> {
            let mem = memory_of(&caller)?;
            let (public, msg) = {
                let data = mem.data(&caller);
                let public = read_array::<32>(data, pubkey_ptr as u32)?;
                let msg_len = read_u32(data, msg_len_ptr as u32)?;
                (public, read_bytes(data, msg_ptr as u32, msg_len)?)
            };
            let signature = match caller.data().keystore().sign_ed25519(&public, &msg) {
                Ok(signature) => signature,
                Err(e) => {
                    log::warn!("[ext_ed25519_sign] {}", e);
                    return Ok(1);
                }
            };
            write_bytes(mem.data_mut(&mut caller), out as u32, &signature)?;
            Ok(0)
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_sr25519_verify",
        |caller: Caller<'_, HostContext>,
         msg_ptr: i32,
         msg_len: i32,
         sig_ptr: i32,
         pubkey_ptr: i32|
         -> Result<i32> {
            let mem = memory_of(&caller)?;
            let data = mem.data(&caller);
            let msg = read_bytes(data, msg_ptr as u32, msg_len as u32)?;
            let sig = read_array::<64>(data, sig_ptr as u32)?;
            let public = read_array::<32>(data, pubkey_ptr as u32)?;
            Ok(if crypto::sr25519_verify(&msg, &sig, &public) { 0 } else { 1 })
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_ed25519_verify",
        |caller: Caller<'_, HostContext>,
         msg_ptr: i32,
         msg_len: i32,
         sig_ptr: i32,
         pubkey_ptr: i32|
         -> Result<i32> {
            let mem = memory_of(&caller)?;
            let data = mem.data(&caller);
            let msg = read_bytes(data, msg_ptr as u32, msg_len as u32)?;
            let sig = read_array::<64>(data, sig_ptr as u32)?;
            let public = read_array::<32>(data, pubkey_ptr as u32)?;
            Ok(if crypto::ed25519_verify(&msg, &sig, &public) { 0 } else { 1 })
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_secp256k1_ecdsa_recover",
        |mut caller: Caller<'_, HostContext>,
         msg_ptr: i32,
         sig_ptr: i32,
         pubkey_out: i32|
         -> Result<i32> {
            let mem = memory_of(&caller)?;
            let (msg_hash, sig) = {
                let data = mem.data(&caller);
                (
                    read_array::<32>(data, msg_ptr as u32)?,
                    read_array::<65>(data, sig_ptr as u32)?,
                )
            };
            match crypto::secp256k1_ecdsa_recover(&msg_hash, &sig) {
                Ok(public) => {
                    write_bytes(mem.data_mut(&mut caller), pubkey_out as u32, &public)?;
                    Ok(0)
                }
                Err(e) => {
                    log::trace!("[ext_secp256k1_ecdsa_recover] {}", e);
                    Ok(1)
                }
            }
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_sr25519_public_keys",
        |mut caller: Caller<'_, HostContext>, _id_ptr: i32, result_len_ptr: i32| -> Result<i32> {
            let keys = caller.data().keystore().sr25519_public_keys();
            let mem = memory_of(&caller)?;
            let (data, ctx) = mem.data_and_store_mut(&mut caller);
            let ptr = match ctx.allocator.allocate(data, (keys.len() * 32) as u32) {
                Ok(ptr) => ptr,
                Err(e) => {
                    log::error!("[ext_sr25519_public_keys] {}", e);
                    return Ok(-1);
                }
            };
            for (index, key) in keys.iter().enumerate() {
                write_bytes(data, ptr + (index * 32) as u32, key)?;
            }
            write_u32(data, result_len_ptr as u32, keys.len() as u32)?;
            Ok(ptr as i32)
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_ed25519_public_keys",
        |mut caller: Caller<'_, HostContext>, _id_ptr: i32, result_len_ptr: i32| -> Result<i32> {
            let keys = caller.data().keystore().ed25519_public_keys();
            let mem = memory_of(&caller)?;
            let (data, ctx) = mem.data_and_store_mut(&mut caller);
            let ptr = match ctx.allocator.allocate(data, (keys.len() * 32) as u32) {
                Ok(ptr) => ptr,
                Err(e) => {
                    log::error!("[ext_ed25519_public_keys] {}", e);
                    return Ok(-1);
                }
            };
            for (index, key) in keys.iter().enumerate() {
                write_bytes(data, ptr + (index * 32) as u32, key)?;
            }
            write_u32(data, result_len_ptr as u32, keys.len() as u32)?;
            Ok(ptr as i32)
        },
    )?;

    Ok(())
}

// ── Offchain and network placeholders ──
//
// Reserved names that must exist in the import table. Each one logs a
// warning and reports "nothing here".

fn register_offchain_stubs(linker: &mut Linker<HostContext>) -> Result<(), RuntimeError> {
    linker.func_wrap(HOST_MODULE, "ext_is_validator", || -> i32 {
        log::warn!("[ext_is_validator] not implemented, returning 0");
        0
    })?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_local_storage_get",
        |_kind: i32, _key: i32, _key_len: i32, _value_len: i32| -> i32 {
            log::warn!("[ext_local_storage_get] not implemented, returning 0");
            0
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_local_storage_set",
        |_kind: i32, _key: i32, _key_len: i32, _value: i32, _value_len: i32| {
            log::warn!("[ext_local_storage_set] not implemented");
        },
    )?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_local_storage_compare_and_set",
        |_kind: i32,
         _key: i32,
         _key_len: i32,
         _old_value: i32,
         _old_value_len: i32,
         _new_value: i32,
         _new_value_len: i32|
         -> i32 {
            log::warn!("[ext_local_storage_compare_and_set] not implemented, returning 0");
            0
        },
    )?;

    linker.func_wrap(HOST_MODULE, "ext_network_state", |_written_out: i32| -> i32 {
        log::warn!("[ext_network_state] not implemented, returning 0");
        0
    })?;

    linker.func_wrap(
        HOST_MODULE,
        "ext_submit_transaction",
        |_data: i32, _len: i32| -> i32 {
            log::warn!("[ext_submit_transaction] not implemented, returning 0");
            0
        },
    )?;

    Ok(())
}
