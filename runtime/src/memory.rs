//! Bounds-checked access to guest linear memory.
//!
//! Host functions receive raw `i32` pointers from the guest; everything
//! that touches linear memory goes through these helpers so an escaped
//! range surfaces as [`RuntimeError::MemoryOutOfBounds`] instead of a
//! host-side panic. All integers on the boundary are little-endian.

use crate::error::RuntimeError;

/// Read `len` bytes at `ptr`.
pub fn read_bytes(mem: &[u8], ptr: u32, len: u32) -> Result<Vec<u8>, RuntimeError> {
    let start = ptr as usize;
    let end = start
        .checked_add(len as usize)
        .ok_or_else(|| out_of_bounds(ptr, len))?;
    mem.get(start..end)
        .map(|slice| slice.to_vec())
        .ok_or_else(|| out_of_bounds(ptr, len))
}

/// Read exactly `N` bytes at `ptr` into an array.
pub fn read_array<const N: usize>(mem: &[u8], ptr: u32) -> Result<[u8; N], RuntimeError> {
    let start = ptr as usize;
    let end = start
        .checked_add(N)
        .ok_or_else(|| out_of_bounds(ptr, N as u32))?;
    let bytes = mem
        .get(start..end)
        .ok_or_else(|| out_of_bounds(ptr, N as u32))?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Write `data` at `ptr`.
pub fn write_bytes(mem: &mut [u8], ptr: u32, data: &[u8]) -> Result<(), RuntimeError> {
    let start = ptr as usize;
    let end = start
        .checked_add(data.len())
        .ok_or_else(|| out_of_bounds(ptr, data.len() as u32))?;
    let slot = mem
        .get_mut(start..end)
        .ok_or_else(|| out_of_bounds(ptr, data.len() as u32))?;
    slot.copy_from_slice(data);
    Ok(())
}

/// Read a little-endian u32 at `ptr`.
pub fn read_u32(mem: &[u8], ptr: u32) -> Result<u32, RuntimeError> {
    Ok(u32::from_le_bytes(read_array::<4>(mem, ptr)?))
}

/// Write a little-endian u32 at `ptr`.
pub fn write_u32(mem: &mut [u8], ptr: u32, value: u32) -> Result<(), RuntimeError> {
    write_bytes(mem, ptr, &value.to_le_bytes())
}

fn out_of_bounds(ptr: u32, len: u32) -> RuntimeError {
    RuntimeError::MemoryOutOfBounds(format!("range {}..+{}", ptr, len))
}
