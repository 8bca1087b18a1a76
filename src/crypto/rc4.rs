//! RC4 encryption/decryption

use crate::types::{CipherError, Result};

/// Build the 256-entry permutation state from a key (KSA).
///
/// The key is read-only and not retained; only its bytes and length matter,
/// so equal keys always yield the same permutation. An empty key is rejected
/// up front; the schedule would otherwise index the key modulo zero.
pub fn key_schedule(key: &[u8]) -> Result<[u8; 256]> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    // Identity permutation, then 256 key-driven swaps
    let mut s = [0u8; 256];
    for (i, x) in s.iter_mut().enumerate() {
        *x = i as u8;
    }

    let mut j: usize = 0;
    for i in 0..256 {
        j = (j + s[i] as usize + key[i % key.len()] as usize) % 256;
        s.swap(i, j);
    }

    Ok(s)
}

/// XOR the keystream over `data` in place (PRGA).
///
/// Advances the state destructively: a second call continues the stream where
/// the first left off rather than restarting it. To restart, reschedule with
/// [`key_schedule`]. A zero-length buffer is a no-op.
pub fn keystream_xor(s: &mut [u8; 256], data: &mut [u8]) {
    let mut i: usize = 0;
    let mut j: usize = 0;

    for byte in data.iter_mut() {
        i = (i + 1) % 256;
        j = (j + s[i] as usize) % 256;
        s.swap(i, j);
        *byte ^= s[(s[i] as usize + s[j] as usize) % 256];
    }
}

/// RC4 encryption/decryption (symmetric).
///
/// Transforms a fresh copy of `data` under `key` and returns the new buffer;
/// the caller's input is never mutated. The keystream depends only on the
/// key, so applying this twice with the same key returns the original input.
pub fn rc4_apply(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut s = key_schedule(key)?;

    let mut out = Vec::new();
    out.try_reserve_exact(data.len())
        .map_err(|_| CipherError::Alloc(data.len()))?;
    out.extend_from_slice(data);

    keystream_xor(&mut s, &mut out);
    Ok(out)
}
