//! Cryptographic operations module

pub mod encoding;
pub mod rc4;

pub use encoding::{from_hex, to_hex};
pub use rc4::rc4_apply;

use crate::types::Result;

/// Encrypt with RC4 and render the ciphertext as lowercase hex.
pub fn encrypt_to_hex(key: &[u8], plaintext: &[u8]) -> Result<String> {
    let ciphertext = rc4_apply(key, plaintext)?;
    to_hex(&ciphertext)
}

/// Parse hex ciphertext and decrypt it with RC4.
///
/// The returned bytes carry no encoding guarantee; whether they form valid
/// UTF-8 (or anything else) is the caller's concern.
pub fn decrypt_from_hex(key: &[u8], hex: &str) -> Result<Vec<u8>> {
    let ciphertext = from_hex(hex)?;
    rc4_apply(key, &ciphertext)
}
