//! rc4_hex - RC4 stream cipher with hex codec helpers
//!
//! Implements the RC4 key schedule and keystream generator together with the
//! bytes<->hex conversions needed to move ciphertext around as printable text.
//!
//! RC4 is a legacy cipher and is cryptographically broken. This crate exists
//! for compatibility with systems that still speak it, not as a security
//! recommendation.

pub mod crypto;
pub mod types;

pub use crypto::encoding::{from_hex, to_hex};
pub use crypto::rc4::rc4_apply;
pub use crypto::{decrypt_from_hex, encrypt_to_hex};
pub use types::{CipherError, Result};
