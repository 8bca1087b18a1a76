//! Common types and errors

use thiserror::Error;

/// Failures reported by the cipher and codec operations.
///
/// Every failure is scoped to the single call that raised it; nothing is
/// retried internally and no partial output buffer is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("key must not be empty")]
    EmptyKey,

    #[error("malformed hex input: {reason}")]
    MalformedHex { reason: HexErrorReason },

    #[error("allocation of {0} bytes failed")]
    Alloc(usize),
}

/// Why a hex string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexErrorReason {
    /// The string's length is odd, leaving a trailing partial byte.
    OddLength(usize),
    /// A byte outside `[0-9a-fA-F]` at the given position.
    InvalidDigit { pos: usize, byte: u8 },
}

impl std::fmt::Display for HexErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexErrorReason::OddLength(len) => write!(f, "odd length {}", len),
            HexErrorReason::InvalidDigit { pos, byte } => {
                write!(f, "invalid digit {:#04x} at position {}", byte, pos)
            }
        }
    }
}

/// Convenience Result type alias for CipherError.
pub type Result<T> = std::result::Result<T, CipherError>;
