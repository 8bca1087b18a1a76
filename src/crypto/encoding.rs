//! Hex encoding and decoding functions

use crate::types::{CipherError, HexErrorReason, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render bytes as lowercase hex, two digits per byte, high nibble first.
///
/// Always twice the input length; the empty input yields the empty string.
pub fn to_hex(data: &[u8]) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(data.len() * 2)
        .map_err(|_| CipherError::Alloc(data.len() * 2))?;

    for &byte in data {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    Ok(out)
}

/// Parse a hex string back into bytes.
///
/// Strict: the length must be even and every character a hex digit (either
/// case). Malformed input is an error; nothing is silently truncated.
pub fn from_hex(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(CipherError::MalformedHex {
            reason: HexErrorReason::OddLength(hex.len()),
        });
    }

    let mut out = Vec::new();
    out.try_reserve_exact(hex.len() / 2)
        .map_err(|_| CipherError::Alloc(hex.len() / 2))?;

    for (i, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
        let high = nibble(pair[0]).ok_or(CipherError::MalformedHex {
            reason: HexErrorReason::InvalidDigit {
                pos: i * 2,
                byte: pair[0],
            },
        })?;
        let low = nibble(pair[1]).ok_or(CipherError::MalformedHex {
            reason: HexErrorReason::InvalidDigit {
                pos: i * 2 + 1,
                byte: pair[1],
            },
        })?;
        out.push((high << 4) | low);
    }

    Ok(out)
}

fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x00, 0xff, 0x1a]).unwrap(), "00ff1a");
        assert_eq!(to_hex(b"").unwrap(), "");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("00ff1a").unwrap(), vec![0x00, 0xff, 0x1a]);
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_odd_length_rejected() {
        assert_eq!(
            from_hex("abc"),
            Err(CipherError::MalformedHex {
                reason: HexErrorReason::OddLength(3),
            })
        );
    }

    #[test]
    fn test_invalid_digit_rejected() {
        assert_eq!(
            from_hex("zz"),
            Err(CipherError::MalformedHex {
                reason: HexErrorReason::InvalidDigit { pos: 0, byte: b'z' },
            })
        );
        // Position points at the offending character, not the pair
        assert_eq!(
            from_hex("00a_"),
            Err(CipherError::MalformedHex {
                reason: HexErrorReason::InvalidDigit { pos: 3, byte: b'_' },
            })
        );
    }

    #[test]
    fn test_uppercase_normalizes() {
        let bytes = from_hex("DEADBEEF").unwrap();
        assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(to_hex(&bytes).unwrap(), "deadbeef");
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::thread_rng();
        for len in [0usize, 1, 16, 255, 1024] {
            let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let encoded = to_hex(&data).unwrap();
            assert_eq!(encoded.len(), len * 2);
            assert_eq!(from_hex(&encoded).unwrap(), data);
        }
    }

    #[test]
    fn test_matches_reference_implementation() {
        let data: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        assert_eq!(to_hex(&data).unwrap(), hex::encode(&data));
        assert_eq!(from_hex(&hex::encode(&data)).unwrap(), data);
    }
}
