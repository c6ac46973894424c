//! Base64 encoding
//!
//! This module implements the byte-to-text half of the codec.

use crate::error::Result;

use super::alphabet::{PAD, STANDARD_ALPHABET};

/// Number of characters needed to encode `input_len` bytes
///
/// Every group of 3 input bytes becomes 4 output characters, and the final
/// partial group is padded out, so the encoded length is always
/// `4 * ceil(input_len / 3)`.
pub fn encoded_len(input_len: usize) -> usize {
    4 * input_len.div_ceil(3)
}

/// Encode a byte buffer as Base64 text
///
/// The output is always `encoded_len(input.len())` characters long, drawn
/// from the standard alphabet with `=` padding. Encoding an empty buffer
/// yields an empty string. The only failure is
/// [`AllocationFailure`](crate::Error::AllocationFailure) when the output
/// buffer cannot be reserved.
pub fn encode<T>(input: T) -> Result<String>
where
    T: AsRef<[u8]>,
{
    let input = input.as_ref();

    let mut output = String::new();
    output.try_reserve_exact(encoded_len(input.len()))?;

    let mut chunks = input.chunks_exact(3);
    for chunk in chunks.by_ref() {
        let triple = (chunk[0] as u32) << 16 | (chunk[1] as u32) << 8 | chunk[2] as u32;

        output.push(STANDARD_ALPHABET[((triple >> 18) & 0x3f) as usize] as char);
        output.push(STANDARD_ALPHABET[((triple >> 12) & 0x3f) as usize] as char);
        output.push(STANDARD_ALPHABET[((triple >> 6) & 0x3f) as usize] as char);
        output.push(STANDARD_ALPHABET[(triple & 0x3f) as usize] as char);
    }

    // Final partial group: the missing bytes are zero-filled for the bit
    // arithmetic, and the characters they would have produced become padding.
    match chunks.remainder() {
        [a] => {
            let triple = (*a as u32) << 16;
            output.push(STANDARD_ALPHABET[((triple >> 18) & 0x3f) as usize] as char);
            output.push(STANDARD_ALPHABET[((triple >> 12) & 0x3f) as usize] as char);
            output.push(PAD as char);
            output.push(PAD as char);
        }
        [a, b] => {
            let triple = (*a as u32) << 16 | (*b as u32) << 8;
            output.push(STANDARD_ALPHABET[((triple >> 18) & 0x3f) as usize] as char);
            output.push(STANDARD_ALPHABET[((triple >> 12) & 0x3f) as usize] as char);
            output.push(STANDARD_ALPHABET[((triple >> 6) & 0x3f) as usize] as char);
            output.push(PAD as char);
        }
        _ => {}
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_full_groups() {
        assert_eq!(encode("Man").unwrap(), "TWFu");
        assert_eq!(encode("ManMan").unwrap(), "TWFuTWFu");
    }

    #[test]
    fn test_encode_one_pad() {
        assert_eq!(encode("Ma").unwrap(), "TWE=");
    }

    #[test]
    fn test_encode_two_pads() {
        assert_eq!(encode("M").unwrap(), "TQ==");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(b"").unwrap(), "");
    }

    #[test]
    fn test_encode_binary_extremes() {
        assert_eq!(encode([0x00u8, 0x00, 0x00]).unwrap(), "AAAA");
        assert_eq!(encode([0xffu8, 0xff, 0xff]).unwrap(), "////");
        assert_eq!(encode([0xfbu8, 0xef, 0xbe]).unwrap(), "++++");
    }

    #[test]
    fn test_encode_text() {
        assert_eq!(encode("hello world~\n").unwrap(), "aGVsbG8gd29ybGR+Cg==");
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 4);
        assert_eq!(encoded_len(2), 4);
        assert_eq!(encoded_len(3), 4);
        assert_eq!(encoded_len(4), 8);
        assert_eq!(encoded_len(6), 8);
        assert_eq!(encoded_len(7), 12);
    }
}
