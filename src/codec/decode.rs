//! Base64 decoding
//!
//! This module implements the text-to-byte half of the codec, including
//! padding detection and malformed-input rejection.

use log::debug;

use crate::error::{Error, Result};

use super::alphabet::{sextet_value, PAD};

/// Decode Base64 text back into the bytes it encodes
///
/// The input length must be a multiple of 4; the final group may end in one
/// or two `=` padding characters. Decoding an empty input yields an empty
/// vector. Fails with [`InvalidLength`](crate::Error::InvalidLength) on a
/// misaligned input, [`InvalidCharacter`](crate::Error::InvalidCharacter)
/// when a byte is neither an alphabet symbol nor the pad character, and
/// [`AllocationFailure`](crate::Error::AllocationFailure) when the output
/// buffer cannot be reserved. No partial output is ever returned.
pub fn decode<T>(input: T) -> Result<Vec<u8>>
where
    T: AsRef<[u8]>,
{
    let input = input.as_ref();

    if input.len() % 4 != 0 {
        debug!(
            "Rejecting Base64 input: length {} is not a multiple of 4",
            input.len()
        );
        return Err(Error::InvalidLength(input.len()));
    }
    if input.is_empty() {
        return Ok(Vec::new());
    }

    // Padding occupies at most the last two characters.
    let padding = match &input[input.len() - 2..] {
        [PAD, PAD] => 2,
        [_, PAD] => 1,
        _ => 0,
    };
    let output_len = input.len() * 3 / 4 - padding;

    let mut output = Vec::new();
    output.try_reserve_exact(output_len)?;

    for (group, chunk) in input.chunks_exact(4).enumerate() {
        let mut triple: u32 = 0;
        for (offset, &byte) in chunk.iter().enumerate() {
            // A pad character contributes zero bits; the output-length guard
            // below keeps its synthetic bytes out of the result.
            let sextet = if byte == PAD {
                0
            } else {
                sextet_value(byte).ok_or_else(|| {
                    let position = group * 4 + offset;
                    debug!(
                        "Rejecting Base64 input: invalid byte 0x{:02x} at position {}",
                        byte, position
                    );
                    Error::InvalidCharacter { byte, position }
                })?
            };
            triple = triple << 6 | sextet as u32;
        }

        if output.len() < output_len {
            output.push((triple >> 16) as u8);
        }
        if output.len() < output_len {
            output.push((triple >> 8) as u8);
        }
        if output.len() < output_len {
            output.push(triple as u8);
        }
    }

    Ok(output)
}
