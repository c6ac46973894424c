//! The Base64 transcoding core
//!
//! This module contains the codec itself: the standard alphabet and its
//! inverse lookup, the encoder, and the decoder, per RFC 4648. Both
//! directions are pure and stateless; every call returns a buffer owned by
//! the caller.

mod alphabet;
mod decode;
mod encode;

pub use alphabet::{PAD, STANDARD_ALPHABET};
pub use decode::decode;
pub use encode::{encode, encoded_len};

/// Interface version of this library, as a YYYYMMDD build stamp
pub const INTERFACE_VERSION: i64 = 20250318;

/// Get the interface version, for compatibility checks by embedding callers
pub fn interface_version() -> i64 {
    INTERFACE_VERSION
}
