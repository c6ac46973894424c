//! # B64X: Base64 transcoding for Rust
//!
//! `b64x` is a small implementation of the Base64 binary-to-text codec as
//! defined by RFC 4648, converting arbitrary byte sequences into printable
//! text and reversing that transformation exactly.
//!
//! The codec uses the standard alphabet (`A`-`Z`, `a`-`z`, `0`-`9`, `+`,
//! `/`) with `=` padding, and rejects malformed input with typed errors
//! instead of producing partial or corrupted output.
//!
//! ## Features
//!
//! - RFC 4648 standard alphabet (not the URL-safe variant)
//! - Exact round-tripping of arbitrary binary data
//! - Strict rejection of malformed length and non-alphabet characters
//! - Pure, synchronous functions, safe to call from any thread
//! - No runtime dependencies beyond the `log` facade

pub mod codec;
pub mod error;

// Re-export commonly used functions and types for convenience
pub use codec::{decode, encode, encoded_len, interface_version, INTERFACE_VERSION};
pub use error::{Error, Result};
