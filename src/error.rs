//! Error types for the Base64 codec

use thiserror::Error;

/// Errors that can occur while encoding or decoding Base64 data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Decode input length is not a multiple of 4
    #[error("Invalid input length: {0} is not a multiple of 4")]
    InvalidLength(usize),

    /// A byte outside the alphabet, and not the pad character, appeared
    /// where a symbol is required
    #[error("Invalid character 0x{byte:02x} at position {position}")]
    InvalidCharacter {
        /// The offending input byte
        byte: u8,
        /// Byte offset of the character within the input
        position: usize,
    },

    /// The output buffer could not be reserved
    #[error("Allocation failure while reserving the output buffer")]
    AllocationFailure,
}

/// Result type using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::collections::TryReserveError> for Error {
    fn from(_err: std::collections::TryReserveError) -> Self {
        Error::AllocationFailure
    }
}
