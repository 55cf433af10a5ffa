use thiserror::Error;

use crate::MAX_DATA_LEN;

/// Reasons an `encode` call can fail. No partial barcode is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The input is empty or longer than [MAX_DATA_LEN] bytes.
    #[error("data length {len} is outside the accepted range 1..={}", MAX_DATA_LEN)]
    DataLengthExceeded { len: usize },

    /// The byte at `position` cannot be represented by any code set.
    #[error("no code set available for byte {byte:#04x} at position {position}")]
    CharacterInvalid { byte: u8, position: usize },

    /// A code C pair was requested for something other than two digits.
    #[error("argument {0:#04x} {1:#04x} does not consist of digits")]
    ArgumentInvalid(u8, u8),
}

/// Returned by a second call to [initialize](crate::initialize). The tables
/// built by the first call are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("code tables are already initialized")]
pub struct AlreadyInitialized;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid layout: {rows} rows x {cols} columns")]
    InvalidLayout { rows: u8, cols: u8 },

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
