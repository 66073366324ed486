//! Error types for IronCDR core operations.

use thiserror::Error;

/// Core error type for CDR encoding/decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation would read or write past the end of the buffer.
    #[error("buffer overflow: required {required} bytes, available {available} bytes")]
    BufferOverflow {
        /// Bytes the operation needed, padding included.
        required: usize,
        /// Bytes left between the position and the end of the buffer.
        available: usize,
    },

    /// A decoded sequence count exceeds the caller's destination capacity.
    #[error("sequence length {count} exceeds destination capacity {capacity}")]
    SequenceTooLong {
        /// Element count found on the wire.
        count: u32,
        /// Capacity of the destination in elements.
        capacity: usize,
    },

    /// The buffer already failed; no further operation is attempted.
    #[error("buffer is in error state")]
    Poisoned,

    /// Element count does not fit the 32-bit length field.
    #[error("length {length} does not fit a 32-bit count")]
    LengthOverflow {
        /// Requested element count.
        length: usize,
    },

    /// Decoded string bytes are not valid UTF-8.
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 {
        /// Offset of the first invalid byte within the string.
        offset: usize,
    },

    /// Alignment request for a width CDR does not define.
    #[error("invalid alignment {alignment}, expected 1, 2, 4 or 8")]
    InvalidAlignment {
        /// Requested alignment.
        alignment: usize,
    },

    /// Encapsulation header carries an unsupported representation id.
    #[error("unknown encapsulation identifier {id:#06x}")]
    UnknownEncapsulation {
        /// Representation identifier read from the stream.
        id: u16,
    },
}

impl Error {
    /// Returns true if this error leaves the buffer in the sticky error state.
    #[must_use]
    pub const fn poisons(&self) -> bool {
        matches!(
            self,
            Self::BufferOverflow { .. }
                | Self::SequenceTooLong { .. }
                | Self::Poisoned
                | Self::LengthOverflow { .. }
                | Self::UnknownEncapsulation { .. }
        )
    }
}

/// Result type alias for IronCDR core operations.
pub type Result<T> = std::result::Result<T, Error>;
