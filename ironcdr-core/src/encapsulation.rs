//! CDR encapsulation header.
//!
//! A CDR payload exchanged between peers is usually prefixed with a 4-byte
//! header naming its byte order, so the receiver does not have to know it
//! in advance.
//!
//! # Wire Format
//! ```text
//! +0: representation identifier (u16, big-endian)
//! +2: representation options    (u16, big-endian)
//! ```
//!
//! The payload that follows aligns relative to its own first byte, not to
//! the start of the header.

use crate::buffer::CdrBuffer;
use crate::endian::Endianness;
use crate::error::{Error, Result};

/// Representation identifier carried in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RepresentationId {
    /// Plain CDR, big-endian payload.
    CdrBe = 0x0000,
    /// Plain CDR, little-endian payload.
    CdrLe = 0x0001,
}

impl RepresentationId {
    /// Returns the identifier for a payload in the given byte order.
    #[must_use]
    pub const fn for_endianness(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Big => Self::CdrBe,
            Endianness::Little => Self::CdrLe,
        }
    }

    /// Returns the payload byte order this identifier announces.
    #[must_use]
    pub const fn endianness(self) -> Endianness {
        match self {
            Self::CdrBe => Endianness::Big,
            Self::CdrLe => Endianness::Little,
        }
    }

    /// Parses a raw identifier.
    #[must_use]
    pub const fn from_u16(id: u16) -> Option<Self> {
        match id {
            0x0000 => Some(Self::CdrBe),
            0x0001 => Some(Self::CdrLe),
            _ => None,
        }
    }
}

/// The 4-byte encapsulation header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncapsulationHeader {
    /// Representation of the payload.
    pub representation: RepresentationId,
    /// Representation options; zero unless a profile says otherwise.
    pub options: u16,
}

impl EncapsulationHeader {
    /// Encoded length of the header in bytes.
    pub const ENCODED_LENGTH: usize = 4;

    /// Creates a header announcing a payload in the given byte order.
    #[must_use]
    pub const fn new(endianness: Endianness) -> Self {
        Self {
            representation: RepresentationId::for_endianness(endianness),
            options: 0,
        }
    }

    /// Returns the payload byte order.
    #[must_use]
    pub const fn endianness(&self) -> Endianness {
        self.representation.endianness()
    }

    /// Writes the header and prepares `buffer` for the payload: its default
    /// byte order becomes the announced one and alignment restarts after
    /// the header.
    ///
    /// # Errors
    /// Overflow or poison errors from the buffer.
    pub fn encode<B: AsRef<[u8]> + AsMut<[u8]>>(&self, buffer: &mut CdrBuffer<B>) -> Result<()> {
        buffer.ensure(buffer.padding(2) + Self::ENCODED_LENGTH)?;
        buffer.serialize_endian(Endianness::Big, self.representation as u16)?;
        buffer.serialize_endian(Endianness::Big, self.options)?;
        buffer.set_endianness(self.endianness());
        buffer.reset_alignment();
        Ok(())
    }

    /// Reads a header and prepares `buffer` for the payload, like
    /// [`encode`](Self::encode).
    ///
    /// # Errors
    /// [`Error::UnknownEncapsulation`] for an unsupported identifier (the
    /// buffer is poisoned), or overflow/poison errors.
    pub fn decode<B: AsRef<[u8]>>(buffer: &mut CdrBuffer<B>) -> Result<Self> {
        buffer.ensure(buffer.padding(2) + Self::ENCODED_LENGTH)?;
        let id: u16 = buffer.deserialize_endian(Endianness::Big)?;
        let options: u16 = buffer.deserialize_endian(Endianness::Big)?;
        let Some(representation) = RepresentationId::from_u16(id) else {
            return Err(buffer.fail(Error::UnknownEncapsulation { id }));
        };
        let header = Self {
            representation,
            options,
        };
        buffer.set_endianness(header.endianness());
        buffer.reset_alignment();
        Ok(header)
    }
}
