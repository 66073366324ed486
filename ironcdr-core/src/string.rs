//! String transcoding.
//!
//! On the wire a string is a byte sequence whose count includes the
//! terminating null, so `"ab"` travels as count 3 followed by `a b \0`.
//! Nothing distinguishes it from any other byte sequence.

use crate::buffer::CdrBuffer;
use crate::endian::Endianness;
use crate::error::{Error, Result};

impl<B: AsRef<[u8]>> CdrBuffer<B> {
    /// Decodes a string into `dst` using the default byte order.
    ///
    /// `dst.len()` is the string capacity, terminator included. The
    /// transported bytes, terminator included, are copied verbatim and the
    /// count is returned.
    ///
    /// # Errors
    /// [`Error::SequenceTooLong`] if the count exceeds `dst.len()`, plus the
    /// errors of [`deserialize_sequence`](Self::deserialize_sequence).
    #[inline]
    pub fn deserialize_string(&mut self, dst: &mut [u8]) -> Result<usize> {
        self.deserialize_endian_string(self.endianness(), dst)
    }

    /// Decodes a string using an explicit byte order.
    ///
    /// # Errors
    /// See [`deserialize_string`](Self::deserialize_string).
    #[inline]
    pub fn deserialize_endian_string(
        &mut self,
        endianness: Endianness,
        dst: &mut [u8],
    ) -> Result<usize> {
        self.deserialize_endian_sequence(endianness, dst)
    }

    /// Decodes a string into `dst` and returns it as `&str`, without the
    /// terminator.
    ///
    /// The text ends at the first null byte.
    ///
    /// # Errors
    /// The errors of [`deserialize_string`](Self::deserialize_string), or
    /// [`Error::InvalidUtf8`] if the text is not UTF-8. The latter leaves the
    /// cursor usable, positioned after the string.
    pub fn deserialize_str<'d>(&mut self, dst: &'d mut [u8]) -> Result<&'d str> {
        let endianness = self.endianness();
        let length = self.deserialize_endian_string(endianness, &mut *dst)?;
        let dst: &'d [u8] = dst;
        let bytes = &dst[..length];
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(length);
        std::str::from_utf8(&bytes[..end]).map_err(|e| Error::InvalidUtf8 {
            offset: e.valid_up_to(),
        })
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CdrBuffer<B> {
    /// Encodes `value` with its terminator using the default byte order.
    ///
    /// # Errors
    /// [`Error::BufferOverflow`] if the whole string does not fit (nothing
    /// is written), [`Error::Poisoned`] if the cursor already failed.
    #[inline]
    pub fn serialize_string(&mut self, value: &str) -> Result<()> {
        self.serialize_endian_string_bytes(self.endianness(), value.as_bytes())
    }

    /// Encodes `value` with its terminator using an explicit byte order.
    ///
    /// # Errors
    /// See [`serialize_string`](Self::serialize_string).
    #[inline]
    pub fn serialize_endian_string(&mut self, endianness: Endianness, value: &str) -> Result<()> {
        self.serialize_endian_string_bytes(endianness, value.as_bytes())
    }

    /// Encodes raw text bytes (not necessarily UTF-8) followed by a
    /// terminator.
    ///
    /// # Errors
    /// See [`serialize_string`](Self::serialize_string).
    pub fn serialize_endian_string_bytes(
        &mut self,
        endianness: Endianness,
        value: &[u8],
    ) -> Result<()> {
        let length = value.len().saturating_add(1);
        let count = self.sequence_count(length)?;
        self.ensure_sequence::<u8>(length)?;
        self.serialize_endian(endianness, count)?;

        let dst = self.peek_mut(length);
        dst[..value.len()].copy_from_slice(value);
        dst[value.len()] = 0;
        self.advance(length);
        self.record(1);
        Ok(())
    }
}
