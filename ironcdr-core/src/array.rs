//! Fixed-length array transcoding.
//!
//! An array aligns once, to its element width, then carries
//! `len * T::SIZE` payload bytes with no length prefix; both sides must
//! agree on the length out of band.
//!
//! When the wire order matches the machine order (or elements are single
//! bytes) the payload is one bulk copy. Otherwise every element is swapped
//! individually. Both paths produce identical bytes for a given wire order.

use crate::buffer::CdrBuffer;
use crate::endian::Endianness;
use crate::error::{Error, Result};
use crate::primitive::CdrPrimitive;

impl<B: AsRef<[u8]>> CdrBuffer<B> {
    /// Payload length of `len` elements of `T`, poisoning on overflow.
    pub(crate) fn array_bytes<T: CdrPrimitive>(&mut self, len: usize) -> Result<usize> {
        match len.checked_mul(T::SIZE) {
            Some(total) => Ok(total),
            None => Err(self.fail(Error::LengthOverflow { length: len })),
        }
    }

    /// Decodes `values.len()` elements using the default byte order.
    ///
    /// # Errors
    /// [`Error::BufferOverflow`] if the stream is too short,
    /// [`Error::Poisoned`] if the cursor already failed. `values` is not
    /// touched on error.
    #[inline]
    pub fn deserialize_array<T: CdrPrimitive>(&mut self, values: &mut [T]) -> Result<()> {
        self.deserialize_endian_array(self.endianness(), values)
    }

    /// Decodes `values.len()` elements using an explicit byte order.
    ///
    /// # Errors
    /// See [`deserialize_array`](Self::deserialize_array).
    pub fn deserialize_endian_array<T: CdrPrimitive>(
        &mut self,
        endianness: Endianness,
        values: &mut [T],
    ) -> Result<()> {
        let total = self.array_bytes::<T>(values.len())?;
        let padding = self.padding(T::SIZE);
        self.ensure(padding.saturating_add(total))?;
        self.advance(padding);

        let src = self.peek(total);
        if T::SIZE == 1 || endianness.is_native() {
            T::copy_from_bytes(src, values);
        } else {
            for (value, chunk) in values.iter_mut().zip(src.chunks_exact(T::SIZE)) {
                *value = T::read_from(chunk, endianness);
            }
        }

        self.advance(total);
        self.record(T::SIZE);
        Ok(())
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CdrBuffer<B> {
    /// Encodes every element of `values` using the default byte order.
    ///
    /// # Errors
    /// [`Error::BufferOverflow`] if the array and its padding do not fit,
    /// [`Error::Poisoned`] if the cursor already failed. Nothing is written
    /// on error.
    #[inline]
    pub fn serialize_array<T: CdrPrimitive>(&mut self, values: &[T]) -> Result<()> {
        self.serialize_endian_array(self.endianness(), values)
    }

    /// Encodes every element of `values` using an explicit byte order.
    ///
    /// # Errors
    /// See [`serialize_array`](Self::serialize_array).
    pub fn serialize_endian_array<T: CdrPrimitive>(
        &mut self,
        endianness: Endianness,
        values: &[T],
    ) -> Result<()> {
        let total = self.array_bytes::<T>(values.len())?;
        let padding = self.padding(T::SIZE);
        self.ensure(padding.saturating_add(total))?;
        self.write_padding(padding);

        let dst = self.peek_mut(total);
        if T::SIZE == 1 || endianness.is_native() {
            T::copy_to_bytes(values, dst);
        } else {
            for (chunk, &value) in dst.chunks_exact_mut(T::SIZE).zip(values) {
                value.write_to(chunk, endianness);
            }
        }

        self.advance(total);
        self.record(T::SIZE);
        Ok(())
    }
}
