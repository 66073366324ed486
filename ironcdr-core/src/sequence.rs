//! Variable-length sequence transcoding.
//!
//! A sequence is a `u32` element count (aligned and ordered like any other
//! 4-byte scalar) followed by the array encoding of that many elements.
//! Encoding checks the full footprint before writing the count, and
//! decoding rewinds on failure, so a failed sequence never moves the
//! cursor.

use crate::buffer::CdrBuffer;
use crate::endian::Endianness;
use crate::error::{Error, Result};
use crate::primitive::CdrPrimitive;
use crate::size::SizeCalculator;

impl<B: AsRef<[u8]>> CdrBuffer<B> {
    /// Converts an element count to its wire form, poisoning if it does not
    /// fit 32 bits.
    pub(crate) fn sequence_count(&mut self, len: usize) -> Result<u32> {
        match u32::try_from(len) {
            Ok(count) => Ok(count),
            Err(_) => Err(self.fail(Error::LengthOverflow { length: len })),
        }
    }

    /// Checks that a whole sequence of `len` elements of `T` fits.
    pub(crate) fn ensure_sequence<T: CdrPrimitive>(&mut self, len: usize) -> Result<()> {
        let footprint = SizeCalculator::starting_at(self.stream_offset())
            .add_sequence::<T>(len)
            .size();
        self.ensure(footprint)
    }

    /// Decodes a sequence into `values` using the default byte order and
    /// returns the number of elements decoded.
    ///
    /// # Errors
    /// [`Error::SequenceTooLong`] if the wire count exceeds `values.len()`;
    /// the error carries the wire count and no element is read.
    /// [`Error::BufferOverflow`] if the stream ends inside the sequence.
    /// Either way the cursor is poisoned and its position is unchanged.
    #[inline]
    pub fn deserialize_sequence<T: CdrPrimitive>(&mut self, values: &mut [T]) -> Result<usize> {
        self.deserialize_endian_sequence(self.endianness(), values)
    }

    /// Decodes a sequence using an explicit byte order.
    ///
    /// # Errors
    /// See [`deserialize_sequence`](Self::deserialize_sequence).
    pub fn deserialize_endian_sequence<T: CdrPrimitive>(
        &mut self,
        endianness: Endianness,
        values: &mut [T],
    ) -> Result<usize> {
        let position = self.position();
        let last_data_size = self.last_data_size();

        let count: u32 = self.deserialize_endian(endianness)?;
        let len = usize::try_from(count).unwrap_or(usize::MAX);
        if len > values.len() {
            self.rewind(position, last_data_size);
            return Err(self.fail(Error::SequenceTooLong {
                count,
                capacity: values.len(),
            }));
        }

        if let Err(error) = self.deserialize_endian_array(endianness, &mut values[..len]) {
            self.rewind(position, last_data_size);
            return Err(error);
        }
        Ok(len)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CdrBuffer<B> {
    /// Encodes `values` as a count-prefixed sequence using the default byte
    /// order.
    ///
    /// # Errors
    /// [`Error::BufferOverflow`] if the count, padding and elements do not
    /// all fit (nothing is written), [`Error::LengthOverflow`] if
    /// `values.len()` exceeds `u32::MAX`, [`Error::Poisoned`] if the cursor
    /// already failed.
    #[inline]
    pub fn serialize_sequence<T: CdrPrimitive>(&mut self, values: &[T]) -> Result<()> {
        self.serialize_endian_sequence(self.endianness(), values)
    }

    /// Encodes a sequence using an explicit byte order.
    ///
    /// # Errors
    /// See [`serialize_sequence`](Self::serialize_sequence).
    pub fn serialize_endian_sequence<T: CdrPrimitive>(
        &mut self,
        endianness: Endianness,
        values: &[T],
    ) -> Result<()> {
        let count = self.sequence_count(values.len())?;
        self.ensure_sequence::<T>(values.len())?;
        self.serialize_endian(endianness, count)?;
        self.serialize_endian_array(endianness, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_wire_layout() {
        let mut region = [0u8; 32];
        let mut buf = CdrBuffer::with_endianness(&mut region[..], Endianness::Big);
        buf.serialize_u8(0xFF).expect("fits");
        buf.serialize_sequence(&[0x0102u16, 0x0304, 0x0506]).expect("fits");
        assert_eq!(buf.position(), 14);
        drop(buf);
        assert_eq!(
            &region[..14],
            &[0xFF, 0, 0, 0, 0, 0, 0, 3, 1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_sequence_round_trip_foreign_order() {
        let order = Endianness::NATIVE.opposite();
        let values = [1.5f64, -2.0, f64::INFINITY];
        let mut region = [0u8; 64];
        let mut writer = CdrBuffer::with_endianness(&mut region[..], order);
        writer.serialize_sequence(&values).expect("fits");
        let end = writer.position();
        drop(writer);

        let mut reader = CdrBuffer::with_endianness(&region[..], order);
        let mut decoded = [0f64; 8];
        assert_eq!(reader.deserialize_sequence(&mut decoded), Ok(3));
        assert_eq!(&decoded[..3], &values);
        assert_eq!(reader.position(), end);
    }

    #[test]
    fn test_capacity_guard_reports_wire_count() {
        let mut region = [0u8; 64];
        CdrBuffer::new(&mut region[..])
            .serialize_sequence(&[1u32, 2, 3, 4, 5])
            .expect("fits");

        let mut reader = CdrBuffer::new(&region[..]);
        let mut small = [0u32; 4];
        assert_eq!(
            reader.deserialize_sequence(&mut small),
            Err(Error::SequenceTooLong {
                count: 5,
                capacity: 4
            })
        );
        assert_eq!(small, [0; 4]);
        assert_eq!(reader.position(), 0);
        assert!(reader.has_error());
        assert_eq!(reader.deserialize_sequence(&mut [0u32; 8]), Err(Error::Poisoned));
    }

    #[test]
    fn test_truncated_stream_is_overflow_not_capacity() {
        let mut region = [0u8; 64];
        CdrBuffer::new(&mut region[..])
            .serialize_sequence(&[7u32; 6])
            .expect("fits");

        // count says 6 elements, only 2 are present
        let mut reader = CdrBuffer::new(&region[..12]);
        let mut out = [0u32; 6];
        assert_eq!(
            reader.deserialize_sequence(&mut out),
            Err(Error::BufferOverflow {
                required: 24,
                available: 8
            })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_hostile_count_is_rejected() {
        let mut region = [0u8; 8];
        CdrBuffer::new(&mut region[..])
            .serialize_u32(u32::MAX)
            .expect("fits");
        let mut reader = CdrBuffer::new(&region[..]);
        let mut out = [0u8; 16];
        assert!(matches!(
            reader.deserialize_sequence(&mut out),
            Err(Error::SequenceTooLong { count: u32::MAX, .. })
        ));
    }

    #[test]
    fn test_sequence_encode_is_all_or_nothing() {
        let mut region = [0xEEu8; 10];
        let mut buf = CdrBuffer::new(&mut region[..]);
        assert!(buf.serialize_sequence(&[1u32, 2]).is_err());
        assert_eq!(buf.position(), 0);
        drop(buf);
        assert_eq!(region, [0xEE; 10]);
    }

    #[test]
    fn test_empty_sequence_still_aligns_body() {
        let mut region = [0xEEu8; 12];
        let mut buf = CdrBuffer::new(&mut region[..]);
        buf.serialize_sequence::<u64>(&[]).expect("fits");
        // count, then the empty u64 body aligns to 8
        assert_eq!(buf.position(), 8);
        buf.serialize_u32(0x0A0B_0C0D).expect("fits");
        drop(buf);
        assert_eq!(&region[4..8], &[0; 4]);

        let mut reader = CdrBuffer::new(&region[..]);
        let mut out: [u64; 0] = [];
        assert_eq!(reader.deserialize_sequence(&mut out), Ok(0));
        assert_eq!(reader.position(), 8);
        assert_eq!(reader.deserialize_u32(), Ok(0x0A0B_0C0D));
    }

    #[test]
    fn test_explicit_order_family() {
        let mut region = [0u8; 16];
        let mut buf = CdrBuffer::with_endianness(&mut region[..], Endianness::Little);
        buf.serialize_endian_sequence(Endianness::Big, &[0x0A0Bu16])
            .expect("fits");
        drop(buf);
        assert_eq!(&region[..6], &[0, 0, 0, 1, 0x0A, 0x0B]);

        let mut reader = CdrBuffer::with_endianness(&region[..], Endianness::Little);
        let mut out = [0u16; 1];
        assert_eq!(
            reader.deserialize_endian_sequence(Endianness::Big, &mut out),
            Ok(1)
        );
        assert_eq!(out, [0x0A0B]);
    }
}
