//! Scalar transcoding.
//!
//! One generic routine per direction handles every primitive width: align,
//! ensure, then write or read `T::SIZE` bytes in the requested order. The
//! named `serialize_u32` style methods are thin wrappers over it.

use crate::buffer::CdrBuffer;
use crate::endian::Endianness;
use crate::error::Result;
use crate::primitive::CdrPrimitive;

impl<B: AsRef<[u8]> + AsMut<[u8]>> CdrBuffer<B> {
    /// Encodes `value` using the cursor's default byte order.
    ///
    /// # Errors
    /// [`Error::BufferOverflow`](crate::Error::BufferOverflow) if the value
    /// and its padding do not fit, [`Error::Poisoned`](crate::Error::Poisoned)
    /// if the cursor already failed.
    #[inline]
    pub fn serialize<T: CdrPrimitive>(&mut self, value: T) -> Result<()> {
        self.serialize_endian(self.endianness(), value)
    }

    /// Encodes `value` using an explicit byte order.
    ///
    /// # Errors
    /// See [`serialize`](Self::serialize).
    #[inline]
    pub fn serialize_endian<T: CdrPrimitive>(
        &mut self,
        endianness: Endianness,
        value: T,
    ) -> Result<()> {
        let padding = self.padding(T::SIZE);
        self.ensure(padding + T::SIZE)?;
        self.write_padding(padding);
        value.write_to(self.peek_mut(T::SIZE), endianness);
        self.advance(T::SIZE);
        self.record(T::SIZE);
        Ok(())
    }

    /// Encodes an 8-bit character.
    ///
    /// # Errors
    /// See [`serialize`](Self::serialize).
    #[inline]
    pub fn serialize_char(&mut self, value: u8) -> Result<()> {
        self.serialize(value)
    }
}

impl<B: AsRef<[u8]>> CdrBuffer<B> {
    /// Decodes a value using the cursor's default byte order.
    ///
    /// # Errors
    /// [`Error::BufferOverflow`](crate::Error::BufferOverflow) if the stream
    /// ends early, [`Error::Poisoned`](crate::Error::Poisoned) if the cursor
    /// already failed.
    #[inline]
    pub fn deserialize<T: CdrPrimitive>(&mut self) -> Result<T> {
        self.deserialize_endian(self.endianness())
    }

    /// Decodes a value using an explicit byte order.
    ///
    /// Padding before the value is skipped without inspection.
    ///
    /// # Errors
    /// See [`deserialize`](Self::deserialize).
    #[inline]
    pub fn deserialize_endian<T: CdrPrimitive>(&mut self, endianness: Endianness) -> Result<T> {
        let padding = self.padding(T::SIZE);
        self.ensure(padding + T::SIZE)?;
        self.advance(padding);
        let value = T::read_from(self.peek(T::SIZE), endianness);
        self.advance(T::SIZE);
        self.record(T::SIZE);
        Ok(value)
    }

    /// Decodes an 8-bit character.
    ///
    /// # Errors
    /// See [`deserialize`](Self::deserialize).
    #[inline]
    pub fn deserialize_char(&mut self) -> Result<u8> {
        self.deserialize()
    }
}

/// Generates per-type wrappers for byte-sized primitives (no byte order).
macro_rules! byte_accessors {
    ($($ty:ty => $ser:ident, $de:ident);* $(;)?) => {
        impl<B: AsRef<[u8]> + AsMut<[u8]>> CdrBuffer<B> {
            $(
                #[doc = concat!("Encodes a `", stringify!($ty), "`.")]
                ///
                /// # Errors
                /// See [`serialize`](Self::serialize).
                #[inline]
                pub fn $ser(&mut self, value: $ty) -> Result<()> {
                    self.serialize(value)
                }
            )*
        }

        impl<B: AsRef<[u8]>> CdrBuffer<B> {
            $(
                #[doc = concat!("Decodes a `", stringify!($ty), "`.")]
                ///
                /// # Errors
                /// See [`deserialize`](Self::deserialize).
                #[inline]
                pub fn $de(&mut self) -> Result<$ty> {
                    self.deserialize()
                }
            )*
        }
    };
}

/// Generates per-type wrappers for multi-byte primitives, in both the
/// default-order and explicit-order families.
macro_rules! word_accessors {
    ($($ty:ty => $ser:ident, $ser_endian:ident, $de:ident, $de_endian:ident);* $(;)?) => {
        impl<B: AsRef<[u8]> + AsMut<[u8]>> CdrBuffer<B> {
            $(
                #[doc = concat!("Encodes a `", stringify!($ty), "` in the default byte order.")]
                ///
                /// # Errors
                /// See [`serialize`](Self::serialize).
                #[inline]
                pub fn $ser(&mut self, value: $ty) -> Result<()> {
                    self.serialize(value)
                }

                #[doc = concat!("Encodes a `", stringify!($ty), "` in an explicit byte order.")]
                ///
                /// # Errors
                /// See [`serialize`](Self::serialize).
                #[inline]
                pub fn $ser_endian(&mut self, endianness: Endianness, value: $ty) -> Result<()> {
                    self.serialize_endian(endianness, value)
                }
            )*
        }

        impl<B: AsRef<[u8]>> CdrBuffer<B> {
            $(
                #[doc = concat!("Decodes a `", stringify!($ty), "` in the default byte order.")]
                ///
                /// # Errors
                /// See [`deserialize`](Self::deserialize).
                #[inline]
                pub fn $de(&mut self) -> Result<$ty> {
                    self.deserialize()
                }

                #[doc = concat!("Decodes a `", stringify!($ty), "` in an explicit byte order.")]
                ///
                /// # Errors
                /// See [`deserialize`](Self::deserialize).
                #[inline]
                pub fn $de_endian(&mut self, endianness: Endianness) -> Result<$ty> {
                    self.deserialize_endian(endianness)
                }
            )*
        }
    };
}

byte_accessors! {
    bool => serialize_bool, deserialize_bool;
    u8 => serialize_u8, deserialize_u8;
    i8 => serialize_i8, deserialize_i8;
}

word_accessors! {
    u16 => serialize_u16, serialize_endian_u16, deserialize_u16, deserialize_endian_u16;
    i16 => serialize_i16, serialize_endian_i16, deserialize_i16, deserialize_endian_i16;
    u32 => serialize_u32, serialize_endian_u32, deserialize_u32, deserialize_endian_u32;
    i32 => serialize_i32, serialize_endian_i32, deserialize_i32, deserialize_endian_i32;
    u64 => serialize_u64, serialize_endian_u64, deserialize_u64, deserialize_endian_u64;
    i64 => serialize_i64, serialize_endian_i64, deserialize_i64, deserialize_endian_i64;
    f32 => serialize_f32, serialize_endian_f32, deserialize_f32, deserialize_endian_f32;
    f64 => serialize_f64, serialize_endian_f64, deserialize_f64, deserialize_endian_f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const ORDERS: [Endianness; 2] = [Endianness::Little, Endianness::Big];

    fn round_trip<T>(value: T, writer_order: Endianness, reader_order: Endianness) -> T
    where
        T: CdrPrimitive,
    {
        let mut region = [0u8; 16];
        let mut writer = CdrBuffer::with_endianness(&mut region[..], writer_order);
        writer.serialize(value).expect("fits");
        drop(writer);

        // the reader uses its own default and states the wire order per call
        let mut reader = CdrBuffer::with_endianness(&region[..], reader_order);
        reader.deserialize_endian(writer_order).expect("fits")
    }

    #[test]
    fn test_concrete_scenario_little_endian() {
        let mut region = [0u8; 16];
        let mut buf = CdrBuffer::with_endianness(&mut region[..], Endianness::Little);
        buf.serialize_u16(0x1234).expect("fits");
        buf.serialize_u32(0xAABB_CCDD).expect("fits");
        assert_eq!(buf.position(), 8);
        assert_eq!(buf.last_data_size(), 4);
        drop(buf);
        assert_eq!(&region[..8], &[0x34, 0x12, 0, 0, 0xDD, 0xCC, 0xBB, 0xAA]);
    }

    #[test]
    fn test_integer_extremes_round_trip() {
        for &writer in &ORDERS {
            for &reader in &ORDERS {
                assert_eq!(round_trip(u8::MAX, writer, reader), u8::MAX);
                assert_eq!(round_trip(i8::MIN, writer, reader), i8::MIN);
                assert_eq!(round_trip(u16::MAX, writer, reader), u16::MAX);
                assert_eq!(round_trip(i16::MIN, writer, reader), i16::MIN);
                assert_eq!(round_trip(i16::MAX, writer, reader), i16::MAX);
                assert_eq!(round_trip(u32::MAX, writer, reader), u32::MAX);
                assert_eq!(round_trip(i32::MIN, writer, reader), i32::MIN);
                assert_eq!(round_trip(u64::MAX, writer, reader), u64::MAX);
                assert_eq!(round_trip(i64::MIN, writer, reader), i64::MIN);
                assert_eq!(round_trip(i64::MAX, writer, reader), i64::MAX);
                assert_eq!(round_trip(0x0102_0304u32, writer, reader), 0x0102_0304);
            }
        }
    }

    #[test]
    fn test_float_specials_round_trip_bitwise() {
        let floats = [
            f32::NAN,
            f32::from_bits(0x7FC0_1234),
            f32::INFINITY,
            f32::NEG_INFINITY,
            0.0,
            -0.0,
            f32::MIN_POSITIVE,
        ];
        let doubles = [
            f64::NAN,
            f64::from_bits(0xFFF8_0000_0000_0001),
            f64::INFINITY,
            f64::NEG_INFINITY,
            0.0,
            -0.0,
            f64::MAX,
        ];
        for &writer in &ORDERS {
            for &reader in &ORDERS {
                for value in floats {
                    assert_eq!(round_trip(value, writer, reader).to_bits(), value.to_bits());
                }
                for value in doubles {
                    assert_eq!(round_trip(value, writer, reader).to_bits(), value.to_bits());
                }
            }
        }
    }

    #[test]
    fn test_explicit_big_endian_bytes() {
        let mut region = [0u8; 16];
        let mut buf = CdrBuffer::new(&mut region[..]);
        buf.serialize_endian_u16(Endianness::Big, 0x1234).expect("fits");
        buf.serialize_endian_f64(Endianness::Big, 1.0).expect("fits");
        assert_eq!(buf.position(), 16);
        drop(buf);
        assert_eq!(&region[..2], &[0x12, 0x34]);
        assert_eq!(&region[2..8], &[0; 6]);
        assert_eq!(&region[8..], &1.0f64.to_be_bytes());
    }

    #[test]
    fn test_alignment_from_any_start() {
        for start in 0..8usize {
            for width in [1usize, 2, 4, 8] {
                let mut region = [0u8; 32];
                let mut buf = CdrBuffer::new(&mut region[..]);
                for _ in 0..start {
                    buf.serialize_u8(0).expect("fits");
                }
                let before = buf.position();
                let result = match width {
                    1 => buf.serialize_u8(1),
                    2 => buf.serialize_u16(1),
                    4 => buf.serialize_u32(1),
                    _ => buf.serialize_u64(1),
                };
                result.expect("fits");
                let payload_start = buf.position() - width;
                assert_eq!(payload_start % width, 0);
                assert!(payload_start >= before);
                assert!(payload_start - before < width);
            }
        }
    }

    #[test]
    fn test_bool_and_char_skip_alignment() {
        let mut region = [0u8; 4];
        let mut buf = CdrBuffer::new(&mut region[..]);
        buf.serialize_u8(9).expect("fits");
        buf.serialize_bool(true).expect("fits");
        buf.serialize_char(b'x').expect("fits");
        buf.serialize_i8(-1).expect("fits");
        assert_eq!(buf.position(), 4);
        drop(buf);
        assert_eq!(region, [9, 1, b'x', 0xFF]);

        let mut reader = CdrBuffer::new(&region[..]);
        assert_eq!(reader.deserialize_u8(), Ok(9));
        assert_eq!(reader.deserialize_bool(), Ok(true));
        assert_eq!(reader.deserialize_char(), Ok(b'x'));
        assert_eq!(reader.deserialize_i8(), Ok(-1));
    }

    #[test]
    fn test_overflow_leaves_position_and_poisons() {
        let mut region = [0xEEu8; 7];
        let mut buf = CdrBuffer::new(&mut region[..]);
        buf.serialize_u16(1).expect("fits");
        // 2 bytes padding + 4 bytes payload, only 5 left
        assert_eq!(
            buf.serialize_u32(2),
            Err(Error::BufferOverflow {
                required: 6,
                available: 5
            })
        );
        assert_eq!(buf.position(), 2);
        assert!(buf.has_error());
        assert_eq!(buf.serialize_u8(3), Err(Error::Poisoned));
        assert_eq!(buf.position(), 2);
        drop(buf);
        assert_eq!(&region[2..], &[0xEE; 5]);
    }

    #[test]
    fn test_decode_overflow() {
        let region = [1u8, 2, 3];
        let mut buf = CdrBuffer::new(&region[..]);
        assert!(buf.deserialize_u32().is_err());
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.deserialize_u8(), Err(Error::Poisoned));
    }

    #[test]
    fn test_exact_fit() {
        let mut region = [0u8; 8];
        let mut buf = CdrBuffer::new(&mut region[..]);
        buf.serialize_i64(-5).expect("fits exactly");
        assert_eq!(buf.remaining(), 0);
        assert!(!buf.has_error());
    }

    #[test]
    fn test_default_and_explicit_families_agree() {
        let value = 0x1122_3344_5566_7788u64;
        for &order in &ORDERS {
            let mut a = [0u8; 8];
            let mut b = [0u8; 8];
            CdrBuffer::with_endianness(&mut a[..], order)
                .serialize_u64(value)
                .expect("fits");
            CdrBuffer::new(&mut b[..])
                .serialize_endian_u64(order, value)
                .expect("fits");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_signed_and_float_named_wrappers() {
        let mut region = [0u8; 32];
        let mut buf = CdrBuffer::with_endianness(&mut region[..], Endianness::Big);
        buf.serialize_i16(-2).expect("fits");
        buf.serialize_i32(-3).expect("fits");
        buf.serialize_f32(1.5).expect("fits");
        buf.serialize_f64(-2.25).expect("fits");
        let end = buf.position();
        drop(buf);

        let mut reader = CdrBuffer::with_endianness(&region[..], Endianness::Big);
        assert_eq!(reader.deserialize_i16(), Ok(-2));
        assert_eq!(reader.deserialize_i32(), Ok(-3));
        assert_eq!(reader.deserialize_f32(), Ok(1.5));
        assert_eq!(reader.deserialize_endian_f64(Endianness::Big), Ok(-2.25));
        assert_eq!(reader.position(), end);
    }
}
