//! Primitive type definitions for CDR transcoding.
//!
//! [`CdrPrimitive`] is the single generic seam every transcoder goes
//! through: it knows its wire width, how to place itself into that many
//! bytes in a given byte order, and how to bulk-copy a slice of itself in
//! native order. It is sealed; the supported set is fixed to the CDR
//! primitives.

use crate::endian::Endianness;
use zerocopy::IntoBytes;

/// CDR primitive type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// 8-bit character.
    Char,
    /// Boolean (one byte, 0 or 1).
    Boolean,
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer (octet).
    Uint8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit IEEE 754 floating point.
    Float,
    /// 64-bit IEEE 754 floating point.
    Double,
}

impl PrimitiveKind {
    /// Returns the wire size of the primitive type in bytes.
    ///
    /// This is also its alignment.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Char | Self::Boolean | Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float => 4,
            Self::Int64 | Self::Uint64 | Self::Double => 8,
        }
    }

    /// Returns the Rust type used for this primitive.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Char => "u8",
            Self::Boolean => "bool",
            Self::Int8 => "i8",
            Self::Uint8 => "u8",
            Self::Int16 => "i16",
            Self::Uint16 => "u16",
            Self::Int32 => "i32",
            Self::Uint32 => "u32",
            Self::Int64 => "i64",
            Self::Uint64 => "u64",
            Self::Float => "f32",
            Self::Double => "f64",
        }
    }

    /// Returns the IDL name of the primitive.
    #[must_use]
    pub const fn cdr_name(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Int8 => "int8",
            Self::Uint8 => "octet",
            Self::Int16 => "short",
            Self::Uint16 => "unsigned short",
            Self::Int32 => "long",
            Self::Uint32 => "unsigned long",
            Self::Int64 => "long long",
            Self::Uint64 => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Parses a primitive type from its IDL name.
    #[must_use]
    pub fn from_cdr_name(name: &str) -> Option<Self> {
        match name {
            "char" => Some(Self::Char),
            "boolean" => Some(Self::Boolean),
            "int8" => Some(Self::Int8),
            "octet" | "uint8" => Some(Self::Uint8),
            "short" | "int16" => Some(Self::Int16),
            "unsigned short" | "uint16" => Some(Self::Uint16),
            "long" | "int32" => Some(Self::Int32),
            "unsigned long" | "uint32" => Some(Self::Uint32),
            "long long" | "int64" => Some(Self::Int64),
            "unsigned long long" | "uint64" => Some(Self::Uint64),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// Returns true if values of this type are ever byte-swapped.
    #[must_use]
    pub const fn is_swappable(&self) -> bool {
        self.size() > 1
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A fixed-size value CDR can transcode.
///
/// Implemented for `bool`, `u8`/`i8`, `u16`/`i16`, `u32`/`i32`,
/// `u64`/`i64`, `f32` and `f64`. Floats travel as their raw bit pattern,
/// so NaN payloads and signed zeros survive a round trip.
pub trait CdrPrimitive: Copy + Default + sealed::Sealed {
    /// Wire width and alignment in bytes.
    const SIZE: usize;

    /// Metadata for this type.
    const KIND: PrimitiveKind;

    /// Writes `self` into `dst` (exactly `SIZE` bytes) in the given order.
    fn write_to(self, dst: &mut [u8], endianness: Endianness);

    /// Reads a value from `src` (exactly `SIZE` bytes) in the given order.
    fn read_from(src: &[u8], endianness: Endianness) -> Self;

    /// Copies `src` into `dst` verbatim in native order.
    ///
    /// `dst.len()` must equal `src.len() * SIZE`.
    fn copy_to_bytes(src: &[Self], dst: &mut [u8]);

    /// Copies native-order bytes from `src` into `dst`.
    ///
    /// `src.len()` must equal `dst.len() * SIZE`.
    fn copy_from_bytes(src: &[u8], dst: &mut [Self]);
}

macro_rules! impl_integer_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl CdrPrimitive for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();
            const KIND: PrimitiveKind = PrimitiveKind::$kind;

            #[inline(always)]
            fn write_to(self, dst: &mut [u8], endianness: Endianness) {
                let value = if endianness.is_native() { self } else { self.swap_bytes() };
                dst.copy_from_slice(&value.to_ne_bytes());
            }

            #[inline(always)]
            fn read_from(src: &[u8], endianness: Endianness) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                bytes.copy_from_slice(src);
                let value = <$ty>::from_ne_bytes(bytes);
                if endianness.is_native() { value } else { value.swap_bytes() }
            }

            #[inline]
            fn copy_to_bytes(src: &[Self], dst: &mut [u8]) {
                dst.copy_from_slice(src.as_bytes());
            }

            #[inline]
            fn copy_from_bytes(src: &[u8], dst: &mut [Self]) {
                dst.as_mut_bytes().copy_from_slice(src);
            }
        }
    )*};
}

macro_rules! impl_float_primitive {
    ($($ty:ty => $bits:ty, $kind:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl CdrPrimitive for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();
            const KIND: PrimitiveKind = PrimitiveKind::$kind;

            #[inline(always)]
            fn write_to(self, dst: &mut [u8], endianness: Endianness) {
                self.to_bits().write_to(dst, endianness);
            }

            #[inline(always)]
            fn read_from(src: &[u8], endianness: Endianness) -> Self {
                <$ty>::from_bits(<$bits>::read_from(src, endianness))
            }

            #[inline]
            fn copy_to_bytes(src: &[Self], dst: &mut [u8]) {
                dst.copy_from_slice(src.as_bytes());
            }

            #[inline]
            fn copy_from_bytes(src: &[u8], dst: &mut [Self]) {
                dst.as_mut_bytes().copy_from_slice(src);
            }
        }
    )*};
}

impl_integer_primitive! {
    u8 => Uint8,
    i8 => Int8,
    u16 => Uint16,
    i16 => Int16,
    u32 => Uint32,
    i32 => Int32,
    u64 => Uint64,
    i64 => Int64,
}

impl_float_primitive! {
    f32 => u32, Float,
    f64 => u64, Double,
}

impl sealed::Sealed for bool {}

// Decoding maps any non-zero byte to true; a raw byte view of `[bool]`
// would accept invalid bit patterns, so the bulk copies go element-wise.
impl CdrPrimitive for bool {
    const SIZE: usize = 1;
    const KIND: PrimitiveKind = PrimitiveKind::Boolean;

    #[inline(always)]
    fn write_to(self, dst: &mut [u8], _endianness: Endianness) {
        dst[0] = u8::from(self);
    }

    #[inline(always)]
    fn read_from(src: &[u8], _endianness: Endianness) -> Self {
        src[0] != 0
    }

    #[inline]
    fn copy_to_bytes(src: &[Self], dst: &mut [u8]) {
        for (byte, &value) in dst.iter_mut().zip(src) {
            *byte = u8::from(value);
        }
    }

    #[inline]
    fn copy_from_bytes(src: &[u8], dst: &mut [Self]) {
        for (value, &byte) in dst.iter_mut().zip(src) {
            *value = byte != 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_kind_size() {
        assert_eq!(PrimitiveKind::Char.size(), 1);
        assert_eq!(PrimitiveKind::Boolean.size(), 1);
        assert_eq!(PrimitiveKind::Int16.size(), 2);
        assert_eq!(PrimitiveKind::Uint32.size(), 4);
        assert_eq!(PrimitiveKind::Float.size(), 4);
        assert_eq!(PrimitiveKind::Int64.size(), 8);
        assert_eq!(PrimitiveKind::Double.size(), 8);
    }

    #[test]
    fn test_primitive_kind_from_cdr_name() {
        assert_eq!(
            PrimitiveKind::from_cdr_name("unsigned long"),
            Some(PrimitiveKind::Uint32)
        );
        assert_eq!(PrimitiveKind::from_cdr_name("octet"), Some(PrimitiveKind::Uint8));
        assert_eq!(PrimitiveKind::from_cdr_name("int64"), Some(PrimitiveKind::Int64));
        assert_eq!(PrimitiveKind::from_cdr_name("wchar"), None);
        for kind in [PrimitiveKind::Boolean, PrimitiveKind::Double, PrimitiveKind::Int16] {
            assert_eq!(PrimitiveKind::from_cdr_name(kind.cdr_name()), Some(kind));
        }
    }

    #[test]
    fn test_sizes_match_kinds() {
        assert_eq!(<u16 as CdrPrimitive>::SIZE, u16::KIND.size());
        assert_eq!(<f64 as CdrPrimitive>::SIZE, f64::KIND.size());
        assert_eq!(<bool as CdrPrimitive>::SIZE, bool::KIND.size());
        assert_eq!(i8::KIND, PrimitiveKind::Int8);
        assert!(!u8::KIND.is_swappable());
        assert!(f32::KIND.is_float());
    }

    #[test]
    fn test_write_explicit_orders() {
        let mut out = [0u8; 4];
        0xAABB_CCDDu32.write_to(&mut out, Endianness::Big);
        assert_eq!(out, [0xAA, 0xBB, 0xCC, 0xDD]);
        0xAABB_CCDDu32.write_to(&mut out, Endianness::Little);
        assert_eq!(out, [0xDD, 0xCC, 0xBB, 0xAA]);
    }

    #[test]
    fn test_float_bit_pattern_transport() {
        let mut out = [0u8; 8];
        let nan = f64::from_bits(0x7FF8_0000_DEAD_BEEF);
        nan.write_to(&mut out, Endianness::Big);
        assert_eq!(out, 0x7FF8_0000_DEAD_BEEFu64.to_be_bytes());
        let back = f64::read_from(&out, Endianness::Big);
        assert_eq!(back.to_bits(), nan.to_bits());

        let mut out = [0u8; 4];
        (-0.0f32).write_to(&mut out, Endianness::Little);
        assert_eq!(out, [0, 0, 0, 0x80]);
    }

    #[test]
    fn test_bool_bytes() {
        let mut out = [0u8; 3];
        bool::copy_to_bytes(&[true, false, true], &mut out);
        assert_eq!(out, [1, 0, 1]);

        let mut values = [false; 3];
        bool::copy_from_bytes(&[0, 7, 1], &mut values);
        assert_eq!(values, [false, true, true]);
    }

    #[test]
    fn test_native_bulk_copy() {
        let src = [0x0102u16, 0x0304];
        let mut out = [0u8; 4];
        u16::copy_to_bytes(&src, &mut out);
        let mut expected = Vec::new();
        expected.extend_from_slice(&0x0102u16.to_ne_bytes());
        expected.extend_from_slice(&0x0304u16.to_ne_bytes());
        assert_eq!(out.as_slice(), expected.as_slice());

        let mut back = [0u16; 2];
        u16::copy_from_bytes(&out, &mut back);
        assert_eq!(back, src);
    }
}
