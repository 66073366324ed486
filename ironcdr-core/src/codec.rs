//! Encode/decode traits for composite message types.
//!
//! Implementations write their fields in declaration order through a
//! [`CdrBuffer`]; there is no schema, versioning or optional-field support.
//!
//! # Example
//! ```
//! use ironcdr_core::{CdrBuffer, CdrDecode, CdrEncode, Result};
//!
//! #[derive(Debug, PartialEq)]
//! struct Reading {
//!     sensor: u16,
//!     value: f64,
//! }
//!
//! impl CdrEncode for Reading {
//!     fn encode<B: AsRef<[u8]> + AsMut<[u8]>>(&self, buf: &mut CdrBuffer<B>) -> Result<()> {
//!         buf.serialize_u16(self.sensor)?;
//!         buf.serialize_f64(self.value)
//!     }
//! }
//!
//! impl CdrDecode for Reading {
//!     fn decode<B: AsRef<[u8]>>(buf: &mut CdrBuffer<B>) -> Result<Self> {
//!         Ok(Self { sensor: buf.deserialize_u16()?, value: buf.deserialize_f64()? })
//!     }
//! }
//!
//! let mut region = [0u8; 16];
//! let mut writer = CdrBuffer::new(&mut region[..]);
//! writer.write(&Reading { sensor: 3, value: 0.5 }).unwrap();
//! let mut reader = CdrBuffer::new(&region[..]);
//! assert_eq!(reader.read::<Reading>().unwrap(), Reading { sensor: 3, value: 0.5 });
//! ```

use crate::buffer::CdrBuffer;
use crate::error::Result;
use crate::primitive::CdrPrimitive;

/// A type that can be written to a [`CdrBuffer`].
pub trait CdrEncode {
    /// Writes `self` at the buffer's position.
    ///
    /// # Errors
    /// Any error from the underlying transcoders.
    fn encode<B: AsRef<[u8]> + AsMut<[u8]>>(&self, buf: &mut CdrBuffer<B>) -> Result<()>;
}

/// A type that can be read from a [`CdrBuffer`].
pub trait CdrDecode: Sized {
    /// Reads a value at the buffer's position.
    ///
    /// # Errors
    /// Any error from the underlying transcoders.
    fn decode<B: AsRef<[u8]>>(buf: &mut CdrBuffer<B>) -> Result<Self>;
}

macro_rules! impl_codec_for_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl CdrEncode for $ty {
            #[inline]
            fn encode<B: AsRef<[u8]> + AsMut<[u8]>>(&self, buf: &mut CdrBuffer<B>) -> Result<()> {
                buf.serialize(*self)
            }
        }

        impl CdrDecode for $ty {
            #[inline]
            fn decode<B: AsRef<[u8]>>(buf: &mut CdrBuffer<B>) -> Result<Self> {
                buf.deserialize()
            }
        }
    )*};
}

impl_codec_for_primitive!(bool, u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl<T: CdrPrimitive, const N: usize> CdrEncode for [T; N] {
    #[inline]
    fn encode<B: AsRef<[u8]> + AsMut<[u8]>>(&self, buf: &mut CdrBuffer<B>) -> Result<()> {
        buf.serialize_array(self)
    }
}

impl<T: CdrPrimitive, const N: usize> CdrDecode for [T; N] {
    #[inline]
    fn decode<B: AsRef<[u8]>>(buf: &mut CdrBuffer<B>) -> Result<Self> {
        let mut values = [T::default(); N];
        buf.deserialize_array(&mut values)?;
        Ok(values)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CdrBuffer<B> {
    /// Encodes any [`CdrEncode`] value.
    ///
    /// # Errors
    /// Whatever `value.encode` returns.
    #[inline]
    pub fn write<T: CdrEncode + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }
}

impl<B: AsRef<[u8]>> CdrBuffer<B> {
    /// Decodes any [`CdrDecode`] value.
    ///
    /// # Errors
    /// Whatever `T::decode` returns.
    #[inline]
    pub fn read<T: CdrDecode>(&mut self) -> Result<T> {
        T::decode(self)
    }
}
