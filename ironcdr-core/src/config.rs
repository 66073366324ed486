//! Cursor configuration.

use crate::buffer::CdrBuffer;
use crate::endian::Endianness;
use crate::error::{Error, Result};

/// Builder for configuring and creating a [`CdrBuffer`].
///
/// # Example
/// ```
/// use ironcdr_core::{BufferConfig, Endianness};
///
/// let region = [0u8; 64];
/// let buf = BufferConfig::new()
///     .endianness(Endianness::Big)
///     .offset(4)
///     .wrap(&region[..])
///     .unwrap();
/// assert_eq!(buf.position(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    endianness: Endianness,
    offset: usize,
    origin: usize,
}

impl BufferConfig {
    /// Creates a configuration with native byte order, offset 0, origin 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            endianness: Endianness::NATIVE,
            offset: 0,
            origin: 0,
        }
    }

    /// Sets the default byte order.
    #[must_use]
    pub const fn endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Sets the position the cursor starts at (and resets to).
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the stream offset of the region's first byte.
    ///
    /// Use this when the region is a slice of a larger message so alignment
    /// stays relative to the message start.
    #[must_use]
    pub const fn origin(mut self, origin: usize) -> Self {
        self.origin = origin;
        self
    }

    /// Builds a cursor over `region`.
    ///
    /// # Errors
    /// Returns [`Error::BufferOverflow`] if the offset lies past the end of
    /// the region.
    pub fn wrap<B: AsRef<[u8]>>(self, region: B) -> Result<CdrBuffer<B>> {
        let capacity = region.as_ref().len();
        if self.offset > capacity {
            return Err(Error::BufferOverflow {
                required: self.offset,
                available: capacity,
            });
        }
        Ok(CdrBuffer::from_parts(
            region,
            self.origin,
            self.offset,
            self.endianness,
        ))
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}
