//! Serialized size computation.
//!
//! [`SizeCalculator`] runs the same alignment arithmetic as a
//! [`CdrBuffer`](crate::CdrBuffer) without touching memory, so a region can
//! be sized before encoding. Arithmetic saturates; an absurd element count
//! yields `usize::MAX`, which no region satisfies.

use crate::alignment::padding_for;
use crate::primitive::CdrPrimitive;

/// Width of the element count that prefixes sequences and strings.
pub const SEQUENCE_COUNT_SIZE: usize = 4;

/// Accumulates the encoded size of a series of values.
///
/// # Example
/// ```
/// use ironcdr_core::SizeCalculator;
///
/// let size = SizeCalculator::new()
///     .add::<u16>()
///     .add::<u32>()
///     .add_string("ab")
///     .size();
/// // 2 + 2 padding + 4 + (4 count + 3 bytes)
/// assert_eq!(size, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeCalculator {
    start: usize,
    offset: usize,
}

impl SizeCalculator {
    /// Starts counting at stream offset 0.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Starts counting at `offset`, so padding matches a cursor that is
    /// already `offset` bytes into the stream.
    #[must_use]
    pub const fn starting_at(offset: usize) -> Self {
        Self {
            start: offset,
            offset,
        }
    }

    /// Adds one primitive of type `T`.
    #[must_use]
    pub fn add<T: CdrPrimitive>(self) -> Self {
        self.add_raw(T::SIZE, 1)
    }

    /// Adds a fixed array of `count` elements of type `T`.
    #[must_use]
    pub fn add_array<T: CdrPrimitive>(self, count: usize) -> Self {
        self.add_raw(T::SIZE, count)
    }

    /// Adds a sequence of `count` elements of type `T`, count prefix included.
    #[must_use]
    pub fn add_sequence<T: CdrPrimitive>(self, count: usize) -> Self {
        self.add_raw(SEQUENCE_COUNT_SIZE, 1)
            .add_raw(T::SIZE, count)
    }

    /// Adds a string, count prefix and null terminator included.
    #[must_use]
    pub fn add_string(self, value: &str) -> Self {
        self.add_sequence::<u8>(value.len().saturating_add(1))
    }

    fn add_raw(mut self, element_size: usize, count: usize) -> Self {
        let padding = padding_for(self.offset, element_size);
        self.offset = self
            .offset
            .saturating_add(padding)
            .saturating_add(element_size.saturating_mul(count));
        self
    }

    /// Returns the stream offset after everything added so far.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the bytes needed from the starting offset.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.offset - self.start
    }
}
