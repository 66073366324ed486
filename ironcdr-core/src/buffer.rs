//! The CDR buffer cursor.
//!
//! [`CdrBuffer`] wraps a caller-owned byte region and tracks a read/write
//! position inside it. Every transcoder goes through two primitives:
//! [`CdrBuffer::ensure`] checks that `n` more bytes fit, and `advance`
//! moves past them. The first failure poisons the
//! buffer; from then on every operation returns [`Error::Poisoned`] until the
//! buffer is [reset](CdrBuffer::reset).
//!
//! The region type decides what the cursor may do: any `B: AsRef<[u8]>`
//! can be decoded from, and `B: AsMut<[u8]>` can also be encoded into.
//! Cursors never allocate or free the region.

use crate::alignment::padding_for;
use crate::endian::Endianness;
use crate::error::{Error, Result};

/// Cursor over a fixed-capacity byte region.
///
/// # Example
/// ```
/// use ironcdr_core::{CdrBuffer, Endianness};
///
/// let mut region = [0u8; 16];
/// let mut writer = CdrBuffer::with_endianness(&mut region[..], Endianness::Little);
/// writer.serialize_u16(0x1234).unwrap();
/// writer.serialize_u32(0xAABB_CCDD).unwrap();
/// assert_eq!(writer.position(), 8);
/// assert_eq!(writer.written(), &[0x34, 0x12, 0, 0, 0xDD, 0xCC, 0xBB, 0xAA]);
/// ```
#[derive(Clone)]
pub struct CdrBuffer<B> {
    region: B,
    /// Stream offset of region byte 0.
    origin: usize,
    /// Position the cursor started at and returns to on reset.
    initial: usize,
    /// Position treated as stream offset zero after `reset_alignment`.
    align_start: Option<usize>,
    position: usize,
    endianness: Endianness,
    last_data_size: usize,
    error: bool,
}

impl<B: AsRef<[u8]>> CdrBuffer<B> {
    /// Creates a cursor at the start of `region` using native byte order.
    #[must_use]
    pub fn new(region: B) -> Self {
        Self::with_endianness(region, Endianness::NATIVE)
    }

    /// Creates a cursor at the start of `region` with the given default
    /// byte order.
    #[must_use]
    pub fn with_endianness(region: B, endianness: Endianness) -> Self {
        Self::from_parts(region, 0, 0, endianness)
    }

    pub(crate) fn from_parts(region: B, origin: usize, offset: usize, endianness: Endianness) -> Self {
        Self {
            region,
            origin,
            initial: offset,
            align_start: None,
            position: offset,
            endianness,
            last_data_size: 0,
            error: false,
        }
    }

    /// Returns the current position within the region.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the total usable length of the region in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.region.as_ref().len()
    }

    /// Returns the bytes left between the position and the end of the region.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.position
    }

    /// Returns the number of bytes consumed since the initial offset.
    #[inline]
    #[must_use]
    pub const fn serialized_size(&self) -> usize {
        self.position - self.initial
    }

    /// Returns the stream offset of the first byte of the region.
    #[must_use]
    pub const fn origin(&self) -> usize {
        self.origin
    }

    /// Returns the offset alignment is computed against.
    #[inline]
    #[must_use]
    pub const fn stream_offset(&self) -> usize {
        match self.align_start {
            Some(start) => self.position - start,
            None => self.origin + self.position,
        }
    }

    /// Returns the default byte order of this cursor.
    #[inline]
    #[must_use]
    pub const fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Changes the default byte order used by the non-`endian` methods.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Returns the width of the last primitive transcoded, or 0 if none.
    #[must_use]
    pub const fn last_data_size(&self) -> usize {
        self.last_data_size
    }

    /// Returns true once any operation on this cursor has failed.
    #[inline]
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error
    }

    /// Returns the whole underlying region.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.region.as_ref()
    }

    /// Returns the bytes between the initial offset and the position.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.region.as_ref()[self.initial..self.position]
    }

    /// Returns the bytes from the position to the end of the region.
    #[must_use]
    pub fn unread(&self) -> &[u8] {
        &self.region.as_ref()[self.position..]
    }

    /// Consumes the cursor and hands the region back.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.region
    }

    /// Rewinds to the initial offset and clears the error state.
    pub fn reset(&mut self) {
        self.position = self.initial;
        self.align_start = None;
        self.last_data_size = 0;
        self.error = false;
    }

    /// Rewinds to `offset`, which also becomes the new initial offset, and
    /// clears the error state.
    ///
    /// # Errors
    /// Returns [`Error::BufferOverflow`] if `offset` is past the end of the
    /// region; the cursor is left untouched in that case.
    pub fn reset_to(&mut self, offset: usize) -> Result<()> {
        let capacity = self.capacity();
        if offset > capacity {
            return Err(Error::BufferOverflow {
                required: offset,
                available: capacity,
            });
        }
        self.initial = offset;
        self.reset();
        Ok(())
    }

    /// Makes the current position stream offset zero for alignment.
    ///
    /// Used after an encapsulation header, whose payload aligns relative to
    /// its own first byte.
    pub fn reset_alignment(&mut self) {
        self.align_start = Some(self.position);
    }

    /// Skips the padding a `size`-byte value would need at the current
    /// position, without transcoding a value. Skipped bytes are left
    /// untouched.
    ///
    /// # Errors
    /// [`Error::InvalidAlignment`] for sizes other than 1, 2, 4 or 8, or the
    /// usual overflow/poison errors.
    pub fn align_to(&mut self, size: usize) -> Result<()> {
        if !crate::alignment::is_valid_alignment(size) {
            return Err(Error::InvalidAlignment { alignment: size });
        }
        let padding = self.padding(size);
        self.ensure(padding)?;
        self.advance(padding);
        Ok(())
    }

    /// Checks that `n` more bytes fit; poisons the cursor if they don't.
    ///
    /// # Errors
    /// [`Error::Poisoned`] if an earlier operation failed,
    /// [`Error::BufferOverflow`] if `n` bytes do not fit.
    #[inline]
    pub fn ensure(&mut self, n: usize) -> Result<()> {
        if self.error {
            return Err(Error::Poisoned);
        }
        let available = self.remaining();
        if n > available {
            return Err(self.fail(Error::BufferOverflow {
                required: n,
                available,
            }));
        }
        Ok(())
    }

    /// Moves the position forward by `n` bytes. Only valid after a
    /// successful [`ensure`](Self::ensure) covering `n`.
    #[inline(always)]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.position += n;
    }

    #[inline(always)]
    pub(crate) fn padding(&self, size: usize) -> usize {
        padding_for(self.stream_offset(), size)
    }

    #[inline(always)]
    pub(crate) fn record(&mut self, size: usize) {
        self.last_data_size = size;
    }

    /// Puts the cursor into the error state and returns `error` for `?`.
    #[cold]
    pub(crate) fn fail(&mut self, error: Error) -> Error {
        if error.poisons() && !self.error {
            tracing::debug!(
                position = self.position,
                capacity = self.capacity(),
                origin = self.origin,
                %error,
                "cdr buffer entered error state"
            );
            self.error = true;
        }
        error
    }

    /// Restores a position saved before a multi-step decode that failed.
    pub(crate) fn rewind(&mut self, position: usize, last_data_size: usize) {
        self.position = position;
        self.last_data_size = last_data_size;
    }

    /// Returns `n` bytes starting at the position. Caller has ensured them.
    #[inline(always)]
    pub(crate) fn peek(&self, n: usize) -> &[u8] {
        &self.region.as_ref()[self.position..self.position + n]
    }

    /// Reserves `[position, position + limit)` and returns a read cursor
    /// limited to it.
    ///
    /// The parent moves past the reserved bytes immediately. The child keeps
    /// the parent's byte order and stream alignment.
    ///
    /// # Errors
    /// Overflow or poison errors from the parent.
    pub fn sub_buffer(&mut self, limit: usize) -> Result<CdrBuffer<&[u8]>> {
        self.ensure(limit)?;
        let start = self.position;
        let origin = self.stream_offset();
        self.advance(limit);
        tracing::trace!(start, limit, origin, "carved read sub-buffer");
        Ok(CdrBuffer::from_parts(
            &self.region.as_ref()[start..start + limit],
            origin,
            0,
            self.endianness,
        ))
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CdrBuffer<B> {
    /// Returns `n` writable bytes starting at the position. Caller has
    /// ensured them.
    #[inline(always)]
    pub(crate) fn peek_mut(&mut self, n: usize) -> &mut [u8] {
        let position = self.position;
        &mut self.region.as_mut()[position..position + n]
    }

    /// Zero-fills and skips `padding` bytes. Caller has ensured them.
    #[inline(always)]
    pub(crate) fn write_padding(&mut self, padding: usize) {
        if padding > 0 {
            self.peek_mut(padding).fill(0);
            self.advance(padding);
        }
    }

    /// Like [`align_to`](Self::align_to) but writes zeros into the padding.
    ///
    /// # Errors
    /// Same as [`align_to`](Self::align_to).
    pub fn align_to_zeroed(&mut self, size: usize) -> Result<()> {
        if !crate::alignment::is_valid_alignment(size) {
            return Err(Error::InvalidAlignment { alignment: size });
        }
        let padding = self.padding(size);
        self.ensure(padding)?;
        self.write_padding(padding);
        Ok(())
    }

    /// Reserves `[position, position + limit)` and returns a write cursor
    /// limited to it. See [`sub_buffer`](CdrBuffer::sub_buffer).
    ///
    /// # Errors
    /// Overflow or poison errors from the parent.
    pub fn sub_buffer_mut(&mut self, limit: usize) -> Result<CdrBuffer<&mut [u8]>> {
        self.ensure(limit)?;
        let start = self.position;
        let origin = self.stream_offset();
        let endianness = self.endianness;
        self.advance(limit);
        tracing::trace!(start, limit, origin, "carved write sub-buffer");
        Ok(CdrBuffer::from_parts(
            &mut self.region.as_mut()[start..start + limit],
            origin,
            0,
            endianness,
        ))
    }

    /// Reserves consecutive disjoint regions of the given lengths and returns
    /// one write cursor per region.
    ///
    /// The cursors are independent, so each may be moved to its own thread.
    ///
    /// # Errors
    /// Overflow or poison errors from the parent; nothing is reserved then.
    pub fn split_mut(&mut self, limits: &[usize]) -> Result<Vec<CdrBuffer<&mut [u8]>>> {
        let total = limits
            .iter()
            .try_fold(0usize, |acc, &limit| acc.checked_add(limit))
            .unwrap_or(usize::MAX);
        self.ensure(total)?;
        let start = self.position;
        let mut origin = self.stream_offset();
        let endianness = self.endianness;
        self.advance(total);

        let mut rest = &mut self.region.as_mut()[start..start + total];
        let mut children = Vec::with_capacity(limits.len());
        for &limit in limits {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(limit);
            children.push(CdrBuffer::from_parts(head, origin, 0, endianness));
            origin += limit;
            rest = tail;
        }
        tracing::trace!(start, total, count = limits.len(), "split write sub-buffers");
        Ok(children)
    }
}

impl<B: AsRef<[u8]>> std::fmt::Debug for CdrBuffer<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdrBuffer")
            .field("capacity", &self.capacity())
            .field("position", &self.position)
            .field("origin", &self.origin)
            .field("endianness", &self.endianness)
            .field("last_data_size", &self.last_data_size)
            .field("error", &self.error)
            .finish()
    }
}
