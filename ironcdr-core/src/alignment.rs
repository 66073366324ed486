//! CDR alignment arithmetic.
//!
//! Every value is placed at a stream offset that is a multiple of its own
//! size. Offsets here are stream offsets, never memory addresses.

/// Returns the padding bytes needed before an element of `element_size`
/// bytes placed at stream offset `offset`.
///
/// Always `0 <= padding < element_size`; zero for byte-sized elements.
/// `element_size` must be one of 1, 2, 4 or 8.
#[inline(always)]
#[must_use]
pub const fn padding_for(offset: usize, element_size: usize) -> usize {
    debug_assert!(is_valid_alignment(element_size));
    (element_size - (offset % element_size)) & (element_size - 1)
}

/// Returns the smallest offset `>= offset` that is a multiple of `element_size`.
#[inline(always)]
#[must_use]
pub const fn aligned(offset: usize, element_size: usize) -> usize {
    offset + padding_for(offset, element_size)
}

/// Returns true if `size` is a width CDR aligns to.
#[inline]
#[must_use]
pub const fn is_valid_alignment(size: usize) -> bool {
    matches!(size, 1 | 2 | 4 | 8)
}
