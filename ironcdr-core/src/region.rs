//! Owned backing stores for CDR buffers.
//!
//! Any `AsRef<[u8]>` works as a region; [`AlignedBuffer`] is the
//! allocation-free option with a cache-line aligned start, so the native
//! fast path copies between aligned addresses.

/// Cache-line aligned, fixed-size byte region.
///
/// # Type Parameters
/// * `N` - Region size in bytes
#[repr(C, align(64))]
#[derive(Clone, PartialEq, Eq)]
pub struct AlignedBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> AlignedBuffer<N> {
    /// Creates a new zeroed region.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0u8; N] }
    }

    /// Creates a region holding a copy of `bytes`, zero-filled after them.
    ///
    /// Returns `None` if `bytes` is longer than `N`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > N {
            return None;
        }
        let mut region = Self::new();
        region.data[..bytes.len()].copy_from_slice(bytes);
        Some(region)
    }

    /// Returns the capacity of the region in bytes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the region as a byte slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the region as a mutable byte slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Zeroes the whole region.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl<const N: usize> Default for AlignedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsRef<[u8]> for AlignedBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for AlignedBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> std::fmt::Debug for AlignedBuffer<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("capacity", &N)
            .finish()
    }
}
