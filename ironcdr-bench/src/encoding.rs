//! Encoding/decoding benchmark helpers.

use std::time::{Duration, Instant};

use ironcdr_core::{AlignedBuffer, CdrBuffer, Endianness};

/// Runs `encode_fn` against a fresh cursor over a reused 1 KiB region.
///
/// The cursor is recreated each iteration, so every run starts at offset 0
/// with no error state.
pub fn benchmark_encode<F>(iterations: usize, endianness: Endianness, mut encode_fn: F) -> Duration
where
    F: FnMut(&mut CdrBuffer<&mut [u8]>),
{
    let mut region = AlignedBuffer::<1024>::new();
    let start = Instant::now();

    for _ in 0..iterations {
        let mut cursor = CdrBuffer::with_endianness(region.as_mut_slice(), endianness);
        encode_fn(&mut cursor);
    }

    start.elapsed()
}

/// Runs `decode_fn` against a fresh read cursor over `data`.
pub fn benchmark_decode<F, T>(
    iterations: usize,
    data: &[u8],
    endianness: Endianness,
    mut decode_fn: F,
) -> Duration
where
    F: FnMut(&mut CdrBuffer<&[u8]>) -> T,
{
    let start = Instant::now();

    for _ in 0..iterations {
        let mut cursor = CdrBuffer::with_endianness(data, endianness);
        std::hint::black_box(decode_fn(&mut cursor));
    }

    start.elapsed()
}
