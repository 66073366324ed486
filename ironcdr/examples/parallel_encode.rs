//! Encodes independent records into disjoint slots of one message from
//! several threads.
//!
//! Run with: `cargo run --example parallel_encode`

use anyhow::ensure;
use ironcdr::prelude::*;

const SLOTS: usize = 4;
const SLOT_SIZE: usize = 32;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut region: AlignedBuffer<{ 4 + SLOTS * SLOT_SIZE }> = AlignedBuffer::new();
    let mut parent = CdrBuffer::with_endianness(&mut region, Endianness::Big);
    parent.serialize_u32(SLOTS as u32)?;

    let children = parent.split_mut(&[SLOT_SIZE; SLOTS])?;
    let results: Vec<CoreResult<usize>> = std::thread::scope(|scope| {
        let handles: Vec<_> = children
            .into_iter()
            .enumerate()
            .map(|(slot, mut child)| {
                scope.spawn(move || -> CoreResult<usize> {
                    child.serialize_u16(slot as u16)?;
                    child.serialize_f64(slot as f64 * 1.5)?;
                    child.serialize_sequence(&[slot as u32; 3])?;
                    Ok(child.position())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(Err(CoreError::Poisoned)))
            .collect()
    });
    for (slot, result) in results.into_iter().enumerate() {
        let used = result?;
        tracing::info!(slot, used, "slot encoded");
    }
    ensure!(parent.position() == 4 + SLOTS * SLOT_SIZE);
    drop(parent);

    let mut reader = CdrBuffer::with_endianness(region.as_slice(), Endianness::Big);
    let slots = reader.deserialize_u32()? as usize;
    for expected in 0..slots {
        let mut slot = reader.sub_buffer(SLOT_SIZE)?;
        let id = slot.deserialize_u16()?;
        let value = slot.deserialize_f64()?;
        let mut values = [0u32; 3];
        slot.deserialize_sequence(&mut values)?;
        ensure!(id as usize == expected, "slot {expected} carried id {id}");
        println!("slot {id}: value={value} values={values:?}");
    }
    Ok(())
}
