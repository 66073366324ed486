//! Encodes a telemetry sample in both byte orders and decodes it back.
//!
//! Run with: `RUST_LOG=debug cargo run --example roundtrip`

use anyhow::{Context, ensure};
use ironcdr::prelude::*;

/// Telemetry sample as published by a vehicle.
#[derive(Debug, Clone, PartialEq)]
struct Telemetry {
    vehicle_id: u32,
    timestamp_ns: u64,
    armed: bool,
    attitude: [f32; 3],
    battery_cells: Vec<u16>,
    mode: String,
}

const MAX_CELLS: usize = 16;
const MAX_MODE: usize = 32;

impl Telemetry {
    fn encoded_size(&self) -> usize {
        // payload alignment restarts after the header
        let payload = SizeCalculator::new()
            .add::<u32>()
            .add::<u64>()
            .add::<bool>()
            .add_array::<f32>(3)
            .add_sequence::<u16>(self.battery_cells.len())
            .add_string(&self.mode)
            .size();
        EncapsulationHeader::ENCODED_LENGTH + payload
    }
}

impl CdrEncode for Telemetry {
    fn encode<B: AsRef<[u8]> + AsMut<[u8]>>(&self, buf: &mut CdrBuffer<B>) -> CoreResult<()> {
        buf.serialize_u32(self.vehicle_id)?;
        buf.serialize_u64(self.timestamp_ns)?;
        buf.serialize_bool(self.armed)?;
        buf.serialize_array(&self.attitude)?;
        buf.serialize_sequence(&self.battery_cells)?;
        buf.serialize_string(&self.mode)
    }
}

impl CdrDecode for Telemetry {
    fn decode<B: AsRef<[u8]>>(buf: &mut CdrBuffer<B>) -> CoreResult<Self> {
        let vehicle_id = buf.deserialize_u32()?;
        let timestamp_ns = buf.deserialize_u64()?;
        let armed = buf.deserialize_bool()?;
        let attitude = buf.read::<[f32; 3]>()?;
        let mut cells = [0u16; MAX_CELLS];
        let count = buf.deserialize_sequence(&mut cells)?;
        let mut mode = [0u8; MAX_MODE];
        let mode = buf.deserialize_str(&mut mode)?.to_owned();
        Ok(Self {
            vehicle_id,
            timestamp_ns,
            armed,
            attitude,
            battery_cells: cells[..count].to_vec(),
            mode,
        })
    }
}

fn round_trip(sample: &Telemetry, endianness: Endianness) -> anyhow::Result<()> {
    let mut region: AlignedBuffer<256> = AlignedBuffer::new();
    let expected = sample.encoded_size();

    let mut writer = CdrBuffer::new(&mut region);
    EncapsulationHeader::new(endianness).encode(&mut writer)?;
    writer.write(sample).context("encoding telemetry")?;
    let len = writer.position();
    ensure!(len == expected, "encoded {len} bytes, calculated {expected}");
    tracing::info!(%endianness, len, "encoded sample");
    println!("{endianness}: {:02x?}", &region.as_slice()[..len]);

    let mut reader = CdrBuffer::new(&region.as_slice()[..len]);
    let header = EncapsulationHeader::decode(&mut reader)?;
    let decoded: Telemetry = reader.read().context("decoding telemetry")?;
    ensure!(header.endianness() == endianness, "header announced {}", header.endianness());
    ensure!(&decoded == sample, "decoded sample differs: {decoded:?}");
    ensure!(reader.remaining() == 0, "{} trailing bytes", reader.remaining());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sample = Telemetry {
        vehicle_id: 17,
        timestamp_ns: 1_700_000_000_123_456_789,
        armed: true,
        attitude: [0.01, -0.25, 3.1],
        battery_cells: vec![4150, 4148, 4152, 4139],
        mode: "position_hold".to_owned(),
    };

    for endianness in [Endianness::Big, Endianness::Little] {
        round_trip(&sample, endianness)?;
    }

    // An undersized region fails once and stays failed.
    let mut small = [0u8; 20];
    let mut writer = CdrBuffer::new(&mut small[..]);
    match writer.write(&sample) {
        Ok(()) => anyhow::bail!("20-byte region unexpectedly held the sample"),
        Err(err) => println!("small region: {err} (error state: {})", writer.has_error()),
    }

    println!("All round trips succeeded");
    Ok(())
}
