//! # IronCDR Core
//!
//! Core engine for CDR (Common Data Representation) encoding and decoding.
//!
//! This crate provides:
//! - A cursor over caller-owned byte regions with sticky error state
//! - Alignment relative to the stream origin, with zero-filled padding
//! - Scalar, fixed-array, sequence and string transcoders, each in a
//!   default-byte-order and an explicit-byte-order flavour
//! - The 4-byte encapsulation header and a serialized size calculator
//! - Encode/decode traits for composite message types
//!
//! Nothing here allocates on the encode/decode path; all storage belongs
//! to the caller.

pub mod alignment;
pub mod array;
pub mod buffer;
pub mod codec;
pub mod config;
pub mod encapsulation;
pub mod endian;
pub mod error;
pub mod primitive;
pub mod region;
pub mod scalar;
pub mod sequence;
pub mod size;
pub mod string;

pub use alignment::{aligned, padding_for};
pub use buffer::CdrBuffer;
pub use codec::{CdrDecode, CdrEncode};
pub use config::BufferConfig;
pub use encapsulation::{EncapsulationHeader, RepresentationId};
pub use endian::Endianness;
pub use error::{Error, Result};
pub use primitive::{CdrPrimitive, PrimitiveKind};
pub use region::AlignedBuffer;
pub use size::SizeCalculator;
