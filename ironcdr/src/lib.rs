//! # IronCDR
//!
//! CDR (Common Data Representation) encoding for Rust over fixed,
//! caller-owned buffers.
//!
//! ## Features
//!
//! - **No allocation on the hot path** - Cursors borrow the caller's region
//! - **Alignment by stream offset** - Padding follows the CDR rules even
//!   for sub-regions of a larger message
//! - **Both byte orders** - Per-cursor default or explicit per call, with a
//!   bulk copy when the wire order matches the machine
//! - **Sticky errors** - The first failure poisons the cursor, so a whole
//!   message can be encoded and checked once at the end
//!
//! ## Quick Start
//!
//! ```
//! use ironcdr::prelude::*;
//!
//! let mut region = [0u8; 64];
//! let mut writer = CdrBuffer::new(&mut region[..]);
//! EncapsulationHeader::new(Endianness::Little).encode(&mut writer)?;
//! writer.serialize_u32(7)?;
//! writer.serialize_string("hello")?;
//! let len = writer.position();
//!
//! let mut reader = CdrBuffer::new(&region[..len]);
//! EncapsulationHeader::decode(&mut reader)?;
//! assert_eq!(reader.deserialize_u32()?, 7);
//! let mut text = [0u8; 16];
//! assert_eq!(reader.deserialize_str(&mut text)?, "hello");
//! # Ok::<(), ironcdr::CoreError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Buffer cursor, transcoders, encapsulation and size helpers

pub mod prelude;

/// Core types and traits for CDR encoding/decoding.
pub mod core {
    pub use ironcdr_core::*;
}

// Re-export commonly used items at the crate root
pub use ironcdr_core::{
    AlignedBuffer, BufferConfig, CdrBuffer, CdrDecode, CdrEncode, CdrPrimitive,
    EncapsulationHeader, Endianness, PrimitiveKind, RepresentationId, SizeCalculator,
};
pub use ironcdr_core::{Error as CoreError, Result as CoreResult};
