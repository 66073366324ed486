//! Prelude module for convenient imports.
//!
//! ```
//! use ironcdr::prelude::*;
//! ```

pub use ironcdr_core::buffer::CdrBuffer;
pub use ironcdr_core::codec::{CdrDecode, CdrEncode};
pub use ironcdr_core::config::BufferConfig;
pub use ironcdr_core::encapsulation::{EncapsulationHeader, RepresentationId};
pub use ironcdr_core::endian::Endianness;
pub use ironcdr_core::error::{Error as CoreError, Result as CoreResult};
pub use ironcdr_core::primitive::{CdrPrimitive, PrimitiveKind};
pub use ironcdr_core::region::AlignedBuffer;
pub use ironcdr_core::size::SizeCalculator;
