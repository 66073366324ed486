//! Byte order handling.
//!
//! The native order is fixed at build time from `target_endian`. The swap
//! helpers reverse raw unsigned words; typed values are swapped by
//! [`CdrPrimitive`](crate::primitive::CdrPrimitive), which must agree with
//! them byte for byte.

/// Byte order used for multi-byte values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endianness {
    /// Byte order of the machine running this code.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;

    /// Byte order of the machine running this code.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// Returns the other byte order.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }

    /// Returns true if values in this order can be copied without swapping.
    #[inline(always)]
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Big, Self::Big) | (Self::Little, Self::Little)
        )
    }

    /// Returns a short lowercase name ("big" / "little").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Little => "little",
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reverses the bytes of a 2-byte word.
#[inline(always)]
#[must_use]
pub const fn swap_2(value: u16) -> u16 {
    value.swap_bytes()
}

/// Reverses the bytes of a 4-byte word.
#[inline(always)]
#[must_use]
pub const fn swap_4(value: u32) -> u32 {
    value.swap_bytes()
}

/// Reverses the bytes of an 8-byte word.
#[inline(always)]
#[must_use]
pub const fn swap_8(value: u64) -> u64 {
    value.swap_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_matches_target() {
        assert_eq!(
            Endianness::NATIVE == Endianness::Little,
            cfg!(target_endian = "little")
        );
        assert!(Endianness::NATIVE.is_native());
        assert!(!Endianness::NATIVE.opposite().is_native());
    }

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Endianness::Big.opposite(), Endianness::Little);
        assert_eq!(Endianness::Little.opposite().opposite(), Endianness::Little);
    }

    #[test]
    fn test_swaps() {
        assert_eq!(swap_2(0x1234), 0x3412);
        assert_eq!(swap_4(0xAABB_CCDD), 0xDDCC_BBAA);
        assert_eq!(swap_8(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
    }

    #[test]
    fn test_swaps_agree_with_typed_foreign_writes() {
        use crate::primitive::CdrPrimitive;

        let foreign = Endianness::NATIVE.opposite();
        let mut two = [0u8; 2];
        0x1234u16.write_to(&mut two, foreign);
        assert_eq!(two, swap_2(0x1234).to_ne_bytes());

        let mut four = [0u8; 4];
        (-2i32).write_to(&mut four, foreign);
        assert_eq!(four, swap_4((-2i32) as u32).to_ne_bytes());

        let mut eight = [0u8; 8];
        1.5f64.write_to(&mut eight, foreign);
        assert_eq!(eight, swap_8(1.5f64.to_bits()).to_ne_bytes());
        assert_eq!(f64::read_from(&eight, foreign), 1.5);
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Endianness::default(), Endianness::NATIVE);
        assert_eq!(Endianness::Big.to_string(), "big");
        assert_eq!(format!("{}", Endianness::Little), "little");
    }
}
