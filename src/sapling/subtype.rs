//! Sapling sub-type encoding.
//!
//! A sapling cell's sub-type packs the variant into the low three bits and
//! the growth mark into bit 3. Bits 4..=7 are undefined and must be zero.

use serde::{Deserialize, Serialize};

/// Bits holding the variant code
pub const VARIANT_MASK: u8 = 0x7;

/// Set once the sapling has passed its first growth roll
pub const MARK_BIT: u8 = 0x8;

/// Growth family of a sapling
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    AutumnBrown = 0,
    AutumnOrange = 1,
    AutumnPurple = 2,
    AutumnYellow = 3,
    Fir = 4,
    Redwood = 5,
    Acacia = 6,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::AutumnBrown,
        Variant::AutumnOrange,
        Variant::AutumnPurple,
        Variant::AutumnYellow,
        Variant::Fir,
        Variant::Redwood,
        Variant::Acacia,
    ];

    /// Numeric code stored in the low bits
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Variant for a code; `None` for 7 and anything wider than 3 bits
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

/// Decoded sapling cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SaplingState {
    pub variant: Variant,
    /// Second phase: the next successful roll grows the tree
    pub marked: bool,
}

impl SaplingState {
    /// Freshly planted, unmarked sapling
    pub fn new(variant: Variant) -> Self {
        Self { variant, marked: false }
    }

    /// Copy of this state with the mark set
    pub fn with_mark(self) -> Self {
        Self { marked: true, ..self }
    }

    pub fn encode(self) -> u8 {
        let mark = if self.marked { MARK_BIT } else { 0 };
        self.variant.code() | mark
    }

    /// Decode a sub-type, rejecting the unused variant code and any
    /// undefined high bit.
    pub fn decode(subtype: u8) -> Option<Self> {
        if subtype & !(VARIANT_MASK | MARK_BIT) != 0 {
            return None;
        }
        let variant = Variant::from_code(strip_mark(subtype))?;
        Some(Self {
            variant,
            marked: is_marked(subtype),
        })
    }
}

/// Sub-type with the mark bit removed
pub fn strip_mark(subtype: u8) -> u8 {
    subtype & VARIANT_MASK
}

pub fn is_marked(subtype: u8) -> bool {
    subtype & MARK_BIT != 0
}
