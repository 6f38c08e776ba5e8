//! Blade identifiers.
//!
//! A blade is named by the set of basis vectors it is built from, stored
//! as a bitmask: bit i set means e_i participates.
//! e.g. e1=0b001, e2=0b010, e12=0b011, e123=0b111.

use std::fmt;

/// Bitmask identifying a single basis blade.
///
/// Masks are algebra-agnostic: any bit pattern is a valid value, and
/// whether it fits a given algebra's dimension is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct BladeMask(u64);

impl BladeMask {
    /// The scalar blade (no basis vectors).
    pub const SCALAR: BladeMask = BladeMask(0);

    /// Largest number of basis vectors a mask can address.
    pub const MAX_BASIS: usize = u64::BITS as usize;

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Mask of the single basis vector `e_index`, or `None` past 64 bits.
    pub fn basis(index: usize) -> Option<Self> {
        if index < Self::MAX_BASIS {
            Some(Self(1u64 << index))
        } else {
            None
        }
    }

    /// Raw bit pattern.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Number of basis vectors in the blade (popcount of the mask).
    pub const fn grade(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_scalar(self) -> bool {
        self.0 == 0
    }

    /// Whether basis vector `e_index` participates.
    pub fn contains(self, index: usize) -> bool {
        index < Self::MAX_BASIS && (self.0 >> index) & 1 == 1
    }

    /// Indices of the participating basis vectors, ascending.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let idx = rest.trailing_zeros() as usize;
            rest &= rest - 1;
            Some(idx)
        })
    }
}

impl From<u64> for BladeMask {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<BladeMask> for u64 {
    fn from(mask: BladeMask) -> Self {
        mask.0
    }
}

impl fmt::Display for BladeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
