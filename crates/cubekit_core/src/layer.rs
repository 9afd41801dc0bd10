//! Layer bitmasks.

use std::fmt;
use std::ops::{BitOr, BitOrAssign, RangeInclusive};

/// Bitmask of layer indices along one axis.
///
/// Layer `0` is on the negative side of the axis (L, D, or B) and layer
/// `layer_count - 1` is on the positive side (R, U, or F). An empty mask in a
/// [`crate::Slice`] means the whole cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u16);
impl fmt::Display for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for layer in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            first = false;
            write!(f, "{layer}")?;
        }
        write!(f, "}}")
    }
}
impl BitOr for LayerMask {
    type Output = LayerMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        LayerMask(self.0 | rhs.0)
    }
}
impl BitOrAssign for LayerMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
impl FromIterator<u8> for LayerMask {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        iter.into_iter()
            .fold(LayerMask::EMPTY, |acc, layer| acc | LayerMask::single(layer))
    }
}
impl LayerMask {
    /// Empty layer mask.
    pub const EMPTY: Self = Self(0);

    /// Returns a mask containing every layer of a cube with `layer_count`
    /// layers.
    pub fn all(layer_count: u8) -> Self {
        Self((1 << layer_count) - 1)
    }
    /// Returns a mask containing a single layer.
    pub fn single(layer: u8) -> Self {
        Self(1 << layer)
    }
    /// Returns a mask containing a contiguous range of layers.
    pub fn range(range: RangeInclusive<u8>) -> Self {
        range.collect()
    }

    /// Returns whether the mask contains no layers.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    /// Returns the number of layers in the mask.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
    /// Returns whether the mask contains `layer`.
    pub fn contains(self, layer: u8) -> bool {
        layer < 16 && self.0 & (1 << layer) != 0
    }
    /// Returns an iterator over the layers in the mask, from lowest to
    /// highest.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..16).filter(move |&layer| self.contains(layer))
    }

    /// Returns the mask mirrored across the middle of the cube.
    #[must_use]
    pub fn reversed(self, layer_count: u8) -> Self {
        self.iter().map(|layer| layer_count - 1 - layer).collect()
    }
}
