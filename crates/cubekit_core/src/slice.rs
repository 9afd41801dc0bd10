use std::f32::consts::FRAC_PI_2;
use std::fmt;

use crate::{Axis, LayerMask};

/// Resolved turn: which layers along which axis move, and how far.
///
/// The selected layers rotate by `direction` quarter turns counterclockwise
/// around the positive end of `axis` (right-hand rule). A negative
/// `direction` turns clockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Slice {
    /// Axis of rotation.
    pub axis: Axis,
    /// Layers affected by the turn. Empty means the whole cube.
    pub layers: LayerMask,
    /// Signed number of quarter turns.
    pub direction: i32,
}
impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rotation() {
            write!(f, "{}*{:+}", self.axis, self.direction)
        } else {
            write!(f, "{}{}{:+}", self.axis, self.layers, self.direction)
        }
    }
}
impl Slice {
    /// Constructs a whole-cube rotation.
    pub fn rotation(axis: Axis, direction: i32) -> Self {
        Self {
            axis,
            layers: LayerMask::EMPTY,
            direction,
        }
    }

    /// Returns whether the slice rotates the whole cube rather than some
    /// layers.
    pub fn is_rotation(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns whether a piece at `layer` along the slice axis is moved by
    /// the slice.
    pub fn contains_layer(&self, layer: u8) -> bool {
        self.is_rotation() || self.layers.contains(layer)
    }

    /// Returns the number of counterclockwise quarter turns, in `0..4`.
    pub fn quarter_turns(&self) -> u8 {
        self.direction.rem_euclid(4) as u8
    }

    /// Returns the slice that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: -self.direction,
            ..self
        }
    }

    /// Returns the total signed angle of the turn, in radians.
    pub fn total_angle(&self) -> f32 {
        self.direction as f32 * FRAC_PI_2
    }

    /// Returns the signed angle corresponding to `progress_delta` percent of
    /// the turn, in radians.
    ///
    /// Progress maps linearly onto the angle: a full 100% always corresponds
    /// to `|direction|` quarter turns.
    pub fn angle_for_progress(&self, progress_delta: f32) -> f32 {
        self.total_angle() * progress_delta / 100.0
    }
}
