//! Logical model of an NxNxN twisty cube for N = 2 through 7.
//!
//! Pieces are tracked by exact integer layer indices. A [`Slice`] describes
//! which layers a turn moves and by how much, [`CubeState`] applies slices to
//! the pieces, and [`StickerState`] reads the resulting face grids and
//! converts them to and from Kociemba strings.

#[macro_use]
extern crate lazy_static;

use std::ops::RangeInclusive;

mod error;
mod face;
mod layer;
mod puzzle;
mod slice;
mod sticker;
mod topology;


pub use error::*;
pub use face::*;
pub use layer::*;
pub use puzzle::*;
pub use slice::*;
pub use sticker::*;
pub use topology::*;

/// Smallest supported number of layers.
pub const MIN_LAYER_COUNT: u8 = 2;
/// Largest supported number of layers.
pub const MAX_LAYER_COUNT: u8 = 7;
/// Supported numbers of layers.
pub const LAYER_COUNT_RANGE: RangeInclusive<u8> = MIN_LAYER_COUNT..=MAX_LAYER_COUNT;
/// Number of layers used when none is specified.
pub const DEFAULT_LAYER_COUNT: u8 = 3;
