//! Mutable piece state of a cube.

use std::collections::HashMap;
use std::ops::{Index, IndexMut};
use std::sync::{Arc, Mutex, PoisonError};

use smallvec::SmallVec;

use crate::{Axis, ConfigError, Face, Piece, PieceInfo, Slice, Topology};

/// Returns the shared topology for a cube with `layer_count` layers,
/// generating it on first use.
pub fn topology(layer_count: u8) -> Result<Arc<Topology>, ConfigError> {
    lazy_static! {
        static ref CACHE: Mutex<HashMap<u8, Arc<Topology>>> = Mutex::new(HashMap::new());
    }

    let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(topology) = cache.get(&layer_count) {
        return Ok(Arc::clone(topology));
    }
    let topology = Arc::new(Topology::generate(layer_count)?);
    log::debug!(
        "generated topology for {n}x{n}x{n} cube with {} pieces",
        topology.piece_count(),
        n = layer_count,
    );
    cache.insert(layer_count, Arc::clone(&topology));
    Ok(topology)
}

/// Sticker on a piece.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sticker {
    /// Direction the sticker currently faces.
    pub facing: Face,
    /// Label on the sticker. This only changes when a state is loaded.
    pub label: Face,
}

/// Current position and stickers of a piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceState {
    /// Layer indices of the piece, indexed by [`Axis`].
    pub position: [u8; 3],
    /// Stickers on the piece.
    pub stickers: SmallVec<[Sticker; 3]>,
}
impl PieceState {
    fn solved(info: &PieceInfo) -> Self {
        Self {
            position: info.home,
            stickers: info
                .stickers
                .iter()
                .map(|&face| Sticker {
                    facing: face,
                    label: face,
                })
                .collect(),
        }
    }

    /// Returns the layer index of the piece along `axis`.
    pub fn layer(&self, axis: Axis) -> u8 {
        self.position[axis as usize]
    }

    /// Rotates the piece a quarter turn counterclockwise around the positive
    /// end of `axis`.
    fn quarter_turn(&mut self, axis: Axis, layer_count: u8) {
        let [from, to] = axis.quarter_turn_axes();
        let (from, to) = (from as usize, to as usize);
        let old = self.position;
        self.position[to] = old[from];
        self.position[from] = layer_count - 1 - old[to];
        for sticker in &mut self.stickers {
            sticker.facing = sticker.facing.quarter_turn(axis);
        }
    }
}

/// Logical state of every piece of a cube.
///
/// Positions are exact layer indices, so any sequence of committed turns
/// leaves every piece on a valid cell.
#[derive(Debug, Clone)]
pub struct CubeState {
    topology: Arc<Topology>,
    piece_states: Box<[PieceState]>,
}
impl Eq for CubeState {}
impl PartialEq for CubeState {
    fn eq(&self, other: &Self) -> bool {
        self.piece_states == other.piece_states
    }
}
impl Index<Piece> for CubeState {
    type Output = PieceState;

    fn index(&self, piece: Piece) -> &Self::Output {
        &self.piece_states[piece.0 as usize]
    }
}
impl IndexMut<Piece> for CubeState {
    fn index_mut(&mut self, piece: Piece) -> &mut Self::Output {
        &mut self.piece_states[piece.0 as usize]
    }
}
impl CubeState {
    /// Constructs a solved cube with `layer_count` layers.
    pub fn new(layer_count: u8) -> Result<Self, ConfigError> {
        Ok(Self::from_topology(topology(layer_count)?))
    }

    /// Constructs a solved cube with the given topology.
    pub fn from_topology(topology: Arc<Topology>) -> Self {
        let piece_states = topology.pieces().map(PieceState::solved).collect();
        Self {
            topology,
            piece_states,
        }
    }

    /// Returns the topology of the cube.
    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    /// Returns the number of layers along each axis.
    pub fn layer_count(&self) -> u8 {
        self.topology.layer_count()
    }

    /// Returns an iterator over all pieces and their states.
    pub fn pieces(&self) -> impl Iterator<Item = (Piece, &PieceState)> {
        self.piece_states
            .iter()
            .enumerate()
            .map(|(i, state)| (Piece(i as u16), state))
    }

    /// Returns the pieces that `slice` moves in the current state.
    pub fn pieces_in_slice(&self, slice: Slice) -> Vec<Piece> {
        self.pieces()
            .filter(|(_, state)| slice.contains_layer(state.layer(slice.axis)))
            .map(|(piece, _)| piece)
            .collect()
    }

    /// Rotates `pieces` by the full angle of `slice`.
    ///
    /// `pieces` should be the result of [`Self::pieces_in_slice()`] computed
    /// on the state before the turn.
    pub fn apply_turn(&mut self, slice: Slice, pieces: &[Piece]) {
        let layer_count = self.layer_count();
        for &piece in pieces {
            for _ in 0..slice.quarter_turns() {
                self[piece].quarter_turn(slice.axis, layer_count);
            }
        }
    }

    /// Applies `slice` to the current state.
    pub fn turn(&mut self, slice: Slice) {
        let pieces = self.pieces_in_slice(slice);
        self.apply_turn(slice, &pieces);
    }

    /// Restores every piece to its home position with its original stickers.
    pub fn reset(&mut self) {
        for (state, info) in self.piece_states.iter_mut().zip(self.topology.pieces()) {
            *state = PieceState::solved(info);
        }
    }

    /// Returns whether every piece is at home in its original orientation.
    pub fn is_solved(&self) -> bool {
        self.piece_states
            .iter()
            .flat_map(|state| &state.stickers)
            .all(|sticker| sticker.facing == sticker.label)
    }
}
