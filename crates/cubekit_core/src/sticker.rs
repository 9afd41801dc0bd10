//! Sticker state and the Kociemba string codec.

use std::fmt;

use strum::IntoEnumIterator;

use crate::{CodecError, ConfigError, CubeState, Face, LAYER_COUNT_RANGE};

/// Returns the `(row, col)` cell on the grid of `facing` that a sticker on a
/// piece at `position` occupies.
///
/// Grids are laid out as seen from outside the cube, with U above F and D
/// below it, and every side face upright.
pub fn sticker_cell(layer_count: u8, facing: Face, position: [u8; 3]) -> (u8, u8) {
    let m = layer_count - 1;
    let [x, y, z] = position;
    match facing {
        Face::R => (m - y, m - z),
        Face::L => (m - y, z),
        Face::U => (z, x),
        Face::D => (m - z, x),
        Face::F => (m - y, x),
        Face::B => (m - y, m - x),
    }
}

/// Labels on each face of the cube, as six `N`x`N` grids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickerState {
    layer_count: u8,
    /// Row-major grids, indexed by `Face as usize`.
    grids: [Vec<Face>; 6],
}
impl fmt::Display for StickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::KOCIEMBA_ORDER {
            for &label in self.grid(face) {
                write!(f, "{label}")?;
            }
        }
        Ok(())
    }
}
impl StickerState {
    /// Returns the solved state of a cube with `layer_count` layers.
    pub fn solved(layer_count: u8) -> Result<Self, ConfigError> {
        if !LAYER_COUNT_RANGE.contains(&layer_count) {
            return Err(ConfigError::LayerCountOutOfRange(layer_count));
        }
        let cells = layer_count as usize * layer_count as usize;
        Ok(Self {
            layer_count,
            grids: std::array::from_fn(|i| vec![face_from_index(i); cells]),
        })
    }

    /// Returns the number of layers along each axis.
    pub fn layer_count(&self) -> u8 {
        self.layer_count
    }

    /// Returns the row-major grid of labels on `face`.
    pub fn grid(&self, face: Face) -> &[Face] {
        &self.grids[face as usize]
    }

    /// Returns the label at `(row, col)` on `face`.
    pub fn get(&self, face: Face, row: u8, col: u8) -> Face {
        self.grids[face as usize][self.cell_index(row, col)]
    }

    /// Sets the label at `(row, col)` on `face`.
    pub fn set(&mut self, face: Face, row: u8, col: u8, label: Face) {
        let i = self.cell_index(row, col);
        self.grids[face as usize][i] = label;
    }

    fn cell_index(&self, row: u8, col: u8) -> usize {
        row as usize * self.layer_count as usize + col as usize
    }

    /// Reads the labels off every sticker of `cube`.
    ///
    /// Every piece of `cube` must be at rest; turns in progress are not
    /// represented in [`CubeState`].
    pub fn capture(cube: &CubeState) -> Self {
        let n = cube.layer_count();
        let mut grids: [Vec<Option<Face>>; 6] =
            std::array::from_fn(|_| vec![None; n as usize * n as usize]);
        for (_, piece) in cube.pieces() {
            for sticker in &piece.stickers {
                let (row, col) = sticker_cell(n, sticker.facing, piece.position);
                let i = row as usize * n as usize + col as usize;
                let cell = &mut grids[sticker.facing as usize][i];
                debug_assert!(cell.is_none(), "two stickers on one cell");
                *cell = Some(sticker.label);
            }
        }
        Self {
            layer_count: n,
            // Every cell is covered by exactly one sticker.
            grids: grids.map(|grid| grid.into_iter().map(Option::unwrap_or_default).collect()),
        }
    }

    /// Writes the labels of this state onto the stickers of `cube`.
    pub fn apply_to(&self, cube: &mut CubeState) -> Result<(), CodecError> {
        let n = cube.layer_count();
        if n != self.layer_count {
            return Err(CodecError::InvalidLength {
                expected: kociemba_len(n),
                actual: kociemba_len(self.layer_count),
            });
        }
        let pieces = cube.pieces().map(|(piece, _)| piece).collect::<Vec<_>>();
        for piece in pieces {
            let state = &mut cube[piece];
            let position = state.position;
            for sticker in &mut state.stickers {
                let (row, col) = sticker_cell(n, sticker.facing, position);
                sticker.label = self.get(sticker.facing, row, col);
            }
        }
        Ok(())
    }

    /// Returns how many times each label occurs, indexed by `Face as usize`.
    pub fn face_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for label in self.grids.iter().flatten() {
            counts[*label as usize] += 1;
        }
        counts
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.grids
            .iter()
            .all(|grid| grid.iter().all(|&label| label == grid[0]))
    }

    /// Encodes the state as a Kociemba string: faces in the order
    /// `URFDLB`, each row-major.
    pub fn to_kociemba(&self) -> String {
        self.to_string()
    }

    /// Decodes a Kociemba string for a cube with `layer_count` layers.
    ///
    /// The string must have length `6 * N * N`, contain only `UDLRFB`, and
    /// use each label exactly `N * N` times.
    pub fn from_kociemba(s: &str, layer_count: u8) -> Result<Self, CodecError> {
        let mut ret = Self::solved(layer_count)?;

        let expected = kociemba_len(layer_count);
        let actual = s.chars().count();
        if actual != expected {
            return Err(CodecError::InvalidLength { expected, actual });
        }

        let cells = layer_count as usize * layer_count as usize;
        for (index, ch) in s.chars().enumerate() {
            let label = Face::from_symbol(ch).ok_or(CodecError::InvalidChar { index, ch })?;
            let face = Face::KOCIEMBA_ORDER[index / cells];
            ret.grids[face as usize][index % cells] = label;
        }

        let counts = ret.face_counts();
        if let Some(face) = Face::iter().find(|&face| counts[face as usize] != cells) {
            return Err(CodecError::InvalidFaceCount {
                face,
                count: counts[face as usize],
                expected: cells,
            });
        }

        Ok(ret)
    }

    /// Decodes a Kociemba string, inferring the cube size from its length.
    pub fn from_kociemba_any(s: &str) -> Result<Self, CodecError> {
        let len = s.chars().count();
        let layer_count = LAYER_COUNT_RANGE
            .find(|&n| kociemba_len(n) == len)
            .ok_or(CodecError::UnsupportedLength(len))?;
        Self::from_kociemba(s, layer_count)
    }
}

/// Returns the length of a Kociemba string for a cube with `layer_count`
/// layers.
pub fn kociemba_len(layer_count: u8) -> usize {
    6 * layer_count as usize * layer_count as usize
}

fn face_from_index(i: usize) -> Face {
    Face::iter().nth(i).unwrap_or_default()
}
