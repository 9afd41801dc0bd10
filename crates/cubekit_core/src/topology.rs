//! Piece topology for an NxNxN cube.

use itertools::{Itertools, iproduct};
use smallvec::SmallVec;
use strum::IntoEnumIterator;

use crate::{ConfigError, Face, LAYER_COUNT_RANGE, Sign};

/// Size-dependent constants of a cube.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeConfig {
    /// Number of layers along each axis.
    pub layer_count: u8,
    /// Coordinate of each layer, from `-1.0` to `1.0` inclusive.
    pub layer_coords: Vec<f32>,
    /// Width of one piece, in the same units as `layer_coords`.
    pub piece_size: f32,
    /// Radius of the core sphere drawn inside the cube.
    pub core_radius: f32,
    /// Scale factor applied to pieces on the outer layers.
    pub outer_layer_multiplier: f32,
}
impl CubeConfig {
    /// Returns the configuration for a cube with `layer_count` layers.
    pub fn new(layer_count: u8) -> Result<Self, ConfigError> {
        if !LAYER_COUNT_RANGE.contains(&layer_count) {
            return Err(ConfigError::LayerCountOutOfRange(layer_count));
        }
        let max = (layer_count - 1) as f32;
        let layer_coords = (0..layer_count)
            .map(|i| -1.0 + 2.0 * i as f32 / max)
            .collect();

        // Cosmetic values, tuned by eye for each cube size.
        let (core_radius, outer_layer_multiplier) = match layer_count {
            2 => (2.0, 1.0),
            3 => (1.53, 1.0),
            4 => (1.36, 1.1),
            5 => (1.3, 1.2),
            6 => (1.22, 1.3),
            _ => (1.21, 1.35),
        };

        Ok(Self {
            layer_count,
            layer_coords,
            piece_size: 2.0 / max,
            core_radius,
            outer_layer_multiplier,
        })
    }

    /// Returns the layer indices strictly between the two outer layers.
    pub fn middle_layers(&self) -> std::ops::Range<u8> {
        1..self.layer_count - 1
    }

    /// Returns the index of the outer layer on the side given by `sign`.
    pub fn outer_layer(&self, sign: Sign) -> u8 {
        match sign {
            Sign::Pos => self.layer_count - 1,
            Sign::Neg => 0,
        }
    }
}

/// Kind of piece, determined by how many outer layers it lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Piece with three stickers.
    Corner,
    /// Piece with two stickers.
    Edge,
    /// Piece with one sticker.
    Center,
}
impl PieceKind {
    /// Classifies a piece by the number of its coordinates that lie on an
    /// outer layer. Returns `None` for interior positions.
    pub fn classify(layer_count: u8, position: [u8; 3]) -> Option<Self> {
        let outer = position
            .iter()
            .filter(|&&i| i == 0 || i == layer_count - 1)
            .count();
        match outer {
            3 => Some(Self::Corner),
            2 => Some(Self::Edge),
            1 => Some(Self::Center),
            _ => None,
        }
    }

    /// Returns the number of stickers on a piece of this kind.
    pub fn sticker_count(self) -> usize {
        match self {
            Self::Corner => 3,
            Self::Edge => 2,
            Self::Center => 1,
        }
    }
}

/// Piece ID.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece(pub u16);

/// Static description of a piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceInfo {
    /// Kind of piece.
    pub kind: PieceKind,
    /// Layer indices of the piece in the solved state, indexed by [`Axis`].
    pub home: [u8; 3],
    /// Faces that the piece's stickers face in the solved state, in the
    /// order R, L, U, D, F, B.
    pub stickers: SmallVec<[Face; 3]>,
}
impl PieceInfo {
    fn new(layer_count: u8, home: [u8; 3]) -> Self {
        let stickers: SmallVec<[Face; 3]> = Face::iter()
            .filter(|face| {
                let outer = match face.sign() {
                    Sign::Pos => layer_count - 1,
                    Sign::Neg => 0,
                };
                home[face.axis() as usize] == outer
            })
            .collect();
        let kind = match stickers.len() {
            3 => PieceKind::Corner,
            2 => PieceKind::Edge,
            _ => PieceKind::Center,
        };
        debug_assert_eq!(PieceKind::classify(layer_count, home), Some(kind));
        Self {
            kind,
            home,
            stickers,
        }
    }
}

/// Complete piece topology of an NxNxN cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    /// Size-dependent constants.
    pub config: CubeConfig,
    /// The 8 corners.
    pub corners: Vec<PieceInfo>,
    /// The `12 * (N - 2)` edges.
    pub edges: Vec<PieceInfo>,
    /// The `6 * (N - 2)^2` centers.
    pub centers: Vec<PieceInfo>,
}
impl Topology {
    /// Generates the topology of a cube with `layer_count` layers.
    pub fn generate(layer_count: u8) -> Result<Self, ConfigError> {
        let config = CubeConfig::new(layer_count)?;
        let m = layer_count - 1;
        let middle = config.middle_layers().collect_vec();
        let piece = |home| PieceInfo::new(layer_count, home);

        let corners = iproduct!([m, 0], [m, 0], [m, 0])
            .map(|(x, y, z)| piece([x, y, z]))
            .collect();

        // One run of pieces along each of the 12 edges: RU, RF, RB, RD, UF,
        // UB, DF, DB, LU, LF, LB, LD.
        let edge_runs: [fn(u8, u8) -> [u8; 3]; 12] = [
            |m, l| [m, m, l],
            |m, l| [m, l, m],
            |m, l| [m, l, 0],
            |m, l| [m, 0, l],
            |m, l| [l, m, m],
            |m, l| [l, m, 0],
            |m, l| [l, 0, m],
            |_, l| [l, 0, 0],
            |m, l| [0, m, l],
            |m, l| [0, l, m],
            |_, l| [0, l, 0],
            |_, l| [0, 0, l],
        ];
        let edges = edge_runs
            .iter()
            .flat_map(|run| middle.iter().map(move |&l| piece(run(m, l))))
            .collect();

        // One grid of pieces on each face: R, U, F, B, D, L.
        let center_grids: [fn(u8, u8, u8) -> [u8; 3]; 6] = [
            |m, a, b| [m, a, b],
            |m, a, b| [a, m, b],
            |m, a, b| [a, b, m],
            |_, a, b| [a, b, 0],
            |_, a, b| [a, 0, b],
            |_, a, b| [0, a, b],
        ];
        let centers = center_grids
            .iter()
            .flat_map(|grid| {
                iproduct!(&middle, &middle).map(move |(&a, &b)| piece(grid(m, a, b)))
            })
            .collect();

        Ok(Self {
            config,
            corners,
            edges,
            centers,
        })
    }

    /// Returns the number of layers along each axis.
    pub fn layer_count(&self) -> u8 {
        self.config.layer_count
    }

    /// Returns all pieces: corners, then edges, then centers. The position of
    /// a piece in this iterator is its [`Piece`] ID.
    pub fn pieces(&self) -> impl Iterator<Item = &PieceInfo> {
        itertools::chain!(&self.corners, &self.edges, &self.centers)
    }

    /// Returns the total number of pieces.
    pub fn piece_count(&self) -> usize {
        self.corners.len() + self.edges.len() + self.centers.len()
    }

    /// Returns the total number of stickers (`6 * N * N`).
    pub fn sticker_count(&self) -> usize {
        self.pieces().map(|p| p.stickers.len()).sum()
    }

    /// Returns the continuous coordinates of a piece position, for rendering.
    pub fn coords(&self, position: [u8; 3]) -> [f32; 3] {
        position.map(|i| self.config.layer_coords[i as usize])
    }

    /// Returns the piece with the given ID.
    pub fn piece(&self, piece: Piece) -> Option<&PieceInfo> {
        self.pieces().nth(piece.0 as usize)
    }

    /// Returns the ID of the piece whose home is `position`.
    pub fn piece_at_home(&self, position: [u8; 3]) -> Option<Piece> {
        let i = self.pieces().position(|p| p.home == position)?;
        Some(Piece(i as u16))
    }
}
