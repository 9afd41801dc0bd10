//! Unresolved move and rotation tokens.

use std::fmt;

use cubekit_core::{Axis, Face, Sign};

/// Family of a token, determined by its letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    /// Face turn, such as `R`.
    Face(Face),
    /// Wide turn written with a `w` suffix, such as `Rw`.
    WideW(Face),
    /// Wide turn written in lowercase, such as `r`.
    WideLower(Face),
    /// Middle slice (`M`, `E`, or `S`).
    Slice(Axis),
    /// Every layer except the outer ones (`m`, `e`, or `s`).
    WideSlice(Axis),
    /// Whole-cube rotation (`x`, `y`, or `z`).
    Rotation(Axis),
}
impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Face(face) => write!(f, "{face}"),
            Family::WideW(face) => write!(f, "{face}w"),
            Family::WideLower(face) => write!(f, "{}", face.symbol().to_ascii_lowercase()),
            Family::Slice(axis) => write!(f, "{}", slice_symbol(*axis)),
            Family::WideSlice(axis) => write!(f, "{}", slice_symbol(*axis).to_ascii_lowercase()),
            Family::Rotation(axis) => write!(f, "{axis}"),
        }
    }
}
impl Family {
    /// Returns the axis that the family turns around.
    pub fn axis(self) -> Axis {
        match self {
            Family::Face(face) | Family::WideW(face) | Family::WideLower(face) => face.axis(),
            Family::Slice(axis) | Family::WideSlice(axis) | Family::Rotation(axis) => axis,
        }
    }

    /// Returns the direction of a single unprimed turn of this family.
    ///
    /// `R`, `U`, and `F` turn clockwise as seen from their face, which is
    /// clockwise around the positive axis. `L`, `D`, and `B` are clockwise as
    /// seen from the negative side. `M` follows `L`, `E` follows `D`, and `S`
    /// follows `F`. Rotations follow `R`, `U`, and `F`.
    pub fn base_direction(self) -> i32 {
        match self {
            Family::Face(face) | Family::WideW(face) | Family::WideLower(face) => {
                -face.sign().int()
            }
            Family::Slice(axis) | Family::WideSlice(axis) => match axis {
                Axis::X | Axis::Y => 1,
                Axis::Z => -1,
            },
            Family::Rotation(_) => -1,
        }
    }

    /// Returns the face the family is named after, if any.
    pub fn face(self) -> Option<Face> {
        match self {
            Family::Face(face) | Family::WideW(face) | Family::WideLower(face) => Some(face),
            _ => None,
        }
    }

    /// Returns whether the family turns the whole cube.
    pub fn is_rotation(self) -> bool {
        matches!(self, Family::Rotation(_))
    }

    /// Returns whether the family turns more than one layer by default.
    pub fn is_wide(self) -> bool {
        matches!(
            self,
            Family::WideW(_) | Family::WideLower(_) | Family::WideSlice(_),
        )
    }
}

/// Returns the uppercase slice letter for an axis.
pub fn slice_symbol(axis: Axis) -> char {
    match axis {
        Axis::X => 'M',
        Axis::Y => 'E',
        Axis::Z => 'S',
    }
}

/// Layer prefix of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LayerPrefix {
    /// Single number.
    ///
    /// Example: `3` in `3Rw`
    Single(u8),
    /// Range of layers counted inward from a face.
    ///
    /// Example: `2-4` in `2-4r`
    Range(u8, u8),
}
impl fmt::Display for LayerPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerPrefix::Single(k) => write!(f, "{k}"),
            LayerPrefix::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

/// Single move or rotation, as written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Optional layer prefix.
    pub prefix: Option<LayerPrefix>,
    /// Letter of the token.
    pub family: Family,
    /// Optional turn count digit.
    pub count: Option<u8>,
    /// Whether the token ends in `'`.
    pub prime: bool,
}
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{prefix}")?;
        }
        write!(f, "{}", self.family)?;
        if let Some(count) = self.count {
            write!(f, "{count}")?;
        }
        if self.prime {
            write!(f, "'")?;
        }
        Ok(())
    }
}
impl Token {
    /// Returns a token with no prefix, count, or prime.
    pub fn new(family: Family) -> Self {
        Self {
            prefix: None,
            family,
            count: None,
            prime: false,
        }
    }

    /// Returns the signed number of quarter turns around the positive axis.
    pub fn direction(&self) -> i32 {
        let count = i32::from(self.count.unwrap_or(1));
        let sign = if self.prime { -1 } else { 1 };
        self.family.base_direction() * count * sign
    }
}

/// Returns the layer index that is `k` layers inward from `face`, where the
/// outer layer is `k = 1`.
pub(crate) fn layer_from_face(face: Face, layer_count: u8, k: u8) -> u8 {
    match face.sign() {
        Sign::Pos => layer_count - k,
        Sign::Neg => k - 1,
    }
}
