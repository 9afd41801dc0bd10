//! Axes, signs, and faces of the cube.

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// 3-dimensional axis.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Axis {
    /// Returns the lowercase rotation symbol for this axis (`x`, `y`, or `z`).
    pub fn symbol(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// Returns the two axes perpendicular to this one, ordered so that a
    /// counterclockwise quarter turn around the positive end of this axis
    /// carries the first one onto the second one.
    pub fn quarter_turn_axes(self) -> [Axis; 2] {
        use Axis::*;
        match self {
            X => [Y, Z], // X+ => rotate from Y+ to Z+.
            Y => [Z, X], // Y+ => rotate from Z+ to X+.
            Z => [X, Y], // Z+ => rotate from X+ to Y+.
        }
    }
}

/// Positive or negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive.
    Pos,
    /// Negative.
    Neg,
}
impl std::ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}
impl Sign {
    /// Returns `1` or `-1`.
    pub fn int(self) -> i32 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }
}

/// Face of the cube, also used as a sticker label.
///
/// Each face is identified with the outward direction it faces: R is +X, U is
/// +Y, and F is +Z (towards the camera).
#[derive(EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    /// Right (+X).
    #[default]
    R = 0,
    /// Left (-X).
    L = 1,
    /// Up (+Y).
    U = 2,
    /// Down (-Y).
    D = 3,
    /// Front (+Z).
    F = 4,
    /// Back (-Z).
    B = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Face {
    /// Order in which faces appear in a Kociemba string.
    pub const KOCIEMBA_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Returns the face pointing along `axis` in the direction of `sign`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        use Face::*;

        match (axis, sign) {
            (Axis::X, Sign::Pos) => R,
            (Axis::X, Sign::Neg) => L,
            (Axis::Y, Sign::Pos) => U,
            (Axis::Y, Sign::Neg) => D,
            (Axis::Z, Sign::Pos) => F,
            (Axis::Z, Sign::Neg) => B,
        }
    }

    /// Returns the face with the given symbol, or `None` if `c` is not one of
    /// `UDLRFB`.
    pub fn from_symbol(c: char) -> Option<Self> {
        Face::iter().find(|f| f.symbol() == c)
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns the sign of the direction the face points in.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        Face::new(self.axis(), -self.sign())
    }

    /// Returns the single-letter symbol for the face.
    pub fn symbol(self) -> char {
        use Face::*;

        match self {
            R => 'R',
            L => 'L',
            U => 'U',
            D => 'D',
            F => 'F',
            B => 'B',
        }
    }
    /// Returns the human-friendly name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }

    /// Returns the face that this one is carried to by a counterclockwise
    /// quarter turn around the positive end of `axis`.
    #[must_use]
    pub fn quarter_turn(self, axis: Axis) -> Self {
        let [from, to] = axis.quarter_turn_axes();
        if self.axis() == from {
            Face::new(to, self.sign())
        } else if self.axis() == to {
            Face::new(from, -self.sign())
        } else {
            self
        }
    }

    /// Returns the index of the face in [`Face::KOCIEMBA_ORDER`].
    pub fn kociemba_index(self) -> usize {
        use Face::*;

        match self {
            U => 0,
            R => 1,
            F => 2,
            D => 3,
            L => 4,
            B => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_quarter_turns() {
        use Face::*;

        // Counterclockwise around +X: U -> F -> D -> B -> U.
        assert_eq!(U.quarter_turn(Axis::X), F);
        assert_eq!(F.quarter_turn(Axis::X), D);
        assert_eq!(D.quarter_turn(Axis::X), B);
        assert_eq!(B.quarter_turn(Axis::X), U);
        assert_eq!(R.quarter_turn(Axis::X), R);

        // Counterclockwise around +Y: R -> B -> L -> F -> R.
        assert_eq!(R.quarter_turn(Axis::Y), B);
        assert_eq!(B.quarter_turn(Axis::Y), L);
        assert_eq!(L.quarter_turn(Axis::Y), F);
        assert_eq!(F.quarter_turn(Axis::Y), R);

        // Counterclockwise around +Z: R -> U -> L -> D -> R.
        assert_eq!(R.quarter_turn(Axis::Z), U);
        assert_eq!(U.quarter_turn(Axis::Z), L);
        assert_eq!(L.quarter_turn(Axis::Z), D);
        assert_eq!(D.quarter_turn(Axis::Z), R);
    }

    #[test]
    fn test_face_symbols_roundtrip() {
        for face in Face::iter() {
            assert_eq!(Face::from_symbol(face.symbol()), Some(face));
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
            assert_eq!(Face::KOCIEMBA_ORDER[face.kociemba_index()], face);
        }
        assert_eq!(Face::from_symbol('X'), None);
    }
}
