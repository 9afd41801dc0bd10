//! Resolving tokens into slices.

use cubekit_core::{ConfigError, Face, LAYER_COUNT_RANGE, LayerMask, Slice};

use crate::token::layer_from_face;
use crate::{Family, LayerPrefix, ParseError, Token, parse_token};

/// Resolves a move, such as `R` or `2-3l'`, for a cube with `layer_count`
/// layers.
///
/// Whole-cube rotations are rejected; use [`resolve_rotation()`] for those.
pub fn resolve_move(text: &str, layer_count: u8) -> Result<Slice, ParseError> {
    let token = parse_token(text)?;
    if token.family.is_rotation() {
        return Err(ParseError::InvalidNotation(text.to_owned()));
    }
    token.resolve_text(text, layer_count)
}

/// Resolves a whole-cube rotation, such as `x` or `y2'`, for a cube with
/// `layer_count` layers.
pub fn resolve_rotation(text: &str, layer_count: u8) -> Result<Slice, ParseError> {
    let token = parse_token(text)?;
    if !token.family.is_rotation() {
        return Err(ParseError::InvalidNotation(text.to_owned()));
    }
    token.resolve_text(text, layer_count)
}

/// Resolves either a move or a rotation.
pub fn resolve(text: &str, layer_count: u8) -> Result<Slice, ParseError> {
    parse_token(text)?.resolve_text(text, layer_count)
}

/// Resolves a whitespace-separated sequence of moves and rotations.
///
/// Fails on the first invalid token.
pub fn resolve_sequence(text: &str, layer_count: u8) -> Result<Vec<Slice>, ParseError> {
    text.split_whitespace()
        .map(|token| resolve(token, layer_count))
        .collect()
}

impl Token {
    /// Resolves the token into a slice for a cube with `layer_count` layers.
    pub fn resolve(&self, layer_count: u8) -> Result<Slice, ParseError> {
        self.resolve_text(&self.to_string(), layer_count)
    }

    /// Resolves the token, reporting errors against `text`.
    fn resolve_text(&self, text: &str, layer_count: u8) -> Result<Slice, ParseError> {
        if !LAYER_COUNT_RANGE.contains(&layer_count) {
            return Err(ConfigError::LayerCountOutOfRange(layer_count).into());
        }
        if self.count == Some(0) {
            return Err(invalid(text));
        }

        let is_slice = matches!(self.family, Family::Slice(_) | Family::WideSlice(_));
        if is_slice && matches!(self.prefix, Some(LayerPrefix::Range(..))) {
            return Err(invalid(text));
        }

        let axis = self.family.axis();
        let direction = self.direction();
        let layers = match self.family {
            Family::Rotation(_) => {
                if self.prefix.is_some() {
                    return Err(invalid(text));
                }
                let direction = direction.signum() * (direction.abs() % 4);
                return Ok(Slice::rotation(axis, direction));
            }
            Family::Face(face) | Family::WideW(face) | Family::WideLower(face) => {
                self.face_layers(face, layer_count)
            }
            Family::Slice(_) => self.middle_layers(layer_count),
            Family::WideSlice(_) => self.inner_layers(layer_count),
        }
        .ok_or_else(|| ParseError::LayerOutOfRange {
            notation: text.to_owned(),
            layer_count,
        })?;

        Ok(Slice {
            axis,
            layers,
            direction,
        })
    }

    /// Layers counted inward from `face`.
    fn face_layers(&self, face: Face, layer_count: u8) -> Option<LayerMask> {
        let (lo, hi) = match self.prefix {
            Some(LayerPrefix::Range(lo, hi)) if lo < hi => (lo, hi),
            Some(LayerPrefix::Range(..)) => return None,
            Some(LayerPrefix::Single(k)) if self.family.is_wide() => (1, k),
            Some(LayerPrefix::Single(k)) => (k, k),
            None if self.family.is_wide() => (1, 2),
            None => (1, 1),
        };
        if lo == 0 || hi < lo || hi > layer_count {
            return None;
        }
        Some(
            (lo..=hi)
                .map(|k| layer_from_face(face, layer_count, k))
                .collect(),
        )
    }

    /// Central layers, widened by `k - 1` on each side.
    fn middle_layers(&self, layer_count: u8) -> Option<LayerMask> {
        let k = i32::from(self.single_prefix()?);
        let n = i32::from(layer_count);
        let half = n / 2;
        let (lo, hi) = if n % 2 == 1 {
            (half - (k - 1), half + (k - 1))
        } else {
            (half - 1 - (k - 1), half + (k - 1))
        };
        if k < 1 || lo < 1 || hi > n - 2 {
            return None;
        }
        Some(LayerMask::range(lo as u8..=hi as u8))
    }

    /// All layers except the outer `k` on each side.
    fn inner_layers(&self, layer_count: u8) -> Option<LayerMask> {
        let k = self.single_prefix()?;
        if k < 1 || u16::from(k) * 2 >= u16::from(layer_count) {
            return None;
        }
        Some(LayerMask::range(k..=layer_count - 1 - k))
    }

    fn single_prefix(&self) -> Option<u8> {
        match self.prefix {
            None => Some(1),
            Some(LayerPrefix::Single(k)) => Some(k),
            Some(LayerPrefix::Range(..)) => None,
        }
    }
}

fn invalid(text: &str) -> ParseError {
    ParseError::InvalidNotation(text.to_owned())
}
