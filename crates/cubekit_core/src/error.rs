use thiserror::Error;

use crate::{Face, LAYER_COUNT_RANGE};

/// Error produced when constructing a cube with an unsupported size.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// Layer count is outside the supported range.
    #[error(
        "unsupported layer count {0}; expected {min}..={max}",
        min = LAYER_COUNT_RANGE.start(),
        max = LAYER_COUNT_RANGE.end(),
    )]
    LayerCountOutOfRange(u8),
}

/// Error produced when decoding a Kociemba string.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodecError {
    /// Cube size is unsupported.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// String length does not match the cube size.
    #[error("invalid kociemba string length {actual}; expected {expected}")]
    InvalidLength {
        /// Expected length (`6 * N * N`).
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// String length does not match any supported cube size.
    #[error("kociemba string length {0} does not match any supported cube size")]
    UnsupportedLength(usize),
    /// String contains a character other than `UDLRFB`.
    #[error("invalid face character {ch:?} at index {index}")]
    InvalidChar {
        /// Index of the offending character.
        index: usize,
        /// Offending character.
        ch: char,
    },
    /// A face label does not appear exactly `N * N` times.
    #[error("face {face} appears {count} times; expected {expected}")]
    InvalidFaceCount {
        /// Face label with the wrong count.
        face: Face,
        /// Number of occurrences.
        count: usize,
        /// Expected number of occurrences (`N * N`).
        expected: usize,
    },
}
