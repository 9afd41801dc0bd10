use cubekit_core::ConfigError;
use thiserror::Error;

/// Error produced when resolving move or rotation notation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Text is not a recognized move or rotation
    #[error("invalid notation: {0:?}")]
    InvalidNotation(String),
    /// Layer prefix selects layers that the cube does not have
    #[error("layers of {notation:?} are out of range for a cube with {layer_count} layers")]
    LayerOutOfRange {
        /// Offending notation.
        notation: String,
        /// Number of layers of the cube.
        layer_count: u8,
    },
    /// Cube size is unsupported
    #[error(transparent)]
    Config(#[from] ConfigError),
}
