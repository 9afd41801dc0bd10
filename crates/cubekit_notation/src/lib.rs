//! Move and rotation notation for NxNxN cubes.
//!
//! Each token is a layer prefix (`3` or `2-4`), a letter, an optional turn
//! count digit, and an optional `'`. Tokens resolve to a
//! [`cubekit_core::Slice`] for a particular cube size.

mod error;
mod parse;
mod resolve;
mod token;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parse::parse_token;
pub use resolve::*;
pub use token::{Family, LayerPrefix, Token, slice_symbol};
