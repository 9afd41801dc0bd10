//! Unfolded sticker net.
//!
//! ```text
//!       U
//!     L F R B
//!       D
//! ```

use std::fmt::Write;

use cubekit_core::{Face, StickerState};
use owo_colors::OwoColorize;

const MIDDLE_ROW: [Face; 4] = [Face::L, Face::F, Face::R, Face::B];

/// Renders `stickers` as a net, one line per sticker row.
pub(crate) fn render(stickers: &StickerState, color: bool) -> String {
    let n = stickers.layer_count();
    let indent = " ".repeat(2 * n as usize);
    let mut out = String::new();

    for row in 0..n {
        out += &indent;
        push_row(&mut out, stickers, Face::U, row, color);
        out.push('\n');
    }
    for row in 0..n {
        for (i, &face) in MIDDLE_ROW.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_row(&mut out, stickers, face, row, color);
        }
        out.push('\n');
    }
    for row in 0..n {
        out += &indent;
        push_row(&mut out, stickers, Face::D, row, color);
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, stickers: &StickerState, face: Face, row: u8, color: bool) {
    for col in 0..stickers.layer_count() {
        if col > 0 {
            out.push(' ');
        }
        let label = stickers.get(face, row, col);
        // Writing to a `String` cannot fail.
        let _ = match color {
            true => write!(out, "{}", label.symbol().color(face_color(label))),
            false => write!(out, "{}", label.symbol()),
        };
    }
}

/// Returns the terminal color for stickers labeled `face`.
fn face_color(face: Face) -> owo_colors::AnsiColors {
    use owo_colors::AnsiColors;

    match face {
        Face::U => AnsiColors::BrightWhite,
        Face::R => AnsiColors::Red,
        Face::F => AnsiColors::Green,
        Face::D => AnsiColors::Yellow,
        Face::L => AnsiColors::Magenta,
        Face::B => AnsiColors::Blue,
    }
}
