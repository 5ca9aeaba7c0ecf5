//! Glyph advance widths for the base-14 Helvetica faces
//!
//! Widths are in 1/1000 em, taken from the Adobe AFM files for the printable
//! ASCII range. Oblique faces share the upright widths. Anything outside ASCII
//! is measured with a fallback width, which is close enough for wrapping.

use super::types::{FontFace, TextStyle};

/// Millimetres per PostScript point
pub const PT_TO_MM: f64 = 25.4 / 72.0;

const FALLBACK_WIDTH: u16 = 556;

/// Widths for code points 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn glyph_width(face: FontFace, ch: char) -> u16 {
    let table = if face.is_bold() {
        &HELVETICA_BOLD
    } else {
        &HELVETICA
    };
    match ch as u32 {
        code @ 0x20..=0x7E => table[(code - 0x20) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Advance width of `text` in points
pub fn text_width_pt(text: &str, face: FontFace, size: f64) -> f64 {
    let units: u32 = text.chars().map(|ch| glyph_width(face, ch) as u32).sum();
    units as f64 * size / 1000.0
}

/// Advance width of `text` in millimetres
pub fn text_width(text: &str, style: &TextStyle) -> f64 {
    text_width_pt(text, style.face, style.size) * PT_TO_MM
}
