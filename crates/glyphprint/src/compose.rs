//! Line composition: joins the same row of every glyph in a text.

use crate::{
    font::Font,
    glyph::{Glyph, Strategy, GLYPH_ROWS},
};

/// Placed between the contributions of adjacent characters.
pub const SEPARATOR: &str = "  ";

/// Compose `text` into output lines, top to bottom.
///
/// Characters missing from the font and glyphs without a row at the current
/// index contribute nothing, not even a separator. Rows beyond [`GLYPH_ROWS`]
/// are never rendered.
pub fn compose(font: &Font, text: &str, symbol: &str, strategy: Strategy) -> Vec<String> {
    let glyphs: Vec<&Glyph> = text.chars().filter_map(|ch| font.glyph(ch)).collect();
    let mut lines = Vec::new();

    for row in 0..GLYPH_ROWS {
        let parts: Vec<Vec<String>> = glyphs
            .iter()
            .filter_map(|g| g.row(row))
            .map(|r| strategy.apply(r, symbol))
            .collect();
        if parts.is_empty() {
            continue;
        }
        for sub_row in 0..strategy.factor() as usize {
            let pieces: Vec<&str> = parts.iter().map(|p| p[sub_row].as_str()).collect();
            lines.push(pieces.join(SEPARATOR));
        }
    }
    lines
}
