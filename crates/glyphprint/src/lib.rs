//! glyphprint: banner text for the terminal from asterisk bitmap fonts.
//! Features: font description parsing, glyph scaling, line composition, positioned ANSI output.

pub mod color;
pub mod compose;
mod error;
mod font;
mod glyph;
pub mod printer;

pub use color::Color;
pub use compose::{compose, SEPARATOR};
pub use error::{FontError, Result};
pub use font::{normalize_key, Font};
pub use glyph::{scale_row, substitute_row, Glyph, Strategy, GLYPH_ROWS, ON_CELL};
pub use printer::{print, render_to_string, AnsiTarget, Printer, RenderRequest, Session};

// Test utilities
pub mod test_support;

/// 1-based terminal cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The same column, `lines` rows further down, or `None` past `u32::MAX`.
    pub fn down(self, lines: u32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(lines)?,
            col: self.col,
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { row: 1, col: 1 }
    }
}

/// Destination for composed lines.
pub trait RenderTarget {
    /// Return the target to its default graphic state.
    fn reset(&mut self) -> std::io::Result<()>;

    /// Draw one composed line starting at `position` in `color`.
    fn line(&mut self, position: Position, color: Color, text: &str) -> std::io::Result<()>;

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
