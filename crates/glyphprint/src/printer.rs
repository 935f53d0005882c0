//! Positioned, colored terminal output of composed lines.

use std::io::{self, Stdout, Write};

use log::{debug, warn};

use crate::{
    color::Color,
    compose::compose,
    error::{FontError, Result},
    font::Font,
    glyph::Strategy,
    Position, RenderTarget,
};

const ESC: &str = "\x1B[";
/// Select graphic rendition 0: clears color and attributes.
pub const RESET: &str = "\x1B[0m";

/// Writes ANSI escape sequences to any [`Write`].
pub struct AnsiTarget<W: Write> {
    out: W,
}

impl<W: Write> AnsiTarget<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderTarget for AnsiTarget<W> {
    fn reset(&mut self) -> io::Result<()> {
        self.out.write_all(RESET.as_bytes())
    }

    fn line(&mut self, position: Position, color: Color, text: &str) -> io::Result<()> {
        write!(
            self.out,
            "{ESC}{};{}H{ESC}{}m{text}{RESET}",
            position.row,
            position.col,
            color.code()
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// A render in progress. The target is reset when the session starts and again
/// when it ends, whether through [`Session::finish`] or by being dropped.
pub struct Session<'a, T: RenderTarget + ?Sized> {
    target: &'a mut T,
    finished: bool,
}

impl<'a, T: RenderTarget + ?Sized> Session<'a, T> {
    pub fn begin(target: &'a mut T) -> io::Result<Self> {
        target.reset()?;
        Ok(Self {
            target,
            finished: false,
        })
    }

    pub fn line(&mut self, position: Position, color: Color, text: &str) -> io::Result<()> {
        self.target.line(position, color, text)
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.finished = true;
        self.target.reset()?;
        self.target.flush()
    }
}

impl<T: RenderTarget + ?Sized> Drop for Session<'_, T> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(e) = self.target.reset().and_then(|_| self.target.flush()) {
            warn!("failed to reset terminal after interrupted render: {e}");
        }
    }
}

/// Everything needed for one print call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub color: Color,
    pub position: Position,
    /// Drawn in place of every `*` cell
    pub symbol: String,
    pub scale: u32,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::default(),
            position: Position::default(),
            symbol: "*".to_string(),
            scale: 1,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn at(mut self, row: u32, col: u32) -> Self {
        self.position = Position::new(row, col);
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn strategy(&self) -> Strategy {
        Strategy::for_scale(self.scale)
    }
}

/// Render `request` with `font` onto `target`.
///
/// The composed line `i` is drawn at `request.position` moved `i` rows down.
/// Nothing is written when the last line would fall past row `u32::MAX`.
/// A failing write aborts the render; the target is still reset on the way out.
pub fn print<T: RenderTarget + ?Sized>(
    target: &mut T,
    font: &Font,
    request: &RenderRequest,
) -> Result<()> {
    if request.scale == 0 {
        return Err(FontError::InvalidScale(request.scale));
    }
    let lines = compose(font, &request.text, &request.symbol, request.strategy());
    debug!(
        "rendering {:?} with font '{}': {} lines at {}x{}",
        request.text,
        font.name(),
        lines.len(),
        request.position.row,
        request.position.col
    );

    let positions = (0..lines.len())
        .map(|i| u32::try_from(i).ok().and_then(|i| request.position.down(i)))
        .collect::<Option<Vec<Position>>>()
        .ok_or(FontError::RowOutOfRange {
            row: request.position.row,
            lines: lines.len(),
        })?;

    let mut session = Session::begin(target)?;
    for (position, line) in positions.into_iter().zip(&lines) {
        session.line(position, request.color, line)?;
    }
    session.finish()?;
    Ok(())
}

/// Convenience: render into a String of escape sequences.
pub fn render_to_string(font: &Font, request: &RenderRequest) -> Result<String> {
    let mut target = AnsiTarget::new(Vec::new());
    print(&mut target, font, request)?;
    String::from_utf8(target.into_inner()).map_err(|e| FontError::Parse(format!("utf8 error: {e}")))
}

/// Owns an output stream and prints requests to it one at a time.
pub struct Printer<W: Write> {
    target: AnsiTarget<W>,
}

impl Printer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self {
            target: AnsiTarget::new(out),
        }
    }

    pub fn print(&mut self, font: &Font, request: &RenderRequest) -> Result<()> {
        print(&mut self.target, font, request)
    }

    pub fn into_inner(self) -> W {
        self.target.into_inner()
    }
}
