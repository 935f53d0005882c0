use std::io::Write;

use glyphprint::{Font, Glyph, Printer, RenderRequest, Result};

/// Print `request` to stdout, then move to a fresh line so the shell prompt
/// does not land inside the banner.
pub fn print_banner(font: &Font, request: &RenderRequest) -> Result<()> {
    let mut printer = Printer::stdout();
    printer.print(font, request)?;
    let mut out = printer.into_inner();
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Glyph rows framed with `|` so trailing spaces stay visible.
pub fn glyph_preview(glyph: &Glyph) -> String {
    let width = glyph.width();
    glyph
        .rows
        .iter()
        .map(|row| format!("|{row:<width$}|"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_pads_short_rows() {
        let glyph = Glyph::new(vec!["* *".into(), "*".into()]);
        assert_eq!(glyph_preview(&glyph), "|* *|\n|*  |");
    }
}
