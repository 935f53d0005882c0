/// Cell marker that is replaced by the fill symbol.
pub const ON_CELL: char = '*';

/// Number of glyph rows the compositor renders. Taller glyphs are truncated.
pub const GLYPH_ROWS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    /// Rows in top to bottom order, kept exactly as they appeared in the font source
    pub rows: Vec<String>,
}

impl Glyph {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Number of rows in the glyph
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row, in characters
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// Expand every row of the glyph by `factor` in both directions.
    pub fn scaled(&self, factor: u32, symbol: &str) -> Vec<String> {
        self.rows
            .iter()
            .flat_map(|row| scale_row(row, factor, symbol))
            .collect()
    }

    /// Replace the on cells of every row with `symbol`.
    pub fn substituted(&self, symbol: &str) -> Vec<String> {
        self.rows.iter().map(|row| substitute_row(row, symbol)).collect()
    }
}

/// Straight substitution: `*` becomes `symbol`, everything else is kept.
pub fn substitute_row(row: &str, symbol: &str) -> String {
    let mut out = String::with_capacity(row.len() * symbol.len().max(1));
    for ch in row.chars() {
        if ch == ON_CELL {
            out.push_str(symbol);
        } else {
            out.push(ch);
        }
    }
    out
}

/// Expand `row` horizontally and vertically by `factor`.
///
/// Each `*` becomes `factor` copies of `symbol`, any other cell becomes `factor`
/// spaces, and the resulting row is repeated `factor` times.
pub fn scale_row(row: &str, factor: u32, symbol: &str) -> Vec<String> {
    let factor = factor as usize;
    let on = symbol.repeat(factor);
    let off = " ".repeat(factor);
    let mut expanded = String::with_capacity(row.len() * on.len().max(factor));
    for ch in row.chars() {
        expanded.push_str(if ch == ON_CELL { &on } else { &off });
    }
    vec![expanded; factor]
}

/// How glyph rows are turned into output rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One output row per glyph row, `*` replaced by the fill symbol.
    #[default]
    Substitute,
    /// Every glyph row and cell repeated by the factor.
    Scale(u32),
}

impl Strategy {
    pub fn for_scale(scale: u32) -> Self {
        if scale > 1 {
            Strategy::Scale(scale)
        } else {
            Strategy::Substitute
        }
    }

    /// Output rows produced per glyph row.
    pub fn factor(&self) -> u32 {
        match self {
            Strategy::Substitute => 1,
            Strategy::Scale(factor) => *factor,
        }
    }

    /// Transform a single glyph row into its output rows.
    pub fn apply(&self, row: &str, symbol: &str) -> Vec<String> {
        match self {
            Strategy::Substitute => vec![substitute_row(row, symbol)],
            Strategy::Scale(factor) => scale_row(row, *factor, symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn glyph(rows: &[&str]) -> Glyph {
        Glyph::new(rows.iter().map(|r| r.to_string()).collect())
    }

    #[test]
    fn scale_row_doubles_cells_and_rows() {
        assert_eq!(scale_row("* ", 2, "@"), vec!["@@  ", "@@  "]);
    }

    #[test]
    fn scale_row_factor_one_maps_off_cells_to_space() {
        assert_eq!(scale_row("*.*", 1, "#"), vec!["# #"]);
    }

    #[test]
    fn substitute_keeps_other_cells() {
        assert_eq!(substitute_row(" *.* ", "#"), " #.# ");
    }

    #[test]
    fn scaled_glyph_dimensions() {
        let g = glyph(&["***", "* *", "***", "* *", "* *"]);
        for s in 1..=4u32 {
            let rows = g.scaled(s, "x");
            assert_eq!(rows.len(), g.height() * s as usize);
            assert!(rows
                .iter()
                .all(|r| r.chars().count() == g.width() * s as usize));
        }
    }

    #[test]
    fn substituted_glyph_preserves_shape() {
        let g = glyph(&[" * ", "***", "* *"]);
        let rows = g.substituted("o");
        assert_eq!(rows, vec![" o ", "ooo", "o o"]);
    }

    #[test]
    fn strategy_selection() {
        assert_eq!(Strategy::for_scale(0), Strategy::Substitute);
        assert_eq!(Strategy::for_scale(1), Strategy::Substitute);
        assert_eq!(Strategy::for_scale(3), Strategy::Scale(3));
        assert_eq!(Strategy::Substitute.factor(), 1);
        assert_eq!(Strategy::Scale(3).apply("*", "#"), vec!["###"; 3]);
    }

    #[test]
    fn width_of_empty_glyph_is_zero() {
        assert_eq!(Glyph::default().width(), 0);
        assert_eq!(Glyph::default().height(), 0);
    }
}
