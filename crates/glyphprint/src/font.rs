use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, trace, warn};
use once_cell::sync::Lazy;

use crate::{
    error::{FontError, Result},
    glyph::Glyph,
};

/// A line ending with this marker starts a new character definition.
const HEADER_MARKER: char = ':';

const BUILTIN_SOURCE: &str = include_str!("../fonts/block.font");

static BUILTIN: Lazy<Font> = Lazy::new(|| Font::parse("block", BUILTIN_SOURCE));

/// Upper-case `ch` when its upper-case form is a single code point.
///
/// Both loading and lookup go through this so that `a` and `A` address the same glyph.
pub fn normalize_key(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => ch,
    }
}

/// Split on `\r\n`, `\n` and bare `\r`. A single trailing terminator does not
/// produce an empty final line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let body = content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix(['\n', '\r']))
        .unwrap_or(content);
    let lines = if content.is_empty() {
        None
    } else {
        Some(body.split("\r\n").flat_map(|l| l.split(['\n', '\r'])))
    };
    lines.into_iter().flatten()
}

/// Which definition the parser is currently appending rows to.
enum Section {
    /// Before the first header
    Preamble,
    /// Behind a header whose key is not a single character
    Unusable,
    Char(char),
}

/// Character to glyph table built from an asterisk font description.
#[derive(Clone, Debug, Default)]
pub struct Font {
    name: String,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyphs: HashMap::new(),
        }
    }

    /// The 5-row block font shipped with the crate.
    pub fn builtin() -> &'static Font {
        &BUILTIN
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Load a font description from disk. The font is named after the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| FontError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let font = Self::from_bytes(name, &bytes)?;
        debug!(
            "loaded font '{}' from {} ({} glyphs)",
            font.name,
            path.display(),
            font.char_count()
        );
        Ok(font)
    }

    pub fn read<R: Read>(name: impl Into<String>, mut reader: R) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_bytes(name, &buf)
    }

    /// Parse raw font data: plain UTF-8 text, or a ZIP archive holding a `.font`/`.txt` entry.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        #[cfg(feature = "zip")]
        if bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04" {
            let content = archive::read_font_entry(bytes)?;
            return Ok(Self::parse(name, &content));
        }
        let content =
            std::str::from_utf8(bytes).map_err(|e| FontError::Parse(format!("utf8 error: {e}")))?;
        Ok(Self::parse(name, content))
    }

    /// Parse a font description.
    ///
    /// Never fails: rows before the first header and rows behind an unusable
    /// header are dropped, and glyph heights are not checked.
    pub fn parse(name: impl Into<String>, content: &str) -> Self {
        let mut font = Font::new(name);
        let mut section = Section::Preamble;
        let mut rows: Vec<String> = Vec::new();

        for (line_no, line) in split_lines(content).enumerate() {
            if let Some(key) = line.strip_suffix(HEADER_MARKER) {
                font.finish_section(&section, &mut rows);
                let mut chars = key.chars();
                section = match (chars.next(), chars.next()) {
                    (Some(ch), None) => Section::Char(ch),
                    _ => {
                        warn!(
                            "line {}: header '{key}' is not a single character, ignoring its rows",
                            line_no + 1
                        );
                        Section::Unusable
                    }
                };
                continue;
            }
            match section {
                Section::Char(_) => rows.push(line.to_string()),
                Section::Preamble | Section::Unusable => {
                    trace!("line {}: discarding row outside a character", line_no + 1);
                }
            }
        }
        font.finish_section(&section, &mut rows);
        font
    }

    fn finish_section(&mut self, section: &Section, rows: &mut Vec<String>) {
        if let Section::Char(ch) = section {
            self.add_glyph(*ch, Glyph::new(std::mem::take(rows)));
        }
        rows.clear();
    }

    /// Insert or replace the glyph for `ch`.
    pub fn add_glyph(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(normalize_key(ch), glyph);
    }

    pub fn add_raw_char(&mut self, ch: char, rows: &[&str]) {
        self.add_glyph(ch, Glyph::new(rows.iter().map(|r| r.to_string()).collect()));
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&normalize_key(ch))
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&normalize_key(ch))
    }

    /// Rows of the glyph for `ch`, or no rows at all when the font lacks it.
    pub fn get_char(&self, ch: char) -> &[String] {
        self.glyph(ch).map(|g| g.rows.as_slice()).unwrap_or(&[])
    }

    /// Returns the number of defined characters in this font.
    pub fn char_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Defined characters in ascending order.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.glyphs.keys().copied().collect();
        chars.sort_unstable();
        chars
    }
}

#[cfg(feature = "zip")]
mod archive {
    use std::io::{Cursor, Read};

    use zip::ZipArchive;

    use crate::error::{FontError, Result};

    const FONT_EXTENSIONS: [&str; 2] = [".font", ".txt"];

    pub(super) fn read_font_entry(bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| FontError::Parse(format!("zip open error: {e}")))?;
        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| FontError::Parse(format!("zip entry error: {e}")))?;
            let name = file.name().to_ascii_lowercase();
            if FONT_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
                let mut buf = String::new();
                file.read_to_string(&mut buf)
                    .map_err(|e| FontError::Parse(format!("zip read font error: {e}")))?;
                return Ok(buf);
            }
        }
        Err(FontError::Parse("zip archive contained no font entry".into()))
    }
}
