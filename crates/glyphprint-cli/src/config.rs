//! Optional TOML file with render defaults.
//!
//! ```toml
//! [render]
//! font = "fonts/big.font"   # relative to the config file
//! color = "cyan"
//! symbol = "#"
//! scale = 2
//! row = 3
//! col = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glyphprint::Color;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub render: RenderDefaults,
}

/// Values used when the matching command line flag is absent.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderDefaults {
    /// Font file; the built-in block font when unset
    pub font: Option<PathBuf>,
    pub color: Color,
    pub symbol: String,
    pub scale: u32,
    pub row: u32,
    pub col: u32,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            font: None,
            color: Color::White,
            symbol: "*".to_string(),
            scale: 1,
            row: 1,
            col: 1,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Config =
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
        if let (Some(font), Some(base)) = (config.render.font.as_mut(), path.parent()) {
            if font.is_relative() {
                *font = base.join(&*font);
            }
        }
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.color, Color::White);
        assert_eq!(config.render.symbol, "*");
        assert_eq!(config.render.scale, 1);
        assert_eq!((config.render.row, config.render.col), (1, 1));
        assert!(config.render.font.is_none());
    }

    #[test]
    fn partial_render_table() {
        let config: Config = toml::from_str("[render]\ncolor = \"magenta\"\nscale = 3\n").unwrap();
        assert_eq!(config.render.color, Color::Magenta);
        assert_eq!(config.render.scale, 3);
        assert_eq!(config.render.symbol, "*");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("[render]\ncolour = \"red\"\n").is_err());
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(toml::from_str::<Config>("[render]\ncolor = \"purple\"\n").is_err());
    }
}
