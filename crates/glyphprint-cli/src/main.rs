use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glyphprint::{Color, Font, RenderRequest};
use log::debug;

use crate::config::Config;
use crate::console::{glyph_preview, print_banner};
mod config;
mod console;

#[derive(Parser)]
#[command(name = "glyphprint", about = "Print banner text from asterisk bitmap fonts")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text at a terminal position
    Render {
        #[arg(short, long)]
        text: String,
        /// Font description file (built-in block font when omitted)
        #[arg(short, long)]
        font: Option<PathBuf>,
        #[arg(short, long)]
        color: Option<Color>,
        #[arg(long)]
        row: Option<u32>,
        #[arg(long)]
        col: Option<u32>,
        /// Drawn in place of every `*` cell
        #[arg(short, long)]
        symbol: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        scale: Option<u32>,
        /// TOML file with render defaults
        #[arg(long, env = "GLYPHPRINT_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Inspect font metadata
    Inspect {
        #[arg(short, long)]
        font: Option<PathBuf>,
        /// Show the rows of a single character
        #[arg(long = "char")]
        ch: Option<char>,
    },
}

enum LoadedFont {
    Builtin,
    File(Font),
}

impl LoadedFont {
    fn open(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                let font = Font::load(path)
                    .with_context(|| format!("loading font {}", path.display()))?;
                Ok(LoadedFont::File(font))
            }
            None => Ok(LoadedFont::Builtin),
        }
    }

    fn font(&self) -> &Font {
        match self {
            LoadedFont::Builtin => Font::builtin(),
            LoadedFont::File(font) => font,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Cmd::Render {
            text,
            font,
            color,
            row,
            col,
            symbol,
            scale,
            config,
        } => {
            let defaults = match config {
                Some(path) => Config::load(&path)?.render,
                None => Config::default().render,
            };
            let loaded = LoadedFont::open(font.as_ref().or(defaults.font.as_ref()))?;
            let request = RenderRequest::new(text)
                .color(color.unwrap_or(defaults.color))
                .at(row.unwrap_or(defaults.row), col.unwrap_or(defaults.col))
                .symbol(symbol.unwrap_or(defaults.symbol))
                .scale(scale.unwrap_or(defaults.scale));
            debug!("render request: {request:?}");
            print_banner(loaded.font(), &request)?;
        }
        Cmd::Inspect { font, ch } => {
            let loaded = LoadedFont::open(font.as_ref())?;
            let font = loaded.font();
            match ch {
                Some(ch) => {
                    let glyph = font
                        .glyph(ch)
                        .ok_or_else(|| anyhow::anyhow!("'{ch}' is not defined in {}", font.name()))?;
                    println!("'{ch}': {} rows, {} wide", glyph.height(), glyph.width());
                    println!("{}", glyph_preview(glyph));
                }
                None => {
                    println!("Font: {}", font.name());
                    println!("  Defined characters: {}", font.char_count());
                    let chars: String = font.chars().into_iter().collect();
                    println!("  Characters: {chars}");
                }
            }
        }
    }
    Ok(())
}
