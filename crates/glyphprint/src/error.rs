use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font file not found or unreadable: {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unknown color: {0}")]
    UnknownColor(String),
    #[error("invalid scale factor {0}, must be at least 1")]
    InvalidScale(u32),
    #[error("{lines} lines starting at row {row} run past the last addressable row")]
    RowOutOfRange { row: u32, lines: usize },
}

pub type Result<T> = std::result::Result<T, FontError>;
