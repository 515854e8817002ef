use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::render::OutputFormat;

/// Invalid invocation, detected before any file is touched
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Format '{0}' is unknown")]
    UnknownFormat(String),

    #[error("Input file and output file must be different: {}", .0.display())]
    SameInputAndOutput(PathBuf),
}

/// A dictionary line that could not be turned into an entry, the line is skipped
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    #[error("Dictionary entry is invalid")]
    InvalidEntry,

    #[error("Line is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Invalid dictionary entry on line {line_number}: {error}")]
pub struct LineError {
    /// 1-based
    pub line_number: usize,
    pub error: ParseError,
}

/// Errors that abort a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0} output is not implemented")]
    NotImplemented(OutputFormat),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input or writing the output failed, no path known at this level
    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML serialization failed: {0}")]
    Xml(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
