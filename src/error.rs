//! Error types for the tribench library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tribench operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the benchmark harness.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while writing to the console stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be read.
    #[error("cannot read input file {}: {source}", .path.display())]
    InputRead { path: PathBuf, source: io::Error },

    /// An output file could not be created or written.
    #[error("cannot write output file {}: {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },

    /// The input was rejected by a library's parser.
    #[error("{library} parse error: {message}")]
    Parse {
        library: &'static str,
        message: String,
    },

    /// A library failed to serialize its document tree.
    #[error("{library} serialize error: {message}")]
    Serialize {
        library: &'static str,
        message: String,
    },

    /// Single-line export needs a top-level array to iterate.
    #[error("single-line export requires a top-level JSON array")]
    NotAnArray,

    /// The requested library driver was compiled out.
    #[error("unsupported library: {0}")]
    UnsupportedLibrary(String),
}

impl Error {
    pub(crate) fn parse(library: &'static str, err: impl std::fmt::Display) -> Self {
        Error::Parse {
            library,
            message: err.to_string(),
        }
    }

    pub(crate) fn serialize(library: &'static str, err: impl std::fmt::Display) -> Self {
        Error::Serialize {
            library,
            message: err.to_string(),
        }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
