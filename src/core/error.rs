//! Error types for the expansion core

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an in-progress expansion.
///
/// The first two carry the coordinates of the offending directive: the raw
/// target text, the file containing the directive, and its 1-indexed line.
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// An include target was not found by either resolution mode.
    #[error("unknown include file {target} at file {} at line {line}", file.display())]
    UnresolvedInclude {
        target: String,
        file: PathBuf,
        line: u32,
    },

    /// An include target resolved to a file that is still being expanded.
    #[error("circular include of {target} at file {} at line {line}", file.display())]
    CircularInclude {
        target: String,
        file: PathBuf,
        line: u32,
    },

    /// Reading an input stream or writing the output failed mid-expansion.
    #[error("i/o error during expansion: {0}")]
    Io(#[from] std::io::Error),
}
