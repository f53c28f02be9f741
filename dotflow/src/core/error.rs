//! Errors that can stop a conversion.
//!
//! Anything that goes wrong *inside* the DOT text is not an error: fragments
//! that don't match the patterns are silently skipped. The only failures are
//! reading the input and writing the output.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Can't read the file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize the graph: {0}")]
    Json(#[from] serde_json::Error),
}
