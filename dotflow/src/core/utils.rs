//! This is a collection of useful utilities.

use super::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Loads the whole file at \p path as text. Files that are missing,
/// unreadable or not valid UTF-8 are reported as `Error::InputRead`.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|source| Error::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Read {} ({} bytes)", path.display(), content.len());
    Result::Ok(content)
}
