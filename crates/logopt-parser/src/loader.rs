use std::{fs, path::Path};

use tracing::debug;

use crate::error::{ParseError, ParseResult};

/// Reads the whole file at `path` into memory.
///
/// Fails with [`ParseError::Io`] when the file cannot be opened or read, or
/// when its content is not valid UTF-8.
pub fn load(path: impl AsRef<Path>) -> ParseResult<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;

    debug!(path = %path.display(), bytes = text.len(), "config file loaded");
    Ok(text)
}
