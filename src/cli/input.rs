//! Reading the raw text to summarize.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::errors::InputError;

/// Rejects files whose extension does not map to `text/plain`.
/// Paths without an extension are accepted as-is.
pub fn ensure_plain_text(path: &Path) -> Result<(), InputError> {
    if path.extension().is_none() {
        return Ok(());
    }

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.essence_str() == mime_guess::mime::TEXT_PLAIN.essence_str() {
        Ok(())
    } else {
        Err(InputError::UnsupportedFileType(path.display().to_string()))
    }
}

/// Reads a plain-text file as UTF-8.
pub fn read_text_file(path: &Path) -> Result<String, InputError> {
    ensure_plain_text(path)?;
    let text = fs::read_to_string(path)?;

    info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Reads everything from `reader` as UTF-8, e.g. standard input.
pub fn read_text<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    info!("Read {} bytes from stream", text.len());
    Ok(text)
}
