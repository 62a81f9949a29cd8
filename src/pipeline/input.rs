//! Input resolution: validate and read the user-supplied source file.
//!
//! ## Why check metadata first?
//!
//! The size cap is enforced against `fs::metadata` before the file is read,
//! so an oversized source (a log dump, a binary passed by mistake) is
//! rejected without ever allocating for its contents. UTF-8 validation
//! happens after the read so callers get an offset-bearing
//! [`Md2HtmlError::InvalidEncoding`] rather than mojibake in the output.

use crate::error::Md2HtmlError;
use std::path::Path;
use tracing::debug;

/// Map an I/O error from a read-side call onto the error taxonomy.
fn read_error(path: &Path, e: std::io::Error) -> Md2HtmlError {
    match e.kind() {
        std::io::ErrorKind::NotFound => Md2HtmlError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => Md2HtmlError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Md2HtmlError::SourceReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    }
}

/// Read the Markdown source at `path` as UTF-8 text.
///
/// Fails with the appropriate read-error variant when the file is missing,
/// unreadable, over `max_bytes`, or not valid UTF-8.
pub fn read_source(path: &Path, max_bytes: u64) -> Result<String, Md2HtmlError> {
    let meta = std::fs::metadata(path).map_err(|e| read_error(path, e))?;

    if meta.len() > max_bytes {
        return Err(Md2HtmlError::SourceTooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            limit: max_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;

    let text = String::from_utf8(bytes).map_err(|e| Md2HtmlError::InvalidEncoding {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
