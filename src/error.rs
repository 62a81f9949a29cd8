//! Error types for the md2html library.
//!
//! One enum covers the whole pipeline because every failure is fatal: the
//! conversion is a single read → render → rewrite → write pass with no
//! partial progress to salvage. The variants group into the three failure
//! families callers care about:
//!
//! * **Read failures** — the source file is missing, unreadable, too large,
//!   or not UTF-8. Raised before any rendering happens.
//! * **Write failures** — [`Md2HtmlError::OutputWriteFailed`], raised after
//!   rendering when the destination cannot be written.
//! * **Conversion failures** — [`Md2HtmlError::RenderFailed`], an opaque
//!   engine error. Not introspected; the engine's message is passed through.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2html library.
#[derive(Debug, Error)]
pub enum Md2HtmlError {
    // ── Read errors ───────────────────────────────────────────────────────
    /// Source file was not found at the given path.
    #[error("Markdown source not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the source file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The source file exists and was read, but is not valid UTF-8.
    #[error("Source '{path}' is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidEncoding { path: PathBuf, offset: usize },

    /// Source exceeds the configured size cap.
    #[error("Source '{path}' is {size} bytes, over the {limit}-byte limit\nRaise --max-source-bytes if this is intentional.")]
    SourceTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Any other I/O failure while reading the source.
    #[error("Failed to read source '{path}': {source}")]
    SourceReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Write errors ──────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    ///
    /// Also raised when the destination's parent directory does not exist;
    /// the library never creates directories on the caller's behalf.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Conversion errors ─────────────────────────────────────────────────
    /// The Markdown engine failed while emitting HTML. Treated as opaque.
    #[error("HTML rendering failed: {0}")]
    RenderFailed(String),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
