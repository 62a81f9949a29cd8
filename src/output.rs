//! Output types: the rendered document plus per-run statistics.

use serde::{Deserialize, Serialize};

/// The result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Final HTML document, rewrite rules applied.
    pub html: String,
    /// Statistics for this run.
    pub stats: ConversionStats,
}

/// Statistics about a conversion run.
///
/// Serialisable so the CLI can emit them as JSON and so callers can log a
/// structured record per document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Size of the Markdown source in bytes.
    pub source_bytes: u64,
    /// Size of the final HTML in bytes.
    pub html_bytes: u64,
    /// Number of bare `<pre><code>` blocks rewritten as output blocks (rule A).
    pub output_blocks: usize,
    /// Number of language-tagged blocks rewritten as programlistings (rule B).
    pub listing_blocks: usize,
    /// Time spent reading the source, in milliseconds. Zero for in-memory input.
    pub read_duration_ms: u64,
    /// Time spent in the Markdown engine, in milliseconds.
    pub render_duration_ms: u64,
    /// Time spent in the rewrite passes, in milliseconds.
    pub rewrite_duration_ms: u64,
    /// Wall-clock time for the whole conversion, in milliseconds.
    pub total_duration_ms: u64,
}

impl ConversionStats {
    /// Total code blocks touched by either rewrite rule.
    pub fn annotated_blocks(&self) -> usize {
        self.output_blocks + self.listing_blocks
    }
}
