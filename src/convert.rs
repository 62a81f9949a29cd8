//! Conversion entry points.
//!
//! The pipeline is a single linear pass — read, render, rewrite, write —
//! with no concurrency and no partial progress: any failure aborts the run
//! and, for file output, leaves the previous destination contents intact
//! (the write is temp-file-then-rename).

use crate::config::ConversionConfig;
use crate::error::Md2HtmlError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{input, postprocess, render};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a Markdown file to HTML.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `source_path` — path to a UTF-8 Markdown file
/// * `config` — conversion configuration
///
/// # Errors
/// Returns `Err(Md2HtmlError)` when the source cannot be read (missing,
/// unreadable, oversized, not UTF-8) or the engine fails. Nothing is written
/// anywhere on failure.
pub fn convert(
    source_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Md2HtmlError> {
    let total_start = Instant::now();
    let source_path = source_path.as_ref();
    info!("Starting conversion: {}", source_path.display());

    // ── Step 1: Read source ──────────────────────────────────────────────
    let read_start = Instant::now();
    let markdown = input::read_source(source_path, config.max_source_bytes)?;
    let read_duration_ms = read_start.elapsed().as_millis() as u64;

    let mut output = convert_str(&markdown, config)?;
    output.stats.read_duration_ms = read_duration_ms;
    output.stats.total_duration_ms = total_start.elapsed().as_millis() as u64;

    info!(
        "Conversion complete: {} → {} bytes, {} listings, {} output blocks, {}ms",
        output.stats.source_bytes,
        output.stats.html_bytes,
        output.stats.listing_blocks,
        output.stats.output_blocks,
        output.stats.total_duration_ms
    );
    Ok(output)
}

/// Convert a Markdown file and write the HTML to `dest_path`.
///
/// Uses atomic write (temp file + rename in the destination's directory) so
/// the destination is never left half-written. The destination's parent
/// directory must already exist; a missing parent is an
/// [`Md2HtmlError::OutputWriteFailed`].
pub fn convert_to_file(
    source_path: impl AsRef<Path>,
    dest_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Md2HtmlError> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();

    let output = convert(source_path, config)?;

    // Atomic write: write to temp alongside the destination, then rename.
    let tmp_path = dest_path.with_extension("html.tmp");
    std::fs::write(&tmp_path, &output.html).map_err(|e| Md2HtmlError::OutputWriteFailed {
        path: dest_path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, dest_path).map_err(|e| Md2HtmlError::OutputWriteFailed {
        path: dest_path.to_path_buf(),
        source: e,
    })?;

    info!(
        "generated {} from {}",
        dest_path.display(),
        source_path.display()
    );
    Ok(output.stats)
}

/// Convert Markdown text already in memory.
///
/// This is the pure core of the pipeline — render, then rewrite — with no
/// filesystem access. The recommended API when the source comes from a
/// network request, a database, or an editor buffer rather than a file.
pub fn convert_str(
    markdown: &str,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Md2HtmlError> {
    let total_start = Instant::now();

    // ── Step 2: Render Markdown to intermediate HTML ─────────────────────
    let render_start = Instant::now();
    let renderer = render::HtmlRenderer::new(config);
    let raw_html = renderer.render(markdown)?;
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    debug!("Rendered {} bytes of HTML", raw_html.len());

    // ── Steps 3–4: Rewrite rules A then B ────────────────────────────────
    let rewrite_start = Instant::now();
    let (html, counts) = if config.annotate_code_blocks {
        postprocess::annotate_html(&raw_html)
    } else {
        (raw_html, postprocess::RewriteCounts::default())
    };
    let rewrite_duration_ms = rewrite_start.elapsed().as_millis() as u64;
    debug!(
        "Rewrote {} listing and {} output blocks",
        counts.listing_blocks, counts.output_blocks
    );

    let stats = ConversionStats {
        source_bytes: markdown.len() as u64,
        html_bytes: html.len() as u64,
        output_blocks: counts.output_blocks,
        listing_blocks: counts.listing_blocks,
        read_duration_ms: 0,
        render_duration_ms,
        rewrite_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    Ok(ConversionOutput { html, stats })
}
