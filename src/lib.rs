//! # md2html
//!
//! Convert a Markdown document to presentation-ready HTML with annotated
//! code listings.
//!
//! ## Why this crate?
//!
//! A generic Markdown engine renders every fenced code block as
//! `<pre><code …>`, but presentation renderers that execute code need more:
//! they must tell an *executable code listing* (a fenced block tagged with a
//! language) apart from *captured program output* (a fenced block with no
//! tag). This crate runs a standard Markdown engine and then applies two
//! output-stage rewrite rules that add those markers:
//!
//! * `` ```python `` → `<pre data-code-language="python"
//!   data-executable="true" data-type="programlisting">…</pre>`
//! * `` ``` `` (untagged) → `<pre data-output="true">…</pre>`
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Input        read the source file as UTF-8 (size-capped)
//!  ├─ 2. Render       pulldown-cmark with configured dialect extensions
//!  ├─ 3. Rewrite A    bare <pre><code> blocks → output markers
//!  ├─ 4. Rewrite B    language-tagged blocks → programlisting markers
//!  └─ 5. Output       HTML document + per-run stats
//! ```
//!
//! The pipeline is synchronous and deterministic: the same source text and
//! config always produce byte-identical HTML.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2html::{convert_to_file, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let stats = convert_to_file("main.md", "main.html", &config)?;
//!     eprintln!("{} listings, {} output blocks",
//!         stats.listing_blocks, stats.output_blocks);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2html` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! md2html = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_MAX_SOURCE_BYTES};
pub use convert::{convert, convert_str, convert_to_file};
pub use error::Md2HtmlError;
pub use output::{ConversionOutput, ConversionStats};
