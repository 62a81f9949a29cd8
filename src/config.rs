//! Configuration types for Markdown-to-HTML conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across calls, serialise them for logging, and
//! diff two runs to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! The builder pattern lets callers set only what they care about and rely on
//! well-documented defaults for the rest, and survives new fields without
//! breaking call sites.

use crate::error::Md2HtmlError;
use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

/// Default cap on the source file size (16 MiB). A single Markdown document
/// larger than this is almost certainly a mistake (a binary, a log dump).
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 16 * 1024 * 1024;

/// Configuration for a Markdown-to-HTML conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use md2html::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .tables(false)
///     .smart_punctuation(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Enable GFM tables. Default: true.
    pub tables: bool,

    /// Enable footnote references and definitions. Default: true.
    pub footnotes: bool,

    /// Enable `~~strikethrough~~`. Default: true.
    pub strikethrough: bool,

    /// Enable `- [ ]` task-list items. Default: true.
    pub tasklists: bool,

    /// Replace straight quotes, `--`/`---`, and `...` with typographic
    /// equivalents. Default: false.
    ///
    /// Off by default because the output feeds a presentation renderer that
    /// may do its own typography; double-substitution mangles quotes.
    pub smart_punctuation: bool,

    /// Apply the two code-block rewrite rules to the rendered HTML. Default: true.
    ///
    /// When false the engine's HTML is returned untouched — fenced blocks
    /// keep their `<pre><code …>` shape. Useful for debugging the rewrite
    /// rules and for callers that want plain HTML.
    pub annotate_code_blocks: bool,

    /// Maximum source file size in bytes. Default: 16 MiB.
    ///
    /// Checked against the file's metadata before reading, so an oversized
    /// source is rejected without allocating for its contents.
    pub max_source_bytes: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: true,
            smart_punctuation: false,
            annotate_code_blocks: true,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Map the dialect toggles onto the engine's option flags.
    pub fn dialect_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.tasklists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.smart_punctuation {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        opts
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn tables(mut self, v: bool) -> Self {
        self.config.tables = v;
        self
    }

    pub fn footnotes(mut self, v: bool) -> Self {
        self.config.footnotes = v;
        self
    }

    pub fn strikethrough(mut self, v: bool) -> Self {
        self.config.strikethrough = v;
        self
    }

    pub fn tasklists(mut self, v: bool) -> Self {
        self.config.tasklists = v;
        self
    }

    pub fn smart_punctuation(mut self, v: bool) -> Self {
        self.config.smart_punctuation = v;
        self
    }

    pub fn annotate_code_blocks(mut self, v: bool) -> Self {
        self.config.annotate_code_blocks = v;
        self
    }

    pub fn max_source_bytes(mut self, n: u64) -> Self {
        self.config.max_source_bytes = n;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Md2HtmlError> {
        if self.config.max_source_bytes == 0 {
            return Err(Md2HtmlError::InvalidConfig(
                "max_source_bytes must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}
