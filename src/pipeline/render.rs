//! The Markdown engine: renders source text to intermediate HTML.
//!
//! ## Fenced-block output shape (precondition of the rewrite rules)
//!
//! The rewrite rules in [`super::postprocess`] match on the exact HTML shape
//! of fenced code blocks. Rather than chase whatever shape an engine default
//! happens to emit, this stage owns it: a small event-mapping pass replaces
//! the engine's code-block tags so that
//!
//! * a block fenced with a language hint renders as
//!   `<pre><code class="python language-python">…</code></pre>` — the first
//!   class token is the bare hint, with conventional `language-*` text after
//!   it for syntax highlighters;
//! * a block with no hint (or an indented code block) renders as a bare
//!   `<pre><code>…</code></pre>`.
//!
//! Everything else (headings, lists, tables, inline markup, HTML escaping of
//! code content) is the engine's standard output.

use crate::config::ConversionConfig;
use crate::error::Md2HtmlError;
use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// A configured Markdown-to-HTML engine.
///
/// Constructed per run from the [`ConversionConfig`]; there is no process-wide
/// converter state, so tests and embedding callers can hold differently
/// configured renderers side by side.
pub struct HtmlRenderer {
    options: Options,
}

impl HtmlRenderer {
    /// Build a renderer from the config's dialect toggles.
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            options: config.dialect_options(),
        }
    }

    /// Render Markdown text to HTML.
    pub fn render(&self, markdown: &str) -> Result<String, Md2HtmlError> {
        let events = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::Start(Tag::CodeBlock(kind)) => Event::Html(open_code_block(&kind).into()),
            Event::End(TagEnd::CodeBlock) => Event::Html("</code></pre>\n".into()),
            other => other,
        });

        // Rendered HTML is typically a bit larger than the source.
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::write_html_fmt(&mut out, events)
            .map_err(|e| Md2HtmlError::RenderFailed(e.to_string()))?;
        Ok(out)
    }
}

/// Emit the opening tags for a code block in the documented shape.
fn open_code_block(kind: &CodeBlockKind<'_>) -> String {
    let lang = match kind {
        CodeBlockKind::Indented => None,
        CodeBlockKind::Fenced(info) => language_token(info),
    };
    match lang {
        Some(lang) => format!("<pre><code class=\"{lang} language-{lang}\">"),
        None => "<pre><code>".to_string(),
    }
}

/// Extract the leading word-character token of a fence info string.
///
/// `"python"` → `python`; `"rust,ignore"` → `rust`; `""` → None. Only
/// `[A-Za-z0-9_]` may appear in the class attribute's first token, so the
/// token doubles as its own escaping.
fn language_token(info: &str) -> Option<&str> {
    let info = info.trim_start();
    let end = info
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(info.len());
    let token = &info[..end];
    (!token.is_empty()).then_some(token)
}
