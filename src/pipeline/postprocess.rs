//! Post-processing: output-stage rewrite rules for fenced code blocks.
//!
//! ## Why rewrite the HTML at all?
//!
//! The downstream presentation renderer distinguishes two kinds of `<pre>`
//! block that plain Markdown cannot: *executable code listings* (a fenced
//! block with a language hint) and *captured program output* (a fenced block
//! with no hint). The engine renders both as `<pre><code …>`; these two rules
//! rewrite them into the renderer's explicit markers while preserving the
//! inner content byte for byte, including the HTML escaping the engine
//! already applied.
//!
//! ## Rule Order
//!
//! The rules run as two discrete passes, always A (output blocks) then
//! B (listings). On the shapes [`super::render`] emits the patterns are
//! mutually exclusive — a `<code>` tag either has a class or it doesn't — so
//! the order does not change today's results, but the fixed two-pass
//! structure is kept so future rules can rely on it.
//!
//! Both patterns use `(?s)` with a non-greedy inner capture so sibling
//! blocks match individually instead of one match swallowing everything
//! between the first `<pre>` and the last `</code></pre>` in the document.

use once_cell::sync::Lazy;
use regex::Regex;

/// How many blocks each rewrite rule matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteCounts {
    /// Bare `<pre><code>` blocks marked as captured output (rule A).
    pub output_blocks: usize,
    /// Language-tagged blocks marked as programlistings (rule B).
    pub listing_blocks: usize,
}

/// Apply both rewrite rules to rendered HTML.
///
/// Returns the rewritten document and the per-rule match counts. Pure
/// function of its input: same HTML in, same HTML out.
pub fn annotate_html(input: &str) -> (String, RewriteCounts) {
    let (s, output_blocks) = strip_output_blocks(input);
    let (s, listing_blocks) = annotate_listing_blocks(&s);
    (
        s,
        RewriteCounts {
            output_blocks,
            listing_blocks,
        },
    )
}

// ── Rule A: strip bare output blocks ─────────────────────────────────────────

static RE_OUTPUT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<pre><code>(.+?)</code></pre>").unwrap());

/// `<pre><code>…</code></pre>` (no attributes) → `<pre data-output="true">…</pre>`.
fn strip_output_blocks(input: &str) -> (String, usize) {
    let count = RE_OUTPUT_BLOCK.find_iter(input).count();
    let out = RE_OUTPUT_BLOCK
        .replace_all(input, "<pre data-output=\"true\">${1}</pre>")
        .into_owned();
    (out, count)
}

// ── Rule B: annotate language-tagged code blocks ─────────────────────────────

static RE_LISTING_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<pre><code class="(\w+)[^>]*>(.+?)</code></pre>"#).unwrap()
});

/// `<pre><code class="LANG …">…</code></pre>` →
/// `<pre data-code-language="LANG" data-executable="true" data-type="programlisting">…</pre>`.
///
/// The language is the first word-character token of the class attribute;
/// anything between it and the closing `>` of the opening tag is tolerated
/// and dropped.
fn annotate_listing_blocks(input: &str) -> (String, usize) {
    let count = RE_LISTING_BLOCK.find_iter(input).count();
    let out = RE_LISTING_BLOCK
        .replace_all(
            input,
            "<pre data-code-language=\"${1}\" data-executable=\"true\" data-type=\"programlisting\">${2}</pre>",
        )
        .into_owned();
    (out, count)
}

// ── Tests ────────────────────────────────────────────────────────────────────
