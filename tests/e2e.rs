//! End-to-end integration tests for md2html.
//!
//! Each test builds its own fixture files in a `tempfile::TempDir`, runs the
//! public library API against them, and checks the written HTML. No network,
//! no external fixtures.

use md2html::{convert, convert_str, convert_to_file, ConversionConfig, Md2HtmlError};
use std::path::PathBuf;
use tempfile::TempDir;

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Write `markdown` to `<dir>/<name>` and return the path.
fn write_source(dir: &TempDir, name: &str, markdown: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, markdown).unwrap();
    path
}

/// The document from the conversion contract: one heading, one tagged fence,
/// one untagged fence.
const LESSON_MD: &str = "# Title\n\n```python\nprint(1)\n```\n\n```\noutput-only\n```\n";

/// Assert the HTML passes the structural checks every converted document
/// must satisfy.
fn assert_html_quality(html: &str, context: &str) {
    assert!(!html.trim().is_empty(), "[{context}] HTML is empty");
    assert!(
        !html.contains("<pre><code"),
        "[{context}] unannotated code block survived: {html}"
    );
}

// ── End-to-end scenario ──────────────────────────────────────────────────────

#[test]
fn lesson_document_produces_ordered_markers() {
    let out = convert_str(LESSON_MD, &ConversionConfig::default()).unwrap();
    assert_html_quality(&out.html, "lesson");

    let heading = out.html.find("<h1>Title</h1>").expect("heading missing");
    let listing = out
        .html
        .find("<pre data-code-language=\"python\" data-executable=\"true\" data-type=\"programlisting\">print(1)\n</pre>")
        .expect("programlisting missing");
    let output = out
        .html
        .find("<pre data-output=\"true\">output-only\n</pre>")
        .expect("output block missing");

    assert!(heading < listing, "heading must precede the listing");
    assert!(listing < output, "listing must precede the output block");
    assert_eq!(out.stats.listing_blocks, 1);
    assert_eq!(out.stats.output_blocks, 1);
}

#[test]
fn file_to_file_conversion_round_trip() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "lesson.md", LESSON_MD);
    let dest = dir.path().join("lesson.html");

    let stats = convert_to_file(&source, &dest, &ConversionConfig::default()).unwrap();

    let written = std::fs::read_to_string(&dest).unwrap();
    let in_memory = convert_str(LESSON_MD, &ConversionConfig::default()).unwrap();
    assert_eq!(written, in_memory.html, "file output must match in-memory output");
    assert_eq!(stats.listing_blocks, 1);
    assert_eq!(stats.output_blocks, 1);

    // The temp file used for the atomic write must not linger.
    assert!(!dir.path().join("lesson.html.tmp").exists());
}

#[test]
fn conversion_is_idempotent_across_runs() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "doc.md", LESSON_MD);
    let dest = dir.path().join("doc.html");

    convert_to_file(&source, &dest, &ConversionConfig::default()).unwrap();
    let first = std::fs::read(&dest).unwrap();

    convert_to_file(&source, &dest, &ConversionConfig::default()).unwrap();
    let second = std::fs::read(&dest).unwrap();

    assert_eq!(first, second, "two runs must produce byte-identical output");
}

#[test]
fn overwrites_existing_destination() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "doc.md", "# New\n");
    let dest = dir.path().join("doc.html");
    std::fs::write(&dest, "stale content").unwrap();

    convert_to_file(&source, &dest, &ConversionConfig::default()).unwrap();
    let written = std::fs::read_to_string(&dest).unwrap();
    assert!(written.contains("<h1>New</h1>"));
    assert!(!written.contains("stale"));
}

// ── Failure propagation ──────────────────────────────────────────────────────

#[test]
fn missing_source_fails_without_touching_destination() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("out.html");

    let err = convert_to_file(dir.path().join("nope.md"), &dest, &ConversionConfig::default())
        .unwrap_err();
    assert!(matches!(err, Md2HtmlError::FileNotFound { .. }), "got: {err}");
    assert!(!dest.exists(), "destination must not be created on read failure");
}

#[test]
fn missing_destination_parent_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "doc.md", "# Hi\n");
    let dest = dir.path().join("no/such/dir/out.html");

    let err = convert_to_file(&source, &dest, &ConversionConfig::default()).unwrap_err();
    assert!(
        matches!(err, Md2HtmlError::OutputWriteFailed { .. }),
        "got: {err}"
    );
}

#[test]
fn non_utf8_source_is_an_encoding_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.md");
    std::fs::write(&path, b"# ok\n\xF0\x28\x8C\x28").unwrap();

    let err = convert(&path, &ConversionConfig::default()).unwrap_err();
    assert!(matches!(err, Md2HtmlError::InvalidEncoding { .. }), "got: {err}");
}

#[test]
fn oversized_source_is_rejected() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "big.md", &"x".repeat(64));
    let config = ConversionConfig::builder()
        .max_source_bytes(16)
        .build()
        .unwrap();

    let err = convert(&source, &config).unwrap_err();
    assert!(matches!(err, Md2HtmlError::SourceTooLarge { .. }), "got: {err}");
}

// ── Rule behaviour through the full stack ────────────────────────────────────

#[test]
fn sibling_blocks_annotated_independently() {
    let md = "```sh\nls\n```\n\ntext between\n\n```sh\npwd\n```\n\n```\na\nb\n```\n";
    let out = convert_str(md, &ConversionConfig::default()).unwrap();

    assert_eq!(out.stats.listing_blocks, 2);
    assert_eq!(out.stats.output_blocks, 1);
    assert_eq!(
        out.html.matches("data-type=\"programlisting\"").count(),
        2,
        "each tagged fence gets its own marker: {}",
        out.html
    );
    assert!(out.html.contains("<p>text between</p>"));
    assert!(out.html.contains("<pre data-output=\"true\">a\nb\n</pre>"));
}

#[test]
fn raw_mode_skips_annotation() {
    let out = convert_str(
        LESSON_MD,
        &ConversionConfig::builder()
            .annotate_code_blocks(false)
            .build()
            .unwrap(),
    )
    .unwrap();
    assert!(out.html.contains("<pre><code class=\"python language-python\">"));
    assert!(out.html.contains("<pre><code>output-only\n</code></pre>"));
    assert_eq!(out.stats.annotated_blocks(), 0);
}

#[test]
fn escaped_code_content_survives_annotation() {
    let md = "```html\n<b>&amp;</b>\n```\n";
    let out = convert_str(md, &ConversionConfig::default()).unwrap();
    // The engine escapes the content; the rewrite must carry it through as-is.
    assert!(
        out.html
            .contains("data-type=\"programlisting\">&lt;b&gt;&amp;amp;&lt;/b&gt;\n</pre>"),
        "got: {}",
        out.html
    );
}

#[test]
fn inline_code_is_left_alone() {
    let out = convert_str("Use `ls -la` here.\n", &ConversionConfig::default()).unwrap();
    assert!(out.html.contains("<code>ls -la</code>"), "got: {}", out.html);
    assert_eq!(out.stats.annotated_blocks(), 0);
}

#[test]
fn unicode_content_preserved() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "uni.md", "# Überschrift\n\n```\nφ = 1.618\n```\n");
    let out = convert(&source, &ConversionConfig::default()).unwrap();
    assert!(out.html.contains("Überschrift"));
    assert!(out.html.contains("<pre data-output=\"true\">φ = 1.618\n</pre>"));
}

#[test]
fn json_round_trip_of_output() {
    let out = convert_str(LESSON_MD, &ConversionConfig::default()).unwrap();
    let json = serde_json::to_string(&out).unwrap();
    let back: md2html::ConversionOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back.html, out.html);
    assert_eq!(back.stats.listing_blocks, out.stats.listing_blocks);
}

#[test]
fn destination_without_extension() {
    // `with_extension`-based temp naming must cope with an extensionless
    // destination: the temp file gains `.html.tmp` and is renamed away.
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "doc.md", "# Hi\n");
    let dest = dir.path().join("out");

    convert_to_file(&source, &dest, &ConversionConfig::default()).unwrap();

    assert!(dest.exists());
    assert!(!dir.path().join("out.html.tmp").exists());
    let written = std::fs::read_to_string(&dest).unwrap();
    assert!(written.contains("<h1>Hi</h1>"));
}
