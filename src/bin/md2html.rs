//! CLI binary for md2html.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use md2html::{convert, convert_to_file, ConversionConfig, DEFAULT_MAX_SOURCE_BYTES};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (stdout)
  md2html lesson.md

  # Convert to file
  md2html lesson.md -o lesson.html

  # Plain engine HTML, no code-block annotation
  md2html --raw lesson.md

  # Disable GFM tables, enable typographic punctuation
  md2html --no-tables --smart-punctuation notes.md -o notes.html

  # Structured JSON (html + stats)
  md2html --json lesson.md > lesson.json

CODE-BLOCK ANNOTATION:
  Fenced blocks tagged with a language become executable listings:
    ```python            <pre data-code-language="python"
    print(1)       ──▶       data-executable="true"
    ```                      data-type="programlisting">print(1)</pre>

  Untagged fenced blocks become captured-output markers:
    ```                  <pre data-output="true">total 0</pre>
    total 0        ──▶
    ```

ENVIRONMENT VARIABLES:
  MD2HTML_OUTPUT            Default for -o/--output
  MD2HTML_MAX_SOURCE_BYTES  Default for --max-source-bytes
  RUST_LOG                  Tracing filter (overrides -v/-q)
"#;

/// Convert a Markdown document to annotated HTML.
#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert a Markdown document to presentation-ready HTML",
    long_about = "Convert one UTF-8 Markdown document to HTML, marking language-tagged \
fenced code blocks as executable programlistings and untagged fenced blocks as \
captured program output for downstream presentation renderers.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the Markdown source file.
    input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, env = "MD2HTML_OUTPUT")]
    output: Option<PathBuf>,

    /// Disable GFM tables.
    #[arg(long)]
    no_tables: bool,

    /// Disable footnotes.
    #[arg(long)]
    no_footnotes: bool,

    /// Disable ~~strikethrough~~.
    #[arg(long)]
    no_strikethrough: bool,

    /// Disable task-list items.
    #[arg(long)]
    no_tasklists: bool,

    /// Replace straight quotes and dashes with typographic equivalents.
    #[arg(long)]
    smart_punctuation: bool,

    /// Emit the engine's HTML untouched, skipping the code-block rewrite rules.
    #[arg(long)]
    raw: bool,

    /// Maximum source file size in bytes.
    #[arg(long, env = "MD2HTML_MAX_SOURCE_BYTES", default_value_t = DEFAULT_MAX_SOURCE_BYTES)]
    max_source_bytes: u64,

    /// Output structured JSON (html + stats) instead of HTML.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = ConversionConfig::builder()
        .tables(!cli.no_tables)
        .footnotes(!cli.no_footnotes)
        .strikethrough(!cli.no_strikethrough)
        .tasklists(!cli.no_tasklists)
        .smart_punctuation(cli.smart_punctuation)
        .annotate_code_blocks(!cli.raw)
        .max_source_bytes(cli.max_source_bytes)
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let stats = convert_to_file(&cli.input, output_path, &config)
            .context("Conversion failed")?;

        if !cli.quiet {
            eprintln!(
                "{} generated {} from {}",
                green("✔"),
                bold(&output_path.display().to_string()),
                cli.input.display(),
            );
            eprintln!(
                "   {}  {}",
                dim(&format!(
                    "{} listings / {} output blocks",
                    stats.listing_blocks, stats.output_blocks
                )),
                dim(&format!("{}ms", stats.total_duration_ms)),
            );
        }
    } else {
        let output = convert(&cli.input, &config).context("Conversion failed")?;

        if cli.json {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            println!("{json}");
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(output.html.as_bytes())
                .context("Failed to write to stdout")?;
            // Ensure a trailing newline on stdout.
            if !output.html.ends_with('\n') {
                handle.write_all(b"\n").ok();
            }
        }

        if !cli.quiet && !cli.json {
            eprintln!(
                "   {}",
                dim(&format!(
                    "{} listings / {} output blocks  —  {}ms total",
                    output.stats.listing_blocks,
                    output.stats.output_blocks,
                    output.stats.total_duration_ms
                )),
            );
        }
    }

    Ok(())
}
