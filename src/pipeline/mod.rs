//! Pipeline stages for Markdown-to-HTML conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the Markdown engine) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ render ──▶ postprocess
//! (path)  (pulldown)  (rewrite rules)
//! ```
//!
//! 1. [`input`]       — validate and read the source file as UTF-8
//! 2. [`render`]      — run the Markdown engine, producing intermediate HTML
//! 3. [`postprocess`] — apply the two code-block rewrite rules to the HTML

pub mod input;
pub mod postprocess;
pub mod render;
