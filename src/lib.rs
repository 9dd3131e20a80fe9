//! Word-level diff between an original text and its rewrite
//!
//! Texts are split on whitespace, aligned with a longest-common-subsequence
//! table (case-insensitive), classified into unchanged, substituted, inserted
//! and dropped words, and rendered as escaped HTML markup.
//!
//! ```
//! use rewrite_diff::diff_render;
//!
//! let markup = diff_render("I went home", "I actually went home");
//! assert!(markup.starts_with("I <span style=\"background:#ffa502;"));
//! assert!(markup.ends_with(">actually</span> went home"));
//! ```

// Tokenizer
pub mod token;

// Filler-word classifier
pub mod filler;

// Alignment table
pub mod align;

// Diff reconstruction
pub mod diff;

// Markup renderer
pub mod render;

// Orchestration
pub mod engine;

// Adapters
pub mod config;
pub mod file;
pub mod json;
pub mod logging;

// Re-exports
pub use token::{Span, TokenSequence, WordToken, count_words, is_split_whitespace, tokenize};
pub use filler::{FillerSet, FillerWord, is_filler};
pub use align::AlignmentTable;
pub use diff::{DiffOp, DiffStats, SubstitutionPolicy, reconstruct};
pub use render::{Highlight, StyleSet, escape_html, render};
pub use engine::{DiffEngine, EngineError, EngineOptions, RenderedDiff, Side, diff_render};
pub use config::{Config, ConfigError};
pub use file::{FileError, SourceText, checksum, read_source};
pub use json::{
    DiffResponse, DiffSummary, HumanizeRequest, HumanizeResponse, ResponseError,
    generate_execution_id,
};
