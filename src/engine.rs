//! Diff engine orchestrating tokenize → align → reconstruct → render

use crate::align::AlignmentTable;
use crate::diff::{DiffOp, DiffStats, SubstitutionPolicy, reconstruct};
use crate::filler::FillerSet;
use crate::render::{StyleSet, render};
use crate::token::{WordToken, tokenize};
use thiserror::Error;
use tracing::debug;

/// Which input a token limit was exceeded on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Rewritten,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Original => write!(f, "original"),
            Side::Rewritten => write!(f, "rewritten"),
        }
    }
}

/// Errors from the capped entry point
///
/// The uncapped operations never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{side} text has {count} tokens, limit is {limit}")]
    TokenLimitExceeded {
        side: Side,
        count: usize,
        limit: usize,
    },
}

/// Knobs for a [`DiffEngine`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub filler: FillerSet,
    pub styles: StyleSet,
    pub policy: SubstitutionPolicy,
}

/// Markup plus counts for one diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiff {
    pub markup: String,
    pub stats: DiffStats,
}

/// Word-level diff engine
///
/// Holds only configuration. Every call builds fresh tokens and a fresh
/// table, so one engine can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    options: EngineOptions,
}

impl DiffEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Classify every step of the alignment between two texts
    pub fn diff<'a>(&self, original: &str, rewritten: &'a str) -> Vec<DiffOp<'a>> {
        let a = tokenize(original);
        let b = tokenize(rewritten);
        self.diff_tokens(a.as_slice(), b.as_slice())
    }

    fn diff_tokens<'a>(
        &self,
        original: &[WordToken<'_>],
        rewritten: &[WordToken<'a>],
    ) -> Vec<DiffOp<'a>> {
        let table = AlignmentTable::build(original, rewritten);
        let ops = reconstruct(original, rewritten, &table, self.options.policy);
        debug!(
            original_tokens = original.len(),
            rewritten_tokens = rewritten.len(),
            common = table.lcs_len(),
            ops = ops.len(),
            "aligned texts"
        );
        ops
    }

    /// Render the diff of two texts as markup
    pub fn render(&self, original: &str, rewritten: &str) -> String {
        self.analyze(original, rewritten).markup
    }

    /// Render the diff and return its op counts alongside
    pub fn analyze(&self, original: &str, rewritten: &str) -> RenderedDiff {
        let ops = self.diff(original, rewritten);
        self.finish(&ops)
    }

    /// Like [`DiffEngine::analyze`], refusing inputs over `max_tokens` tokens
    ///
    /// The table is quadratic in the token counts; this is where callers
    /// that need bounded latency cap them.
    pub fn try_analyze(
        &self,
        original: &str,
        rewritten: &str,
        max_tokens: Option<usize>,
    ) -> Result<RenderedDiff, EngineError> {
        let a = tokenize(original);
        let b = tokenize(rewritten);

        if let Some(limit) = max_tokens {
            check_limit(Side::Original, a.len(), limit)?;
            check_limit(Side::Rewritten, b.len(), limit)?;
        }

        let ops = self.diff_tokens(a.as_slice(), b.as_slice());
        Ok(self.finish(&ops))
    }

    fn finish(&self, ops: &[DiffOp<'_>]) -> RenderedDiff {
        let markup = render(ops, &self.options.filler, &self.options.styles);
        RenderedDiff {
            markup,
            stats: DiffStats::from_ops(ops),
        }
    }
}

fn check_limit(side: Side, count: usize, limit: usize) -> Result<(), EngineError> {
    if count > limit {
        return Err(EngineError::TokenLimitExceeded { side, count, limit });
    }
    Ok(())
}

/// Render the word-level diff of `original` against `rewritten`
///
/// Uses the built-in filler words and default styles. Total: any pair of
/// strings produces markup, and identical inputs produce identical output.
///
/// # Example
/// ```
/// use rewrite_diff::diff_render;
/// assert_eq!(diff_render("Hello World", "hello world"), "hello world");
/// ```
pub fn diff_render(original: &str, rewritten: &str) -> String {
    DiffEngine::default().render(original, rewritten)
}
