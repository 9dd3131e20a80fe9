//! Markup rendering for a classified diff
//!
//! Unchanged tokens render as plain escaped text. Substitutions and
//! insertions are wrapped in `<span style="...">` with the style picked from a
//! [`StyleSet`]. Dropped tokens render nothing. Tokens are joined with a
//! single space.

use crate::diff::DiffOp;
use crate::filler::FillerSet;
use serde::{Deserialize, Serialize};

const REPLACED_STYLE: &str =
    "background:#ff4757;color:white;padding:2px 6px;border-radius:4px;font-weight:500";
const FILLER_STYLE: &str =
    "background:#ffa502;color:white;padding:2px 6px;border-radius:4px;font-weight:500";
const NEW_CONTENT_STYLE: &str =
    "background:#1e90ff;color:white;padding:2px 6px;border-radius:4px;font-weight:500";

/// Inline styles for highlighted tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSet {
    /// Substituted tokens
    pub replaced: String,
    /// Inserted filler words
    pub filler: String,
    /// Any other inserted token
    pub new_content: String,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            replaced: REPLACED_STYLE.to_string(),
            filler: FILLER_STYLE.to_string(),
            new_content: NEW_CONTENT_STYLE.to_string(),
        }
    }
}

/// Which highlight an emitted token gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Replaced,
    Filler,
    NewContent,
}

impl StyleSet {
    pub fn style_for(&self, highlight: Highlight) -> &str {
        match highlight {
            Highlight::Replaced => &self.replaced,
            Highlight::Filler => &self.filler,
            Highlight::NewContent => &self.new_content,
        }
    }
}

/// Escape `&`, `<`, `>` and `"` for embedding in HTML text or attributes
///
/// # Example
/// ```
/// use rewrite_diff::escape_html;
/// assert_eq!(escape_html("<b>\"hi\" & bye</b>"), "&lt;b&gt;&quot;hi&quot; &amp; bye&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Highlight for an op, or `None` for plain or invisible output
pub fn highlight_for(op: &DiffOp<'_>, filler: &FillerSet) -> Option<Highlight> {
    match op {
        DiffOp::Substituted(_) => Some(Highlight::Replaced),
        DiffOp::Inserted(text) if filler.contains(text) => Some(Highlight::Filler),
        DiffOp::Inserted(_) => Some(Highlight::NewContent),
        DiffOp::Unchanged(_) | DiffOp::Dropped => None,
    }
}

/// Render a diff op sequence to a single markup string
pub fn render(ops: &[DiffOp<'_>], filler: &FillerSet, styles: &StyleSet) -> String {
    let mut pieces = Vec::with_capacity(ops.len());

    for op in ops {
        let Some(text) = op.text() else {
            continue;
        };
        let piece = match highlight_for(op, filler) {
            Some(highlight) => format!(
                "<span style=\"{}\">{}</span>",
                escape_html(styles.style_for(highlight)),
                escape_html(text)
            ),
            None => escape_html(text),
        };
        pieces.push(piece);
    }

    pieces.join(" ")
}
