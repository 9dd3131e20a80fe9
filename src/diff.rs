use crate::align::AlignmentTable;
use crate::token::WordToken;
use serde::{Deserialize, Serialize};

/// One classified step of the reconstruction walk
///
/// Text variants borrow the rewritten-side token, so output keeps the
/// rewritten casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "text", rename_all = "snake_case")]
pub enum DiffOp<'a> {
    /// Token present on both sides
    Unchanged(&'a str),
    /// Rewritten token replacing one original token
    Substituted(&'a str),
    /// Rewritten token with no original counterpart
    Inserted(&'a str),
    /// Original token removed; renders nothing
    Dropped,
}

impl<'a> DiffOp<'a> {
    /// Text this op contributes to the output, if any
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            DiffOp::Unchanged(t) | DiffOp::Substituted(t) | DiffOp::Inserted(t) => Some(t),
            DiffOp::Dropped => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, DiffOp::Dropped)
    }
}

/// How a mismatch that favors the original side becomes a substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionPolicy {
    /// Substitute when stepping both cursors keeps the alignment optimal,
    /// i.e. `T[i+1][j+1] == T[i][j]`
    #[default]
    Diagonal,
    /// Substitute only when `T[i][j+1] > T[i+1][j]`. Inside the
    /// original-favoring branch this never holds, so every such mismatch is
    /// dropped and the rewritten word shows up later as an insertion.
    /// Empty texts still tokenize to nothing, so an empty side yields no
    /// empty inserted token.
    Legacy,
}

/// Walk the alignment table forward and classify every step
///
/// Each step advances at least one cursor, so the walk visits every
/// original and rewritten position exactly once and ends at `(n, m)`.
pub fn reconstruct<'a>(
    original: &[WordToken<'_>],
    rewritten: &[WordToken<'a>],
    table: &AlignmentTable,
    policy: SubstitutionPolicy,
) -> Vec<DiffOp<'a>> {
    let n = original.len();
    let m = rewritten.len();
    let mut ops = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);

    while i < n || j < m {
        if i < n && j < m && original[i] == rewritten[j] {
            ops.push(DiffOp::Unchanged(rewritten[j].text));
            i += 1;
            j += 1;
        } else if i < n && (j >= m || table.get(i + 1, j) >= table.get(i, j + 1)) {
            if j < m && substitutes(table, i, j, policy) {
                ops.push(DiffOp::Substituted(rewritten[j].text));
                i += 1;
                j += 1;
            } else {
                ops.push(DiffOp::Dropped);
                i += 1;
            }
        } else {
            ops.push(DiffOp::Inserted(rewritten[j].text));
            j += 1;
        }
    }

    ops
}

fn substitutes(table: &AlignmentTable, i: usize, j: usize, policy: SubstitutionPolicy) -> bool {
    match policy {
        SubstitutionPolicy::Diagonal => table.get(i + 1, j + 1) == table.get(i, j),
        SubstitutionPolicy::Legacy => table.get(i, j + 1) > table.get(i + 1, j),
    }
}

/// Counts of each op kind in a reconstruction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub substituted: usize,
    pub inserted: usize,
    pub dropped: usize,
}

impl DiffStats {
    pub fn from_ops(ops: &[DiffOp<'_>]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            match op {
                DiffOp::Unchanged(_) => stats.unchanged += 1,
                DiffOp::Substituted(_) => stats.substituted += 1,
                DiffOp::Inserted(_) => stats.inserted += 1,
                DiffOp::Dropped => stats.dropped += 1,
            }
        }
        stats
    }

    /// Steps that advanced the original cursor; equals `n`
    pub fn original_consumed(&self) -> usize {
        self.unchanged + self.substituted + self.dropped
    }

    /// Steps that advanced the rewritten cursor; equals `m`
    pub fn rewritten_consumed(&self) -> usize {
        self.unchanged + self.substituted + self.inserted
    }

    /// True when no visible change was recorded
    pub fn is_unchanged(&self) -> bool {
        self.substituted == 0 && self.inserted == 0 && self.dropped == 0
    }
}
