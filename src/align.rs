//! Suffix alignment table
//!
//! Cell `(i, j)` holds the length of the longest common subsequence of
//! `original[i..]` and `rewritten[j..]`. Row `n` and column `m` are the empty
//! suffixes and stay zero.

use crate::token::WordToken;

/// Dense `(n + 1) x (m + 1)` table of suffix alignment lengths
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl AlignmentTable {
    /// Fill the table for two token sequences
    ///
    /// Rows are filled from `n - 1` down to `0` and, within a row, columns
    /// from `m - 1` down to `0`, so every cell is written before it is read.
    pub fn build(original: &[WordToken<'_>], rewritten: &[WordToken<'_>]) -> Self {
        let n = original.len();
        let m = rewritten.len();
        let mut table = Self {
            rows: n + 1,
            cols: m + 1,
            cells: vec![0; (n + 1) * (m + 1)],
        };

        for i in (0..n).rev() {
            for j in (0..m).rev() {
                let value = if original[i] == rewritten[j] {
                    1 + table.cells[table.offset(i + 1, j + 1)]
                } else {
                    table.cells[table.offset(i + 1, j)].max(table.cells[table.offset(i, j + 1)])
                };
                let idx = table.offset(i, j);
                table.cells[idx] = value;
            }
        }

        table
    }

    /// Alignment length for the suffixes starting at `i` and `j`
    ///
    /// Panics if `i > n` or `j > m`.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[self.offset(i, j)]
    }

    /// Length of the longest common subsequence of the full sequences
    pub fn lcs_len(&self) -> u32 {
        self.get(0, 0)
    }

    /// Number of original tokens (`n`)
    pub fn original_len(&self) -> usize {
        self.rows - 1
    }

    /// Number of rewritten tokens (`m`)
    pub fn rewritten_len(&self) -> usize {
        self.cols - 1
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        i * self.cols + j
    }
}
