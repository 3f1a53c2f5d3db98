//! Cursor model: a (row, column) position clamped against the line sequence.

/// A two-dimensional cursor over the rendered lines.
///
/// Invariants: `row` always indexes a real line (or stays 0 when the
/// sequence is empty); `col` never exceeds the character length of the line
/// it indexes, with one-past-end permitted ("after the last character").
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move by a relative (row, column) delta. Total: never fails, clamps.
    ///
    /// The column re-clamps against the *target* row's length, so moving
    /// vertically onto a shorter line pulls the column back.
    pub fn move_by(&mut self, d_row: isize, d_col: isize, lines: &[String]) {
        if lines.is_empty() {
            self.row = 0;
            self.col = 0;
            return;
        }
        let row = clamp_add(self.row, d_row, lines.len() - 1);
        let col = clamp_add(self.col, d_col, line_len(lines, row));
        self.row = row;
        self.col = col;
    }

    /// Move to an absolute row with the same clamping as `move_by`.
    pub fn move_to_row(&mut self, row: usize, lines: &[String]) {
        if lines.is_empty() {
            self.row = 0;
            self.col = 0;
            return;
        }
        self.row = row.min(lines.len() - 1);
        self.col = self.col.min(line_len(lines, self.row));
    }
}

/// Character length of a line; cursor columns are character offsets.
pub fn line_len(lines: &[String], row: usize) -> usize {
    lines.get(row).map(|l| l.chars().count()).unwrap_or(0)
}

fn clamp_add(base: usize, delta: isize, max: usize) -> usize {
    (base as isize + delta).clamp(0, max as isize) as usize
}
