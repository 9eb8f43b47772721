//! Win pattern detection
//!
//! Twelve fixed lines over the 5x5 grid. Detection re-runs over every
//! pattern on each call; 12 patterns x 5 lookups needs no incremental tracking.

use crate::consts::BOARD_CELLS;

/// Five cell indices forming one bingo line
pub type WinPattern = [usize; 5];

/// Rows, then columns, then the two diagonals
pub const WIN_PATTERNS: [WinPattern; 12] = [
    [0, 1, 2, 3, 4],
    [5, 6, 7, 8, 9],
    [10, 11, 12, 13, 14],
    [15, 16, 17, 18, 19],
    [20, 21, 22, 23, 24],
    [0, 5, 10, 15, 20],
    [1, 6, 11, 16, 21],
    [2, 7, 12, 17, 22],
    [3, 8, 13, 18, 23],
    [4, 9, 14, 19, 24],
    [0, 6, 12, 18, 24],
    [4, 8, 12, 16, 20],
];

/// Result of a win check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BingoReport {
    /// Number of fully marked patterns
    pub count: u32,
    /// Completed patterns, in `WIN_PATTERNS` order
    pub patterns: Vec<WinPattern>,
}

impl BingoReport {
    /// Cells belonging to any completed line (for highlighting)
    pub fn winning_cells(&self) -> [bool; BOARD_CELLS] {
        let mut cells = [false; BOARD_CELLS];
        for pattern in &self.patterns {
            for &index in pattern {
                cells[index] = true;
            }
        }
        cells
    }
}

/// Count the patterns whose five cells are all marked
pub fn detect(marks: &[bool; BOARD_CELLS]) -> BingoReport {
    let patterns: Vec<WinPattern> = WIN_PATTERNS
        .iter()
        .filter(|pattern| pattern.iter().all(|&i| marks[i]))
        .copied()
        .collect();

    BingoReport {
        count: patterns.len() as u32,
        patterns,
    }
}
