//! Board state and its mutations
//!
//! Holds everything that must be persisted for Continue: the task layout,
//! the marks and the last bingo count the player was told about.

use rand::Rng;
use thiserror::Error;

use super::notify::BingoTransition;
use super::patterns::{BingoReport, detect};
use super::tasks::{default_tasks, shuffle_pool};
use crate::consts::{BOARD_CELLS, FREE_INDEX, FREE_TASK};

/// Task text per cell, row-major
pub type Tasks = [String; BOARD_CELLS];
/// Mark flag per cell, same indexing as `Tasks`
pub type Marks = [bool; BOARD_CELLS];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell index {0} is outside the 5x5 board")]
    IndexOutOfRange(usize),
}

/// Marked cell tally for the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub marked: usize,
    pub total: usize,
}

impl Progress {
    /// Percentage of marked cells (0.0 - 100.0)
    pub fn percent(&self) -> f64 {
        self.marked as f64 / self.total as f64 * 100.0
    }

    /// Counter label, e.g. "7 / 25"
    pub fn label(&self) -> String {
        format!("{} / {}", self.marked, self.total)
    }
}

/// Complete board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// Task text per cell
    pub tasks: Tasks,
    /// Which cells are checked
    pub marked: Marks,
    /// Bingo count as of the last win check
    pub bingo_count: u32,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Fresh board: default layout, nothing marked
    pub fn new() -> Self {
        Self {
            tasks: default_tasks(),
            marked: [false; BOARD_CELLS],
            bingo_count: 0,
        }
    }

    /// Rebuild from stored parts; the centre is always forced back to FREE
    pub fn from_parts(mut tasks: Tasks, marked: Marks, bingo_count: u32) -> Self {
        tasks[FREE_INDEX] = FREE_TASK.to_string();
        Self {
            tasks,
            marked,
            bingo_count,
        }
    }

    /// Flip a cell's mark. Returns the new value.
    ///
    /// The free space is toggleable like any other cell.
    pub fn toggle_mark(&mut self, index: usize) -> Result<bool, BoardError> {
        let mark = self
            .marked
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange(index))?;
        *mark = !*mark;
        Ok(*mark)
    }

    /// Evaluate win patterns against the current marks
    pub fn report(&self) -> BingoReport {
        detect(&self.marked)
    }

    /// Run the win check and move the stored count to the current one
    pub fn check_bingos(&mut self) -> (BingoReport, BingoTransition) {
        let report = self.report();
        let transition = BingoTransition::between(self.bingo_count, report.count);
        if transition.needs_save() {
            self.bingo_count = report.count;
        }
        (report, transition)
    }

    /// Texts of marked cells, excluding the free space, in board order
    pub fn marked_tasks(&self) -> impl Iterator<Item = &str> {
        self.tasks
            .iter()
            .zip(self.marked.iter())
            .filter(|(task, marked)| **marked && task.as_str() != FREE_TASK)
            .map(|(task, _)| task.as_str())
    }

    /// Lay the tasks out in a new random order.
    ///
    /// Marks follow their task text, not their old cell. The free space is
    /// not carried over. The bingo count is recomputed from scratch so the
    /// shuffle itself never triggers a celebration.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> BingoReport {
        let carried: Vec<String> = self.marked_tasks().map(str::to_string).collect();

        self.tasks = shuffle_pool(rng);
        self.marked = std::array::from_fn(|i| carried.iter().any(|t| *t == self.tasks[i]));

        let report = self.report();
        self.bingo_count = report.count;
        log::debug!(
            "Shuffled board, {} marks carried, {} bingos",
            carried.len(),
            report.count
        );
        report
    }

    /// Back to the default layout with nothing marked
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Marked cell tally
    pub fn progress(&self) -> Progress {
        Progress {
            marked: self.marked.iter().filter(|m| **m).count(),
            total: BOARD_CELLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::BTreeSet;

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.tasks[FREE_INDEX], FREE_TASK);
        assert!(board.marked.iter().all(|m| !m));
        assert_eq!(board.bingo_count, 0);
        assert_eq!(board.progress().label(), "0 / 25");
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut board = BoardState::new();
        assert_eq!(board.toggle_mark(25), Err(BoardError::IndexOutOfRange(25)));
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_free_space_is_toggleable() {
        let mut board = BoardState::new();
        assert_eq!(board.toggle_mark(FREE_INDEX), Ok(true));
        assert!(board.marked[FREE_INDEX]);
    }

    #[test]
    fn test_from_parts_forces_free() {
        let mut tasks = default_tasks();
        tasks[FREE_INDEX] = "Hijacked".to_string();
        let board = BoardState::from_parts(tasks, [false; BOARD_CELLS], 0);
        assert_eq!(board.tasks[FREE_INDEX], FREE_TASK);
    }

    #[test]
    fn test_check_bingos_row_sequence() {
        let mut board = BoardState::new();
        for i in 0..4 {
            board.toggle_mark(i).unwrap();
            let (_, t) = board.check_bingos();
            assert_eq!(t, BingoTransition::Unchanged);
        }

        board.toggle_mark(4).unwrap();
        let (report, t) = board.check_bingos();
        assert_eq!(report.count, 1);
        assert_eq!(t, BingoTransition::Gained { delta: 1 });
        assert_eq!(board.bingo_count, 1);

        board.toggle_mark(2).unwrap();
        let (_, t) = board.check_bingos();
        assert_eq!(t, BingoTransition::Lost);
        assert_eq!(board.bingo_count, 0);

        board.toggle_mark(2).unwrap();
        let (_, t) = board.check_bingos();
        assert_eq!(t, BingoTransition::Gained { delta: 1 });
    }

    #[test]
    fn test_shuffle_drops_free_mark() {
        let mut board = BoardState::new();
        board.toggle_mark(FREE_INDEX).unwrap();
        board.shuffle(&mut Pcg32::seed_from_u64(1));
        assert!(!board.marked[FREE_INDEX]);
        assert_eq!(board.tasks[FREE_INDEX], FREE_TASK);
    }

    #[test]
    fn test_shuffle_recomputes_count() {
        let mut board = BoardState::new();
        for i in 0..5 {
            board.toggle_mark(i).unwrap();
        }
        board.check_bingos();
        assert_eq!(board.bingo_count, 1);

        let report = board.shuffle(&mut Pcg32::seed_from_u64(42));
        assert_eq!(board.bingo_count, report.count);
        assert_eq!(board.report(), report);
    }

    #[test]
    fn test_reset() {
        let mut board = BoardState::new();
        board.shuffle(&mut Pcg32::seed_from_u64(3));
        board.toggle_mark(0).unwrap();
        board.bingo_count = 5;
        board.reset();
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_progress_percent() {
        let mut board = BoardState::new();
        for i in [0, 1, 2, 3, 4] {
            board.toggle_mark(i).unwrap();
        }
        let progress = board.progress();
        assert_eq!(progress.marked, 5);
        assert!((progress.percent() - 20.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_toggle_twice_restores(index in 0usize..BOARD_CELLS,
                                      bits in proptest::array::uniform25(any::<bool>())) {
            let mut board = BoardState::from_parts(default_tasks(), bits, 0);
            board.toggle_mark(index).unwrap();
            board.toggle_mark(index).unwrap();
            prop_assert_eq!(board.marked, bits);
        }

        #[test]
        fn prop_shuffle_preserves_marked_texts(seed in any::<u64>(),
                                               bits in proptest::array::uniform25(any::<bool>())) {
            let mut board = BoardState::from_parts(default_tasks(), bits, 0);
            let before: BTreeSet<String> = board.marked_tasks().map(str::to_string).collect();

            board.shuffle(&mut Pcg32::seed_from_u64(seed));
            let after: BTreeSet<String> = board.marked_tasks().map(str::to_string).collect();

            prop_assert_eq!(before, after);
            prop_assert_eq!(board.tasks[FREE_INDEX].as_str(), FREE_TASK);
        }
    }
}
