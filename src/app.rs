//! Application orchestration
//!
//! Owns the single board instance and its store. Every user action runs
//! mutate → win check → persist as one synchronous step and reports back
//! what the renderer needs to show.

use rand::Rng;

use crate::board::{BingoReport, BingoTransition, BoardError, BoardState};
use crate::persistence::{self, KeyValueStore};
use crate::share;

/// What a user action changed, for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Win check after the action
    pub report: BingoReport,
    /// How the bingo count moved
    pub transition: BingoTransition,
}

impl ActionOutcome {
    fn quiet(report: BingoReport) -> Self {
        Self {
            report,
            transition: BingoTransition::Unchanged,
        }
    }
}

/// The running game: board plus durable store
#[derive(Debug)]
pub struct BingoApp<S: KeyValueStore> {
    board: BoardState,
    store: S,
}

impl<S: KeyValueStore> BingoApp<S> {
    /// Restore the saved board, or start fresh when there is none
    pub fn initialize(store: S) -> Self {
        let board = persistence::load(&store).unwrap_or_else(|| {
            log::info!("Starting with the default board");
            BoardState::new()
        });
        Self { board, store }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Run the win check without mutating marks (restores highlights on start).
    /// A stored count that no longer matches the marks is corrected and saved.
    pub fn refresh(&mut self) -> ActionOutcome {
        let (report, transition) = self.board.check_bingos();
        if transition.needs_save() {
            self.persist();
        }
        ActionOutcome { report, transition }
    }

    /// Flip one cell, check for new lines and save
    pub fn toggle_mark(&mut self, index: usize) -> Result<ActionOutcome, BoardError> {
        let marked = self.board.toggle_mark(index)?;
        log::debug!("Cell {} {}", index, if marked { "marked" } else { "cleared" });

        let (report, transition) = self.board.check_bingos();
        if let BingoTransition::Gained { delta } = transition {
            log::info!("{} new bingo(s), {} total", delta, report.count);
        }
        self.persist();
        Ok(ActionOutcome { report, transition })
    }

    /// Re-deal the board; marks follow their tasks
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ActionOutcome {
        let report = self.board.shuffle(rng);
        self.persist();
        log::info!("Board shuffled");
        ActionOutcome::quiet(report)
    }

    /// Back to the default board and forget the saved record
    pub fn reset(&mut self) -> ActionOutcome {
        self.board.reset();
        if let Err(e) = persistence::clear(&mut self.store) {
            log::warn!("Failed to clear saved board: {}", e);
        }
        log::info!("Board reset");
        ActionOutcome::quiet(self.board.report())
    }

    /// Shareable progress text
    pub fn share_text(&self) -> String {
        share::progress_message(&self.board)
    }

    fn persist(&mut self) {
        if let Err(e) = persistence::save(&mut self.store, &self.board) {
            log::warn!("Failed to save board: {}", e);
        }
    }
}
