//! Reading Bingo - A 5x5 reading challenge board
//!
//! Core modules:
//! - `board`: Board state, win detection and the bingo notifier (pure, deterministic)
//! - `persistence`: Versioned save/load over a key-value store
//! - `app`: Orchestration that threads board state through user actions
//! - `settings`: Theme preference
//! - `share`: Progress export text
//! - `confetti`: Particle burst simulation
//! - `offline`: Service worker cache policy
//! - `platform`: Browser storage and dialogs (wasm only)
//! - `renderer`: DOM and canvas rendering (wasm only)

pub mod app;
pub mod board;
pub mod confetti;
pub mod offline;
pub mod persistence;
pub mod settings;
pub mod share;

#[cfg(target_arch = "wasm32")]
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use app::{ActionOutcome, BingoApp};
pub use board::{BingoReport, BingoTransition, BoardError, BoardState};
pub use persistence::{KeyValueStore, MemoryStore, PersistedState};
pub use settings::Theme;

/// Game configuration constants
pub mod consts {
    /// Cells per board side
    pub const BOARD_SIDE: usize = 5;
    /// Total cells on the board
    pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;
    /// Centre cell, always the free space
    pub const FREE_INDEX: usize = 12;
    /// Text of the free space
    pub const FREE_TASK: &str = "FREE";

    /// LocalStorage key for the board record
    pub const STORAGE_KEY: &str = "readingBingo2026";
    /// Current persisted record version
    pub const STATE_VERSION: u32 = 1;
    /// LocalStorage key for the colour theme
    pub const THEME_KEY: &str = "theme";

    /// How long a toast stays visible (ms)
    pub const TOAST_DURATION_MS: i32 = 3000;

    /// Confetti particles per burst
    pub const CONFETTI_PARTICLES: usize = 100;
    /// Frames each confetti particle lives
    pub const CONFETTI_LIFE: u32 = 120;
    /// Downward acceleration per frame (pixels/frame²)
    pub const CONFETTI_GRAVITY: f32 = 0.4;
    /// Maximum initial speed on each axis (pixels/frame)
    pub const CONFETTI_SPREAD: f32 = 10.0;
}
