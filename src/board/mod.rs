//! Board module
//!
//! All game logic lives here. This module must be pure and deterministic:
//! - Win detection is recomputed from scratch, never tracked incrementally
//! - Randomness is injected by the caller (seeded RNG in tests)
//! - No storage, rendering or platform dependencies

pub mod notify;
pub mod patterns;
pub mod state;
pub mod tasks;

pub use notify::BingoTransition;
pub use patterns::{BingoReport, WIN_PATTERNS, WinPattern, detect};
pub use state::{BoardError, BoardState, Marks, Progress, Tasks};
pub use tasks::{DEFAULT_TASKS, default_tasks, shuffle_pool};
