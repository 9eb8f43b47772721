//! DOM and canvas rendering
//!
//! The board is plain DOM; confetti draws on a full-screen 2D canvas.

pub mod confetti;
pub mod grid;
pub mod theme;
pub mod toast;

pub use confetti::ConfettiCanvas;
pub use grid::{render_grid, update_cell, update_progress, update_winners};
pub use theme::apply_theme;
pub use toast::show_toast;
