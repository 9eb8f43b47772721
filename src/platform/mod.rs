//! Platform abstraction layer
//!
//! Browser glue for:
//! - Storage (LocalStorage)
//! - Dialogs, media queries and service worker registration
//! - Share sheet and clipboard

pub mod browser;
pub mod clipboard;
pub mod storage;

pub use browser::{confirm, prefers_dark, register_service_worker, time_seed};
pub use clipboard::deliver;
pub use storage::LocalStorage;
