//! Save/load persistence
//!
//! Features:
//! - Versioned JSON envelope under a fixed key
//! - Length and version validation on load
//! - Corrupt or incompatible records are treated as absent

pub mod envelope;
pub mod store;

pub use envelope::{LoadError, PersistError, PersistedState, clear, load, save};
pub use store::{KeyValueStore, MemoryStore, StorageError};
