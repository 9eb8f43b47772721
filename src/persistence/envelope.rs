//! Versioned board record
//!
//! Wire shape: `{"version":1,"tasks":[..25],"marked":[..25],"bingoCount":n}`

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::store::{KeyValueStore, StorageError};
use crate::board::BoardState;
use crate::consts::{BOARD_CELLS, STATE_VERSION, STORAGE_KEY};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode board: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Reasons a stored record is rejected. Never surfaced past `load`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported record version {0}")]
    Version(u32),

    #[error("{field} has {len} entries, expected {}", BOARD_CELLS)]
    Length { field: &'static str, len: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub tasks: Vec<String>,
    pub marked: Vec<bool>,
    #[serde(rename = "bingoCount", default, deserialize_with = "lenient_count")]
    pub bingo_count: u32,
}

/// Anything but a non-negative integer that fits in `u32` reads as 0;
/// a bad count must not cost the player their marks.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0))
}

impl PersistedState {
    pub fn from_board(board: &BoardState) -> Self {
        Self {
            version: STATE_VERSION,
            tasks: board.tasks.to_vec(),
            marked: board.marked.to_vec(),
            bingo_count: board.bingo_count,
        }
    }

    /// Validate and turn into a board. The free space is re-imposed.
    pub fn into_board(self) -> Result<BoardState, LoadError> {
        if self.version != STATE_VERSION {
            return Err(LoadError::Version(self.version));
        }

        let tasks_len = self.tasks.len();
        let tasks = <[String; BOARD_CELLS]>::try_from(self.tasks).map_err(|_| LoadError::Length {
            field: "tasks",
            len: tasks_len,
        })?;

        let marked_len = self.marked.len();
        let marked = <[bool; BOARD_CELLS]>::try_from(self.marked).map_err(|_| LoadError::Length {
            field: "marked",
            len: marked_len,
        })?;

        Ok(BoardState::from_parts(tasks, marked, self.bingo_count))
    }

    /// Parse and validate a raw JSON record
    pub fn decode(json: &str) -> Result<BoardState, LoadError> {
        serde_json::from_str::<PersistedState>(json)?.into_board()
    }
}

/// Write the board under the fixed key, overwriting any previous record
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, board: &BoardState) -> Result<(), PersistError> {
    let json = serde_json::to_string(&PersistedState::from_board(board))?;
    store.set(STORAGE_KEY, &json)?;
    log::debug!("Board saved ({} marked)", board.progress().marked);
    Ok(())
}

/// Read the stored board. Missing, corrupt or incompatible records all
/// come back as `None`; the reason is logged.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<BoardState> {
    match try_load(store) {
        Ok(Some(board)) => {
            log::info!("Loaded saved board ({} bingos)", board.bingo_count);
            Some(board)
        }
        Ok(None) => {
            log::info!("No saved board found");
            None
        }
        Err(e) => {
            log::warn!("Could not load saved bingo state: {}", e);
            None
        }
    }
}

fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<BoardState>, LoadError> {
    match store.get(STORAGE_KEY)? {
        Some(json) => PersistedState::decode(&json).map(Some),
        None => Ok(None),
    }
}

/// Delete the stored board
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StorageError> {
    store.remove(STORAGE_KEY)?;
    log::info!("Saved board cleared");
    Ok(())
}
