//! Persisted key-value store adapter.
//!
//! # Responsibility
//! - Define the collection-keyed store contract injected into the board
//!   service.
//! - Keep payload encoding (JSON mappings keyed by entity id) in one place.
//!
//! # Invariants
//! - A `write` replaces the whole payload for its key; it succeeds
//!   synchronously or fails the operation, never partially.
//! - Writes to different keys are independent: there is no transaction
//!   spanning collections, so a crash between two writes can leave them
//!   mutually inconsistent.
//!
//! # See also
//! - docs/architecture/storage.md

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::DbError;

mod sqlite;

pub use sqlite::SqliteKvStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Typed identifier for every persisted slot.
///
/// Three entity collections plus one scalar slot for the currently selected
/// board id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Boards,
    Tableaus,
    Tasks,
    CurrentBoard,
}

impl StoreKey {
    /// Stable persisted name for this slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boards => "boards",
            Self::Tableaus => "tableaus",
            Self::Tasks => "tasks",
            Self::CurrentBoard => "current_board",
        }
    }
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from store reads/writes and payload codec failures.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode {
        key: StoreKey,
        source: serde_json::Error,
    },
    Decode {
        key: StoreKey,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode { key, source } => {
                write!(f, "failed to encode `{key}` payload: {source}")
            }
            Self::Decode { key, source } => {
                write!(f, "failed to decode `{key}` payload: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode { source, .. } | Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous key-value contract for board persistence.
///
/// Implementations only move raw payloads; collection encoding lives in the
/// provided methods so every backend persists the same JSON layout.
pub trait KvStore {
    /// Reads the raw payload for a slot. `None` when the slot was never
    /// written.
    fn read(&self, key: StoreKey) -> StoreResult<Option<String>>;

    /// Replaces the raw payload for a slot.
    fn write(&self, key: StoreKey, payload: &str) -> StoreResult<()>;

    /// Loads one collection as an id-keyed mapping.
    ///
    /// An absent slot loads as an empty mapping, matching the first-run
    /// contract.
    fn load_collection<T: DeserializeOwned>(
        &self,
        key: StoreKey,
    ) -> StoreResult<HashMap<String, T>>
    where
        Self: Sized,
    {
        match self.read(key)? {
            Some(payload) => {
                serde_json::from_str(&payload).map_err(|source| StoreError::Decode { key, source })
            }
            None => Ok(HashMap::new()),
        }
    }

    /// Persists one collection as an id-keyed mapping.
    fn save_collection<T: Serialize>(
        &self,
        key: StoreKey,
        entries: &HashMap<String, T>,
    ) -> StoreResult<()>
    where
        Self: Sized,
    {
        let payload =
            serde_json::to_string(entries).map_err(|source| StoreError::Encode { key, source })?;
        self.write(key, &payload)
    }

    /// Reads the currently selected board id, if one was ever stored.
    fn current_board_id(&self) -> StoreResult<Option<String>> {
        self.read(StoreKey::CurrentBoard)
    }

    /// Stores the currently selected board id.
    fn set_current_board_id(&self, board_id: &str) -> StoreResult<()> {
        self.write(StoreKey::CurrentBoard, board_id)
    }
}
