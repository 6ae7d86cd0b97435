//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Map the `KvStore` contract onto the `kv_entries` table.
//!
//! # Invariants
//! - One row per store key; a write replaces the previous payload in a
//!   single statement.

use rusqlite::{params, Connection};

use super::{KvStore, StoreKey, StoreResult};

/// Key-value store over a borrowed, migrated SQLite connection.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps a connection produced by `db::open_db` / `db::open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn read(&self, key: StoreKey) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM kv_entries WHERE store_key = ?1;")?;

        let mut rows = stmt.query(params![key.as_str()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get("payload")?));
        }

        Ok(None)
    }

    fn write(&self, key: StoreKey, payload: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (store_key, payload)
             VALUES (?1, ?2)
             ON CONFLICT (store_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key.as_str(), payload],
        )?;

        Ok(())
    }
}
