//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Implement the `KeyValueStore` contract over the `kv_entries` table.
//! - Refuse connections that did not go through db bootstrap.
//!
//! # Invariants
//! - `try_new` validates schema version and required shape up front, so the
//!   operation paths can assume a well-formed table.
//! - Writes bump `updated_at` so external tooling can inspect staleness.

use crate::db::migrations::latest_version;
use crate::store::{KeyValueStore, StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

const KV_TABLE: &str = "kv_entries";
const REQUIRED_COLUMNS: &[&str] = &["key", "value", "updated_at"];

/// Durable `KeyValueStore` over a migrated SQLite connection.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection after validating its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the key-value
    ///   shape is absent despite a matching version.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        validate_kv_shape(conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn validate_kv_shape(conn: &Connection) -> StoreResult<()> {
    let table_exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [KV_TABLE],
            |row| row.get(0),
        )
        .optional()?;
    if table_exists.is_none() {
        return Err(StoreError::MissingRequiredTable(KV_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('kv_entries');")?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(StoreError::MissingRequiredColumn {
                table: KV_TABLE,
                column,
            });
        }
    }

    Ok(())
}
