//! [`SqliteStore`]: the SQLite implementation of [`KeyValueStore`].

use std::path::Path;

use chrono::Utc;
use nexora_core::kv::KeyValueStore;
use rusqlite::{Connection, OptionalExtension as _};
use tracing::{debug, trace};

use crate::{
  Error, Result,
  schema::{SCHEMA, VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Nexora slot store backed by a single SQLite file.
pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = Connection::open(path)?;
    debug!(path = %path.display(), "opened slot store");
    Self::init(conn)
  }

  /// Open an in-memory store: useful for testing.
  pub fn open_in_memory() -> Result<Self> { Self::init(Connection::open_in_memory()?) }

  fn init(conn: Connection) -> Result<Self> {
    let found: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if found > VERSION {
      return Err(Error::SchemaVersion { found, supported: VERSION });
    }
    conn.execute_batch(SCHEMA)?;
    Ok(Self { conn })
  }

  /// Every slot key, sorted.
  pub fn keys(&self) -> Result<Vec<String>> {
    let mut stmt = self.conn.prepare("SELECT key FROM slots ORDER BY key")?;
    let keys = stmt
      .query_map([], |row| row.get(0))?
      .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(keys)
  }
}

// ─── KeyValueStore impl ──────────────────────────────────────────────────────

impl KeyValueStore for SqliteStore {
  type Error = Error;

  fn load(&self, key: &str) -> Result<Option<String>> {
    let value: Option<String> = self
      .conn
      .query_row(
        "SELECT value FROM slots WHERE key = ?1",
        rusqlite::params![key],
        |row| row.get(0),
      )
      .optional()?;
    trace!(key, hit = value.is_some(), "slot load");
    Ok(value)
  }

  fn save(&self, key: &str, value: &str) -> Result<()> {
    let at = Utc::now().to_rfc3339();
    self.conn.execute(
      "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
       ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                      updated_at = excluded.updated_at",
      rusqlite::params![key, value, at],
    )?;
    trace!(key, bytes = value.len(), "slot save");
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<()> {
    let removed = self
      .conn
      .execute("DELETE FROM slots WHERE key = ?1", rusqlite::params![key])?;
    trace!(key, removed, "slot remove");
    Ok(())
  }
}
