//! SQL schema for the Nexora SQLite store.
//!
//! Executed once at connection startup. The `PRAGMA user_version` it sets is
//! checked before running it, so a database written by a newer schema is
//! refused rather than silently reinterpreted.

/// Schema version written by [`SCHEMA`].
pub const VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per local-storage slot. `value` is opaque to the database:
-- scalars as plain text, record lists as JSON arrays.
CREATE TABLE IF NOT EXISTS slots (
    key         TEXT PRIMARY KEY,
    value       TEXT NOT NULL,
    updated_at  TEXT NOT NULL   -- ISO 8601 UTC
);

PRAGMA user_version = 1;
";
