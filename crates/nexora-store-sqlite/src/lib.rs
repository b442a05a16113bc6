//! SQLite backend for the Nexora key-value store.
//!
//! One table of string slots stands in for browser local storage. Access is
//! synchronous over a single [`rusqlite::Connection`].

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
