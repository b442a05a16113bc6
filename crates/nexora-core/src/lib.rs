//! Core types and handlers for the Nexora health-tracking demo.
//!
//! This crate is deliberately free of database and CLI dependencies. All
//! persistence goes through the [`KeyValueStore`](kv::KeyValueStore) trait;
//! storage backends (e.g. `nexora-store-sqlite`) implement it, and
//! [`MemoryStore`](kv::MemoryStore) is the in-process fake used by tests.

pub mod clock;
pub mod entropy;
pub mod error;
pub mod estimates;
pub mod flash;
pub mod identity;
pub mod keys;
pub mod kv;
pub mod leaderboard;
pub mod list;
pub mod mask;
pub mod nexora;
pub mod parse;
pub mod record;
pub mod session;

pub use error::{Error, Result};
pub use nexora::Nexora;
