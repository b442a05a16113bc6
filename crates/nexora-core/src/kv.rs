//! The `KeyValueStore` trait and its in-memory implementation.
//!
//! Every component reads and writes persisted state through this trait and
//! never touches a concrete backend. Backends (e.g. `nexora-store-sqlite`)
//! implement it; [`MemoryStore`] is the fake used in tests.

use std::{cell::RefCell, collections::BTreeMap, convert::Infallible};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// String-keyed slots holding one string value each.
///
/// Mirrors browser local storage: values are opaque strings, `save` replaces
/// the previous value wholesale, and a missing slot is `None`, not an error.
/// Access is synchronous and single-threaded.
pub trait KeyValueStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read a slot. Returns `None` if it was never written or was removed.
  fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

  /// Write a slot, replacing any prior content.
  fn save(&self, key: &str, value: &str) -> Result<(), Self::Error>;

  /// Delete a slot. Removing an absent slot is not an error.
  fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
  type Error = S::Error;

  fn load(&self, key: &str) -> Result<Option<String>, Self::Error> { (**self).load(key) }

  fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
    (**self).save(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), Self::Error> { (**self).remove(key) }
}

// ─── In-memory store ─────────────────────────────────────────────────────────

/// A [`KeyValueStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
  slots: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Number of slots currently holding a value.
  pub fn len(&self) -> usize { self.slots.borrow().len() }

  pub fn is_empty(&self) -> bool { self.slots.borrow().is_empty() }
}

impl KeyValueStore for MemoryStore {
  type Error = Infallible;

  fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
    Ok(self.slots.borrow().get(key).cloned())
  }

  fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
    self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), Self::Error> {
    self.slots.borrow_mut().remove(key);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_slot_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.load("absent").unwrap(), None);
  }

  #[test]
  fn save_replaces_previous_value() {
    let store = MemoryStore::new();
    store.save("k", "one").unwrap();
    store.save("k", "two").unwrap();
    assert_eq!(store.load("k").unwrap().as_deref(), Some("two"));
    assert_eq!(store.len(), 1);
  }

  #[test]
  fn remove_is_idempotent() {
    let store = MemoryStore::new();
    store.save("k", "v").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert!(store.is_empty());
  }

  #[test]
  fn borrowed_store_writes_through() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.save("k", "v").unwrap();
    assert_eq!(store.load("k").unwrap().as_deref(), Some("v"));
  }
}
