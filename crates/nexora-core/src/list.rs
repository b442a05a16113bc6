//! Persisted list stores.
//!
//! Each record type owns one slot holding a JSON array. A [`ListStore`] loads,
//! appends to and replaces that array, and renders a filtered view of it.
//! Stores only grow: nothing here edits or deletes a record in place.

use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::{Error, Result, identity::Identity, kv::KeyValueStore};

// ─── Record trait ────────────────────────────────────────────────────────────

/// Which end of the sequence a new record goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
  /// Most-recent-first feeds (posts, bookings, aid requests).
  Front,
  /// Chronological lists (logs, goals).
  Back,
}

/// A record type persisted in its own list slot.
pub trait Record: Serialize + DeserializeOwned {
  /// Slot key holding the JSON array.
  const SLOT: &'static str;
  /// Where [`ListStore::push`] inserts.
  const INSERT_AT: End;
  /// Shown in place of an empty filtered view.
  const EMPTY_MESSAGE: &'static str;

  /// The identity that created this record.
  fn owner(&self) -> &Identity;
}

// ─── Rendered view ───────────────────────────────────────────────────────────

/// The display projection of a list: either the matching records or the
/// list's empty-state message.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<R> {
  Items(Vec<R>),
  Empty(&'static str),
}

impl<R> Listing<R> {
  pub fn items(&self) -> &[R] {
    match self {
      Self::Items(items) => items,
      Self::Empty(_) => &[],
    }
  }

  pub fn is_empty(&self) -> bool { matches!(self, Self::Empty(_)) }

  pub fn len(&self) -> usize { self.items().len() }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A typed view over the slot holding all `R` records.
pub struct ListStore<'s, S, R> {
  store:   &'s S,
  _record: PhantomData<fn() -> R>,
}

impl<'s, S: KeyValueStore, R: Record> ListStore<'s, S, R> {
  pub fn new(store: &'s S) -> Self { Self { store, _record: PhantomData } }

  /// The slot's array, element by element. A missing slot is an empty array;
  /// `None` means the slot holds something that is not a JSON array.
  fn load_elements(&self) -> Result<Option<Vec<Value>>> {
    let Some(raw) = self.store.load(R::SLOT).map_err(Error::storage)? else {
      return Ok(Some(Vec::new()));
    };
    match serde_json::from_str(&raw) {
      Ok(elements) => Ok(Some(elements)),
      Err(err) => {
        warn!(slot = R::SLOT, error = %err, "list slot is not a JSON array");
        Ok(None)
      }
    }
  }

  /// All readable records in stored order. A missing or unparseable slot is
  /// an empty list, and elements that do not decode are skipped; only a
  /// backend failure is an error.
  pub fn load_all(&self) -> Result<Vec<R>> {
    let elements = self.load_elements()?.unwrap_or_default();
    let records = elements
      .into_iter()
      .enumerate()
      .filter_map(|(index, element)| match serde_json::from_value(element) {
        Ok(record) => Some(record),
        Err(err) => {
          warn!(slot = R::SLOT, index, error = %err, "skipping unreadable record");
          None
        }
      })
      .collect();
    Ok(records)
  }

  /// Replace the whole list.
  pub fn save_all(&self, records: &[R]) -> Result<()> {
    let raw = serde_json::to_string(records)?;
    self.store.save(R::SLOT, &raw).map_err(Error::storage)
  }

  /// Insert `record` at `at` and save.
  ///
  /// Existing elements are carried over verbatim, including ones
  /// [`load_all`](Self::load_all) skips. A slot that is not a JSON array is
  /// left untouched and [`Error::UnreadableSlot`] is returned.
  pub fn append(&self, record: R, at: End) -> Result<()> {
    let Some(mut elements) = self.load_elements()? else {
      return Err(Error::UnreadableSlot { slot: R::SLOT });
    };
    let element = serde_json::to_value(record)?;
    match at {
      End::Front => elements.insert(0, element),
      End::Back => elements.push(element),
    }
    let raw = serde_json::to_string(&elements)?;
    self.store.save(R::SLOT, &raw).map_err(Error::storage)
  }

  /// Append at the record type's conventional end.
  pub fn push(&self, record: R) -> Result<()> { self.append(record, R::INSERT_AT) }

  /// Records matching `predicate`, in stored order.
  pub fn render_filtered(&self, predicate: impl Fn(&R) -> bool) -> Result<Listing<R>> {
    let mine: Vec<R> = self.load_all()?.into_iter().filter(|r| predicate(r)).collect();
    Ok(if mine.is_empty() {
      Listing::Empty(R::EMPTY_MESSAGE)
    } else {
      Listing::Items(mine)
    })
  }

  /// Records created by `identity`. With nobody logged in nothing matches.
  pub fn owned_by(&self, identity: Option<&Identity>) -> Result<Listing<R>> {
    self.render_filtered(|r| identity.is_some_and(|id| r.owner() == id))
  }
}
