//! Record types: one per persisted list.
//!
//! Records are immutable once created. Field names on the wire match the
//! browser demo's local-storage JSON, so existing dumps deserialise as-is.
//! The demo stores an unparseable number as `null`; such fields read as 0.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
  identity::Identity,
  keys,
  list::{End, Record},
};

/// `null` or a missing field reads as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ─── Health log ──────────────────────────────────────────────────────────────

/// One metric reading, e.g. `steps = 4200 count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthLogEntry {
  pub uid:         Identity,
  pub metric:      String,
  #[serde(default, deserialize_with = "null_as_default")]
  pub value:       f64,
  pub unit:        String,
  #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
  pub recorded_at: DateTime<Utc>,
}

impl Record for HealthLogEntry {
  const SLOT: &'static str = keys::LOGS;
  const INSERT_AT: End = End::Back;
  const EMPTY_MESSAGE: &'static str = "No entries yet.";

  fn owner(&self) -> &Identity { &self.uid }
}

impl fmt::Display for HealthLogEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {}: {} {}",
      self.recorded_at.format("%Y-%m-%d %H:%M"),
      self.metric,
      self.value,
      self.unit
    )
  }
}

// ─── Community ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
  pub uid:       Identity,
  pub title:     String,
  pub body:      String,
  #[serde(rename = "ts", with = "chrono::serde::ts_milliseconds")]
  pub posted_at: DateTime<Utc>,
}

impl Record for CommunityPost {
  const SLOT: &'static str = keys::POSTS;
  const INSERT_AT: End = End::Front;
  const EMPTY_MESSAGE: &'static str = "No posts yet.";

  fn owner(&self) -> &Identity { &self.uid }
}

impl fmt::Display for CommunityPost {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}\n  {}\n  By {} on {}",
      self.title,
      self.body,
      self.uid,
      self.posted_at.format("%Y-%m-%d")
    )
  }
}

// ─── Consultancy ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
  Confirmed,
}

impl fmt::Display for BookingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Confirmed => f.write_str("confirmed"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
  pub uid:    Identity,
  /// Who the consultation is with, e.g. "doctor" or "nutritionist".
  pub role:   String,
  pub slot:   String,
  pub status: BookingStatus,
}

impl Record for Booking {
  const SLOT: &'static str = keys::BOOKINGS;
  const INSERT_AT: End = End::Front;
  const EMPTY_MESSAGE: &'static str = "No bookings yet.";

  fn owner(&self) -> &Identity { &self.uid }
}

impl fmt::Display for Booking {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}  {}  {}", self.role, self.slot, self.status)
  }
}

// ─── Emergency aid ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AidStatus {
  UnderReview,
}

impl fmt::Display for AidStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnderReview => f.write_str("under_review"),
    }
  }
}

/// An aid request. Only the masked national ID is ever held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidRequest {
  pub uid:        Identity,
  pub nid_masked: String,
  #[serde(default, deserialize_with = "null_as_default")]
  pub amount:     i64,
  pub status:     AidStatus,
}

impl Record for AidRequest {
  const SLOT: &'static str = keys::AID;
  const INSERT_AT: End = End::Front;
  const EMPTY_MESSAGE: &'static str = "No requests submitted.";

  fn owner(&self) -> &Identity { &self.uid }
}

impl fmt::Display for AidRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}  {} BDT  {}", self.nid_masked, self.amount, self.status)
  }
}

// ─── Goals ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
  pub uid:      Identity,
  pub name:     String,
  pub target:   u32,
  pub progress: u32,
  pub badge:    String,
}

impl Record for Goal {
  const SLOT: &'static str = keys::GOALS;
  const INSERT_AT: End = End::Back;
  const EMPTY_MESSAGE: &'static str = "No goals yet. Set simple, achievable steps.";

  fn owner(&self) -> &Identity { &self.uid }
}

impl fmt::Display for Goal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: {}/{} (badge: {})",
      self.name, self.progress, self.target, self.badge
    )
  }
}
