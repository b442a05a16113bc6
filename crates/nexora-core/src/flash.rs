//! Flash notifications: short-lived user messages with a severity level.
//!
//! A flash is dismissed [`LIFETIME_SECS`] seconds after it was raised.
//! Dismissal is a sweep over the board rather than a timer, so it can't be
//! cancelled and has no effect on a flash that is already gone.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// How long a flash stays on the board, in seconds.
pub const LIFETIME_SECS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
  Info,
  Success,
  Warning,
  Danger,
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Info => "info",
      Self::Success => "success",
      Self::Warning => "warning",
      Self::Danger => "danger",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
  pub level:     Level,
  pub message:   String,
  pub raised_at: DateTime<Utc>,
}

impl Flash {
  pub fn expires_at(&self) -> DateTime<Utc> { self.raised_at + TimeDelta::seconds(LIFETIME_SECS) }

  pub fn is_expired(&self, now: DateTime<Utc>) -> bool { now >= self.expires_at() }
}

impl fmt::Display for Flash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}] {}", self.level, self.message)
  }
}

/// The notification region: flashes in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct FlashBoard {
  flashes: Vec<Flash>,
}

impl FlashBoard {
  pub fn new() -> Self { Self::default() }

  pub fn raise(&mut self, level: Level, message: impl Into<String>, now: DateTime<Utc>) {
    self.flashes.push(Flash { level, message: message.into(), raised_at: now });
  }

  /// Drop every flash whose lifetime has elapsed at `now`.
  pub fn sweep(&mut self, now: DateTime<Utc>) { self.flashes.retain(|f| !f.is_expired(now)); }

  /// Flashes still visible at `now`.
  pub fn visible(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Flash> {
    self.flashes.iter().filter(move |f| !f.is_expired(now))
  }

  /// Remove and return every flash still visible at `now`.
  pub fn drain(&mut self, now: DateTime<Utc>) -> Vec<Flash> {
    self.sweep(now);
    std::mem::take(&mut self.flashes)
  }

  pub fn last(&self) -> Option<&Flash> { self.flashes.last() }

  pub fn len(&self) -> usize { self.flashes.len() }

  pub fn is_empty(&self) -> bool { self.flashes.is_empty() }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn t(secs: i64) -> DateTime<Utc> { Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap() }

  #[test]
  fn expires_after_four_seconds() {
    let mut board = FlashBoard::new();
    board.raise(Level::Info, "hello", t(0));

    assert_eq!(board.visible(t(3)).count(), 1);
    assert_eq!(board.visible(t(4)).count(), 0);
  }

  #[test]
  fn sweep_keeps_fresh_flashes() {
    let mut board = FlashBoard::new();
    board.raise(Level::Success, "old", t(0));
    board.raise(Level::Warning, "new", t(3));

    board.sweep(t(5));
    assert_eq!(board.len(), 1);
    assert_eq!(board.last().map(|f| f.message.as_str()), Some("new"));

    // Sweeping again once already removed is a no-op.
    board.sweep(t(5));
    assert_eq!(board.len(), 1);
  }

  #[test]
  fn drain_empties_the_board() {
    let mut board = FlashBoard::new();
    board.raise(Level::Danger, "Invalid NID length", t(0));
    let drained = board.drain(t(1));
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].to_string(), "[danger] Invalid NID length");
    assert!(board.is_empty());
  }
}
