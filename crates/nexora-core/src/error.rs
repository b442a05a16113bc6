//! Error types for `nexora-core`.
//!
//! Only backend and serialisation failures are errors. User-facing rejections
//! (a short national ID, a booking without a subscription) are ordinary values,
//! see [`Rejection`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("slot {slot} does not hold a JSON array; refusing to overwrite it")]
  UnreadableSlot { slot: &'static str },
}

impl Error {
  /// Wrap a backend error from any [`KeyValueStore`](crate::kv::KeyValueStore).
  pub fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a feature handler refused to act. Surfaced to the user as a flash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
  #[error("national ID must be at least 6 characters, got {len}")]
  NidTooShort { len: usize },

  #[error("live consultancy requires an active subscription")]
  SubscriptionRequired,
}
