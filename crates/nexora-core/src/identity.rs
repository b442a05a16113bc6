//! Identity: the pseudonymous token standing in for a login.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entropy::Entropy;

/// Prefix of every generated token.
pub const PREFIX: &str = "NX-";

/// Shown on the leaderboard when nobody is logged in.
pub const ANONYMOUS: &str = "NX-XXXXXX";

/// A pseudonymous session identifier: `NX-` followed by 8 uppercase hex
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
  /// Draw a fresh token from `entropy`.
  pub fn generate(entropy: &mut impl Entropy) -> Self {
    let mut bytes = [0u8; 4];
    entropy.fill_bytes(&mut bytes);
    Self(format!("{PREFIX}{}", hex::encode_upper(bytes)))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for Identity {
  fn from(token: String) -> Self { Self(token) }
}

impl From<&str> for Identity {
  fn from(token: &str) -> Self { Self(token.to_owned()) }
}

impl fmt::Display for Identity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl PartialEq<str> for Identity {
  fn eq(&self, other: &str) -> bool { self.0 == other }
}
