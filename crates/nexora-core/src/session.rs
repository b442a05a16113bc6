//! Identity, subscription flag and point balance.
//!
//! Three scalar slots make up the session. None of them is validated: an
//! unreadable point balance reads as zero and any subscription value other
//! than `"true"` means "not subscribed".

use tracing::{debug, info};

use crate::{
  Error, Result,
  entropy::Entropy,
  identity::Identity,
  keys,
  kv::KeyValueStore,
  parse::lenient_int,
};

const SUBSCRIBED: &str = "true";

pub struct Session<'s, S> {
  store: &'s S,
}

impl<'s, S: KeyValueStore> Session<'s, S> {
  pub fn new(store: &'s S) -> Self { Self { store } }

  // ── Identity ──────────────────────────────────────────────────────────────

  /// The persisted identity, or `None` when logged out.
  pub fn current_identity(&self) -> Result<Option<Identity>> {
    let raw = self.load(keys::IDENTITY)?;
    Ok(raw.filter(|token| !token.is_empty()).map(Identity::from))
  }

  /// Return the current identity, creating one (with a zero balance) if none
  /// exists. Safe to call before every operation.
  pub fn ensure_identity(&self, entropy: &mut impl Entropy) -> Result<Identity> {
    match self.current_identity()? {
      Some(identity) => Ok(identity),
      None => self.start_fresh(entropy),
    }
  }

  /// Replace the identity with a fresh one and zero the balance. Records
  /// written under the previous identity stay in storage.
  pub fn login(&self, entropy: &mut impl Entropy) -> Result<Identity> {
    if let Some(previous) = self.current_identity()? {
      debug!(previous = %previous, "replacing identity on login");
    }
    self.start_fresh(entropy)
  }

  /// Forget the identity, subscription and balance. Records are kept.
  pub fn logout(&self) -> Result<()> {
    for key in [keys::IDENTITY, keys::SUBSCRIBED, keys::POINTS] {
      self.store.remove(key).map_err(Error::storage)?;
    }
    info!("logged out");
    Ok(())
  }

  fn start_fresh(&self, entropy: &mut impl Entropy) -> Result<Identity> {
    let identity = Identity::generate(entropy);
    self.save(keys::IDENTITY, identity.as_str())?;
    self.save(keys::POINTS, "0")?;
    info!(uid = %identity, "generated identity");
    Ok(identity)
  }

  // ── Subscription ──────────────────────────────────────────────────────────

  pub fn is_subscribed(&self) -> Result<bool> {
    Ok(self.load(keys::SUBSCRIBED)?.as_deref() == Some(SUBSCRIBED))
  }

  /// Turn the subscription on for the current (or a new) identity. No
  /// payment is taken.
  pub fn activate_subscription(&self, entropy: &mut impl Entropy) -> Result<Identity> {
    let identity = self.ensure_identity(entropy)?;
    self.save(keys::SUBSCRIBED, SUBSCRIBED)?;
    info!(uid = %identity, "subscription activated");
    Ok(identity)
  }

  // ── Points ────────────────────────────────────────────────────────────────

  pub fn points(&self) -> Result<i64> {
    Ok(self.load(keys::POINTS)?.as_deref().map_or(0, lenient_int))
  }

  /// Add `n` to the balance and return the new total.
  pub fn add_point(&self, n: i64) -> Result<i64> {
    let total = self.points()?.saturating_add(n);
    self.save(keys::POINTS, &total.to_string())?;
    debug!(total, "points awarded");
    Ok(total)
  }

  // ── Slot access ───────────────────────────────────────────────────────────

  fn load(&self, key: &str) -> Result<Option<String>> {
    self.store.load(key).map_err(Error::storage)
  }

  fn save(&self, key: &str, value: &str) -> Result<()> {
    self.store.save(key, value).map_err(Error::storage)
  }
}
