//! [`Nexora`]: the feature handlers behind every user action.
//!
//! Each write handler follows the same sequence: ensure an identity, turn the
//! form into a record, append it to its list, re-render that list, and raise a
//! flash. The re-rendered view is the handler's return value, so what the
//! caller displays always matches what was just stored.

use tracing::{debug, info, warn};

use crate::{
  Result,
  clock::{Clock, SystemClock},
  entropy::{Entropy, OsEntropy},
  error::Rejection,
  estimates::{self, BmiEstimate, ChartSeries, Period},
  flash::{Flash, FlashBoard, Level},
  identity::{self, Identity},
  kv::KeyValueStore,
  leaderboard::{self, Standing},
  list::{ListStore, Listing, Record},
  mask::mask_nid,
  parse::{lenient_float, lenient_int},
  record::{AidRequest, AidStatus, Booking, BookingStatus, CommunityPost, Goal, HealthLogEntry},
  session::Session,
};

// ─── Forms ───────────────────────────────────────────────────────────────────

/// Raw metric entry. `value` is parsed leniently; garbage reads as 0.
#[derive(Debug, Clone, Default)]
pub struct MetricForm {
  pub metric: String,
  pub value:  String,
  pub unit:   String,
}

#[derive(Debug, Clone, Default)]
pub struct PostForm {
  pub title: String,
  pub body:  String,
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
  pub role: String,
  pub slot: String,
}

/// Raw aid request. The national ID never leaves the handler unmasked.
#[derive(Debug, Clone, Default)]
pub struct AidForm {
  pub nid:    String,
  pub amount: String,
}

// ─── Results ─────────────────────────────────────────────────────────────────

/// Result of a handler that can refuse to act.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<V> {
  Accepted(V),
  /// Nothing was written; a flash explains why.
  Rejected(Rejection),
}

impl<V> Outcome<V> {
  pub fn is_accepted(&self) -> bool { matches!(self, Self::Accepted(_)) }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricLogged {
  pub entry:       HealthLogEntry,
  pub logs:        Listing<HealthLogEntry>,
  pub leaderboard: Vec<Standing>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
  pub identity:    Option<Identity>,
  pub points:      i64,
  pub chart:       ChartSeries,
  pub goals:       Listing<Goal>,
  pub leaderboard: Vec<Standing>,
}

// ─── Goal preset ─────────────────────────────────────────────────────────────

const GOAL_NAME: &str = "Hydration";
const GOAL_TARGET: u32 = 8;
const GOAL_BADGE: &str = "Water Starter";

// ─── Handlers ────────────────────────────────────────────────────────────────

/// All feature handlers over one key-value store.
pub struct Nexora<S, E = OsEntropy, C = SystemClock> {
  store:   S,
  entropy: E,
  clock:   C,
  flashes: FlashBoard,
}

impl<S: KeyValueStore> Nexora<S> {
  /// Handlers over `store` with OS randomness and wall-clock time.
  pub fn new(store: S) -> Self { Self::with_sources(store, OsEntropy, SystemClock) }
}

impl<S, E, C> Nexora<S, E, C>
where
  S: KeyValueStore,
  E: Entropy,
  C: Clock,
{
  pub fn with_sources(store: S, entropy: E, clock: C) -> Self {
    Self { store, entropy, clock, flashes: FlashBoard::new() }
  }

  pub fn store(&self) -> &S { &self.store }

  pub fn flashes(&self) -> &FlashBoard { &self.flashes }

  /// Take every flash that is still visible, leaving the board empty.
  pub fn take_flashes(&mut self) -> Vec<Flash> {
    let now = self.clock.now();
    self.flashes.drain(now)
  }

  fn flash(&mut self, level: Level, message: &str) {
    let now = self.clock.now();
    self.flashes.sweep(now);
    self.flashes.raise(level, message, now);
  }

  fn list<R: Record>(&self) -> ListStore<'_, S, R> { ListStore::new(&self.store) }

  // ── Session ───────────────────────────────────────────────────────────────

  pub fn current_identity(&self) -> Result<Option<Identity>> {
    Session::new(&self.store).current_identity()
  }

  pub fn ensure_identity(&mut self) -> Result<Identity> {
    Session::new(&self.store).ensure_identity(&mut self.entropy)
  }

  pub fn login(&mut self) -> Result<Identity> {
    let identity = Session::new(&self.store).login(&mut self.entropy)?;
    self.flash(Level::Success, "Anonymous ID generated.");
    Ok(identity)
  }

  pub fn logout(&mut self) -> Result<()> {
    Session::new(&self.store).logout()?;
    self.flash(Level::Info, "Logged out.");
    Ok(())
  }

  pub fn is_subscribed(&self) -> Result<bool> { Session::new(&self.store).is_subscribed() }

  pub fn activate_subscription(&mut self) -> Result<Identity> {
    let identity = Session::new(&self.store).activate_subscription(&mut self.entropy)?;
    self.flash(Level::Success, "Subscription activated (100 BDT/month, dummy).");
    Ok(identity)
  }

  pub fn points(&self) -> Result<i64> { Session::new(&self.store).points() }

  // ── Health logs ───────────────────────────────────────────────────────────

  /// Record a metric reading and award a point.
  pub fn log_metric(&mut self, form: MetricForm) -> Result<MetricLogged> {
    let uid = self.ensure_identity()?;
    let entry = HealthLogEntry {
      uid,
      metric: form.metric,
      value: lenient_float(&form.value),
      unit: form.unit,
      recorded_at: self.clock.now(),
    };
    self.list().push(entry.clone())?;
    Session::new(&self.store).add_point(1)?;
    debug!(metric = %entry.metric, value = entry.value, "metric logged");

    self.flash(Level::Success, "Entry recorded (dummy). Hash integrity simulated.");
    Ok(MetricLogged { logs: self.logs()?, leaderboard: self.leaderboard()?, entry })
  }

  pub fn logs(&self) -> Result<Listing<HealthLogEntry>> { self.owned() }

  // ── Insights ──────────────────────────────────────────────────────────────

  pub fn estimate_bmi(&mut self, file_name: Option<&str>) -> BmiEstimate {
    let estimate = estimates::bmi_from_file_name(file_name);
    self.flash(Level::Info, "Dummy BMI estimated from face filename.");
    estimate
  }

  /// Identity, the fixed weekly sample, own goals and the leaderboard.
  pub fn dashboard(&self) -> Result<Dashboard> {
    Ok(Dashboard {
      identity:    self.current_identity()?,
      points:      self.points()?,
      chart:       ChartSeries::weekly_sample(),
      goals:       self.goals()?,
      leaderboard: self.leaderboard()?,
    })
  }

  /// A fresh random report series for `metric` at `period`.
  pub fn update_chart(&mut self, metric: &str, period: Period) -> ChartSeries {
    ChartSeries::random(metric, period, &mut self.entropy)
  }

  // ── Goals & leaderboard ───────────────────────────────────────────────────

  /// Add the preset hydration goal with random starting progress.
  pub fn add_goal(&mut self) -> Result<Listing<Goal>> {
    let uid = self.ensure_identity()?;
    let goal = Goal {
      uid,
      name: GOAL_NAME.to_owned(),
      target: GOAL_TARGET,
      progress: self.entropy.below(GOAL_TARGET),
      badge: GOAL_BADGE.to_owned(),
    };
    self.list().push(goal)?;

    self.flash(Level::Success, "Goal added (dummy).");
    self.goals()
  }

  pub fn goals(&self) -> Result<Listing<Goal>> { self.owned() }

  /// Live balance ranked against the decoys.
  pub fn leaderboard(&self) -> Result<Vec<Standing>> {
    let uid = self.current_identity()?;
    let uid = uid.as_ref().map_or(identity::ANONYMOUS, Identity::as_str);
    Ok(leaderboard::project(uid, self.points()?))
  }

  // ── Community ─────────────────────────────────────────────────────────────

  pub fn post_community(&mut self, form: PostForm) -> Result<Listing<CommunityPost>> {
    let uid = self.ensure_identity()?;
    let post = CommunityPost {
      uid,
      title: form.title,
      body: form.body,
      posted_at: self.clock.now(),
    };
    self.list().push(post)?;

    self.flash(Level::Success, "Posted anonymously.");
    self.posts()
  }

  /// The public feed: every identity's posts, newest first.
  pub fn posts(&self) -> Result<Listing<CommunityPost>> {
    self.list::<CommunityPost>().render_filtered(|_| true)
  }

  // ── Consultancy ───────────────────────────────────────────────────────────

  /// Book a consultation. Refused without an active subscription.
  pub fn book_consultancy(&mut self, form: BookingForm) -> Result<Outcome<Listing<Booking>>> {
    let uid = self.ensure_identity()?;
    if !self.is_subscribed()? {
      warn!(uid = %uid, "booking refused without subscription");
      self.flash(Level::Warning, "Live consultancy requires subscription (dummy).");
      return Ok(Outcome::Rejected(Rejection::SubscriptionRequired));
    }

    let booking = Booking {
      uid,
      role: form.role,
      slot: form.slot,
      status: BookingStatus::Confirmed,
    };
    self.list().push(booking)?;

    self.flash(Level::Success, "Booking confirmed (dummy).");
    Ok(Outcome::Accepted(self.bookings()?))
  }

  pub fn bookings(&self) -> Result<Listing<Booking>> { self.owned() }

  // ── Emergency aid ─────────────────────────────────────────────────────────

  /// File an aid request, storing only the masked national ID.
  pub fn request_aid(&mut self, form: AidForm) -> Result<Outcome<Listing<AidRequest>>> {
    let uid = self.ensure_identity()?;
    let nid = form.nid.trim();
    let Some(nid_masked) = mask_nid(nid) else {
      self.flash(Level::Danger, "Invalid NID length");
      return Ok(Outcome::Rejected(Rejection::NidTooShort { len: nid.chars().count() }));
    };

    let request = AidRequest {
      uid,
      nid_masked,
      amount: lenient_int(&form.amount),
      status: AidStatus::UnderReview,
    };
    info!(uid = %request.uid, amount = request.amount, "aid request filed");
    self.list().push(request)?;

    self.flash(Level::Success, "Emergency aid request submitted (dummy).");
    Ok(Outcome::Accepted(self.aid_requests()?))
  }

  pub fn aid_requests(&self) -> Result<Listing<AidRequest>> { self.owned() }

  // ── Quiz & chat ───────────────────────────────────────────────────────────

  /// Award a point for a quiz and return its (fixed) result. No identity is
  /// required.
  pub fn submit_quiz(&mut self) -> Result<&'static str> {
    self.flash(Level::Info, "Quiz submitted. Keep hydrating regularly!");
    Session::new(&self.store).add_point(1)?;
    Ok(estimates::QUIZ_RESULT)
  }

  pub fn chat(&self, prompt: &str) -> &'static str { estimates::chat_reply(prompt) }

  // ── Views ─────────────────────────────────────────────────────────────────

  fn owned<R: Record>(&self) -> Result<Listing<R>> {
    let identity = self.current_identity()?;
    self.list::<R>().owned_by(identity.as_ref())
  }
}
