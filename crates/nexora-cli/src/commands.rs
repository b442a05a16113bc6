//! Subcommands and their dispatch onto [`Nexora`] handlers.

use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use nexora_core::{
  Nexora,
  clock::Clock,
  entropy::Entropy,
  estimates::Period,
  kv::KeyValueStore,
  nexora::{AidForm, BookingForm, MetricForm, Outcome, PostForm},
};
use tracing::debug;

use crate::render;

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Generate a fresh anonymous ID (discards the current one).
  Login,
  /// Forget the ID, subscription and points. Records are kept.
  Logout,
  /// Show the current ID, subscription and points.
  Whoami,
  /// Activate the (dummy) premium subscription.
  Subscribe,

  /// Record a health metric; earns one point.
  Log {
    #[arg(long)]
    metric: String,
    #[arg(long, default_value = "")]
    value:  String,
    #[arg(long, default_value = "")]
    unit:   String,
  },
  /// List your recorded metrics.
  Logs,
  /// Estimate BMI from a face photo (dummy: uses only the file name).
  Bmi {
    #[arg(long, value_name = "FILE")]
    face: Option<PathBuf>,
  },
  /// Your ID, the sample weekly chart, goals and the leaderboard.
  Dashboard,
  /// A report series for a metric.
  Report {
    #[arg(long, default_value = "steps")]
    metric: String,
    #[arg(long, value_enum, default_value_t = PeriodArg::Daily)]
    period: PeriodArg,
  },

  /// Add the hydration goal.
  Goal,
  /// List your goals.
  Goals,
  /// Rank your points against the community.
  Leaderboard,

  /// Post anonymously to the community feed.
  Post {
    #[arg(long)]
    title: String,
    #[arg(long)]
    body:  String,
  },
  /// Show the community feed.
  Posts,

  /// Book a live consultation (requires a subscription).
  Book {
    #[arg(long)]
    role: String,
    #[arg(long)]
    slot: String,
  },
  /// List your bookings.
  Bookings,

  /// Request emergency aid. Only a masked national ID is stored.
  Aid {
    #[arg(long)]
    nid:    String,
    #[arg(long, default_value = "0")]
    amount: String,
  },
  /// List your aid requests.
  AidRequests,

  /// Submit the hydration quiz; earns one point.
  Quiz,
  /// Ask the assistant.
  Chat {
    #[arg(trailing_var_arg = true)]
    prompt: Vec<String>,
  },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodArg {
  Hourly,
  Daily,
}

impl From<PeriodArg> for Period {
  fn from(p: PeriodArg) -> Self {
    match p {
      PeriodArg::Hourly => Period::Hourly,
      PeriodArg::Daily => Period::Daily,
    }
  }
}

/// Run one command, writing its view to `out`.
pub fn run<S, E, C>(app: &mut Nexora<S, E, C>, command: Command, out: &mut impl Write) -> Result<()>
where
  S: KeyValueStore,
  E: Entropy,
  C: Clock,
{
  debug!(?command, "dispatching");
  match command {
    Command::Login => {
      let uid = app.login()?;
      writeln!(out, "Your unique ID: {uid}")?;
    }
    Command::Logout => app.logout()?,
    Command::Whoami => {
      match app.current_identity()? {
        Some(uid) => writeln!(out, "ID:           {uid}")?,
        None => writeln!(out, "Not logged in.")?,
      }
      let subscribed = if app.is_subscribed()? { "active" } else { "none" };
      writeln!(out, "Subscription: {subscribed}")?;
      writeln!(out, "Points:       {}", app.points()?)?;
    }
    Command::Subscribe => {
      app.activate_subscription()?;
      writeln!(out, "Subscription activated (dummy). Premium access granted.")?;
    }

    Command::Log { metric, value, unit } => {
      let logged = app.log_metric(MetricForm { metric, value, unit })?;
      render::listing(out, &logged.logs)?;
      writeln!(out)?;
      render::leaderboard(out, &logged.leaderboard)?;
    }
    Command::Logs => render::listing(out, &app.logs()?)?,
    Command::Bmi { face } => {
      let name = face
        .as_deref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned());
      let estimate = app.estimate_bmi(name.as_deref());
      writeln!(out, "{estimate}")?;
    }
    Command::Dashboard => render::dashboard(out, &app.dashboard()?)?,
    Command::Report { metric, period } => {
      let series = app.update_chart(&metric, period.into());
      render::chart(out, &series)?;
    }

    Command::Goal => render::listing(out, &app.add_goal()?)?,
    Command::Goals => render::listing(out, &app.goals()?)?,
    Command::Leaderboard => render::leaderboard(out, &app.leaderboard()?)?,

    Command::Post { title, body } => {
      render::listing(out, &app.post_community(PostForm { title, body })?)?
    }
    Command::Posts => render::listing(out, &app.posts()?)?,

    Command::Book { role, slot } => match app.book_consultancy(BookingForm { role, slot })? {
      Outcome::Accepted(view) => {
        writeln!(out, "Dummy booking confirmed.")?;
        render::listing(out, &view)?;
      }
      Outcome::Rejected(reason) => debug!(%reason, "booking rejected"),
    },
    Command::Bookings => render::listing(out, &app.bookings()?)?,

    Command::Aid { nid, amount } => match app.request_aid(AidForm { nid, amount })? {
      Outcome::Accepted(view) => {
        writeln!(out, "Request submitted with strict privacy (dummy).")?;
        render::listing(out, &view)?;
      }
      Outcome::Rejected(reason) => debug!(%reason, "aid request rejected"),
    },
    Command::AidRequests => render::listing(out, &app.aid_requests()?)?,

    Command::Quiz => writeln!(out, "{}", app.submit_quiz()?)?,
    Command::Chat { prompt } => writeln!(out, "{}", app.chat(&prompt.join(" ")))?,
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use nexora_core::{
    clock::FixedClock,
    entropy::ScriptedEntropy,
    flash::Level,
    kv::MemoryStore,
  };

  use super::*;

  type App = Nexora<MemoryStore, ScriptedEntropy, FixedClock>;

  fn app() -> App {
    Nexora::with_sources(
      MemoryStore::new(),
      ScriptedEntropy::new(vec![0xC0FF_EE00, 0x0000_0001]),
      FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
    )
  }

  fn exec(app: &mut App, command: Command) -> String {
    let mut out = Vec::new();
    run(app, command, &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn login_prints_id() {
    let mut app = app();
    let out = exec(&mut app, Command::Login);
    assert_eq!(out, "Your unique ID: NX-C0FFEE00\n");
  }

  #[test]
  fn booking_without_subscription_prints_nothing_and_warns() {
    let mut app = app();
    let out = exec(&mut app, Command::Book { role: "doctor".into(), slot: "Mon".into() });
    assert!(out.is_empty());

    let flashes = app.take_flashes();
    assert_eq!(flashes.len(), 1);
    assert_eq!(flashes[0].level, Level::Warning);
  }

  #[test]
  fn aid_prints_masked_id() {
    let mut app = app();
    let out = exec(&mut app, Command::Aid { nid: "123456789".into(), amount: "500".into() });
    assert!(out.contains("12*****89  500 BDT  under_review"));
    assert!(!out.contains("123456789"));
  }

  #[test]
  fn empty_lists_print_their_message() {
    let mut app = app();
    exec(&mut app, Command::Login);
    assert_eq!(exec(&mut app, Command::Bookings), "No bookings yet.\n");
    assert_eq!(exec(&mut app, Command::Posts), "No posts yet.\n");
  }

  #[test]
  fn bmi_uses_file_name_only() {
    let mut app = app();
    let out = exec(&mut app, Command::Bmi { face: Some(PathBuf::from("/photos/c")) });
    assert_eq!(out, "BMI estimate (dummy): 22 (normal)\n");
  }

  #[test]
  fn chat_joins_words() {
    let mut app = app();
    let out = exec(&mut app, Command::Chat { prompt: vec!["my".into(), "Diet".into()] });
    assert!(out.starts_with("Aim for balanced meals"));
  }

  #[test]
  fn whoami_reflects_points() {
    let mut app = app();
    exec(&mut app, Command::Quiz);
    let out = exec(&mut app, Command::Whoami);
    assert!(out.contains("Not logged in."));
    assert!(out.contains("Points:       1"));
  }

  #[test]
  fn hourly_report_has_twelve_rows() {
    let mut app = app();
    let out = exec(&mut app, Command::Report { metric: "sleep".into(), period: PeriodArg::Hourly });
    assert!(out.starts_with("sleep (hourly)\n"));
    assert_eq!(out.lines().count(), 13);
  }
}
