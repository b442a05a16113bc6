//! Placeholder "insights": BMI from a file name, report series, quiz result
//! and the keyword chat reply.
//!
//! None of this is real analysis. The outputs only have to match what the
//! demo has always shown.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entropy::Entropy;

// ─── BMI ─────────────────────────────────────────────────────────────────────

/// File name used when no photo was supplied.
pub const DEFAULT_FACE: &str = "face.png";

const BMI_BASE: u32 = 22;
const BMI_CATEGORIES: [&str; 3] = ["normal", "overweight", "underweight"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BmiEstimate {
  pub value:    u32,
  pub category: &'static str,
}

impl fmt::Display for BmiEstimate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "BMI estimate (dummy): {} ({})", self.value, self.category)
  }
}

/// Derive a "BMI" from the UTF-16 code units of a photo's file name.
pub fn bmi_from_file_name(file_name: Option<&str>) -> BmiEstimate {
  let name = file_name.unwrap_or(DEFAULT_FACE);
  let sum: u64 = name.encode_utf16().map(u64::from).sum();
  let bucket = (sum % 3) as u32;
  BmiEstimate {
    value:    BMI_BASE + bucket,
    category: BMI_CATEGORIES[bucket as usize],
  }
}

// ─── Report series ───────────────────────────────────────────────────────────

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKLY_STEPS: [u32; 7] = [2000, 3500, 4000, 2500, 5000, 3000, 4500];

/// Report granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
  /// 12 points, 7:00 through 18:00.
  Hourly,
  /// 7 points, Mon through Sun.
  #[default]
  Daily,
}

impl Period {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Hourly => "hourly",
      Self::Daily => "daily",
    }
  }

  fn labels(self) -> Vec<String> {
    match self {
      Self::Hourly => (7..19).map(|h| format!("{h}:00")).collect(),
      Self::Daily => WEEKDAYS.iter().map(|d| d.to_string()).collect(),
    }
  }
}

impl fmt::Display for Period {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A labelled line series, ready for whatever draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
  pub label:  String,
  pub labels: Vec<String>,
  pub points: Vec<u32>,
}

impl ChartSeries {
  /// The fixed sample shown before any report is requested.
  pub fn weekly_sample() -> Self {
    Self {
      label:  "steps (daily)".to_owned(),
      labels: Period::Daily.labels(),
      points: WEEKLY_STEPS.to_vec(),
    }
  }

  /// A random series in `[2000, 5000]` for `metric` at `period`.
  pub fn random(metric: &str, period: Period, entropy: &mut impl Entropy) -> Self {
    let labels = period.labels();
    let points = labels
      .iter()
      .map(|_| (2000.0 + entropy.unit() * 3000.0).round() as u32)
      .collect();
    Self { label: format!("{metric} ({period})"), labels, points }
  }
}

// ─── Quiz ────────────────────────────────────────────────────────────────────

pub const QUIZ_RESULT: &str =
  "Result (dummy): You're building healthy hydration habits — keep going!";

// ─── Chat ────────────────────────────────────────────────────────────────────

const CHAT_DEFAULT: &str =
  "I’m here to help. Ask about routines, gentle movement, sleep, hydration, or goal setting.";

/// Checked in order; the first rule with a matching keyword answers.
const CHAT_RULES: [(&[&str], &str); 3] = [
  (
    &["motivation"],
    "Small, consistent steps matter. Hydrate, walk 10 minutes, and celebrate each win.",
  ),
  (
    &["diet"],
    "Aim for balanced meals: fiber, lean protein, healthy fats; limit refined sugar.",
  ),
  (
    &["pcos", "pcod"],
    "Focus on routine, stress management, gentle movement, and tracking symptoms respectfully.",
  ),
];

/// Keyword-matched canned reply; case-insensitive substring match.
pub fn chat_reply(prompt: &str) -> &'static str {
  let prompt = prompt.to_lowercase();
  CHAT_RULES
    .iter()
    .find(|(keywords, _)| keywords.iter().any(|k| prompt.contains(k)))
    .map_or(CHAT_DEFAULT, |(_, reply)| *reply)
}
