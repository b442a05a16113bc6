//! Plain-text rendering of views and flashes.

use std::{
  fmt::Display,
  io::{self, Write},
};

use nexora_core::{
  estimates::ChartSeries,
  flash::Flash,
  leaderboard::Standing,
  list::Listing,
  nexora::Dashboard,
};

/// Widest chart bar, in characters.
const BAR_WIDTH: u32 = 40;

/// One record per line, or the list's empty-state message.
pub fn listing<R: Display>(out: &mut impl Write, view: &Listing<R>) -> io::Result<()> {
  match view {
    Listing::Items(items) => {
      for item in items {
        writeln!(out, "{item}")?;
      }
      Ok(())
    }
    Listing::Empty(message) => writeln!(out, "{message}"),
  }
}

pub fn leaderboard(out: &mut impl Write, rows: &[Standing]) -> io::Result<()> {
  writeln!(out, "Leaderboard")?;
  for row in rows {
    writeln!(out, "  {row}")?;
  }
  Ok(())
}

/// Horizontal bar chart, bars scaled to the largest point.
pub fn chart(out: &mut impl Write, series: &ChartSeries) -> io::Result<()> {
  writeln!(out, "{}", series.label)?;
  let max = series.points.iter().copied().max().unwrap_or(0).max(1);
  for (label, &value) in series.labels.iter().zip(&series.points) {
    let len = (u64::from(value) * u64::from(BAR_WIDTH) / u64::from(max)) as usize;
    writeln!(out, "  {label:>5} {:<width$} {value}", "#".repeat(len), width = BAR_WIDTH as usize)?;
  }
  Ok(())
}

pub fn dashboard(out: &mut impl Write, dash: &Dashboard) -> io::Result<()> {
  match &dash.identity {
    Some(uid) => writeln!(out, "ID: {uid}  ({} pts)", dash.points)?,
    None => writeln!(out, "Not logged in. Run `nexora login` to get an anonymous ID.")?,
  }
  writeln!(out)?;
  chart(out, &dash.chart)?;
  writeln!(out)?;
  writeln!(out, "Goals")?;
  listing(out, &dash.goals)?;
  writeln!(out)?;
  leaderboard(out, &dash.leaderboard)
}

pub fn flash(out: &mut impl Write, flash: &Flash) -> io::Result<()> { writeln!(out, "{flash}") }

#[cfg(test)]
mod tests {
  use nexora_core::{leaderboard::project, record::Goal};

  use super::*;

  fn text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn empty_listing_prints_message() {
    let view: Listing<Goal> = Listing::Empty("No goals yet. Set simple, achievable steps.");
    assert_eq!(
      text(|o| listing(o, &view)),
      "No goals yet. Set simple, achievable steps.\n"
    );
  }

  #[test]
  fn leaderboard_rows_are_ranked() {
    let out = text(|o| leaderboard(o, &project("NX-ME", 13)));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].contains("#1") && lines[1].contains("NX-A1B2C3D4"));
    assert!(lines[2].contains("#2") && lines[2].contains("NX-ME"));
  }

  #[test]
  fn chart_scales_to_largest_point() {
    let out = text(|o| chart(o, &ChartSeries::weekly_sample()));
    let fri = out.lines().find(|l| l.trim_start().starts_with("Fri")).unwrap();
    assert_eq!(fri.matches('#').count(), BAR_WIDTH as usize);
    let mon = out.lines().find(|l| l.trim_start().starts_with("Mon")).unwrap();
    assert_eq!(mon.matches('#').count(), 16);
  }
}
