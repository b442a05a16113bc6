//! Leaderboard projection: the live balance ranked against fixed decoys.

use std::fmt;

use serde::Serialize;

/// Decoy entries shown alongside the current identity.
pub const DECOYS: [(&str, i64); 3] = [("NX-A1B2C3D4", 14), ("NX-FF12EE34", 12), ("NX-77AA88BB", 9)];

/// One ranked row. `rank` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
  pub rank:   usize,
  pub uid:    String,
  pub points: i64,
}

impl fmt::Display for Standing {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:<3} {:<12} {} pts", self.rank, self.uid, self.points)
  }
}

/// Rank `(uid, points)` entries by descending points.
///
/// The sort is stable: entries with equal points keep their input order.
pub fn rank<I, U>(entries: I) -> Vec<Standing>
where
  I: IntoIterator<Item = (U, i64)>,
  U: Into<String>,
{
  let mut rows: Vec<(String, i64)> =
    entries.into_iter().map(|(uid, points)| (uid.into(), points)).collect();
  rows.sort_by(|a, b| b.1.cmp(&a.1));
  rows
    .into_iter()
    .enumerate()
    .map(|(i, (uid, points))| Standing { rank: i + 1, uid, points })
    .collect()
}

/// The current identity (listed first, so it wins ties) followed by
/// [`DECOYS`], ranked.
pub fn project(uid: &str, points: i64) -> Vec<Standing> {
  let decoys = DECOYS.map(|(uid, points)| (uid.to_owned(), points));
  rank(std::iter::once((uid.to_owned(), points)).chain(decoys))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn order(rows: &[Standing]) -> Vec<(&str, i64)> {
    rows.iter().map(|r| (r.uid.as_str(), r.points)).collect()
  }

  #[test]
  fn zero_points_ranks_last() {
    let rows = project("NX-ME", 0);
    assert_eq!(
      order(&rows),
      [("NX-A1B2C3D4", 14), ("NX-FF12EE34", 12), ("NX-77AA88BB", 9), ("NX-ME", 0)]
    );
    assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), [1, 2, 3, 4]);
  }

  #[test]
  fn high_score_ranks_first() {
    let rows = project("NX-ME", 20);
    assert_eq!(rows[0].uid, "NX-ME");
    assert_eq!(rows[0].rank, 1);
  }

  #[test]
  fn middle_score_slots_between_decoys() {
    let rows = project("NX-ME", 10);
    assert_eq!(rows[2].uid, "NX-ME");
    assert_eq!(rows[3].uid, "NX-77AA88BB");
  }

  #[test]
  fn ties_keep_input_order() {
    let rows = project("NX-ME", 12);
    assert_eq!(
      order(&rows),
      [("NX-A1B2C3D4", 14), ("NX-ME", 12), ("NX-FF12EE34", 12), ("NX-77AA88BB", 9)]
    );

    let rows = rank([("b", 1), ("a", 1), ("c", 1)]);
    assert_eq!(order(&rows), [("b", 1), ("a", 1), ("c", 1)]);
  }

  #[test]
  fn points_strictly_non_increasing() {
    for points in [-3, 0, 9, 13, 14, 100] {
      let rows = project("NX-ME", points);
      assert!(rows.windows(2).all(|w| w[0].points >= w[1].points));
    }
  }
}
