//! Integration tests for `SqliteStore` against an in-memory database.

use nexora_core::{
  Nexora,
  keys,
  kv::KeyValueStore,
  list::{End, ListStore},
  nexora::{AidForm, BookingForm, MetricForm, Outcome},
  record::{Booking, Goal, HealthLogEntry},
  session::Session,
};

use crate::{Error, SqliteStore};

fn store() -> SqliteStore { SqliteStore::open_in_memory().expect("in-memory store") }

// ─── Slots ───────────────────────────────────────────────────────────────────

#[test]
fn load_missing_returns_none() {
  let s = store();
  assert_eq!(s.load("nope").unwrap(), None);
}

#[test]
fn save_then_load() {
  let s = store();
  s.save(keys::POINTS, "3").unwrap();
  assert_eq!(s.load(keys::POINTS).unwrap().as_deref(), Some("3"));
}

#[test]
fn save_overwrites() {
  let s = store();
  s.save("k", "one").unwrap();
  s.save("k", "two").unwrap();
  assert_eq!(s.load("k").unwrap().as_deref(), Some("two"));
  assert_eq!(s.keys().unwrap(), ["k"]);
}

#[test]
fn remove_deletes_and_tolerates_absent() {
  let s = store();
  s.save("k", "v").unwrap();
  s.remove("k").unwrap();
  s.remove("k").unwrap();
  assert_eq!(s.load("k").unwrap(), None);
  assert!(s.keys().unwrap().is_empty());
}

#[test]
fn values_are_opaque_text() {
  let s = store();
  let odd = "  spaced\n'quoted' \"json\" ঢাকা ";
  s.save("k", odd).unwrap();
  assert_eq!(s.load("k").unwrap().as_deref(), Some(odd));
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[test]
fn slots_survive_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nexora.db");
  {
    let s = SqliteStore::open(&path).unwrap();
    s.save(keys::IDENTITY, "NX-0000BEEF").unwrap();
  }
  let s = SqliteStore::open(&path).unwrap();
  assert_eq!(s.load(keys::IDENTITY).unwrap().as_deref(), Some("NX-0000BEEF"));
}

#[test]
fn newer_schema_is_refused() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nexora.db");
  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
  }
  let err = SqliteStore::open(&path).err().expect("open should fail");
  assert!(matches!(err, Error::SchemaVersion { found: 99, supported: 1 }));
}

// ─── List stores over SQLite ─────────────────────────────────────────────────

fn goal(uid: &str, name: &str) -> Goal {
  Goal {
    uid:      uid.into(),
    name:     name.into(),
    target:   8,
    progress: 1,
    badge:    "Water Starter".into(),
  }
}

#[test]
fn demo_dump_with_nulls_survives_append() {
  let s = store();
  s.save(
    keys::LOGS,
    r#"[{"metric":"steps","value":null,"unit":"count","timestamp":1700000000000,"uid":"NX-BBBBBBBB"}]"#,
  )
  .unwrap();
  let logs = ListStore::<_, HealthLogEntry>::new(&s);
  assert_eq!(logs.load_all().unwrap()[0].value, 0.0);

  let mut app = Nexora::new(&s);
  app
    .log_metric(MetricForm { metric: "steps".into(), value: "10".into(), unit: "count".into() })
    .unwrap();

  let uids: Vec<String> = logs.load_all().unwrap().into_iter().map(|e| e.uid.to_string()).collect();
  assert_eq!(uids.len(), 2);
  assert_eq!(uids[0], "NX-BBBBBBBB");
}

#[test]
fn list_roundtrip_preserves_order() {
  let s = store();
  let goals = ListStore::new(&s);
  goals.push(goal("NX-A", "one")).unwrap();
  goals.push(goal("NX-A", "two")).unwrap();
  goals.append(goal("NX-A", "zero"), End::Front).unwrap();

  let names: Vec<String> = goals.load_all().unwrap().into_iter().map(|g: Goal| g.name).collect();
  assert_eq!(names, ["zero", "one", "two"]);
}

#[test]
fn list_slot_holds_a_json_array() {
  let s = store();
  ListStore::new(&s).push(goal("NX-A", "one")).unwrap();

  let raw = s.load(keys::GOALS).unwrap().unwrap();
  let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
  assert_eq!(json[0]["uid"], "NX-A");
  assert_eq!(json[0]["badge"], "Water Starter");
}

#[test]
fn malformed_list_slot_reads_empty() {
  let s = store();
  s.save(keys::LOGS, "[{\"broken\":").unwrap();
  let logs: Vec<HealthLogEntry> = ListStore::new(&s).load_all().unwrap();
  assert!(logs.is_empty());
}

#[test]
fn demo_dump_loads_unchanged() {
  let s = store();
  s.save(
    keys::BOOKINGS,
    r#"[{"uid":"NX-1","role":"doctor","slot":"Mon 10:00","status":"confirmed"}]"#,
  )
  .unwrap();
  let bookings: Vec<Booking> = ListStore::new(&s).load_all().unwrap();
  assert_eq!(bookings.len(), 1);
  assert_eq!(bookings[0].slot, "Mon 10:00");
}

// ─── Handlers end to end ─────────────────────────────────────────────────────

#[test]
fn handlers_persist_through_sqlite() {
  let s = store();
  let mut app = Nexora::new(&s);

  let uid = app.ensure_identity().unwrap();
  app
    .log_metric(MetricForm { metric: "steps".into(), value: "4200".into(), unit: "count".into() })
    .unwrap();
  app.add_goal().unwrap();

  assert_eq!(Session::new(&s).points().unwrap(), 1);
  assert_eq!(Session::new(&s).current_identity().unwrap(), Some(uid));
  assert_eq!(app.logs().unwrap().len(), 1);
  assert_eq!(app.goals().unwrap().len(), 1);
}

#[test]
fn booking_gate_and_aid_masking() {
  let s = store();
  let mut app = Nexora::new(&s);

  let refused = app
    .book_consultancy(BookingForm { role: "doctor".into(), slot: "Tue".into() })
    .unwrap();
  assert!(!refused.is_accepted());
  assert_eq!(s.load(keys::BOOKINGS).unwrap(), None);

  app.activate_subscription().unwrap();
  let booked = app
    .book_consultancy(BookingForm { role: "doctor".into(), slot: "Tue".into() })
    .unwrap();
  assert!(booked.is_accepted());

  let aid = app
    .request_aid(AidForm { nid: "ABCDEFGH".into(), amount: "250".into() })
    .unwrap();
  let Outcome::Accepted(view) = aid else { panic!("aid should be accepted") };
  assert_eq!(view.items()[0].nid_masked, "AB****GH");
  assert!(!s.load(keys::AID).unwrap().unwrap().contains("ABCDEFGH"));
}
