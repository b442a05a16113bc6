//! Slot keys in the persisted key-value store.
//!
//! Kept identical to the browser demo so an exported local-storage dump can
//! be loaded as-is.

pub const IDENTITY: &str = "nexora_uid";
pub const SUBSCRIBED: &str = "nexora_subscribed";
pub const POINTS: &str = "nexora_points";

pub const LOGS: &str = "nexora_logs";
pub const POSTS: &str = "nexora_posts";
pub const BOOKINGS: &str = "nexora_bookings";
pub const AID: &str = "nexora_aid";
pub const GOALS: &str = "nexora_goals";
