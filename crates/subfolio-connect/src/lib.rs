//! subfolio-connect
//!
//! Boundary adapter between backend-shaped rows (snake_case fields, string
//! dates) and the domain model. Rows arrive already fetched; nothing here
//! talks to the network. Malformed values are mapped with documented
//! fallbacks or skipped per record, and every fallback is logged so data
//! quality issues stay visible.

pub mod error;
pub mod record;

pub use error::RecordError;
pub use record::{map_subscriptions, PreferenceRecord, SubscriptionRecord};
