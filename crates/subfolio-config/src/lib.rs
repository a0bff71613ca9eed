//! subfolio-config
//!
//! Viewer preferences and their JSON persistence. Subscription data itself
//! is never stored here; only how the viewer wants it presented.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::PreferencesManager;
pub use model::{DefaultView, Preferences, Theme, TimeFormat};
