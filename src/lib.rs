#![doc(test(attr(deny(warnings))))]

//! Subfolio derives spend analytics from subscription snapshots: monthly
//! normalization, category aggregation, upcoming-payment selection, and the
//! filter/sort pipeline behind list views.

pub mod currency;
pub mod errors;
pub mod utils;

pub use subfolio_config as config;
pub use subfolio_connect as connect;
pub use subfolio_core as core;
pub use subfolio_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Subfolio tracing initialized.");
    });
}
