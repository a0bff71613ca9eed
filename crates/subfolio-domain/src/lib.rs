//! subfolio-domain
//!
//! Pure domain models (Subscription, BillingCycle, Category, etc.).
//! No I/O, no logging, no persistence. Only data types and core enums.

pub mod category;
pub mod common;
pub mod subscription;

pub use category::*;
pub use common::*;
pub use subscription::*;
