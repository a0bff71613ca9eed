//! subfolio-core
//!
//! Stateless spend analytics over subscription snapshots.
//! Depends on subfolio-domain. No I/O, no clock reads outside [`time`],
//! no shared state between calls.

pub mod billing;
pub mod pipeline;
pub mod summary;
pub mod time;
pub mod upcoming;

pub use billing::*;
pub use pipeline::*;
pub use summary::*;
pub use time::*;
pub use upcoming::*;
