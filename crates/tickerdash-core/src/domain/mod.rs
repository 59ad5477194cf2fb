//! # Domain Models
//!
//! Canonical domain types for tickerdash.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Validated price/change/volume record for one asset |
//! | [`Snapshot`] | Ordered tickers from one fetch, with timestamp and origin |
//! | [`SnapshotOrigin`] | Live feed or labelled sample data |
//! | [`Symbol`] | Non-empty, case-preserving exchange symbol |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Every type validates its invariants at construction; there is no
//! placeholder or partially built record.

mod snapshot;
mod symbol;
mod ticker;
mod timestamp;

pub use snapshot::{Snapshot, SnapshotOrigin};
pub use symbol::Symbol;
pub use ticker::Ticker;
pub use timestamp::UtcDateTime;
