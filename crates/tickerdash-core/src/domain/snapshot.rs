use serde::Serialize;

use crate::{Ticker, UtcDateTime};

/// Where the tickers in a [`Snapshot`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotOrigin {
    /// Normalized from the upstream exchange feed.
    Live,
    /// Fixed sample dataset; never fetched.
    Sample,
}

/// Immutable result of one successful ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    tickers: Vec<Ticker>,
    fetched_at: UtcDateTime,
    origin: SnapshotOrigin,
}

impl Snapshot {
    pub fn live(tickers: Vec<Ticker>, fetched_at: UtcDateTime) -> Self {
        Self {
            tickers,
            fetched_at,
            origin: SnapshotOrigin::Live,
        }
    }

    /// Snapshot of the labelled sample dataset, stamped now.
    pub fn sample() -> Self {
        Self {
            tickers: crate::sample::sample_tickers(),
            fetched_at: UtcDateTime::now(),
            origin: SnapshotOrigin::Sample,
        }
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    pub fn into_tickers(self) -> Vec<Ticker> {
        self.tickers
    }

    pub const fn fetched_at(&self) -> UtcDateTime {
        self.fetched_at
    }

    pub const fn origin(&self) -> SnapshotOrigin {
        self.origin
    }

    pub const fn is_sample(&self) -> bool {
        matches!(self.origin, SnapshotOrigin::Sample)
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}
