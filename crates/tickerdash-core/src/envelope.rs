use serde::Serialize;

use crate::{IngestionError, Snapshot, SnapshotOrigin, Ticker, UtcDateTime};

/// What the presentation layer shows when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Show the error and no data.
    #[default]
    Propagate,
    /// Show the error alongside the labelled sample dataset.
    SampleData,
}

/// Presentation-facing report for one fetch.
///
/// `success` is true only for live data; a sample fallback always reports
/// `success: false`, `origin: sample`, and carries the fetch error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchEnvelope {
    pub success: bool,
    pub data: Vec<Ticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<SnapshotOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: UtcDateTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl FetchEnvelope {
    pub fn success(snapshot: Snapshot) -> Self {
        let origin = snapshot.origin();
        let timestamp = snapshot.fetched_at();
        Self {
            success: true,
            data: snapshot.into_tickers(),
            origin: Some(origin),
            error: None,
            timestamp,
            warnings: Vec::new(),
        }
    }

    pub fn failure(error: &IngestionError) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            origin: None,
            error: Some(error.message().to_owned()),
            timestamp: UtcDateTime::now(),
            warnings: Vec::new(),
        }
    }

    /// Apply `policy` to a fetch outcome.
    pub fn resolve(result: Result<Snapshot, IngestionError>, policy: FallbackPolicy) -> Self {
        match (result, policy) {
            (Ok(snapshot), _) => Self::success(snapshot),
            (Err(error), FallbackPolicy::Propagate) => Self::failure(&error),
            (Err(error), FallbackPolicy::SampleData) => {
                let sample = Snapshot::sample();
                let mut envelope = Self::failure(&error);
                envelope.origin = Some(sample.origin());
                envelope.timestamp = sample.fetched_at();
                envelope.data = sample.into_tickers();
                envelope.push_warning(format!(
                    "live ticker data unavailable ({}); showing sample data",
                    error.kind()
                ));
                envelope
            }
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn is_sample(&self) -> bool {
        self.origin == Some(SnapshotOrigin::Sample)
    }
}
