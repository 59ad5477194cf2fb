//! Ticker ingestion pipeline: request, shape check, per-record normalization.
//!
//! ```rust,ignore
//! use tickerdash_core::{filter_tickers, TickerIngestion};
//!
//! let ingestion = TickerIngestion::default();
//! match ingestion.fetch().await {
//!     Ok(snapshot) => {
//!         for ticker in filter_tickers(snapshot.tickers(), "btc") {
//!             println!("{} {:.2} {:+.2}%", ticker.symbol(), ticker.price(), ticker.change_percent());
//!         }
//!     }
//!     Err(error) => eprintln!("ticker fetch failed: {error}"),
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::envelope::{FallbackPolicy, FetchEnvelope};
use crate::feed::{decode_feed, normalize_record};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{IngestionConfig, IngestionError, Snapshot, Ticker, UtcDateTime};

/// Fetches and normalizes one ticker snapshot per call.
///
/// Holds no state between calls; clones share only the transport.
#[derive(Clone)]
pub struct TickerIngestion {
    http_client: Arc<dyn HttpClient>,
    config: IngestionConfig,
}

impl Default for TickerIngestion {
    fn default() -> Self {
        Self::new(IngestionConfig::default())
    }
}

impl TickerIngestion {
    /// Ingestion over a reqwest transport.
    pub fn new(config: IngestionConfig) -> Self {
        Self {
            http_client: Arc::new(ReqwestHttpClient::new(config.user_agent())),
            config,
        }
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: IngestionConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Issue one GET against the ticker endpoint and normalize the response.
    ///
    /// No retry and no internal timeout. Every failure is returned; nothing is
    /// substituted for missing data.
    pub async fn fetch(&self) -> Result<Snapshot, IngestionError> {
        let started = UtcDateTime::now();
        let result = self.fetch_uninstrumented().await;

        let latency_ms = UtcDateTime::now().millis_since(started);
        match &result {
            Ok(snapshot) => info!(
                endpoint = self.config.endpoint(),
                tickers = snapshot.len(),
                latency_ms,
                "ticker snapshot ingested"
            ),
            Err(error) => warn!(
                endpoint = self.config.endpoint(),
                kind = %error.kind(),
                latency_ms,
                "ticker fetch failed: {}",
                error.message()
            ),
        }

        result
    }

    /// [`fetch`](Self::fetch) raced against a caller-chosen deadline.
    ///
    /// On expiry the in-flight request is dropped and a transport error is returned.
    pub async fn fetch_with_deadline(
        &self,
        deadline: Duration,
    ) -> Result<Snapshot, IngestionError> {
        match tokio::time::timeout(deadline, self.fetch()).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    endpoint = self.config.endpoint(),
                    deadline_ms = deadline.as_millis() as u64,
                    "ticker fetch abandoned at deadline"
                );
                Err(IngestionError::transport_or_shape(format!(
                    "ticker request exceeded deadline of {} ms",
                    deadline.as_millis()
                )))
            }
        }
    }

    /// Fetch and fold the outcome into a presentation envelope under `policy`.
    pub async fn fetch_envelope(&self, policy: FallbackPolicy) -> FetchEnvelope {
        FetchEnvelope::resolve(self.fetch().await, policy)
    }

    async fn fetch_uninstrumented(&self) -> Result<Snapshot, IngestionError> {
        let request = HttpRequest::get(self.config.endpoint())
            .with_header("content-type", "application/json");

        let response = self.http_client.execute(request).await?;
        if !response.is_success() {
            return Err(IngestionError::transport_or_shape(format!(
                "ticker endpoint returned status {}",
                response.status
            )));
        }

        let tickers = normalize_feed(&response.body, self.config.max_records())?;
        Ok(Snapshot::live(tickers, UtcDateTime::now()))
    }
}

/// Decode a feed body and keep the first `max_records` valid tickers in feed order.
///
/// Invalid records are skipped and logged at debug level. Fails with
/// `TransportOrShape` when the body itself is malformed and with
/// `NoValidRecords` when nothing survives.
pub fn normalize_feed(body: &str, max_records: usize) -> Result<Vec<Ticker>, IngestionError> {
    let records = decode_feed(body)?;
    let total = records.len();

    let mut tickers = Vec::with_capacity(total.min(max_records));
    let mut dropped = 0_usize;
    for (index, record) in records.into_iter().enumerate() {
        if tickers.len() >= max_records {
            break;
        }

        match normalize_record(&record) {
            Ok(ticker) => tickers.push(ticker),
            Err(reason) => {
                dropped += 1;
                debug!(index, %reason, "dropping ticker record");
            }
        }
    }

    if tickers.is_empty() {
        return Err(if total == 0 {
            IngestionError::no_valid_records("ticker feed contained no records")
        } else {
            IngestionError::no_valid_records(format!(
                "none of {} ticker records passed validation",
                total
            ))
        });
    }

    debug!(total, kept = tickers.len(), dropped, "ticker feed normalized");
    Ok(tickers)
}
