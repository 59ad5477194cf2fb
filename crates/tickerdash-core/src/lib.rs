//! # Tickerdash Core
//!
//! Ticker ingestion and dashboard data shaping for the tickerdash crypto
//! market dashboard.
//!
//! ## Overview
//!
//! - **Ingestion** of the Delta Exchange ticker feed into validated [`Ticker`] records
//! - **Symbol search** over an ingested list
//! - **Dashboard views**: summary counts, chart series, number formatting
//! - **Fetch envelope** with an explicit, labelled sample-data fallback
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint and record cap settings |
//! | [`domain`] | Domain models (Ticker, Snapshot, Symbol) |
//! | [`envelope`] | Presentation-facing fetch report and fallback policy |
//! | [`error`] | Validation and ingestion errors |
//! | [`filter`] | Case-insensitive symbol search |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`ingestion`] | The fetch pipeline |
//! | [`overview`] | Summary counts and chart series |
//! | [`sample`] | Fixed sample dataset |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Dashboard UI   │
//! └────────┬────────┘
//!          │ fetch() / filter_tickers()
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ TickerIngestion │────▶│ HTTP Client      │
//! └────────┬────────┘     │ (reqwest/fake)   │
//!          │              └──────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │ Feed decoding   │  shape check, then per-record validation
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │ Snapshot        │  ≤ 50 tickers, feed order
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Fetches return `Result<Snapshot, IngestionError>`; the error carries a kind:
//!
//! ```rust
//! use tickerdash_core::{IngestionError, IngestionErrorKind};
//!
//! fn describe(error: &IngestionError) -> &'static str {
//!     match error.kind() {
//!         IngestionErrorKind::TransportOrShape => "exchange unreachable or response malformed",
//!         IngestionErrorKind::NoValidRecords => "exchange returned no usable tickers",
//!     }
//! }
//! ```
//!
//! Records that fail validation are dropped individually and logged through
//! `tracing` at debug level; they only surface as an error when none survive.

pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
mod feed;
pub mod filter;
pub mod http_client;
pub mod ingestion;
pub mod overview;
pub mod sample;

// Configuration
pub use config::IngestionConfig;

// Domain models
pub use domain::{Snapshot, SnapshotOrigin, Symbol, Ticker, UtcDateTime};

// Envelope types
pub use envelope::{FallbackPolicy, FetchEnvelope};

// Error types
pub use error::{IngestionError, IngestionErrorKind, ValidationError};

// Search
pub use filter::filter_tickers;

// HTTP client types
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Ingestion
pub use ingestion::{normalize_feed, TickerIngestion};

// Dashboard views
pub use overview::{MarketSummary, VolumeSlice};
