use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::http_client::HttpError;

/// Record-level validation errors exposed by `tickerdash-core`.
///
/// These never escape [`crate::TickerIngestion::fetch`] on their own: a record
/// that fails validation is dropped and the reason is logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("field '{field}' is missing")]
    MissingField { field: &'static str },
    #[error("field '{field}' is not numeric: '{value}'")]
    NotNumeric { field: &'static str, value: String },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },

    #[error("record has an unexpected shape: {reason}")]
    MalformedRecord { reason: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("endpoint must be an http:// or https:// URL: '{value}'")]
    InvalidEndpoint { value: String },
    #[error("record cap must be greater than zero")]
    InvalidRecordCap,
}

/// Pipeline-level failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngestionErrorKind {
    /// Request failed, returned a non-success status, or the body had the wrong top-level shape.
    TransportOrShape,
    /// The feed was well formed but no record survived validation.
    NoValidRecords,
}

impl IngestionErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TransportOrShape => "transport_or_shape",
            Self::NoValidRecords => "no_valid_records",
        }
    }
}

impl Display for IngestionErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured ingestion error returned to the caller of a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionError {
    kind: IngestionErrorKind,
    message: String,
}

impl IngestionError {
    pub fn transport_or_shape(message: impl Into<String>) -> Self {
        Self {
            kind: IngestionErrorKind::TransportOrShape,
            message: message.into(),
        }
    }

    pub fn no_valid_records(message: impl Into<String>) -> Self {
        Self {
            kind: IngestionErrorKind::NoValidRecords,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> IngestionErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for IngestionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for IngestionError {}

impl From<HttpError> for IngestionError {
    fn from(error: HttpError) -> Self {
        Self::transport_or_shape(format!("ticker transport error: {}", error.message()))
    }
}
