//! Delta Exchange ticker feed wire shape.
//!
//! The feed is decoded in two passes. The envelope (`{"success": .., "result": [..]}`)
//! must be well formed or the whole fetch fails; each element of `result` is
//! then decoded and validated on its own so that one bad record only drops
//! itself.

use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;

use crate::{IngestionError, Symbol, Ticker, UtcDateTime, ValidationError};

#[derive(Debug, Deserialize)]
struct DeltaTickerResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<Box<RawValue>>,
    // Each record is decoded on its own by `normalize_record`.
    result: Vec<Box<RawValue>>,
}

/// One element of the feed's `result` list before validation.
#[derive(Debug, Deserialize)]
struct RawTicker {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    close: Option<RawNumber>,
    #[serde(default)]
    change_24h: Option<RawNumber>,
    #[serde(default)]
    volume: Option<RawNumber>,
    #[serde(default)]
    timestamp: Option<Value>,
}

/// Delta sends most numerics as strings ("2650.75"), some as JSON numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn parse(&self, field: &'static str) -> Result<f64, ValidationError> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| ValidationError::NotNumeric {
                        field,
                        value: text.clone(),
                    })?
            }
        };

        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field });
        }
        Ok(value)
    }
}

/// Validate the top-level shape and hand back the raw record list.
pub(crate) fn decode_feed(body: &str) -> Result<Vec<Box<RawValue>>, IngestionError> {
    let response: DeltaTickerResponse = serde_json::from_str(body).map_err(|e| {
        IngestionError::transport_or_shape(format!("failed to parse ticker feed: {}", e))
    })?;

    if response.success == Some(false) {
        let detail = response
            .error
            .map(|error| error.get().to_owned())
            .unwrap_or_else(|| String::from("no error detail"));
        return Err(IngestionError::transport_or_shape(format!(
            "ticker feed reported failure: {}",
            detail
        )));
    }

    Ok(response.result)
}

/// Validate and map one raw feed record onto a [`Ticker`].
pub(crate) fn normalize_record(record: &RawValue) -> Result<Ticker, ValidationError> {
    let raw: RawTicker =
        serde_json::from_str(record.get()).map_err(|e| ValidationError::MalformedRecord {
            reason: e.to_string(),
        })?;

    let symbol = raw
        .symbol
        .as_deref()
        .map(Symbol::parse)
        .transpose()?
        .ok_or(ValidationError::EmptySymbol)?;
    let price = raw
        .close
        .as_ref()
        .ok_or(ValidationError::MissingField { field: "close" })?
        .parse("close")?;
    let change_percent = raw
        .change_24h
        .as_ref()
        .ok_or(ValidationError::MissingField {
            field: "change_24h",
        })?
        .parse("change_24h")?;
    let volume = match &raw.volume {
        Some(volume) => volume.parse("volume")?,
        None => 0.0,
    };

    let ticker = Ticker::new(symbol, price, change_percent, volume)?;
    Ok(match raw.timestamp.as_ref().and_then(describe_timestamp) {
        Some(last_updated) => ticker.with_last_updated(last_updated),
        None => ticker,
    })
}

fn describe_timestamp(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(
            number
                .as_i64()
                .and_then(|micros| UtcDateTime::from_unix_micros(micros).ok())
                .map(UtcDateTime::format_rfc3339)
                .unwrap_or_else(|| number.to_string()),
        ),
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    }
}
