use serde::Serialize;

use crate::{Symbol, ValidationError};

/// Canonical exchange ticker snapshot for one asset.
///
/// Fields are private so a `Ticker` can only come from [`Ticker::new`], which
/// enforces a non-empty symbol, a positive finite price and a finite change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    symbol: Symbol,
    price: f64,
    change_percent: f64,
    volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
}

impl Ticker {
    /// `volume` of zero means the feed did not report one.
    pub fn new(
        symbol: Symbol,
        price: f64,
        change_percent: f64,
        volume: f64,
    ) -> Result<Self, ValidationError> {
        validate_positive("price", price)?;
        validate_finite("change_percent", change_percent)?;
        validate_non_negative("volume", volume)?;

        Ok(Self {
            symbol,
            price,
            change_percent,
            volume,
            market_cap: None,
            last_updated: None,
        })
    }

    pub fn with_market_cap(mut self, market_cap: f64) -> Result<Self, ValidationError> {
        validate_non_negative("market_cap", market_cap)?;
        self.market_cap = Some(market_cap);
        Ok(self)
    }

    pub fn with_last_updated(mut self, last_updated: impl Into<String>) -> Self {
        self.last_updated = Some(last_updated.into());
        self
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub const fn price(&self) -> f64 {
        self.price
    }

    pub const fn change_percent(&self) -> f64 {
        self.change_percent
    }

    /// Raw volume; zero when unknown.
    pub const fn volume(&self) -> f64 {
        self.volume
    }

    pub fn known_volume(&self) -> Option<f64> {
        (self.volume > 0.0).then_some(self.volume)
    }

    pub const fn market_cap(&self) -> Option<f64> {
        self.market_cap
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}
