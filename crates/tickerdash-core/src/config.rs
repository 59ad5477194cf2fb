use crate::ValidationError;

/// Delta Exchange public ticker listing.
pub const DEFAULT_ENDPOINT: &str = "https://api.delta.exchange/v2/tickers";

/// Maximum number of tickers kept from one feed.
pub const DEFAULT_MAX_RECORDS: usize = 50;

pub const DEFAULT_USER_AGENT: &str = concat!("tickerdash/", env!("CARGO_PKG_VERSION"));

/// Environment variable that overrides [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV_VAR: &str = "TICKERDASH_TICKER_URL";

/// Settings for [`crate::TickerIngestion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionConfig {
    endpoint: String,
    max_records: usize,
    user_agent: String,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            max_records: DEFAULT_MAX_RECORDS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl IngestionConfig {
    /// Default settings with the endpoint taken from `TICKERDASH_TICKER_URL` when set.
    pub fn from_env() -> Result<Self, ValidationError> {
        match std::env::var(ENDPOINT_ENV_VAR) {
            Ok(endpoint) if !endpoint.trim().is_empty() => Self::default().with_endpoint(endpoint),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, ValidationError> {
        let endpoint = endpoint.into().trim().to_owned();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ValidationError::InvalidEndpoint { value: endpoint });
        }

        self.endpoint = endpoint;
        Ok(self)
    }

    pub fn with_max_records(mut self, max_records: usize) -> Result<Self, ValidationError> {
        if max_records == 0 {
            return Err(ValidationError::InvalidRecordCap);
        }

        self.max_records = max_records;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub const fn max_records(&self) -> usize {
        self.max_records
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
