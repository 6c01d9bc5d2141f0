/// Error types for translation gateway calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// The provider rejected the API key (HTTP 403)
    InvalidApiKey(String),
    /// The account's character quota is used up (HTTP 456)
    QuotaExceeded(String),
    /// Too many requests in a short time (HTTP 429)
    RateLimited(String),
    /// The request never got a response: connect failure, timeout, etc.
    Network(String),
    /// Any other non-success status returned by the provider
    Provider { status: u16, message: String },
    /// The provider answered 2xx but the body was not what we expected
    InvalidResponse(String),
    /// Language code with characters a provider would reject
    InvalidLocale(String),
    /// Missing or unusable configuration
    ConfigError(String),
}

impl MtError {
    /// HTTP status to report to a caller for this failure
    ///
    /// Provider statuses are mirrored; failures without a provider status map to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            MtError::InvalidApiKey(_) => 403,
            MtError::QuotaExceeded(_) => 456,
            MtError::RateLimited(_) => 429,
            MtError::Provider { status, .. } => *status,
            MtError::InvalidLocale(_) => 400,
            MtError::Network(_) | MtError::InvalidResponse(_) | MtError::ConfigError(_) => 500,
        }
    }

    /// Stable category name for logs
    pub fn category(&self) -> &'static str {
        match self {
            MtError::InvalidApiKey(_) => "invalid_api_key",
            MtError::QuotaExceeded(_) => "quota_exceeded",
            MtError::RateLimited(_) => "rate_limited",
            MtError::Network(_) => "network",
            MtError::Provider { .. } => "provider",
            MtError::InvalidResponse(_) => "invalid_response",
            MtError::InvalidLocale(_) => "invalid_locale",
            MtError::ConfigError(_) => "config",
        }
    }
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::InvalidApiKey(msg) => write!(f, "Invalid API key: {}", msg),
            MtError::QuotaExceeded(msg) => write!(f, "Translation quota exceeded: {}", msg),
            MtError::RateLimited(msg) => {
                write!(f, "Too many requests, wait a moment and retry: {}", msg)
            }
            MtError::Network(msg) => write!(f, "Request error: {}", msg),
            MtError::Provider { status, message } => {
                write!(f, "Translation provider error ({}): {}", status, message)
            }
            MtError::InvalidResponse(msg) => write!(f, "Invalid provider response: {}", msg),
            MtError::InvalidLocale(msg) => write!(f, "Invalid language code: {}", msg),
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return MtError::Provider {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        if err.is_decode() {
            return MtError::InvalidResponse(err.to_string());
        }
        MtError::Network(err.to_string())
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;
