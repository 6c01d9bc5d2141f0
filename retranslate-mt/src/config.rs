//! Gateway configuration loaded from the environment

use crate::error::{MtError, MtResult};
use std::time::Duration;

/// Free-tier DeepL endpoint
pub const DEFAULT_DEEPL_API_URL: &str = "https://api-free.deepl.com";

pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;

/// Settings for outgoing translation requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Provider base URL, without the `/v2/translate` path
    pub base_url: String,
    /// Upper bound for one provider call, connect included
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DEEPL_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_GATEWAY_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Read `DEEPL_API_URL` and `RETRANSLATE_GATEWAY_TIMEOUT_SECS`, falling back to defaults
    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> MtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("DEEPL_API_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup("RETRANSLATE_GATEWAY_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                MtError::ConfigError(format!(
                    "RETRANSLATE_GATEWAY_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?;
            if secs == 0 {
                return Err(MtError::ConfigError(
                    "RETRANSLATE_GATEWAY_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
