use retranslate_mt::{GatewayConfig, MtError, MtResult};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Web server settings, read once at start-up
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Serving-layer bound on a whole request, gateway call included
    pub request_timeout: Duration,
    pub gateway: GatewayConfig,
}

impl ServerConfig {
    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> MtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("RETRANSLATE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.trim().parse().map_err(|e| {
            MtError::ConfigError(format!("Invalid RETRANSLATE_BIND '{}': {}", bind_raw, e))
        })?;

        let request_timeout = match lookup("RETRANSLATE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(MtError::ConfigError(format!(
                        "RETRANSLATE_REQUEST_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        raw
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            bind,
            request_timeout,
            gateway: GatewayConfig::from_lookup(&lookup)?,
        })
    }
}
