//! DeepL API provider for machine translation
//!
//! This module integrates with the DeepL v2 `translate` endpoint. Requests are
//! form-encoded and authenticated with a `DeepL-Auth-Key` header carrying the
//! caller's key; the provider itself holds no credential.
//!
//! # Example
//!
//! ```ignore
//! use retranslate_mt::{DeepLProvider, GatewayConfig, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeepLProvider::new(GatewayConfig::default())?;
//!     let result = provider.translate("Hello", Some("EN"), "JA", "key:fx").await?;
//!     println!("{}", result.text);
//!     Ok(())
//! }
//! ```

use crate::config::GatewayConfig;
use crate::error::{MtError, MtResult};
use crate::translator::{MachineTranslator, Translation, normalize_language, validate_language};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

/// DeepL API v2 provider
#[derive(Clone)]
pub struct DeepLProvider {
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Full URL of the translate endpoint
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

impl DeepLProvider {
    /// Create a new provider from gateway settings
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If the base URL is empty or the HTTP client cannot be built
    pub fn new(config: GatewayConfig) -> MtResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(MtError::ConfigError("DeepL base URL cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MtError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/v2/translate", config.base_url.trim_end_matches('/')),
        })
    }

    /// Create a provider configured from the environment
    pub fn from_env() -> MtResult<Self> {
        Self::new(GatewayConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Form fields for a translate request
    fn form_params(text: &str, source_lang: Option<&str>, target_lang: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("text", text.to_string()),
            ("target_lang", normalize_language(target_lang)),
        ];
        if let Some(source) = source_lang {
            params.push(("source_lang", normalize_language(source)));
        }
        params
    }

    /// Map a non-success DeepL status to an error category
    fn status_error(status: u16, body: &str) -> MtError {
        let detail = if body.trim().is_empty() {
            format!("DeepL API error: {}", status)
        } else {
            body.trim().to_string()
        };
        match status {
            403 => MtError::InvalidApiKey(detail),
            456 => MtError::QuotaExceeded(detail),
            429 => MtError::RateLimited(detail),
            _ => MtError::Provider {
                status,
                message: detail,
            },
        }
    }

    /// Extract the first translation from a success body
    fn parse_response(body: &str) -> MtResult<Translation> {
        let response: DeepLResponse = serde_json::from_str(body)
            .map_err(|e| MtError::InvalidResponse(format!("Failed to parse API response: {}", e)))?;

        let first = response.translations.into_iter().next().ok_or_else(|| {
            MtError::InvalidResponse("Invalid API response: empty 'translations' array".to_string())
        })?;

        Ok(Translation {
            text: first.text,
            detected_source_lang: first.detected_source_language,
        })
    }
}

impl std::fmt::Debug for DeepLProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLProvider")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for DeepLProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
        api_key: &str,
    ) -> MtResult<Translation> {
        validate_language(target_lang)?;
        if let Some(source) = source_lang {
            validate_language(source)?;
        }

        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        if text.is_empty() {
            return Ok(Translation::new(""));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", api_key.trim()))
            .form(&Self::form_params(text, source_lang, target_lang))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), &body));
        }

        Self::parse_response(&body)
    }

    fn provider_name(&self) -> &str {
        "DeepL"
    }
}
