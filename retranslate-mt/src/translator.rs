//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the partial re-translation policy and the web service can run against
//! DeepL in production and a deterministic mock in tests.
//!
//! # Example
//!
//! ```ignore
//! use retranslate_mt::{DeepLProvider, GatewayConfig, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeepLProvider::new(GatewayConfig::from_env()?)?;
//!     let result = provider.translate("Hello, world!", None, "JA", "your-key").await?;
//!     println!("{} ({:?})", result.text, result.detected_source_lang);
//!     Ok(())
//! }
//! ```

use crate::error::{MtError, MtResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Output of a single translation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// The translated text
    pub text: String,
    /// Source language as detected by the provider, when it reports one
    pub detected_source_lang: Option<String>,
}

impl Translation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_source_lang: None,
        }
    }

    pub fn with_detected(text: impl Into<String>, detected: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_source_lang: Some(detected.into()),
        }
    }
}

/// Generic trait for machine translation providers
///
/// Credentials travel with each call: the service is a pass-through proxy
/// and never stores a key of its own.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` into `target_lang`
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_lang` - Source language code, or `None` to let the provider detect it
    /// * `target_lang` - Target language code (e.g., "JA", "EN-GB")
    /// * `api_key` - Provider credential for this request
    ///
    /// # Returns
    ///
    /// * `Ok(Translation)` - The translated text and detected source language
    /// * `Err(MtError)` - A categorized provider, network or validation failure
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
        api_key: &str,
    ) -> MtResult<Translation>;

    /// Get the name of this translation provider
    ///
    /// Used for logging to identify which provider handled a translation.
    fn provider_name(&self) -> &str;
}

/// Normalize a language code to the upper-case, hyphenated form providers expect
///
/// - `ja` → `JA`
/// - `en_us` → `EN-US`
/// - `pt-br` → `PT-BR`
pub fn normalize_language(lang: &str) -> String {
    lang.trim().replace('_', "-").to_uppercase()
}

/// Validate that a language code is in acceptable format
///
/// Checks that the code is non-empty and contains only ASCII alphanumerics,
/// hyphens and underscores.
pub fn validate_language(lang: &str) -> MtResult<()> {
    let lang = lang.trim();
    if lang.is_empty() {
        return Err(MtError::InvalidLocale("Language code is empty".to_string()));
    }

    if !lang
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in language code: {}",
            lang
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("ja"), "JA");
        assert_eq!(normalize_language("EN"), "EN");
        assert_eq!(normalize_language("en_us"), "EN-US");
        assert_eq!(normalize_language(" pt-br "), "PT-BR");
    }

    #[test]
    fn test_validate_language_valid_codes() {
        assert!(validate_language("JA").is_ok());
        assert!(validate_language("en-US").is_ok());
        assert!(validate_language("zh_Hans").is_ok());
    }

    #[test]
    fn test_validate_language_invalid_codes() {
        assert!(validate_language("").is_err());
        assert!(validate_language("   ").is_err());
        assert!(validate_language("en@invalid").is_err());
        assert!(validate_language("ja jp").is_err());
    }

    #[test]
    fn test_validate_language_error_messages() {
        match validate_language("en@US") {
            Err(MtError::InvalidLocale(msg)) => {
                assert!(msg.contains("Invalid characters"));
            }
            _ => panic!("Expected InvalidLocale error"),
        }
    }
}
