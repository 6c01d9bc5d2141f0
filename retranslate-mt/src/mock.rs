//! Mock Machine Translator for testing
//!
//! This module provides a deterministic, API-free translator for testing the
//! re-translation policy and the HTTP service without network access.
//!
//! # Example
//!
//! ```ignore
//! use retranslate_mt::{MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", None, "JA", "key").await.unwrap();
//!     assert_eq!(result.text, "hello_JA");
//!     assert_eq!(mock.call_count(), 1);
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::translator::{MachineTranslator, Translation};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Language reported as detected when no source language is given
pub const MOCK_DETECTED_LANG: &str = "EN";

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "hello" → "hello_JA"
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target_lang) → translation
    Mappings(HashMap<(String, String), String>),

    /// Simulate provider or network errors
    Error(MtError),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
///
/// Clones share the call counter, so a test can hand one clone to the code
/// under test and assert on the other.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    /// Whether to report a detected source language when none was given
    detects_source: bool,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockTranslator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            detects_source: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Report no detected language unless the caller named one
    pub fn without_detection(mut self) -> Self {
        self.detects_source = false;
        self
    }

    /// Number of `translate` calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(err) => Err(err.clone()),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
        _api_key: &str,
    ) -> MtResult<Translation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;

        let text = self.apply_translation(text, target_lang)?;
        let detected = match source_lang {
            Some(lang) => Some(lang.to_string()),
            None if self.detects_source => Some(MOCK_DETECTED_LANG.to_string()),
            None => None,
        };
        Ok(Translation {
            text,
            detected_source_lang: detected,
        })
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", None, "JA", "key").await.unwrap();
        assert_eq!(result.text, "hello_JA");
        assert_eq!(result.detected_source_lang.as_deref(), Some("EN"));
    }

    #[tokio::test]
    async fn test_source_lang_is_echoed() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let result = mock.translate("hola", Some("ES"), "EN", "key").await.unwrap();
        assert_eq!(result.text, "hola");
        assert_eq!(result.detected_source_lang.as_deref(), Some("ES"));
    }

    #[tokio::test]
    async fn test_without_detection() {
        let mock = MockTranslator::new(MockMode::Suffix).without_detection();
        let result = mock.translate("hello", None, "JA", "key").await.unwrap();
        assert_eq!(result.detected_source_lang, None);

        let named = mock.translate("hello", Some("EN"), "JA", "key").await.unwrap();
        assert_eq!(named.detected_source_lang.as_deref(), Some("EN"));
    }

    #[tokio::test]
    async fn test_mapping_translation_and_fallback() {
        let mut map = HashMap::new();
        map.insert(
            ("マイクは25歳です".to_string(), "EN".to_string()),
            "Mike is 25 years old".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));

        let hit = mock.translate("マイクは25歳です", None, "EN", "key").await.unwrap();
        assert_eq!(hit.text, "Mike is 25 years old");

        let miss = mock.translate("unknown", None, "EN", "key").await.unwrap();
        assert_eq!(miss.text, "unknown_EN");
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockTranslator::new(MockMode::Error(MtError::QuotaExceeded("limit".to_string())));
        let result = mock.translate("hello", None, "JA", "key").await;
        assert_eq!(result, Err(MtError::QuotaExceeded("limit".to_string())));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_call_count_shared_between_clones() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let clone = mock.clone();
        clone.translate("a", None, "JA", "key").await.unwrap();
        clone.translate("b", None, "JA", "key").await.unwrap();
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
        let start = std::time::Instant::now();
        let _ = mock.translate("hello", None, "JA", "key").await.unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
