//! Machine translation gateway and partial re-translation policy
//!
//! This crate connects the `retranslate` heuristics to a translation provider.
//!
//! # Workflow Example
//!
//! ```ignore
//! use retranslate::TranslationRecord;
//! use retranslate_mt::{DeepLProvider, translate_partial};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeepLProvider::from_env()?;
//!     let record = TranslationRecord::new(
//!         "ジョンは25歳です",
//!         "John is 25 years old",
//!         "マイクは25歳です",
//!     );
//!
//!     // Small edits are patched locally; large ones go back to DeepL
//!     let result = translate_partial(&provider, &record, "your-key").await?;
//!     println!("{} ({})", result.text, result.outcome.as_str());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod deepl;
pub mod error;
pub mod mock;
pub mod policy;
pub mod translator;

pub use config::GatewayConfig;
pub use deepl::DeepLProvider;
pub use error::{MtError, MtResult};
pub use mock::{MockMode, MockTranslator};
pub use policy::{Outcome, PartialTranslation, RETRANSLATION_TARGET_LANG, translate_partial};
pub use translator::{MachineTranslator, Translation, normalize_language, validate_language};
