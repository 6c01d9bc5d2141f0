//! Partial re-translation policy
//!
//! Keeps the existing translation when the edited source is token-identical,
//! patches it locally for small edits, and asks the provider for a full
//! translation otherwise. Only the last path touches the network.

use crate::error::MtResult;
use crate::translator::MachineTranslator;
use retranslate::{Decision, TranslationRecord, decide};
use tracing::{debug, info};

/// Target language of a full re-translation
pub const RETRANSLATION_TARGET_LANG: &str = "EN";

/// Which path produced a partial translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Patched,
    Retranslated,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Unchanged => "unchanged",
            Outcome::Patched => "patched",
            Outcome::Retranslated => "retranslated",
        }
    }
}

/// Translation of an edited source, with the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialTranslation {
    pub text: String,
    pub outcome: Outcome,
    /// Number of token differences between the two sources
    pub difference_count: usize,
}

/// Produce a translation for `record.modified_source`
///
/// # Arguments
///
/// * `translator` - Provider used only when the edit is too large to patch
/// * `record` - Original source, its translation, and the edited source
/// * `api_key` - Provider credential forwarded on re-translation
///
/// # Returns
///
/// * `Ok(PartialTranslation)` - The updated translation
/// * `Err(MtError)` - The provider failed during a full re-translation
pub async fn translate_partial(
    translator: &dyn MachineTranslator,
    record: &TranslationRecord,
    api_key: &str,
) -> MtResult<PartialTranslation> {
    let decision = decide(&record.original_source, &record.modified_source);
    let difference_count = decision.differences().len();
    debug!(decision = decision.label(), difference_count, "partial translation decision");

    match decision {
        Decision::Unchanged => Ok(PartialTranslation {
            text: record.original_translation.clone(),
            outcome: Outcome::Unchanged,
            difference_count,
        }),
        Decision::Patch { .. } => Ok(PartialTranslation {
            text: record.patch(),
            outcome: Outcome::Patched,
            difference_count,
        }),
        Decision::Retranslate { .. } => {
            info!(
                provider = translator.provider_name(),
                difference_count, "edit too large to patch, re-translating"
            );
            let translation = translator
                .translate(
                    &record.modified_source,
                    None,
                    RETRANSLATION_TARGET_LANG,
                    api_key,
                )
                .await?;
            Ok(PartialTranslation {
                text: translation.text,
                outcome: Outcome::Retranslated,
                difference_count,
            })
        }
    }
}
