//! Input records for diffing and patching

use crate::age::patch_age;
use crate::diff::{TokenDifference, diff};
use crate::dictionary::patch_names_and_locations;
use serde::{Deserialize, Serialize};

/// Two versions of the same text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub original: String,
    pub modified: String,
}

impl TextPair {
    pub fn new(original: impl Into<String>, modified: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            modified: modified.into(),
        }
    }

    pub fn differences(&self) -> Vec<TokenDifference> {
        diff(&self.original, &self.modified)
    }
}

/// Everything needed to patch an existing translation after its source was edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Source text the existing translation was made from
    pub original_source: String,
    /// Existing translation of `original_source`
    pub original_translation: String,
    /// Edited source text
    pub modified_source: String,
}

impl TranslationRecord {
    pub fn new(
        original_source: impl Into<String>,
        original_translation: impl Into<String>,
        modified_source: impl Into<String>,
    ) -> Self {
        Self {
            original_source: original_source.into(),
            original_translation: original_translation.into(),
            modified_source: modified_source.into(),
        }
    }

    pub fn source_pair(&self) -> TextPair {
        TextPair::new(self.original_source.as_str(), self.modified_source.as_str())
    }

    /// Patch the existing translation in place of a provider call
    pub fn patch(&self) -> String {
        apply_partial_changes(
            &self.original_translation,
            &self.original_source,
            &self.modified_source,
        )
    }
}

/// Apply the age patch, then the name and location dictionaries
pub fn apply_partial_changes(
    translation: &str,
    original_source: &str,
    modified_source: &str,
) -> String {
    let aged = patch_age(translation, original_source, modified_source);
    patch_names_and_locations(&aged, original_source, modified_source)
}
