//! Choosing between keeping, patching and re-translating

use crate::diff::{TokenDifference, diff};

/// Largest number of token differences still repaired by patching
pub const MAX_PATCHABLE_DIFFERENCES: usize = 3;

/// The path taken for an edited source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Token-identical sources; the existing translation stands
    Unchanged,
    /// Few differences; patch the existing translation locally
    Patch { differences: Vec<TokenDifference> },
    /// Too many differences; ask the provider for a fresh translation
    Retranslate { differences: Vec<TokenDifference> },
}

impl Decision {
    pub fn differences(&self) -> &[TokenDifference] {
        match self {
            Decision::Unchanged => &[],
            Decision::Patch { differences } | Decision::Retranslate { differences } => differences,
        }
    }

    /// Short label used in logs and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Unchanged => "unchanged",
            Decision::Patch { .. } => "patch",
            Decision::Retranslate { .. } => "retranslate",
        }
    }
}

/// Decide how to update a translation after its source changed
pub fn decide(original_source: &str, modified_source: &str) -> Decision {
    let differences = diff(original_source, modified_source);
    match differences.len() {
        0 => Decision::Unchanged,
        n if n > MAX_PATCHABLE_DIFFERENCES => Decision::Retranslate { differences },
        _ => Decision::Patch { differences },
    }
}
