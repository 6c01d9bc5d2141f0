//! Positional token differ
//!
//! Splits two versions of a text on whitespace and compares them token by
//! token at the same index. There is no alignment step: inserting a single
//! word near the start shifts every following token, so the differ reports a
//! difference at each shifted position (a "cascade"). The re-translation
//! threshold in the policy layer is calibrated against exactly this behavior.

use serde::{Deserialize, Serialize};

/// How a token position differs between the original and the modified text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceKind {
    /// Present only in the modified text
    Added,
    /// Present only in the original text
    Removed,
    /// Present in both, with different content
    Changed,
}

impl DifferenceKind {
    /// Classify a token pair. Callers guarantee the tokens are unequal.
    fn classify(original: &str, modified: &str) -> Self {
        if original.is_empty() {
            DifferenceKind::Added
        } else if modified.is_empty() {
            DifferenceKind::Removed
        } else {
            DifferenceKind::Changed
        }
    }
}

impl std::fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifferenceKind::Added => write!(f, "added"),
            DifferenceKind::Removed => write!(f, "removed"),
            DifferenceKind::Changed => write!(f, "changed"),
        }
    }
}

/// A single token position at which two texts disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDifference {
    /// Token position, counted over the longer of the two token sequences
    pub index: usize,
    /// Token in the original text, empty when the position is past its end
    #[serde(rename = "original")]
    pub original_token: String,
    /// Token in the modified text, empty when the position is past its end
    #[serde(rename = "modified")]
    pub modified_token: String,
    #[serde(rename = "type")]
    pub kind: DifferenceKind,
}

/// Compare two texts token by token
///
/// # Arguments
/// * `original` - The text before editing
/// * `modified` - The text after editing
///
/// # Returns
/// The differing positions in ascending index order. An empty vector means
/// both texts split into the same whitespace-delimited tokens.
///
/// # Example
/// ```ignore
/// let diffs = diff("a b c", "a x c");
/// assert_eq!(diffs.len(), 1);
/// assert_eq!(diffs[0].index, 1);
/// ```
pub fn diff(original: &str, modified: &str) -> Vec<TokenDifference> {
    let original_tokens: Vec<&str> = original.split_whitespace().collect();
    let modified_tokens: Vec<&str> = modified.split_whitespace().collect();
    let len = original_tokens.len().max(modified_tokens.len());

    (0..len)
        .filter_map(|index| {
            let original_token = original_tokens.get(index).copied().unwrap_or("");
            let modified_token = modified_tokens.get(index).copied().unwrap_or("");
            if original_token == modified_token {
                return None;
            }
            Some(TokenDifference {
                index,
                original_token: original_token.to_string(),
                modified_token: modified_token.to_string(),
                kind: DifferenceKind::classify(original_token, modified_token),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_have_no_differences() {
        for text in ["", "   ", "one", "John is 25 years old", "ジョンは25歳です"] {
            assert!(diff(text, text).is_empty(), "expected no diff for {:?}", text);
        }
    }

    #[test]
    fn test_whitespace_layout_is_ignored() {
        assert!(diff("a  b\tc\n", " a b c").is_empty());
    }

    #[test]
    fn test_single_changed_token() {
        let diffs = diff("the cat sat", "the dog sat");
        assert_eq!(
            diffs,
            vec![TokenDifference {
                index: 1,
                original_token: "cat".to_string(),
                modified_token: "dog".to_string(),
                kind: DifferenceKind::Changed,
            }]
        );
    }

    #[test]
    fn test_trailing_word_appended() {
        let diffs = diff("I like tea", "I like tea today");
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].index, 3);
        assert_eq!(diffs[0].kind, DifferenceKind::Added);
        assert_eq!(diffs[0].original_token, "");
        assert_eq!(diffs[0].modified_token, "today");
    }

    #[test]
    fn test_trailing_word_removed() {
        let diffs = diff("I like tea today", "I like tea");
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].kind, DifferenceKind::Removed);
        assert_eq!(diffs[0].modified_token, "");
    }

    #[test]
    fn test_insertion_near_start_cascades() {
        let diffs = diff("a b c d e", "x a b c d e");
        // every position shifts by one
        assert_eq!(diffs.len(), 6);
        assert!(diffs[..5].iter().all(|d| d.kind == DifferenceKind::Changed));
        assert_eq!(diffs[5].kind, DifferenceKind::Added);
    }

    #[test]
    fn test_count_is_symmetric() {
        let pairs = [
            ("a b c", "a x c"),
            ("a b c", "a b c d e"),
            ("", "one two"),
            ("x a b c", "a b c"),
            ("ジョンは25歳です", "マイクは25歳です"),
        ];
        for (a, b) in pairs {
            assert_eq!(diff(a, b).len(), diff(b, a).len(), "{:?} / {:?}", a, b);
        }
    }

    #[test]
    fn test_unsegmented_japanese_is_one_token() {
        let diffs = diff("ジョンは25歳です", "マイクは25歳です");
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].kind, DifferenceKind::Changed);
    }

    #[test]
    fn test_serialized_shape() {
        let diffs = diff("a", "a b");
        let json = serde_json::to_value(&diffs[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"index": 1, "original": "", "modified": "b", "type": "added"})
        );
    }
}
