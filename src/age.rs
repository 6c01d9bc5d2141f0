//! Age patching
//!
//! Detects a changed age (`<digits>歳`) between two versions of a Japanese
//! source and carries the new number over to the English `"<n> years old"`
//! phrase of the existing translation.

use regex::Regex;
use std::sync::LazyLock;

/// Source-language age unit marker
pub const AGE_MARKER: &str = "歳";

static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(\d+){}", AGE_MARKER)).expect("age pattern is a valid regex")
});

/// Digits of the first age mention in `source`, if any
pub fn find_age(source: &str) -> Option<&str> {
    AGE_PATTERN
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrite the age phrase in `translation` when the edit changed the age
///
/// Only the first age mention of each source is compared, and only the
/// first `"<n> years old"` of the translation is rewritten.
///
/// # Example
/// ```ignore
/// let out = patch_age("She is 42 years old", "42歳です", "43歳です");
/// assert_eq!(out, "She is 43 years old");
/// ```
pub fn patch_age(translation: &str, original_source: &str, modified_source: &str) -> String {
    let (Some(original_age), Some(modified_age)) =
        (find_age(original_source), find_age(modified_source))
    else {
        return translation.to_string();
    };
    if original_age == modified_age {
        return translation.to_string();
    }
    translation.replacen(
        &format!("{} years old", original_age),
        &format!("{} years old", modified_age),
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_age() {
        assert_eq!(find_age("ジョンは25歳です"), Some("25"));
        assert_eq!(find_age("彼は7歳と12歳の兄弟がいる"), Some("7"));
        assert_eq!(find_age("25 years"), None);
        assert_eq!(find_age("歳"), None);
    }

    #[test]
    fn test_changed_age_is_patched() {
        let out = patch_age("The man is 42 years old and tall", "男は42歳", "男は43歳");
        assert_eq!(out, "The man is 43 years old and tall");
    }

    #[test]
    fn test_same_age_is_untouched() {
        let out = patch_age("He is 42 years old", "彼は42歳", "ジョンは42歳");
        assert_eq!(out, "He is 42 years old");
    }

    #[test]
    fn test_missing_age_on_either_side() {
        assert_eq!(patch_age("He is 42 years old", "彼は42歳", "彼は大人"), "He is 42 years old");
        assert_eq!(patch_age("He is an adult", "彼は大人", "彼は42歳"), "He is an adult");
    }

    #[test]
    fn test_translation_without_phrase() {
        let out = patch_age("He turned forty-two", "彼は42歳", "彼は43歳");
        assert_eq!(out, "He turned forty-two");
    }

    #[test]
    fn test_only_first_phrase_rewritten() {
        let out = patch_age(
            "She is 30 years old; her twin is 30 years old",
            "彼女は30歳",
            "彼女は31歳",
        );
        assert_eq!(out, "She is 31 years old; her twin is 30 years old");
    }
}
