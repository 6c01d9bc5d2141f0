//! Fixed Japanese → English proper-noun dictionaries
//!
//! When an edit swaps one known name (or place) for another in the Japanese
//! source, the English translation can be repaired by swapping the matching
//! English term, without asking the translation provider again.

/// An immutable, ordered mapping from a source-language proper noun to its
/// target-language equivalent
///
/// Iteration order is the declaration order of the entries and decides which
/// entry wins when several match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameLocationDictionary {
    label: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

/// Personal names
pub static NAMES: NameLocationDictionary = NameLocationDictionary::new(
    "names",
    &[
        ("ジョン", "John"),
        ("マイク", "Mike"),
        ("サラ", "Sarah"),
        ("トム", "Tom"),
        ("エミリー", "Emily"),
        ("デイビッド", "David"),
    ],
);

/// Japanese cities
pub static LOCATIONS: NameLocationDictionary = NameLocationDictionary::new(
    "locations",
    &[
        ("東京", "Tokyo"),
        ("大阪", "Osaka"),
        ("京都", "Kyoto"),
        ("名古屋", "Nagoya"),
        ("横浜", "Yokohama"),
        ("神戸", "Kobe"),
    ],
);

/// Dictionaries in the order they are applied
pub static DICTIONARIES: [&NameLocationDictionary; 2] = [&NAMES, &LOCATIONS];

impl NameLocationDictionary {
    pub const fn new(
        label: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { label, entries }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Target term for the first entry whose source term occurs in `text`
    pub fn first_present_in(&self, text: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(source, _)| text.contains(source))
            .map(|(_, target)| *target)
    }

    /// Target term for the first entry introduced by the edit: present in
    /// `modified_source` but absent from `original_source`
    pub fn first_introduced(
        &self,
        original_source: &str,
        modified_source: &str,
    ) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(source, _)| modified_source.contains(source) && !original_source.contains(source))
            .map(|(_, target)| *target)
    }

    /// Swap the target term of the replaced entry for the one the edit
    /// introduced, everywhere in `translation`
    ///
    /// Only the first newly introduced entry is considered; further new
    /// entries in the same edit are ignored. Returns `translation` unchanged
    /// when no entry was introduced or the original source had no entry.
    pub fn substitute(
        &self,
        translation: &str,
        original_source: &str,
        modified_source: &str,
    ) -> String {
        let Some(replacement) = self.first_introduced(original_source, modified_source) else {
            return translation.to_string();
        };
        let Some(replaced) = self.first_present_in(original_source) else {
            return translation.to_string();
        };
        translation.replace(replaced, replacement)
    }
}

/// Apply the name dictionary, then the location dictionary, each to the
/// output of the previous step
///
/// # Example
/// ```ignore
/// let out = patch_names_and_locations(
///     "John lives in Tokyo",
///     "ジョンは東京に住んでいる",
///     "マイクは大阪に住んでいる",
/// );
/// assert_eq!(out, "Mike lives in Osaka");
/// ```
pub fn patch_names_and_locations(
    translation: &str,
    original_source: &str,
    modified_source: &str,
) -> String {
    DICTIONARIES
        .iter()
        .fold(translation.to_string(), |current, dictionary| {
            dictionary.substitute(&current, original_source, modified_source)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_swap() {
        let out = patch_names_and_locations("John is 25 years old", "ジョンは25歳です", "マイクは25歳です");
        assert_eq!(out, "Mike is 25 years old");
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let out = patch_names_and_locations(
            "John met John's dog",
            "ジョンはジョンの犬に会った",
            "サラはサラの犬に会った",
        );
        assert_eq!(out, "Sarah met Sarah's dog");
    }

    #[test]
    fn test_location_swap() {
        let out = patch_names_and_locations("I live in Tokyo", "東京に住んでいます", "京都に住んでいます");
        assert_eq!(out, "I live in Kyoto");
    }

    #[test]
    fn test_names_then_locations() {
        let out = patch_names_and_locations(
            "Tom works in Nagoya",
            "トムは名古屋で働いています",
            "エミリーは神戸で働いています",
        );
        assert_eq!(out, "Emily works in Kobe");
    }

    #[test]
    fn test_no_new_term_leaves_translation() {
        let out = patch_names_and_locations("John is here", "ジョンはここ", "ジョンはそこ");
        assert_eq!(out, "John is here");
    }

    #[test]
    fn test_new_term_without_original_term() {
        // nothing to replace when the original had no known name
        let out = patch_names_and_locations("He is here", "彼はここ", "マイクはここ");
        assert_eq!(out, "He is here");
    }

    #[test]
    fn test_first_introduced_term_wins() {
        // both マイク and トム are new; マイク comes first in the dictionary
        let out = patch_names_and_locations("John said hi", "ジョンが挨拶した", "トムとマイクが挨拶した");
        assert_eq!(out, "Mike said hi");
    }

    #[test]
    fn test_first_present_in_follows_dictionary_order() {
        assert_eq!(NAMES.first_present_in("サラとジョン"), Some("John"));
        assert_eq!(NAMES.first_present_in("誰もいない"), None);
    }

    #[test]
    fn test_dictionary_order_and_labels() {
        assert_eq!(DICTIONARIES[0].label(), "names");
        assert_eq!(DICTIONARIES[1].label(), "locations");
        assert_eq!(NAMES.entries().len(), 6);
        assert_eq!(LOCATIONS.entries()[0], ("東京", "Tokyo"));
    }
}
