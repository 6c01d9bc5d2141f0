//! Partial re-translation heuristics
//!
//! Given a source text, its existing translation and an edited version of the
//! source, decide whether the edit is small enough to patch the translation
//! locally instead of sending the whole text back to a translation provider.
//!
//! The heuristic is deliberately shallow:
//!
//! 1. [`diff()`] compares whitespace tokens position by position
//! 2. [`decide`] keeps, patches or re-translates depending on the difference count
//! 3. [`patch_age`] carries a changed `<n>歳` over to `"<n> years old"`
//! 4. [`patch_names_and_locations`] swaps known names and cities
//!
//! # Example
//!
//! ```ignore
//! use retranslate::{Decision, TranslationRecord, decide};
//!
//! let record = TranslationRecord::new("ジョンは25歳です", "John is 25 years old", "マイクは25歳です");
//! match decide(&record.original_source, &record.modified_source) {
//!     Decision::Patch { .. } => assert_eq!(record.patch(), "Mike is 25 years old"),
//!     _ => unreachable!(),
//! }
//! ```

pub mod age;
pub mod decision;
pub mod diff;
pub mod dictionary;
pub mod record;

pub use age::{find_age, patch_age};
pub use decision::{Decision, MAX_PATCHABLE_DIFFERENCES, decide};
pub use diff::{DifferenceKind, TokenDifference, diff};
pub use dictionary::{LOCATIONS, NAMES, NameLocationDictionary, patch_names_and_locations};
pub use record::{TextPair, TranslationRecord, apply_partial_changes};
