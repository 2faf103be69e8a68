//! File name transformation pipeline.
//!
//! Turns a base name into a new base name by running the enabled steps of a
//! [`RenameOptions`] in a fixed order:
//!
//! 1. trim front
//! 2. trim back
//! 3. substring replacements
//! 4. diacritic stripping
//! 5. whitespace/separator collapsing
//! 6. lowercasing
//!
//! Every step is a pure `&str -> String` function and none of them can fail.
//!
//! # Examples
//!
//! ```
//! use renamer::options::RenameOptions;
//! use renamer::transform::transform;
//!
//! let options = RenameOptions::new()
//!     .with_collapse_whitespace(true)
//!     .with_lowercase(true);
//! assert_eq!(transform("My Photo  - Vol_1.JPG", &options), "my-photo-vol-1.jpg");
//! ```

use crate::options::RenameOptions;
use regex::Regex;
use std::sync::LazyLock;
use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

/// Any run of whitespace, hyphens or underscores.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_]+").expect("Invalid separator regex"));

/// Applies every enabled transformation of `options` to `base_name`.
///
/// Steps that are disabled are skipped entirely, so
/// `transform(s, &RenameOptions::default()) == s` for every `s`.
pub fn transform(base_name: &str, options: &RenameOptions) -> String {
    let mut name = base_name.to_string();

    if let Some(count) = options.trim_front {
        name = trim_front(&name, count);
    }

    if let Some(count) = options.trim_back {
        name = trim_back(&name, count);
    }

    if !options.replacements.is_empty() {
        name = apply_replacements(&name, &options.replacements);
    }

    if options.strip_diacritics {
        name = strip_diacritics(&name);
    }

    if options.collapse_whitespace {
        name = collapse_whitespace(&name);
    }

    if options.lowercase {
        name = lowercase(&name);
    }

    name
}

/// Removes the first `count` characters. Counts past the end yield `""`.
pub fn trim_front(name: &str, count: usize) -> String {
    name.chars().skip(count).collect()
}

/// Removes the last `count` characters. Counts past the start yield `""`.
pub fn trim_back(name: &str, count: usize) -> String {
    let keep = name.chars().count().saturating_sub(count);
    name.chars().take(keep).collect()
}

/// Applies each `(old, new)` pair in order, every pair seeing the output of
/// the previous one.
///
/// ```
/// use renamer::transform::apply_replacements;
///
/// let pairs = vec![("a".to_string(), "b".to_string()), ("b".to_string(), "c".to_string())];
/// assert_eq!(apply_replacements("aab", &pairs), "ccc");
/// ```
pub fn apply_replacements(name: &str, replacements: &[(String, String)]) -> String {
    replacements
        .iter()
        .fold(name.to_string(), |current, (old, new)| {
            current.replace(old.as_str(), new)
        })
}

/// Decomposes to NFD and drops the nonspacing marks (Mn), keeping base letters.
///
/// Spacing marks (Mc) such as Devanagari vowel signs are letters in their
/// own right and are kept.
pub fn strip_diacritics(name: &str) -> String {
    name.nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark)
        .collect()
}

/// Collapses separator runs into a single `-`.
///
/// After collapsing, a hyphen at the very start is dropped, as is any hyphen
/// sitting right before an extension dot (`"photo -.tar -.gz"` becomes
/// `"photo.tar.gz"`). A trailing hyphen with no extension after it is kept.
pub fn collapse_whitespace(name: &str) -> String {
    let collapsed = SEPARATOR_RUN.replace_all(name, "-");
    let trimmed = collapsed.strip_prefix('-').unwrap_or(&*collapsed);

    // Runs are already single hyphens, so no new "-." can appear.
    trimmed.replace("-.", ".")
}

/// Unicode lowercase, independent of the current locale.
pub fn lowercase(name: &str) -> String {
    name.to_lowercase()
}
