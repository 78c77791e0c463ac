//! Text folding applied to queries and lookup keys

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase `text` and strip diacritics (`"Été à Orléans"` -> `"ete a orleans"`).
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fold and collapse internal whitespace, used for multi-word dictionary keys.
pub fn fold_phrase(text: &str) -> String {
    fold(text).split_whitespace().collect::<Vec<_>>().join(" ")
}
