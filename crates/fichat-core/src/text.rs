// crates/fichat-core/src/text.rs

//! Normalization helpers shared by the table, the resolver and the router.

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Trim surrounding whitespace
/// 2\) Transliterate Unicode → ASCII (e.g. `Parañaque` -> `Paranaque`)
/// 3\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use fichat_core::text::fold_key;
///
/// assert_eq!(fold_key("  Las Piñas City "), "las pinas city");
/// assert_eq!(fold_key("QUEZON CITY"), "quezon city");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Splits folded text into alphanumeric words.
pub fn words(folded: &str) -> impl Iterator<Item = &str> {
    folded
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Whole-word containment on folded text.
///
/// `"what is the average?"` contains the word `average`, while
/// `"oriental mindoro"` does not contain the word `min`.
pub fn contains_word(text: &str, word: &str) -> bool {
    let text = fold_key(text);
    let word = fold_key(word);
    let found = words(&text).any(|w| w == word);
    found
}

/// Case- and accent-insensitive substring containment.
pub fn contains_phrase(text: &str, needle: &str) -> bool {
    fold_key(text).contains(&fold_key(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_trims_and_lowercases() {
        assert_eq!(fold_key("\tDavao City \n"), "davao city");
        assert_eq!(fold_key(""), "");
    }

    #[test]
    fn fold_key_transliterates() {
        assert_eq!(fold_key("Parañaque"), "paranaque");
    }

    #[test]
    fn word_matching_ignores_embedded_fragments() {
        assert!(contains_word("Average, please!", "average"));
        assert!(!contains_word("Oriental Mindoro", "min"));
        assert!(contains_word("show me the MIN", "min"));
    }

    #[test]
    fn word_matching_folds_both_sides() {
        assert!(contains_word("  EXIT  ", "Exit"));
        assert!(!contains_word("", "exit"));
        assert!(!contains_word("exit", ""));
    }

    #[test]
    fn phrase_matching_is_substring_based() {
        assert!(contains_phrase("I want Cities", "cit"));
        assert!(contains_phrase("switch to PROVINCE", "province"));
        assert!(!contains_phrase("city", "province"));
    }
}
