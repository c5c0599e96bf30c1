//! Pure text transforms over in-memory strings.
//!
//! All functions are stateless and allocate their results; inputs are never
//! mutated. Delimiter and search matching is literal (no patterns, no
//! case folding except where a function says so).

use std::collections::BTreeMap;

/// Convert a string to uppercase.
pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Convert a string to lowercase.
pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Split `text` on a literal `delimiter`.
///
/// Interior empty pieces are kept (`"a,,b"` splits into three pieces), but a
/// trailing delimiter produces no trailing empty piece. An empty delimiter
/// returns the whole input as a single piece.
pub fn split(text: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![text.to_string()];
    }

    let mut pieces = Vec::new();
    let mut start = 0;

    while let Some(pos) = text[start..].find(delimiter) {
        pieces.push(text[start..start + pos].to_string());
        start += pos + delimiter.len();
    }

    if start < text.len() {
        pieces.push(text[start..].to_string());
    }

    pieces
}

/// Replace every non-overlapping occurrence of `search` with `replacement`.
///
/// Matching is leftmost-first and the replacement text is never re-scanned,
/// so `replace("aaa", "aa", "a")` yields `"aa"` and a replacement containing
/// the search string cannot loop. An empty `search` returns the input
/// unchanged.
pub fn replace(text: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut start = 0;

    while let Some(pos) = text[start..].find(search) {
        result.push_str(&text[start..start + pos]);
        result.push_str(replacement);
        start += pos + search.len();
    }

    result.push_str(&text[start..]);
    result
}

/// Count case-folded word frequencies.
///
/// A word is a maximal run of ASCII alphanumerics or underscores; everything
/// else separates words. Keys are lowercased, and the map iterates in sorted
/// key order.
pub fn word_frequency(text: &str) -> BTreeMap<String, usize> {
    let mut frequency = BTreeMap::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            word.push(ch.to_ascii_lowercase());
        } else if !word.is_empty() {
            *frequency.entry(std::mem::take(&mut word)).or_insert(0) += 1;
        }
    }

    if !word.is_empty() {
        *frequency.entry(word).or_insert(0) += 1;
    }

    frequency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_upper_case("Hello World Example"), "HELLO WORLD EXAMPLE");
        assert_eq!(to_lower_case("Hello World Example"), "hello world example");

        // Uppercased text carries no lowercase ASCII letters, and vice versa
        let mixed = "MiXeD cAsE 123 text!";
        assert!(!to_upper_case(mixed).contains(|c: char| c.is_ascii_lowercase()));
        assert!(!to_lower_case(mixed).contains(|c: char| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(
            split("Hello World Example", " "),
            vec!["Hello", "World", "Example"]
        );
    }

    #[test]
    fn test_split_rejoin() {
        let text = "Hello World Example";
        assert_eq!(split(text, " ").join(" "), text);
    }

    #[test]
    fn test_split_edge_cases() {
        // Interior empty pieces are kept, trailing ones are dropped
        assert_eq!(split("a,,b", ","), vec!["a", "", "b"]);
        assert_eq!(split("a,b,", ","), vec!["a", "b"]);
        assert_eq!(split("", ","), Vec::<String>::new());
        assert_eq!(split("no delimiter", "|"), vec!["no delimiter"]);
        assert_eq!(split("abc", ""), vec!["abc"]);
        // Multi-byte literal delimiter
        assert_eq!(split("a::b::c", "::"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_replace_basic() {
        assert_eq!(
            replace("Hello World Example", "World", "C++"),
            "Hello C++ Example"
        );
    }

    #[test]
    fn test_replace_no_rescan() {
        // The replacement is never re-scanned even when it contains the
        // search string
        assert_eq!(replace("ab", "b", "bb"), "abb");
        assert_eq!(replace("aaa", "aa", "a"), "aa");
        assert_eq!(replace("x", "", "y"), "x");
        assert_eq!(replace("none here", "zzz", "!"), "none here");
    }

    #[test]
    fn test_word_frequency() {
        let text =
            "This is a test. This test is to demonstrate word frequency. Is this working?";
        let frequency = word_frequency(text);

        assert_eq!(frequency["this"], 3);
        assert_eq!(frequency["is"], 3);
        assert_eq!(frequency["test"], 2);
        assert_eq!(frequency["working"], 1);
        assert!(!frequency.contains_key("This"));
    }

    #[test]
    fn test_word_frequency_empty() {
        assert!(word_frequency("").is_empty());
        assert!(word_frequency("... !!! ???").is_empty());
    }
}
