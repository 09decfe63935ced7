//! Alignment of tree spans with the token stream.

/// Parsers and taggers disagree on bracket spelling; both sides are compared in plain form.
fn normalize(word: &str) -> &str {
    match word {
        "-LRB-" => "(",
        "-RRB-" => ")",
        "-LSB-" => "[",
        "-RSB-" => "]",
        "-LCB-" => "{",
        "-RCB-" => "}",
        "``" | "''" => "\"",
        _ => word,
    }
}

/// Start of the first exact contiguous occurrence of `query` in `words`.
///
/// An empty query matches nowhere.
pub fn locate(words: &[&str], query: &[&str]) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    words.windows(query.len()).position(|window| {
        window
            .iter()
            .zip(query)
            .all(|(word, wanted)| normalize(word) == normalize(wanted))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_locate() {
        let words = ["he", "was", "stuffing", "his", "mouth", "with", "cookies"];
        assert_eq!(locate(&words, &["stuffing", "his", "mouth"]), Some(2));
        assert_eq!(locate(&words, &["he"]), Some(0));
        assert_eq!(locate(&words, &["cookies"]), Some(6));
        assert_eq!(locate(&["he", "was", "jogging"], &["running"]), None);
    }

    #[test]
    fn test_locate_edges() {
        let words = ["a", "b", "a", "b"];
        assert_eq!(locate(&words, &["a", "b"]), Some(0));
        assert_eq!(locate(&words, &[]), None);
        assert_eq!(locate(&words, &["a", "b", "a", "b", "a"]), None);
        assert_eq!(locate(&[], &["a"]), None);
    }

    #[test]
    fn test_bracket_spellings() {
        let words = ["an", "(", "aside", ")"];
        assert_eq!(locate(&words, &["-LRB-", "aside", "-RRB-"]), Some(1));
        assert_eq!(locate(&["-LSB-", "1", "-RSB-"], &["[", "1", "]"]), Some(0));
    }

    proptest! {
        #[test]
        fn prop_slices_are_found(words in prop::collection::vec("[a-c]{1,2}", 1..12), start in 0usize..12, len in 1usize..4) {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            let start = start % words.len();
            let end = (start + len).min(words.len());
            let found = locate(&words, &words[start..end]);
            prop_assert!(found.is_some_and(|i| i <= start));
        }

        #[test]
        fn prop_absent_word_is_not_found(words in prop::collection::vec("[a-c]{1,2}", 0..12), query in prop::collection::vec("[a-d]{1,2}", 1..4)) {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            let mut query: Vec<&str> = query.iter().map(String::as_str).collect();
            query.push("zz");
            prop_assert_eq!(locate(&words, &query), None);
            prop_assert_eq!(locate(&words, &query), locate(&words, &query));
        }
    }
}
