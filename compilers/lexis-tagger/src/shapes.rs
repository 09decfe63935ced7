//! Surface-shape classifiers for tokens whose category follows from their spelling
//! (emoticons, URLs, hashtags, fillers) rather than from a word list.

use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(https?://www\.|https?://)?\w+([\-.+=&?]\w+)*\.[a-z]{2,5}(:[0-9]{1,5})?(/.*)?|<link/?>|\b\w+\.(com|net|co\.uk|au|us|gov|org)\b",
    )
    .unwrap()
});

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[a-zA-Z0-9]{3,}$").unwrap());

static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|\W)[0-9]+(th|nd|rd)$").unwrap());

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\p{Extended_Pictographic}|\p{Emoji_Modifier}|\u{FE0F}|\u{200D})+$").unwrap()
});

// Bracket emoticons arrive with the POS tagger's bracket escapes (`:-RRB-` for `:-)`).
static EMOTICON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(:-RRB-|:d|:-LRB-|:p|:--RRB-|:-RSB-|\bd:|:'-LRB-|:--LRB-|:-d|:-LSB-|-LSB-:|:-p|:/|:P|:D",
        r"|=-RRB-|=-LRB-|:-D|:-RRB--RRB-|:O|:\]|:-LRB--LRB-|:o|:-O|:-o|;--RRB-|':--RRB--LRB-|:-B",
        r"|8--RRB-|=\||:-\||<3|</3|;P|\bOrz|\borz|\bXD|\bxD|\bUwU|;-\*|;-\)|:-\(|;-\(|:-\(\(",
        r"|:-\)\)|:--\(|:--\))$",
        r"|;-\*|:-\)|\(ツ|\b8-\)$",
    ))
    .unwrap()
});

static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(aw+|ow|oh+|eh+|er+|erm+|mm+|um+|[hu]{2,}|mhm+|hi+|hey+|by+e+|[ha]{2,}|[he]{2,}|[wo]{3,}p?s*|[oi]{2,}|ouch|hum+|hm+)$",
    )
    .unwrap()
});

static QUESTION_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?!]{2,15}").unwrap());

pub fn is_url(word: &str) -> bool {
    URL_RE.is_match(word)
}

pub fn is_hashtag(word: &str) -> bool {
    HASHTAG_RE.is_match(word)
}

/// `4th`, `22nd`, `3rd`.
pub fn is_ordinal(word: &str) -> bool {
    ORDINAL_RE.is_match(word)
}

pub fn is_emoji(word: &str) -> bool {
    EMOJI_RE.is_match(word)
}

/// Emoticons, plus any two-or-more character token the POS tagger marked as `NFP`.
/// Ellipses and `@!` are never emoticons.
pub fn is_emoticon(word: &str, primary: &str) -> bool {
    if word.contains("...") || word.ends_with("@!") {
        return false;
    }
    EMOTICON_RE.is_match(word) || (primary == "NFP" && word.chars().count() >= 2)
}

/// Filled pauses and interjections: `erm`, `uhh`, `hmm`, `woops`, `haha`.
/// The pronoun `he` shares the `[he]{2,}` shape and is excluded.
pub fn is_filler(word: &str) -> bool {
    !word.eq_ignore_ascii_case("he") && FILLER_RE.is_match(word)
}

/// Runs of question and exclamation marks such as `?!?`.
pub fn is_question_run(word: &str) -> bool {
    QUESTION_RUN_RE.is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert!(is_url("https://example.org/page"));
        assert!(is_url("www.bbc.co.uk"));
        assert!(is_url("<link>"));
        assert!(!is_url("e.g."));
        assert!(!is_url("running"));
    }

    #[test]
    fn test_hashtags_and_ordinals() {
        assert!(is_hashtag("#rustlang"));
        assert!(!is_hashtag("#1"));
        assert!(is_ordinal("4th"));
        assert!(is_ordinal("22nd"));
        assert!(!is_ordinal("fourth"));
    }

    #[test]
    fn test_emoji() {
        assert!(is_emoji("😀"));
        assert!(is_emoji("👍🏽"));
        assert!(!is_emoji("smile"));
        assert!(!is_emoji(":)"));
    }

    #[test]
    fn test_emoticons() {
        assert!(is_emoticon(":-RRB-", "JJ"));
        assert!(is_emoticon("<3", "CD"));
        assert!(is_emoticon("xD", "NN"));
        assert!(is_emoticon("^^", "NFP"));
        assert!(!is_emoticon("...", "NFP"));
        assert!(!is_emoticon("-", "NFP"));
    }

    #[test]
    fn test_fillers() {
        for word in ["erm", "Uhh", "hmm", "haha", "woops", "oi", "ouch"] {
            assert!(is_filler(word), "{word} should be a filler");
        }
        for word in ["he", "her", "humble", "hello", "who"] {
            assert!(!is_filler(word), "{word} should not be a filler");
        }
    }
}
