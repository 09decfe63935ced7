use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A word form with one primary tag and any number of secondary feature tags.
///
/// An empty `primary` marks a malformed input token (no `word_TAG` separator).
/// Every tag predicate is false on such a token, so rules simply skip it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Token {
    pub word: String,
    pub primary: String,
    pub secondary: Vec<String>,
}

impl Token {
    pub fn new(word: impl Into<String>, primary: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            primary: primary.into(),
            secondary: Vec::new(),
        }
    }

    /// Sentinel used to bracket a sentence; matches nothing.
    pub const fn pad() -> Self {
        Self {
            word: String::new(),
            primary: String::new(),
            secondary: Vec::new(),
        }
    }

    /// Parses one POS-tagger token of the form `word_TAG`.
    /// The tag starts after the last underscore so `@some_user_NN` keeps its word intact.
    pub fn parse(raw: &str) -> Self {
        match raw.rsplit_once('_') {
            Some((word, tag)) if !word.is_empty() => Self::new(word, tag),
            _ => Self::new(raw, ""),
        }
    }

    /// Parses one line of tagged output: `word_PRIMARY SECONDARY...`.
    pub fn parse_tagged(line: &str) -> Option<Self> {
        let mut pieces = line.split_whitespace();
        let mut token = Self::parse(pieces.next()?);
        token.secondary.extend(pieces.map(ToString::to_string));
        Some(token)
    }

    pub fn is_pad(&self) -> bool {
        self.word.is_empty() && self.primary.is_empty()
    }

    pub fn is_tagged(&self) -> bool {
        !self.primary.is_empty()
    }

    /// The word form without leading apostrophes: the clitics `'s`, `'re` and `'ll`
    /// compare equal to `s`, `re` and `ll`.
    pub fn bare_word(&self) -> &str {
        self.word.trim_start_matches(['\'', '\u{2019}'])
    }

    /// Case-insensitive whole-word comparison on [`Token::bare_word`].
    pub fn word_is(&self, word: &str) -> bool {
        let bare = self.bare_word();
        self.is_tagged() && !bare.is_empty() && bare.eq_ignore_ascii_case(word)
    }

    pub fn word_is_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.word_is(w))
    }

    /// Primary tag starts with `prefix` (`"V"` matches `VBD`, `VBN`, `VPRT` ...).
    pub fn is(&self, prefix: &str) -> bool {
        self.is_tagged() && self.primary.starts_with(prefix)
    }

    pub fn is_any(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|p| self.is(p))
    }

    pub fn is_exactly(&self, tag: &str) -> bool {
        self.is_tagged() && self.primary == tag
    }

    /// Tag present anywhere in the tag list, primary or secondary.
    pub fn has(&self, tag: &str) -> bool {
        self.is_exactly(tag) || self.secondary.iter().any(|t| t == tag)
    }

    pub fn has_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|t| self.has(t))
    }

    pub fn has_secondary(&self) -> bool {
        !self.secondary.is_empty()
    }

    /// Punctuation tags start with a non-word character (`.`, `,`, `:`, `` ` ``, `-LRB-` ...).
    pub fn is_punct(&self) -> bool {
        self.primary
            .chars()
            .next()
            .is_some_and(|c| !(c.is_alphanumeric() || c == '_'))
    }

    /// Replaces the primary tag. Secondary tags survive reclassification.
    pub fn retag(&mut self, tag: &str) {
        if self.is_pad() {
            return;
        }
        self.primary.clear();
        self.primary.push_str(tag);
    }

    /// Appends a secondary tag unless it is already among the secondaries. The primary tag is
    /// not consulted: `Paris_NNP` may record `NNP` before the primary collapses to `NN`.
    pub fn append(&mut self, tag: &str) {
        if self.is_pad() || self.secondary.iter().any(|t| t == tag) {
            return;
        }
        self.secondary.push(tag.to_string());
    }

    /// Iterates over the primary tag (if any) followed by the secondary tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        let primary = self.is_tagged().then_some(self.primary.as_str());
        primary.into_iter().chain(self.secondary.iter().map(String::as_str))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)?;
        if self.is_tagged() {
            write!(f, "_{}", self.primary)?;
        }
        for tag in &self.secondary {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}
