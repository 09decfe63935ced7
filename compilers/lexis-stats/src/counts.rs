//! Per-document counts: scalar features, nominal and verbal totals, tag frequencies.

use std::collections::{BTreeMap, HashSet};

use lexis_lexicon::Lexicon;
use lexis_protocol::Token;
use log::debug;

use crate::StatsError;

/// Number of leading words the type-token ratio is computed over.
pub const DEFAULT_TTR_WINDOW: usize = 400;

/// Tagged tokens that are not words: symbols, possessive `'s`, filled pauses, hyphens.
const NOT_WORDS: &[&str] = &["SYM", "POS", "FPUH", "HYPH"];
/// Further excluded from average word length.
const NOT_MEASURED: &[&str] = &["AFX", "NFP"];

const FINITE_VERBS: &[&str] = &["VPRT", "VBD", "VIMP", "MDCA", "MDCO", "MDMM", "MDNE", "MDWO", "MDWS"];

/// Primary tags that are never counted, by prefix and exactly.
const UNCOUNTED_PREFIXES: &[&str] = &["LS", "FW", "SYM", "WQ", "LIKE", "SO"];
const UNCOUNTED: &[&str] = &["WP", "MD", "VB"];

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCounts {
    pub name: String,
    pub words: usize,
    /// Average word length in characters.
    pub awl: f64,
    /// Type-token ratio over the first words of the document.
    pub ttr: f64,
    /// Lexical density: share of words that are not function words.
    pub lde: f64,
    /// Tokens tagged `NN`.
    pub nouns: usize,
    /// Finite verb phrases, approximated by finite verb and modal tags.
    pub verbs: usize,
    pub tags: BTreeMap<String, u32>,
}

impl DocumentCounts {
    /// Frequency of `tag`; absent tags count 0.
    pub fn count(&self, tag: &str) -> u32 {
        self.tags.get(tag).copied().unwrap_or(0)
    }
}

fn is_word(t: &Token) -> bool {
    t.is_tagged() && !t.is_punct() && !NOT_WORDS.contains(&t.primary.as_str())
}

fn is_function_word(t: &Token) -> bool {
    let words = &Lexicon::global().closed.function_words;
    words.contains(&t.word) || words.contains(t.bare_word())
}

/// Tags of `t` that enter the frequency table.
///
/// The `WQ` of a WH-question mark stands in for `YNQU` and `QUTAG`, which are not counted
/// on such a token.
fn counted_tags(t: &Token) -> impl Iterator<Item = &str> {
    let wh_question = t.has("WQ");
    let primary = (t.is_tagged()
        && !t.is_punct()
        && !t.is_any(UNCOUNTED_PREFIXES)
        && !UNCOUNTED.iter().any(|tag| t.is_exactly(tag)))
    .then_some(t.primary.as_str());
    let secondary = t
        .secondary
        .iter()
        .map(String::as_str)
        .filter(move |tag| t.is_tagged() && !(wh_question && matches!(*tag, "YNQU" | "QUTAG")));
    primary.into_iter().chain(secondary)
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Counts one tagged document. The type-token ratio uses the first `ttr_window` words, or
/// all of them when the document is shorter.
pub fn count_document<'a>(
    name: &str,
    tokens: impl IntoIterator<Item = &'a Token>,
    ttr_window: usize,
) -> Result<DocumentCounts, StatsError> {
    let tokens: Vec<&Token> = tokens.into_iter().collect();
    let words: Vec<&Token> = tokens.iter().copied().filter(|t| is_word(t)).collect();
    if words.is_empty() {
        return Err(StatsError::EmptyDocument(name.to_string()));
    }

    let lengths: Vec<usize> = words
        .iter()
        .filter(|t| !NOT_MEASURED.contains(&t.primary.as_str()))
        .map(|t| t.word.chars().count())
        .collect();
    let window = &words[..words.len().min(ttr_window.max(1))];
    let types: HashSet<String> = window.iter().map(|t| t.word.to_lowercase()).collect();
    let function_words = words.iter().filter(|t| is_function_word(t)).count();

    let mut tags = BTreeMap::new();
    for tag in tokens.iter().copied().flat_map(counted_tags) {
        *tags.entry(tag.to_string()).or_insert(0) += 1;
    }

    let counts = DocumentCounts {
        name: name.to_string(),
        words: words.len(),
        awl: ratio(lengths.iter().sum(), lengths.len()),
        ttr: ratio(types.len(), window.len()),
        lde: ratio(words.len() - function_words, words.len()),
        nouns: tokens.iter().filter(|t| t.is_exactly("NN")).count(),
        verbs: tokens
            .iter()
            .filter(|t| FINITE_VERBS.iter().any(|tag| t.is_exactly(tag)))
            .count(),
        tags,
    };
    debug!(
        "{name}: {} words, {} nouns, {} finite verbs, {} distinct tags",
        counts.words,
        counts.nouns,
        counts.verbs,
        counts.tags.len()
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(lines: &[&str]) -> Vec<Token> {
        lines.iter().filter_map(|l| Token::parse_tagged(l)).collect()
    }

    #[test]
    fn test_scalar_features() {
        let doc = tokens(&["The_DT", "cat_NN NNother", "sat_VBD", "._.", "'s_POS", "erm_FPUH"]);
        let counts = count_document("a.txt", &doc, DEFAULT_TTR_WINDOW).expect("counts");
        assert_eq!(counts.words, 3);
        assert_eq!(counts.awl, 3.0);
        assert_eq!(counts.ttr, 1.0);
        // `the` is a function word
        assert!((counts.lde - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(counts.nouns, 1);
        assert_eq!(counts.verbs, 1);
    }

    #[test]
    fn test_ttr_window() {
        let doc = tokens(&["it_PIT", "It_PIT", "rained_VBD", "rained_VBD"]);
        assert_eq!(count_document("a", &doc, 2).expect("counts").ttr, 0.5);
        assert_eq!(count_document("a", &doc, 3).expect("counts").ttr, 2.0 / 3.0);
        assert_eq!(count_document("a", &doc, 400).expect("counts").ttr, 0.5);
    }

    #[test]
    fn test_tag_frequencies() {
        let doc = tokens(&[
            "well_DMA ELAB",
            "what_WHQU",
            "is_VPRT",
            "it_PIT",
            "?_. WQ YNQU",
            "go_VB",
            "like_LIKE",
            "1_LS",
            "are_VPRT",
            "you_PP2",
            "?_. YNQU",
        ]);
        let counts = count_document("a", &doc, 400).expect("counts");
        assert_eq!(counts.count("DMA"), 1);
        assert_eq!(counts.count("ELAB"), 1);
        assert_eq!(counts.count("VPRT"), 2);
        assert_eq!(counts.count("YNQU"), 1);
        assert_eq!(counts.count("WQ"), 1);
        assert_eq!(counts.count("VB"), 0);
        assert_eq!(counts.count("LIKE"), 0);
        assert_eq!(counts.count("LS"), 0);
        assert_eq!(counts.count("."), 0);
        assert_eq!(counts.verbs, 2);
    }

    #[test]
    fn test_empty_document() {
        let doc = tokens(&["._.", ",_,", "orphan"]);
        assert!(matches!(
            count_document("empty.txt", &doc, 400),
            Err(StatsError::EmptyDocument(name)) if name == "empty.txt"
        ));
    }
}
