//! Token predicates shared by the rule passes.

use lexis_lexicon::{Lexicon, WordSet};
use lexis_protocol::Token;

pub fn lexicon() -> &'static Lexicon {
    Lexicon::global()
}

/// Word form in `set` (apostrophes stripped, any case). Untagged tokens never match.
pub fn in_set(t: &Token, set: &WordSet) -> bool {
    t.is_tagged() && set.contains(t.bare_word())
}

/// Word form in `set` and primary tag starting with `prefix`.
pub fn in_set_as(t: &Token, set: &WordSet, prefix: &str) -> bool {
    t.is(prefix) && set.contains(t.bare_word())
}

/// Forms of BE, including the clitics `'s`, `'m`, `'re` and `been` already retagged as
/// `PASS`/`PEAS`.
pub fn is_be(t: &Token) -> bool {
    (t.is("V") && t.word_is_any(&["be", "am", "is", "are", "was", "were", "been", "being", "m", "re"]))
        || (t.is("VBZ") && t.word_is("s"))
        || (t.is("P") && t.word_is("been"))
}

pub fn is_have(t: &Token) -> bool {
    (t.is("V") && t.word_is_any(&["have", "has", "ve", "had", "having", "d"]))
        || t.word_is("hath")
        || (t.is("VBZ") && t.word_is("s"))
}

pub fn is_do(t: &Token) -> bool {
    (t.is("V") && t.word_is_any(&["do", "does", "did", "done", "doing"]))
        || (t.is("P") && t.word_is_any(&["doing", "done"]))
}

/// BE, HAVE, DO or a modal.
pub fn is_aux(t: &Token) -> bool {
    is_be(t) || is_have(t) || is_do(t) || t.is("MD")
}

/// Question words: `what`, `where`, `who`, `which` ...
pub fn is_wh(t: &Token) -> bool {
    in_set(t, &lexicon().closed.wh_question_words)
}

/// Subordinating WH-words: `whether`, `whoever`, `whatever` ...
pub fn is_wh_subordinator(t: &Token) -> bool {
    in_set(t, &lexicon().closed.wh_words)
}

/// Relative WH-pronouns: `who`, `whom`, `whose`, `which`.
pub fn is_wh_relative(t: &Token) -> bool {
    in_set(t, &lexicon().closed.wh_relatives)
}

pub fn is_preposition(t: &Token) -> bool {
    in_set(t, &lexicon().closed.prepositions)
}

/// A sentence-final question mark as tagged by the POS tagger (`?_.`).
pub fn is_question(t: &Token) -> bool {
    t.is_exactly(".") && t.word.ends_with('?')
}

/// A question mark that has not yet collected any feature tag.
pub fn is_bare_question(t: &Token) -> bool {
    is_question(t) && !t.has_secondary()
}

/// Subject pronouns as they appear in inverted clauses (`has he`, `were they`).
pub fn is_subject_pronoun(t: &Token) -> bool {
    t.word_is_any(&["i", "we", "he", "she", "they"]) || (t.is("P") && t.word_is("it"))
}

/// Nominal or pronominal subject of an inverted clause (`has he`, `is the car`).
pub fn is_subject(t: &Token) -> bool {
    t.is("NN") || is_subject_pronoun(t)
}

/// Word ends with `suffix`, ignoring case.
pub fn ends_with(t: &Token, suffix: &str) -> bool {
    let word = t.word.as_bytes();
    let suffix = suffix.as_bytes();
    t.is_tagged() && word.len() >= suffix.len() && word[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Word starts with `prefix`, ignoring case.
pub fn starts_with(t: &Token, prefix: &str) -> bool {
    let word = t.bare_word().as_bytes();
    let prefix = prefix.as_bytes();
    t.is_tagged() && word.len() >= prefix.len() && word[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// A past participle, or an `-ed`/`-en` form the POS tagger took for a past tense.
pub fn is_participle(t: &Token) -> bool {
    t.is("VBN") || (t.is("VBD") && (ends_with(t, "ed") || ends_with(t, "en")))
}

/// The literal clitic spelling, apostrophe included (`'d`, `'ll`, `'em`).
pub fn is_clitic(t: &Token, bare: &str) -> bool {
    t.word_is(bare) && t.word.len() > t.bare_word().len()
}

/// Word form ending in a non-word character (`?`, `!`, `...`).
pub fn ends_in_symbol(t: &Token) -> bool {
    t.is_tagged() && t.word.chars().last().is_some_and(|c| !(c.is_alphanumeric() || c == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auxiliaries() {
        assert!(is_be(&Token::parse("'s_VBZ")));
        assert!(is_have(&Token::parse("'s_VBZ")));
        assert!(!is_be(&Token::parse("'s_POS")));
        assert!(is_be(&Token::parse("been_PEAS")));
        assert!(is_have(&Token::parse("'d_VBD")));
        assert!(!is_have(&Token::parse("'d_MD")));
        assert!(is_do(&Token::parse("Did_VBD")));
        assert!(is_aux(&Token::parse("can_MD")));
        assert!(!is_aux(&Token::parse("can_NN")));
    }

    #[test]
    fn test_question_marks() {
        assert!(is_question(&Token::parse("?_.")));
        assert!(!is_question(&Token::parse("._.")));
        let mut t = Token::parse("?_.");
        t.append("YNQU");
        assert!(is_question(&t));
        assert!(!is_bare_question(&t));
    }

    #[test]
    fn test_spelling_helpers() {
        let t = Token::parse("Finished_VBD");
        assert!(ends_with(&t, "ed"));
        assert!(is_participle(&t));
        assert!(!is_participle(&Token::parse("ran_VBD")));
        assert!(starts_with(&Token::parse("best-looking_JJ"), "best-"));
        assert!(is_clitic(&Token::parse("'d_MD"), "d"));
        assert!(!is_clitic(&Token::parse("d_MD"), "d"));
        assert!(ends_in_symbol(&Token::parse("!_.")));
        assert!(!ends_in_symbol(&Token::parse("ok_JJ")));
    }

    #[test]
    fn test_lexicon_lookups() {
        assert!(is_wh(&Token::parse("Which_WDT")));
        assert!(is_wh_subordinator(&Token::parse("whether_IN")));
        assert!(is_wh_relative(&Token::parse("whom_WP")));
        assert!(is_preposition(&Token::parse("Upon_IN")));
        assert!(in_set_as(&Token::parse("said_VBD"), &lexicon().verbs.public, "V"));
        assert!(!in_set_as(&Token::parse("said_NN"), &lexicon().verbs.public, "V"));
    }
}
