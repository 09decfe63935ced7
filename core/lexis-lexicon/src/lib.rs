//! Closed lexical sets consulted by the tagging rules.
//!
//! The tables are plain word forms; tag constraints (`_V`, `_N` ...) are checked by the rules
//! themselves. Everything is built once and shared read-only through [`Lexicon::global`].

pub mod adjectives;
pub mod adverbs;
pub mod closed;
pub mod nouns;
pub mod verbs;

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A set of lower-case word forms with case-insensitive lookup.
#[derive(Debug, Clone, Default)]
pub struct WordSet(HashSet<&'static str>);

impl WordSet {
    pub fn new(words: &[&'static str]) -> Self {
        Self(words.iter().copied().collect())
    }

    pub fn union(tables: &[&[&'static str]]) -> Self {
        Self(tables.iter().flat_map(|t| t.iter().copied()).collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        let folded = if word.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(word.to_ascii_lowercase())
        } else {
            Cow::Borrowed(word)
        };
        self.0.contains(folded.as_ref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct ClosedClass {
    pub wh_words: WordSet,
    pub wh_relatives: WordSet,
    pub wh_question_words: WordSet,
    pub prepositions: WordSet,
    pub function_words: WordSet,
}

pub struct Verbs {
    pub public: WordSet,
    pub private: WordSet,
    pub suasive: WordSet,
    pub stative: WordSet,
    pub activity: WordSet,
    pub communication: WordSet,
    pub mental: WordSet,
    pub causation: WordSet,
    pub occurrence: WordSet,
    pub existence: WordSet,
    pub aspectual: WordSet,
    pub factive: WordSet,
    pub likelihood: WordSet,
    pub attitude: WordSet,
    pub to_desire: WordSet,
    pub to_effort: WordSet,
    pub to_probability: WordSet,
    pub to_speech: WordSet,
    pub to_mental: WordSet,
}

pub struct Nouns {
    pub human: WordSet,
    pub cognitive: WordSet,
    pub concrete: WordSet,
    pub technical: WordSet,
    pub place: WordSet,
    pub quantity: WordSet,
    pub group: WordSet,
    pub abstract_process: WordSet,
    pub that_nonfactive: WordSet,
    pub that_attitude: WordSet,
    pub that_factive: WordSet,
    pub that_likelihood: WordSet,
    pub to_stance: WordSet,
    pub stance_prepositional: WordSet,
}

pub struct Adjectives {
    pub size: WordSet,
    pub time: WordSet,
    pub color: WordSet,
    pub evaluative: WordSet,
    pub relational: WordSet,
    pub topical: WordSet,
    pub attitudinal: WordSet,
    pub epistemic: WordSet,
    pub that_factive: WordSet,
    pub that_likelihood: WordSet,
    pub that_evaluative: WordSet,
    pub to_certainty: WordSet,
    pub to_ability: WordSet,
    pub to_affect: WordSet,
    pub to_ease: WordSet,
    pub to_evaluative: WordSet,
}

pub struct Adverbs {
    pub nonfactive: WordSet,
    pub attitudinal: WordSet,
    pub factive: WordSet,
    pub likelihood: WordSet,
}

/// Every lexical table, grouped by word class.
pub struct Lexicon {
    pub closed: ClosedClass,
    pub verbs: Verbs,
    pub nouns: Nouns,
    pub adjectives: Adjectives,
    pub adverbs: Adverbs,
}

static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::build);

impl Lexicon {
    /// The process-wide lexicon, built on first use.
    pub fn global() -> &'static Lexicon {
        &LEXICON
    }

    fn build() -> Self {
        Self {
            closed: ClosedClass {
                wh_words: WordSet::new(closed::WH_WORDS),
                wh_relatives: WordSet::new(closed::WH_RELATIVES),
                wh_question_words: WordSet::new(closed::WH_QUESTION_WORDS),
                prepositions: WordSet::new(closed::PREPOSITIONS),
                function_words: WordSet::new(closed::FUNCTION_WORDS),
            },
            verbs: Verbs {
                public: WordSet::new(verbs::PUBLIC),
                private: WordSet::new(verbs::PRIVATE),
                suasive: WordSet::new(verbs::SUASIVE),
                stative: WordSet::new(verbs::STATIVE),
                activity: WordSet::new(verbs::ACTIVITY),
                communication: WordSet::new(verbs::COMMUNICATION),
                mental: WordSet::new(verbs::MENTAL),
                causation: WordSet::new(verbs::CAUSATION),
                occurrence: WordSet::new(verbs::OCCURRENCE),
                existence: WordSet::new(verbs::EXISTENCE),
                aspectual: WordSet::new(verbs::ASPECTUAL),
                factive: WordSet::new(verbs::FACTIVE),
                likelihood: WordSet::new(verbs::LIKELIHOOD),
                attitude: WordSet::new(verbs::ATTITUDE),
                to_desire: WordSet::new(verbs::TO_DESIRE),
                to_effort: WordSet::new(verbs::TO_EFFORT),
                to_probability: WordSet::new(verbs::TO_PROBABILITY),
                to_speech: WordSet::new(verbs::TO_SPEECH),
                to_mental: WordSet::new(verbs::TO_MENTAL),
            },
            nouns: Nouns {
                human: WordSet::new(nouns::HUMAN),
                cognitive: WordSet::new(nouns::COGNITIVE),
                concrete: WordSet::new(nouns::CONCRETE),
                technical: WordSet::new(nouns::TECHNICAL),
                place: WordSet::new(nouns::PLACE),
                quantity: WordSet::new(nouns::QUANTITY),
                group: WordSet::new(nouns::GROUP),
                abstract_process: WordSet::new(nouns::ABSTRACT_PROCESS),
                that_nonfactive: WordSet::new(nouns::THAT_NONFACTIVE),
                that_attitude: WordSet::new(nouns::THAT_ATTITUDE),
                that_factive: WordSet::new(nouns::THAT_FACTIVE),
                that_likelihood: WordSet::new(nouns::THAT_LIKELIHOOD),
                to_stance: WordSet::new(nouns::TO_STANCE),
                stance_prepositional: WordSet::new(nouns::STANCE_PREPOSITIONAL),
            },
            adjectives: Adjectives {
                size: WordSet::new(adjectives::SIZE),
                time: WordSet::new(adjectives::TIME),
                color: WordSet::new(adjectives::COLOR),
                evaluative: WordSet::new(adjectives::EVALUATIVE),
                relational: WordSet::new(adjectives::RELATIONAL),
                topical: WordSet::new(adjectives::TOPICAL),
                attitudinal: WordSet::new(adjectives::ATTITUDINAL),
                epistemic: WordSet::new(adjectives::EPISTEMIC),
                that_factive: WordSet::new(adjectives::THAT_FACTIVE),
                that_likelihood: WordSet::new(adjectives::THAT_LIKELIHOOD),
                that_evaluative: WordSet::new(adjectives::THAT_EVALUATIVE),
                to_certainty: WordSet::new(adjectives::TO_CERTAINTY),
                to_ability: WordSet::new(adjectives::TO_ABILITY),
                to_affect: WordSet::new(adjectives::TO_AFFECT),
                to_ease: WordSet::new(adjectives::TO_EASE),
                to_evaluative: WordSet::new(adjectives::TO_EVALUATIVE),
            },
            adverbs: Adverbs {
                nonfactive: WordSet::new(adverbs::NONFACTIVE),
                attitudinal: WordSet::new(adverbs::ATTITUDINAL),
                factive: WordSet::new(adverbs::FACTIVE),
                likelihood: WordSet::new(adverbs::LIKELIHOOD),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lookup_ignores_case() {
        let lex = Lexicon::global();
        assert!(lex.verbs.public.contains("said"));
        assert!(lex.verbs.public.contains("SAID"));
        assert!(lex.verbs.public.contains("Said"));
        assert!(!lex.verbs.public.contains("sai"));
    }

    #[test]
    fn test_tables_are_lower_case() {
        let tables: &[&[&str]] = &[
            closed::FUNCTION_WORDS,
            verbs::PRIVATE,
            verbs::ACTIVITY,
            nouns::HUMAN,
            nouns::ABSTRACT_PROCESS,
            adjectives::EPISTEMIC,
        ];
        for word in tables.iter().flat_map(|t| t.iter()) {
            assert_eq!(*word, word.to_lowercase(), "table entry {word:?} is not lower case");
        }
    }

    #[test]
    fn test_optional_prefixes_expanded() {
        let lex = Lexicon::global();
        assert!(lex.adjectives.attitudinal.contains("aware"));
        assert!(lex.adjectives.attitudinal.contains("unaware"));
        assert!(lex.adjectives.to_ability.contains("unwilling"));
        assert!(lex.adjectives.color.contains("grey"));
        assert!(lex.adjectives.color.contains("gray"));
    }

    #[test]
    fn test_union() {
        let set = WordSet::union(&[adverbs::FACTIVE, adverbs::LIKELIHOOD]);
        assert!(set.contains("indeed"));
        assert!(set.contains("perhaps"));
        assert_eq!(set.len(), adverbs::FACTIVE.len() + adverbs::LIKELIHOOD.len());
    }

    proptest! {
        #[test]
        fn test_any_casing_of_a_member_matches(index in 0usize..closed::PREPOSITIONS.len(), mask in any::<u32>()) {
            let word = closed::PREPOSITIONS[index];
            let mixed: String = word
                .chars()
                .enumerate()
                .map(|(i, c)| if mask & (1 << (i % 32)) != 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert!(Lexicon::global().closed.prepositions.contains(&mixed));
        }
    }
}
