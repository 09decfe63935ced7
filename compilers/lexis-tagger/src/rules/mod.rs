//! The rule cascade.
//!
//! A [`Pass`] is one left-to-right scan of the sentence. At every position each rule of the
//! pass runs in declared order against the stream as the earlier rules left it. Passes run in
//! [`PIPELINE`] order; later passes overwrite the primary tags set by earlier, more general
//! ones. The order is data: reordering the table changes the output.

mod basic;
mod clauses;
mod complex;
mod corrections;
mod semantic;

use lexis_protocol::{Layers, Sentence, Token};
use log::trace;
use std::ops::Index;

/// A rule inspects the window around position `i` and mutates the stream if it matches.
pub type Rule = fn(&mut Sentence, usize);

pub struct Pass {
    pub name: &'static str,
    /// Layer that has to be enabled for the pass to run.
    pub layer: Layers,
    pub rules: &'static [Rule],
}

/// Read-only view of the tokens around one position. Offsets outside the sentence read a pad.
#[derive(Clone, Copy)]
pub(crate) struct Window<'a> {
    sentence: &'a Sentence,
    at: usize,
}

impl<'a> Window<'a> {
    pub(crate) fn new(sentence: &'a Sentence, at: usize) -> Self {
        Self { sentence, at }
    }
}

impl Index<isize> for Window<'_> {
    type Output = Token;

    fn index(&self, offset: isize) -> &Token {
        self.sentence.at(self.at, offset)
    }
}

pub static PIPELINE: &[Pass] = &[
    Pass { name: "quick-corrections", layer: Layers::SIMPLE, rules: corrections::QUICK },
    Pass { name: "structural-corrections", layer: Layers::SIMPLE, rules: corrections::STRUCTURAL },
    Pass { name: "complex", layer: Layers::SIMPLE, rules: complex::RULES },
    Pass { name: "questions-and-aspect", layer: Layers::SIMPLE, rules: clauses::QUESTIONS_AND_ASPECT },
    Pass { name: "progressive", layer: Layers::SIMPLE, rules: clauses::PROGRESSIVE },
    Pass { name: "be-main-verb", layer: Layers::SIMPLE, rules: clauses::BE_MAIN_VERB },
    Pass { name: "demonstratives", layer: Layers::SIMPLE, rules: clauses::DEMONSTRATIVES },
    Pass { name: "that-deletion", layer: Layers::SIMPLE, rules: clauses::THAT_DELETION },
    Pass { name: "pronoun-it", layer: Layers::SIMPLE, rules: clauses::PRONOUN_IT },
    Pass { name: "first-person", layer: Layers::SIMPLE, rules: basic::FIRST_PERSON },
    Pass { name: "adverbials", layer: Layers::SIMPLE, rules: basic::ADVERBIALS },
    Pass { name: "lexical-do", layer: Layers::SIMPLE, rules: basic::LEXICAL_DO },
    Pass { name: "basic", layer: Layers::SIMPLE, rules: basic::FINAL },
    Pass { name: "proper-nouns", layer: Layers::EXTENDED, rules: basic::PROPER_NOUNS },
    Pass { name: "nouns", layer: Layers::SIMPLE, rules: basic::NOUNS },
    Pass { name: "complement-clauses", layer: Layers::EXTENDED, rules: semantic::COMPLEMENTS },
    Pass { name: "semantic-classes", layer: Layers::EXTENDED, rules: semantic::CLASSES },
    Pass { name: "residuals-and-sums", layer: Layers::EXTENDED, rules: semantic::RESIDUALS },
];

/// Runs every enabled pass of the pipeline over the sentence.
pub fn run(sentence: &mut Sentence, layers: Layers) {
    for pass in PIPELINE.iter().filter(|p| layers.contains(p.layer)) {
        trace!("pass {}", pass.name);
        for i in sentence.range() {
            for rule in pass.rules {
                rule(sentence, i);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Tags one sentence with the simple layer only.
    pub fn simple(line: &str) -> String {
        tagged(line, Layers::SIMPLE)
    }

    pub fn tagged(line: &str, layers: Layers) -> String {
        let mut sentence = Sentence::parse(line);
        run(&mut sentence, layers);
        render(&sentence)
    }

    /// Runs the rules of a single pass over `line`.
    pub fn pass(rules: &[Rule], line: &str) -> String {
        let mut sentence = Sentence::parse(line);
        for i in sentence.range() {
            for rule in rules {
                rule(&mut sentence, i);
            }
        }
        render(&sentence)
    }

    fn render(sentence: &Sentence) -> String {
        sentence
            .tokens()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// The first token spelled `word` after tagging `line`.
    pub fn token_of(line: &str, layers: Layers, word: &str) -> Token {
        let mut sentence = Sentence::parse(line);
        run(&mut sentence, layers);
        sentence
            .into_tokens()
            .into_iter()
            .find(|t| t.word == word)
            .unwrap_or_else(|| panic!("{word} not in {line}"))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_pass_names_are_unique() {
        let mut names: Vec<_> = PIPELINE.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PIPELINE.len());
    }

    #[test]
    fn test_extended_passes_are_skipped() {
        let simple = token_of("John_NNP said_VBD", Layers::SIMPLE, "John");
        assert_eq!(simple.to_string(), "John_NN");
        let extended = token_of("John_NNP said_VBD", Layers::SIMPLE | Layers::EXTENDED, "John");
        assert!(extended.has("NNP"));
        assert!(extended.is_exactly("NN"));
    }
}
