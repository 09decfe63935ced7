pub mod constituency;
pub mod locator;
pub mod probe;
pub mod rules;
pub mod shapes;
pub mod tree;

use lexis_protocol::{DocumentId, Layers, PhraseNode, Sentence, Token, TaggedDocument};
use log::{debug, warn};

pub use locator::locate;
pub use rules::{Pass, Rule, PIPELINE};
pub use tree::{parse_tree, TreeError};

/// Tags POS-tagged sentences with the enabled layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tagger {
    layers: Layers,
}

impl Tagger {
    pub fn new(layers: Layers) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> Layers {
        self.layers
    }

    /// Primary entry point: one `word_TAG word_TAG ...` line -> tagged tokens.
    /// The tree is only consulted when the constituency layer is enabled.
    pub fn tag_sentence(&self, line: &str, tree: Option<&PhraseNode>) -> Vec<Token> {
        let mut sentence = Sentence::parse(line);
        rules::run(&mut sentence, self.layers);
        if let Some(tree) = tree.filter(|_| self.layers.contains(Layers::CONSTITUENCY)) {
            constituency::apply(&mut sentence, tree);
        }
        sentence.into_tokens()
    }

    /// Tags every non-blank line of `text` as a sentence. The k-th non-blank line of `trees`
    /// belongs to the k-th sentence; a tree that does not parse is reported and skipped.
    pub fn tag_document(&self, id: DocumentId, name: &str, text: &str, trees: Option<&str>) -> TaggedDocument {
        let mut trees = trees
            .filter(|_| self.layers.contains(Layers::CONSTITUENCY))
            .into_iter()
            .flat_map(str::lines)
            .filter(|l| !l.trim().is_empty());
        let sentences: Vec<Vec<Token>> = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(k, line)| {
                let tree = trees.next().and_then(|raw| match parse_tree(raw) {
                    Ok(tree) => Some(tree),
                    Err(e) => {
                        warn!("{name}: sentence {}: {e}; tagged without tree rules", k + 1);
                        None
                    }
                });
                self.tag_sentence(line, tree.as_ref())
            })
            .collect();
        debug!("{name} ({id}): {} sentences tagged", sentences.len());
        TaggedDocument {
            id,
            name: name.to_string(),
            layers: self.layers,
            sentences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_passive() {
        let tagger = Tagger::new(Layers::SIMPLE);
        let tokens = tagger.tag_sentence("the_DT report_NN is_VBZ eaten_VBN", None);
        assert!(tokens[3].is_exactly("PASS"));
    }

    #[test]
    fn test_tree_requires_constituency_layer() {
        let line = "walking_VBG home_NN ,_, we_PRP talked_VBD";
        let tree = parse_tree("(S (S (VP (VBG walking) (NP (NN home)))) (, ,) (NP (PRP we)) (VP (VBD talked)))")
            .expect("tree");

        let with = Tagger::new(Layers::all()).tag_sentence(line, Some(&tree));
        assert!(with[0].is_exactly("PRESP"));

        let without = Tagger::new(Layers::SIMPLE).tag_sentence(line, Some(&tree));
        assert!(!without[0].is_exactly("PRESP"));
    }

    #[test]
    fn test_tag_document() {
        let text = "the_DT man_NN sitting_VBG there_RB\n\nwe_PRP left_VBD ._.\n";
        let trees = "(NP (NP (DT the) (NN man)) (VP (VBG sitting) (ADVP (RB there))))\n(S (NP we) (VP left\n";
        let doc = Tagger::new(Layers::all()).tag_document(DocumentId::new(3), "a.txt", text, Some(trees));
        assert_eq!(doc.id, DocumentId::new(3));
        assert_eq!(doc.name, "a.txt");
        assert_eq!(doc.sentences.len(), 2);
        assert!(doc.sentences[0][2].is_exactly("WZPRES"));
        // Malformed second tree: the sentence is still tagged
        assert_eq!(doc.sentences[1].len(), 3);
        assert!(doc.sentences[1][0].has("PP1P"));
    }

    #[test]
    fn test_proper_noun_keeps_nnp_under_extended() {
        let tokens = Tagger::new(Layers::SIMPLE | Layers::EXTENDED).tag_sentence("John_NNP said_VBD it_PRP", None);
        assert!(tokens[0].is_exactly("NN"));
        assert!(tokens[0].has("NNP"));
        assert!(!tokens[0].has("NNother"));
    }

    #[test]
    fn test_tag_document_without_trees() {
        let doc = Tagger::default().tag_document(DocumentId::new(0), "b.txt", "yes_UH\n", None);
        assert_eq!(render(&doc.sentences[0]), vec!["yes_DMA"]);
    }

    fn tagged_line() -> impl Strategy<Value = String> {
        let word = prop::sample::select(vec![
            "the_DT", "a_DT", "report_NN", "is_VBZ", "was_VBD", "eaten_VBN", "not_RB", "he_PRP",
            "it_PRP", "that_IN", "to_TO", "go_VB", "very_RB", "big_JJ", "?_.", ",_,", "and_CC",
            "have_VBP", "you_PRP", "going_VBG", "well_UH", "orphan",
        ]);
        prop::collection::vec(word, 0..16).prop_map(|words| words.join(" "))
    }

    proptest! {
        #[test]
        fn prop_tagging_is_deterministic(line in tagged_line()) {
            let tagger = Tagger::new(Layers::SIMPLE | Layers::EXTENDED);
            prop_assert_eq!(tagger.tag_sentence(&line, None), tagger.tag_sentence(&line, None));
        }

        #[test]
        fn prop_padding_is_transparent(line in tagged_line()) {
            let tokens = Tagger::default().tag_sentence(&line, None);
            prop_assert!(tokens.iter().all(|t| !t.is_pad()));
            let original: Vec<String> = line.split(' ').filter(|w| !w.is_empty()).map(|w| Token::parse(w).word).collect();
            let kept: Vec<String> = tokens.into_iter().map(|t| t.word).collect();
            prop_assert_eq!(kept, original);
        }
    }
}
