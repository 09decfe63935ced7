#![no_std]

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod document;
pub mod ids;
pub mod layers;
pub mod sentence;
pub mod token;
pub mod tree;

pub use document::{TaggedCorpus, TaggedDocument};
pub use ids::DocumentId;
pub use layers::Layers;
pub use sentence::{Sentence, PAD_WIDTH};
pub use token::Token;
pub use tree::PhraseNode;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_token_parse() {
        let t = Token::parse("eaten_VBN");
        assert_eq!(t.word, "eaten");
        assert_eq!(t.primary, "VBN");

        // The tag begins after the last underscore
        let t = Token::parse("@some_user_NN");
        assert_eq!(t.word, "@some_user");
        assert_eq!(t.primary, "NN");

        // No separator: kept, but untagged
        let t = Token::parse("orphan");
        assert_eq!(t.word, "orphan");
        assert!(!t.is_tagged());
        assert!(!t.is(""));
        assert!(!t.word_is("orphan"));
        assert!(!t.is_punct());
    }

    #[test]
    fn test_retag_keeps_secondary() {
        let mut t = Token::parse("well_UH");
        t.append("ELAB");
        t.retag("DMA");
        assert_eq!(t.to_string(), "well_DMA ELAB");
    }

    #[test]
    fn test_append_is_a_set() {
        let mut t = Token::parse("that_DT");
        t.append("DEMO");
        t.append("DEMO");
        assert_eq!(t.secondary, vec!["DEMO".to_string()]);
        assert!(t.has("DT"));
        assert!(t.has("DEMO"));
    }

    #[test]
    fn test_append_ignores_primary() {
        let mut t = Token::parse("John_NNP");
        t.append("NNP");
        t.retag("NN");
        assert_eq!(t.to_string(), "John_NN NNP");
    }

    #[test]
    fn test_tag_predicates() {
        let t = Token::parse("Said_VBD");
        assert!(t.word_is("said"));
        assert!(t.is("V"));
        assert!(t.is("VBD"));
        assert!(!t.is_exactly("VB"));
        assert!(Token::parse("'s_VBZ").word_is("s"));
        assert!(Token::parse("’re_VBP").word_is("re"));
        assert!(!Token::parse("'_POS").word_is(""));
        assert!(Token::parse(",_,").is_punct());
        assert!(Token::parse("(_-LRB-").is_punct());
        assert!(!Token::parse("x_NN").is_punct());
    }

    #[test]
    fn test_parse_tagged_line() {
        let t = Token::parse_tagged("well_DMA ELAB").expect("token");
        assert_eq!(t.primary, "DMA");
        assert_eq!(t.secondary, vec!["ELAB".to_string()]);
        assert_eq!(t.tags().collect::<Vec<_>>(), vec!["DMA", "ELAB"]);
        assert!(Token::parse_tagged("   ").is_none());
    }

    #[test]
    fn test_sentence_padding() {
        let mut s = Sentence::parse("he_PRP  was_VBD jogging_VBG");
        assert_eq!(s.len(), 3);
        assert_eq!(s.range(), PAD_WIDTH..PAD_WIDTH + 3);
        assert_eq!(s.words(), vec!["he", "was", "jogging"]);

        let first = s.range().start;
        assert!(s.at(first, -1).is_pad());
        assert!(s.at(first, -100).is_pad());
        assert!(s.at(first, 1_000).is_pad());

        // Mutating a pad is a no-op
        s.retag(first, -1, "NN");
        assert!(s.at(first, -1).is_pad());

        let tokens = s.into_tokens();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| !t.is_pad()));
    }

    #[test]
    fn test_tree_leaves_and_search() {
        let tree = PhraseNode::new(
            "S",
            vec![
                PhraseNode::new("NP", vec![PhraseNode::new("PRP", vec![PhraseNode::leaf("he")])]),
                PhraseNode::new(
                    "VP",
                    vec![
                        PhraseNode::new("VBD", vec![PhraseNode::leaf("saw")]),
                        PhraseNode::new("NP", vec![PhraseNode::new("PRP", vec![PhraseNode::leaf("it")])]),
                    ],
                ),
            ],
        );
        assert_eq!(tree.leaves(), vec!["he", "saw", "it"]);
        let nps = tree.find_all("NP");
        assert_eq!(nps.len(), 2);
        assert_eq!(nps[0].leaves(), vec!["he"]);
        assert_eq!(nps[1].leaves(), vec!["it"]);
        assert!(nps[0].child(0).is_some_and(PhraseNode::is_preterminal));
    }

    #[test]
    fn test_token_serialization() {
        let mut original = Token::parse("eaten_VBN");
        original.append("PASS");

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Token");
        let deserialized: Token = from_bytes(&bytes).expect("Failed to deserialize Token");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_document_serialization() {
        let original = TaggedDocument {
            id: DocumentId::new(7),
            name: "a.txt".to_string(),
            layers: Layers::SIMPLE | Layers::CONSTITUENCY,
            sentences: vec![vec![Token::parse("yes_DMA")]],
        };

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize TaggedDocument");
        let deserialized: TaggedDocument = from_bytes(&bytes).expect("Failed to deserialize TaggedDocument");

        assert_eq!(original, deserialized);
        assert_eq!(deserialized.layers, Layers::SIMPLE | Layers::CONSTITUENCY);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<DocumentId>(), 4);
        assert_eq!(DocumentId::new(7).to_string(), "#7");
    }
}
