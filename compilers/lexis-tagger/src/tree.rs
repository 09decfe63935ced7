//! Reader for bracketed phrase-structure trees: `(ROOT (S (NP (PRP he)) (VP (VBD ran))))`.

use lexis_protocol::PhraseNode;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many0,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("empty tree line")]
    Empty,
    #[error("malformed tree at byte {offset}")]
    Syntax { offset: usize },
    #[error("unexpected input after the tree at byte {offset}")]
    Trailing { offset: usize },
}

/// A label or a word: anything up to whitespace or a bracket.
fn atom(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')')(input)
}

fn node(input: &str) -> IResult<&str, PhraseNode> {
    let (input, _) = char('(')(input)?;
    // Penn Treebank files wrap each tree in an unlabelled root: `( (S ...))`
    let (input, label) = map(preceded(multispace0, opt(atom)), Option::unwrap_or_default)(input)?;
    let (input, children) = many0(preceded(
        multispace0,
        alt((node, map(atom, |word: &str| PhraseNode::leaf(word)))),
    ))(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((input, PhraseNode::new(label, children)))
}

/// Parses one tree spanning the whole line.
pub fn parse_tree(line: &str) -> Result<PhraseNode, TreeError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(TreeError::Empty);
    }
    match node(line) {
        Ok(("", tree)) => Ok(tree),
        Ok((rest, _)) => Err(TreeError::Trailing {
            offset: line.len() - rest.len(),
        }),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(TreeError::Syntax {
            offset: line.len() - e.input.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(TreeError::Syntax { offset: line.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree() {
        let tree = parse_tree("(ROOT (S (NP (PRP he)) (VP (VBD was) (VP (VBG jogging)))))").expect("tree");
        assert_eq!(tree.label, "ROOT");
        assert_eq!(tree.leaves(), vec!["he", "was", "jogging"]);
        let s = tree.child(0).expect("S");
        assert_eq!(s.child_label(0), Some("NP"));
        assert_eq!(s.child_label(1), Some("VP"));
        assert_eq!(tree.find_all("VP").len(), 2);
    }

    #[test]
    fn test_parse_tree_whitespace() {
        let tree = parse_tree("  ( (S\t(NP (NN it) )\n(. .)) )  ").expect("tree");
        assert_eq!(tree.label, "");
        assert_eq!(tree.leaves(), vec!["it", "."]);
    }

    #[test]
    fn test_bracket_tokens() {
        let tree = parse_tree("(NP (-LRB- -LRB-) (NN aside) (-RRB- -RRB-))").expect("tree");
        assert_eq!(tree.leaves(), vec!["-LRB-", "aside", "-RRB-"]);
    }

    #[test]
    fn test_malformed_trees() {
        assert_eq!(parse_tree("   "), Err(TreeError::Empty));
        assert_eq!(parse_tree("(S (NP (NN it))"), Err(TreeError::Syntax { offset: 15 }));
        assert_eq!(parse_tree("S (NP it)"), Err(TreeError::Syntax { offset: 0 }));
        assert_eq!(parse_tree("(S it) (S it)"), Err(TreeError::Trailing { offset: 6 }));
    }
}
