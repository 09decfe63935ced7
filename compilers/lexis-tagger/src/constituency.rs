//! Tags read off a phrase-structure tree: non-finite clauses, attributive participles,
//! pied-piping and phrase/clause coordination.
//!
//! Each shape finds its nodes in the tree, then places the tag in the stream through
//! [`locate`]. A span the stream does not contain is skipped.

use lexis_protocol::{PhraseNode, Sentence};
use log::trace;

use crate::locator::locate;

/// A tree shape inspects the whole tree and tags the stream wherever it matches.
pub type Shape = fn(&mut Sentence, &PhraseNode);

pub static SHAPES: &[Shape] = &[
    participial_clause,
    reduced_relative,
    attributive_participle,
    pied_piping,
    coordination,
];

const CLAUSES: &[&str] = &["S", "SINV", "SQ", "SBAR"];
const PHRASES: &[&str] = &["NP", "VP", "ADJP", "ADVP", "PP"];

pub fn apply(sentence: &mut Sentence, tree: &PhraseNode) {
    for shape in SHAPES {
        shape(sentence, tree);
    }
}

/// Padded stream position of the word `offset` leaves into the span of `node`.
fn position(sentence: &Sentence, node: &PhraseNode, offset: usize) -> Option<usize> {
    let query = node.leaves();
    let found = locate(&sentence.words(), &query);
    if found.is_none() {
        trace!("span not in stream: {}", query.join(" "));
    }
    found.map(|start| sentence.range().start + start + offset)
}

/// Number of words spanned by the first `n` children.
fn width(node: &PhraseNode, n: usize) -> usize {
    node.children.iter().take(n).map(|c| c.leaves().len()).sum()
}

/// `(S (VP (VBG ...)))` and `(S (VP (VBN ...)))`
fn participial_clause(s: &mut Sentence, tree: &PhraseNode) {
    for clause in tree.find_all("S") {
        let Some(vp) = clause.child(0).filter(|c| c.label == "VP") else {
            continue;
        };
        let tag = match vp.child_label(0) {
            Some("VBG") => "PRESP",
            Some("VBN") => "PASTP",
            _ => continue,
        };
        if let Some(at) = position(s, clause, 0) {
            s.retag(at, 0, tag);
        }
    }
}

/// `(NP (NP ...) (VP (VBG ...)))`: the man sitting there. `(NP (NP ...) (VP (VBN ...)))`: the
/// report (already) eaten.
fn reduced_relative(s: &mut Sentence, tree: &PhraseNode) {
    for np in tree.find_all("NP") {
        if np.child_label(0) != Some("NP") || np.child_label(1) != Some("VP") {
            continue;
        }
        let Some(vp) = np.child(1) else { continue };
        let (tag, offset) = match (vp.child_label(0), vp.child_label(1)) {
            (Some("VBG"), _) => ("WZPRES", 0),
            (Some("VBN"), _) => ("WZPAST", 0),
            (Some("ADVP" | "RB"), Some("VBN")) if width(vp, 1) == 1 => ("WZPAST", 1),
            _ => continue,
        };
        if let Some(at) = position(s, vp, offset) {
            s.retag(at, 0, tag);
        }
    }
}

/// A participle standing directly in an NP before a nominal: `the (VBG running) (NN water)`.
fn attributive_participle(s: &mut Sentence, tree: &PhraseNode) {
    for np in tree.find_all("NP") {
        for (k, pair) in np.children.windows(2).enumerate() {
            let participle = matches!(pair[0].label.as_str(), "VBG" | "VBN");
            let nominal = pair[1].label.starts_with("NN") || pair[1].label == "NP";
            if !(participle && nominal) {
                continue;
            }
            if let Some(at) = position(s, np, width(np, k)) {
                s.retag(at, 0, "JJAT");
            }
        }
    }
}

/// `(SBAR (WHPP (IN of) (WHNP which)) ...)`: the WH-word after a fronted preposition.
fn pied_piping(s: &mut Sentence, tree: &PhraseNode) {
    for sbar in tree.find_all("SBAR") {
        let Some(whpp) = sbar.child(0).filter(|c| c.label == "WHPP") else {
            continue;
        };
        let wh_follows = whpp.child_label(1).is_some_and(|l| l.starts_with("WH"));
        if whpp.child_label(0) != Some("IN") || !wh_follows {
            continue;
        }
        if let Some(at) = position(s, whpp, width(whpp, 1)) {
            s.append(at, 0, "PIRE");
        }
    }
}

/// `X CC X` among the children of any node: `ANDC` joins clauses, `PHC` joins phrases.
fn coordination(s: &mut Sentence, tree: &PhraseNode) {
    for parent in tree.branches() {
        for (k, triple) in parent.children.windows(3).enumerate() {
            let [left, cc, right] = triple else { continue };
            if cc.label != "CC" || left.label != right.label {
                continue;
            }
            let tag = if CLAUSES.contains(&left.label.as_str()) {
                "ANDC"
            } else if PHRASES.contains(&left.label.as_str()) {
                "PHC"
            } else {
                continue;
            };
            if let Some(at) = position(s, parent, width(parent, k + 1)) {
                s.append(at, 0, tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_tree;

    fn tagged(line: &str, tree: &str) -> String {
        let mut sentence = Sentence::parse(line);
        apply(&mut sentence, &parse_tree(tree).expect("tree"));
        sentence
            .tokens()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_participial_clauses() {
        assert_eq!(
            tagged(
                "walking_VBG home_NN ,_, I_PP1S saw_VBD it_PIT",
                "(ROOT (S (S (VP (VBG walking) (NP (NN home)))) (, ,) (NP (PRP I)) (VP (VBD saw) (NP (PRP it)))))"
            ),
            "walking_PRESP home_NN ,_, I_PP1S saw_VBD it_PIT"
        );
        assert_eq!(
            tagged(
                "written_VBN quickly_RB ,_, it_PIT failed_VBD",
                "(ROOT (S (S (VP (VBN written) (ADVP (RB quickly)))) (, ,) (NP (PRP it)) (VP (VBD failed))))"
            ),
            "written_PASTP quickly_RB ,_, it_PIT failed_VBD"
        );
    }

    #[test]
    fn test_reduced_relatives() {
        assert_eq!(
            tagged(
                "the_DT man_NN sitting_VBG there_PLACE",
                "(NP (NP (DT the) (NN man)) (VP (VBG sitting) (ADVP (RB there))))"
            ),
            "the_DT man_NN sitting_WZPRES there_PLACE"
        );
        assert_eq!(
            tagged(
                "the_DT report_NN recently_TIME eaten_VBN",
                "(NP (NP (DT the) (NN report)) (VP (ADVP (RB recently)) (VBN eaten)))"
            ),
            "the_DT report_NN recently_TIME eaten_WZPAST"
        );
    }

    #[test]
    fn test_attributive_participle() {
        assert_eq!(
            tagged("the_DT running_VBG water_NN", "(NP (DT the) (VBG running) (NN water))"),
            "the_DT running_JJAT water_NN"
        );
        assert_eq!(
            tagged("the_DT water_NN running_VBG", "(NP (DT the) (NN water) (VBG running))"),
            "the_DT water_NN running_VBG"
        );
    }

    #[test]
    fn test_pied_piping() {
        assert_eq!(
            tagged(
                "the_DT house_NN in_IN which_WDT we_PP1P live_VPRT",
                "(NP (NP (DT the) (NN house)) (SBAR (WHPP (IN in) (WHNP (WDT which))) (S (NP (PRP we)) (VP (VBP live)))))"
            ),
            "the_DT house_NN in_IN which_WDT PIRE we_PP1P live_VPRT"
        );
    }

    #[test]
    fn test_coordination() {
        assert_eq!(
            tagged(
                "cats_NN and_CC dogs_NN",
                "(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))"
            ),
            "cats_NN and_CC PHC dogs_NN"
        );
        assert_eq!(
            tagged(
                "I_PP1S came_VBD and_CC she_PP3f left_VBD",
                "(S (S (NP (PRP I)) (VP (VBD came))) (CC and) (S (NP (PRP she)) (VP (VBD left))))"
            ),
            "I_PP1S came_VBD and_CC ANDC she_PP3f left_VBD"
        );
        assert_eq!(
            tagged("red_JJ and_CC blue_JJ", "(ADJP (JJ red) (CC and) (JJ blue))"),
            "red_JJ and_CC blue_JJ"
        );
    }

    #[test]
    fn test_span_not_in_stream() {
        let line = "he_PRP was_VBD jogging_VBG";
        assert_eq!(
            tagged(line, "(S (VP (VBG running)))"),
            "he_PRP was_VBD jogging_VBG"
        );
    }
}
