//! Extended layer: stance complement clauses, semantic classes of nouns, adjectives, verbs
//! and adverbs, the residual `*other` classes and the summary tags built from them.

use lexis_lexicon::WordSet;
use lexis_protocol::{Sentence, Token};

use super::{Rule, Window};
use crate::probe::{ends_with, in_set, in_set_as, lexicon, starts_with};

pub(super) static COMPLEMENTS: &[Rule] = &[
    stance_adjective,
    superlative,
    comparative,
    to_complement,
    that_complement,
    wh_complement,
    stance_preposition,
];

pub(super) static CLASSES: &[Rule] = &[noun_class, adjective_class, verb_class];

pub(super) static RESIDUALS: &[Rule] = &[
    nominalization,
    stance_adverb,
    stance_noun,
    residual,
    residual_verb,
    summary,
];

/// Tags of the semantic verb classes; they do not count as prior classification for the
/// residual verb tags.
const VERB_CLASSES: &[&str] = &["ACT", "COMM", "MENTAL", "CAUSE", "OCCUR", "EXIST", "ASPECT"];

/// Summary tags and the tags they pool, applied in order so later sums can pool earlier ones.
const SUMMARIES: &[(&str, &[&str])] = &[
    ("ThVSTNCall", &["ThVCOMM", "ThVATT", "ThVFCT", "ThVLIK"]),
    ("ThJSTNCall", &["ThJATT", "ThJFCT", "ThJLIK", "ThJEVL"]),
    ("ThNSTNCall", &["ThNNFCT", "ThNATT", "ThNFCT", "ThNLIK"]),
    (
        "ThSTNCall",
        &[
            "ThVCOMM", "ThVATT", "ThVFCT", "ThVLIK", "ThJATT", "ThJFCT", "ThJLIK", "ThJEVL", "ThNNFCT",
            "ThNATT", "ThNFCT", "ThNLIK",
        ],
    ),
    ("WhVSTNCall", &["WhVATT", "WhVFCT", "WhVLIK", "WhVCOM"]),
    ("RSTNCall", &["RATT", "RNONFACT", "RFACT", "RLIKELY"]),
    ("MDPOSSCall", &["MDCA", "MDCO", "MDMM"]),
    ("MDPREDall", &["MDWS", "MDWO", "GTO"]),
    ("PASSall", &["PASS", "PGET"]),
    ("ToThNSTNCall", &["ToNSTNC", "ThNSTNCall"]),
    ("PP1all", &["PP1P", "PP1S"]),
    ("PP3all", &["PP3t", "PP3f", "PP3m"]),
];

/// First class whose word set holds `t`.
fn first_class(t: &Token, classes: &[(&'static str, &WordSet)]) -> Option<&'static str> {
    classes
        .iter()
        .find(|(_, set)| in_set(t, set))
        .map(|(tag, _)| *tag)
}

/// Attitudinal and epistemic adjectives that do not control a to- or that-clause.
fn stance_adjective(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let adjectives = &lexicon().adjectives;
    let t = &w[0];
    if !t.is_any(&["JJAT", "JJPR"]) || w[1].word_is("to") || w[1].is("THSC") {
        return;
    }
    let attitudinal = in_set(t, &adjectives.attitudinal);
    let epistemic = in_set(t, &adjectives.epistemic);
    if attitudinal {
        s.append(i, 0, "JJATDother");
    }
    if epistemic {
        s.append(i, 0, "JJEPSTother");
    }
}

/// `widest`, `worst`, `best-looking`, `the most pressing`.
fn superlative(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let form = (ends_with(t, "est") && t.is_any(&["J", "RB"])) || t.word_is("worst") || starts_with(t, "best-");
    let lookalike = starts_with(t, "test")
        || ends_with(t, "honest")
        || ends_with(t, "west")
        || t.word_is_any(&["pest", "lest", "guest"]);
    let periphrastic = w[-1].word_is("the")
        && matches!(t.word.as_str(), "least" | "most")
        && w[1].is_any(&["J", "RB", "NN"]);
    if (form && !lookalike) || periphrastic {
        s.append(i, 0, "SUPER");
    }
}

const NOT_COMPARATIVE: &[&str] = &[
    "never", "rather", "other", "either", "together", "proper", "super", "clever", "queer", "hyper",
    "bitter", "premier", "sinister", "order", "over",
];

/// `wider`, `worse`, `better-looking`, `more pressing`.
fn comparative(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let form = (ends_with(t, "er") && t.is_any(&["J", "RB"])) || t.word_is("worse") || starts_with(t, "better-");
    let lookalike = NOT_COMPARATIVE.iter().any(|suffix| ends_with(t, suffix))
        || t.word_is_any(&["after", "ever", "eager", "utter", "inner", "sober"]);
    let periphrastic = matches!(t.word.as_str(), "less" | "more") && w[1].is_any(&["J", "RB"]);
    if (form && !lookalike) || periphrastic {
        s.append(i, 0, "COMPAR");
    }
}

/// To-clauses controlled by stance verbs, adjectives and nouns: `want to go`,
/// `likely to happen`, `the decision to leave`. The `na` of `wan na` counts as `to`.
fn to_complement(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let lex = lexicon();
    let (head, marker) = (&w[-1], &w[0]);
    let to = marker.word_is("to");
    if !(to || marker.word_is("na")) {
        return;
    }
    let mut tags = Vec::new();
    if w[1].is("V") || w[2].is("V") {
        let verbs = &lex.verbs;
        let classes = [
            ("ToVDSR", &verbs.to_desire),
            ("ToVEFRT", &verbs.to_effort),
            ("ToVPROB", &verbs.to_probability),
            ("ToVSPCH", &verbs.to_speech),
            ("ToVMNTL", &verbs.to_mental),
        ];
        tags.extend(classes.iter().filter(|(_, set)| in_set_as(head, set, "V")).map(|(tag, _)| *tag));
    }
    let verb_next = to && w[1].is("V");
    if verb_next {
        let adjectives = &lex.adjectives;
        let classes = [
            ("ToJCRTN", &adjectives.to_certainty),
            ("ToJABL", &adjectives.to_ability),
            ("ToJEFCT", &adjectives.to_affect),
            ("ToJEASE", &adjectives.to_ease),
            ("ToJEVAL", &adjectives.to_evaluative),
        ];
        tags.extend(classes.iter().filter(|(_, set)| in_set_as(head, set, "J")).map(|(tag, _)| *tag));
    }
    let verbal = tags.iter().any(|tag| tag.starts_with("ToV"));
    let adjectival = tags.iter().any(|tag| tag.starts_with("ToJ"));
    if verbal {
        tags.push("ToVSTNCall");
    }
    if adjectival {
        tags.push("ToJSTNCall");
    }
    if verb_next && in_set_as(head, &lex.nouns.to_stance, "N") {
        tags.push("ToNSTNC");
    }
    if !tags.is_empty() {
        tags.push("ToSTNCall");
    }
    for tag in tags {
        s.append(i, 0, tag);
    }
}

/// That-clauses after stance verbs and adjectives, that-relatives after stance nouns.
fn that_complement(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let lex = lexicon();
    let (head, t) = (&w[-1], &w[0]);
    let classes: Vec<(&str, &WordSet, &str)> = if t.is("THSC") {
        vec![
            ("ThVCOMM", &lex.verbs.communication, "V"),
            ("ThVATT", &lex.verbs.attitude, "V"),
            ("ThVFCT", &lex.verbs.factive, "V"),
            ("ThVLIK", &lex.verbs.likelihood, "V"),
            ("ThJATT", &lex.adjectives.attitudinal, "J"),
            ("ThJFCT", &lex.adjectives.that_factive, "J"),
            ("ThJLIK", &lex.adjectives.that_likelihood, "J"),
            ("ThJEVL", &lex.adjectives.that_evaluative, "J"),
        ]
    } else if t.is("THRC") {
        vec![
            ("ThNNFCT", &lex.nouns.that_nonfactive, "N"),
            ("ThNATT", &lex.nouns.that_attitude, "N"),
            ("ThNFCT", &lex.nouns.that_factive, "N"),
            ("ThNLIK", &lex.nouns.that_likelihood, "N"),
        ]
    } else {
        return;
    };
    let tags: Vec<&str> = classes
        .into_iter()
        .filter(|(_, set, pos)| in_set_as(head, set, pos))
        .map(|(tag, _, _)| tag)
        .collect();
    for tag in tags {
        s.append(i, 0, tag);
    }
}

/// WH-clauses after stance and communication verbs: `I wonder whether`, `explain how`.
fn wh_complement(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !w[0].is("WHSC") {
        return;
    }
    let verbs = &lexicon().verbs;
    let classes = [
        ("WhVATT", &verbs.attitude),
        ("WhVFCT", &verbs.factive),
        ("WhVLIK", &verbs.likelihood),
        ("WhVCOM", &verbs.communication),
    ];
    let tags: Vec<&str> = classes
        .iter()
        .filter(|(_, set)| in_set_as(&w[-1], set, "V"))
        .map(|(tag, _)| *tag)
        .collect();
    for tag in tags {
        s.append(i, 0, tag);
    }
}

/// `the fact of`, `doubt about`
fn stance_preposition(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if in_set_as(&w[-1], &lexicon().nouns.stance_prepositional, "N") && w[0].is("IN") {
        s.append(i, 0, "PrepNSTNC");
    }
}

/// One semantic class per otherwise unclassified noun, the first that matches.
fn noun_class(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if !t.is("N") || t.has_secondary() {
        return;
    }
    let nouns = &lexicon().nouns;
    let tag = first_class(
        t,
        &[
            ("NNHUMAN", &nouns.human),
            ("NNCOG", &nouns.cognitive),
            ("NNCONC", &nouns.concrete),
            ("NNPLACE", &nouns.place),
            ("NNQUANT", &nouns.quantity),
            ("NNGRP", &nouns.group),
            ("NNTECH", &nouns.technical),
            ("NNABSPROC", &nouns.abstract_process),
        ],
    );
    if let Some(tag) = tag {
        s.append(i, 0, tag);
    }
}

fn adjective_class(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if !t.is("J") || t.has_secondary() {
        return;
    }
    let adjectives = &lexicon().adjectives;
    let tag = first_class(
        t,
        &[
            ("JJSIZE", &adjectives.size),
            ("JJTIME", &adjectives.time),
            ("JJCOLR", &adjectives.color),
            ("JJEVAL", &adjectives.evaluative),
            ("JJREL", &adjectives.relational),
            ("JJTOPIC", &adjectives.topical),
        ],
    );
    if let Some(tag) = tag {
        s.append(i, 0, tag);
    }
}

/// Verb classes apply to every verbal form, including those retagged as `PASS`, `PEAS` and
/// `PROG`. A verb can belong to several classes. The `no` of `du n no` is mental.
fn verb_class(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if !t.is_any(&["V", "P"]) {
        return;
    }
    let verbs = &lexicon().verbs;
    let classes = [
        ("ACT", &verbs.activity),
        ("COMM", &verbs.communication),
        ("MENTAL", &verbs.mental),
        ("CAUSE", &verbs.causation),
        ("OCCUR", &verbs.occurrence),
        ("EXIST", &verbs.existence),
        ("ASPECT", &verbs.aspectual),
    ];
    let mut tags: Vec<&str> = classes
        .iter()
        .filter(|(_, set)| in_set(t, set))
        .map(|(tag, _)| *tag)
        .collect();
    if t.word_is("no") && t.is("VB") && !tags.contains(&"MENTAL") {
        tags.push("MENTAL");
    }
    for tag in tags {
        s.append(i, 0, tag);
    }
}

fn nominalization(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let suffixed = ["tion", "tions", "ment", "ments", "ness", "nesses", "ity", "ities"]
        .iter()
        .any(|suffix| ends_with(t, suffix));
    let letters = t
        .word
        .split(|c: char| !c.is_ascii_alphabetic())
        .map(str::len)
        .max()
        .unwrap_or(0);
    if suffixed && t.is("NN") && letters >= 5 && !t.has_secondary() {
        s.append(i, 0, "NOMZ");
    }
}

fn stance_adverb(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let adverbs = &lexicon().adverbs;
    let (prev, t) = (&w[-1], &w[0]);
    let plain = !t.has_secondary();
    let tag = if plain
        && (in_set_as(t, &adverbs.attitudinal, "R") || (t.word_is("even") && t.is("R") && w[1].word_is("worse")))
    {
        "RATT"
    } else if plain && in_set_as(t, &adverbs.nonfactive, "R") {
        "RNONFACT"
    } else if (plain && in_set_as(t, &adverbs.factive, "R"))
        || (prev.word_is("of") && t.word_is("course"))
        || (prev.word_is("in") && t.word_is("fact"))
        || (prev.word_is_any(&["without", "no"]) && t.word_is("doubt"))
    {
        "RFACT"
    } else if plain && in_set_as(t, &adverbs.likelihood, "R") {
        "RLIKELY"
    } else {
        return;
    };
    s.append(i, 0, tag);
}

/// Stance nouns not followed by a preposition. `no doubt` and hedges are already stance adverbials.
fn stance_noun(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let hit = in_set_as(t, &lexicon().nouns.stance_prepositional, "N")
        && !w[1].is("IN")
        && !t.has_any(&["RFACT", "HDG"]);
    if hit {
        s.append(i, 0, "NSTNCother");
    }
}

/// Tokens whose only tag is a broad one get its `*other` residual.
fn residual(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.has_secondary() {
        return;
    }
    let tag = match t.primary.as_str() {
        "JJAT" => "JJATother",
        "JJPR" => "JJPRother",
        "THSC" => "THSCother",
        "THRC" => "THRCother",
        "WHSC" => "WHSCother",
        "NN" => "NNother",
        "RB" => "RBother",
        "IN" => "INother",
        _ => return,
    };
    s.append(i, 0, tag);
}

/// Stance verbs outside of that-, wh- and to-clauses.
fn residual_verb(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let unclassified = t.secondary.iter().all(|tag| VERB_CLASSES.contains(&tag.as_str()));
    if !t.is("V") || !unclassified || w[1].is_any(&["WHSC", "THSC"]) || w[1].word_is("to") {
        return;
    }
    let verbs = &lexicon().verbs;
    let tag = first_class(
        t,
        &[
            ("VCOMMother", &verbs.communication),
            ("VATTother", &verbs.attitude),
            ("VFCTother", &verbs.factive),
            ("VLIKother", &verbs.likelihood),
        ],
    );
    if let Some(tag) = tag {
        s.append(i, 0, tag);
    }
}

fn summary(s: &mut Sentence, i: usize) {
    for (tag, parts) in SUMMARIES {
        if s.at(i, 0).has_any(parts) {
            s.append(i, 0, tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::pass;

    #[test]
    fn test_degree() {
        assert_eq!(pass(COMPLEMENTS, "widest_JJAT road_NN"), "widest_JJAT SUPER | road_NN");
        assert_eq!(pass(COMPLEMENTS, "honest_JJPR"), "honest_JJPR");
        assert_eq!(pass(COMPLEMENTS, "the_DT most_EMPH pressing_JJAT"), "the_DT | most_EMPH SUPER | pressing_JJAT");
        assert_eq!(pass(COMPLEMENTS, "wider_JJPR never_FREQ"), "wider_JJPR COMPAR | never_FREQ");
        assert_eq!(pass(COMPLEMENTS, "other_JJAT"), "other_JJAT");
    }

    #[test]
    fn test_to_clauses() {
        assert_eq!(
            pass(COMPLEMENTS, "want_VPRT to_IN go_VB"),
            "want_VPRT | to_IN ToVDSR ToVSTNCall ToSTNCall | go_VB"
        );
        assert_eq!(
            pass(COMPLEMENTS, "important_JJPR to_IN know_VB"),
            "important_JJPR | to_IN ToJEVAL ToJSTNCall ToSTNCall | know_VB"
        );
        assert_eq!(pass(COMPLEMENTS, "went_VBD to_IN school_NN"), "went_VBD | to_IN | school_NN");
    }

    #[test]
    fn test_that_and_wh_clauses() {
        assert_eq!(pass(COMPLEMENTS, "fact_NN that_THRC"), "fact_NN | that_THRC ThNFCT");
        assert_eq!(pass(COMPLEMENTS, "obvious_JJPR that_THSC"), "obvious_JJPR | that_THSC ThJFCT");
    }

    #[test]
    fn test_classes() {
        assert_eq!(pass(CLASSES, "teacher_NN"), "teacher_NN NNHUMAN");
        assert_eq!(pass(CLASSES, "teachers_NNS"), "teachers_NNS NNHUMAN");
        assert_eq!(pass(CLASSES, "big_JJAT red_JJAT"), "big_JJAT JJSIZE | red_JJAT JJCOLR");
        assert_eq!(pass(CLASSES, "wondering_PROG"), "wondering_PROG MENTAL");
        assert_eq!(pass(CLASSES, "du_VPRT n_XX0 no_VB"), "du_VPRT | n_XX0 | no_VB MENTAL");
    }

    #[test]
    fn test_residuals() {
        assert_eq!(pass(RESIDUALS, "nation_NN"), "nation_NN NOMZ");
        assert_eq!(pass(RESIDUALS, "city_NN"), "city_NN NNother");
        assert_eq!(pass(RESIDUALS, "surprisingly_RB"), "surprisingly_RB RATT RSTNCall");
        assert_eq!(pass(RESIDUALS, "evidently_RB"), "evidently_RB RLIKELY RSTNCall");
        assert_eq!(pass(RESIDUALS, "in_IN fact_NN"), "in_IN INother | fact_NN RFACT RSTNCall");
        assert_eq!(pass(RESIDUALS, "can_MDCA go_VB"), "can_MDCA MDPOSSCall | go_VB");
        assert_eq!(pass(RESIDUALS, "eaten_PASS"), "eaten_PASS PASSall");
    }
}
