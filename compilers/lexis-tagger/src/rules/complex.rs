//! Multi-word and context-dependent features: discourse markers, conjunct adverbials,
//! emphatics, question tags, passives, imperatives, hedges and politeness markers.

use std::ops::RangeInclusive;

use lexis_protocol::{Sentence, Token};

use super::{Rule, Window};
use crate::probe::{
    ends_with, is_aux, is_be, is_clitic, is_do, is_have, is_participle, is_preposition, is_question,
    is_bare_question, is_subject, is_subject_pronoun, is_wh, is_wh_relative, is_wh_subordinator, starts_with,
};

pub(super) static RULES: &[Rule] = &[
    discourse_marker,
    attributive_adjective,
    okay_predicative,
    elaboration_phrase,
    elaboration,
    coordinator,
    coordinator_phrase,
    causal,
    causal_phrase,
    conditional,
    conditional_phrase,
    emphatic,
    emphatic_phrase,
    emphatic_do,
    do_auxiliary,
    question_tag,
    yes_no_question,
    passive,
    get_passive,
    going_to,
    synthetic_negation,
    pronoun_quantifier,
    split_auxiliary,
    stranded_preposition,
    imperative,
    coordinated_imperative,
    subordinate_clause,
    hedge,
    hedge_phrase,
    politeness,
    have_got,
];

/// None of the tokens at the given backward distances is a question word.
fn no_wh_before(w: Window, distances: RangeInclusive<isize>) -> bool {
    distances.into_iter().all(|k| !is_wh(&w[-k]))
}

fn is_comma(t: &Token) -> bool {
    t.is_exactly(",")
}

fn discourse_marker(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let (prev, t, next) = (&w[-1], &w[0], &w[1]);
    let hit = (t.word_is("no") && !t.is("V") && !(next.is_any(&["J", "NN"]) || next.word_is("less")))
        || (prev.is_punct() && t.word_is_any(&["right", "okay", "ok"]))
        || (!(prev.word_is_any(&["as", "how", "very", "really", "so", "quite"]) || prev.is("V"))
            && t.word_is("well")
            && t.is_any(&["JJ", "RB", "NNP", "UH"])
            && !(next.is_any(&["JJ", "RB"]) || next.word.ends_with('-')))
        || (!(prev.word_is_any(&["makes", "make", "made", "making", "you"])
            || starts_with(prev, "not")
            || is_be(prev))
            && t.word_is("sure")
            && t.is_any(&["JJ", "RB"]))
        || (prev.word_is("of") && t.word_is("course"))
        || (prev.word_is("all") && t.word_is("right"))
        || (t.word_is("mind") && next.word_is("you"));
    if hit {
        s.retag(i, 0, "DMA");
    }
}

fn attributive_adjective(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let hit = (w[0].is("JJ") && w[1].is_any(&["JJ", "NN", "CD"])) || (w[-1].is("DT") && w[0].is("JJ"));
    if hit {
        s.retag(i, 0, "JJAT");
    }
}

fn okay_predicative(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if is_be(&w[-1]) && (w[0].word_is("ok") || ends_with(&w[0], "okay")) {
        s.retag(i, 0, "JJPR");
    }
}

fn elaboration_phrase(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let that = t.word_is("that") && !t.is("DT");
    let hit = (w[-1].word_is("such") && that)
        || (w[-1].word_is_any(&["such", "inasmuch", "forasmuch", "insofar", "insomuch"]) && t.word_is("as"))
        || (w[-2].word_is("so") && w[-1].word_is("long") && t.word_is("as"))
        || (w[-1].word_is("in") && w[-1].is("IN") && that)
        || (w[-3].word_is("to") && w[-2].word_is("the") && w[-1].word_is("extent") && t.word_is("that"))
        || (w[-1].word_is("in")
            && t.word_is_any(&["particular", "conclusion", "sum", "summary", "fact", "brief"]))
        || (w[-1].word_is("to") && t.word_is_any(&["summarise", "summarize"]) && is_comma(&w[1]))
        || (w[-1].word_is("in") && t.word_is("short") && is_comma(&w[1]))
        || (w[-1].word_is("for") && t.word_is_any(&["example", "instance"]))
        || (t.word_is_any(&["similarly", "accordingly"]) && is_comma(&w[1]))
        || (w[-2].word_is("in") && w[-1].word_is("any") && t.word_is_any(&["event", "case"]))
        || (w[-2].word_is("in") && w[-1].word_is("other") && t.word_is("words"));
    if hit {
        s.append(i, 0, "ELAB");
    }
}

fn elaboration(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = t.word_is_any(&["eg", "e.g.", "i.e.", "cf", "cf.", "likewise", "namely", "viz", "viz."])
        || ends_with(t, "etc")
        || ends_with(t, "etc.");
    if hit {
        s.retag(i, 0, "ELAB");
    }
}

fn coordinator(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let (prev, t, next) = (&w[-1], &w[0], &w[1]);
    let hit = (t.word_is("while") && t.is_any(&["IN", "RB"]))
        || (t.word_is("further") && t.is("RB"))
        || t.word_is_any(&[
            "whilst", "whereupon", "whereas", "whereby", "thereby", "also", "besides", "instead",
            "moreover", "furthermore", "additionally", "however", "ibid.", "ibid", "conversly",
        ])
        || (t.word_is_any(&["inasmuch", "forasmuch", "insofar", "insomuch"]) && next.word_is("as"))
        || (prev.word_is("or") && t.word_is("rather"))
        || (!prev.word_is("least") && t.word_is("as") && next.word_is("well"))
        || (prev.is_punct() && t.word_is_any(&["else", "altogether", "rather"]));
    if hit {
        s.retag(i, 0, "CC");
    }
}

fn coordinator_phrase(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let hit = (w[-1].word_is("by") && t.word_is_any(&["contrast", "comparison"]))
        || (w[-1].word_is("in") && t.word_is_any(&["comparison", "contrast", "addition"]))
        || (w[-2].word_is("on") && w[-1].word_is("the") && t.word_is("contrary"))
        || (w[-3].word_is("on")
            && w[-2].word_is("the")
            && w[-1].word_is_any(&["one", "other"])
            && t.word_is("hand"));
    if hit {
        s.append(i, 0, "CC");
    }
}

fn causal(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let (t, next) = (&w[0], &w[1]);
    let hit = t.word_is_any(&["because", "cos", "cos.", "cus", "cuz", "coz", "consequently", "hence", "therefore"])
        || is_clitic(t, "cause")
        || (t.word_is("thanks") && next.word_is("to"))
        || (t.word_is("thus") && !next.word_is("far"));
    if hit {
        s.retag(i, 0, "CUZ");
    }
}

fn causal_phrase(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let hit = (w[-1].word_is("in") && t.word_is("consequence"))
        || (w[-1].word_is_any(&["such", "so"]) && t.word_is("that") && !t.is("DT"))
        || (w[-2].word_is("as") && w[-1].word_is("a") && t.word_is_any(&["result", "consequence"]))
        || (w[-2].word_is("on") && w[-1].word_is("account") && t.word_is("of"))
        || (w[-2].word_is("for") && w[-1].word_is_any(&["that", "this"]) && t.word_is("purpose"))
        || (w[-2].word_is("to") && w[-1].word_is_any(&["that", "this"]) && t.word_is("end"));
    if hit {
        s.append(i, 0, "CUZ");
    }
}

fn conditional(s: &mut Sentence, i: usize) {
    if s.at(i, 0).word_is_any(&["if", "unless", "lest", "otherwise", "whether"]) {
        s.retag(i, 0, "COND");
    }
}

fn conditional_phrase(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let hit = (w[-2].word_is("as") && w[-1].word_is("long") && w[0].word_is("as"))
        || (w[-2].word_is("in") && w[-1].word_is("that") && w[0].word_is("case"));
    if hit {
        s.append(i, 0, "COND");
    }
}

fn emphatic(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let (prev, t, next) = (&w[-1], &w[0], &w[1]);
    let hit = (t.word_is("most") && t.is("DT"))
        || (t.word_is("most") && next.is_any(&["J", "VBN", "VBG"]))
        || ((t.word_is_any(&["real", "dead", "damn", "super"]) || starts_with(t, "fuck") || starts_with(t, "shit"))
            && next.is_any(&["J", "RB"]))
        || (t.word_is_any(&["just", "really", "bloody", "pretty", "more"]) && next.is_any(&["J", "RB", "V"]))
        || (t.word_is("so")
            && (next.is_any(&["J", "RB"]) || next.word_is_any(&["many", "much", "little"]))
            && !next.word_is("far"))
        || (t.word_is("far") && next.is_any(&["J", "RB"]) && !prev.word_is_any(&["so", "thus"]))
        || (!prev.word_is("of") && t.word_is("such") && next.word_is_any(&["a", "an"]));
    if hit {
        s.retag(i, 0, "EMPH");
    }
}

fn emphatic_phrase(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let hit = (w[0].word_is("loads") && !w[1].word_is("of")) || (w[0].word_is("for") && w[1].word_is("sure"));
    if hit {
        s.append(i, 0, "EMPH");
    }
}

/// `I do like it`: DO directly before a bare verb.
fn emphatic_do(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if is_do(&w[0]) && w[1].is_exactly("VB") {
        s.append(i, 0, "DOAUX");
        s.append(i, 0, "EMPH");
    }
}

fn do_auxiliary(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let pronoun = |t: &Token| t.word_is_any(&["i", "you", "he", "she", "it", "we", "they"]);
    let hit = w[0].word_is_any(&["do", "does", "did"])
        && w[0].is("V")
        && !(w[-1].word_is("to") && w[-1].is("TO"))
        && (w[2].is_exactly("VB")
            || w[3].is_exactly("VB")
            || w[1].is_punct()
            || ((pronoun(&w[1]) || w[1].is("XX0")) && (w[2].is_exactly(".") || w[2].is_exactly("VB")))
            || (w[1].is("XX0") && (pronoun(&w[2]) || w[2].is_exactly("VB")))
            || (pronoun(&w[1]) && is_question(&w[3]))
            || is_wh_relative(&w[-1])
            || is_wh_subordinator(&w[-1])
            || is_wh(&w[-1]));
    if hit {
        s.append(i, 0, "DOAUX");
    }
}

/// `..., isn't it?`, `did they?`, `innit?` on the question mark.
fn question_tag(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !is_question(&w[0]) {
        return;
    }
    let modal_like = |t: &Token| t.is("MD") || t.word_is_any(&["did", "had"]);
    let modal_or_do = |t: &Token| modal_like(t) || t.word_is("do");
    let third = |t: &Token| t.word_is_any(&["is", "does", "was", "has"]);
    let third_or_do = |t: &Token| third(t) || t.word_is("do");
    let plural = |t: &Token| t.word_is_any(&["do", "were", "are", "have"]);
    let it_she_he = |t: &Token| t.word_is_any(&["it", "she", "he"]);
    let it_she_he_they = |t: &Token| t.word_is_any(&["it", "she", "he", "they"]);
    let you_we_they = |t: &Token| t.word_is_any(&["you", "we", "they"]);
    let pronoun = |t: &Token| t.is("PRP") || is_subject_pronoun(t);
    let pronoun_or_you = |t: &Token| pronoun(t) || t.word_is("you");
    let neg = |t: &Token| t.is("XX0");

    let far = no_wh_before(w, 4..=5);
    let near = no_wh_before(w, 3..=4);
    let hit = (far && modal_like(&w[-3]) && neg(&w[-2]) && pronoun(&w[-1]))
        || (near && modal_or_do(&w[-2]) && pronoun_or_you(&w[-1]))
        || (far && third_or_do(&w[-3]) && neg(&w[-2]) && it_she_he_they(&w[-1]))
        || (near && third(&w[-2]) && it_she_he(&w[-1]))
        || (far && plural(&w[-3]) && neg(&w[-2]) && you_we_they(&w[-1]))
        || (near && plural(&w[-2]) && you_we_they(&w[-1]))
        || (near && modal_or_do(&w[-1]) && pronoun_or_you(&w[-2]))
        || (far && third_or_do(&w[-2]) && neg(&w[-1]) && it_she_he_they(&w[-3]))
        || (near && third(&w[-1]) && it_she_he(&w[-2]))
        || (far && plural(&w[-2]) && neg(&w[-1]) && you_we_they(&w[-3]))
        || (near && plural(&w[-1]) && you_we_they(&w[-2]))
        || (no_wh_before(w, 2..=2) && w[-1].word_is_any(&["innit", "init"]));
    if hit {
        s.append(i, 0, "QUTAG");
    }
}

/// A question mark closing an inverted clause (auxiliary before its subject) that no
/// question word opens.
fn yes_no_question(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !is_bare_question(&w[0]) {
        return;
    }
    let hit = (2..=13isize).any(|k| {
        let subject = &w[-(k - 1)];
        let subject_ok = subject.is_any(&["P", "NN", "DT", "CD"]) || (k >= 5 && subject.is("XX0"));
        no_wh_before(w, k + 1..=k + 3) && is_aux(&w[-k]) && subject_ok
    });
    if hit {
        s.append(i, 0, "YNQU");
    }
}

fn passive(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !is_participle(&w[0]) {
        return;
    }
    let adverb = |t: &Token| t.is_any(&["RB", "XX0", "CC"]);
    let clitic_s = |t: &Token| t.word_is("s") && t.is("VBZ");
    let hit = is_be(&w[-1])
        || (adverb(&w[-1]) && is_be(&w[-2]))
        || (adverb(&w[-1]) && w[-2].is_any(&["RB", "XX0"]) && is_be(&w[-3]) && !clitic_s(&w[-3]))
        || (w[-1].is_any(&["NN", "PRP", "CC"]) && is_be(&w[-2]))
        || (adverb(&w[-1]) && w[-2].is_any(&["NN", "PRP"]) && is_be(&w[-3]) && !clitic_s(&w[-3]));
    if hit {
        s.retag(i, 0, "PASS");
    }
}

fn get_passive(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let get = |t: &Token| t.is("V") && t.word_is_any(&["get", "gets", "got", "getting"]);
    let hit = w[0].is_any(&["VBD", "VBN"])
        && (get(&w[-1])
            || (w[-1].is_any(&["NN", "PRP"]) && get(&w[-2]))
            || (w[-1].is("NN") && w[-2].is_any(&["DT", "NN"]) && get(&w[-3])));
    if hit {
        s.retag(i, 0, "PGET");
    }
}

/// `going to` + infinitive, allowing one intervening word; also `gon na`.
fn going_to(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let verb_follows = w[2].is("VB") || w[3].is("VB");
    let hit = t.is("VBG")
        && ((t.word_is("going") && w[1].word_is("to") && w[1].is("TO")) || (t.word_is("gon") && w[1].word_is("na")))
        && verb_follows;
    if hit {
        s.retag(i, 0, "GTO");
    }
}

fn synthetic_negation(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let next = &w[1];
    let hit = (w[0].word_is("no")
        && (next.is_any(&["J", "NN"])
            || next.word_is_any(&[
                "longer", "more", "need", "doubt", "point", "reason", "such", "problem", "matter", "means",
            ])))
        || w[0].word_is_any(&["neither", "nor"]);
    if hit {
        s.retag(i, 0, "XX0");
    }
}

/// `no one`, `each other`.
fn pronoun_quantifier(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if w[0].word_is("no") && w[1].word_is("one") {
        s.retag(i, 1, "QUPR");
    } else if w[-1].word_is("each") && w[0].word_is("other") {
        s.retag(i, 0, "QUPR");
    }
}

/// Split infinitives (`to really understand`) and split auxiliaries (`will just go`).
fn split_auxiliary(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let intensifier = |t: &Token| t.is("RB") || t.word_is_any(&["just", "really", "most", "more"]);
    let adverb = |t: &Token| t.is_any(&["RB", "XX0"]);
    let to = t.word_is("to");
    let aux = t.is("MD") || t.has("DOAUX") || is_have(t) || is_be(t);
    let hit = (to && (intensifier(&w[1]) || w[1].is("XX0")) && w[2].is("V"))
        || (to && (intensifier(&w[1]) || w[1].is("XX0")) && adverb(&w[2]) && w[3].is("V"))
        || (aux && intensifier(&w[1]) && w[2].is("V"))
        || (aux && (intensifier(&w[1]) || w[1].is("XX0")) && adverb(&w[2]) && w[3].is("V"));
    if hit {
        s.append(i, 0, "SPLIT");
    }
}

fn stranded_preposition(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let hit = (is_preposition(t) || (t.word_is("to") && t.is("TO"))) && !t.is("R") && w[1].is_exactly(".");
    if hit {
        s.append(i, 0, "STPR");
    }
}

/// Sentence start, end punctuation, colons, bullets and other symbols before an imperative.
fn clause_boundary(t: &Token) -> bool {
    t.is_pad()
        || t.is_exactly(".")
        || t.word.contains(':')
        || t.is_exactly(":")
        || (t.word.ends_with('-') && t.is("NFP"))
        || t.is_any(&["EMO", "FW", "SYM", "HST"])
}

fn boundary_or_please(t: &Token) -> bool {
    clause_boundary(t) || t.word_is("please")
}

fn imperative(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let bare_verb = t.is_exactly("VB") && !(t.word_is_any(&["please", "thank"]) || t.has("DOAUX") || is_be(t));
    let no_subject = !(w[1].word_is_any(&["i", "you", "we", "they"]) || w[1].is("NNP"));
    let linker = |t: &Token| t.is_any(&["RB", "CC", "DMA"]);
    let negated_do = t.word_is("do") && w[1].is("XX0") && w[2].is_exactly("VB");
    let hit = (boundary_or_please(&w[-1]) && bare_verb && no_subject)
        || (clause_boundary(&w[-2]) && linker(&w[-1]) && bare_verb && no_subject)
        || (boundary_or_please(&w[-1]) && (t.word_is_any(&["practise", "make"]) || starts_with(t, "complete")))
        || (boundary_or_please(&w[-1]) && negated_do)
        || (clause_boundary(&w[-2]) && linker(&w[-1]) && negated_do);
    if hit {
        s.retag(i, 0, "VIMP");
    }
}

/// `read the text and listen`: a bare verb coordinated with an earlier imperative.
fn coordinated_imperative(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let hit = t.is_exactly("VB")
        && !(t.word_is_any(&["please", "thank"]) || t.has("DOAUX"))
        && w[-1].word_is_any(&["and", "or", ",", "&"])
        && (2..=4).any(|k| w[-k].is("VIMP"));
    if hit {
        s.retag(i, 0, "VIMP");
    }
}

/// `that` complementizers, `that` relatives and WH-subordinators as the POS tagger read them.
fn subordinate_clause(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let tag = if t.word_is("that") && t.is("IN") && !w[1].is_punct() {
        "THSC"
    } else if t.word_is("that") && t.is("WDT") && !w[1].is_punct() {
        "THRC"
    } else if is_wh_relative(t) || is_wh_subordinator(t) {
        "WHSC"
    } else {
        return;
    };
    s.retag(i, 0, tag);
}

fn hedge(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let hit = t.word_is_any(&["maybe", "possibly", "probably", "roughly", "predictably"])
        || ["apparently", "conceivably", "perhaps", "presumably", "somewhat"]
            .iter()
            .any(|suffix| ends_with(t, suffix))
        || (t.word_is_any(&["around", "about"]) && w[1].is_any(&["CD", "QUAN", "SYM", "$"]));
    if hit {
        s.retag(i, 0, "HDG");
    }
}

fn hedge_phrase(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let determiner_like = |t: &Token| t.is_any(&["DT", "QUAN", "CD", "J", "PRP"]) || is_wh_subordinator(t);
    let hit = (w[-1].word_is("at") && t.word_is("about"))
        || (w[-1].word_is("something") && t.word_is("like"))
        || (!determiner_like(&w[-2]) && w[-1].word_is("sort") && t.word_is("of"))
        || (!determiner_like(&w[-2]) && w[-1].word_is("kind") && w[-1].is("NN") && t.word_is("of"))
        || (!determiner_like(&w[-1]) && t.word_is_any(&["kinda", "sorta"]))
        || (w[-1].word_is("in") && t.word_is("most") && w[1].word_is_any(&["cases", "instances"]));
    let more_or_less = w[-2].word_is("more") && w[-1].word_is("or") && t.word_is("less");
    if more_or_less {
        s.retag(i, 0, "QUAN");
        s.retag(i, -2, "QUAN");
    }
    if hit || more_or_less {
        s.append(i, 0, "HDG");
    }
}

fn politeness(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let (prev, t, next) = (&w[-1], &w[0], &w[1]);
    let hit = (t.word_is("thank") && starts_with(next, "you"))
        || t.word_is_any(&["sorry", "apology", "apologies", "please", "cheers"])
        || (t.word_is("excuse") && t.is("V"))
        || (t.word_is("thanks") && !next.word_is("to"))
        || (!prev.word_is("got") && t.word_is("ta"))
        || (w[-2].word_is_any(&["i", "we"])
            && is_be(prev)
            && ((t.word_is("wonder") && t.is("V")) || t.word_is("wondering")))
        || ((prev.word_is("you") || prev.is("XX0")) && t.word_is("mind") && t.is("V"));
    if hit {
        s.append(i, 0, "POLITE");
    }
}

/// `have got` as possession; `has got arrested` as a perfect GET-passive.
fn have_got(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !starts_with(&w[0], "got") {
        return;
    }
    let adverb = |t: &Token| t.is_any(&["RB", "XX0", "EMPH", "DMA"]);
    let possession = is_have(&w[-1])
        || (adverb(&w[-1]) && is_have(&w[-2]))
        || (adverb(&w[-1]) && adverb(&w[-2]) && is_have(&w[-3]))
        || (is_subject(&w[-1]) && is_have(&w[-2]))
        || (adverb(&w[-1]) && is_subject(&w[-2]) && is_have(&w[-3]));
    let perfect = w[1].is_any(&["VBD", "VBN"]) && (is_have(&w[-1]) || (is_have(&w[-2]) && adverb(&w[-1])));
    if possession {
        s.retag(i, 0, "HGOT");
    }
    if perfect {
        s.retag(i, 0, "PEAS");
        s.retag(i, 1, "PGET");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::pass;

    #[test]
    fn test_discourse_markers() {
        assert_eq!(pass(RULES, "._. well_UH ,_,"), "._. | well_DMA | ,_,");
        assert_eq!(pass(RULES, "very_RB well_RB"), "very_RB | well_RB");
        assert_eq!(pass(RULES, "of_IN course_NN"), "of_IN | course_DMA");
        assert_eq!(pass(RULES, "to_TO make_VB sure_JJ"), "to_TO | make_VB | sure_JJ");
    }

    #[test]
    fn test_conjuncts_and_elaboration() {
        assert_eq!(pass(RULES, "for_IN example_NN"), "for_IN | example_NN ELAB");
        assert_eq!(pass(RULES, "however_RB"), "however_CC");
        assert_eq!(pass(RULES, "on_IN the_DT other_JJ hand_NN"), "on_IN | the_DT | other_JJAT | hand_NN CC");
        assert_eq!(pass(RULES, "because_IN"), "because_CUZ");
        assert_eq!(pass(RULES, "'cause_IN"), "'cause_CUZ");
        assert_eq!(pass(RULES, "to_TO cause_VB"), "to_TO | cause_VB");
        assert_eq!(pass(RULES, "as_IN a_DT result_NN"), "as_IN | a_DT | result_NN CUZ");
        assert_eq!(pass(RULES, "unless_IN"), "unless_COND");
    }

    #[test]
    fn test_emphatics() {
        assert_eq!(pass(RULES, "really_RB nice_JJ"), "really_EMPH | nice_JJ");
        assert_eq!(pass(RULES, "I_PRP do_VBP like_VB"), "I_PRP | do_VBP DOAUX EMPH | like_VB");
        assert_eq!(pass(RULES, "for_IN sure_JJ"), "for_IN EMPH | sure_DMA");
    }

    #[test]
    fn test_questions() {
        assert_eq!(
            pass(RULES, "it_PRP is_VBZ n't_XX0 it_PRP ?_."),
            "it_PRP | is_VBZ | n't_XX0 | it_PRP | ?_. QUTAG"
        );
        assert_eq!(
            pass(RULES, "are_VBP they_PRP there_RB ?_."),
            "are_VBP | they_PRP | there_RB | ?_. YNQU"
        );
        // A question word in front keeps the yes/no reading off
        assert_eq!(
            pass(RULES, "why_WRB are_VBP they_PRP there_RB ?_."),
            "why_WHSC | are_VBP | they_PRP | there_RB | ?_."
        );
    }

    #[test]
    fn test_passives() {
        assert_eq!(pass(RULES, "it_PRP was_VBD eaten_VBN"), "it_PRP | was_VBD | eaten_PASS");
        assert_eq!(pass(RULES, "was_VBD not_XX0 finished_VBD"), "was_VBD | not_XX0 | finished_PASS");
        assert_eq!(pass(RULES, "got_VBD the_DT car_NN cleaned_VBN"), "got_VBD | the_DT | car_NN | cleaned_PGET");
        assert_eq!(pass(RULES, "going_VBG to_TO leave_VB"), "going_GTO | to_TO | leave_VB");
    }

    #[test]
    fn test_imperatives() {
        assert_eq!(pass(RULES, "open_VB the_DT door_NN"), "open_VIMP | the_DT | door_NN");
        assert_eq!(pass(RULES, "read_VB it_PRP and_CC listen_VB"), "read_VIMP | it_PRP | and_CC | listen_VIMP");
        assert_eq!(pass(RULES, "you_PRP open_VB it_PRP"), "you_PRP | open_VB | it_PRP");
    }

    #[test]
    fn test_clauses_hedges_politeness() {
        assert_eq!(pass(RULES, "said_VBD that_IN he_PRP"), "said_VBD | that_THSC | he_PRP");
        assert_eq!(pass(RULES, "man_NN that_WDT left_VBD"), "man_NN | that_THRC | left_VBD");
        assert_eq!(pass(RULES, "unless_IN whether_IN"), "unless_COND | whether_WHSC");
        assert_eq!(pass(RULES, "whom_WP"), "whom_WHSC");
        assert_eq!(pass(RULES, "maybe_RB"), "maybe_HDG");
        assert_eq!(pass(RULES, "more_JJR or_CC less_JJR"), "more_QUAN | or_CC | less_QUAN HDG");
        assert_eq!(pass(RULES, "thank_VBP you_PRP"), "thank_VBP POLITE | you_PRP");
    }

    #[test]
    fn test_have_got() {
        assert_eq!(pass(RULES, "I_PRP 've_VBP got_VBN"), "I_PRP | 've_VBP | got_HGOT");
        assert_eq!(
            pass(RULES, "she_PRP has_VBZ got_VBN arrested_VBN"),
            "she_PRP | has_VBZ | got_PEAS | arrested_PGET"
        );
    }
}
