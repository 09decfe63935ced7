//! Clause-level passes that depend on the complex tags: WH-questions, perfect and progressive
//! aspect, BE as a main verb, demonstratives, that-deletion and the pronoun `it`.

use lexis_protocol::{Sentence, Token};

use super::{Rule, Window};
use crate::probe::{
    ends_in_symbol, ends_with, in_set, in_set_as, is_aux, is_bare_question, is_be, is_clitic, is_have,
    is_participle, is_question, is_subject, is_wh, lexicon,
};

pub(super) static QUESTIONS_AND_ASPECT: &[Rule] = &[
    wh_question,
    wh_question_mark,
    coordinated_attributive,
    perfect_aspect,
    would_had,
    coordinated_passive,
    able_to,
];

pub(super) static PROGRESSIVE: &[Rule] = &[progressive, like];

pub(super) static BE_MAIN_VERB: &[Rule] = &[be_main_verb];

pub(super) static DEMONSTRATIVES: &[Rule] = &[demonstrative, predicative_adjective];

pub(super) static THAT_DELETION: &[Rule] = &[that_deletion];

pub(super) static PRONOUN_IT: &[Rule] = &[pronoun_it];

/// A question word closing on a question mark within sixteen tokens.
fn wh_question(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !is_wh(&w[0]) {
        return;
    }
    let hit = (w[1].is_tagged() && w[1].word.ends_with('?'))
        || (is_aux(&w[1]) && (2..=4).any(|k| is_question(&w[k])))
        || (2..=16).any(|k| is_bare_question(&w[k]));
    if hit {
        s.retag(i, 0, "WHQU");
    }
}

/// Marks the question mark of a WH-question so that it is not counted as a yes/no question
/// or a question tag.
fn wh_question_mark(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let hit = (is_wh(&w[-1]) && t.is_tagged() && t.word.ends_with('?'))
        || (is_question(t) && (2..=15).any(|k| w[-k].is("WHQU")));
    if hit {
        s.append(i, 0, "WQ");
    }
}

/// Adjectives coordinated with an attributive adjective: `a long and boring speech`.
fn coordinated_attributive(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !w[0].is("JJ") {
        return;
    }
    let and = |t: &Token| t.word_is("and");
    let comma = |t: &Token| t.word == "," && t.is_exactly(",");
    let attributive = |t: &Token| t.is("JJAT");
    let hit = (attributive(&w[-2]) && (and(&w[-1]) || comma(&w[-1])))
        || ((and(&w[1]) || comma(&w[1])) && attributive(&w[2]))
        || (comma(&w[1]) && and(&w[2]) && attributive(&w[3]))
        || (attributive(&w[-3]) && comma(&w[-2]) && and(&w[-1]));
    if hit {
        s.retag(i, 0, "JJAT");
    }
}

fn perfect_aspect(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let form = t.is("VBN") || (t.is("VBD") && ends_with(t, "ed"));
    // `'s been`, `'s had` and stative verbs after `'s` are HAS rather than BE.
    let unlikely_passive = t.is("PASS")
        && (t.word_is_any(&["been", "had", "done"]) || in_set(t, &lexicon().verbs.stative));
    let clitic_s = |t: &Token| t.word_is("s") && t.is("VBZ");
    let hit = (form && is_have(&w[-1]))
        || (form && w[-1].is_any(&["RB", "XX0", "EMPH", "PRP", "DMA", "CC"]) && is_have(&w[-2]))
        || (unlikely_passive && clitic_s(&w[-1]))
        || (unlikely_passive && w[-1].is_any(&["RB", "XX0", "EMPH", "DMA"]) && clitic_s(&w[-2]))
        || (form && w[-2].is_any(&["RB", "XX0", "EMPH", "CC"]) && is_have(&w[-3]))
        || (form && is_subject(&w[-1]) && is_have(&w[-2]))
        || (form && is_have(&w[-1]) && w[1].is("P"))
        || (form
            && w[1].is("P")
            && w[-1].is_any(&["XX0", "RB", "EMPH", "DMA", "CC"])
            && w[-2].is_any(&["XX0", "RB", "EMPH"])
            && is_have(&w[-3]))
        || (form && w[1].is("PASS") && w[-1].is_any(&["XX0", "RB", "EMPH", "DMA", "CC"]) && is_have(&w[-2]))
        || (form && w[1].is_any(&["XX0", "EMPH", "DMA", "CC"]) && is_subject(&w[-1]) && is_have(&w[-2]));
    if hit {
        s.retag(i, 0, "PEAS");
    }
}

/// `'d` the POS tagger read as `would` where it stands for `had`.
fn would_had(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !(is_clitic(&w[-1], "d") && w[-1].is("MD")) {
        return;
    }
    if w[0].is("VBN") {
        // He'd eaten
        s.retag(i, -1, "VBD");
        s.retag(i, 0, "PEAS");
    } else if w[0].is_any(&["RB", "EMPH"]) && w[1].is("VBN") {
        // She'd never been
        s.retag(i, -1, "VBD");
        s.retag(i, 1, "PEAS");
    } else if w[0].word_is("better") {
        s.retag(i, -1, "VBD");
    }
}

/// `they were selected and extracted`
fn coordinated_passive(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if is_participle(&w[0]) && w[-1].word_is_any(&["and", "or"]) && w[-2].is("PASS") {
        s.retag(i, -1, "CC");
        s.retag(i, 0, "PASS");
    }
}

fn able_to(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !(w[0].word_is_any(&["able", "unable"]) && w[0].is("J") && w[1].word_is("to")) {
        return;
    }
    let be = if is_be(&w[-1]) {
        -1
    } else if is_be(&w[-2]) {
        -2
    } else {
        return;
    };
    s.append(i, be, "BEMA");
    s.retag(i, 0, "ABLE");
}

fn progressive(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !w[0].is("VBG") {
        return;
    }
    let adverb = |t: &Token| t.is_any(&["RB", "XX0", "EMPH", "CC"]);
    let subject = |t: &Token| t.is("PRP") || is_subject(t);
    let hit = is_be(&w[-1])
        || (adverb(&w[-1]) && is_be(&w[-2]))
        || (adverb(&w[-1]) && adverb(&w[-2]) && is_be(&w[-3]))
        || (subject(&w[-1]) && is_be(&w[-2]))
        || (subject(&w[-1]) && w[-2].is_any(&["XX0", "EMPH"]) && is_be(&w[-3]))
        || (w[-1].is_any(&["XX0", "EMPH"]) && subject(&w[-2]) && is_be(&w[-3]));
    if hit {
        s.retag(i, 0, "PROG");
    }
}

/// `like` is too ambiguous between preposition, adjective, filler and quotative to keep its POS tag.
fn like(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.word_is("like") && t.is_any(&["IN", "JJ", "UH"]) {
        s.retag(i, 0, "LIKE");
    }
}

/// BE followed by a complement rather than a participle: `Who is Dinah?`, `She was so much frightened`.
fn be_main_verb(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if w[-2].is("EX") || w[-1].is("EX") {
        return;
    }
    let be = is_be(&w[0]);
    let be_or_been = be || w[0].word_is("been");
    if !be_or_been {
        return;
    }
    let aspect_follows = |t: &Token| t.has("QUTAG") || t.is_any(&["PROG", "PASS"]);
    let complement = |t: &Token| t.is_any(&["CD", "DT", "PRP", "J", "IN", "QUAN", "EMPH"]);
    let hit = ((complement(&w[1]) || w[1].is("CUZ") || is_wh(&w[1]))
        && !(w[2].has("QUTAG") || w[2].is("PROG"))
        && !(w[3].has("QUTAG") || w[3].is("PROG")))
        || (!w[1].is("V") && ends_in_symbol(&w[2]) && !w[2].has("QUTAG"))
        || (be && w[2].is_any(&["XX0", "NN"]) && ends_in_symbol(&w[3]) && !w[3].has("QUTAG"))
        || ((complement(&w[1]) || w[1].is_any(&["RB", "NN"]))
            && (complement(&w[2]) || (w[2].word_is("to") && w[2].is("TO")))
            && !(1..=3).any(|k| aspect_follows(&w[k + 1])))
        || (w[1].is_any(&["RB", "XX0"]) && complement(&w[2]) && !aspect_follows(&w[2]) && !aspect_follows(&w[3]));
    if hit {
        s.append(i, 0, "BEMA");
    }
}

fn demonstrative(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = (t.word_is_any(&["that", "this", "these", "those"]) && t.is("DT"))
        || (t.word_is("that") && t.is_any(&["IN", "WDT"]));
    if hit {
        s.retag(i, 0, "DEMO");
    }
}

fn predicative_adjective(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if w[-1].has("BEMA") && w[0].is("J") {
        s.retag(i, 0, "JJPR");
    }
}

/// Public, private and suasive verbs directly followed by a clause: `I think he left`.
fn that_deletion(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let verbs = &lexicon().verbs;
    let t = &w[0];
    if !(in_set_as(t, &verbs.public, "V") || in_set_as(t, &verbs.private, "V") || in_set_as(t, &verbs.suasive, "V")) {
        return;
    }
    let modifier = |t: &Token| t.is_any(&["J", "RB", "DT", "QUAN", "CD", "PRP"]);
    let finite = |t: &Token| t.is_any(&["MD", "V"]);
    let hit = (w[1].is_any(&["DEMO", "PRP", "N"]) && (finite(&w[2]) || w[2].is("DT")))
        || (modifier(&w[1]) && w[2].is("N") && finite(&w[3]))
        || (modifier(&w[1]) && w[2].is("J") && w[3].is("N") && finite(&w[4]));
    if hit {
        s.append(i, 0, "THATD");
    }
}

/// All-caps `IT` only counts as a pronoun when the POS tagger says so; it is usually
/// information technology.
fn pronoun_it(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = t.word_is_any(&["its", "itself"])
        || (t.is_tagged() && matches!(t.word.as_str(), "it" | "It"))
        || (t.word == "IT" && t.is("P"));
    if hit {
        s.retag(i, 0, "PIT");
    }
}
