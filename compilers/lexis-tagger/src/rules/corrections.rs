//! Corrections of systematic POS-tagger errors and tags that follow from spelling alone.

use lexis_protocol::Sentence;

use super::{Rule, Window};
use crate::probe::{ends_in_symbol, ends_with, is_wh_relative};
use crate::shapes;

pub(super) static QUICK: &[Rule] = &[
    mention,
    possessive_pronoun,
    symbol,
    list_number,
    innit,
    prefix,
    emoji,
    hashtag,
    url,
    negation,
];

pub(super) static STRUCTURAL: &[Rule] = &[
    emoticon,
    question_run,
    to_preposition,
    dunno,
    inverted_have,
    there_is,
    discourse_marker,
    filler,
    so,
    quantifier,
];

fn mention(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_tagged() && t.word.starts_with('@') && t.word.chars().count() >= 3 {
        s.retag(i, 0, "NN");
        s.append(i, 0, "NNMention");
    }
}

fn possessive_pronoun(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let tag = if t.is_exactly("PRP$") {
        "PRPS"
    } else if t.is_exactly("WP$") {
        "WPS"
    } else {
        return;
    };
    s.retag(i, 0, tag);
}

/// Stray symbols the POS tagger took for adjectives, nouns or list markers.
fn symbol(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let Some(last) = t.word.chars().last() else {
        return;
    };
    // `50%` and `x@` but not a bare `%`
    let after_word_char = |c: char| {
        t.word
            .trim_end_matches(c)
            .chars()
            .last()
            .is_some_and(|p| p.is_alphanumeric() || p == '_')
    };
    let hit = match last {
        '<' | '>' | '=' => t.is("JJ"),
        '^' => t.is("FW"),
        '§' => t.is("CD"),
        '#' => t.is("NN"),
        '*' => t.is_tagged(),
        '@' | '%' => t.is_tagged() && after_word_char(last),
        _ => false,
    } || (t.is_exactly("LS") && !last.is_ascii_digit());
    if hit {
        s.retag(i, 0, "SYM");
    }
}

fn list_number(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if (t.is_tagged() && shapes::is_ordinal(&t.word)) || t.is_exactly("LS") {
        s.retag(i, 0, "CD");
    }
}

fn innit(s: &mut Sentence, i: usize) {
    if s.at(i, 0).word_is_any(&["innit", "init"]) {
        s.retag(i, 0, "PIT");
    }
}

fn prefix(s: &mut Sentence, i: usize) {
    if s.at(i, 0).word_is("pre") {
        s.retag(i, 0, "AFX");
    }
}

fn emoji(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_tagged() && shapes::is_emoji(&t.word) {
        s.retag(i, 0, "EMO");
    }
}

fn hashtag(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_tagged() && shapes::is_hashtag(&t.word) {
        s.retag(i, 0, "HST");
    }
}

fn url(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_tagged() && shapes::is_url(&t.word) {
        s.retag(i, 0, "URL");
    }
}

fn negation(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.word_is_any(&["not", "n't", "n\u{2019}t"]) || (t.word_is("nt") && t.is("RB")) {
        s.retag(i, 0, "XX0");
    }
}

fn emoticon(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_tagged() && shapes::is_emoticon(&t.word, &t.primary) {
        s.retag(i, 0, "EMO");
    }
}

fn question_run(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_tagged() && shapes::is_question_run(&t.word) {
        s.retag(i, 0, ".");
    }
}

/// `to` before a nominal or a clause boundary is a preposition, not an infinitive marker.
fn to_preposition(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let next = &w[1];
    if w[0].word_is("to")
        && (next.is_any(&["IN", "CD", "DT", "JJ", "WPS", "NN", "PDT", "PRP", "WDT", "WRB"])
            || is_wh_relative(next)
            || next.is_punct())
    {
        s.retag(i, 0, "IN");
    }
}

/// `du n no` as split by the POS tagger from `dunno`.
fn dunno(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if w[0].word_is("du") && w[1].word_is("n") && w[2].word_is("no") {
        s.retag(i, 0, "VPRT");
        s.retag(i, 1, "XX0");
        s.retag(i, 2, "VB");
    }
}

/// `have you finished`: inverted HAVE is a finite present form.
fn inverted_have(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if w[0].word_is("have") && w[0].is("VB") && w[1].is("PRP") && w[2].is_any(&["VBN", "VBD"]) {
        s.retag(i, 0, "VPRT");
    }
}

/// The `'s` of `there's` is a verb, not a possessive.
fn there_is(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if w[-1].word_is("there") && w[-1].is("EX") && w[0].is("POS") {
        s.retag(i, 0, "VPRT");
    }
}

fn discourse_marker(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = t.word_is_any(&[
        "actually", "damn", "goodness", "gosh", "yeah", "yep", "yes", "nope", "whatever", "lol",
        "imo", "omg", "wtf",
    ]) || (t.is_tagged() && t.bare_word().to_ascii_lowercase().starts_with("anyway"))
        || (t.word_is("right") && t.is("UH"));
    if hit {
        s.retag(i, 0, "DMA");
    }
}

fn filler(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_tagged() && shapes::is_filler(t.bare_word()) {
        s.retag(i, 0, "FPUH");
    }
}

fn so(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.word_is("so") && t.is_any(&["IN", "RB"]) {
        s.retag(i, 0, "SO");
    }
}

fn quantifier(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let t = &w[0];
    let next = &w[1];
    let hit = t.is("PDT")
        || t.word_is_any(&[
            "all", "any", "billions", "both", "dozens", "each", "every", "few", "half", "many",
            "millions", "much", "plenty", "several", "some", "lots", "loads", "heaps", "loada",
            "wee", "zillions",
        ])
        || ends_with(t, "hundreds")
        || ends_with(t, "thousands")
        || (t.word_is_any(&["more", "less"]) && t.is("JJ"))
        || (t.word_is_any(&["load", "couple"]) && next.word_is("of"))
        || (t.word_is("most")
            && (next.word_is("of") || next.is_punct() || ends_in_symbol(next) || next.is_any(&["N", "J"])))
        || (w[-1].word_is("a") && t.word_is_any(&["lot", "bit", "little"]))
        || (w[-2].word_is("a") && t.word_is_any(&["lot", "bit"]));
    if hit {
        s.retag(i, 0, "QUAN");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::pass;

    #[test]
    fn test_quick_corrections() {
        assert_eq!(pass(QUICK, "@alice_NNP"), "@alice_NN NNMention");
        assert_eq!(pass(QUICK, "@_NNP"), "@_NNP");
        assert_eq!(pass(QUICK, "her_PRP$ whose_WP$"), "her_PRPS | whose_WPS");
        assert_eq!(pass(QUICK, "<_JJ 50%_NN"), "<_SYM | 50%_SYM");
        assert_eq!(pass(QUICK, "4th_JJ b_LS 2_LS"), "4th_CD | b_SYM | 2_CD");
        assert_eq!(pass(QUICK, "innit_VBP pre_JJ"), "innit_PIT | pre_AFX");
        assert_eq!(pass(QUICK, "😀_NN #blessed_NN"), "😀_EMO | #blessed_HST");
        assert_eq!(pass(QUICK, "www.example.com_NN"), "www.example.com_URL");
        assert_eq!(pass(QUICK, "do_VBP n't_RB go_VB"), "do_VBP | n't_XX0 | go_VB");
    }

    #[test]
    fn test_structural_corrections() {
        assert_eq!(pass(STRUCTURAL, ":-RRB-_JJ"), ":-RRB-_EMO");
        assert_eq!(pass(STRUCTURAL, "?!?_NN"), "?!?_.");
        assert_eq!(pass(STRUCTURAL, "went_VBD to_TO the_DT"), "went_VBD | to_IN | the_DT");
        assert_eq!(pass(STRUCTURAL, "to_TO go_VB"), "to_TO | go_VB");
        assert_eq!(pass(STRUCTURAL, "du_VBP n_RB no_UH"), "du_VPRT | n_XX0 | no_VB");
        assert_eq!(pass(STRUCTURAL, "there_EX 's_POS"), "there_EX | 's_VPRT");
        assert_eq!(pass(STRUCTURAL, "yeah_UH erm_UH"), "yeah_DMA | erm_FPUH");
        assert_eq!(pass(STRUCTURAL, "so_RB"), "so_SO");
    }

    #[test]
    fn test_quantifiers() {
        assert_eq!(pass(STRUCTURAL, "a_DT lot_NN of_IN"), "a_DT | lot_QUAN | of_IN");
        assert_eq!(pass(STRUCTURAL, "a_DT whole_JJ lot_NN"), "a_DT | whole_JJ | lot_QUAN");
        assert_eq!(pass(STRUCTURAL, "most_JJS people_NNS"), "most_QUAN | people_NNS");
        assert_eq!(pass(STRUCTURAL, "couple_NN of_IN"), "couple_QUAN | of_IN");
        assert_eq!(pass(STRUCTURAL, "couple_NN"), "couple_NN");
    }
}
