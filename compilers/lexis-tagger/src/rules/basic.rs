//! Basic tags that have to come last so that they do not clash with the complex rules above:
//! pronouns, adverbials, modals, contractions, and the collapse of the remaining POS tags.

use lexis_protocol::{Sentence, Token};

use super::{Rule, Window};
use crate::probe::{ends_with, is_clitic, is_do, is_question, is_wh, starts_with};

pub(super) static FIRST_PERSON: &[Rule] = &[first_person_singular, first_person_plural, let_imperative];

pub(super) static ADVERBIALS: &[Rule] = &[concessive, concessive_phrase, place, existential_there, time];

pub(super) static LEXICAL_DO: &[Rule] = &[lexical_do, semi_modal_need, remaining_question];

pub(super) static FINAL: &[Rule] = &[
    amplifier,
    downtoner,
    pronoun_quantifier,
    predicative_adjective,
    adverb,
    present_tense,
    personal_pronoun,
    modal,
    contraction,
    filled_pause,
    frequency,
    to_preposition,
];

pub(super) static PROPER_NOUNS: &[Rule] = &[proper_noun];

pub(super) static NOUNS: &[Rule] = &[noun_compound, noun, pronoun_it, other_modal, other_pronoun];

/// Any case, any tag, or a prefix of the word when the entry ends with `*`.
fn listed(t: &Token, words: &[&str]) -> bool {
    words.iter().any(|w| match w.strip_suffix('*') {
        Some(prefix) => starts_with(t, prefix),
        None => t.word_is(w),
    })
}

fn first_person_singular(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = (t.word_is("i") && t.is_any(&["P", "SYM", "FW"])) || t.word_is_any(&["me", "my", "myself", "mine"]);
    if hit {
        s.retag(i, 0, "PP1S");
    }
}

/// All-caps `US` is left alone; it is usually the country.
fn first_person_plural(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = t.word_is_any(&["we", "our", "ourselves", "ours"])
        || (is_clitic(t, "s") && t.is("PRP"))
        || (matches!(t.word.as_str(), "us" | "Us") && t.is("P"));
    if hit {
        s.retag(i, 0, "PP1P");
    }
}

fn let_imperative(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if !w[0].word_is("let") {
        return;
    }
    let person = if is_clitic(&w[1], "s") || w[1].word_is("us") {
        "PP1P"
    } else if w[1].word_is("me") {
        "PP1S"
    } else {
        return;
    };
    s.retag(i, 0, "VIMP");
    s.retag(i, 1, person);
}

fn concessive(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let (prev, t, next) = (&w[-1], &w[0], &w[1]);
    let hit = listed(t, &["although", "tho", "despite*", "albeit", "whereas"])
        || ["nevertheless", "nonetheless", "notwithstanding"].iter().any(|suffix| ends_with(t, suffix))
        || (t.word_is("except") && next.word_is("that"))
        || (t.word_is("granted") && (next.word_is("that") || next.is_exactly(",")))
        || (t.word_is_any(&["regardless", "irregardless"]) && next.word_is("of"))
        || (prev.word_is("even") && t.word_is("if"))
        || (t.word_is_any(&["yet", "still"]) && next.is_exactly(","))
        || (!prev.word_is("as") && t.word_is("though"))
        || (t.word_is_any(&["yet", "granted", "still"]) && prev.is_punct());
    if hit {
        s.retag(i, 0, "CONC");
    }
}

fn concessive_phrase(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let hit = (w[-1].word_is("no") && w[0].word_is("matter") && is_wh(&w[1]))
        || (w[-1].word_is("in") && w[0].word == "spite" && w[1].word_is("of"));
    if hit {
        s.append(i, 0, "CONC");
    }
}

const PLACE: &[&str] = &[
    "aboard", "abroad", "ahead", "anywhere", "alongside", "ashore", "astern", "backward*", "beneath",
    "downhill", "downstairs", "downstream", "downwards", "east", "hereabouts", "indoors", "inland",
    "inshore", "locally", "near", "nearby", "north", "nowhere", "outdoors", "overboard", "overland",
    "overseas", "south", "underfoot", "underground", "underneath", "uphill", "upstairs", "upstream",
    "upward*", "west", "downwind*", "eastward*", "westward*", "northward*", "southward*", "elsewhere*",
    "everywhere*", "here", "offshore*", "somewhere*", "thereabout*", "online",
];

/// Place words that are only adverbials when tagged as adverbs.
const PLACE_ADVERBS: &[&str] = &[
    "above", "across", "around", "away", "behind", "below", "beside", "inside", "outside", "far", "there",
];

fn place(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = !t.is("NNP")
        && (listed(t, PLACE)
            || (t.is("RB") && t.word_is_any(PLACE_ADVERBS))
            || (t.word_is("offline") && t.is("N")));
    if hit {
        s.retag(i, 0, "PLACE");
    }
}

/// `there might be`: the POS tagger misses existential `there` before modals.
fn existential_there(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    if w[0].word_is("there") && w[0].is("P") && w[1].is("MD") {
        s.retag(i, 0, "EX");
    }
}

const TIME: &[&str] = &[
    "ago", "afterwards", "again", "already", "beforehand", "briefly", "currently", "eventually",
    "formerly", "immediately", "initially", "instantly", "forever", "lately", "momentarily", "now",
    "nowadays", "once", "originally", "presently", "previously", "recently", "shortly",
    "simultaneously", "sooner", "subsequently", "suddenly*", "today", "to-day", "tomorrow",
    "to-morrow", "tonight", "to-night", "yesterday",
];

const TIME_ADVERBS: &[&str] = &["after", "before", "earlier", "early", "late", "later", "yet"];

fn time(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let (prev, t, next) = (&w[-1], &w[0], &w[1]);
    let hit = listed(t, TIME)
        || (t.is("RB") && t.word_is_any(TIME_ADVERBS))
        || (t.word_is_any(&["am", "pm"]) && t.is_any(&["RB", "NN"]))
        || (t.word_is("soon") && !next.word_is("as"))
        || (t.word_is("prior") && next.word_is("to"))
        || (prev.word_is_any(&["so", "thus"]) && t.word_is("far") && !next.is_any(&["J", "RB"]));
    if hit {
        s.retag(i, 0, "TIME");
    }
}

/// DO that is not an auxiliary is an activity verb.
fn lexical_do(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if is_do(t) && !t.has("DOAUX") {
        s.append(i, 0, "ACT");
    }
}

/// `need to`, `have to`
fn semi_modal_need(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let hit = w[0].is("V")
        && w[0].word_is_any(&["need", "needs", "needed", "have", "has", "had", "having"])
        && w[1].word_is("to")
        && w[1].is("TO");
    if hit {
        s.retag(i, 0, "MDNE");
    }
}

/// Question marks still without a question type close yes/no questions, unless they follow
/// a filler or discourse marker (`right?`, `eh?`).
fn remaining_question(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let hit = is_question(&w[0])
        && !w[0].has_any(&["YNQU", "WQ", "QUTAG"])
        && !w[-1].is_any(&["UH", "FPUH", "DMA"]);
    if hit {
        s.append(i, 0, "YNQU");
    }
}

fn amplifier(s: &mut Sentence, i: usize) {
    let hit = s.at(i, 0).word_is_any(&[
        "absolutely", "altogether", "definitely", "completely", "enormously", "entirely", "especially",
        "extremely", "extraordinarily", "fully", "greatly", "highly", "intensely", "perfectly", "sorely",
        "strongly", "thoroughly", "totally", "utterly", "very",
    ]);
    if hit {
        s.retag(i, 0, "AMP");
    }
}

fn downtoner(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = t.word_is_any(&[
        "almost", "barely", "hardly", "merely", "mildly", "nearly", "only", "partially", "partly",
        "practically", "scarcely", "slightly", "somewhat",
    ]) || (t.word_is("less") && t.is("JJ"));
    if hit {
        s.retag(i, 0, "DWNT");
    }
}

fn pronoun_quantifier(s: &mut Sentence, i: usize) {
    let hit = listed(
        s.at(i, 0),
        &[
            "anybody", "anyone", "anything", "everybody", "everyone", "everything", "nobody", "none",
            "nothing", "somebody", "someone", "something", "somewhere*", "noone", "no-one", "others",
        ],
    );
    if hit {
        s.retag(i, 0, "QUPR");
    }
}

/// Adjectives that did not become attributive are predicative.
fn predicative_adjective(s: &mut Sentence, i: usize) {
    if s.at(i, 0).is_any(&["JJS", "JJR"]) || s.at(i, 0).is_exactly("JJ") {
        s.retag(i, 0, "JJPR");
    }
}

fn adverb(s: &mut Sentence, i: usize) {
    if s.at(i, 0).is_any(&["RBS", "RBR", "WRB"]) {
        s.retag(i, 0, "RB");
    }
}

fn present_tense(s: &mut Sentence, i: usize) {
    if s.at(i, 0).is_any(&["VBP", "VBZ"]) {
        s.retag(i, 0, "VPRT");
    }
}

fn personal_pronoun(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let tag = if t.word_is_any(&[
        "you", "your", "yourself", "yourselves", "thy", "thee", "thyself", "thou", "yours", "ur", "y'",
        "thine",
    ]) || (t.word_is_any(&["u", "ye", "ya"]) && t.is("PRP"))
    {
        "PP2"
    } else if t.word_is_any(&["they", "them", "their", "themselves", "theirs", "themself"])
        || (is_clitic(t, "em") && t.is("PRP"))
    {
        "PP3t"
    } else if t.word_is_any(&["she", "her", "hers", "herself"]) {
        "PP3f"
    } else if t.word_is_any(&["he", "him", "his", "himself"]) {
        "PP3m"
    } else {
        return;
    };
    s.retag(i, 0, tag);
}

fn modal(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let md = t.is("MD");
    let tag = if (md && t.word_is_any(&["can", "ca"])) || t.word_is("cannot") {
        "MDCA"
    } else if md && t.word_is("could") {
        "MDCO"
    } else if md && t.word_is_any(&["ought", "should", "must", "need"]) {
        "MDNE"
    } else if md && t.word_is_any(&["may", "might"]) {
        "MDMM"
    } else if (md && (t.word_is("will") || is_clitic(t, "ll"))) || t.word_is_any(&["shall", "sha"]) {
        "MDWS"
    } else if t.word_is("would") || (md && t.word_is_any(&["d", "wo"])) {
        "MDWO"
    } else {
        return;
    };
    s.retag(i, 0, tag);
}

fn contraction(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let clitic_verb = t.is("V") && t.word.len() > t.bare_word().len() && !t.bare_word().is_empty();
    let hit = clitic_verb
        || (t.word_is_any(&["n't", "n\u{2019}t", "nt"]) && t.is("XX0"))
        || is_clitic(t, "ll")
        || is_clitic(t, "d");
    if hit {
        s.append(i, 0, "CONT");
    }
}

/// Remaining interjections, once politeness and discourse markers have claimed theirs.
fn filled_pause(s: &mut Sentence, i: usize) {
    if s.at(i, 0).is("UH") {
        s.retag(i, 0, "FPUH");
    }
}

fn frequency(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    let hit = listed(
        t,
        &[
            "usually", "always", "often", "generally*", "normally*", "traditionally*", "again",
            "constantly*", "continually*", "frequently*", "ever", "never", "infrequently*",
            "intermittently*", "occasionally*", "oftens", "periodically*", "rarely", "regularly*",
            "repeatedly*", "seldom*", "sometimes*", "sporadically*", "yearly*",
        ],
    ) || ends_with(t, "daily")
        || ends_with(t, "weekly");
    if hit {
        s.retag(i, 0, "FREQ");
    }
}

fn to_preposition(s: &mut Sentence, i: usize) {
    if s.at(i, 0).is("TO") {
        s.retag(i, 0, "IN");
    }
}

fn proper_noun(s: &mut Sentence, i: usize) {
    if s.at(i, 0).is("NNP") {
        s.append(i, 0, "NNP");
    }
}

/// `Monday afternoon`, `Hollywood stars`: a noun (possibly proper) before a common noun.
/// One-letter tokens are usually OCR debris and never form compounds.
fn noun_compound(s: &mut Sentence, i: usize) {
    let w = Window::new(s, i);
    let long = |t: &Token| t.word.chars().count() >= 2;
    let first = &w[0];
    let second = &w[1];
    let hit = long(first)
        && first.is("NN")
        && !first.has("NCOMP")
        && first.secondary.iter().all(|tag| tag == "NNP")
        && long(second)
        && (second.is_exactly("NN") || second.is_exactly("NNS"));
    if hit {
        s.append(i, 1, "NCOMP");
    }
}

fn noun(s: &mut Sentence, i: usize) {
    if s.at(i, 0).is("NN") {
        s.retag(i, 0, "NN");
    }
}

fn pronoun_it(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_exactly("PRP") && matches!(t.word.as_str(), "It" | "it" | "its" | "itself") {
        s.retag(i, 0, "PIT");
    }
}

fn other_modal(s: &mut Sentence, i: usize) {
    if s.at(i, 0).is_exactly("MD") {
        s.retag(i, 0, "MDother");
    }
}

fn other_pronoun(s: &mut Sentence, i: usize) {
    let t = s.at(i, 0);
    if t.is_exactly("PRP") || t.is_exactly("PRPS") {
        s.retag(i, 0, "PPother");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{pass, simple, tagged};
    use lexis_protocol::Layers;

    #[test]
    fn test_first_person() {
        assert_eq!(pass(FIRST_PERSON, "I_PRP told_VBD my_PRPS mum_NN"), "I_PP1S | told_VBD | my_PP1S | mum_NN");
        assert_eq!(pass(FIRST_PERSON, "let_VB 's_PRP go_VB"), "let_VIMP | 's_PP1P | go_VB");
        assert_eq!(pass(FIRST_PERSON, "the_DT US_PRP"), "the_DT | US_PRP");
    }

    #[test]
    fn test_adverbials() {
        assert_eq!(pass(ADVERBIALS, "even_RB if_IN"), "even_RB | if_CONC");
        assert_eq!(pass(ADVERBIALS, "as_IN though_IN"), "as_IN | though_IN");
        assert_eq!(pass(ADVERBIALS, "in_IN spite_NN of_IN"), "in_IN | spite_NN CONC | of_IN");
        assert_eq!(pass(ADVERBIALS, "upstairs_RB outside_IN"), "upstairs_PLACE | outside_IN");
        assert_eq!(pass(ADVERBIALS, "there_PRP might_MD"), "there_EX | might_MD");
        assert_eq!(pass(ADVERBIALS, "yesterday_NN soon_RB as_IN"), "yesterday_TIME | soon_RB | as_IN");
    }

    #[test]
    fn test_lexical_do_and_questions() {
        assert_eq!(pass(LEXICAL_DO, "did_VBD it_PRP"), "did_VBD ACT | it_PRP");
        assert_eq!(pass(LEXICAL_DO, "have_VBP to_TO go_VB"), "have_MDNE | to_TO | go_VB");
        assert_eq!(pass(LEXICAL_DO, "really_RB ?_."), "really_RB | ?_. YNQU");
        assert_eq!(pass(LEXICAL_DO, "eh_UH ?_."), "eh_UH | ?_.");
    }

    #[test]
    fn test_final_tags() {
        assert_eq!(pass(FINAL, "very_RB nice_JJ"), "very_AMP | nice_JJPR");
        assert_eq!(pass(FINAL, "they_PRP 'll_MD"), "they_PP3t | 'll_MDWS CONT");
        assert_eq!(pass(FINAL, "she_PRP would_MD"), "she_PP3f | would_MDWO");
        assert_eq!(pass(FINAL, "ca_MD n't_XX0"), "ca_MDCA | n't_XX0 CONT");
        assert_eq!(pass(FINAL, "goes_VBZ weekly_JJ"), "goes_VPRT | weekly_FREQ");
        assert_eq!(pass(FINAL, "oh_UH to_TO"), "oh_FPUH | to_IN");
    }

    #[test]
    fn test_nouns() {
        assert_eq!(pass(NOUNS, "Monday_NNP afternoon_NN"), "Monday_NN | afternoon_NN NCOMP");
        assert_eq!(pass(NOUNS, "Barack_NNP Obama_NNP"), "Barack_NN | Obama_NN");
        assert_eq!(pass(NOUNS, "x_NN ray_NN"), "x_NN | ray_NN");
        assert_eq!(pass(NOUNS, "could_MD them_PRP"), "could_MDother | them_PPother");
    }

    #[test]
    fn test_proper_nouns_survive_under_extended() {
        assert_eq!(simple("Paris_NNP"), "Paris_NN");
        assert!(tagged("Paris_NNP", Layers::SIMPLE | Layers::EXTENDED).starts_with("Paris_NN NNP"));
    }
}
