/// Speech-act verbs that license that-deletion.
pub const PUBLIC: &[&str] = &[
    "acknowledge", "acknowledged", "acknowledges", "acknowledging", "add", "adds", "adding",
    "added", "admit", "admits", "admitting", "admitted", "affirm", "affirms", "affirming",
    "affirmed", "agree", "agrees", "agreeing", "agreed", "allege", "alleges", "alleging",
    "alleged", "announce", "announces", "announcing", "announced", "argue", "argues", "arguing",
    "argued", "assert", "asserts", "asserting", "asserted", "bet", "bets", "betting", "boast",
    "boasts", "boasting", "boasted", "certify", "certifies", "certifying", "certified", "claim",
    "claims", "claiming", "claimed", "comment", "comments", "commenting", "commented", "complain",
    "complains", "complaining", "complained", "concede", "concedes", "conceding", "conceded",
    "confess", "confesses", "confessing", "confessed", "confide", "confides", "confiding",
    "confided", "confirm", "confirms", "confirming", "confirmed", "contend", "contends",
    "contending", "contended", "convey", "conveys", "conveying", "conveyed", "declare", "declares",
    "declaring", "declared", "deny", "denies", "denying", "denied", "disclose", "discloses",
    "disclosing", "disclosed", "exclaim", "exclaims", "exclaiming", "exclaimed", "explain",
    "explains", "explaining", "explained", "forecast", "forecasts", "forecasting", "forecasted",
    "foretell", "foretells", "foretelling", "foretold", "guarantee", "guarantees", "guaranteeing",
    "guaranteed", "hint", "hints", "hinting", "hinted", "insist", "insists", "insisting",
    "insisted", "maintain", "maintains", "maintaining", "maintained", "mention", "mentions",
    "mentioning", "mentioned", "object", "objects", "objecting", "objected", "predict", "predicts",
    "predicting", "predicted", "proclaim", "proclaims", "proclaiming", "proclaimed", "promise",
    "promises", "promising", "promised", "pronounce", "pronounces", "pronouncing", "pronounced",
    "prophesy", "prophesies", "prophesying", "prophesied", "protest", "protests", "protesting",
    "protested", "remark", "remarks", "remarking", "remarked", "repeat", "repeats", "repeating",
    "repeated", "reply", "replies", "replying", "replied", "report", "reports", "reporting",
    "reported", "say", "says", "saying", "said", "state", "states", "stating", "stated", "submit",
    "submits", "submitting", "submitted", "suggest", "suggests", "suggesting", "suggested",
    "swear", "swears", "swearing", "swore", "sworn", "testify", "testifies", "testifying",
    "testified", "vow", "vows", "vowing", "vowed", "warn", "warns", "warning", "warned", "write",
    "writes", "writing", "wrote", "written",
];

/// Verbs of cognition that license that-deletion.
pub const PRIVATE: &[&str] = &[
    "accept", "accepts", "accepting", "accepted", "anticipate", "anticipates", "anticipating",
    "anticipated", "ascertain", "ascertains", "ascertaining", "ascertained", "assume", "assumes",
    "assuming", "assumed", "believe", "believes", "believing", "believed", "calculate",
    "calculates", "calculating", "calculated", "check", "checks", "checking", "checked",
    "conclude", "concludes", "concluding", "concluded", "conjecture", "conjectures",
    "conjecturing", "conjectured", "consider", "considers", "considering", "considered", "decide",
    "decides", "deciding", "decided", "deduce", "deduces", "deducing", "deduced", "deem", "deems",
    "deeming", "deemed", "demonstrate", "demonstrates", "demonstrating", "demonstrated",
    "determine", "determines", "determining", "determined", "discern", "discerns", "discerning",
    "discerned", "discover", "discovers", "discovering", "discovered", "doubt", "doubts",
    "doubting", "doubted", "dream", "dreams", "dreaming", "dreamt", "dreamed", "ensure", "ensures",
    "ensuring", "ensured", "establish", "establishes", "establishing", "established", "estimate",
    "estimates", "estimating", "estimated", "expect", "expects", "expecting", "expected", "fancy",
    "fancies", "fancying", "fancied", "fear", "fears", "fearing", "feared", "feel", "feels",
    "feeling", "felt", "find", "finds", "finding", "found", "foresee", "foresees", "foreseeing",
    "foresaw", "forget", "forgets", "forgetting", "forgot", "forgotten", "gather", "gathers",
    "gathering", "gathered", "guess", "guesses", "guessing", "guessed", "hear", "hears", "hearing",
    "heard", "hold", "holds", "holding", "held", "hope", "hopes", "hoping", "hoped", "imagine",
    "imagines", "imagining", "imagined", "imply", "implies", "implying", "implied", "indicate",
    "indicates", "indicating", "indicated", "infer", "infers", "inferring", "inferred", "insure",
    "insures", "insuring", "insured", "judge", "judges", "judging", "judged", "know", "knows",
    "knowing", "knew", "known", "learn", "learns", "learning", "learnt", "learned", "mean",
    "means", "meaning", "meant", "note", "notes", "noting", "noted", "notice", "notices",
    "noticing", "noticed", "observe", "observes", "observing", "observed", "perceive", "perceives",
    "perceiving", "perceived", "presume", "presumes", "presuming", "presumed", "presuppose",
    "presupposes", "presupposing", "presupposed", "pretend", "pretending", "pretended", "prove",
    "proves", "proving", "proved", "realize", "realise", "realising", "realizing", "realises",
    "realizes", "realised", "realized", "reason", "reasons", "reasoning", "reasoned", "recall",
    "recalls", "recalling", "recalled", "reckon", "reckons", "reckoning", "reckoned", "recognize",
    "recognise", "recognizes", "recognises", "recognizing", "recognising", "recognized",
    "recognised", "reflect", "reflects", "reflecting", "reflected", "remember", "remembers",
    "remembering", "remembered", "reveal", "reveals", "revealing", "revealed", "see", "sees",
    "seeing", "saw", "seen", "sense", "senses", "sensing", "sensed", "show", "shows", "showing",
    "showed", "shown", "signify", "signifies", "signifying", "signified", "suppose", "supposes",
    "supposing", "supposed", "suspect", "suspects", "suspecting", "suspected", "think", "thinks",
    "thinking", "thought", "understand", "understands", "understanding", "understood",
];

pub const SUASIVE: &[&str] = &[
    "agree", "agrees", "agreeing", "agreed", "allow", "allows", "allowing", "allowed", "arrange",
    "arranges", "arranging", "arranged", "ask", "asks", "asking", "asked", "beg", "begs",
    "begging", "begged", "command", "commands", "commanding", "commanded", "concede", "concedes",
    "conceding", "conceded", "decide", "decides", "deciding", "decided", "decree", "decrees",
    "decreeing", "decreed", "demand", "demands", "demanding", "demanded", "desire", "desires",
    "desiring", "desired", "determine", "determines", "determining", "determined", "enjoin",
    "enjoins", "enjoining", "enjoined", "ensure", "ensures", "ensuring", "ensured", "entreat",
    "entreats", "entreating", "entreated", "grant", "grants", "granting", "granted", "insist",
    "insists", "insisting", "insisted", "instruct", "instructs", "instructing", "instructed",
    "intend", "intends", "intending", "intended", "move", "moves", "moving", "moved", "ordain",
    "ordains", "ordaining", "ordained", "order", "orders", "ordering", "ordered", "pledge",
    "pledges", "pledging", "pledged", "pray", "prays", "praying", "prayed", "prefer", "prefers",
    "preferring", "preferred", "pronounce", "pronounces", "pronouncing", "pronounced", "propose",
    "proposes", "proposing", "proposed", "recommend", "recommends", "recommending", "recommended",
    "request", "requests", "requesting", "requested", "require", "requires", "requiring",
    "required", "resolve", "resolves", "resolving", "resolved", "rule", "rules", "ruling", "ruled",
    "stipulate", "stipulates", "stipulating", "stipulated", "suggest", "suggests", "suggesting",
    "suggested", "urge", "urges", "urging", "urged", "vote", "votes", "voting", "voted",
];

/// Copular and stative verbs; used to separate `PASS` from `PEAS` after `'s`.
pub const STATIVE: &[&str] = &[
    "appear", "appears", "appeared", "feel", "feels", "feeling", "felt", "look", "looks",
    "looking", "looked", "become", "becomes", "became", "becoming", "get", "gets", "getting",
    "got", "go", "goes", "going", "gone", "went", "grow", "grows", "growing", "grown", "prove",
    "proves", "proven", "remain", "remains", "remaining", "remained", "seem", "seems", "seemed",
    "shine", "shines", "shined", "shone", "smell", "smells", "smelt", "smelled", "sound", "sounds",
    "sounded", "sounding", "stay", "staying", "stayed", "stays", "taste", "tastes", "tasted",
    "turn", "turns", "turning", "turned",
];

pub const ACTIVITY: &[&str] = &[
    "buy", "buys", "buying", "bought", "make", "makes", "making", "made", "give", "gives",
    "giving", "gave", "given", "take", "takes", "taking", "took", "taken", "come", "comes",
    "coming", "came", "use", "uses", "using", "used", "leave", "leaves", "leaving", "left", "show",
    "shows", "showing", "showed", "shown", "try", "tries", "trying", "tried", "work", "works",
    "wrought", "worked", "working", "move", "moves", "moving", "moved", "follow", "follows",
    "following", "followed", "put", "puts", "putting", "pay", "pays", "paying", "paid", "bring",
    "brings", "bringing", "brought", "meet", "meets", "met", "play", "plays", "playing", "played",
    "run", "runs", "running", "ran", "hold", "holds", "holding", "held", "turn", "turns",
    "turning", "turned", "send", "sends", "sending", "sent", "sit", "sits", "sitting", "sat",
    "wait", "waits", "waiting", "waited", "walk", "walks", "walking", "walked", "carry", "carries",
    "carrying", "carried", "lose", "loses", "losing", "lost", "eat", "eats", "ate", "eaten",
    "eating", "watch", "watches", "watching", "watched", "reach", "reaches", "reaching", "reached",
    "add", "adds", "adding", "added", "produce", "produces", "producing", "produced", "provide",
    "provides", "providing", "provided", "pick", "picks", "picking", "picked", "wear", "wears",
    "wearing", "wore", "worn", "open", "opens", "opening", "opened", "win", "wins", "winning",
    "won", "catch", "catches", "catching", "caught", "pass", "passes", "passing", "passed",
    "shake", "shakes", "shaking", "shook", "shaken", "smile", "smiles", "smiling", "smiled",
    "stare", "stares", "staring", "stared", "sell", "sells", "selling", "sold", "spend", "spends",
    "spending", "spent", "apply", "applies", "applying", "applied", "form", "forms", "forming",
    "formed", "obtain", "obtains", "obtaining", "obtained", "arrange", "arranges", "arranging",
    "arranged", "beat", "beats", "beating", "beaten", "check", "checks", "checking", "checked",
    "cover", "covers", "covering", "covered", "divide", "divides", "dividing", "divided", "earn",
    "earns", "earning", "earned", "extend", "extends", "extending", "extended", "fix", "fixes",
    "fixing", "fixed", "hang", "hangs", "hanging", "hanged", "hung", "join", "joins", "joining",
    "joined", "lie", "lies", "lying", "lay", "lain", "lied", "pull", "pulls", "pulling", "pulled",
    "repeat", "repeats", "repeating", "repeated", "receive", "receives", "receiving", "received",
    "save", "saves", "saving", "saved", "share", "shares", "sharing", "shared", "throw", "throws",
    "throwing", "threw", "thrown", "visit", "visits", "visiting", "visited", "accompany",
    "accompanies", "accompanying", "accompanied", "acquire", "acquires", "acquiring", "acquired",
    "advance", "advances", "advancing", "advanced", "behave", "behaves", "behaving", "behaved",
    "borrow", "borrows", "borrowing", "borrowed", "burn", "burns", "burning", "burned", "burnt",
    "clean", "cleaner", "cleanest", "cleans", "cleaning", "cleaned", "climb", "climbs", "climbing",
    "climbed", "combine", "combines", "combining", "combined", "control", "controls",
    "controlling", "controlled", "defend", "defends", "defending", "defended", "deliver",
    "delivers", "delivering", "delivered", "dig", "digs", "digging", "dug", "encounter",
    "encounters", "encountering", "encountered", "engage", "engages", "engaging", "engaged",
    "exercise", "exercised", "exercising", "exercises", "expand", "expands", "expanding",
    "expanded", "explore", "explores", "exploring", "explored", "reduce", "reduces", "reducing",
    "reduced",
];

pub const COMMUNICATION: &[&str] = &[
    "say", "says", "saying", "said", "tell", "tells", "telling", "told", "call", "calls",
    "calling", "called", "ask", "asks", "asking", "asked", "write", "writes", "writing", "wrote",
    "written", "talk", "talks", "talking", "talked", "speak", "speaks", "spoke", "spoken",
    "speaking", "thank", "thanks", "thanking", "thanked", "describe", "describing", "describes",
    "described", "claim", "claims", "claiming", "claimed", "offer", "offers", "offering",
    "offered", "admit", "admits", "admitting", "admitted", "announce", "announces", "announcing",
    "announced", "answer", "answers", "answering", "answered", "argue", "argues", "arguing",
    "argued", "deny", "denies", "denying", "denied", "discuss", "discusses", "discussing",
    "discussed", "encourage", "encourages", "encouraging", "encouraged", "explain", "explains",
    "explaining", "explained", "express", "expresses", "expressing", "expressed", "insist",
    "insists", "insisting", "insisted", "mention", "mentions", "mentioning", "mentioned",
    "propose", "proposes", "proposing", "proposed", "quote", "quotes", "quoting", "quoted",
    "reply", "replies", "replying", "replied", "shout", "shouts", "shouting", "shouted", "sign",
    "signs", "signing", "signed", "sing", "sings", "singing", "sang", "sung", "state", "states",
    "stating", "stated", "teach", "teaches", "teaching", "taught", "warn", "warns", "warning",
    "warned", "accuse", "accuses", "accusing", "accused", "acknowledge", "acknowledges",
    "acknowledging", "acknowledged", "address", "addresses", "addressing", "addressed", "advise",
    "advises", "advising", "advised", "appeal", "appeals", "appealing", "appealed", "assure",
    "assures", "assuring", "assured", "challenge", "challenges", "challenging", "challenged",
    "complain", "complains", "complaining", "complained", "consult", "consults", "consulting",
    "consulted", "convince", "convinces", "convincing", "convinced", "declare", "declares",
    "declaring", "declared", "demand", "demands", "demanding", "demanded", "emphasize",
    "emphasizes", "emphasizing", "emphasized", "emphasise", "emphasises", "emphasising",
    "emphasised", "excuse", "excuses", "excusing", "excused", "inform", "informs", "informing",
    "informed", "invite", "invites", "inviting", "invited", "persuade", "persuades", "persuading",
    "persuaded", "phone", "phones", "phoning", "phoned", "pray", "prays", "praying", "prayed",
    "promise", "promises", "promising", "promised", "question", "questions", "questioning",
    "questioned", "recommend", "recommends", "recommending", "recommended", "remark", "remarks",
    "remarking", "remarked", "respond", "responds", "responding", "responded", "specify",
    "specifies", "specifying", "specified", "swear", "swears", "swearing", "swore", "sworn",
    "threaten", "threatens", "threatening", "threatened", "urge", "urges", "urging", "urged",
    "welcome", "welcomes", "welcoming", "welcomed", "whisper", "whispers", "whispering",
    "whispered", "suggest", "suggests", "suggesting", "suggested", "plead", "pleads", "pleaded",
    "pleading", "agree", "agrees", "agreed", "agreeing", "assert", "asserts", "asserting",
    "asserted", "beg", "begs", "begging", "begged", "confide", "confides", "confiding", "confided",
    "command", "commands", "commanding", "commanded", "disagree", "disagreeing", "disagrees",
    "disagreed", "object", "objects", "objected", "pledge", "pledges", "pledging", "pledged",
    "report", "reports", "reported", "reporting", "testify", "testifies", "testified",
    "testifying", "vow", "vows", "vowing", "vowed", "mean", "means", "meaning", "meant",
];

pub const MENTAL: &[&str] = &[
    "see", "sees", "seeing", "saw", "seen", "know", "knows", "knowing", "knew", "known", "think",
    "thinks", "thinking", "thought", "want", "wan", "wants", "wanting", "wanted", "need", "needs",
    "needing", "needed", "feel", "feels", "feeling", "felt", "like", "likes", "liking", "liked",
    "hear", "hears", "hearing", "heard", "remember", "remembers", "remembering", "remembered",
    "believe", "believes", "believing", "believed", "read", "reads", "reading", "consider",
    "considers", "considering", "considered", "suppose", "supposes", "supposing", "supposed",
    "listen", "listens", "listening", "listened", "love", "loves", "loving", "loved", "wonder",
    "wonders", "wondering", "wondered", "understand", "understands", "understood", "expect",
    "expects", "expecting", "expected", "hope", "hopes", "hoping", "hoped", "assume", "assumes",
    "assuming", "assumed", "determine", "determines", "determining", "determined", "agree",
    "agrees", "agreeing", "agreed", "bear", "bears", "bearing", "bore", "borne", "care", "cares",
    "caring", "cared", "choose", "chooses", "choosing", "chose", "chosen", "compare", "compares",
    "comparing", "compared", "decide", "decides", "deciding", "decided", "discover", "discovers",
    "discovering", "discovered", "doubt", "doubts", "doubting", "doubted", "enjoy", "enjoys",
    "enjoying", "enjoyed", "examine", "examines", "examining", "examined", "face", "faces",
    "facing", "faced", "forget", "forgets", "forgetting", "forgot", "forgotten", "hate", "hates",
    "hating", "hated", "identify", "identifies", "identifying", "identified", "imagine",
    "imagines", "imagining", "imagined", "intend", "intends", "intending", "intended", "learn",
    "learns", "learning", "learned", "learnt", "miss", "misses", "missing", "missed", "mind",
    "minds", "minding", "notice", "notices", "noticing", "noticed", "plan", "plans", "planning",
    "planned", "prefer", "prefers", "preferring", "preferred", "prove", "proves", "proving",
    "proved", "proven", "realize", "realizes", "realizing", "realized", "recall", "recalls",
    "recalling", "recalled", "recognize", "recognizes", "recognizing", "recognized", "recognise",
    "recognises", "recognising", "recognised", "regard", "regards", "regarding", "regarded",
    "suffer", "suffers", "suffering", "suffered", "wish", "wishes", "wishing", "wished", "worry",
    "worries", "worrying", "worried", "accept", "accepts", "accepting", "accepted", "appreciate",
    "appreciates", "appreciating", "appreciated", "approve", "approves", "approving", "approved",
    "assess", "assesses", "assessing", "assessed", "blame", "blames", "blaming", "blamed",
    "bother", "bothers", "bothering", "bothered", "calculate", "calculates", "calculating",
    "calculated", "conclude", "concludes", "concluding", "concluded", "celebrate", "celebrates",
    "celebrating", "celebrated", "confirm", "confirms", "confirming", "confirmed", "count",
    "counts", "counting", "counted", "dare", "dares", "daring", "dared", "detect", "detects",
    "detecting", "detected", "dismiss", "dismisses", "dismissing", "dismissed", "distinguish",
    "distinguishes", "distinguishing", "distinguished", "experience", "experiences",
    "experiencing", "experienced", "fear", "fears", "fearing", "feared", "forgive", "forgives",
    "forgiving", "forgave", "forgiven", "guess", "guesses", "guessing", "guessed", "ignore",
    "ignores", "ignoring", "ignored", "impress", "impresses", "impressing", "impressed",
    "interpret", "interprets", "interpreting", "interpreted", "judge", "judges", "judging",
    "judged", "justify", "justifies", "justifying", "justified", "observe", "observes",
    "observing", "observed", "perceive", "perceives", "perceiving", "perceived", "predict",
    "predicts", "predicting", "predicted", "pretend", "pretends", "pretending", "pretended",
    "reckon", "reckons", "reckoning", "reckoned", "remind", "reminds", "reminding", "reminded",
    "satisfy", "satisfies", "satisfying", "satisfied", "solve", "solves", "solving", "solved",
    "study", "studies", "studying", "studied", "suspect", "suspects", "suspecting", "suspected",
    "trust", "trusts", "trusting", "trusted",
];

pub const CAUSATION: &[&str] = &[
    "help", "helps", "helping", "helped", "let", "lets", "letting", "allow", "allows", "allowing",
    "allowed", "affect", "affects", "affecting", "affected", "cause", "causes", "causing",
    "caused", "enable", "enables", "enabling", "enabled", "ensure", "ensures", "ensuring",
    "ensured", "force", "forces", "forcing", "forced", "prevent", "prevents", "preventing",
    "prevented", "assist", "assists", "assisting", "assisted", "guarantee", "guarantees",
    "guaranteeing", "guaranteed", "influence", "influences", "influencing", "influenced", "permit",
    "permits", "permitting", "permitted", "require", "requires", "requiring", "required",
];

pub const OCCURRENCE: &[&str] = &[
    "become", "becomes", "becoming", "became", "happen", "happens", "happening", "happened",
    "change", "changes", "changing", "changed", "die", "dies", "dying", "died", "grow", "grows",
    "grew", "grown", "growing", "develop", "develops", "developing", "developed", "arise",
    "arises", "arising", "arose", "arisen", "emerge", "emerges", "emerging", "emerged", "fall",
    "falls", "falling", "fell", "fallen", "increase", "increases", "increasing", "increased",
    "last", "lasts", "lasting", "lasted", "rise", "rises", "rising", "rose", "risen", "disappear",
    "disappears", "disappearing", "disappeared", "flow", "flows", "flowing", "flowed", "shine",
    "shines", "shining", "shone", "shined", "sink", "sinks", "sank", "sunk", "sunken", "sinking",
    "slip", "slips", "slipping", "slipped", "occur", "occurs", "occurring", "occurred",
];

pub const EXISTENCE: &[&str] = &[
    "seem", "seems", "seeming", "seemed", "stand", "stands", "standing", "stood", "stay", "stays",
    "staid", "stayed", "staying", "live", "lives", "living", "lived", "appear", "appears",
    "appearing", "appeared", "include", "includes", "including", "included", "involve", "involves",
    "involving", "involved", "contain", "contains", "containing", "contained", "exist", "exists",
    "existing", "existed", "indicate", "indicates", "indicating", "indicated", "concern",
    "concerns", "concerning", "concerned", "constitute", "constitutes", "constituting",
    "constituted", "define", "defines", "defining", "defined", "derive", "derives", "deriving",
    "derived", "illustrate", "illustrates", "illustrating", "illustrated", "imply", "implies",
    "implying", "implied", "lack", "lacks", "lacking", "lacked", "owe", "owes", "owing", "owed",
    "own", "owns", "owning", "owned", "possess", "possesses", "possessing", "possessed", "suit",
    "suits", "suiting", "suited", "vary", "varies", "varying", "varied", "fit", "fits", "fitting",
    "fitted", "matter", "matters", "mattering", "mattered", "reflect", "reflects", "reflecting",
    "reflected", "relate", "relates", "relating", "related", "remain", "remains", "remaining",
    "remained", "reveal", "reveals", "revealing", "revealed", "sound", "sounds", "sounding",
    "sounded", "tend", "tends", "tending", "tended", "represent", "represents", "representing",
    "represented", "deserve", "deserves", "deserving", "deserved",
];

pub const ASPECTUAL: &[&str] = &[
    "start", "starts", "starting", "started", "keep", "keeps", "keeping", "kept", "stop", "stops",
    "stopping", "stopped", "begin", "begins", "beginning", "began", "begun", "complete",
    "completes", "completing", "completed", "end", "ends", "ending", "ended", "finish", "finishes",
    "finishing", "finished", "cease", "ceases", "ceasing", "ceased", "continue", "continues",
    "continuing", "continued",
];

/// Verbs that control factive complement clauses.
pub const FACTIVE: &[&str] = &[
    "concluding", "conclude", "concluded", "concludes", "demonstrates", "demonstrating",
    "demonstrated", "demonstrate", "determining", "determines", "determine", "determined",
    "discovered", "discovers", "discover", "discovering", "finds", "finding", "found", "find",
    "knows", "known", "knowing", "know", "knew", "learn", "learns", "learning", "learnt", "means",
    "meaning", "meant", "mean", "notifies", "notices", "notice", "noticed", "notify", "notifying",
    "noticing", "notified", "observed", "observes", "observing", "observe", "proven", "prove",
    "proving", "proved", "proves", "realized", "realised", "realizes", "realises", "realize",
    "realise", "realizing", "realising", "recognizes", "recognises", "recognize", "recognise",
    "recognized", "recognised", "recognizing", "recognising", "remembered", "remember",
    "remembers", "remembering", "sees", "seen", "saw", "seeing", "see", "showing", "shows",
    "shown", "showed", "show", "understand", "understands", "understanding", "understood",
];

pub const LIKELIHOOD: &[&str] = &[
    "assumes", "assumed", "assuming", "assume", "believe", "believing", "believes", "believed",
    "doubting", "doubted", "doubts", "doubt", "gathers", "gathering", "gathered", "gather",
    "guessed", "guess", "guessing", "guesses", "hypothesizing", "hypothesising", "hypothesized",
    "hypothesised", "hypothesize", "hypothesise", "hypothesizes", "hypothesises", "imagine",
    "imagining", "imagines", "imagined", "predict", "predicted", "predicting", "predicts",
    "presupposing", "presupposes", "presuppose", "presupposed", "presumes", "presuming",
    "presumed", "presume", "reckon", "reckoning", "reckoned", "reckons", "seemed", "seems", "seem",
    "seeming", "speculated", "speculate", "speculating", "speculates", "suppose", "supposes",
    "supposing", "supposed", "suspected", "suspect", "suspects", "suspecting", "think", "thinks",
    "thinking", "thought",
];

pub const ATTITUDE: &[&str] = &[
    "agreeing", "agreed", "agree", "agrees", "anticipates", "anticipated", "anticipate",
    "anticipating", "complain", "complained", "complaining", "complains", "conceded", "concede",
    "concedes", "conceding", "ensure", "expecting", "expect", "expects", "expected", "fears",
    "feared", "fear", "fearing", "feel", "feels", "feeling", "felt", "forgetting", "forgets",
    "forgotten", "forgot", "forget", "hoped", "hope", "hopes", "hoping", "minding", "minded",
    "minds", "mind", "preferred", "prefer", "preferring", "prefers", "pretending", "pretend",
    "pretended", "pretends", "requiring", "required", "requires", "require", "wishes", "wished",
    "wish", "wishing", "worry", "worrying", "worries", "worried",
];

/// Verbs of desire controlling to-clauses.
pub const TO_DESIRE: &[&str] = &[
    "agreeing", "agreed", "agree", "agrees", "chooses", "chosen", "choose", "choosing", "chose",
    "decide", "deciding", "decided", "decides", "hate", "hates", "hating", "hated", "hesitated",
    "hesitates", "hesitate", "hesitating", "hoped", "hope", "hopes", "hoping", "intended",
    "intend", "intending", "intends", "likes", "liked", "like", "liking", "loving", "loves",
    "love", "loved", "means", "meaning", "meant", "mean", "needs", "need", "needing", "needed",
    "planning", "plan", "planned", "plans", "preferred", "prefer", "preferring", "prefers",
    "prepares", "prepare", "preparing", "prepared", "refuses", "refusing", "refuse", "refused",
    "wanting", "want", "wants", "wanted", "wishes", "wished", "wish", "wishing",
];

pub const TO_EFFORT: &[&str] = &[
    "allowance", "allowing", "allowed", "allowancing", "allow", "allowances", "allows",
    "allowanced", "attempting", "attempted", "attempts", "attempt", "enables", "enabled",
    "enabling", "enable", "encourages", "encouraging", "encouraged", "encourage", "fails", "fail",
    "failing", "failed", "help", "helping", "helps", "helped", "instructs", "instructed",
    "instruct", "instructing", "managing", "managed", "manage", "manages", "oblige", "obligate",
    "obliged", "obligates", "obliging", "obligating", "obliges", "obligated", "order", "ordering",
    "orders", "ordered", "permitted", "permits", "permit", "permitting", "persuaded", "persuades",
    "persuade", "persuading", "prompts", "prompting", "prompted", "prompt", "requiring",
    "requisitions", "requisitioning", "required", "requires", "requisition", "requisitioned",
    "require", "sought", "seeking", "seeks", "seek", "try", "trying", "tries", "tried",
];

pub const TO_PROBABILITY: &[&str] = &[
    "appear", "appeared", "appears", "appearing", "happens", "happened", "happen", "happening",
    "seemed", "seems", "seem", "seeming", "tending", "tends", "tended", "tend",
];

pub const TO_SPEECH: &[&str] = &[
    "asks", "ask", "asking", "asked", "claiming", "claims", "claim", "claimed", "invite",
    "inviting", "invited", "invites", "promising", "promised", "promise", "promises", "reminding",
    "remind", "reminded", "reminds", "requesting", "request", "requests", "requested", "saying",
    "say", "said", "says", "teaches", "teaching", "taught", "teach", "tell", "tells", "telling",
    "told", "urging", "urges", "urged", "urge", "warning", "warn", "warned", "warns",
];

pub const TO_MENTAL: &[&str] = &[
    "assumed", "assumes", "assume", "assuming", "believing", "believes", "believe", "believed",
    "considered", "considers", "consider", "considering", "expecting", "expects", "expected",
    "expect", "find", "found", "finding", "finds", "forgetting", "forget", "forgets", "forgot",
    "forgotten", "imagine", "imagined", "imagining", "imagines", "judge", "adjudicates",
    "adjudicate", "judges", "judged", "knowing", "knows", "known", "know", "knew", "learnt",
    "learning", "learns", "learn", "presumes", "presuming", "presumed", "presume", "pretend",
    "pretends", "pretended", "pretending", "remembered", "remember", "remembers", "remembering",
    "supposing", "suppose", "supposes", "supposed",
];
