pub const SIZE: &[&str] = &[
    "big", "deep", "heavy", "huge", "long", "large", "little", "short", "small", "thin", "wide",
    "narrow",
];

pub const TIME: &[&str] = &[
    "annual", "daily", "early", "late", "new", "old", "recent", "young", "weekly", "monthly",
];

pub const COLOR: &[&str] = &[
    "black", "white", "dark", "bright", "blue", "brown", "green", "gray", "grey", "red", "orange",
    "yellow", "purple", "pink",
];

pub const EVALUATIVE: &[&str] = &[
    "bad", "beautiful", "best", "fine", "good", "great", "lovely", "nice", "poor",
];

pub const RELATIONAL: &[&str] = &[
    "additional", "average", "chief", "complete", "different", "direct", "entire", "external",
    "final", "following", "general", "initial", "internal", "left", "main", "maximum", "necessary",
    "original", "particular", "previous", "primary", "public", "similar", "single", "standard",
    "top", "various", "same",
];

pub const TOPICAL: &[&str] = &[
    "chemical", "commercial", "environmental", "human", "industrial", "legal", "medical", "mental",
    "official", "oral", "phonetic", "political", "sexual", "social", "ventral", "visual",
];

/// Attitudinal adjectives; also the controllers of attitudinal that-clauses.
pub const ATTITUDINAL: &[&str] = &[
    "afraid", "amazed", "aware", "unaware", "concerned", "disappointed", "encouraged", "glad",
    "happy", "hopeful", "pleased", "shocked", "surprised", "worried",
];

pub const EPISTEMIC: &[&str] = &[
    "apparent", "certain", "clear", "confident", "convinced", "correct", "evident", "false",
    "impossible", "inevitable", "obvious", "positive", "right", "sure", "true", "well-known",
    "doubtful", "likely", "possible", "probable", "unlikely",
];

pub const THAT_FACTIVE: &[&str] = &[
    "apparent", "certain", "clear", "confident", "convinced", "correct", "evident", "false",
    "impossible", "inevitable", "obvious", "positive", "right", "sure", "true", "well-known",
];

pub const THAT_LIKELIHOOD: &[&str] = &[
    "doubtful", "likely", "possible", "probable", "unlikely",
];

pub const THAT_EVALUATIVE: &[&str] = &[
    "amazing", "appropriate", "conceivable", "crucial", "essential", "fortunate", "imperative",
    "inconceivable", "incredible", "interesting", "lucky", "necessary", "nice", "noteworthy",
    "odd", "ridiculous", "strange", "surprising", "unacceptable", "unfortunate",
];

pub const TO_CERTAINTY: &[&str] = &[
    "apt", "certain", "due", "guaranteed", "liable", "likely", "prone", "unlikely", "sure",
];

pub const TO_ABILITY: &[&str] = &[
    "anxious", "able", "unable", "careful", "determined", "eager", "eligible", "hesitant",
    "inclined", "obliged", "prepared", "ready", "reluctant", "willing", "unwilling",
];

pub const TO_AFFECT: &[&str] = &[
    "afraid", "ashamed", "disappointed", "embarrassed", "glad", "happy", "pleased", "proud",
    "puzzled", "relieved", "sorry", "surprised", "worried",
];

pub const TO_EASE: &[&str] = &[
    "difficult", "easier", "easy", "hard", "possible", "impossible", "tough",
];

pub const TO_EVALUATIVE: &[&str] = &[
    "bad", "worse", "appropriate", "inappropriate", "good", "better", "best", "convenient",
    "essential", "important", "interesting", "necessary", "nice", "reasonable", "silly", "smart",
    "stupid", "surprising", "useful", "useless", "unreasonable", "wise", "wrong",
];
