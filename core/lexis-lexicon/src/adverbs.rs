pub const NONFACTIVE: &[&str] = &[
    "confidentially", "frankly", "generally", "honestly", "mainly", "technically", "truthfully",
    "typically", "reportedly", "primarily", "usually",
];

pub const ATTITUDINAL: &[&str] = &[
    "amazingly", "astonishingly", "conveniently", "curiously", "hopefully", "fortunately",
    "importantly", "ironically", "rightly", "sadly", "surprisingly", "unfortunately",
];

pub const FACTIVE: &[&str] = &[
    "actually", "always", "certainly", "definitely", "indeed", "inevitably", "never", "obviously",
    "really", "undoubtedly", "nodoubt", "ofcourse", "infact",
];

pub const LIKELIHOOD: &[&str] = &[
    "apparently", "evidently", "perhaps", "possibly", "predictably", "probably", "roughly",
    "maybe",
];
