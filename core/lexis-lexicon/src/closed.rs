/// WH-words that open subordinate clauses (`however` is deliberately absent).
pub const WH_WORDS: &[&str] = &[
    "what", "where", "when", "how", "whether", "why", "whoever", "whomever", "whichever",
    "wherever", "whenever", "whatever",
];

pub const WH_RELATIVES: &[&str] = &[
    "who", "whom", "whose", "which",
];

/// WH-words that can open a direct question.
pub const WH_QUESTION_WORDS: &[&str] = &[
    "what", "where", "when", "how", "why", "who", "whom", "whose", "which",
];

pub const PREPOSITIONS: &[&str] = &[
    "about", "against", "amid", "amidst", "among", "amongst", "at", "between", "by", "despite",
    "during", "except", "for", "from", "in", "into", "minus", "of", "off", "on", "onto",
    "opposite", "out", "per", "plus", "pro", "than", "through", "throughout", "thru", "toward",
    "towards", "upon", "versus", "via", "with", "within", "without",
];

/// Closed set used for lexical density.
pub const FUNCTION_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "ago", "ai", "all", "almost", "along", "already",
    "also", "although", "always", "am", "among", "an", "and", "another", "any", "anybody",
    "anything", "anywhere", "are", "around", "as", "at", "back", "be", "been", "before", "being",
    "below", "beneath", "beside", "between", "beyond", "billion", "billionth", "both", "but", "by",
    "can", "could", "cos", "cuz", "did", "do", "does", "doing", "done", "down", "during", "each",
    "eight", "eighteen", "eighteenth", "eighth", "eightieth", "eighty", "either", "eleven",
    "eleventh", "else", "enough", "even", "ever", "every", "everybody", "everyone", "everything",
    "everywhere", "except", "far", "few", "fewer", "fifteen", "fifteenth", "fifth", "fiftieth",
    "fifty", "first", "five", "for", "fortieth", "forty", "four", "fourteen", "fourteenth",
    "fourth", "from", "get", "gets", "getting", "got", "had", "has", "have", "having", "he",
    "hence", "her", "here", "hers", "herself", "him", "himself", "his", "hither", "how", "however",
    "hundred", "hundredth", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "last",
    "less", "many", "may", "me", "might", "million", "millionth", "mine", "more", "most", "much",
    "must", "my", "myself", "near", "nearby", "nearly", "neither", "never", "next", "nine",
    "nineteen", "nineteenth", "ninetieth", "ninety", "ninth", "no", "nobody", "none", "noone",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only",
    "or", "other", "others", "ought", "our", "ours", "ourselves", "out", "over", "quite", "rather",
    "round", "second", "seven", "seventeen", "seventeenth", "seventh", "seventieth", "seventy",
    "shall", "sha", "she", "should", "since", "six", "sixteen", "sixteenth", "sixth", "sixtieth",
    "sixty", "so", "some", "somebody", "someone", "something", "sometimes", "somewhere", "soon",
    "still", "such", "ten", "tenth", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "thence", "there", "therefore", "these", "they", "third", "thirteen",
    "thirteenth", "thirtieth", "thirty", "this", "thither", "those", "though", "thousand",
    "thousandth", "three", "thrice", "through", "thus", "till", "to", "today", "tomorrow", "too",
    "towards", "twelfth", "twelve", "twentieth", "twenty", "twice", "two", "under", "underneath",
    "unless", "until", "up", "us", "very", "was", "we", "were", "what", "when", "whence", "where",
    "whereas", "which", "while", "whither", "who", "whom", "whose", "why", "will", "with",
    "within", "without", "wo", "would", "yes", "yesterday", "yet", "you", "your", "yours",
    "yourself", "yourselves", "'re", "'ve", "n't", "'ll", "'twas", "'em", "y'", "b", "c", "d", "e",
    "f", "g", "h", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y",
    "z", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0",
];
