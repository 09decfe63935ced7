pub const HUMAN: &[&str] = &[
    "family", "families", "guy", "guys", "individual", "individuals", "kid", "kids", "man", "men",
    "manager", "managers", "member", "members", "parent", "parents", "teacher", "teachers",
    "child", "children", "people", "peoples", "person", "student", "students", "woman", "women",
    "animal", "animals", "applicant", "applicants", "author", "authors", "baby", "babies", "boy",
    "boys", "client", "clients", "consumer", "consumers", "critic", "critics", "customer",
    "customers", "doctor", "doctors", "employee", "employees", "employer", "employers", "father",
    "fathers", "female", "females", "friend", "friends", "girl", "girls", "god", "gods",
    "historian", "historians", "husband", "husbands", "american", "americans", "indian", "indians",
    "instructor", "instructors", "king", "kings", "leader", "leaders", "male", "males", "mother",
    "mothers", "owner", "owners", "president", "presidents", "professor", "professors",
    "researcher", "researchers", "scholar", "scholars", "speaker", "speakers", "species",
    "supplier", "suppliers", "undergraduate", "undergraduates", "user", "users", "wife", "wives",
    "worker", "workers", "writer", "writers", "accountant", "accountants", "adult", "adults",
    "adviser", "advisers", "agent", "agents", "aide", "aides", "ancestor", "ancestors",
    "anthropologist", "anthropologists", "archaeologist", "archaeologists", "artist", "artists",
    "artiste", "artistes", "assistant", "assistants", "associate", "associates", "attorney",
    "attorneys", "audience", "audiences", "auditor", "auditors", "bachelor", "bachelors", "bird",
    "birds", "boss", "bosses", "brother", "brothers", "buddha", "buddhas", "buyer", "buyers",
    "candidate", "candidates", "cat", "cats", "citizen", "citizens", "colleague", "colleagues",
    "collector", "collectors", "competitor", "competitors", "counselor", "counselors", "daughter",
    "daughters", "deer", "defendant", "defendants", "designer", "designers", "developer",
    "developers", "director", "directors", "driver", "drivers", "economist", "economists",
    "engineer", "engineers", "executive", "executives", "expert", "experts", "farmer", "farmers",
    "feminist", "feminists", "freshman", "freshmen", "ecologist", "ecologists", "hero", "heroes",
    "host", "hosts", "hunter", "hunters", "immigrant", "immigrants", "infant", "infants",
    "investor", "investors", "jew", "jews", "judge", "judges", "lady", "ladies", "lawyer",
    "lawyers", "learner", "learners", "listener", "listeners", "maker", "makers", "manufacturer",
    "manufacturers", "miller", "millers", "minister", "ministers", "mom", "moms", "monitor",
    "monitors", "monkey", "monkeys", "neighbor", "neighbors", "neighbour", "neighbours",
    "observer", "observers", "officer", "officers", "official", "officials", "participant",
    "participants", "partner", "partners", "patient", "patients", "personnel", "personnels",
    "peer", "peers", "physician", "physicians", "plaintiff", "plaintiffs", "player", "players",
    "poet", "poets", "police", "polices", "processor", "processors", "professional",
    "professionals", "provider", "providers", "psychologist", "psychologists", "resident",
    "residents", "respondent", "respondents", "schizophrenic", "schizophrenics", "scientist",
    "scientists", "secretary", "secretaries", "server", "servers", "shareholder", "shareholders",
    "sikh", "sikhs", "sister", "sisters", "slave", "slaves", "son", "sons", "spouse", "spouses",
    "supervisor", "supervisors", "theorist", "theorists", "tourist", "tourists", "victim",
    "victims", "faculty", "faculties", "dean", "deans", "reader", "readers", "couple", "couples",
    "graduate", "graduates",
];

pub const COGNITIVE: &[&str] = &[
    "analysis", "analyses", "decision", "decisions", "experience", "experiences", "assessment",
    "assessments", "calculation", "calculations", "conclusion", "conclusions", "consequence",
    "consequences", "consideration", "considerations", "evaluation", "evaluations", "examination",
    "examinations", "expectation", "expectations", "observation", "observations", "recognition",
    "recognitions", "relation", "relations", "understanding", "understandings", "hypothesis",
    "hypotheses", "ability", "abilities", "assumption", "assumptions", "attention", "attentions",
    "attitude", "attitudes", "belief", "beliefs", "concentration", "concentrations", "concern",
    "concerns", "consciousness", "consciousnesses", "concept", "concepts", "fact", "facts", "idea",
    "ideas", "knowledge", "knowledges", "look", "looks", "need", "needs", "reason", "reasons",
    "sense", "senses", "view", "views", "theory", "theories", "desire", "desires", "emotion",
    "emotions", "feeling", "feelings", "judgement", "judgements", "memory", "memories", "notion",
    "notions", "opinion", "opinions", "perception", "perceptions", "perspective", "perspectives",
    "possibility", "possibilities", "probability", "probabilities", "responsibility",
    "responsibilities", "thought", "thoughts",
];

pub const CONCRETE: &[&str] = &[
    "tank", "tanks", "stick", "sticks", "target", "targets", "strata", "stratas", "telephone",
    "telephones", "string", "strings", "telescope", "telescopes", "sugar", "sugars", "ticket",
    "tickets", "syllabus", "syllabuses", "tip", "tips", "salt", "salts", "tissue", "tissues",
    "screen", "screens", "tooth", "teeth", "sculpture", "sculptures", "sphere", "spheres",
    "seawater", "seawaters", "spot", "spots", "ship", "ships", "steam", "steams", "silica",
    "silicas", "steel", "steels", "slide", "slides", "stem", "stems", "snow", "snows", "sodium",
    "mud", "muds", "solid", "solids", "mushroom", "mushrooms", "gift", "gifts", "muscle",
    "muscles", "glacier", "glaciers", "tube", "tubes", "gun", "guns", "nail", "nails", "handbook",
    "handbooks", "newspaper", "newspapers", "handout", "handouts", "node", "nodes", "instrument",
    "instruments", "notice", "notices", "knot", "knots", "novel", "novels", "lava", "lavas",
    "page", "pages", "food", "foods", "transcript", "transcripts", "leg", "legs", "eye", "eyes",
    "lemon", "lemons", "brain", "brains", "magazine", "magazines", "device", "devices", "magnet",
    "magnets", "oak", "oaks", "manual", "manuals", "package", "packages", "marker", "markers",
    "peak", "peaks", "match", "matches", "pen", "pens", "metal", "metals", "pencil", "pencils",
    "block", "blocks", "pie", "pies", "board", "boards", "pipe", "pipes", "heart", "hearts",
    "load", "loads", "paper", "papers", "transistor", "transistors", "modem", "modems", "book",
    "books", "mole", "moles", "case", "cases", "motor", "motors", "computer", "computers", "mound",
    "mounds", "dollar", "dollars", "mouth", "mouths", "hand", "hands", "movie", "movies", "flower",
    "flowers", "object", "objects", "foot", "feet", "table", "tables", "frame", "frames", "water",
    "waters", "vessel", "vessels", "arm", "arms", "visa", "visas", "bar", "bars", "grain",
    "grains", "bed", "beds", "hair", "hairs", "body", "bodies", "head", "heads", "box", "boxes",
    "ice", "ices", "car", "cars", "item", "items", "card", "cards", "journal", "journals", "chain",
    "chains", "key", "keys", "chair", "chairs", "window", "windows", "vehicle", "vehicles", "leaf",
    "leaves", "copy", "copies", "machine", "machines", "document", "documents", "mail", "mails",
    "door", "doors", "map", "maps", "dot", "dots", "phone", "phones", "drug", "drugs", "picture",
    "pictures", "truck", "trucks", "piece", "pieces", "tape", "tapes", "note", "notes", "liquid",
    "liquids", "wire", "wires", "equipment", "equipments", "wood", "woods", "fiber", "fibers",
    "plant", "plants", "fig", "figs", "resistor", "resistors", "film", "films", "sand", "sands",
    "file", "files", "score", "scores", "seat", "seats", "belt", "belts", "sediment", "sediments",
    "boat", "boats", "seed", "seeds", "bone", "bones", "soil", "soils", "bubble", "bubbles", "bud",
    "buds", "bulb", "bulbs", "portrait", "portraits", "bulletin", "bulletins", "step", "steps",
    "shell", "shells", "stone", "stones", "cake", "cakes", "tree", "trees", "camera", "cameras",
    "video", "videos", "face", "faces", "wall", "walls", "acid", "acids", "alcohol", "alcohols",
    "cap", "caps", "aluminium", "aluminiums", "clay", "clays", "artifact", "artifacts", "clock",
    "clocks", "rain", "rains", "clothing", "clothings", "asteroid", "asteroids", "club", "clubs",
    "automobile", "automobiles", "comet", "comets", "award", "awards", "sheet", "sheets", "bag",
    "bags", "branch", "branches", "ball", "balls", "copper", "coppers", "banana", "bananas",
    "counter", "counters", "band", "bands", "cover", "covers", "wheel", "wheels", "crop", "crops",
    "drop", "drops", "crystal", "crystals", "basin", "basins", "cylinder", "cylinders", "bell",
    "bells", "desk", "desks", "dinner", "dinners", "pole", "poles", "button", "buttons", "pot",
    "pots", "disk", "disks", "pottery", "potteries", "drain", "drains", "radio", "radios", "drink",
    "drinks", "reactor", "reactors", "drawing", "drawings", "retina", "retinas", "dust", "dusts",
    "ridge", "ridges", "edge", "edges", "ring", "rings", "engine", "engines", "ripple", "ripples",
    "plate", "plates", "game", "games", "cent", "cents", "post", "posts", "envelope", "envelopes",
    "rock", "rocks", "filter", "filters", "root", "roots", "finger", "fingers", "slope", "slopes",
    "fish", "space", "spaces", "fruit", "fruits", "statue", "statues", "furniture", "furnitures",
    "textbook", "textbooks", "gap", "gaps", "tool", "tools", "gate", "gates", "train", "trains",
    "gel", "gels", "deposit", "deposits", "chart", "charts", "mixture", "mixtures",
];

pub const TECHNICAL: &[&str] = &[
    "cell", "cells", "unit", "units", "gene", "genes", "wave", "waves", "ion", "ions", "bacteria",
    "bacterias", "electron", "electrons", "chromosome", "chromosomes", "element", "elements",
    "cloud", "clouds", "sample", "samples", "isotope", "isotopes", "schedule", "schedules",
    "neuron", "neurons", "software", "softwares", "nuclei", "nucleus", "solution", "solutions",
    "atom", "atoms", "ray", "rays", "margin", "margins", "virus", "viruses", "mark", "marks",
    "hydrogen", "hydrogens", "mineral", "minerals", "internet", "internets", "molecule",
    "molecules", "organism", "organisms", "message", "messages", "oxygen", "oxygens", "paragraph",
    "paragraphs", "particle", "particles", "sentence", "sentences", "play", "plays", "star",
    "stars", "poem", "poems", "thesis", "theses", "proton", "protons", "web", "webs", "layer",
    "layers", "center", "centers", "centre", "centres", "matter", "matters", "chapter", "chapters",
    "square", "squares", "data", "circle", "circles", "equation", "equations", "compound",
    "compounds", "exam", "exams", "letter", "letters", "bill", "bills", "page", "pages",
    "component", "components", "statement", "statements", "diagram", "diagrams", "word", "words",
    "dna", "angle", "angles", "fire", "fires", "carbon", "carbons", "formula", "formulas", "graph",
    "graphs", "iron", "irons", "lead", "leads", "jury", "juries", "light", "lights", "list",
    "lists",
];

pub const PLACE: &[&str] = &[
    "apartment", "apartments", "interior", "interiors", "bathroom", "bathrooms", "moon", "moons",
    "bay", "bays", "museum", "museums", "bench", "benches", "neighborhood", "neighborhoods",
    "neighbourhood", "neighbourhoods", "bookstore", "bookstores", "opposite", "opposites",
    "border", "borders", "orbit", "orbits", "cave", "caves", "orbital", "orbitals", "continent",
    "continents", "outside", "outsides", "delta", "deltas", "parallel", "parallels", "desert",
    "deserts", "passage", "passages", "estuary", "estuaries", "pool", "pools", "factory",
    "factories", "prison", "prisons", "farm", "farms", "restaurant", "restaurants", "forest",
    "forests", "sector", "sectors", "habitat", "habitats", "shaft", "shafts", "hell", "hells",
    "shop", "shops", "hemisphere", "hemispheres", "southwest", "hill", "hills", "station",
    "stations", "hole", "holes", "territory", "territories", "horizon", "horizons", "road",
    "roads", "bottom", "bottoms", "store", "stores", "boundary", "boundaries", "stream", "streams",
    "building", "buildings", "top", "tops", "campus", "campuses", "valley", "valleys", "canyon",
    "canyons", "village", "villages", "coast", "coasts", "city", "cities", "county", "counties",
    "country", "countries", "court", "courts", "earth", "earths", "front", "fronts", "environment",
    "environments", "district", "districts", "field", "fields", "floor", "floors", "market",
    "markets", "lake", "lakes", "office", "offices", "land", "lands", "organization",
    "organizations", "lecture", "lectures", "place", "places", "left", "lefts", "room", "rooms",
    "library", "libraries", "area", "areas", "location", "locations", "class", "classes", "middle",
    "middles", "classroom", "classrooms", "mountain", "mountains", "ground", "grounds", "north",
    "norths", "hall", "halls", "ocean", "oceans", "park", "parks", "planet", "planets", "property",
    "properties", "region", "regions", "residence", "residences", "river", "rivers",
];

pub const QUANTITY: &[&str] = &[
    "cycle", "cycles", "rate", "rates", "date", "dates", "second", "seconds", "frequency",
    "frequencies", "section", "sections", "future", "futures", "semester", "semesters", "half",
    "halves", "temperature", "temperatures", "height", "heights", "today", "todays", "number",
    "numbers", "amount", "amounts", "week", "weeks", "age", "ages", "day", "days", "century",
    "centuries", "part", "parts", "energy", "energies", "lot", "lots", "heat", "heats", "term",
    "terms", "hour", "hours", "time", "times", "month", "months", "mile", "miles", "period",
    "periods", "moment", "moments", "morning", "mornings", "volume", "volumes", "per", "weekend",
    "weekends", "percentage", "percentages", "weight", "weights", "portion", "portions", "minute",
    "minutes", "quantity", "quantities", "percent", "percents", "quarter", "quarters", "length",
    "lengths", "ratio", "ratios", "measure", "measures", "summer", "summers", "meter", "meters",
    "volt", "volts", "voltage", "voltages",
];

pub const GROUP: &[&str] = &[
    "airline", "airlines", "institute", "institutes", "colony", "colonies", "bank", "banks",
    "flight", "flights", "church", "churches", "hotel", "hotels", "firm", "firms", "hospital",
    "hospitals", "household", "households", "college", "colleges", "institution", "institutions",
    "house", "houses", "lab", "labs", "laboratory", "laboratories", "community", "communities",
    "company", "companies", "government", "governments", "university", "universities", "school",
    "schools", "home", "homes", "congress", "congresses", "committee", "committees",
];

pub const ABSTRACT_PROCESS: &[&str] = &[
    "action", "actions", "activity", "activities", "application", "applications", "argument",
    "arguments", "development", "developments", "education", "educations", "effect", "effects",
    "function", "functions", "method", "methods", "research", "researches", "result", "results",
    "process", "processes", "accounting", "accountings", "achievement", "achievements", "addition",
    "additions", "administration", "administrations", "approach", "approaches", "arrangement",
    "arrangements", "assignment", "assignments", "competition", "competitions", "construction",
    "constructions", "consumption", "consumptions", "contribution", "contributions", "counseling",
    "counselings", "criticism", "criticisms", "definition", "definitions", "discrimination",
    "discriminations", "description", "descriptions", "discussion", "discussions", "distribution",
    "distributions", "division", "divisions", "eruption", "eruptions", "evolution", "evolutions",
    "exchange", "exchanges", "exercise", "exercises", "experiment", "experiments", "explanation",
    "explanations", "expression", "expressions", "formation", "formations", "generation",
    "generations", "graduation", "graduations", "management", "managements", "marketing",
    "marketings", "marriage", "marriages", "mechanism", "mechanisms", "meeting", "meetings",
    "operation", "operations", "orientation", "orientations", "performance", "performances",
    "practice", "practices", "presentation", "presentations", "procedure", "procedures",
    "production", "productions", "progress", "progresses", "reaction", "reactions", "registration",
    "registrations", "regulation", "regulations", "revolution", "revolutions", "selection",
    "selections", "session", "sessions", "strategy", "strategies", "teaching", "teachings",
    "technique", "techniques", "tradition", "traditions", "training", "trainings", "transition",
    "transitions", "treatment", "treatments", "trial", "trials", "act", "acts", "agreement",
    "agreements", "attempt", "attempts", "attendance", "attendances", "birth", "births", "break",
    "breaks", "claim", "claims", "comment", "comments", "comparison", "comparisons", "conflict",
    "conflicts", "deal", "deals", "death", "deaths", "debate", "debates", "demand", "demands",
    "answer", "answers", "control", "controls", "flow", "flows", "service", "services", "work",
    "works", "test", "tests", "use", "uses", "war", "wars", "change", "changes", "question",
    "questions", "study", "studies", "talk", "talks", "task", "tasks", "trade", "trades",
    "transfer", "transfers", "admission", "admissions", "design", "designs", "detail", "details",
    "dimension", "dimensions", "direction", "directions", "disorder", "disorders", "diversity",
    "diversities", "economy", "economies", "emergency", "emergencies", "emphasis", "emphases",
    "employment", "employments", "equilibrium", "equilibriums", "equity", "equities", "error",
    "errors", "expense", "expenses", "facility", "facilities", "failure", "failures", "fallacy",
    "fallacies", "feature", "features", "format", "formats", "freedom", "freedoms", "fun", "funs",
    "gender", "genders", "goal", "goals", "grammar", "grammars", "health", "healths", "heat",
    "heats", "help", "helps", "identity", "identities", "image", "images", "impact", "impacts",
    "importance", "importances", "influence", "influences", "input", "inputs", "labor", "labors",
    "leadership", "leaderships", "link", "links", "manner", "manners", "math", "maths", "matrix",
    "matrices", "meaning", "meanings", "music", "musics", "network", "networks", "objective",
    "objectives", "opportunity", "opportunities", "option", "options", "origin", "origins",
    "output", "outputs", "past", "pasts", "pattern", "patterns", "phase", "phases", "philosophy",
    "philosophies", "plan", "plans", "potential", "potentials", "prerequisite", "prerequisites",
    "presence", "presences", "principle", "principles", "success", "successes", "profile",
    "profiles", "profit", "profits", "proposal", "proposals", "psychology", "psychologies",
    "quality", "qualities", "quiz", "quizzes", "race", "races", "reality", "realities", "religion",
    "religions", "resource", "resources", "respect", "respects", "rest", "rests", "return",
    "returns", "risk", "risks", "substance", "substances", "scene", "scenes", "security",
    "securities", "series", "set", "sets", "setting", "settings", "sex", "sexes", "shape",
    "shapes", "share", "shares", "show", "shows", "sign", "signs", "signal", "signals", "sort",
    "sorts", "sound", "sounds", "spring", "springs", "stage", "stages", "standard", "standards",
    "start", "starts", "stimulus", "stimuli", "strength", "strengths", "stress", "stresses",
    "style", "styles", "support", "supports", "survey", "surveys", "symbol", "symbols", "topic",
    "topics", "track", "tracks", "trait", "traits", "trouble", "troubles", "truth", "truths",
    "variation", "variations", "variety", "varieties", "velocity", "velocities", "version",
    "versions", "whole", "wholes", "account", "accounts", "condition", "conditions", "culture",
    "cultures", "end", "ends", "factor", "factors", "grade", "grades", "interest", "interests",
    "issue", "issues", "job", "jobs", "kind", "kinds", "language", "languages", "law", "laws",
    "level", "levels", "life", "lives", "model", "models", "name", "names", "nature", "natures",
    "order", "orders", "policy", "policies", "position", "positions", "power", "powers",
    "pressure", "pressures", "relationship", "relationships", "requirement", "requirements",
    "role", "roles", "rule", "rules", "science", "sciences", "side", "sides", "situation",
    "situations", "skill", "skills", "source", "sources", "structure", "structures", "subject",
    "subjects", "type", "types", "information", "informations", "right", "rights", "state",
    "states", "system", "systems", "value", "values", "way", "ways", "address", "addresses",
    "absence", "absences", "advantage", "advantages", "aid", "aids", "alternative", "alternatives",
    "aspect", "aspects", "authority", "authorities", "axis", "axes", "background", "backgrounds",
    "balance", "balances", "base", "bases", "beginning", "beginnings", "benefit", "benefits",
    "bias", "biases", "bond", "bonds", "capital", "capitals", "care", "cares", "career", "careers",
    "cause", "causes", "characteristic", "characteristics", "charge", "charges", "check", "checks",
    "choice", "choices", "circuit", "circuits", "circumstance", "circumstances", "climate",
    "climates", "code", "codes", "color", "colors", "column", "columns", "combination",
    "combinations", "complex", "complexes", "connection", "connections", "constant", "constants",
    "constraint", "constraints", "contact", "contacts", "content", "contents", "contract",
    "contracts", "context", "contexts", "contrast", "contrasts", "crime", "crimes", "criteria",
    "criterias", "cross", "crosses", "current", "currents", "curriculum", "curriculums", "curve",
    "curves", "debt", "debts", "density", "densities",
];

/// Nouns controlling non-factive that-clauses.
pub const THAT_NONFACTIVE: &[&str] = &[
    "comment", "comments", "news", "proposal", "proposals", "proposition", "propositions",
    "remark", "remarks", "report", "reports", "requirement", "requirements",
];

pub const THAT_ATTITUDE: &[&str] = &[
    "grounds", "ground", "hope", "hopes", "reason", "reasons", "view", "views", "thought",
    "thoughts",
];

pub const THAT_FACTIVE: &[&str] = &[
    "assertion", "assertions", "conclusion", "conclusions", "conviction", "convictions",
    "discovery", "discoveries", "doubt", "doubts", "fact", "facts", "knowledge", "knowledges",
    "observation", "observations", "principle", "principles", "realization", "realizations",
    "result", "results", "statement", "statements",
];

pub const THAT_LIKELIHOOD: &[&str] = &[
    "assumption", "assumptions", "belief", "beliefs", "claim", "claims", "contention",
    "contentions", "feeling", "feelings", "hypothesis", "hypotheses", "idea", "ideas",
    "implication", "implications", "impression", "impressions", "notion", "notions", "opinion",
    "opinions", "possibility", "possibilities", "presumption", "presumptions", "suggestion",
    "suggestions",
];

/// Stance nouns controlling to-clauses.
pub const TO_STANCE: &[&str] = &[
    "agreement", "agreements", "decision", "decisions", "desire", "desires", "failure", "failures",
    "inclination", "inclinations", "intention", "intentions", "obligation", "obligations",
    "opportunity", "opportunities", "plan", "plans", "promise", "promises", "proposal",
    "proposals", "reluctance", "reluctances", "responsibility", "responsibilities", "right",
    "rights", "tendency", "tendencies", "threat", "threats", "wish", "wishes", "willingness",
    "willingnesses",
];

/// Stance nouns followed by a prepositional phrase.
pub const STANCE_PREPOSITIONAL: &[&str] = &[
    "assertion", "assertions", "conclusion", "conclusions", "conviction", "convictions",
    "discovery", "discoveries", "doubt", "doubts", "fact", "facts", "knowledge", "knowledges",
    "observation", "observations", "principle", "principles", "realization", "realizations",
    "result", "results", "statement", "statements", "assumption", "assumptions", "belief",
    "beliefs", "claim", "claims", "contention", "contentions", "feeling", "feelings", "hypothesis",
    "hypotheses", "idea", "ideas", "implication", "implications", "impression", "impressions",
    "notion", "notions", "opinion", "opinions", "possibility", "possibilities", "presumption",
    "presumptions", "suggestion", "suggestions", "grounds", "ground", "hope", "hopes", "reason",
    "reasons", "view", "views", "thought", "thoughts", "comment", "comments", "news", "proposal",
    "proposals", "proposition", "propositions", "remark", "remarks", "report", "reports",
    "requirement", "requirements", "agreement", "agreements", "decision", "decisions", "desire",
    "desires", "failure", "failures", "inclination", "inclinations", "intention", "intentions",
    "obligation", "obligations", "opportunity", "opportunities", "plan", "plans", "promise",
    "promises", "reluctance", "reluctances", "responsibility", "responsibilities", "right",
    "rights", "tendency", "tendencies", "threat", "threats", "wish", "wishes", "willingness",
    "willingnesses",
];
