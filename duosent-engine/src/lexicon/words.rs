//! Embedded default word tables for the lexicon engine.
//!
//! Valences use the conventional -4.0..+4.0 intensity scale. Boosters are
//! multipliers applied to the following sentiment word; dampeners use
//! multipliers below 1.0.

/// General-domain word valences.
pub const DEFAULT_VALENCES: &[(&str, f64)] = &[
    // Positive
    ("love", 3.2),
    ("loved", 2.9),
    ("adore", 3.2),
    ("great", 3.1),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("perfect", 2.7),
    ("best", 3.2),
    ("brilliant", 2.8),
    ("beautiful", 2.9),
    ("delight", 2.9),
    ("delighted", 2.9),
    ("excited", 2.3),
    ("exciting", 2.2),
    ("happy", 2.7),
    ("glad", 2.0),
    ("joy", 2.8),
    ("good", 1.9),
    ("nice", 1.8),
    ("fine", 0.8),
    ("better", 1.9),
    ("improved", 1.6),
    ("impressive", 2.3),
    ("recommend", 1.6),
    ("pleased", 2.2),
    ("pleasant", 2.3),
    ("satisfied", 1.9),
    ("superb", 3.0),
    ("success", 2.7),
    ("successful", 2.4),
    ("win", 2.8),
    ("winner", 2.8),
    ("thanks", 1.9),
    ("thank", 1.9),
    ("helpful", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("fun", 2.3),
    ("like", 1.5),
    ("liked", 1.7),
    ("smooth", 1.3),
    ("solid", 1.5),
    ("reliable", 1.9),
    ("easy", 1.5),
    ("useful", 1.9),
    ("exceeded", 1.8),
    ("outstanding", 3.1),
    // Negative
    ("hate", -2.7),
    ("hated", -2.9),
    ("terrible", -3.0),
    ("awful", -3.3),
    ("horrible", -2.5),
    ("worst", -3.1),
    ("bad", -2.5),
    ("worse", -2.1),
    ("disappointing", -2.2),
    ("disappointed", -2.3),
    ("disappointment", -2.3),
    ("poor", -2.1),
    ("useless", -1.8),
    ("broken", -1.8),
    ("broke", -1.6),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.6),
    ("angry", -2.3),
    ("furious", -2.9),
    ("sad", -2.1),
    ("unhappy", -1.9),
    ("upset", -1.9),
    ("annoying", -1.9),
    ("annoyed", -1.8),
    ("frustrating", -2.1),
    ("frustrated", -2.2),
    ("wrong", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("issue", -0.8),
    ("issues", -0.9),
    ("bug", -1.3),
    ("buggy", -1.9),
    ("slow", -1.2),
    ("crash", -2.2),
    ("crashed", -2.1),
    ("ugly", -2.3),
    ("boring", -1.3),
    ("mess", -2.0),
    ("waste", -1.8),
    ("scam", -2.6),
    ("fraud", -2.8),
    ("nightmare", -2.8),
    ("disgusting", -2.8),
    ("pathetic", -2.6),
    ("dreadful", -2.8),
    ("avoid", -1.2),
    ("regret", -2.3),
    ("terribly", -2.6),
];

/// Negation tokens. A negation flips the sign of the next sentiment word.
pub const DEFAULT_NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "none", "cannot", "cant",
    "can't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "wont", "won't", "wouldnt",
    "wouldn't", "shouldnt", "shouldn't", "couldnt", "couldn't", "isnt", "isn't", "arent", "aren't",
    "wasnt", "wasn't", "werent", "weren't", "hardly", "barely", "scarcely", "without",
];

/// Booster/dampener multipliers applied to the following sentiment word.
pub const DEFAULT_BOOSTERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("completely", 1.4),
    ("totally", 1.4),
    ("highly", 1.3),
    ("so", 1.2),
    ("super", 1.3),
    ("utterly", 1.4),
    ("remarkably", 1.3),
    // Dampeners
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("kinda", 0.7),
    ("kind", 0.8),
    ("marginally", 0.6),
    ("bit", 0.7),
    ("fairly", 0.8),
    ("rather", 0.9),
];
