//! VADER-style rule-based polarity engine.
//!
//! Scores text from an embedded word-valence table with negation flipping
//! and booster/dampener scaling. The compound score is the normalized sum of
//! token valences, `sum / sqrt(sum² + 15)`, clamped to [-1, 1]; per-category
//! intensities are mass proportions over the scored tokens.

use std::collections::{HashMap, HashSet};

use crate::report::LabelDistribution;

use super::words::{DEFAULT_BOOSTERS, DEFAULT_NEGATIONS, DEFAULT_VALENCES};

/// Normalization constant for the compound score; approximates the maximum
/// expected valence sum of a short text.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Raw polarity scores for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    /// Normalized compound polarity in [-1, 1].
    pub compound: f64,
    /// Positive/neutral/negative mass proportions, each in [0, 1].
    pub intensities: LabelDistribution,
}

/// Rule-based polarity engine over a word-valence lexicon.
///
/// Built once at startup and shared read-only; scoring takes `&self` and has
/// no side effects beyond table lookups.
#[derive(Debug)]
pub struct LexiconEngine {
    valences: HashMap<String, f64>,
    negations: HashSet<String>,
    boosters: HashMap<String, f64>,
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconEngine {
    /// Create an engine with the embedded default tables.
    pub fn new() -> Self {
        let valences = DEFAULT_VALENCES
            .iter()
            .map(|(w, v)| (w.to_string(), *v))
            .collect();
        let negations = DEFAULT_NEGATIONS.iter().map(|w| w.to_string()).collect();
        let boosters = DEFAULT_BOOSTERS
            .iter()
            .map(|(w, v)| (w.to_string(), *v))
            .collect();

        Self {
            valences,
            negations,
            boosters,
        }
    }

    /// Create an engine with custom word valences merged over the defaults.
    pub fn with_custom_words(custom: &HashMap<String, f64>) -> Self {
        let mut engine = Self::new();
        for (word, valence) in custom {
            engine.valences.insert(word.to_lowercase(), *valence);
        }
        engine
    }

    /// Valence for a single word, if the lexicon knows it.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    /// Whether the token is a negation.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Booster multiplier for the token, if any.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(&word.to_lowercase()).copied()
    }

    /// Score a text.
    ///
    /// Single O(tokens) pass: negations flip the sign of the next sentiment
    /// word, boosters scale it. Tokens carrying no valence contribute
    /// neutral mass. Runs unbounded input without truncation.
    pub fn polarity(&self, text: &str) -> PolarityScores {
        let mut valence_sum = 0.0;
        let mut pos_mass = 0.0;
        let mut neg_mass = 0.0;
        let mut neu_count = 0usize;

        let mut negate_next = false;
        let mut multiplier = 1.0;

        for raw in text.split_whitespace() {
            let token = normalize_token(raw);
            if token.is_empty() {
                continue;
            }

            if self.is_negation(&token) {
                negate_next = true;
                continue;
            }

            if let Some(boost) = self.booster(&token) {
                multiplier *= boost;
                continue;
            }

            match self.valence(&token) {
                Some(base) => {
                    let mut valence = base * multiplier;
                    if negate_next {
                        valence = -valence;
                    }

                    valence_sum += valence;
                    if valence > 0.0 {
                        // +1 per hit keeps single weak words from vanishing
                        // in the proportion
                        pos_mass += valence + 1.0;
                    } else if valence < 0.0 {
                        neg_mass += valence.abs() + 1.0;
                    } else {
                        neu_count += 1;
                    }
                }
                None => {
                    neu_count += 1;
                }
            }

            negate_next = false;
            multiplier = 1.0;
        }

        let compound = normalize_compound(valence_sum);
        let intensities = intensity_proportions(pos_mass, neg_mass, neu_count);

        PolarityScores {
            compound,
            intensities,
        }
    }
}

/// Lowercase and strip surrounding punctuation.
fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

/// Normalize a raw valence sum into [-1, 1].
fn normalize_compound(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

/// Positive/neutral/negative proportions over the accumulated token mass.
fn intensity_proportions(pos_mass: f64, neg_mass: f64, neu_count: usize) -> LabelDistribution {
    let neu_mass = neu_count as f64;
    let total = pos_mass + neg_mass + neu_mass;
    if total <= f64::EPSILON {
        return LabelDistribution {
            positive: 0.0,
            neutral: 1.0,
            negative: 0.0,
        };
    }
    LabelDistribution {
        positive: pos_mass / total,
        neutral: neu_mass / total,
        negative: neg_mass / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let engine = LexiconEngine::new();
        let scores = engine.polarity("I love this amazing product");
        assert!(scores.compound > 0.05, "compound: {}", scores.compound);
        assert!(scores.intensities.positive > scores.intensities.negative);
    }

    #[test]
    fn test_negative_text() {
        let engine = LexiconEngine::new();
        let scores = engine.polarity("This is the worst experience ever, truly terrible.");
        assert!(scores.compound < -0.05, "compound: {}", scores.compound);
        assert!(scores.intensities.negative > scores.intensities.positive);
    }

    #[test]
    fn test_neutral_text() {
        let engine = LexiconEngine::new();
        let scores = engine.polarity("The item arrived on Tuesday.");
        assert!(scores.compound.abs() < 0.05, "compound: {}", scores.compound);
        assert!(scores.intensities.neutral > 0.9);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let engine = LexiconEngine::new();
        let plain = engine.polarity("the service was good");
        let negated = engine.polarity("the service was not good");
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn test_booster_amplifies() {
        let engine = LexiconEngine::new();
        let plain = engine.polarity("this is good");
        let boosted = engine.polarity("this is extremely good");
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn test_dampener_softens() {
        let engine = LexiconEngine::new();
        let plain = engine.polarity("this is good");
        let dampened = engine.polarity("this is slightly good");
        assert!(dampened.compound < plain.compound);
        assert!(dampened.compound > 0.0);
    }

    #[test]
    fn test_compound_stays_in_range() {
        let engine = LexiconEngine::new();
        let long_praise = "love amazing excellent wonderful perfect best brilliant ".repeat(20);
        let scores = engine.polarity(&long_praise);
        assert!(scores.compound <= 1.0);
        assert!(scores.compound > 0.9);
    }

    #[test]
    fn test_punctuation_stripped() {
        let engine = LexiconEngine::new();
        let scores = engine.polarity("Great!!! Absolutely wonderful.");
        assert!(scores.compound > 0.3);
    }

    #[test]
    fn test_custom_words_override_defaults() {
        let mut custom = HashMap::new();
        custom.insert("rocket".to_string(), 2.5);
        custom.insert("good".to_string(), -1.0);

        let engine = LexiconEngine::with_custom_words(&custom);
        assert_eq!(engine.valence("rocket"), Some(2.5));
        assert_eq!(engine.valence("good"), Some(-1.0));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let engine = LexiconEngine::new();
        let first = engine.polarity("a great day with a terrible ending");
        let second = engine.polarity("a great day with a terrible ending");
        assert_eq!(first, second);
    }
}
