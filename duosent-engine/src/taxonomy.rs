//! Canonical sentiment taxonomy and native-label normalization.
//!
//! Every label produced anywhere in the engine comes from the 3-way
//! [`SentimentLabel`] taxonomy. Analyzer-native vocabularies (RoBERTa's
//! `LABEL_0/1/2`, SST-2's `POSITIVE`/`NEGATIVE`) are translated through a
//! fixed [`LabelNormalizer`] table; a token outside the table fails the
//! request instead of defaulting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use duosent_common::{Error, Result};

// ============================================================================
// Canonical Labels
// ============================================================================

/// Canonical 3-way sentiment taxonomy.
///
/// Declaration order is the tie-break order: Positive > Neutral > Negative.
/// When two classes carry the same probability mass, the earlier variant
/// wins, making argmax deterministic regardless of map iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Positive sentiment
    Positive,
    /// Neutral / no clear polarity
    Neutral,
    /// Negative sentiment
    Negative,
}

impl SentimentLabel {
    /// All labels in tie-break order.
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Canonical lowercase name, matching the config-side label table values.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Parse a canonical label name ("positive", "neutral", "negative").
    ///
    /// This parses the *canonical* side of the label table, not analyzer
    /// vocabularies; those go through [`LabelNormalizer`].
    pub fn from_canonical(name: &str) -> Option<Self> {
        match name {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Label Normalizer
// ============================================================================

/// Fixed translation table from analyzer-native label tokens to the
/// canonical taxonomy.
///
/// Built once at startup from configuration and validated there: a table
/// entry whose canonical side is not a taxonomy member is a configuration
/// error. Lookups of unknown native tokens fail loudly with
/// [`Error::UnknownLabel`] so a silently changed model label set cannot
/// masquerade as a valid classification.
#[derive(Debug, Clone)]
pub struct LabelNormalizer {
    table: HashMap<String, SentimentLabel>,
}

impl LabelNormalizer {
    /// Build a normalizer from a native-token → canonical-name table.
    ///
    /// Fails fast if any canonical name is outside the taxonomy.
    pub fn from_table(table: &HashMap<String, String>) -> Result<Self> {
        let mut resolved = HashMap::with_capacity(table.len());
        for (native, canonical) in table {
            let label = SentimentLabel::from_canonical(canonical).ok_or_else(|| {
                Error::Config(format!(
                    "label table maps '{}' to '{}', which is not one of positive/neutral/negative",
                    native, canonical
                ))
            })?;
            resolved.insert(native.clone(), label);
        }
        Ok(Self { table: resolved })
    }

    /// Translate a native label token to the canonical taxonomy.
    pub fn normalize(&self, native: &str) -> Result<SentimentLabel> {
        self.table
            .get(native)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(native.to_string()))
    }

    /// Whether the table knows the given native token.
    pub fn contains(&self, native: &str) -> bool {
        self.table.contains_key(native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_known_labels() {
        let normalizer = LabelNormalizer::from_table(&table(&[
            ("LABEL_0", "negative"),
            ("LABEL_1", "neutral"),
            ("LABEL_2", "positive"),
        ]))
        .unwrap();

        assert_eq!(
            normalizer.normalize("LABEL_2").unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            normalizer.normalize("LABEL_0").unwrap(),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_unknown_native_label_fails_loudly() {
        let normalizer =
            LabelNormalizer::from_table(&table(&[("POSITIVE", "positive")])).unwrap();

        let err = normalizer.normalize("LABEL_9").unwrap_err();
        assert!(matches!(err, Error::UnknownLabel(ref l) if l == "LABEL_9"));
    }

    #[test]
    fn test_invalid_canonical_side_is_config_error() {
        let err = LabelNormalizer::from_table(&table(&[("LABEL_0", "bad")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_matching_is_exact_not_case_folded() {
        let normalizer =
            LabelNormalizer::from_table(&table(&[("POSITIVE", "positive")])).unwrap();

        assert!(normalizer.contains("POSITIVE"));
        assert!(normalizer.normalize("Positive").is_err());
    }

    #[test]
    fn test_tie_break_order() {
        assert_eq!(
            SentimentLabel::ALL,
            [
                SentimentLabel::Positive,
                SentimentLabel::Neutral,
                SentimentLabel::Negative
            ]
        );
    }
}
