//! Lexicon/rule-based sentiment analysis.
//!
//! The engine scores text against an embedded word-valence table with
//! negation and booster handling; the scorer derives the canonical label
//! from the compound score and guards degenerate input.

pub mod engine;
pub mod scorer;
pub mod words;

pub use engine::{LexiconEngine, PolarityScores};
pub use scorer::{label_from_compound, LexiconScorer};
