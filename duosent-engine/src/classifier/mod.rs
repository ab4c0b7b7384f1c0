//! Machine-learned classifier analysis.

pub mod backend;
pub mod scorer;

pub use backend::{ClassScore, ClassifierBackend, FixedClassifier, HttpClassifier};
pub use scorer::ClassifierScorer;
