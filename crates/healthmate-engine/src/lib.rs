//! healthmate-engine — Symptom matching and scoring engine.
//!
//! Pipeline per request:
//! normalise → match group → naive-Bayes score, with red-flag rules
//! evaluated alongside once a group has matched.

pub mod engine;
pub mod matcher;
pub mod normalise;
pub mod params;
pub mod red_flags;
pub mod scorer;

pub use engine::{AnalysisResult, SymptomEngine, NO_MATCH_WARNING};
pub use params::ScoringParams;
pub use scorer::ScoredCause;
