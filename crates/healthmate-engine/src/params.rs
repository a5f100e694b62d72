//! Tunable scoring parameters.

use serde::{Deserialize, Serialize};

/// Likelihood used for a reported symptom a cause does not mention.
pub const DEFAULT_FALLBACK_LIKELIHOOD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Stand-in for P(symptom | cause) when the cause's table has no entry.
    /// Non-zero so one unexplained symptom cannot eliminate a cause.
    pub fallback_likelihood: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            fallback_likelihood: DEFAULT_FALLBACK_LIKELIHOOD,
        }
    }
}

impl ScoringParams {
    /// The fallback must lie in (0, 1].
    pub fn validate(&self) -> bool {
        self.fallback_likelihood.is_finite()
            && self.fallback_likelihood > 0.0
            && self.fallback_likelihood <= 1.0
    }
}
