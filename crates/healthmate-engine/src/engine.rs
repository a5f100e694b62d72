//! Request orchestration: one call per symptom analysis.

use healthmate_common::{HealthmateError, Result};
use healthmate_kb::Knowledge;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::matcher::match_group;
use crate::normalise::{normalise_symptoms, SymptomSet};
use crate::params::ScoringParams;
use crate::red_flags::check_red_flags;
use crate::scorer::{score_group, ScoredCause};

/// Sole warning returned when no symptom group matches.
pub const NO_MATCH_WARNING: &str = "No matching symptom group found.";

/// Ranked causes plus emergency warnings for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Descending confidence; ties keep knowledge-base order.
    pub causes: Vec<ScoredCause>,
    pub warnings: Vec<String>,
    /// Label of the group the causes came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_group: Option<String>,
}

impl AnalysisResult {
    fn no_match() -> Self {
        Self {
            causes: Vec::new(),
            warnings: vec![NO_MATCH_WARNING.to_string()],
            matched_group: None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        self.matched_group.is_none()
    }
}

/// The symptom analysis engine.
///
/// Holds only read-only shared data, so clones are cheap and concurrent
/// calls need no locking.
#[derive(Debug, Clone)]
pub struct SymptomEngine {
    knowledge: Knowledge,
    params: ScoringParams,
}

impl SymptomEngine {
    pub fn new(knowledge: Knowledge) -> Self {
        Self {
            knowledge,
            params: ScoringParams::default(),
        }
    }

    pub fn with_params(knowledge: Knowledge, params: ScoringParams) -> Result<Self> {
        if !params.validate() {
            return Err(HealthmateError::Config(format!(
                "fallback_likelihood must lie in (0, 1], got {}",
                params.fallback_likelihood
            )));
        }
        Ok(Self { knowledge, params })
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Analyse raw, user-supplied symptom strings.
    pub fn analyze<I, S>(&self, raw_symptoms: I) -> AnalysisResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.analyze_tokens(&normalise_symptoms(raw_symptoms))
    }

    /// Analyse an already-normalised symptom set.
    ///
    /// When no group matches, red-flag rules are NOT evaluated and the only
    /// warning is [`NO_MATCH_WARNING`].
    pub fn analyze_tokens(&self, tokens: &SymptomSet) -> AnalysisResult {
        let _span = info_span!("analyze", symptoms = tokens.len()).entered();

        let Some(group) = match_group(tokens, self.knowledge.knowledge_base().groups()) else {
            return AnalysisResult::no_match();
        };

        let causes = score_group(tokens, group, &self.params);
        let warnings = check_red_flags(tokens, self.knowledge.red_flags().rules());
        debug!(causes = causes.len(), warnings = warnings.len(), "Analysis complete");

        AnalysisResult {
            causes,
            warnings,
            matched_group: Some(group.label.clone()),
        }
    }
}
