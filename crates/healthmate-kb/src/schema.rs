//! On-disk document layout for the two data resources.
//!
//! These records mirror the JSON/YAML files as written by clinicians and
//! carry the schema defaults; [`crate::model`] turns them into validated
//! values.

use healthmate_common::TriageLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prior assumed for a cause that does not declare one.
pub const DEFAULT_PRIOR: f64 = 0.01;

/// `knowledge_base.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBaseDoc {
    #[serde(default)]
    pub symptom_groups: Vec<SymptomGroupDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomGroupDoc {
    /// Raw label, e.g. `"fever + cough"` or `"headache, neck stiffness"`.
    pub group: String,
    #[serde(default)]
    pub causes: Vec<CauseDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseDoc {
    pub id: String,
    pub name: String,
    #[serde(default = "default_prior")]
    pub prior: f64,
    #[serde(default)]
    pub symptom_likelihoods: BTreeMap<String, f64>,
    #[serde(default)]
    pub tests: Vec<String>,
    #[serde(default)]
    pub triage_level: TriageLevel,
}

fn default_prior() -> f64 { DEFAULT_PRIOR }

/// `red_flags.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedFlagsDoc {
    #[serde(default)]
    pub red_flags: Vec<RedFlagRuleDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedFlagRuleDoc {
    /// Trigger symptom; the rule is only considered when it was reported.
    pub symptom: String,
    #[serde(default)]
    pub conditions: Vec<RedFlagConditionDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedFlagConditionDoc {
    pub criteria: Vec<String>,
    pub threshold: u32,
    pub message: String,
}
