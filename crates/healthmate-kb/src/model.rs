//! Validated, immutable knowledge base values.

use std::collections::{BTreeSet, HashMap, HashSet};

use healthmate_common::{normalise_token, HealthmateError, Result, SymptomToken, TriageLevel};

use crate::schema::{KnowledgeBaseDoc, RedFlagsDoc};

const KB: &str = "knowledge base";
const RED_FLAGS: &str = "red-flag rules";

/// A candidate cause within a symptom group.
#[derive(Debug, Clone, PartialEq)]
pub struct Cause {
    pub id: String,
    pub name: String,
    /// Baseline probability before symptom evidence, in (0, 1].
    pub prior: f64,
    /// P(symptom | cause), each in [0, 1].
    pub symptom_likelihoods: HashMap<SymptomToken, f64>,
    pub tests: Vec<String>,
    pub triage_level: TriageLevel,
}

impl Cause {
    pub fn new(id: &str, name: &str, prior: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            prior,
            symptom_likelihoods: HashMap::new(),
            tests: Vec::new(),
            triage_level: TriageLevel::default(),
        }
    }

    /// Add a likelihood entry; the symptom is normalised like user input.
    pub fn with_likelihood(mut self, symptom: &str, likelihood: f64) -> Self {
        self.symptom_likelihoods.insert(normalise_token(symptom), likelihood);
        self
    }

    pub fn with_tests<I, S>(mut self, tests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tests = tests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_triage(mut self, level: TriageLevel) -> Self {
        self.triage_level = level;
        self
    }

    /// Likelihood of `symptom` under this cause, or `fallback` when the
    /// cause does not mention it.
    pub fn likelihood(&self, symptom: &SymptomToken, fallback: f64) -> f64 {
        self.symptom_likelihoods.get(symptom).copied().unwrap_or(fallback)
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(HealthmateError::schema(KB, format!("cause '{}' has an empty id", self.name)));
        }
        if !(self.prior.is_finite() && self.prior > 0.0 && self.prior <= 1.0) {
            return Err(HealthmateError::schema(
                KB,
                format!("cause '{}' has prior {} outside (0, 1]", self.id, self.prior),
            ));
        }
        // Sorted so the reported offender is deterministic.
        let mut entries: Vec<_> = self.symptom_likelihoods.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (symptom, &p) in entries {
            if !(p.is_finite() && (0.0..=1.0).contains(&p)) {
                return Err(HealthmateError::schema(
                    KB,
                    format!("cause '{}' has likelihood {} for '{}' outside [0, 1]", self.id, p, symptom),
                ));
            }
        }
        Ok(())
    }
}

/// A cluster of causes sharing an identifying symptom pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomGroup {
    /// Label as declared in the knowledge base.
    pub label: String,
    /// Tokens derived from the label by splitting on `,` and `+`.
    pub identifying_symptoms: BTreeSet<SymptomToken>,
    pub causes: Vec<Cause>,
}

impl SymptomGroup {
    pub fn new(label: &str, causes: Vec<Cause>) -> Self {
        Self {
            label: label.to_string(),
            identifying_symptoms: split_group_label(label),
            causes,
        }
    }

    /// True if any identifying symptom was reported.
    pub fn matches(&self, reported: &BTreeSet<SymptomToken>) -> bool {
        !self.identifying_symptoms.is_disjoint(reported)
    }
}

/// `"Fever + cough, sore throat"` → `{fever, cough, sore_throat}`.
/// Empty pieces are dropped so a stray separator never matches blank input.
pub fn split_group_label(label: &str) -> BTreeSet<SymptomToken> {
    label
        .split([',', '+'])
        .map(normalise_token)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Every symptom group, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeBase {
    groups: Vec<SymptomGroup>,
}

impl KnowledgeBase {
    /// Validate and freeze a set of groups.
    ///
    /// Cause ids must be unique across the whole knowledge base, priors must
    /// lie in (0, 1], likelihoods in [0, 1], and every group label must
    /// yield at least one token.
    pub fn new(groups: Vec<SymptomGroup>) -> Result<Self> {
        {
            let mut seen_ids = HashSet::new();
            for group in &groups {
                if group.identifying_symptoms.is_empty() {
                    return Err(HealthmateError::schema(
                        KB,
                        format!("group label '{}' contains no symptoms", group.label),
                    ));
                }
                for cause in &group.causes {
                    cause.validate()?;
                    if !seen_ids.insert(cause.id.as_str()) {
                        return Err(HealthmateError::schema(KB, format!("duplicate cause id '{}'", cause.id)));
                    }
                }
            }
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[SymptomGroup] {
        &self.groups
    }

    pub fn cause_count(&self) -> usize {
        self.groups.iter().map(|g| g.causes.len()).sum()
    }

    pub fn find_cause(&self, id: &str) -> Option<&Cause> {
        self.groups.iter().flat_map(|g| g.causes.iter()).find(|c| c.id == id)
    }
}

impl TryFrom<KnowledgeBaseDoc> for KnowledgeBase {
    type Error = HealthmateError;

    fn try_from(doc: KnowledgeBaseDoc) -> Result<Self> {
        let mut groups = Vec::with_capacity(doc.symptom_groups.len());
        for group in doc.symptom_groups {
            let mut causes = Vec::with_capacity(group.causes.len());
            for cause in group.causes {
                let mut symptom_likelihoods = HashMap::with_capacity(cause.symptom_likelihoods.len());
                for (raw, p) in cause.symptom_likelihoods {
                    let token = normalise_token(&raw);
                    if symptom_likelihoods.insert(token.clone(), p).is_some() {
                        return Err(HealthmateError::schema(
                            KB,
                            format!("cause '{}' lists symptom '{}' more than once", cause.id, token),
                        ));
                    }
                }
                causes.push(Cause {
                    id: cause.id,
                    name: cause.name,
                    prior: cause.prior,
                    symptom_likelihoods,
                    tests: cause.tests,
                    triage_level: cause.triage_level,
                });
            }
            groups.push(SymptomGroup::new(&group.group, causes));
        }
        Self::new(groups)
    }
}

/// One threshold check inside a red-flag rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RedFlagCondition {
    /// Distinct symptoms counted towards the threshold, in declaration order.
    pub criteria: Vec<SymptomToken>,
    /// Minimum number of criteria that must be present (≥ 1).
    pub threshold: u32,
    pub message: String,
}

impl RedFlagCondition {
    pub fn new<I, S>(criteria: I, threshold: u32, message: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut criteria_tokens: Vec<SymptomToken> = Vec::new();
        for raw in criteria {
            let token = normalise_token(raw.as_ref());
            if !criteria_tokens.contains(&token) {
                criteria_tokens.push(token);
            }
        }
        Self {
            criteria: criteria_tokens,
            threshold,
            message: message.to_string(),
        }
    }

    /// Number of criteria present in `reported`.
    pub fn matched_count(&self, reported: &BTreeSet<SymptomToken>) -> usize {
        self.criteria.iter().filter(|c| reported.contains(*c)).count()
    }
}

/// Emergency pattern keyed on a trigger symptom.
#[derive(Debug, Clone, PartialEq)]
pub struct RedFlagRule {
    pub trigger_symptom: SymptomToken,
    pub conditions: Vec<RedFlagCondition>,
}

impl RedFlagRule {
    pub fn new(trigger: &str, conditions: Vec<RedFlagCondition>) -> Self {
        Self {
            trigger_symptom: normalise_token(trigger),
            conditions,
        }
    }
}

/// All red-flag rules, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedFlagSet {
    rules: Vec<RedFlagRule>,
}

impl RedFlagSet {
    pub fn new(rules: Vec<RedFlagRule>) -> Result<Self> {
        for rule in &rules {
            if rule.trigger_symptom.is_empty() {
                return Err(HealthmateError::schema(RED_FLAGS, "rule with an empty trigger symptom"));
            }
            for cond in &rule.conditions {
                if cond.threshold == 0 {
                    return Err(HealthmateError::schema(
                        RED_FLAGS,
                        format!("rule '{}' has a condition with threshold 0", rule.trigger_symptom),
                    ));
                }
                if cond.message.trim().is_empty() {
                    return Err(HealthmateError::schema(
                        RED_FLAGS,
                        format!("rule '{}' has a condition without a message", rule.trigger_symptom),
                    ));
                }
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[RedFlagRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<RedFlagsDoc> for RedFlagSet {
    type Error = HealthmateError;

    fn try_from(doc: RedFlagsDoc) -> Result<Self> {
        let rules = doc
            .red_flags
            .into_iter()
            .map(|rule| {
                let conditions = rule
                    .conditions
                    .into_iter()
                    .map(|c| RedFlagCondition::new(&c.criteria, c.threshold, &c.message))
                    .collect();
                RedFlagRule::new(&rule.symptom, conditions)
            })
            .collect();
        Self::new(rules)
    }
}
