use healthmate_common::TriageLevel;
use healthmate_kb::{
    Cause, Knowledge, KnowledgeBase, RedFlagCondition, RedFlagRule, RedFlagSet, SymptomGroup,
};

/// Message of the red-flag rule in [`chest_pain_knowledge`].
pub const CHEST_PAIN_RED_FLAG: &str = "Possible heart attack. Call emergency services immediately.";

/// Builder for small in-memory knowledge bases.
///
/// Panics on invalid data, which is what a test wants.
#[derive(Debug, Default)]
pub struct KnowledgeFixture {
    groups: Vec<SymptomGroup>,
    rules: Vec<RedFlagRule>,
}

impl KnowledgeFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, label: &str, causes: Vec<Cause>) -> Self {
        self.groups.push(SymptomGroup::new(label, causes));
        self
    }

    /// Add a single-condition red-flag rule.
    pub fn red_flag(mut self, trigger: &str, criteria: &[&str], threshold: u32, message: &str) -> Self {
        self.rules.push(RedFlagRule::new(
            trigger,
            vec![RedFlagCondition::new(criteria, threshold, message)],
        ));
        self
    }

    pub fn rule(mut self, rule: RedFlagRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Knowledge {
        let kb = KnowledgeBase::new(self.groups).expect("fixture knowledge base must be valid");
        let flags = RedFlagSet::new(self.rules).expect("fixture red-flag rules must be valid");
        Knowledge::new(kb, flags)
    }
}

/// One "chest pain" group led by a high-prior myocardial infarction, with a
/// red-flag rule on chest pain + radiating arm pain + sweating.
pub fn chest_pain_knowledge() -> Knowledge {
    KnowledgeFixture::new()
        .group(
            "chest pain",
            vec![
                Cause::new("myocardial_infarction", "Myocardial infarction", 0.4)
                    .with_likelihood("chest_pain", 0.95)
                    .with_likelihood("pain_radiating_left_arm", 0.8)
                    .with_likelihood("sweating", 0.7)
                    .with_tests(["ECG", "Troponin"])
                    .with_triage(TriageLevel::Er),
                Cause::new("gerd", "Acid reflux", 0.35)
                    .with_likelihood("chest_pain", 0.6)
                    .with_likelihood("heartburn", 0.9)
                    .with_tests(["Trial of PPI"]),
                Cause::new("costochondritis", "Costochondritis", 0.25)
                    .with_likelihood("chest_pain", 0.8),
            ],
        )
        .red_flag(
            "chest_pain",
            &["pain_radiating_left_arm", "sweating"],
            2,
            CHEST_PAIN_RED_FLAG,
        )
        .build()
}
