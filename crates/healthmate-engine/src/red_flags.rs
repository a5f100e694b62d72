//! Red-flag emergency rule evaluation.

use healthmate_kb::RedFlagRule;
use tracing::{debug, info};

use crate::normalise::SymptomSet;

/// Messages for every condition whose threshold is met.
///
/// A rule is considered only when its trigger symptom was reported. Within
/// it, each condition fires when at least `threshold` of its criteria are
/// present. Messages come out in rule, then condition, declaration order;
/// nothing is deduplicated and evaluation never stops early.
pub fn check_red_flags(tokens: &SymptomSet, rules: &[RedFlagRule]) -> Vec<String> {
    let mut warnings = Vec::new();
    for rule in rules.iter().filter(|r| tokens.contains(&r.trigger_symptom)) {
        for cond in &rule.conditions {
            let count = cond.matched_count(tokens);
            debug!(
                trigger = %rule.trigger_symptom,
                count,
                threshold = cond.threshold,
                "Red-flag condition evaluated"
            );
            if count >= cond.threshold as usize {
                info!(trigger = %rule.trigger_symptom, "Red flag raised");
                warnings.push(cond.message.clone());
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalise::normalise_symptoms;
    use healthmate_kb::RedFlagCondition;

    fn rules() -> Vec<RedFlagRule> {
        vec![
            RedFlagRule::new(
                "chest_pain",
                vec![RedFlagCondition::new(["pain_radiating_left_arm", "sweating"], 2, "Heart attack?")],
            ),
            RedFlagRule::new(
                "headache",
                vec![
                    RedFlagCondition::new(["neck_stiffness", "fever"], 2, "Meningitis?"),
                    RedFlagCondition::new(["sudden_onset"], 1, "Brain bleed?"),
                ],
            ),
            RedFlagRule::new(
                "fever",
                vec![RedFlagCondition::new(["neck_stiffness"], 1, "Meningitis?")],
            ),
        ]
    }

    #[test]
    fn test_threshold_met() {
        let tokens = normalise_symptoms(["chest_pain", "pain_radiating_left_arm", "sweating"]);
        assert_eq!(check_red_flags(&tokens, &rules()), vec!["Heart attack?".to_string()]);
    }

    #[test]
    fn test_threshold_not_met() {
        let tokens = normalise_symptoms(["chest_pain", "sweating"]);
        assert!(check_red_flags(&tokens, &rules()).is_empty());
    }

    #[test]
    fn test_trigger_required() {
        let tokens = normalise_symptoms(["pain_radiating_left_arm", "sweating"]);
        assert!(check_red_flags(&tokens, &rules()).is_empty());
    }

    #[test]
    fn test_multiple_rules_fire_in_order_without_dedup() {
        let tokens = normalise_symptoms(["headache", "neck stiffness", "fever", "sudden onset"]);
        assert_eq!(
            check_red_flags(&tokens, &rules()),
            vec!["Meningitis?".to_string(), "Brain bleed?".to_string(), "Meningitis?".to_string()]
        );
    }

    #[test]
    fn test_no_rules() {
        assert!(check_red_flags(&normalise_symptoms(["chest_pain"]), &[]).is_empty());
    }
}
