//! Naive-Bayes cause scoring within a matched symptom group.
//!
//! score(c)      = prior(c) × Π_{s ∈ reported} P(s | c)
//! confidence(c) = score(c) / Σ score
//!
//! The product runs over EVERY reported symptom, including ones unrelated to
//! the group, so each extra symptom multiplies in at least the fallback
//! likelihood.

use healthmate_common::TriageLevel;
use healthmate_kb::{Cause, SymptomGroup};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::normalise::SymptomSet;
use crate::params::ScoringParams;

/// A cause ranked for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCause {
    pub id: String,
    pub name: String,
    /// Unnormalised prior × likelihood product.
    pub score: f64,
    /// Posterior within the matched group, in [0, 1].
    pub confidence: f64,
    pub tests: Vec<String>,
    pub triage_level: TriageLevel,
}

/// Unnormalised score of one cause.
pub fn raw_score(cause: &Cause, tokens: &SymptomSet, fallback_likelihood: f64) -> f64 {
    tokens
        .iter()
        .map(|t| cause.likelihood(t, fallback_likelihood))
        .fold(cause.prior, |acc, p| acc * p)
}

/// Divide each score by the total. An all-zero input yields all zeros.
pub fn normalise_confidences(scores: &[f64]) -> Vec<f64> {
    let total: f64 = scores.iter().sum();
    if total > 0.0 {
        scores.iter().map(|s| s / total).collect()
    } else {
        vec![0.0; scores.len()]
    }
}

/// Score every cause in `group`, sorted by descending confidence.
/// Ties keep knowledge-base order.
pub fn score_group(tokens: &SymptomSet, group: &SymptomGroup, params: &ScoringParams) -> Vec<ScoredCause> {
    let scores: Vec<f64> = group
        .causes
        .iter()
        .map(|c| raw_score(c, tokens, params.fallback_likelihood))
        .collect();
    let confidences = normalise_confidences(&scores);

    if !group.causes.is_empty() && confidences.iter().all(|&c| c == 0.0) {
        warn!(group = %group.label, "Every cause scored zero; reporting zero confidence");
    }

    let mut ranked: Vec<ScoredCause> = group
        .causes
        .iter()
        .zip(scores)
        .zip(confidences)
        .map(|((cause, score), confidence)| ScoredCause {
            id: cause.id.clone(),
            name: cause.name.clone(),
            score,
            confidence,
            tests: cause.tests.clone(),
            triage_level: cause.triage_level.clone(),
        })
        .collect();

    // `sort_by` is stable, which keeps declaration order on exact ties.
    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(top) = ranked.first() {
        debug!(group = %group.label, top = %top.id, confidence = top.confidence, "Scored causes");
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalise::normalise_symptoms;

    fn params() -> ScoringParams {
        ScoringParams::default()
    }

    fn respiratory() -> SymptomGroup {
        SymptomGroup::new(
            "fever + cough",
            vec![
                Cause::new("cold", "Common cold", 0.5)
                    .with_likelihood("cough", 0.7)
                    .with_likelihood("fever", 0.2),
                Cause::new("flu", "Influenza", 0.3)
                    .with_likelihood("cough", 0.8)
                    .with_likelihood("fever", 0.9),
            ],
        )
    }

    #[test]
    fn test_raw_score_is_prior_times_likelihoods() {
        let group = respiratory();
        let tokens = normalise_symptoms(["fever", "cough"]);
        let flu = raw_score(&group.causes[1], &tokens, 0.01);
        assert!((flu - 0.3 * 0.8 * 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_symptom_uses_fallback() {
        let group = respiratory();
        let tokens = normalise_symptoms(["fever", "rash"]);
        let cold = raw_score(&group.causes[0], &tokens, 0.01);
        assert!((cold - 0.5 * 0.2 * 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_confidences_sum_to_one_and_sorted() {
        let ranked = score_group(&normalise_symptoms(["fever", "cough"]), &respiratory(), &params());
        let total: f64 = ranked.iter().map(|c| c.confidence).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(ranked[0].id, "flu");
        assert!(ranked[0].confidence >= ranked[1].confidence);
    }

    #[test]
    fn test_all_zero_scores_give_zero_confidence() {
        let group = SymptomGroup::new(
            "fever",
            vec![
                Cause::new("a", "A", 0.5).with_likelihood("fever", 0.0),
                Cause::new("b", "B", 0.5).with_likelihood("fever", 0.0),
            ],
        );
        let ranked = score_group(&normalise_symptoms(["fever"]), &group, &params());
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.confidence == 0.0));
        assert_eq!(ranked[0].id, "a");
    }

    #[test]
    fn test_zero_cause_sorts_last() {
        let group = SymptomGroup::new(
            "fever",
            vec![
                Cause::new("never", "Never", 0.9).with_likelihood("fever", 0.0),
                Cause::new("maybe", "Maybe", 0.1).with_likelihood("fever", 0.5),
            ],
        );
        let ranked = score_group(&normalise_symptoms(["fever"]), &group, &params());
        assert_eq!(ranked[0].id, "maybe");
        assert!((ranked[0].confidence - 1.0).abs() < 1e-12);
        assert_eq!(ranked[1].id, "never");
        assert_eq!(ranked[1].confidence, 0.0);
    }

    #[test]
    fn test_exact_ties_keep_declaration_order() {
        let group = SymptomGroup::new(
            "fever",
            vec![
                Cause::new("second_best", "Low", 0.1).with_likelihood("fever", 0.5),
                Cause::new("twin_a", "Twin A", 0.4).with_likelihood("fever", 0.6),
                Cause::new("twin_b", "Twin B", 0.4).with_likelihood("fever", 0.6),
            ],
        );
        let ranked = score_group(&normalise_symptoms(["fever"]), &group, &params());
        let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["twin_a", "twin_b", "second_best"]);
    }

    #[test]
    fn test_empty_group_scores_nothing() {
        let group = SymptomGroup::new("fever", vec![]);
        assert!(score_group(&normalise_symptoms(["fever"]), &group, &params()).is_empty());
    }

    #[test]
    fn test_normalise_confidences_degenerate() {
        assert_eq!(normalise_confidences(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(normalise_confidences(&[]).is_empty());
        let n = normalise_confidences(&[1.0, 3.0]);
        assert!((n[0] - 0.25).abs() < 1e-12 && (n[1] - 0.75).abs() < 1e-12);
    }
}
