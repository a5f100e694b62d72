//! Symptom group selection.

use healthmate_kb::SymptomGroup;
use tracing::debug;

use crate::normalise::SymptomSet;

/// Select the group for a request.
///
/// Scans groups in knowledge-base order and returns the FIRST whose
/// identifying symptoms share any token with `tokens`. A later group that
/// overlaps more is never considered.
pub fn match_group<'a>(tokens: &SymptomSet, groups: &'a [SymptomGroup]) -> Option<&'a SymptomGroup> {
    let matched = groups.iter().find(|g| g.matches(tokens));
    match matched {
        Some(group) => debug!(group = %group.label, "Matched symptom group"),
        None => debug!(reported = tokens.len(), "No symptom group matched"),
    }
    matched
}
