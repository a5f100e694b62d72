//! Input symptom normalisation.

use std::collections::BTreeSet;

use healthmate_common::{normalise_token, SymptomToken};

/// Normalised, de-duplicated view of a request's reported symptoms.
pub type SymptomSet = BTreeSet<SymptomToken>;

/// Canonicalise raw input strings into a comparable token set.
///
/// Trims, lowercases and joins words with underscores; spellings that
/// normalise to the same token collapse into one entry.
pub fn normalise_symptoms<I, S>(raw: I) -> SymptomSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|s| normalise_token(s.as_ref())).collect()
}
