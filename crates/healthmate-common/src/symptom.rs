//! Symptom tokens — the unit of matching between user input and the knowledge base.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A normalised symptom identifier (lowercase, underscore-separated).
///
/// Only [`normalise_token`] produces these, so two tokens compare equal exactly
/// when their raw spellings normalise to the same string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomToken(String);

impl SymptomToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SymptomToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SymptomToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SymptomToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Canonicalise one raw symptom: trim, lowercase, spaces → underscores.
///
/// Each space becomes one underscore, so `"chest  pain"` yields `"chest__pain"`.
/// Garbage passes through untouched and simply never matches.
pub fn normalise_token(raw: &str) -> SymptomToken {
    SymptomToken(raw.trim().to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_trims_lowercases_and_joins() {
        assert_eq!(normalise_token("  Chest Pain ").as_str(), "chest_pain");
        assert_eq!(normalise_token("SWEATING").as_str(), "sweating");
        assert_eq!(normalise_token("pain_radiating_left_arm").as_str(), "pain_radiating_left_arm");
    }

    #[test]
    fn test_normalise_keeps_garbage() {
        assert!(normalise_token("   ").is_empty());
        assert_eq!(normalise_token("a  b").as_str(), "a__b");
        assert_eq!(normalise_token("!?").as_str(), "!?");
    }

    #[test]
    fn test_token_borrows_as_str() {
        let set: std::collections::BTreeSet<SymptomToken> =
            ["fever", "cough"].iter().map(|s| normalise_token(s)).collect();
        assert!(set.contains("fever"));
        assert!(!set.contains("Fever"));
    }

    #[test]
    fn test_token_serialises_as_plain_string() {
        let json = serde_json::to_string(&normalise_token("Sore Throat")).unwrap();
        assert_eq!(json, "\"sore_throat\"");
    }
}
