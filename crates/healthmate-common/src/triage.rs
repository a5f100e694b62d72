//! Recommended care pathway attached to each cause.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Triage label. Known pathways get their own variant; anything else the
/// knowledge base declares is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriageLevel {
    /// General practitioner
    #[default]
    Gp,
    /// Emergency room
    Er,
    Specialist,
    Other(String),
}

impl TriageLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gp => "GP",
            Self::Er => "ER",
            Self::Specialist => "Specialist",
            Self::Other(label) => label,
        }
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::Er)
    }
}

impl From<String> for TriageLevel {
    fn from(label: String) -> Self {
        match label.trim() {
            "GP" => Self::Gp,
            "ER" => Self::Er,
            "Specialist" => Self::Specialist,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<TriageLevel> for String {
    fn from(level: TriageLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
