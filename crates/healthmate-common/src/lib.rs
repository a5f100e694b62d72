//! healthmate-common — Shared types and errors used across all Healthmate crates.

pub mod error;
pub mod symptom;
pub mod triage;

// Re-export commonly used types
pub use error::{HealthmateError, Result};
pub use symptom::{normalise_token, SymptomToken};
pub use triage::TriageLevel;
