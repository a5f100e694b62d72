//! Request validation and response shaping around the engine.

use healthmate_common::{HealthmateError, Result, TriageLevel};
use healthmate_engine::AnalysisResult;
use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;

pub const MAX_AGE: u32 = 120;

/// A symptom analysis request as received from the user.
///
/// Age, sex and duration are accepted for the record but do not influence
/// scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomRequest {
    pub symptoms: Vec<String>,
    pub age: Option<u32>,
    pub sex: Option<String>,
    pub duration: Option<String>,
}

impl SymptomRequest {
    /// Validate the request and return the cleaned symptom list.
    pub fn validated_symptoms(&self) -> Result<Vec<String>> {
        if self.symptoms.is_empty() {
            return Err(HealthmateError::InvalidInput("Symptoms list is required.".into()));
        }
        if let Some(age) = self.age {
            if age > MAX_AGE {
                return Err(HealthmateError::InvalidInput(format!(
                    "Age must be between 0 and {MAX_AGE}, got {age}."
                )));
            }
        }
        Ok(self.symptoms.iter().map(|s| s.trim().to_lowercase()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CauseReport {
    pub id: String,
    pub name: String,
    pub confidence: f64,
    pub tests: Vec<String>,
    pub triage_level: TriageLevel,
}

/// The response returned to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub causes: Vec<CauseReport>,
    pub warnings: Vec<String>,
    pub disclaimer: String,
}

impl AnalysisReport {
    pub fn from_result(result: AnalysisResult, output: &OutputConfig) -> Self {
        let causes = result
            .causes
            .into_iter()
            .map(|c| CauseReport {
                id: c.id,
                name: c.name,
                confidence: round_to(c.confidence, output.confidence_decimals),
                tests: c.tests,
                triage_level: c.triage_level,
            })
            .collect();
        Self {
            causes,
            warnings: result.warnings,
            disclaimer: output.disclaimer.clone(),
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
