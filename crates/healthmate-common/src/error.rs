use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthmateError {
    /// A data resource could not be read from disk.
    #[error("Failed to load {resource} from {}: {source}", .path.display())]
    ResourceLoad {
        resource: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data resource is not valid JSON/YAML for its schema.
    #[error("Malformed {resource}: {message}")]
    Parse {
        resource: &'static str,
        message: String,
    },

    /// A data resource parsed but violates a schema constraint.
    #[error("Invalid {resource}: {message}")]
    Schema {
        resource: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HealthmateError {
    pub fn parse(resource: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Parse { resource, message: err.to_string() }
    }

    pub fn schema(resource: &'static str, message: impl Into<String>) -> Self {
        Self::Schema { resource, message: message.into() }
    }

    /// True for failures that must stop the process before it serves requests.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Self::ResourceLoad { .. } | Self::Parse { .. } | Self::Schema { .. } | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HealthmateError>;
