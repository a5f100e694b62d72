//! Knowledge base and red-flag loading.
//!
//! Both resources are read once at startup. Any failure here is fatal: the
//! caller must not start serving with a partial or missing knowledge base.

use std::path::Path;

use healthmate_common::{HealthmateError, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::knowledge::Knowledge;
use crate::model::{KnowledgeBase, RedFlagSet};
use crate::schema::{KnowledgeBaseDoc, RedFlagsDoc};

const KB: &str = "knowledge base";
const RED_FLAGS: &str = "red-flag rules";

/// Serialization format of a data resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// `.yaml` / `.yml` select YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase) {
            Some(ext) if ext == "yaml" || ext == "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }
}

fn parse_doc<T: DeserializeOwned>(resource: &'static str, text: &str, format: DataFormat) -> Result<T> {
    match format {
        DataFormat::Json => serde_json::from_str(text).map_err(|e| HealthmateError::parse(resource, e)),
        DataFormat::Yaml => serde_yaml::from_str(text).map_err(|e| HealthmateError::parse(resource, e)),
    }
}

/// Parse and validate a knowledge base document.
pub fn parse_knowledge_base(text: &str, format: DataFormat) -> Result<KnowledgeBase> {
    let doc: KnowledgeBaseDoc = parse_doc(KB, text, format)?;
    let kb = KnowledgeBase::try_from(doc)?;
    if kb.groups().is_empty() {
        warn!("Knowledge base has no symptom groups; every request will report no match");
    }
    Ok(kb)
}

/// Parse and validate a red-flag rule document.
pub fn parse_red_flags(text: &str, format: DataFormat) -> Result<RedFlagSet> {
    let doc: RedFlagsDoc = parse_doc(RED_FLAGS, text, format)?;
    RedFlagSet::try_from(doc)
}

fn read(resource: &'static str, path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| HealthmateError::ResourceLoad {
        resource,
        path: path.to_path_buf(),
        source,
    })
}

async fn read_async(resource: &'static str, path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| HealthmateError::ResourceLoad {
            resource,
            path: path.to_path_buf(),
            source,
        })
}

/// Load the knowledge base from disk (blocking).
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase> {
    debug!(path = %path.display(), "Reading knowledge base");
    parse_knowledge_base(&read(KB, path)?, DataFormat::from_path(path))
}

/// Load the red-flag rules from disk (blocking).
pub fn load_red_flags(path: &Path) -> Result<RedFlagSet> {
    debug!(path = %path.display(), "Reading red-flag rules");
    parse_red_flags(&read(RED_FLAGS, path)?, DataFormat::from_path(path))
}

/// Load both resources concurrently and bundle them for sharing.
pub async fn load_knowledge(kb_path: &Path, red_flags_path: &Path) -> Result<Knowledge> {
    info!("Loading knowledge base and red-flag rules...");

    let (kb_text, flags_text) = tokio::join!(
        read_async(KB, kb_path),
        read_async(RED_FLAGS, red_flags_path),
    );

    let kb = parse_knowledge_base(&kb_text?, DataFormat::from_path(kb_path))?;
    let red_flags = parse_red_flags(&flags_text?, DataFormat::from_path(red_flags_path))?;

    info!(
        groups = kb.groups().len(),
        causes = kb.cause_count(),
        red_flag_rules = red_flags.rules().len(),
        "Knowledge loaded"
    );

    Ok(Knowledge::new(kb, red_flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DataFormat::from_path(&PathBuf::from("kb.json")), DataFormat::Json);
        assert_eq!(DataFormat::from_path(&PathBuf::from("kb.YAML")), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(&PathBuf::from("kb.yml")), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(&PathBuf::from("kb")), DataFormat::Json);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_knowledge_base("{ not json", DataFormat::Json).unwrap_err();
        assert!(matches!(err, HealthmateError::Parse { resource: "knowledge base", .. }));
        assert!(err.is_startup_fatal());
    }

    #[test]
    fn test_yaml_red_flags() {
        let yaml = r#"
red_flags:
  - symptom: headache
    conditions:
      - criteria: [neck stiffness, fever]
        threshold: 2
        message: Possible meningitis. Seek emergency care.
"#;
        let flags = parse_red_flags(yaml, DataFormat::Yaml).unwrap();
        assert_eq!(flags.rules().len(), 1);
        assert_eq!(flags.rules()[0].conditions[0].criteria[0].as_str(), "neck_stiffness");
    }

    #[test]
    fn test_missing_file_is_resource_load_error() {
        let err = load_red_flags(&PathBuf::from("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, HealthmateError::ResourceLoad { .. }));
    }
}
