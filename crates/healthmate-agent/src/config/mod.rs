//! Configuration loading for Healthmate.
//! Reads healthmate.toml from the current directory, the path in the
//! HEALTHMATE_CONFIG env var, or an explicit `--config` path.

use healthmate_engine::ScoringParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "HEALTHMATE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "healthmate.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub scoring: ScoringParams,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_kb_path")]
    pub knowledge_base: PathBuf,
    #[serde(default = "default_red_flags_path")]
    pub red_flags: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            knowledge_base: default_kb_path(),
            red_flags: default_red_flags_path(),
        }
    }
}

fn default_kb_path()        -> PathBuf { PathBuf::from("data/knowledge_base.json") }
fn default_red_flags_path() -> PathBuf { PathBuf::from("data/red_flags.json") }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_confidence_decimals")]
    pub confidence_decimals: u32,
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            confidence_decimals: default_confidence_decimals(),
            disclaimer: default_disclaimer(),
        }
    }
}

fn default_confidence_decimals() -> u32 { 3 }
fn default_disclaimer() -> String {
    "This tool is for educational purposes only and is not a substitute for professional medical advice."
        .to_string()
}

mod tests;

impl Config {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        if !config.scoring.validate() {
            anyhow::bail!(
                "scoring.fallback_likelihood must lie in (0, 1], got {}",
                config.scoring.fallback_likelihood
            );
        }
        if config.output.confidence_decimals > 15 {
            anyhow::bail!("output.confidence_decimals must be at most 15");
        }
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path or HEALTHMATE_CONFIG must point at an existing file.
    /// Without either, healthmate.toml in the current directory is used if
    /// present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let path = match requested {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!(
                        "Config file not found: {}\n\
                         Copy healthmate.example.toml to healthmate.toml and edit it.",
                        path.display()
                    );
                }
                path
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    tracing::warn!("No {} found; using built-in defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }
}
