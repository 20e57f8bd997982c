use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be at least 1")]
    ZeroMatches(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnswerConfig {
    /// Documents kept by the document ranker.
    pub file_matches: usize,
    /// Sentences returned as the answer.
    pub sentence_matches: usize,
}

impl AnswerConfig {
    pub fn v0() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }

    /// Read a JSON config. Missing fields take their `v0` values.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read(path)?;
        let config: AnswerConfig = serde_json::from_slice(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_matches == 0 {
            return Err(ConfigError::ZeroMatches("file_matches"));
        }
        if self.sentence_matches == 0 {
            return Err(ConfigError::ZeroMatches("sentence_matches"));
        }
        Ok(())
    }
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self::v0()
    }
}
