//! Run configuration.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::addressing::ReportKind;
use crate::constants::DEFAULT_BASE_DIR;
use crate::error::{ReportError, Result};
use crate::sorting::SortingCode;

/// Settings for one invocation of the list generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default)]
    pub sorting: SortingCode,
    /// Runs to execute, in order
    #[serde(default = "ReportConfig::default_runs")]
    pub runs: Vec<ReportKind>,
}

impl ReportConfig {
    fn default_base_dir() -> PathBuf {
        PathBuf::from(DEFAULT_BASE_DIR)
    }

    fn default_runs() -> Vec<ReportKind> {
        ReportKind::ALL.to_vec()
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error when no run is selected or a run is listed twice.
    pub fn validate(&self) -> Result<()> {
        if self.runs.is_empty() {
            return Err(ReportError::InvalidConfig(
                "at least one run must be selected".to_string(),
            ));
        }
        for (idx, kind) in self.runs.iter().enumerate() {
            if self.runs[..idx].contains(kind) {
                return Err(ReportError::InvalidConfig(format!(
                    "run `{kind}` is listed more than once"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_dir: Self::default_base_dir(),
            sorting: SortingCode::Default,
            runs: Self::default_runs(),
        }
    }
}
