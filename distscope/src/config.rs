use crate::pareto::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_FLOW_RECORD_LIMIT: usize = 100;
pub const DEFAULT_THRESHOLD_DAYS: i64 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOpts {
    /// Records fed to the flow graph; larger sets render poorly.
    pub flow_record_limit: usize,
    pub pareto_top_n: usize,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self { flow_record_limit: DEFAULT_FLOW_RECORD_LIMIT, pareto_top_n: DEFAULT_TOP_N }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileOpts {
    /// Allowed shipped → received delay before a lot is flagged.
    pub threshold_days: i64,
}

impl Default for ReconcileOpts {
    fn default() -> Self { Self { threshold_days: DEFAULT_THRESHOLD_DAYS } }
}

/// Options file layout; every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineOpts,
    pub reconcile: ReconcileOpts,
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
