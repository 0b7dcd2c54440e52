//! Pipeline configuration.
//!
//! Values come from, in increasing precedence: [`PipelineConfig::default`],
//! a JSON file, and explicit overrides (usually command-line flags, which in
//! turn fall back to environment variables).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IdiomGraphError, Result};

/// Default cap on the number of idioms after deduplication.
pub const DEFAULT_LIMIT_NUM_IDIOMS: i64 = 2000;

/// Default number of character nodes to keep (disabled).
pub const DEFAULT_LIMIT_CHAR_NODES: i64 = -1;

/// Default number of idioms shown in one merged node.
pub const DEFAULT_LIMIT_NUM_IDIOMS_EACH_NODE: i64 = 10;

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Max number of idioms to consider; `<= 0` disables sampling.
    pub limit_num_idioms: i64,
    /// Only keep the busiest character nodes on each side; `<= 0` keeps all.
    pub limit_char_nodes: i64,
    /// Max number of idioms displayed in a merged node; `<= 0` shows all.
    pub limit_num_idioms_each_node: i64,
    /// Seed for sampling. A fresh seed is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            limit_num_idioms: DEFAULT_LIMIT_NUM_IDIOMS,
            limit_char_nodes: DEFAULT_LIMIT_CHAR_NODES,
            limit_num_idioms_each_node: DEFAULT_LIMIT_NUM_IDIOMS_EACH_NODE,
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| IdiomGraphError::invalid_config(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|e| IdiomGraphError::missing_input(path, e))?;
        Self::from_json_str(&text).map_err(|e| match e {
            IdiomGraphError::InvalidConfiguration(msg) => {
                IdiomGraphError::invalid_config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Apply explicit overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(value) = overrides.limit_num_idioms {
            self.limit_num_idioms = value;
        }
        if let Some(value) = overrides.limit_char_nodes {
            self.limit_char_nodes = value;
        }
        if let Some(value) = overrides.limit_num_idioms_each_node {
            self.limit_num_idioms_each_node = value;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// Number of busiest character nodes to keep, if the restriction is on.
    pub fn top_char_nodes(&self) -> Option<usize> {
        usize::try_from(self.limit_char_nodes).ok().filter(|&n| n > 0)
    }
}

/// Optional values that replace configured ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub limit_num_idioms: Option<i64>,
    pub limit_char_nodes: Option<i64>,
    pub limit_num_idioms_each_node: Option<i64>,
    pub seed: Option<u64>,
}

/// Parse a numeric configuration value given as text.
pub fn parse_limit(name: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|e| {
        IdiomGraphError::invalid_config(format!("{name}: '{raw}' is not an integer ({e})"))
    })
}
