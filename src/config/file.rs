//! Configuration file data structures

use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".mempro-analyzer.toml";

/// mempro-analyzer configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// MemPro export used when neither `--json-path` nor `MEMPRO_JSON_PATH` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_path: Option<String>,

    /// Number of entries in the top-leakers report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_leakers: Option<i64>,
}

impl ConfigFile {
    /// Configuration written by `mempro-analyzer init`
    pub fn starter() -> Self {
        Self {
            json_path: None,
            top_leakers: Some(crate::analyzer::DEFAULT_TOP_LEAKERS),
        }
    }

    /// Top-leakers count, falling back to the built-in default
    pub fn top_leakers_or_default(&self) -> i64 {
        self.top_leakers
            .unwrap_or(crate::analyzer::DEFAULT_TOP_LEAKERS)
    }
}
