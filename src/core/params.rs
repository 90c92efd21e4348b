use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Python snippet calling roop's `core.run`, which reads its flags from argv
pub const ROOP_RUN_SNIPPET: &str = "from roop.core import run; run()";

/// How to launch the external face-swap entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapperConfig {
    pub program: PathBuf,
    /// Leading arguments, passed before the per-iteration flags
    pub args: Vec<String>,
    /// When set, paths handed to the swapper are made absolute
    pub working_dir: Option<PathBuf>,
}

impl Default for SwapperConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("python3"),
            args: vec!["-c".to_string(), ROOP_RUN_SNIPPET.to_string()],
            working_dir: None,
        }
    }
}

/// Chain parameters suitable for config files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainParams {
    pub swapper: SwapperConfig,
    /// Parent of the per-run temporary directory; system default if None
    pub temp_dir: Option<PathBuf>,
}

impl ChainParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
