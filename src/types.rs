//! Shared types used across multiswap.
//! Includes the per-iteration `SwapRequest`, the validated `ChainPlan`,
//! and the `ChainReport`/`ChainStep` records produced by a run.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::paths::{default_output_path, temp_output_path};
use crate::error::{Error, Result};

/// One invocation of the external swap routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub source: PathBuf,
    pub target: PathBuf,
    pub output: PathBuf,
    /// Which detected face in `target` receives `source`
    pub reference_face_position: usize,
}

impl SwapRequest {
    /// Flags understood by the swap entry point, in invocation order.
    pub fn to_args(&self) -> Vec<OsString> {
        vec![
            "--source".into(),
            self.source.clone().into_os_string(),
            "--target".into(),
            self.target.clone().into_os_string(),
            "--output".into(),
            self.output.clone().into_os_string(),
            "--reference-face-position".into(),
            self.reference_face_position.to_string().into(),
        ]
    }

    /// Same request with every path resolved against the current directory.
    pub fn to_absolute(&self) -> std::io::Result<Self> {
        Ok(Self {
            source: std::path::absolute(&self.source)?,
            target: std::path::absolute(&self.target)?,
            output: std::path::absolute(&self.output)?,
            reference_face_position: self.reference_face_position,
        })
    }
}

impl std::fmt::Display for SwapRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{}: {} onto {} -> {}",
            self.reference_face_position,
            self.source.display(),
            self.target.display(),
            self.output.display()
        )
    }
}

/// Source faces, target and final output of one multi-face replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainPlan {
    /// Applied in order; face `i` replaces detected face `i` of the target
    pub sources: Vec<PathBuf>,
    pub target: PathBuf,
    pub output: PathBuf,
}

impl ChainPlan {
    /// Builds a plan, deriving `<stem>_swapped<ext>` next to the target when
    /// no output is given.
    pub fn new(sources: Vec<PathBuf>, target: PathBuf, output: Option<PathBuf>) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::NoSourceFaces);
        }
        let output = output.unwrap_or_else(|| default_output_path(&target));
        Ok(Self {
            sources,
            target,
            output,
        })
    }

    /// Requests for every iteration, each one targeting the previous output.
    pub fn requests(&self, temp_dir: &Path) -> Vec<SwapRequest> {
        let mut current_target = self.target.clone();
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let output = temp_output_path(temp_dir, i, &self.target);
                SwapRequest {
                    source: source.clone(),
                    target: std::mem::replace(&mut current_target, output.clone()),
                    output,
                    reference_face_position: i,
                }
            })
            .collect()
    }

    /// Fails on the first target or source face missing from disk.
    pub fn check_inputs_exist(&self) -> Result<()> {
        if !self.target.is_file() {
            return Err(Error::InputNotFound {
                role: "Target image",
                path: self.target.clone(),
            });
        }
        for source in &self.sources {
            if !source.is_file() {
                return Err(Error::InputNotFound {
                    role: "Source face",
                    path: source.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainStep {
    pub index: usize,
    pub source: PathBuf,
    /// Intermediate file; removed once the run completes
    pub output: PathBuf,
    pub elapsed_ms: u64,
}

/// Summary of a completed chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainReport {
    pub started_at: DateTime<Utc>,
    pub target: PathBuf,
    pub output: PathBuf,
    pub steps: Vec<ChainStep>,
}
