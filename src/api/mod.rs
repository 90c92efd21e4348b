//! High-level library API: plan a multi-face replacement and run it either
//! through the configured external program or through any `FaceSwapper`.
//! Prefer these entrypoints over the `core` modules when embedding multiswap.
use std::path::PathBuf;

use tracing::info;

use crate::core::chain::execute_chain;
use crate::core::params::ChainParams;
use crate::error::Result;
use crate::swap::{CommandSwapper, FaceSwapper};
use crate::types::{ChainPlan, ChainReport};

/// Validate sources/target and resolve the output path (defaults to
/// `<target_stem>_swapped<ext>` next to the target).
pub fn plan_chain(
    sources: Vec<PathBuf>,
    target: PathBuf,
    output: Option<PathBuf>,
) -> Result<ChainPlan> {
    ChainPlan::new(sources, target, output)
}

/// Run `plan` with the external program described by `params.swapper`
pub fn swap_faces(plan: &ChainPlan, params: &ChainParams) -> Result<ChainReport> {
    let swapper = CommandSwapper::new(params.swapper.clone());
    swap_faces_with(plan, &swapper, params)
}

/// Run `plan` with a caller-provided swapper
pub fn swap_faces_with(
    plan: &ChainPlan,
    swapper: &dyn FaceSwapper,
    params: &ChainParams,
) -> Result<ChainReport> {
    plan.check_inputs_exist()?;
    info!(
        "Replacing {} face(s) in {:?}",
        plan.sources.len(),
        plan.target
    );
    execute_chain(plan, swapper, params.temp_dir.as_deref())
}
