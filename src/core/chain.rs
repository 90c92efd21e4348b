use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use tracing::info;

use crate::core::finalize::copy_with_metadata;
use crate::error::{Error, Result};
use crate::swap::FaceSwapper;
use crate::types::{ChainPlan, ChainReport, ChainStep};

/// Applies every source face of `plan` in order, feeding each swap's output
/// to the next one as its target, then copies the last result to
/// `plan.output`.
///
/// Intermediates live in a temporary directory (under `temp_root` when
/// given) that is removed when this returns, on success or failure. A failed
/// swap stops the chain and leaves `plan.output` untouched.
pub fn execute_chain(
    plan: &ChainPlan,
    swapper: &dyn FaceSwapper,
    temp_root: Option<&Path>,
) -> Result<ChainReport> {
    let started_at = Utc::now();

    let mut builder = tempfile::Builder::new();
    builder.prefix("multiswap-");
    let temp_dir = match temp_root {
        Some(root) => {
            std::fs::create_dir_all(root)?;
            builder.tempdir_in(root)?
        }
        None => builder.tempdir()?,
    };

    let requests = plan.requests(temp_dir.path());
    let total = requests.len();
    let mut steps = Vec::with_capacity(total);

    for request in &requests {
        info!(
            "Swapping face {}/{}: {:?} -> {:?}",
            request.reference_face_position + 1,
            total,
            request.source,
            request.target
        );
        let start = Instant::now();
        swapper.swap(request)?;

        if !request.output.is_file() {
            return Err(Error::MissingSwapOutput {
                index: request.reference_face_position,
                path: request.output.clone(),
            });
        }

        steps.push(ChainStep {
            index: request.reference_face_position,
            source: request.source.clone(),
            output: request.output.clone(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        });
    }

    // `plan.sources` is never empty, so the last request always exists
    if let Some(last) = requests.last() {
        copy_with_metadata(&last.output, &plan.output)?;
    }
    temp_dir.close()?;

    info!("Saved result to {:?}", plan.output);
    Ok(ChainReport {
        started_at,
        target: plan.target.clone(),
        output: plan.output.clone(),
        steps,
    })
}
