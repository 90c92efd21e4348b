#![doc = r#"
multiswap — multi-face replacement by chaining an external face-swap routine.

A face-swap tool usually replaces one face per run. multiswap applies a list of
source faces to a single target image by running the swap once per source face:
swap `i` puts source face `i` onto detected face `i` of the target, and its output
becomes the target of swap `i + 1`. Intermediates live in a temporary directory
that is removed when the run ends; the last intermediate is copied to the output.

Face detection, embedding and blending are not part of this crate. They are done by
the external routine, reached through the [`FaceSwapper`] trait. [`CommandSwapper`]
runs an external program (by default `python3 -c "from roop.core import run; run()"`,
roop's entry point, from a roop checkout or environment) with:

```text
<program> <args...> --source S --target T --output O --reference-face-position I
```

Quick start: swap with the external program
-------------------------------------------
```rust,no_run
use std::path::PathBuf;
use multiswap::{plan_chain, swap_faces, ChainParams};

fn main() -> multiswap::Result<()> {
    let plan = plan_chain(
        vec![PathBuf::from("face1.jpg"), PathBuf::from("face2.jpg")],
        PathBuf::from("group_photo.jpg"),
        None, // -> group_photo_swapped.jpg
    )?;

    let mut params = ChainParams::default();
    params.swapper.working_dir = Some(PathBuf::from("/opt/roop"));

    let report = swap_faces(&plan, &params)?;
    println!("{} swaps -> {}", report.steps.len(), report.output.display());
    Ok(())
}
```

Bring your own swapper
----------------------
```rust,no_run
use std::path::PathBuf;
use multiswap::{plan_chain, swap_faces_with, ChainParams, FaceSwapper, SwapRequest};

struct CopySwapper;

impl FaceSwapper for CopySwapper {
    fn swap(&self, request: &SwapRequest) -> multiswap::Result<()> {
        std::fs::copy(&request.target, &request.output)?;
        Ok(())
    }
}

fn main() -> multiswap::Result<()> {
    let plan = plan_chain(
        vec![PathBuf::from("a.jpg")],
        PathBuf::from("group.jpg"),
        Some(PathBuf::from("out.jpg")),
    )?;
    swap_faces_with(&plan, &CopySwapper, &ChainParams::default())?;
    Ok(())
}
```

Error handling
--------------
All public functions return `multiswap::Result<T>`; match on `multiswap::Error` to
tell a swapper failure from a missing input.

```rust,no_run
use std::path::PathBuf;
use multiswap::{plan_chain, swap_faces, ChainParams, Error};

fn main() {
    let plan = match plan_chain(vec![PathBuf::from("a.jpg")], PathBuf::from("g.jpg"), None) {
        Ok(plan) => plan,
        Err(e) => return eprintln!("{e}"),
    };
    match swap_faces(&plan, &ChainParams::default()) {
        Ok(_) => {}
        Err(Error::SwapFailed { index, status }) => eprintln!("swap #{index} failed: {status}"),
        Err(Error::InputNotFound { role, path }) => eprintln!("{role} missing: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`swap`] — the `FaceSwapper` seam and the subprocess implementation.
- [`types`] — `SwapRequest`, `ChainPlan`, `ChainReport`.
- [`core`] — the chain driver, finalizer, path helpers and config.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod swap;
pub mod types;

// Curated public API surface
pub use crate::core::params::{ChainParams, SwapperConfig};
pub use crate::core::paths::default_output_path;
pub use error::{Error, Result};
pub use swap::{CommandSwapper, FaceSwapper};
pub use types::{ChainPlan, ChainReport, ChainStep, SwapRequest};

pub use api::{plan_chain, swap_faces, swap_faces_with};
