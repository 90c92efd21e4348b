//! The external face-swap routine. `FaceSwapper` is the seam the chain
//! driver calls once per source face; `CommandSwapper` runs an external
//! program (by default roop's `core.run` through `python3 -c`) as a child
//! process.
pub mod command;
pub use command::CommandSwapper;

use crate::error::Result;
use crate::types::SwapRequest;

pub trait FaceSwapper {
    /// Swaps `request.source` onto face `request.reference_face_position` of
    /// `request.target`, writing the result to `request.output`. Blocks until
    /// the output is written or the swap fails.
    fn swap(&self, request: &SwapRequest) -> Result<()>;
}

impl<T: FaceSwapper + ?Sized> FaceSwapper for &T {
    fn swap(&self, request: &SwapRequest) -> Result<()> {
        (**self).swap(request)
    }
}
