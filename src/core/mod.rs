//! Core building blocks: path derivation, chain parameters, the iteration
//! driver and the finalizer. These are internal primitives consumed by the
//! high-level `api` module.
pub mod chain;
pub mod finalize;
pub mod params;
pub mod paths;
