//! Command Line Interface (CLI) layer for multiswap.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): validate the faces/target
//! arguments, merge options with an optional config file, and run the
//! chain through `multiswap::api`.
//!
//! If you are embedding multiswap into another application, prefer the
//! `multiswap::api` module over the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
