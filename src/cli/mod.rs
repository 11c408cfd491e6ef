//! Command Line Interface (CLI) layer for favicrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, merging a JSON
//! config with flag overrides, and dispatch to `favicrop::api`.
//!
//! If you are embedding favicrop into another application, prefer using
//! the high-level `favicrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
