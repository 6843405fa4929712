//! CLI Layer
//!
//! This crate provides the command-line interface and the run orchestration
//! for `calc-echo`.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod output_format;
pub mod runner;

// Re-exports
pub use cli::Cli;
pub use config::RunConfig;
pub use output_format::OutputFormat;
pub use runner::{EchoOutcome, RunReport, Runner};
