//! Calc Echo
//!
//! Facade over the workspace crates: the core library and the CLI layer.

pub use calc_cli as cli;

// Re-export commonly used types
pub use calc_cli::{Cli, OutputFormat, RunConfig, RunReport, Runner};
pub use calc_core::{calculate, echo_input, EchoConfig, EchoError, EchoPolicy, Echoed, Operator};
