//! Calc Echo Core Library
//!
//! This crate provides the arithmetic helpers, operator dispatch and the
//! bounded text echo used by the `calc-echo` command.

#![forbid(unsafe_code)]

pub mod arithmetic;
pub mod calculator;
pub mod echo;
pub mod error;
pub mod operator;

// Re-export main types
pub use arithmetic::{add, multiply};
pub use calculator::{calculate, Calculation, UNSUPPORTED_OPERATION};
pub use echo::{echo_input, EchoConfig, EchoPolicy, Echoed, DEFAULT_DISPLAY_WIDTH};
pub use error::EchoError;
pub use operator::Operator;
