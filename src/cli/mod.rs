//! Command-line interface definitions and helpers.

mod args;
mod commands;

pub use args::Args;
pub use commands::{run, RunError};
