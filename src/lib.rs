//! artbox library crate.
//!
//! Converts raster images into fixed-size ASCII art. The binary is a thin
//! wrapper over [`cli::run`]; the pieces are public for integration testing.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;

pub use converter::{Converter, ConverterConfig};
pub use error::ConvertError;
