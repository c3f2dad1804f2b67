//! Command handler: load config, convert, report.

use super::args::Args;
use crate::config::{Config, ConfigError};
use crate::converter::Converter;
use crate::error::ConvertError;

/// Errors surfaced to the process exit path.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Run one conversion described by `args`.
///
/// Nothing is written unless the whole grid renders.
pub fn run(args: &Args) -> Result<(), RunError> {
    // If --config is specified, require the file to exist.
    // Otherwise fall back to defaults when the default config is absent.
    let config = match args.config {
        Some(ref path) => Config::load_required(path)?,
        None => Config::load(None)?,
    };

    let width = args.width.unwrap_or_else(|| config.default_width());
    let converter = Converter::new(args.apply_overrides(config.converter_config()))?;

    log::info!("Converting {} at width {}", args.image.display(), width);
    let art = converter.run(&args.image, width)?;

    if args.print {
        print!("{}", art);
    }
    println!("ASCII art saved to {}", converter.config().output.display());
    Ok(())
}
