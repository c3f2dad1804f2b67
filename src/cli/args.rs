//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use crate::ascii::{MAX_CONTRAST, MIN_CONTRAST};
use crate::converter::ConverterConfig;

/// Convert an image into a fixed-size block of ASCII art
#[derive(Parser, Debug)]
#[command(name = "artbox")]
#[command(version, about = "Convert an image into fixed-size ASCII art", long_about = None)]
pub struct Args {
    /// Image to convert (any format the image crate decodes)
    pub image: PathBuf,

    /// Target width in characters (default: art box width)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Output file (default: art/temp.txt)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Contrast level, -10 to 10
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(MIN_CONTRAST as i64..=MAX_CONTRAST as i64)
    )]
    pub contrast: Option<i32>,

    /// Invert brightness (for light backgrounds)
    #[arg(long)]
    pub invert: bool,

    /// Also print the art to stdout
    #[arg(long)]
    pub print: bool,
}

impl Args {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, mut config: ConverterConfig) -> ConverterConfig {
        if let Some(contrast) = self.contrast {
            config.contrast = contrast;
        }
        if let Some(ref output) = self.output {
            config.output = output.clone();
        }
        if self.invert {
            config.invert = true;
        }
        config
    }
}
