//! Error types for image conversion.

use std::path::PathBuf;

/// Errors that can occur while converting an image to ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Contrast {contrast} is out of range ({min} to {max})")]
    InvalidContrast { contrast: i32, min: i32, max: i32 },

    #[error("Art box must be between 1x1 and {max}x{max}, got {width}x{height}")]
    InvalidArtBox { width: u32, height: u32, max: u32 },

    #[error("Glyph aspect ratio must be a positive number, got {char_aspect}")]
    InvalidCharAspect { char_aspect: f64 },

    #[error("Width must be at least 1 character, got {width}")]
    InvalidWidth { width: u32 },

    #[error("Failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
