//! Image to art-box conversion.
//!
//! [`Converter`] runs the full pipeline for one image: load, greyscale,
//! size, resample, map, normalize, and optionally write the result.

use std::path::{Path, PathBuf};

use image::GrayImage;

use crate::ascii::{
    calculate_dimensions_with_aspect, load_grayscale, map_to_lines, resample, ArtBox, AsciiArt,
    DensityRamp, DEFAULT_CHAR_ASPECT_RATIO, DEFAULT_CONTRAST,
};
use crate::error::ConvertError;

/// Default destination for the rendered art.
pub const DEFAULT_OUTPUT_PATH: &str = "art/temp.txt";

/// Settings for a [`Converter`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Contrast level, -10 to 10. Selects how much of the ramp is used.
    pub contrast: i32,
    /// Output rectangle.
    pub art_box: ArtBox,
    /// Glyph height divided by glyph width.
    pub char_aspect: f64,
    /// Map bright pixels to sparse glyphs instead of dense ones.
    pub invert: bool,
    /// Where [`Converter::write`] puts the art.
    pub output: PathBuf,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
            art_box: ArtBox::default(),
            char_aspect: DEFAULT_CHAR_ASPECT_RATIO,
            invert: false,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Converts images into ASCII art sized to an [`ArtBox`].
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
    ramp: DensityRamp,
}

impl Converter {
    /// Build a converter, validating contrast, art box and glyph aspect up front.
    pub fn new(config: ConverterConfig) -> Result<Self, ConvertError> {
        let ramp = DensityRamp::with_contrast(config.contrast)?;
        ArtBox::new(config.art_box.width, config.art_box.height)?;
        if !config.char_aspect.is_finite() || config.char_aspect <= 0.0 {
            return Err(ConvertError::InvalidCharAspect {
                char_aspect: config.char_aspect,
            });
        }
        log::debug!(
            "Converter ready: contrast {} ({} levels), art box {}x{}",
            config.contrast,
            ramp.len(),
            config.art_box.width,
            config.art_box.height
        );
        Ok(Self { config, ramp })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn ramp(&self) -> &DensityRamp {
        &self.ramp
    }

    /// Render an already-greyscale image at the requested width.
    ///
    /// # Errors
    /// [`ConvertError::InvalidWidth`] for a zero width.
    pub fn render(&self, gray: &GrayImage, width: u32) -> Result<AsciiArt, ConvertError> {
        if width == 0 {
            return Err(ConvertError::InvalidWidth { width });
        }
        let (img_width, img_height) = gray.dimensions();
        let dims = calculate_dimensions_with_aspect(
            img_width,
            img_height,
            width,
            self.config.art_box.height,
            self.config.char_aspect,
        )?;
        log::info!(
            "Resizing {}x{} image to {}x{} characters",
            img_width,
            img_height,
            dims.width,
            dims.height
        );
        if dims.is_empty() {
            log::warn!(
                "Working grid is {}x{}; output will be blank",
                dims.width,
                dims.height
            );
        }

        let resized = resample(gray, dims);
        let lines = map_to_lines(&resized, &self.ramp, self.config.invert);
        Ok(self.config.art_box.fit(lines))
    }

    /// Load the image at `path` and render it.
    pub fn convert(&self, path: &Path, width: u32) -> Result<AsciiArt, ConvertError> {
        let gray = load_grayscale(path)?;
        self.render(&gray, width)
    }

    /// Write `art` to the configured output path, replacing any existing file.
    ///
    /// The parent directory must already exist.
    pub fn write(&self, art: &AsciiArt) -> Result<(), ConvertError> {
        let path = &self.config.output;
        std::fs::write(path, art.to_text()).map_err(|source| ConvertError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("Wrote {} rows to {}", art.rows().len(), path.display());
        Ok(())
    }

    /// Convert the image at `path` and write it. Returns the rendered art.
    pub fn run(&self, path: &Path, width: u32) -> Result<AsciiArt, ConvertError> {
        let art = self.convert(path, width)?;
        self.write(&art)?;
        Ok(art)
    }
}
