//! Density ramp definitions for ASCII rendering.

use crate::error::ConvertError;

/// Master density ramp, ordered from densest (`$`) to sparsest (space).
///
/// The trailing spaces widen the blank end of the ramp so that dark
/// regions of an image stay empty on a dark background.
pub const MASTER_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'.            ";

/// Lowest accepted contrast level.
pub const MIN_CONTRAST: i32 = -10;

/// Highest accepted contrast level.
pub const MAX_CONTRAST: i32 = 10;

/// Default contrast level (keeps all but the last master character).
pub const DEFAULT_CONTRAST: i32 = 10;

/// Number of master characters dropped at contrast 0.
const CONTRAST_OFFSET: i32 = 11;

/// A truncated prefix of [`MASTER_RAMP`] selected by a contrast level.
///
/// Index 0 is the densest glyph. Higher contrast keeps more of the
/// sparse tail, so more brightness levels render as distinct glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityRamp {
    glyphs: Vec<char>,
}

impl DensityRamp {
    /// Build the ramp for a contrast level in `MIN_CONTRAST..=MAX_CONTRAST`.
    ///
    /// Keeps the first `len(MASTER_RAMP) - 11 + contrast` characters.
    pub fn with_contrast(contrast: i32) -> Result<Self, ConvertError> {
        if !(MIN_CONTRAST..=MAX_CONTRAST).contains(&contrast) {
            return Err(ConvertError::InvalidContrast {
                contrast,
                min: MIN_CONTRAST,
                max: MAX_CONTRAST,
            });
        }

        // Mapping computes `len - 1`; the ramp must never be empty.
        let len = ramp_len(contrast).ok_or(ConvertError::InvalidContrast {
            contrast,
            min: MIN_CONTRAST,
            max: MAX_CONTRAST,
        })?;

        Ok(Self::truncated(len))
    }

    fn truncated(len: usize) -> Self {
        Self {
            glyphs: MASTER_RAMP.chars().take(len).collect(),
        }
    }

    /// Number of distinct brightness levels.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; construction rejects empty ramps.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at a ramp index (0 = densest).
    pub fn glyph(&self, index: usize) -> Option<char> {
        self.glyphs.get(index).copied()
    }

    /// The ramp's characters, densest first.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for DensityRamp {
    fn default() -> Self {
        // DEFAULT_CONTRAST is inside the accepted range.
        Self::truncated(ramp_len(DEFAULT_CONTRAST).unwrap_or(1))
    }
}

/// Ramp length for a contrast level, `None` when it would be empty.
fn ramp_len(contrast: i32) -> Option<usize> {
    let master_len = MASTER_RAMP.chars().count() as i32;
    let len = master_len - CONTRAST_OFFSET + contrast;
    (len >= 1).then_some(len as usize)
}
