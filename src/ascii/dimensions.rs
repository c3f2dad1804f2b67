//! Dimension calculation for aspect-ratio-correct ASCII rendering.

use crate::error::ConvertError;

/// Default glyph aspect ratio.
/// Monospace glyphs are roughly twice as tall as they are wide, so the
/// working grid needs about half as many rows as a square-pixel resize.
pub const DEFAULT_CHAR_ASPECT_RATIO: f64 = 2.0;

/// Working grid size in characters, before normalization to the art box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// True when the grid has no cells to sample.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Calculate working dimensions with the default glyph aspect ratio.
///
/// See [`calculate_dimensions_with_aspect`].
pub fn calculate_dimensions(
    img_width: u32,
    img_height: u32,
    requested_width: u32,
    max_char_height: u32,
) -> Result<Dimensions, ConvertError> {
    calculate_dimensions_with_aspect(
        img_width,
        img_height,
        requested_width,
        max_char_height,
        DEFAULT_CHAR_ASPECT_RATIO,
    )
}

/// Calculate working dimensions with a custom glyph aspect ratio.
///
/// The height follows the image ratio `r = img_height / img_width`:
/// `height = floor(requested_width * r / char_aspect)`. When that exceeds
/// `max_char_height` the height is pinned to the limit and the width is
/// recomputed as `floor(max_char_height / r * char_aspect)` so the ratio
/// holds.
///
/// The width is never capped here, only the height. Columns beyond the
/// art box are cut later by [`crate::ascii::ArtBox::fit`].
///
/// # Errors
/// Returns [`ConvertError::EmptyImage`] when either image dimension is zero.
pub fn calculate_dimensions_with_aspect(
    img_width: u32,
    img_height: u32,
    requested_width: u32,
    max_char_height: u32,
    char_aspect: f64,
) -> Result<Dimensions, ConvertError> {
    if img_width == 0 || img_height == 0 {
        return Err(ConvertError::EmptyImage {
            width: img_width,
            height: img_height,
        });
    }

    let ratio = img_height as f64 / img_width as f64;
    let height = (requested_width as f64 * ratio / char_aspect).floor() as u32;

    if height > max_char_height {
        let width = (max_char_height as f64 / ratio * char_aspect).floor() as u32;
        Ok(Dimensions {
            width,
            height: max_char_height,
        })
    } else {
        Ok(Dimensions {
            width: requested_width,
            height,
        })
    }
}
