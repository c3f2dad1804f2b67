//! Brightness to character mapping.

use image::GrayImage;

use super::DensityRamp;

/// Bucket a brightness value into one of `levels` equal-width bins.
///
/// Computes `floor(brightness / 256 * levels)` in integers, so the result is
/// always in `0..levels` for any `levels >= 1`.
#[inline]
pub fn bucket(brightness: u8, levels: usize) -> usize {
    brightness as usize * levels / 256
}

/// Ramp index for a brightness value.
///
/// Bright pixels land on the dense start of the ramp (`n - 1 - k`), which
/// reads correctly on a dark background. `invert` selects `k` directly for
/// light backgrounds.
#[inline]
pub fn glyph_index(brightness: u8, levels: usize, invert: bool) -> usize {
    let k = bucket(brightness, levels);
    if invert {
        k
    } else {
        levels - 1 - k
    }
}

/// Map a single brightness value to its glyph.
pub fn map_pixel(brightness: u8, ramp: &DensityRamp, invert: bool) -> char {
    let idx = glyph_index(brightness, ramp.len(), invert);
    ramp.glyph(idx).unwrap_or(' ')
}

/// Map every pixel of a greyscale grid to glyphs, one line per row.
///
/// # Example
/// ```ignore
/// let lines = map_to_lines(&resampled, &DensityRamp::default(), false);
/// assert_eq!(lines.len(), resampled.height() as usize);
/// ```
pub fn map_to_lines(gray: &GrayImage, ramp: &DensityRamp, invert: bool) -> Vec<String> {
    gray.rows()
        .map(|row| row.map(|px| map_pixel(px.0[0], ramp, invert)).collect())
        .collect()
}
