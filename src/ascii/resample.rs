//! Resampling the greyscale source down to the working character grid.

use image::imageops::{self, FilterType};
use image::GrayImage;

use super::Dimensions;

/// Filter used for every resize. Windowed sinc keeps edges crisp at the
/// small target sizes ASCII art works with.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Resize `gray` to the working dimensions, one pixel per character cell.
///
/// Returns an empty image when `dims` has no cells; the art box then
/// renders blank.
pub fn resample(gray: &GrayImage, dims: Dimensions) -> GrayImage {
    if dims.is_empty() {
        return GrayImage::new(0, 0);
    }
    if gray.dimensions() == (dims.width, dims.height) {
        return gray.clone();
    }
    imageops::resize(gray, dims.width, dims.height, RESAMPLE_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_resample_to_working_size() {
        let gray = GrayImage::from_pixel(120, 80, Luma([200]));
        let out = resample(&gray, Dimensions { width: 60, height: 20 });
        assert_eq!(out.dimensions(), (60, 20));
    }

    #[test]
    fn test_resample_uniform_stays_uniform() {
        let gray = GrayImage::from_pixel(64, 64, Luma([0]));
        let out = resample(&gray, Dimensions { width: 10, height: 5 });
        assert!(out.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn test_resample_same_size_is_identity() {
        let mut gray = GrayImage::new(3, 2);
        gray.put_pixel(1, 1, Luma([77]));
        let out = resample(&gray, Dimensions { width: 3, height: 2 });
        assert_eq!(out, gray);
    }

    #[test]
    fn test_resample_empty_dimensions() {
        let gray = GrayImage::from_pixel(10, 10, Luma([128]));
        let out = resample(&gray, Dimensions { width: 60, height: 0 });
        assert_eq!(out.dimensions(), (0, 0));
    }
}
