//! Image loading and greyscale conversion.

use std::path::Path;

use image::{DynamicImage, GrayImage};

use crate::error::ConvertError;

/// Convert a decoded image to 8-bit luminance.
///
/// Colour images are reduced with the `image` crate's Rec. 709 weights;
/// alpha is discarded.
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Decode the image at `path` and convert it to greyscale.
///
/// # Errors
/// [`ConvertError::Decode`] if the file is missing, unreadable, or not a
/// supported format.
pub fn load_grayscale(path: &Path) -> Result<GrayImage, ConvertError> {
    let image = image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(to_grayscale(&image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_grayscale_white_and_black() {
        let mut rgb = RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, Rgb([0, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([255, 255, 255]));
        let gray = to_grayscale(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(gray.dimensions(), (2, 1));
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(gray.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn test_grayscale_luminance_order() {
        // Green carries the most luminance, blue the least.
        let mut rgb = RgbImage::new(3, 1);
        rgb.put_pixel(0, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([0, 255, 0]));
        rgb.put_pixel(2, 0, Rgb([0, 0, 255]));
        let gray = to_grayscale(&DynamicImage::ImageRgb8(rgb));
        let (r, g, b) = (
            gray.get_pixel(0, 0).0[0],
            gray.get_pixel(1, 0).0[0],
            gray.get_pixel(2, 0).0[0],
        );
        assert!(g > r);
        assert!(r > b);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_grayscale(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
        assert!(err.to_string().contains("does/not/exist.png"));
    }

    #[test]
    fn test_load_round_trips_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grey.png");
        GrayImage::from_pixel(4, 3, image::Luma([90])).save(&path).unwrap();

        let gray = load_grayscale(&path).unwrap();
        assert_eq!(gray.dimensions(), (4, 3));
        assert!(gray.pixels().all(|p| p.0[0] == 90));
    }
}
