//! ASCII renderer module for converting images to fixed-size ASCII art.
//!
//! The pipeline runs in this order:
//!
//! 1. **Greyscale conversion** - decode and reduce to luminance
//! 2. **Dimensions** - working grid size from the image aspect ratio
//! 3. **Resampling** - Lanczos resize to one pixel per character
//! 4. **Character mapping** - bucket brightness into a [`DensityRamp`]
//! 5. **Art box** - pad or crop to the fixed output rectangle

mod art_box;
mod dimensions;
mod grayscale;
mod mapping;
mod ramp;
mod resample;

pub use art_box::{ArtBox, AsciiArt, DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH, MAX_BOX_SIDE};
pub use dimensions::{
    calculate_dimensions, calculate_dimensions_with_aspect, Dimensions,
    DEFAULT_CHAR_ASPECT_RATIO,
};
pub use grayscale::{load_grayscale, to_grayscale};
pub use mapping::{bucket, glyph_index, map_pixel, map_to_lines};
pub use ramp::{DensityRamp, DEFAULT_CONTRAST, MASTER_RAMP, MAX_CONTRAST, MIN_CONTRAST};
pub use resample::{resample, RESAMPLE_FILTER};
