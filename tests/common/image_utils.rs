//! Image inspection utilities for testing.
//!
//! Helpers for decoding rendered output and checking which colors ended up
//! where.

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, RgbaImage};
use std::collections::HashSet;

/// Load an image from a byte array
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes)
}

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Check if an image has the expected dimensions
///
/// # Returns
///
/// * `Ok(())` if the image has the expected dimensions
/// * `Err(String)` with an error message if the dimensions differ
pub fn assert_image_dimensions(
    image: &DynamicImage,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), String> {
    let (actual_width, actual_height) = image.dimensions();

    if actual_width != expected_width || actual_height != expected_height {
        return Err(format!(
            "Image dimensions differ: actual = {}x{}, expected = {}x{}",
            actual_width, actual_height, expected_width, expected_height
        ));
    }

    Ok(())
}

/// Number of pixels with exactly this color
pub fn count_pixels(image: &RgbaImage, color: [u8; 4]) -> usize {
    image.pixels().filter(|p| p.0 == color).count()
}

/// Set of distinct colors in the image
pub fn distinct_colors(image: &RgbaImage) -> HashSet<[u8; 4]> {
    image.pixels().map(|p| p.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_detect_image_format() {
        let img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(2, 2);
        let mut png_bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .unwrap();

        assert_eq!(detect_image_format(&png_bytes), Some(ImageFormat::Png));
    }

    #[test]
    fn test_count_pixels() {
        let mut img = ImageBuffer::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([9, 9, 9, 255]));

        assert_eq!(count_pixels(&img, [0, 0, 0, 255]), 8);
        assert_eq!(distinct_colors(&img).len(), 2);
    }
}
