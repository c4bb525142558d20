//! Core types for image decoding.

use thiserror::Error;

use crate::source::SourceFormat;

/// Error types for image decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The bytes are not a valid image of the declared format.
    #[error("Failed to decode {format:?} image: {reason}")]
    Malformed { format: SourceFormat, reason: String },

    /// The image decoded to zero pixels.
    #[error("Decoded image is empty")]
    EmptyImage,

    /// A resize target with a zero side.
    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The pixel buffer does not match the image dimensions.
    #[error("Pixel buffer does not match {width}x{height} RGB image")]
    BufferMismatch { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A decoded image with RGB pixel data.
///
/// This is the raster handed between the decoder, the resampler and the
/// encoder. It is owned by a single compression call and dropped once that
/// call's encode attempts are done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A uniformly filled image, mostly useful as a stand-in raster.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self::new(width, height, pixels)
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert into an image::RgbImage, reusing the pixel buffer.
    pub fn into_rgb_image(self) -> Result<image::RgbImage, DecodeError> {
        let (width, height) = (self.width, self.height);
        image::RgbImage::from_raw(width, height, self.pixels)
            .ok_or(DecodeError::BufferMismatch { width, height })
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_filled_image() {
        let img = DecodedImage::filled(4, 2, [10, 20, 30]);
        assert_eq!(img.pixels.len(), 24);
        assert_eq!(&img.pixels[0..3], &[10, 20, 30]);
        assert_eq!(&img.pixels[21..24], &[10, 20, 30]);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_into_rgb_image_reuses_buffer() {
        let img = DecodedImage::filled(32, 16, [1, 2, 3]);
        let buffer = img.pixels.as_ptr();

        let rgb = img.into_rgb_image().unwrap();
        assert_eq!(rgb.dimensions(), (32, 16));
        assert_eq!(rgb.as_raw().as_ptr(), buffer);
    }

    #[test]
    fn test_into_rgb_image_buffer_mismatch() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 12],
        };
        assert!(matches!(
            img.into_rgb_image(),
            Err(DecodeError::BufferMismatch {
                width: 10,
                height: 10
            })
        ));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::Malformed {
            format: SourceFormat::Png,
            reason: "bad signature".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to decode Png image: bad signature");
    }
}
