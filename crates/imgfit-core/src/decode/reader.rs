//! Raster decoding for the supported source formats.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, DecodedImage};
use crate::source::SourceFormat;

/// Decode image bytes using the declared format.
///
/// The format is not guessed from content: bytes that do not parse as the
/// declared format fail, even if they are a valid image of another type.
/// Alpha channels are dropped and EXIF orientation is not applied.
///
/// # Errors
///
/// Returns `DecodeError::Malformed` if the codec rejects the bytes and
/// `DecodeError::EmptyImage` if the image has no pixels.
pub fn decode_image(bytes: &[u8], format: SourceFormat) -> Result<DecodedImage, DecodeError> {
    let malformed = |reason: String| DecodeError::Malformed { format, reason };

    let reader = ImageReader::with_format(Cursor::new(bytes), format.to_image_format());
    let img = reader.decode().map_err(|e| malformed(e.to_string()))?;

    let decoded = DecodedImage::from_rgb_image(img.into_rgb8());
    if decoded.is_empty() {
        return Err(DecodeError::EmptyImage);
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};

    fn encode_as(format: image::ImageFormat, width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128u8])
        });
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let bytes = encode_as(image::ImageFormat::Png, 40, 30);
        let img = decode_image(&bytes, SourceFormat::Png).unwrap();
        assert_eq!((img.width, img.height), (40, 30));
        assert_eq!(img.pixels.len(), 40 * 30 * 3);
        // PNG is lossless: first pixel is exact
        assert_eq!(&img.pixels[0..3], &[0, 0, 128]);
    }

    #[test]
    fn test_decode_jpeg() {
        let bytes = encode_as(image::ImageFormat::Jpeg, 64, 48);
        let img = decode_image(&bytes, SourceFormat::Jpeg).unwrap();
        assert_eq!((img.width, img.height), (64, 48));
    }

    #[test]
    fn test_decode_png_with_alpha_drops_channel() {
        let img = ImageBuffer::from_pixel(8, 8, Rgba([200u8, 100, 50, 10]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();

        let decoded = decode_image(&buffer.into_inner(), SourceFormat::Png).unwrap();
        assert_eq!(decoded.pixels.len(), 8 * 8 * 3);
        assert_eq!(&decoded.pixels[0..3], &[200, 100, 50]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_image(b"definitely not an image", SourceFormat::Jpeg);
        assert!(matches!(
            result,
            Err(DecodeError::Malformed {
                format: SourceFormat::Jpeg,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_empty_bytes_fails() {
        assert!(decode_image(&[], SourceFormat::WebP).is_err());
    }

    #[test]
    fn test_declared_type_mismatch_fails() {
        // A valid PNG declared as JPEG
        let bytes = encode_as(image::ImageFormat::Png, 10, 10);
        assert!(decode_image(&bytes, SourceFormat::Jpeg).is_err());
    }

    #[test]
    fn test_truncated_png_fails() {
        let bytes = encode_as(image::ImageFormat::Png, 32, 32);
        let truncated = &bytes[..bytes.len() / 2];
        assert!(decode_image(truncated, SourceFormat::Png).is_err());
    }
}
