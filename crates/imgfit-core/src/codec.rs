//! Codec capability used by the transcoder.
//!
//! The [`Codec`] trait abstracts the two operations the compression
//! algorithm needs from an image library: decode bytes of a declared format
//! into a raster, and encode a raster as JPEG at a given quality.
//! [`ImageCodec`] is the production implementation over the `image` crate;
//! tests substitute scripted codecs to drive the quality ladder
//! deterministically.

use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::{encode_jpeg, quality_to_percent, EncodeError};
use crate::source::SourceFormat;

/// Decode/encode capability injected into the transcoder.
pub trait Codec {
    /// Decode `bytes` as `format` into an RGB raster.
    fn decode(&self, bytes: &[u8], format: SourceFormat) -> Result<DecodedImage, DecodeError>;

    /// Encode `image` as JPEG at `quality` in (0, 1].
    fn encode_jpeg(&self, image: &DecodedImage, quality: f32) -> Result<Vec<u8>, EncodeError>;
}

/// Codec backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl Codec for ImageCodec {
    fn decode(&self, bytes: &[u8], format: SourceFormat) -> Result<DecodedImage, DecodeError> {
        decode_image(bytes, format)
    }

    fn encode_jpeg(&self, image: &DecodedImage, quality: f32) -> Result<Vec<u8>, EncodeError> {
        encode_jpeg(
            &image.pixels,
            image.width,
            image.height,
            quality_to_percent(quality),
        )
    }
}

impl<C: Codec + ?Sized> Codec for &C {
    fn decode(&self, bytes: &[u8], format: SourceFormat) -> Result<DecodedImage, DecodeError> {
        (**self).decode(bytes, format)
    }

    fn encode_jpeg(&self, image: &DecodedImage, quality: f32) -> Result<Vec<u8>, EncodeError> {
        (**self).encode_jpeg(image, quality)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_image_codec_round_trip_dimensions() {
        let raster = DecodedImage::filled(48, 32, [10, 200, 90]);
        let jpeg = ImageCodec.encode_jpeg(&raster, 0.85).unwrap();

        let decoded = ImageCodec.decode(&jpeg, SourceFormat::Jpeg).unwrap();
        assert_eq!((decoded.width, decoded.height), (48, 32));
    }

    #[test]
    fn test_image_codec_decodes_png() {
        let img = image::RgbImage::from_pixel(12, 7, image::Rgb([1, 2, 3]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();

        let decoded = ImageCodec
            .decode(&buffer.into_inner(), SourceFormat::Png)
            .unwrap();
        assert_eq!((decoded.width, decoded.height), (12, 7));
    }

    #[test]
    fn test_codec_by_reference() {
        fn encode_with(codec: impl Codec) -> usize {
            let raster = DecodedImage::filled(4, 4, [0, 0, 0]);
            codec.encode_jpeg(&raster, 0.5).unwrap().len()
        }
        assert!(encode_with(&ImageCodec) > 0);
    }
}
