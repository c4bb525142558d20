//! Size-constrained transcoding of a single image.
//!
//! The pipeline is: validate, decode, fit within the bounding box, encode as
//! JPEG at the caller's quality, and if the result is over budget walk the
//! fixed [`QUALITY_LADDER`] until an encode fits. An image that cannot be
//! brought under budget is an error; oversized output is never returned.

use log::debug;
use thiserror::Error;

use crate::codec::{Codec, ImageCodec};
use crate::decode::{calculate_target_dimensions, resize, DecodeError, FilterType};
use crate::encode::{EncodeError, OUTPUT_MEDIA_TYPE};
use crate::options::{CompressionOptions, OptionsError};
use crate::source::SourceImage;
use crate::validate::{validate_image_file, ValidationError};

/// Qualities tried, in order, after the first encode misses the size budget.
///
/// The ladder is independent of the caller's starting quality.
pub const QUALITY_LADDER: [f32; 5] = [0.80, 0.75, 0.70, 0.65, 0.60];

/// Errors from compressing a single image.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompressError {
    /// Pre-flight validation rejected the file.
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    #[error(transparent)]
    InvalidOptions(#[from] OptionsError),

    /// The bytes could not be decoded as the declared type.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Every quality on the ladder still exceeded the size budget.
    #[error(
        "Could not compress below {max_size_bytes} bytes (smallest attempt: {smallest_bytes} bytes)"
    )]
    BudgetExceeded {
        max_size_bytes: u64,
        smallest_bytes: u64,
    },
}

/// An encoded output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl CompressedFile {
    /// Wrap JPEG output, renaming the file to a `.jpg` extension.
    pub fn jpeg(source_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: jpeg_file_name(source_name),
            media_type: OUTPUT_MEDIA_TYPE.to_string(),
            bytes,
        }
    }

    /// Pass the source file through unchanged.
    pub fn original(source: &SourceImage) -> Self {
        Self {
            name: source.name.clone(),
            media_type: source.media_type.clone(),
            bytes: source.bytes.clone(),
        }
    }
}

/// Outcome of compressing one image.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    /// The output file.
    pub file: CompressedFile,
    /// Source size in bytes.
    pub original_size: u64,
    /// Output size in bytes.
    pub compressed_size: u64,
    /// `round((1 - compressed / original) * 100)`; negative when output grew.
    pub compression_ratio: i32,
    /// Output width in pixels (0 when no decode succeeded).
    pub width: u32,
    /// Output height in pixels (0 when no decode succeeded).
    pub height: u32,
    /// Quality of the chosen encode; `None` when the original was kept.
    pub quality: Option<f32>,
    /// Why the original was kept instead of a compressed version.
    pub fallback_reason: Option<String>,
}

impl CompressionResult {
    /// A result that keeps the original file after compression failed.
    pub fn fallback(source: &SourceImage, reason: impl Into<String>) -> Self {
        let size = source.size();
        Self {
            file: CompressedFile::original(source),
            original_size: size,
            compressed_size: size,
            compression_ratio: 0,
            width: 0,
            height: 0,
            quality: None,
            fallback_reason: Some(reason.into()),
        }
    }

    /// True when the original file was kept instead of a compressed version.
    pub fn used_original(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Compress an image with the default codec.
pub fn compress_image(
    source: &SourceImage,
    options: &CompressionOptions,
) -> Result<CompressionResult, CompressError> {
    compress_with(&ImageCodec, source, options)
}

/// Compress an image using `codec` for decode and encode.
///
/// # Errors
///
/// - `Rejected` / `InvalidOptions` before any decode work
/// - `Decode` if the bytes are not a valid image of the declared type
/// - `BudgetExceeded` if no quality on the ladder fits `max_size_kb`
pub fn compress_with(
    codec: &impl Codec,
    source: &SourceImage,
    options: &CompressionOptions,
) -> Result<CompressionResult, CompressError> {
    let format = validate_image_file(source)?;
    options.validate()?;

    let decoded = codec.decode(&source.bytes, format)?;
    let (width, height) = calculate_target_dimensions(
        decoded.width,
        decoded.height,
        options.max_width,
        options.max_height,
    );
    debug!(
        "{}: {}x{} -> {}x{}",
        source.name, decoded.width, decoded.height, width, height
    );
    // The full-size raster is consumed here; only the fitted one is kept
    // alive across the encode attempts.
    let raster = resize(decoded, width, height, FilterType::Bilinear)?;

    let budget = options.max_size_bytes();
    let mut smallest = u64::MAX;

    for quality in std::iter::once(options.quality).chain(QUALITY_LADDER) {
        let bytes = codec.encode_jpeg(&raster, quality)?;
        let size = bytes.len() as u64;
        debug!(
            "{}: quality {:.2} -> {} bytes (budget {})",
            source.name, quality, size, budget
        );

        if size <= budget {
            return Ok(CompressionResult {
                file: CompressedFile::jpeg(&source.name, bytes),
                original_size: source.size(),
                compressed_size: size,
                compression_ratio: compression_ratio(source.size(), size),
                width,
                height,
                quality: Some(quality),
                fallback_reason: None,
            });
        }
        smallest = smallest.min(size);
    }

    Err(CompressError::BudgetExceeded {
        max_size_bytes: budget,
        smallest_bytes: smallest,
    })
}

/// Percentage saved, `round((1 - compressed / original) * 100)`.
///
/// Not clamped: output larger than the input gives a negative value.
/// Returns 0 for an empty original.
pub fn compression_ratio(original_size: u64, compressed_size: u64) -> i32 {
    if original_size == 0 {
        return 0;
    }
    let saved = 1.0 - compressed_size as f64 / original_size as f64;
    (saved * 100.0).round() as i32
}

/// Replace the extension of `name` with `.jpg`.
fn jpeg_file_name(name: &str) -> String {
    let stem = match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    };
    if stem.is_empty() {
        "image.jpg".to_string()
    } else {
        format!("{stem}.jpg")
    }
}
