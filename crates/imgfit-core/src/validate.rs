//! Pre-flight checks run before any decode work.
//!
//! Validation is pure and synchronous. Files rejected here never reach the
//! decoder, so malformed or hostile inputs of an unexpected type are stopped
//! early.

use serde::Serialize;
use thiserror::Error;

use crate::source::{media_type_essence, SourceFormat, SourceImage, MAX_SOURCE_BYTES};

/// Reasons a file is rejected before compression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The declared type is not an image at all.
    #[error("File is not an image (type: '{media_type}')")]
    NotAnImage { media_type: String },

    /// The file exceeds the pre-compression size ceiling.
    #[error("File is too large: {size} bytes (maximum {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// An image, but not one of JPEG, PNG or WebP.
    #[error("Unsupported image format '{media_type}' (supported: JPEG, PNG, WebP)")]
    UnsupportedFormat { media_type: String },
}

/// Validate a source image.
///
/// Checks run in order and stop at the first failure: image type family,
/// size ceiling, supported encoding. On success the parsed format is returned.
pub fn validate_image_file(source: &SourceImage) -> Result<SourceFormat, ValidationError> {
    validate_media(&source.media_type, source.size())
}

/// Validate from file metadata alone (declared type and byte length).
pub fn validate_media(media_type: &str, size: u64) -> Result<SourceFormat, ValidationError> {
    if !media_type_essence(media_type).starts_with("image/") {
        return Err(ValidationError::NotAnImage {
            media_type: media_type.to_string(),
        });
    }

    if size > MAX_SOURCE_BYTES {
        return Err(ValidationError::TooLarge {
            size,
            max: MAX_SOURCE_BYTES,
        });
    }

    SourceFormat::from_media_type(media_type).ok_or_else(|| ValidationError::UnsupportedFormat {
        media_type: media_type.to_string(),
    })
}

/// `{ isValid, error? }` view of a validation outcome for UI callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<Result<T, ValidationError>> for ValidationResult {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self {
                is_valid: true,
                error: None,
            },
            Err(e) => Self {
                is_valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}
