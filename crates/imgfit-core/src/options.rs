//! Compression configuration.
//!
//! Every field has a documented default, and deserialization fills any
//! missing field from it, so JavaScript callers can pass a partial override
//! such as `{ maxSizeKB: 200 }`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1920;
/// Default maximum output height in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 1080;
/// Default starting JPEG quality.
pub const DEFAULT_QUALITY: f32 = 0.85;
/// Default output size ceiling in kilobytes.
pub const DEFAULT_MAX_SIZE_KB: u32 = 500;

/// Invalid compression options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("Invalid maximum dimensions: {max_width}x{max_height} (both must be non-zero)")]
    InvalidDimensions { max_width: u32, max_height: u32 },

    #[error("Invalid quality {0}: must be in (0, 1]")]
    InvalidQuality(f32),

    #[error("Invalid size budget: maxSizeKB must be non-zero")]
    InvalidSizeBudget,
}

/// Constraints for one compression call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressionOptions {
    /// Maximum output width in pixels. Images are never upscaled.
    pub max_width: u32,
    /// Maximum output height in pixels.
    pub max_height: u32,
    /// Starting JPEG quality in (0, 1]. The encoder may descend from it.
    pub quality: f32,
    /// Hard output ceiling in kilobytes (1 KB = 1024 bytes).
    #[serde(rename = "maxSizeKB")]
    pub max_size_kb: u32,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            quality: DEFAULT_QUALITY,
            max_size_kb: DEFAULT_MAX_SIZE_KB,
        }
    }
}

impl CompressionOptions {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_dimensions(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_max_size_kb(mut self, max_size_kb: u32) -> Self {
        self.max_size_kb = max_size_kb;
        self
    }

    /// Output ceiling in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        u64::from(self.max_size_kb) * 1024
    }

    /// Check that every field is within its documented range.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(OptionsError::InvalidDimensions {
                max_width: self.max_width,
                max_height: self.max_height,
            });
        }
        // NaN fails both comparisons
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(OptionsError::InvalidQuality(self.quality));
        }
        if self.max_size_kb == 0 {
            return Err(OptionsError::InvalidSizeBudget);
        }
        Ok(())
    }
}
