//! imgfit core - size-constrained image transcoding
//!
//! This crate turns an arbitrary user-supplied JPEG, PNG or WebP into a JPEG
//! that fits a bounding box and a byte budget, for upload from a browser.
//!
//! # Pipeline
//!
//! 1. [`validate_image_file`] rejects non-images, oversized files and
//!    unsupported formats before any decode work.
//! 2. [`compress_image`] decodes, downscales (never upscales), encodes at the
//!    requested quality and backs off along [`QUALITY_LADDER`] until the
//!    output fits.
//! 3. [`compress_images`] runs a batch sequentially with progress events,
//!    keeping the original file for any item that fails.
//!
//! Decode and encode go through the [`Codec`] trait; [`ImageCodec`] is the
//! default implementation over the `image` crate.

pub mod batch;
pub mod codec;
pub mod compress;
pub mod decode;
pub mod encode;
pub mod format;
pub mod options;
pub mod source;
pub mod validate;

pub use batch::{compress_images, compress_images_with, BatchProgress, BatchSummary};
pub use codec::{Codec, ImageCodec};
pub use compress::{
    compress_image, compress_with, compression_ratio, CompressError, CompressedFile,
    CompressionResult, QUALITY_LADDER,
};
pub use format::format_file_size;
pub use options::{CompressionOptions, OptionsError};
pub use source::{SourceFormat, SourceImage, MAX_SOURCE_BYTES};
pub use validate::{validate_image_file, validate_media, ValidationError, ValidationResult};
