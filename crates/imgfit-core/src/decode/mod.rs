//! Image decoding and resampling.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG and WebP sources into an RGB raster
//! - Computing output dimensions that fit a bounding box without upscaling
//! - Resampling a raster to those dimensions
//!
//! # Architecture
//!
//! The pipeline is designed to be used from Web Workers via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use imgfit_core::decode::{decode_image, resize_to_fit, FilterType};
//! use imgfit_core::SourceFormat;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_image(&bytes, SourceFormat::Png).unwrap();
//! let (width, height) = (image.width, image.height);
//! let fitted = resize_to_fit(image, 1920, 1080, FilterType::Bilinear).unwrap();
//! println!("{}x{} -> {}x{}", width, height, fitted.width, fitted.height);
//! ```

mod reader;
mod resize;
mod types;

pub use reader::decode_image;
pub use resize::{calculate_target_dimensions, resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType};
