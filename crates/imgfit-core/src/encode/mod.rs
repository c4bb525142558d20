//! Image encoding.
//!
//! Output is always JPEG regardless of the source format, so downstream
//! consumers get one predictable, broadly compatible type.
//!
//! # Examples
//!
//! ```ignore
//! use imgfit_core::encode::{encode_jpeg, quality_to_percent};
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, quality_to_percent(0.85)).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, quality_to_percent, EncodeError};

/// MIME type of every encoded output.
pub const OUTPUT_MEDIA_TYPE: &str = "image/jpeg";
