//! WASM-compatible wrapper types for compression results.

use imgfit_core::CompressionResult;
use wasm_bindgen::prelude::*;

/// A compression result wrapper for JavaScript.
///
/// Holds the output file (JPEG, or the untouched original when compression
/// failed inside a batch) and its size statistics.
///
/// # Memory Management
///
/// The file bytes are stored in WASM memory. `bytes()` copies them into a
/// JavaScript `Uint8Array`, typically to build a `Blob` for upload.
#[wasm_bindgen]
pub struct JsCompressionResult {
    inner: CompressionResult,
}

#[wasm_bindgen]
impl JsCompressionResult {
    /// Output file bytes (copied to a Uint8Array).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.file.bytes.clone()
    }

    /// Output file name (".jpg" extension for compressed files).
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.file.name.clone()
    }

    /// Output MIME type ("image/jpeg" unless the original was kept).
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.file.media_type.clone()
    }

    /// Source size in bytes.
    #[wasm_bindgen(getter)]
    pub fn original_size(&self) -> f64 {
        self.inner.original_size as f64
    }

    /// Output size in bytes.
    #[wasm_bindgen(getter)]
    pub fn compressed_size(&self) -> f64 {
        self.inner.compressed_size as f64
    }

    /// Percentage saved; may be negative when the output grew.
    #[wasm_bindgen(getter)]
    pub fn compression_ratio(&self) -> i32 {
        self.inner.compression_ratio
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// JPEG quality actually used, or undefined when the original was kept.
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> Option<f32> {
        self.inner.quality
    }

    /// True when compression failed and the original file was kept.
    #[wasm_bindgen(getter)]
    pub fn used_original(&self) -> bool {
        self.inner.used_original()
    }

    /// Why compression failed for this item, if it did.
    #[wasm_bindgen(getter)]
    pub fn fallback_reason(&self) -> Option<String> {
        self.inner.fallback_reason.clone()
    }
}

impl From<CompressionResult> for JsCompressionResult {
    fn from(inner: CompressionResult) -> Self {
        Self { inner }
    }
}
