//! Image compression WASM bindings.
//!
//! # Functions
//!
//! - [`compress_image`] - Compress one file; errors carry the specific reason
//! - [`compress_images`] - Compress a list of files with progress reporting,
//!   keeping the original for any file that fails
//! - [`batch_summary`] - Totals over the results of a batch
//!
//! Both are synchronous and CPU-bound: call them from a Web Worker and wrap
//! the call in a Promise on the JavaScript side.
//!
//! # Example
//!
//! ```typescript
//! import { compress_images } from '@imgfit/wasm';
//!
//! const files = await Promise.all(picked.map(async (f) => ({
//!   name: f.name,
//!   type: f.type,
//!   bytes: new Uint8Array(await f.arrayBuffer()),
//! })));
//!
//! const results = compress_images(files, { maxSizeKB: 300 }, (p) => {
//!   postMessage({ kind: 'progress', ...p });
//! });
//! const { count, fallbacks, compressionRatio } = batch_summary(results);
//! ```

use crate::types::JsCompressionResult;
use imgfit_core::{BatchProgress, BatchSummary, CompressionOptions, SourceImage};
use js_sys::{Array, Function, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;

/// Compress a single image.
///
/// # Arguments
///
/// * `bytes` - The file bytes as a `Uint8Array`
/// * `media_type` - The declared MIME type (`File.type`)
/// * `name` - The file name (`File.name`)
/// * `options` - Optional partial override of
///   `{ maxWidth: 1920, maxHeight: 1080, quality: 0.85, maxSizeKB: 500 }`
///
/// # Errors
///
/// Throws a string describing why the file was rejected (not an image,
/// too large, unsupported format), could not be decoded, or could not be
/// compressed below `maxSizeKB`.
#[wasm_bindgen]
pub fn compress_image(
    bytes: &[u8],
    media_type: &str,
    name: &str,
    options: JsValue,
) -> Result<JsCompressionResult, JsValue> {
    let options = parse_options(options)?;
    let source = SourceImage::new(name, media_type, bytes.to_vec());

    imgfit_core::compress_image(&source, &options)
        .map(JsCompressionResult::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compress a list of images, one at a time, in order.
///
/// # Arguments
///
/// * `files` - Array of `{ name: string, type: string, bytes: Uint8Array }`
/// * `options` - Optional partial override of the compression defaults
/// * `on_progress` - Optional callback receiving
///   `{ currentIndex, total, currentItemName, isComplete }`
///
/// # Returns
///
/// An array with exactly one `JsCompressionResult` per input, in input order.
/// Items that failed carry the original file with `used_original = true`.
///
/// # Errors
///
/// Throws only for malformed arguments (bad options, a file entry missing a
/// field). Per-file compression failures never abort the batch.
#[wasm_bindgen]
pub fn compress_images(
    files: Array,
    options: JsValue,
    on_progress: Option<Function>,
) -> Result<Array, JsValue> {
    let options = parse_options(options)?;
    let sources = files
        .iter()
        .map(|file| source_from_js(&file))
        .collect::<Result<Vec<_>, _>>()?;

    let results = imgfit_core::compress_images(&sources, &options, |progress| {
        if let Some(callback) = &on_progress {
            report_progress(callback, progress);
        }
    });

    Ok(results
        .into_iter()
        .map(|result| JsValue::from(JsCompressionResult::from(result)))
        .collect())
}

/// Totals over the results returned by [`compress_images`].
///
/// # Returns
///
/// `{ count, fallbacks, originalSize, compressedSize, compressionRatio }`,
/// where `compressionRatio` is the overall percentage saved.
///
/// # Errors
///
/// Throws if an entry does not carry `original_size`, `compressed_size` and
/// `used_original`.
#[wasm_bindgen]
pub fn batch_summary(results: &Array) -> Result<JsValue, JsValue> {
    let mut summary = BatchSummary::default();
    for result in results.iter() {
        summary = summary.with_item(
            size_field(&result, "original_size")?,
            size_field(&result, "compressed_size")?,
            Reflect::get(&result, &JsValue::from_str("used_original"))?
                .as_bool()
                .ok_or_else(|| JsValue::from_str("Result entry is missing 'used_original'"))?,
        );
    }
    serde_wasm_bindgen::to_value(&summary).map_err(JsValue::from)
}

/// Deserialize options, treating `undefined` / `null` as all defaults.
fn parse_options(value: JsValue) -> Result<CompressionOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(CompressionOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read one `{ name, type, bytes }` entry.
fn source_from_js(file: &JsValue) -> Result<SourceImage, JsValue> {
    let name = string_field(file, "name")?;
    let media_type = string_field(file, "type")?;
    let bytes = Reflect::get(file, &JsValue::from_str("bytes"))?;
    if !bytes.is_instance_of::<Uint8Array>() {
        return Err(JsValue::from_str(&format!(
            "File '{name}' is missing a Uint8Array 'bytes' field"
        )));
    }
    Ok(SourceImage::new(
        name,
        media_type,
        Uint8Array::new(&bytes).to_vec(),
    ))
}

fn string_field(object: &JsValue, key: &str) -> Result<String, JsValue> {
    Reflect::get(object, &JsValue::from_str(key))?
        .as_string()
        .ok_or_else(|| JsValue::from_str(&format!("File entry is missing a string '{key}' field")))
}

fn size_field(object: &JsValue, key: &str) -> Result<u64, JsValue> {
    Reflect::get(object, &JsValue::from_str(key))?
        .as_f64()
        .filter(|size| size.is_finite() && *size >= 0.0)
        .map(|size| size as u64)
        .ok_or_else(|| JsValue::from_str(&format!("Result entry is missing '{key}'")))
}

fn report_progress(callback: &Function, progress: &BatchProgress) {
    let delivered = serde_wasm_bindgen::to_value(progress)
        .map_err(JsValue::from)
        .and_then(|value| callback.call1(&JsValue::NULL, &value));
    if let Err(e) = delivered {
        log::warn!("Progress callback failed: {:?}", e);
    }
}
