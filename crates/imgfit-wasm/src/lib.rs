//! imgfit WASM - WebAssembly bindings for imgfit
//!
//! This crate exposes the imgfit-core compression pipeline to
//! JavaScript/TypeScript upload flows.
//!
//! # Module Structure
//!
//! - `compress` - Single-file and batch compression, batch totals
//! - `validate` - Pre-flight file validation and size formatting
//! - `types` - WASM-compatible wrapper for compression results
//! - `logger` - Routes core `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { validate_image_file, compress_image } from '@imgfit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const check = validate_image_file(file.type, file.size);
//! if (check.isValid) {
//!   const bytes = new Uint8Array(await file.arrayBuffer());
//!   const result = compress_image(bytes, file.type, file.name, { maxSizeKB: 300 });
//!   console.log(`${result.name}: ${result.compression_ratio}% smaller`);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod logger;
mod types;
mod validate;

// Re-export public types
pub use compress::{batch_summary, compress_image, compress_images};
pub use types::JsCompressionResult;
pub use validate::{format_file_size, validate_image_file};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init(log::LevelFilter::Warn);
}

/// Set the console log level ("off", "error", "warn", "info", "debug", "trace").
///
/// `debug` shows every quality-ladder attempt.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logger::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level '{level}'")))?;
    logger::init(filter);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
