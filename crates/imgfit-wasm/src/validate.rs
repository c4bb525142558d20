//! Validation and display helper bindings.

use imgfit_core::{validate_media, ValidationResult};
use wasm_bindgen::prelude::*;

/// Pre-flight check for a picked file, before reading its bytes.
///
/// # Arguments
///
/// * `media_type` - The declared MIME type (`File.type`)
/// * `size` - The file size in bytes (`File.size`)
///
/// # Returns
///
/// `{ isValid: true }` or `{ isValid: false, error: "..." }`.
///
/// # Example
///
/// ```typescript
/// const check = validate_image_file(file.type, file.size);
/// if (!check.isValid) showError(check.error);
/// ```
#[wasm_bindgen]
pub fn validate_image_file(media_type: &str, size: f64) -> Result<JsValue, JsValue> {
    let result = validation_result(media_type, size);
    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}

/// Format a byte count for display ("0 B", "1.5 KB", "3.2 MB").
#[wasm_bindgen]
pub fn format_file_size(bytes: f64) -> String {
    imgfit_core::format_file_size(bytes_from_js(bytes))
}

fn validation_result(media_type: &str, size: f64) -> ValidationResult {
    validate_media(media_type, bytes_from_js(size)).into()
}

/// JS numbers are doubles; negative and NaN sizes become 0.
fn bytes_from_js(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use js_sys::Reflect;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_validate_image_file_shape() {
        let ok = validate_image_file("image/png", 1000.0).unwrap();
        assert_eq!(
            Reflect::get(&ok, &"isValid".into()).unwrap().as_bool(),
            Some(true)
        );
        assert!(Reflect::get(&ok, &"error".into()).unwrap().is_undefined());

        let bad = validate_image_file("image/gif", 1000.0).unwrap();
        assert_eq!(
            Reflect::get(&bad, &"isValid".into()).unwrap().as_bool(),
            Some(false)
        );
        assert!(Reflect::get(&bad, &"error".into()).unwrap().is_string());
    }
}
