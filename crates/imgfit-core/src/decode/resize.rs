//! Image resizing for size-constrained output.
//!
//! Provides resize operations using the `image` crate's algorithms.
//! The resize functions take the source raster by value, so it is released
//! as soon as the resampled copy exists.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize (consumed)
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target side is zero.
pub fn resize(
    image: DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, hand the raster back untouched
    if image.width == width && image.height == height {
        return Ok(image);
    }

    let source = image.into_rgb_image()?;
    let resized = image::imageops::resize(&source, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Resize an image to fit within a `max_width x max_height` box, preserving aspect ratio.
///
/// Images that already fit are returned unchanged; this never upscales.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either bound is zero.
pub fn resize_to_fit(
    image: DecodedImage,
    max_width: u32,
    max_height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_width == 0 || max_height == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: max_width,
            height: max_height,
        });
    }

    let (width, height) =
        calculate_target_dimensions(image.width, image.height, max_width, max_height);

    resize(image, width, height, filter)
}

/// Calculate output dimensions that fit within `max_width x max_height`.
///
/// `scale = min(max_width / width, max_height / height)`. When `scale >= 1`
/// the original dimensions are kept. Otherwise each side is scaled and rounded
/// half away from zero, with a floor of one pixel.
pub fn calculate_target_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let scale_x = f64::from(max_width) / f64::from(width);
    let scale_y = f64::from(max_height) / f64::from(height);
    let scale = scale_x.min(scale_y);

    if scale >= 1.0 {
        return (width, height);
    }

    // f64::round rounds half away from zero
    let new_width = (f64::from(width) * scale).round() as u32;
    let new_height = (f64::from(height) * scale).round() as u32;
    (new_width.max(1), new_height.max(1))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Output always fits within the bounding box.
        #[test]
        fn prop_output_fits_box(
            width in 1u32..=20000,
            height in 1u32..=20000,
            max_width in 1u32..=4000,
            max_height in 1u32..=4000,
        ) {
            let (w, h) = calculate_target_dimensions(width, height, max_width, max_height);
            prop_assert!(w <= max_width && h <= max_height,
                "{}x{} does not fit {}x{}", w, h, max_width, max_height);
        }

        /// Property: Images that already fit are never resized.
        #[test]
        fn prop_no_upscaling(
            width in 1u32..=2000,
            height in 1u32..=2000,
            extra_w in 0u32..=2000,
            extra_h in 0u32..=2000,
        ) {
            let dims = calculate_target_dimensions(width, height, width + extra_w, height + extra_h);
            prop_assert_eq!(dims, (width, height));
        }

        /// Property: Downscaling preserves aspect ratio up to rounding.
        ///
        /// Each side is within half a pixel of the exact scaled length, so the
        /// ratio is off by at most one pixel. A fixed ratio tolerance cannot
        /// hold here: a 8000x200 source fit into 100 px wide is 100x3 (33.3
        /// instead of 40) purely from rounding the short side.
        #[test]
        fn prop_aspect_ratio_preserved(
            width in 200u32..=8000,
            height in 200u32..=8000,
            max_width in 100u32..=1920,
            max_height in 100u32..=1080,
        ) {
            let (w, h) = calculate_target_dimensions(width, height, max_width, max_height);
            let scale = (f64::from(max_width) / f64::from(width))
                .min(f64::from(max_height) / f64::from(height));
            if scale < 1.0 {
                let exact_w = f64::from(width) * scale;
                let exact_h = f64::from(height) * scale;
                prop_assert!((f64::from(w) - exact_w).abs() <= 0.5 || w == 1,
                    "width {} vs exact {}", w, exact_w);
                prop_assert!((f64::from(h) - exact_h).abs() <= 0.5 || h == 1,
                    "height {} vs exact {}", h, exact_h);
            } else {
                prop_assert_eq!((w, h), (width, height));
            }
        }

        /// Property: Near-square downscales to 500 px or more keep the aspect
        /// ratio within 0.01.
        #[test]
        fn prop_aspect_ratio_within_hundredth(
            width in 1000u32..=8000,
            height in 1000u32..=8000,
            max_width in 1000u32..=1920,
            max_height in 1000u32..=1080,
        ) {
            prop_assume!(width.max(height) <= 2 * width.min(height));
            let (w, h) = calculate_target_dimensions(width, height, max_width, max_height);
            let original = f64::from(width) / f64::from(height);
            let scaled = f64::from(w) / f64::from(h);
            prop_assert!((scaled - original).abs() < 0.01,
                "{}x{} -> {}x{}", width, height, w, h);
        }

        /// Property: Downscaled output is never larger than the source.
        #[test]
        fn prop_never_grows(
            width in 1u32..=8000,
            height in 1u32..=8000,
            max_width in 1u32..=1920,
            max_height in 1u32..=1080,
        ) {
            let (w, h) = calculate_target_dimensions(width, height, max_width, max_height);
            prop_assert!(w <= width && h <= height);
        }
    }
}
