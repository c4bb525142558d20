//! Input images and the media types the pipeline accepts.

/// Hard ceiling on the size of a source file before any decode is attempted (10 MB).
pub const MAX_SOURCE_BYTES: u64 = 10 * 1024 * 1024;

/// A user-supplied image file, read but never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Original file name (e.g. "beach.png").
    pub name: String,
    /// Declared MIME type (e.g. "image/png").
    pub media_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl SourceImage {
    /// Create a new source image.
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Byte length of the file.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Raster formats accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Jpeg,
    Png,
    WebP,
}

impl SourceFormat {
    /// Parse a declared MIME type.
    ///
    /// Matching is case-insensitive and ignores MIME parameters, so
    /// `"IMAGE/JPEG; charset=binary"` is a JPEG. The non-standard `image/jpg`
    /// that some browsers report is accepted as well.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type_essence(media_type);
        match essence.as_str() {
            "image/jpeg" | "image/jpg" => Some(SourceFormat::Jpeg),
            "image/png" => Some(SourceFormat::Png),
            "image/webp" => Some(SourceFormat::WebP),
            _ => None,
        }
    }

    /// Convert to the image crate's format.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            SourceFormat::Jpeg => image::ImageFormat::Jpeg,
            SourceFormat::Png => image::ImageFormat::Png,
            SourceFormat::WebP => image::ImageFormat::WebP,
        }
    }

    /// Canonical MIME type for this format.
    pub fn media_type(self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "image/jpeg",
            SourceFormat::Png => "image/png",
            SourceFormat::WebP => "image/webp",
        }
    }
}

/// Lowercased MIME type with any `;`-parameters stripped.
pub(crate) fn media_type_essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_image_size() {
        let src = SourceImage::new("a.jpg", "image/jpeg", vec![0u8; 2048]);
        assert_eq!(src.size(), 2048);
        assert_eq!(src.name, "a.jpg");
    }

    #[test]
    fn test_from_media_type_supported() {
        assert_eq!(SourceFormat::from_media_type("image/jpeg"), Some(SourceFormat::Jpeg));
        assert_eq!(SourceFormat::from_media_type("image/jpg"), Some(SourceFormat::Jpeg));
        assert_eq!(SourceFormat::from_media_type("image/png"), Some(SourceFormat::Png));
        assert_eq!(SourceFormat::from_media_type("image/webp"), Some(SourceFormat::WebP));
    }

    #[test]
    fn test_from_media_type_normalizes() {
        assert_eq!(SourceFormat::from_media_type("IMAGE/PNG"), Some(SourceFormat::Png));
        assert_eq!(
            SourceFormat::from_media_type(" image/jpeg ; q=0.9"),
            Some(SourceFormat::Jpeg)
        );
    }

    #[test]
    fn test_from_media_type_unsupported() {
        assert_eq!(SourceFormat::from_media_type("image/gif"), None);
        assert_eq!(SourceFormat::from_media_type("text/plain"), None);
        assert_eq!(SourceFormat::from_media_type(""), None);
    }

    #[test]
    fn test_media_type_round_trip() {
        for format in [SourceFormat::Jpeg, SourceFormat::Png, SourceFormat::WebP] {
            assert_eq!(SourceFormat::from_media_type(format.media_type()), Some(format));
        }
    }

    #[test]
    fn test_to_image_format() {
        assert_eq!(SourceFormat::Jpeg.to_image_format(), image::ImageFormat::Jpeg);
        assert_eq!(SourceFormat::Png.to_image_format(), image::ImageFormat::Png);
        assert_eq!(SourceFormat::WebP.to_image_format(), image::ImageFormat::WebP);
    }
}
