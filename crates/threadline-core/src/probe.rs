//! Header-only inspection of uploaded image bytes.
//!
//! Probing never fails: an upload the `image` crate cannot recognize is
//! still accepted, it simply carries no format or dimensions.  Only the
//! header is read; pixel data is never decoded.

use std::io::Cursor;

use image::ImageReader;
use serde::Serialize;

use crate::types::Dimensions;

/// What a header probe learned about an uploaded file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    /// MIME type of the detected format (e.g. `"image/png"`).
    pub media_type: Option<&'static str>,
    /// Pixel dimensions read from the header.
    pub dimensions: Option<Dimensions>,
}

/// Detect the format and pixel dimensions of `bytes`.
#[must_use = "returns the probed image info"]
pub fn probe(bytes: &[u8]) -> ImageInfo {
    let Ok(format) = image::guess_format(bytes) else {
        return ImageInfo::default();
    };

    let dimensions = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .ok()
        .map(|(width, height)| Dimensions::new(width, height));

    ImageInfo {
        media_type: Some(format.to_mime_type()),
        dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: encode a solid RGBA image of the given size as PNG bytes.
    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(width, height, |_, _| image::Rgba([12, 34, 56, 255]));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .ok();
        buf
    }

    #[test]
    fn png_reports_media_type_and_dimensions() {
        let info = probe(&encode_png(17, 31));
        assert_eq!(info.media_type, Some("image/png"));
        assert_eq!(info.dimensions, Some(Dimensions::new(17, 31)));
    }

    #[test]
    fn empty_input_probes_to_nothing() {
        assert_eq!(probe(&[]), ImageInfo::default());
    }

    #[test]
    fn unrecognized_bytes_are_accepted_without_info() {
        let info = probe(b"definitely not an image");
        assert_eq!(info.media_type, None);
        assert_eq!(info.dimensions, None);
    }

    #[test]
    fn truncated_header_keeps_format_but_not_dimensions() {
        let png = encode_png(4, 4);
        // PNG signature only, no IHDR chunk.
        let info = probe(&png[..8]);
        assert_eq!(info.media_type, Some("image/png"));
        assert_eq!(info.dimensions, None);
    }
}
