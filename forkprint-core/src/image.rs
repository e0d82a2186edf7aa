//! Image validation for the vision path.
//!
//! The declared MIME type of an upload is advisory only; the format is
//! detected from the bytes and checked against a fixed allow-list.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::InputError;

/// Image formats accepted for dish photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Maximum accepted image size (10MB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// A size- and format-checked image ready for the inference provider.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    /// Detected content type (e.g. "image/jpeg").
    pub media_type: String,
}

/// Validate image bytes: enforce the size bound, sniff the format from the
/// bytes, and check it against [`ALLOWED_FORMATS`].
pub fn validate_image(data: Vec<u8>) -> Result<ImagePayload, InputError> {
    if data.len() > MAX_IMAGE_BYTES {
        return Err(InputError::ImageTooLarge {
            size: data.len(),
            max: MAX_IMAGE_BYTES,
        });
    }

    let reader = ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .map_err(|_| InputError::UnknownImageFormat)?;

    let format = reader.format().ok_or(InputError::UnknownImageFormat)?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(InputError::UnsupportedImageFormat(format!("{format:?}")));
    }

    Ok(ImagePayload {
        media_type: format.to_mime_type().to_string(),
        data,
    })
}
