//! Signature image encoding
//!
//! The UI captures a hand-drawn signature as raster pixels; the server
//! accepts it as a PNG data URL and stores the decoded image. This module
//! does the canvas-to-data-URL step.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageBuffer, Rgba};

/// A captured signature, held as encoded PNG bytes.
#[derive(Debug, Clone)]
pub struct SignatureImage {
    png: Vec<u8>,
}

impl SignatureImage {
    /// Wrap an already-encoded PNG.
    pub fn from_png_bytes(png: Vec<u8>) -> Self {
        Self { png }
    }

    /// Encode raw RGBA pixels (row-major, 4 bytes per pixel) as PNG.
    /// Fails when the buffer does not match the given dimensions.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, image::ImageError> {
        let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| {
                image::ImageError::Parameter(image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ))
            })?;
        let mut png = Vec::new();
        buffer.write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageFormat::Png,
        )?;
        Ok(Self { png })
    }

    /// Encoded PNG bytes.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Render as a `data:image/png;base64,...` URL, the wire format the
    /// sign endpoint expects.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_has_png_prefix_and_decodable_payload() {
        let image = SignatureImage::from_rgba(2, 2, vec![255u8; 16]).unwrap();
        let url = image.to_data_url();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        // PNG magic bytes
        assert_eq!(&decoded[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        assert!(SignatureImage::from_rgba(10, 10, vec![0u8; 4]).is_err());
    }

    #[test]
    fn raw_png_passes_through_unchanged() {
        let bytes = vec![1u8, 2, 3];
        let image = SignatureImage::from_png_bytes(bytes.clone());
        assert_eq!(image.png_bytes(), bytes.as_slice());
    }
}
