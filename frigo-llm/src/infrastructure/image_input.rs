//! Uploaded image handling for vision calls

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use tracing::debug;

use crate::domain::RecipeError;

/// A decoded, upload-ready image.
///
/// Construction proves the bytes are a real image; formats the vision API
/// does not take directly are re-encoded to PNG.
#[derive(Debug, Clone)]
pub struct ImageInput {
    mime_type: &'static str,
    bytes: Vec<u8>,
}

impl ImageInput {
    /// Decode raw upload bytes.
    ///
    /// Fails with [`RecipeError::InputDecode`] when the bytes are not a
    /// decodable image.
    pub fn decode(bytes: &[u8]) -> Result<Self, RecipeError> {
        if bytes.is_empty() {
            return Err(RecipeError::InputDecode("empty upload".to_string()));
        }

        let format = image::guess_format(bytes)?;
        let decoded = image::load_from_memory_with_format(bytes, format)?;

        let passthrough = match format {
            ImageFormat::Jpeg => Some("image/jpeg"),
            ImageFormat::Png => Some("image/png"),
            ImageFormat::WebP => Some("image/webp"),
            _ => None,
        };

        if let Some(mime_type) = passthrough {
            return Ok(Self {
                mime_type,
                bytes: bytes.to_vec(),
            });
        }

        debug!(format = ?format, "Re-encoding image to PNG");
        let mut png = Vec::new();
        decoded.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(Self {
            mime_type: "image/png",
            bytes: png,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Base64 payload for an inline image part
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}
