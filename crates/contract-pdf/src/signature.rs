//! Hand-drawn signature capture: PNG bytes in, flat RGB raster out.

use crate::types::{PdfError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encoded signature image as captured by a signature pad (PNG).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureImage(Vec<u8>);

/// Decoded 8-bit RGB pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl RasterImage {
    /// Height over width; 0 for a degenerate image
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            0.0
        } else {
            self.height as f32 / self.width as f32
        }
    }
}

impl SignatureImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a `data:image/png;base64,...` URL. Only the payload is
    /// validated here; whether it is a decodable PNG is checked by `decode`.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let (header, payload) = url
            .trim()
            .split_once(',')
            .ok_or_else(|| PdfError::Signature("missing data URL payload".to_string()))?;
        if !header.starts_with("data:") || !header.ends_with(";base64") {
            return Err(PdfError::Signature(format!(
                "unsupported data URL header: {}",
                header
            )));
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| PdfError::Signature(e.to_string()))?;
        Ok(Self(bytes))
    }

    pub fn to_data_url(&self) -> String {
        format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(&self.0))
    }

    /// Decode to RGB, compositing any transparency over a white background.
    pub fn decode(&self) -> Result<RasterImage> {
        let rgba = image::load_from_memory(&self.0)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(PdfError::Signature("image has no pixels".to_string()));
        }

        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend([r, g, b].map(|c| over_white(c, a)));
        }

        Ok(RasterImage { width, height, rgb })
    }
}

impl From<Vec<u8>> for SignatureImage {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

// Stored as a data URL string, the shape signature pads hand out.
#[cfg(feature = "serde")]
impl serde::Serialize for SignatureImage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_data_url())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SignatureImage {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let url = String::deserialize(deserializer)?;
        Self::from_data_url(&url).map_err(serde::de::Error::custom)
    }
}
