pub mod artifact;
pub mod latest;
pub mod logo;

use std::future::Future;

use image::{Rgba, RgbaImage};

pub use artifact::{epoch_millis, Artifact, ArtifactFormat};
pub use latest::{Latest, Ticket};

use crate::common::{
    error::{QRError, QRResult},
    metadata::ECLevel,
};

// External collaborators
//------------------------------------------------------------------------------

/// Turns a payload into a visual symbol. Never called with a blank payload.
pub trait SymbolRenderer {
    fn render(
        &self,
        payload: &str,
        options: &RenderOptions,
    ) -> impl Future<Output = QRResult<Artifact>> + Send;
}

/// Locates and decodes a symbol in a raster. `Ok(None)` means no symbol was found.
pub trait SymbolReader {
    fn read(&self, image: &RgbaImage) -> impl Future<Output = QRResult<Option<Vec<u8>>>> + Send;
}

// Color
//------------------------------------------------------------------------------

/// Parses `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
pub fn parse_hex_color(hex: &str) -> QRResult<Rgba<u8>> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || QRError::InvalidColor(hex.to_string());
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return Err(invalid());
    }

    let mut rgba = [0, 0, 0, 255];
    for (i, c) in rgba.iter_mut().enumerate().take(digits.len() / 2) {
        *c = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    Ok(Rgba(rgba))
}

// Render options
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Clone)]
pub struct RenderOptions {
    ec_level: ECLevel,
    pixel_size: u32,
    margin: u32,
    foreground: Rgba<u8>,
    background: Rgba<u8>,
    format: ArtifactFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::M,
            pixel_size: 300,
            margin: 4,
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
            format: ArtifactFormat::Png,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn pixel_size(&mut self, pixel_size: u32) -> &mut Self {
        self.pixel_size = pixel_size;
        self
    }

    pub fn margin(&mut self, margin: u32) -> &mut Self {
        self.margin = margin;
        self
    }

    pub fn foreground(&mut self, color: Rgba<u8>) -> &mut Self {
        self.foreground = color;
        self
    }

    pub fn background(&mut self, color: Rgba<u8>) -> &mut Self {
        self.background = color;
        self
    }

    pub fn colors_hex(&mut self, foreground: &str, background: &str) -> QRResult<&mut Self> {
        self.foreground = parse_hex_color(foreground)?;
        self.background = parse_hex_color(background)?;
        Ok(self)
    }

    pub fn format(&mut self, format: ArtifactFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn get_ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn get_pixel_size(&self) -> u32 {
        self.pixel_size
    }

    pub fn get_margin(&self) -> u32 {
        self.margin
    }

    pub fn get_foreground(&self) -> Rgba<u8> {
        self.foreground
    }

    pub fn get_background(&self) -> Rgba<u8> {
        self.background
    }

    pub fn get_format(&self) -> ArtifactFormat {
        self.format
    }

    pub fn validate(&self) -> QRResult<()> {
        if self.pixel_size == 0 {
            return Err(QRError::InvalidPixelSize(self.pixel_size));
        }
        Ok(())
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Ec level: {}, Size: {}, Margin: {}, Format: {:?} }}",
            self.ec_level, self.pixel_size, self.margin, self.format
        )
    }
}
