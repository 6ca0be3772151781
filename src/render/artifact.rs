use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use time::OffsetDateTime;

use crate::common::{download::DownloadFile, error::QRResult};

// Artifact
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum ArtifactFormat {
    #[default]
    Png,
    Svg,
}

/// A rendered symbol as produced by a renderer.
#[derive(Debug, PartialEq, Clone)]
pub enum Artifact {
    Raster(RgbaImage),
    Vector(String),
}

impl Artifact {
    pub fn format(&self) -> ArtifactFormat {
        match self {
            Self::Raster(_) => ArtifactFormat::Png,
            Self::Vector(_) => ArtifactFormat::Svg,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self.format() {
            ArtifactFormat::Png => "png",
            ArtifactFormat::Svg => "svg",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self.format() {
            ArtifactFormat::Png => "image/png",
            ArtifactFormat::Svg => "image/svg+xml",
        }
    }

    pub fn file_name(&self, millis: i128) -> String {
        format!("qr-code-{millis}.{}", self.extension())
    }

    pub fn export(&self) -> QRResult<DownloadFile> {
        self.export_at(epoch_millis())
    }

    pub fn export_at(&self, millis: i128) -> QRResult<DownloadFile> {
        let contents = match self {
            Self::Raster(img) => {
                let mut bytes = Vec::new();
                img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
                bytes
            }
            Self::Vector(svg) => svg.as_bytes().to_vec(),
        };
        Ok(DownloadFile::new(&self.file_name(millis), self.media_type(), contents))
    }
}

pub fn epoch_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}
