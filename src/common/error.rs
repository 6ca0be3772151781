use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum QRError {
    // Payload builder & render options
    #[error("Empty payload")]
    EmptyPayload,
    #[error("Invalid error correction level: {0}")]
    InvalidECLevel(String),
    #[error("Invalid pixel size: {0}")]
    InvalidPixelSize(u32),
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    // External collaborators
    #[error("Renderer failed: {0}")]
    RenderFailed(String),
    #[error("Reader failed: {0}")]
    ReadFailed(String),
    #[error("Symbol not found")]
    SymbolNotFound,

    // Action dispatcher
    #[error("Malformed Wi-Fi config")]
    MalformedWifi,
    #[error("Malformed geo location")]
    MalformedGeo,
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),
    #[error("Effect failed: {0}")]
    EffectFailed(String),

    // Artifact export
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type QRResult<T> = Result<T, QRError>;
