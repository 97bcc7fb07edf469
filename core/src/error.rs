use thiserror::Error;

/// qrstudio error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown color preset: {0}")]
    UnknownPreset(String),

    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Export is disabled while the text is empty")]
    ExportDisabled,

    #[error("No rendered surface is available to export")]
    SurfaceMissing,

    #[error("Failed to serialize/deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
