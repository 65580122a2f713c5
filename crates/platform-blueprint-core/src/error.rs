use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("Threshold value must be between 0 and 255, got {0}")]
    InvalidThreshold(i64),
    #[error("Invalid dimensions: {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid blueprint string: {0}")]
    Decode(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, BlueprintError>;
