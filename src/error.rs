/// Error types
///
/// Codec and config failures are surfaced to the user as a status line;
/// none of them abort the application.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{name}' is not a readable image: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("'{0}' is empty")]
    Empty(String),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Background task failed: {0}")]
    Task(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Please upload an image to start.")]
    NoSource,

    #[error("No filtered image yet. Click Apply Filter first.")]
    NoResult,

    #[error(transparent)]
    Codec(#[from] CodecError),
}
