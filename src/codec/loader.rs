/// Upload decoder
///
/// Turns the bytes of an uploaded file into a 3-channel RGB raster.
/// Alpha is dropped and grayscale is expanded to RGB.

use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::CodecError;
use crate::state::data::SourceImage;

/// Read and decode an image file off the UI thread
pub async fn load_source(path: PathBuf) -> Result<SourceImage, CodecError> {
    // Spawn blocking because decoding is CPU-intensive
    task::spawn_blocking(move || load_source_blocking(&path))
        .await
        .map_err(|e| CodecError::Task(e.to_string()))?
}

/// Blocking implementation of file loading
pub fn load_source_blocking(path: &Path) -> Result<SourceImage, CodecError> {
    let bytes = std::fs::read(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    decode_source(name, &bytes)
}

/// Decode in-memory bytes; the format is guessed from the content
pub fn decode_source(name: String, bytes: &[u8]) -> Result<SourceImage, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Empty(name));
    }

    let decoded = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(source) => return Err(CodecError::Decode { name, source }),
    };

    let raster = decoded.to_rgb8();
    log::info!(
        "📷 Loaded '{}': {}x{} ({:?})",
        name,
        raster.width(),
        raster.height(),
        decoded.color()
    );

    Ok(SourceImage::new(name, raster))
}
