/// Result export
///
/// PNG encoding of the filtered raster and the suggested download name.

use image::ImageFormat;
use std::io::Cursor;
use std::path::PathBuf;

use crate::error::CodecError;
use crate::filter::{FilterSpec, Intensity};
use crate::state::data::Raster;

/// Encode a raster as PNG bytes
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, CodecError> {
    let mut buf = Cursor::new(Vec::new());
    raster
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(CodecError::Encode)?;
    Ok(buf.into_inner())
}

/// `{family}_{method}_int{intensity}.png`, e.g. `smoothing_average_blur_int5.png`
pub fn download_filename(spec: FilterSpec, intensity: Intensity) -> String {
    let family = spec
        .family()
        .label()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let method = spec.method().label().to_lowercase().replace(' ', "_");

    format!("{}_{}_int{}.png", family, method, intensity)
}

/// Write an encoded payload to disk off the UI thread
pub async fn save_png(bytes: Vec<u8>, path: PathBuf) -> Result<PathBuf, CodecError> {
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| CodecError::Io {
            path: path.clone(),
            source,
        })?;

    log::info!("💾 Saved filtered image to {}", path.display());
    Ok(path)
}
