/// Image codec module
///
/// This module handles:
/// - Decoding uploaded files into RGB rasters (loader.rs)
/// - Encoding results to PNG and naming the download (export.rs)

pub mod export;
pub mod loader;

/// Extensions offered by the upload dialog
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tif", "tiff"];
