/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the codec layer, the filter engine and the UI layer.

use std::sync::Arc;

use crate::filter::{FilterSpec, Intensity, ParamDescription};

/// 8-bit, 3-channel pixel grid. Never mutated once produced.
pub type Raster = image::RgbImage;

/// A decoded upload
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Filename only (e.g., "cat.png"); identifies the upload
    pub name: String,
    /// Decoded RGB pixels
    pub raster: Arc<Raster>,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, raster: Raster) -> Self {
        Self {
            name: name.into(),
            raster: Arc::new(raster),
        }
    }
}

/// The output of one "Apply Filter" press
#[derive(Debug, Clone)]
pub struct FilteredResult {
    /// Filtered pixels, same dimensions as the source
    pub raster: Arc<Raster>,
    /// Parameter listing shown next to the comparison
    pub description: ParamDescription,
    /// Filter that produced the raster
    pub spec: FilterSpec,
    /// Clamped intensity the filter ran at
    pub intensity: Intensity,
}
