/// Interaction controller
///
/// Connects the controls (upload, family, method, intensity, apply) to the
/// filter engine and the session record, and decides what to render.
/// Everything here is synchronous: each event runs to completion before the
/// next one is handled.

use std::sync::Arc;

use super::data::{FilteredResult, Raster, SourceImage};
use super::session::SessionState;
use crate::codec::export::{download_filename, encode_png};
use crate::error::ControllerError;
use crate::filter::{
    compute_parameters, FilterEngine, FilterFamily, FilterMethod, FilterSpec, Intensity,
    ParamDescription,
};

/// Whether a filtered result is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    NoResult,
    HasResult,
}

/// What the UI should draw
#[derive(Debug, Clone)]
pub enum RenderPlan {
    /// Nothing uploaded yet
    AwaitingUpload,
    /// Source loaded, no filter applied yet
    OriginalOnly { original: Arc<Raster> },
    /// Side-by-side comparison plus details and download
    Comparison {
        original: Arc<Raster>,
        filtered: Arc<Raster>,
        details: ParamDescription,
        download_name: String,
    },
}

/// Encoded result ready to hand to a save dialog
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct Controller {
    source: Option<SourceImage>,
    session: SessionState,
    spec: FilterSpec,
    intensity: Intensity,
    engine: FilterEngine,
}

impl Controller {
    pub fn new(spec: FilterSpec, intensity: Intensity) -> Self {
        Self {
            spec,
            intensity,
            ..Self::default()
        }
    }

    // ========== Controls ==========

    /// Switch family; keeps the method if it belongs, else takes the family default
    pub fn select_family(&mut self, family: FilterFamily) {
        if self.spec.family() != family {
            self.spec = FilterSpec::new(family.default_method());
        }
    }

    pub fn select_method(&mut self, method: FilterMethod) {
        self.spec = FilterSpec::new(method);
    }

    pub fn set_intensity(&mut self, requested: i32) {
        self.intensity = Intensity::clamped(requested);
    }

    pub fn spec(&self) -> FilterSpec {
        self.spec
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    // ========== Events ==========

    /// A file was decoded successfully
    pub fn load_source(&mut self, source: SourceImage) {
        self.session.on_new_source(&source.name);
        log::info!(
            "🖼️  Source '{}' ready ({}x{})",
            source.name,
            source.raster.width(),
            source.raster.height()
        );
        self.source = Some(source);
    }

    /// A file could not be decoded. Nothing changes.
    pub fn reject_source(&self, reason: &str) {
        log::warn!("⚠️  Rejected upload: {}", reason);
    }

    /// Run the selected filter on the current source and keep the result
    pub fn apply_filter(&mut self) -> Result<&FilteredResult, ControllerError> {
        let source = self.source.as_ref().ok_or(ControllerError::NoSource)?;

        let (params, description) = compute_parameters(self.spec, self.intensity.get() as i32);
        let filtered = self.engine.apply(&source.raster, &params);
        log::info!(
            "✨ Applied {} at {}/{} to '{}'",
            self.spec.method(),
            self.intensity,
            Intensity::MAX,
            source.name
        );

        self.session.record_result(FilteredResult {
            raster: Arc::new(filtered),
            description,
            spec: self.spec,
            intensity: self.intensity,
        });

        self.session.result().ok_or(ControllerError::NoResult)
    }

    /// PNG payload and suggested name for the stored result
    pub fn download(&self) -> Result<Download, ControllerError> {
        let result = self.session.result().ok_or(ControllerError::NoResult)?;
        Ok(Download {
            file_name: download_filename(result.spec, result.intensity),
            bytes: encode_png(&result.raster)?,
        })
    }

    // ========== Rendering ==========

    pub fn state(&self) -> ViewState {
        if self.session.has_result() {
            ViewState::HasResult
        } else {
            ViewState::NoResult
        }
    }

    pub fn render_plan(&self) -> RenderPlan {
        let Some(source) = &self.source else {
            return RenderPlan::AwaitingUpload;
        };

        match self.session.result() {
            None => RenderPlan::OriginalOnly {
                original: Arc::clone(&source.raster),
            },
            Some(result) => RenderPlan::Comparison {
                original: Arc::clone(&source.raster),
                filtered: Arc::clone(&result.raster),
                details: result.description.clone(),
                download_name: download_filename(result.spec, result.intensity),
            },
        }
    }

    #[cfg(test)]
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    #[cfg(test)]
    pub fn session(&self) -> &SessionState {
        &self.session
    }
}
