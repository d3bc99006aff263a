/// Per-session record of the last filter result
///
/// Holds the name of the last uploaded source and at most one filtered
/// result. The result (raster + description) is stored as a single value,
/// so the two are always present or absent together.

use super::data::FilteredResult;

#[derive(Debug, Default)]
pub struct SessionState {
    source_name: Option<String>,
    result: Option<FilteredResult>,
}

impl SessionState {
    /// Start a session with no source and no result
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an upload. A different name drops the stored result.
    pub fn on_new_source(&mut self, name: &str) {
        if self.source_name.as_deref() == Some(name) {
            return;
        }

        if self.result.take().is_some() {
            log::debug!("🧹 New source '{}', clearing previous result", name);
        }
        self.source_name = Some(name.to_string());
    }

    /// Store a result, replacing whatever was there (no history)
    pub fn record_result(&mut self, result: FilteredResult) {
        self.result = Some(result);
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&FilteredResult> {
        self.result.as_ref()
    }

    #[cfg(test)]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}
