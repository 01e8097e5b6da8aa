//! Externally observable output of the render pipeline.

use rota_core::{Bounds, Polyline, Station, DEFAULT_REGION};

/// Warning shown when the station directory cannot be loaded.
pub const DIRECTORY_WARNING: &str = "Station directory could not be loaded";

/// Snapshot published on every render cycle transition.
///
/// This is the only thing callers observe; errors never escape the
/// pipeline in any other form. `warning` is set exactly when at least one
/// route failed to expand, or when the directory fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub stations: Vec<Station>,
    pub polylines: Vec<Polyline>,
    pub viewport: Bounds,
    pub loading: bool,
    pub warning: Option<String>,
}

impl RenderState {
    /// State before any input, and after a clear.
    pub fn cleared() -> Self {
        Self {
            stations: Vec::new(),
            polylines: Vec::new(),
            viewport: DEFAULT_REGION,
            loading: false,
            warning: None,
        }
    }

    /// Terminal state for a cycle whose directory fetch failed.
    pub fn directory_failed() -> Self {
        Self {
            warning: Some(DIRECTORY_WARNING.to_string()),
            ..Self::cleared()
        }
    }

    /// True when this cycle failed fatally (directory unavailable), as
    /// opposed to a partial failure where some routes still rendered.
    pub fn is_directory_failure(&self) -> bool {
        self.warning.as_deref() == Some(DIRECTORY_WARNING)
    }
}
