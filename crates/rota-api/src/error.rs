//! Error taxonomy for planning backend calls.

use thiserror::Error;

/// Errors returned by [`crate::PlannerClient`].
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The station directory could not be fetched. Fatal to the render
    /// cycle: nothing can be drawn without coordinates.
    #[error("station directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// One route's expansion failed. Scoped to that route only; other
    /// routes are unaffected.
    #[error("route expansion failed: {0}")]
    ExpansionFailed(String),
}
