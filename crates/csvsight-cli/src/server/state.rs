//! Application state for the web server.

use std::sync::Arc;

use csvsight::{AnalysisProvider, Csvsight};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The analysis pipeline, provider attached. Read-only per
    /// request; no cross-request state exists.
    pub pipeline: Arc<Csvsight>,
}

impl AppState {
    /// Create new application state around a provider.
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            pipeline: Arc::new(Csvsight::new().with_shared_provider(provider)),
        }
    }
}
