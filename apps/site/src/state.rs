use std::sync::Arc;

use crate::source::DocumentSource;
use crate::templates::Templates;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: every request is an isolated page load.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DocumentSource>,
    pub templates: Arc<Templates>,
}
