use std::sync::Arc;

use crate::generation::generator::PostGenerator;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Constructed once in `main` — handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation pipeline. Production: `GeminiPostGenerator`.
    /// Tests swap in a stub to observe invocations.
    pub generator: Arc<dyn PostGenerator>,
}
