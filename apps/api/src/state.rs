use std::sync::Arc;

use crate::generation::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend client, constructed once at startup and reused for
    /// every call. Swappable behind the trait for tests.
    pub generator: Arc<dyn TextGenerator>,
}
