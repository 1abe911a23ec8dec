use std::sync::Arc;

use careline_client::api::RecordClient;

/// Shared application state, injected into route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordClient>,
}
