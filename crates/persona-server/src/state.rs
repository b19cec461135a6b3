use std::sync::Arc;

use persona_core::TextGenerator;

/// Shared, read-only state for all requests.
pub struct ServerState {
    pub generator: Arc<dyn TextGenerator>,
}

impl ServerState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}
