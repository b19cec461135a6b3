//! Generative model clients for persona.
//!
//! Every client implements [`persona_core::TextGenerator`], so the server only
//! ever holds an `Arc<dyn TextGenerator>`.

mod gemini;

use std::sync::Arc;

use persona_config::ModelSettings;
use persona_core::{ModelError, TextGenerator};

pub use gemini::GeminiClient;

/// Builds the generator described by `settings`.
pub fn generator_from_settings(settings: &ModelSettings) -> Result<Arc<dyn TextGenerator>, ModelError> {
    Ok(Arc::new(GeminiClient::new(settings)?))
}
