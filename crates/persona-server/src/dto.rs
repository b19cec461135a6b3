use persona_core::RawResponses;
use serde::{Deserialize, Serialize};

// === HTTP DTOs ===

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub responses: RawResponses,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}
