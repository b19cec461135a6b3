//! Core domain types for persona.
//!
//! This crate holds everything between the HTTP layer and the generative model:
//!
//! - [`catalog`] — the fixed, 1-based list of assessment [`Question`]s
//! - [`validate`] — turns an untyped [`RawResponses`] payload into a typed [`ResponseSet`]
//! - [`build_prompt`] — renders a validated [`ResponseSet`] into the model prompt
//! - [`TextGenerator`] — the seam to the external text model
//!
//! # Example
//!
//! ```rust
//! use persona_core::{build_prompt, validate, RawResponses};
//!
//! let raw: RawResponses = serde_json::from_str(r#"{"1": 4, "2": "yes"}"#).unwrap();
//! let responses = validate(&raw).unwrap();
//! let prompt = build_prompt(&responses);
//!
//! assert!(prompt.contains("Question 2: Do you feel energized"));
//! ```

pub mod answer;
pub mod catalog;
pub mod prompt;
pub mod sample;
pub mod validate;

use async_trait::async_trait;
use thiserror::Error;

pub use answer::{Answer, Choice, YesNo};
pub use catalog::{question_at, Question, QuestionKind};
pub use prompt::{build_prompt, REPORT_SCHEMA};
pub use sample::sample_responses;
pub use validate::{is_valid, validate, RawResponses, ResponseEntry, ResponseSet};

/// Reasons a submitted response set is rejected.
///
/// The detail is for operators only; clients get a fixed message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Key is not an integer, or no question exists at that index.
    #[error("unknown question index: {0}")]
    UnknownQuestion(String),

    /// Two keys resolve to the same catalog index (e.g. "1" and "01").
    #[error("question {0} answered more than once")]
    DuplicateIndex(usize),

    /// Value does not satisfy the rule for the question's kind.
    #[error("invalid {kind} response for question {index}: {received}")]
    InvalidAnswer {
        index: usize,
        kind: QuestionKind,
        received: serde_json::Value,
    },
}

/// Errors returned by a [`TextGenerator`].
#[derive(Error, Debug)]
pub enum ModelError {
    /// Transport failure, including timeouts.
    #[error("model request failed: {0}")]
    Request(String),

    /// The model API answered with a non-success status.
    #[error("model API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("failed to parse model response: {0}")]
    Parse(String),

    /// The response carried no retrievable text.
    #[error("model response is malformed or missing text")]
    MissingText,

    /// No credentials were configured for the model.
    #[error("model client not configured: {0}")]
    NotConfigured(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Parse(err.to_string())
    }
}

/// An opaque text-completion service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`. Any error is terminal for the request.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
