//! Personality report generation: validate, build prompt, call the model.

use persona_core::{build_prompt, validate, RawResponses, TextGenerator};
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::AppError;

/// Runs the full pipeline for one request.
///
/// No prompt is built unless every answer is valid, and the model is called once.
pub async fn generate_report(
    generator: &dyn TextGenerator,
    raw: &RawResponses,
) -> Result<String, AppError> {
    let span = info_span!("evaluate", request_id = %Uuid::new_v4(), answers = raw.len());

    async {
        let responses = validate(raw).map_err(|e| {
            debug!("Rejected responses: {}", e);
            AppError::from(e)
        })?;

        let prompt = build_prompt(&responses);
        debug!(prompt_len = prompt.len(), "Prompt built");

        let report = generator.generate(&prompt).await.map_err(|e| {
            error!("Error fetching model: {}", e);
            AppError::from(e)
        })?;

        info!("Generated report ({} chars)", report.len());
        Ok(report)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use persona_core::ModelError;
    use serde_json::json;

    use super::*;

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
            Ok(prompt.to_string())
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn responses(value: serde_json::Value) -> RawResponses {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_rejection_is_warned_once() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let result = generate_report(&EchoGenerator, &responses(json!({"2": "Yes"}))).await;
        assert_eq!(result.unwrap_err(), AppError::InvalidResponses);

        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.lines().filter(|l| l.contains("WARN")).count(), 1, "logs: {logs}");
        assert!(logs.contains("expected=yesno"), "logs: {logs}");
        assert!(!logs.contains("Rejected responses"), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_valid_responses_reach_generator() {
        let report = generate_report(&EchoGenerator, &responses(json!({"1": 4})))
            .await
            .unwrap();
        assert!(report.contains("Question 1: "));
    }
}
