//! Response validation.
//!
//! A request carries an untyped JSON object keyed by question index. It is
//! accepted as a whole or rejected as a whole; there is no partial result.

use std::collections::btree_map::{self, BTreeMap};

use serde_json::Value;
use tracing::warn;

use crate::answer::{Answer, Choice, YesNo};
use crate::catalog::{self, Question, QuestionKind};
use crate::ValidationError;

/// Untyped responses as received on the wire.
pub type RawResponses = serde_json::Map<String, Value>;

/// One validated answer together with the question it answers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseEntry {
    pub question: &'static Question,
    pub answer: Answer,
}

/// Validated responses, ordered by 1-based catalog index.
///
/// Only [`validate`] constructs this, so every entry refers to an existing question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    entries: BTreeMap<usize, ResponseEntry>,
}

impl ResponseSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResponseEntry> {
        self.entries.get(&index)
    }

    /// Iterates `(index, entry)` in ascending index order.
    pub fn iter(&self) -> btree_map::Iter<'_, usize, ResponseEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = (&'a usize, &'a ResponseEntry);
    type IntoIter = btree_map::Iter<'a, usize, ResponseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Validates every entry of `raw`, stopping at the first failure.
pub fn validate(raw: &RawResponses) -> Result<ResponseSet, ValidationError> {
    let mut entries = BTreeMap::new();

    for (key, value) in raw {
        let Some((index, question)) = resolve(key) else {
            warn!(index = %key, "Invalid question index");
            return Err(ValidationError::UnknownQuestion(key.clone()));
        };

        let Some(answer) = check_answer(question.kind, value) else {
            warn!(
                index,
                expected = %question.kind,
                received = %value,
                "Invalid response value"
            );
            return Err(ValidationError::InvalidAnswer {
                index,
                kind: question.kind,
                received: value.clone(),
            });
        };

        if entries.insert(index, ResponseEntry { question, answer }).is_some() {
            warn!(index, "Duplicate question index");
            return Err(ValidationError::DuplicateIndex(index));
        }
    }

    Ok(ResponseSet { entries })
}

/// Returns true if [`validate`] would accept `raw`.
pub fn is_valid(raw: &RawResponses) -> bool {
    validate(raw).is_ok()
}

fn resolve(key: &str) -> Option<(usize, &'static Question)> {
    let index: usize = key.parse().ok()?;
    catalog::question_at(index).map(|q| (index, q))
}

fn check_answer(kind: QuestionKind, value: &Value) -> Option<Answer> {
    match kind {
        QuestionKind::Scale => value
            .as_f64()
            .filter(|v| (1.0..=5.0).contains(v))
            .map(Answer::Scale),
        QuestionKind::YesNo => value.as_str().and_then(YesNo::parse).map(Answer::YesNo),
        QuestionKind::MultipleChoice => value.as_str().and_then(Choice::parse).map(Answer::Choice),
    }
}
