//! Prompt construction for the personality report.

use crate::validate::ResponseSet;

const HEADER: &str = "Based on the following responses from a personality assessment:";

/// Output format the model is asked to follow. Forwarded verbatim, never parsed.
pub const REPORT_SCHEMA: &str = r#"Generate a detailed personality profile. Provide the results in the following format:
{
  "mbti": {
    "type": "<MBTI_TYPE>",
    "dimensions": [
      { "name": "Extraversion", "value": <percentage> },
      { "name": "Intuition", "value": <percentage> },
      { "name": "Feeling", "value": <percentage> },
      { "name": "Perceiving", "value": <percentage> }
    ]
  },
  "bigFive": [
    { "name": "Openness", "value": <percentage> },
    { "name": "Conscientiousness", "value": <percentage> },
    { "name": "Extraversion", "value": <percentage> },
    { "name": "Agreeableness", "value": <percentage> },
    { "name": "Neuroticism", "value": <percentage> }
  ],
  "learningStyles": [
    { "name": "Social Learner", "value": <percentage> },
    { "name": "Active Learner", "value": <percentage> },
    { "name": "Reflective Learner", "value": <percentage> },
    { "name": "Independent Learner", "value": <percentage> }
  ],
  "socialLearning": <percentage>,
  "independentLearning": <percentage>,
  "neuroticismScore": <SCORE>,
  "leadershipPotential": <true/false>,
  "collaborationSuitability": <true/false>
}"#;

/// Renders one `Question {index}: {text} - Response: {answer}` line per entry,
/// followed by [`REPORT_SCHEMA`].
pub fn build_prompt(responses: &ResponseSet) -> String {
    let lines: Vec<String> = responses
        .iter()
        .map(|(index, entry)| {
            format!(
                "Question {}: {} - Response: {}",
                index, entry.question.text, entry.answer
            )
        })
        .collect();

    format!("{}\n{}\n\n{}", HEADER, lines.join("\n"), REPORT_SCHEMA)
}
