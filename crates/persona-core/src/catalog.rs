//! The fixed question catalog.
//!
//! Questions are addressed 1-based: index `1` is the first entry, `20` the last.

use std::fmt;

/// Expected answer shape for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// Number from 1 to 5 inclusive.
    Scale,
    /// Exactly `"yes"` or `"no"`.
    YesNo,
    /// One of the [`Choice`](crate::Choice) labels.
    MultipleChoice,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Scale => "scale",
            QuestionKind::YesNo => "yesno",
            QuestionKind::MultipleChoice => "multiple-choice",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single assessment question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub kind: QuestionKind,
}

const fn question(text: &'static str, kind: QuestionKind) -> Question {
    Question { text, kind }
}

use QuestionKind::{MultipleChoice, Scale, YesNo};

/// Number of questions in the catalog.
pub const QUESTION_COUNT: usize = 20;

static QUESTIONS: [Question; QUESTION_COUNT] = [
    question("On a scale of 1 to 5, how much do you enjoy participating in group discussions?", Scale),
    question("Do you feel energized after spending time with large groups of people?", YesNo),
    question("Do you prefer working alone rather than in teams?", YesNo),
    question("On a scale of 1 to 5, how much do you focus on facts and details when learning?", Scale),
    question("Do you enjoy working on theoretical or abstract problems more than practical ones?", YesNo),
    question("How often do you look for patterns or deeper meaning in what you're learning?", MultipleChoice),
    question("On a scale of 1 to 5, how much do you enjoy learning new ideas or exploring different perspectives?", Scale),
    question("Do you prefer sticking to traditional methods rather than experimenting with new ways?", YesNo),
    question("How likely are you to try something unfamiliar in your studies or work?", MultipleChoice),
    question("On a scale of 1 to 5, how organized and structured are you in managing your tasks?", Scale),
    question("Do you often plan ahead and set goals for yourself?", YesNo),
    question("How often do you procrastinate on tasks or assignments?", MultipleChoice),
    question("On a scale of 1 to 5, how much do you enjoy learning by doing, such as through hands-on activities or projects?", Scale),
    question("Do you prefer to think through problems before trying to solve them?", YesNo),
    question("Do you prefer to try out new learning material immediately rather than reflecting on it first?", YesNo),
    question("On a scale of 1 to 5, how often do you take the lead in group projects?", Scale),
    question("Do you enjoy being the one to direct and guide others in class activities?", YesNo),
    question("On a scale of 1 to 5, how often do you ask questions during class?", Scale),
    question("Do you enjoy self-paced learning, where you have control over how and when you study?", YesNo),
    question("On a scale of 1 to 5, how much do you enjoy learning in group settings?", Scale),
];

/// Returns the question at a 1-based `index`, or `None` when out of range.
pub fn question_at(index: usize) -> Option<&'static Question> {
    index.checked_sub(1).and_then(|i| QUESTIONS.get(i))
}
