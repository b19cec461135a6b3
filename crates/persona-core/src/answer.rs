//! Typed answer values.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Exact, case-sensitive match on `"yes"` / `"no"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "yes" => Some(YesNo::Yes),
            "no" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }
}

/// Labels accepted by multiple-choice questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Never,
    Sometimes,
    Often,
    VeryLikely,
    Neutral,
    Likely,
    Unlikely,
}

impl Choice {
    pub const ALL: [Choice; 7] = [
        Choice::Never,
        Choice::Sometimes,
        Choice::Often,
        Choice::VeryLikely,
        Choice::Neutral,
        Choice::Likely,
        Choice::Unlikely,
    ];

    /// Exact, case-sensitive match on the label.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::Never => "Never",
            Choice::Sometimes => "Sometimes",
            Choice::Often => "Often",
            Choice::VeryLikely => "Very likely",
            Choice::Neutral => "Neutral",
            Choice::Likely => "Likely",
            Choice::Unlikely => "Unlikely",
        }
    }
}

/// A validated answer. The variant always matches the question's kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Scale(f64),
    YesNo(YesNo),
    Choice(Choice),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display already prints 4.0 as "4" and 3.5 as "3.5"
            Answer::Scale(v) => write!(f, "{}", v),
            Answer::YesNo(v) => f.write_str(v.as_str()),
            Answer::Choice(c) => f.write_str(c.as_str()),
        }
    }
}
