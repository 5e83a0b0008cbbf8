//! Typed quiz options and the group they belong to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A selectable answer. `correct` is fixed by the deck author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub label: String,
    #[serde(default)]
    pub correct: bool,
}

impl QuizOption {
    pub fn new(label: impl Into<String>, correct: bool) -> Self {
        Self {
            label: label.into(),
            correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizGroupError {
    #[error("quiz must have exactly one correct option, found {found}")]
    CorrectCount { found: usize },
}

/// Result of picking an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
}

/// Visual marker shown on an option after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Unmarked,
    Correct,
    Wrong,
}

/// Options of one question. Holds exactly one correct option.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizGroup {
    options: Vec<QuizOption>,
    correct_index: usize,
}

impl QuizGroup {
    pub fn new(options: Vec<QuizOption>) -> Result<Self, QuizGroupError> {
        let mut correct = options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.correct)
            .map(|(index, _)| index);

        match (correct.next(), correct.count()) {
            (Some(correct_index), 0) => Ok(Self {
                options,
                correct_index,
            }),
            (first, rest) => Err(QuizGroupError::CorrectCount {
                found: usize::from(first.is_some()) + rest,
            }),
        }
    }

    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn outcome_of(&self, option: usize) -> Outcome {
        if option == self.correct_index {
            Outcome::Correct
        } else {
            Outcome::Wrong
        }
    }
}
