use crate::quiz::model::{OptionMark, Outcome, QuizGroup};
use crate::ui::mvi::UiState;

/// Answer state of one quiz group.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuizAnswer {
    #[default]
    Unanswered,
    Answered {
        selected: usize,
        outcome: Outcome,
    },
}

impl UiState for QuizAnswer {}

impl QuizAnswer {
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered { .. })
    }

    /// Outcome used to style the explanation panel. `None` keeps it hidden.
    pub fn explanation(&self) -> Option<Outcome> {
        match self {
            Self::Answered { outcome, .. } => Some(*outcome),
            Self::Unanswered => None,
        }
    }

    /// Marks for every option of `group`.
    ///
    /// The chosen option carries the outcome; after a wrong pick the
    /// correct option is marked too.
    pub fn marks(&self, group: &QuizGroup) -> Vec<OptionMark> {
        let mut marks = vec![OptionMark::Unmarked; group.len()];
        if let Self::Answered { selected, outcome } = self {
            match outcome {
                Outcome::Correct => marks[*selected] = OptionMark::Correct,
                Outcome::Wrong => {
                    marks[*selected] = OptionMark::Wrong;
                    marks[group.correct_index()] = OptionMark::Correct;
                }
            }
        }
        marks
    }
}
