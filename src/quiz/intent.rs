use crate::quiz::model::Outcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QuizIntent {
    /// User picked an option. Replaces any earlier answer in the group.
    Select { option: usize, outcome: Outcome },
}

impl Intent for QuizIntent {}
