use crate::quiz::intent::QuizIntent;
use crate::quiz::state::QuizAnswer;
use crate::ui::mvi::Reducer;

pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizAnswer;
    type Intent = QuizIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Prior marks are dropped wholesale, so reselection never stacks them.
            QuizIntent::Select { option, outcome } => QuizAnswer::Answered {
                selected: option,
                outcome,
            },
        }
    }
}
