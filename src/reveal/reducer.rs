//! Reducer for the scripted reveal sequence.

use std::time::Instant;

use crate::reveal::intent::RevealIntent;
use crate::reveal::score::ScoreAnimation;
use crate::reveal::state::{RevealStage, RevealState};
use crate::reveal::stream::TextStream;
use crate::ui::mvi::Reducer;

pub struct RevealReducer;

impl Reducer for RevealReducer {
    type State = RevealState;
    type Intent = RevealIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RevealIntent::BeginDraft => match state.stage {
                RevealStage::Idle | RevealStage::DraftReady => RevealState {
                    stage: RevealStage::Drafting,
                    ..state
                },
                _ => state,
            },

            // A response run may already have started while drafting; keep its stage.
            RevealIntent::DraftReady => RevealState {
                stage: if state.stage == RevealStage::Drafting {
                    RevealStage::DraftReady
                } else {
                    state.stage
                },
                has_draft: true,
                ..state
            },

            RevealIntent::BeginSpeech { script } => {
                if state.stage.is_responding() {
                    return state;
                }
                RevealState {
                    stage: RevealStage::PreparingSpeech,
                    speech: TextStream::new(script.response.clone()),
                    evaluation: TextStream::new(script.evaluation.clone()),
                    script: Some(script),
                    evaluation_visible: false,
                    score: None,
                    score_frame: None,
                    ..state
                }
            }

            RevealIntent::StartSpeech => match state.stage {
                RevealStage::PreparingSpeech => {
                    let stage = if state.speech.is_complete() {
                        RevealStage::PausingBeforeEval
                    } else {
                        RevealStage::StreamingSpeech
                    };
                    RevealState { stage, ..state }
                }
                _ => state,
            },

            RevealIntent::TypeSpeech => match state.stage {
                RevealStage::StreamingSpeech => {
                    let mut state = state;
                    state.speech.advance();
                    if state.speech.is_complete() {
                        state.stage = RevealStage::PausingBeforeEval;
                    }
                    state
                }
                _ => state,
            },

            RevealIntent::RevealEvaluation { at } => match state.stage {
                RevealStage::PausingBeforeEval => {
                    let mut state = RevealState {
                        evaluation_visible: true,
                        stage: RevealStage::StreamingEval,
                        ..state
                    };
                    if state.evaluation.is_complete() {
                        state = start_score(state, at);
                    }
                    state
                }
                _ => state,
            },

            RevealIntent::TypeEvaluation { at } => match state.stage {
                RevealStage::StreamingEval => {
                    let mut state = state;
                    state.evaluation.advance();
                    if state.evaluation.is_complete() {
                        state = start_score(state, at);
                    }
                    state
                }
                _ => state,
            },

            RevealIntent::ScoreFrame { at } => match (state.stage, state.score) {
                (RevealStage::AnimatingScore, Some(animation)) => {
                    let frame = animation.frame_at(at);
                    RevealState {
                        stage: if frame.is_final() {
                            RevealStage::Done
                        } else {
                            RevealStage::AnimatingScore
                        },
                        score_frame: Some(frame),
                        ..state
                    }
                }
                _ => state,
            },

            RevealIntent::Reset => RevealState {
                stage: if state.has_draft {
                    RevealStage::DraftReady
                } else {
                    RevealStage::Idle
                },
                has_draft: state.has_draft,
                ..RevealState::default()
            },
        }
    }
}

fn start_score(state: RevealState, at: Instant) -> RevealState {
    let animation = state
        .script
        .as_ref()
        .map(|script| ScoreAnimation::new(script.score, at, script.score_duration));
    RevealState {
        stage: RevealStage::AnimatingScore,
        score: animation,
        score_frame: animation.map(|animation| animation.frame_at(at)),
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::state::RevealScript;
    use std::time::Duration;

    fn script(response: &str, evaluation: &str) -> RevealScript {
        RevealScript {
            response: response.to_string(),
            evaluation: evaluation.to_string(),
            score: 7.0,
            score_duration: Duration::from_millis(1000),
        }
    }

    fn reduce_all(state: RevealState, intents: Vec<RevealIntent>) -> RevealState {
        intents.into_iter().fold(state, RevealReducer::reduce)
    }

    fn draft_ready() -> RevealState {
        reduce_all(
            RevealState::default(),
            vec![RevealIntent::BeginDraft, RevealIntent::DraftReady],
        )
    }

    #[test]
    fn draft_moves_idle_to_ready() {
        let state = RevealReducer::reduce(RevealState::default(), RevealIntent::BeginDraft);
        assert_eq!(state.stage, RevealStage::Drafting);
        let state = RevealReducer::reduce(state, RevealIntent::DraftReady);
        assert_eq!(state.stage, RevealStage::DraftReady);
        assert!(state.has_draft);
    }

    #[test]
    fn speech_streams_in_exactly_len_ticks() {
        let text = "Hello, world";
        let mut state = reduce_all(
            draft_ready(),
            vec![
                RevealIntent::BeginSpeech {
                    script: script(text, "ok"),
                },
                RevealIntent::StartSpeech,
            ],
        );
        assert_eq!(state.stage, RevealStage::StreamingSpeech);

        let mut ticks = 0;
        while state.stage == RevealStage::StreamingSpeech {
            state = RevealReducer::reduce(state, RevealIntent::TypeSpeech);
            ticks += 1;
        }
        assert_eq!(ticks, text.chars().count());
        assert_eq!(state.speech.revealed(), text);
        assert_eq!(state.stage, RevealStage::PausingBeforeEval);
        assert!(!state.evaluation_visible);
    }

    #[test]
    fn evaluation_completion_starts_score() {
        let at = Instant::now();
        let mut state = reduce_all(
            draft_ready(),
            vec![
                RevealIntent::BeginSpeech {
                    script: script("a", "bc"),
                },
                RevealIntent::StartSpeech,
                RevealIntent::TypeSpeech,
                RevealIntent::RevealEvaluation { at },
            ],
        );
        assert!(state.evaluation_visible);
        assert_eq!(state.stage, RevealStage::StreamingEval);

        state = RevealReducer::reduce(state, RevealIntent::TypeEvaluation { at });
        assert_eq!(state.stage, RevealStage::StreamingEval);
        state = RevealReducer::reduce(state, RevealIntent::TypeEvaluation { at });
        assert_eq!(state.stage, RevealStage::AnimatingScore);
        assert_eq!(state.evaluation.revealed(), "bc");
        assert_eq!(state.score_label(), "0");
    }

    #[test]
    fn score_frames_finish_at_target() {
        let at = Instant::now();
        let mut state = reduce_all(
            draft_ready(),
            vec![
                RevealIntent::BeginSpeech {
                    script: script("", ""),
                },
                RevealIntent::StartSpeech,
                RevealIntent::RevealEvaluation { at },
            ],
        );
        assert_eq!(state.stage, RevealStage::AnimatingScore);

        state = RevealReducer::reduce(
            state,
            RevealIntent::ScoreFrame {
                at: at + Duration::from_millis(500),
            },
        );
        assert_eq!(state.stage, RevealStage::AnimatingScore);
        assert_eq!(state.score_label(), "3.5");

        state = RevealReducer::reduce(
            state,
            RevealIntent::ScoreFrame {
                at: at + Duration::from_millis(1000),
            },
        );
        assert_eq!(state.stage, RevealStage::Done);
        assert_eq!(state.score_label(), "7");
        assert!((state.ring_fill() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn begin_speech_ignored_while_responding() {
        let state = reduce_all(
            draft_ready(),
            vec![
                RevealIntent::BeginSpeech {
                    script: script("first", ""),
                },
                RevealIntent::StartSpeech,
                RevealIntent::TypeSpeech,
            ],
        );
        let again = RevealReducer::reduce(
            state.clone(),
            RevealIntent::BeginSpeech {
                script: script("second", ""),
            },
        );
        assert_eq!(again, state);
    }

    #[test]
    fn draft_ready_does_not_rewind_running_response() {
        let state = reduce_all(
            RevealState::default(),
            vec![
                RevealIntent::BeginDraft,
                RevealIntent::BeginSpeech {
                    script: script("x", ""),
                },
                RevealIntent::DraftReady,
            ],
        );
        assert_eq!(state.stage, RevealStage::PreparingSpeech);
        assert!(state.has_draft);
    }

    #[test]
    fn reset_clears_output_and_keeps_draft() {
        let at = Instant::now();
        let state = reduce_all(
            draft_ready(),
            vec![
                RevealIntent::BeginSpeech {
                    script: script("", ""),
                },
                RevealIntent::StartSpeech,
                RevealIntent::RevealEvaluation { at },
                RevealIntent::ScoreFrame {
                    at: at + Duration::from_secs(2),
                },
                RevealIntent::Reset,
            ],
        );
        assert_eq!(state.stage, RevealStage::DraftReady);
        assert!(state.has_draft);
        assert_eq!(state.speech.revealed(), "");
        assert_eq!(state.evaluation.revealed(), "");
        assert!(!state.evaluation_visible);
        assert_eq!(state.score_label(), "");
    }

    #[test]
    fn stale_ticks_after_reset_are_ignored() {
        let state = reduce_all(
            draft_ready(),
            vec![
                RevealIntent::BeginSpeech {
                    script: script("abc", ""),
                },
                RevealIntent::StartSpeech,
                RevealIntent::TypeSpeech,
                RevealIntent::Reset,
                RevealIntent::TypeSpeech,
            ],
        );
        assert_eq!(state.speech.revealed(), "");
        assert_eq!(state.stage, RevealStage::DraftReady);
    }
}
