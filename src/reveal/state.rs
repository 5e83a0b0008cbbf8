use std::time::Duration;

use crate::reveal::score::{ScoreAnimation, ScoreFrame};
use crate::reveal::stream::TextStream;
use crate::ui::mvi::UiState;

/// Stage of the scripted sequence. Stages advance strictly in this order;
/// only a reset moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealStage {
    #[default]
    Idle,
    Drafting,
    DraftReady,
    PreparingSpeech,
    StreamingSpeech,
    PausingBeforeEval,
    StreamingEval,
    AnimatingScore,
    Done,
}

impl RevealStage {
    /// The response run is underway or finished; the generate button stays locked.
    pub fn is_responding(&self) -> bool {
        matches!(
            self,
            Self::PreparingSpeech
                | Self::StreamingSpeech
                | Self::PausingBeforeEval
                | Self::StreamingEval
                | Self::AnimatingScore
                | Self::Done
        )
    }
}

/// Canned content of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealScript {
    pub response: String,
    pub evaluation: String,
    pub score: f64,
    pub score_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealState {
    pub stage: RevealStage,
    /// The prompt editor holds a generated draft.
    pub has_draft: bool,
    pub script: Option<RevealScript>,
    pub speech: TextStream,
    pub evaluation: TextStream,
    pub evaluation_visible: bool,
    pub score: Option<ScoreAnimation>,
    pub score_frame: Option<ScoreFrame>,
}

impl UiState for RevealState {}

impl RevealState {
    /// Score text shown in the ring. Empty until the animation starts.
    pub fn score_label(&self) -> String {
        self.score_frame
            .map(|frame| frame.label())
            .unwrap_or_default()
    }

    pub fn ring_fill(&self) -> f64 {
        self.score_frame.map(|frame| frame.ring).unwrap_or(0.0)
    }
}
