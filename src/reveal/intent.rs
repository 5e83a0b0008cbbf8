use std::time::Instant;

use crate::reveal::state::RevealScript;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RevealIntent {
    /// "Generate" pressed on the key-point panel.
    BeginDraft,
    /// Draft delay elapsed; the editor now holds the prompt.
    DraftReady,
    /// "Generate" pressed on the prompt panel.
    BeginSpeech { script: RevealScript },
    /// Start delay elapsed.
    StartSpeech,
    /// One response character.
    TypeSpeech,
    /// Pause elapsed; show the evaluation panel.
    RevealEvaluation { at: Instant },
    /// One evaluation character.
    TypeEvaluation { at: Instant },
    /// Animation frame of the score ring.
    ScoreFrame { at: Instant },
    /// "Try again".
    Reset,
}

impl Intent for RevealIntent {}
