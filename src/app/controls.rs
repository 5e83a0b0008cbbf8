//! Focusable controls of each section.

use crate::deck::{DeckVariant, SectionKind, SectionSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Quiz option by index.
    Option(usize),
    Next,
    Back,
    /// Quiz "Skip"; shown as "Continue" once promoted.
    Skip,
    PointInput,
    GeneratePrompt,
    PromptEditor,
    GenerateSpeech,
    TryAgain,
    Done,
}

impl Control {
    pub fn is_text_field(&self) -> bool {
        matches!(self, Self::PointInput | Self::PromptEditor)
    }
}

/// Controls of section `index`, in focus order. Fade decks have none.
pub fn controls_for(section: &SectionSpec, index: usize, variant: DeckVariant) -> Vec<Control> {
    if variant == DeckVariant::Fade {
        return Vec::new();
    }
    let mut controls = match &section.kind {
        SectionKind::Intro => vec![Control::Next],
        SectionKind::Content => vec![Control::Next],
        SectionKind::Quiz { options, .. } => {
            let mut controls: Vec<Control> = (0..options.len()).map(Control::Option).collect();
            controls.push(Control::Skip);
            controls
        }
        SectionKind::PointInput { .. } => vec![Control::PointInput, Control::GeneratePrompt],
        SectionKind::EditPrompt => vec![Control::PromptEditor, Control::GenerateSpeech],
        SectionKind::Result { try_again, done } => {
            let mut controls = Vec::new();
            if *try_again {
                controls.push(Control::TryAgain);
            }
            if *done {
                controls.push(Control::Done);
            }
            return controls;
        }
    };
    if index > 0 && !matches!(section.kind, SectionKind::Intro) {
        controls.push(Control::Back);
    }
    controls
}
