use serde::{Deserialize, Serialize};

use crate::quiz::QuizOption;

/// A full presentation: ordered sections plus the scripted challenge content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Identifier used on the command line (e.g. "cold-war").
    pub id: String,
    /// Title shown in the header.
    pub title: String,
    #[serde(default)]
    pub variant: DeckVariant,
    /// Fixed page theme for interactive decks.
    #[serde(default)]
    pub theme: Theme,
    /// Turn a quiz's "Skip" into a primary "Continue" once it is answered.
    #[serde(default)]
    pub promote_skip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<ChallengeScript>,
    pub sections: Vec<SectionSpec>,
}

/// Interactive decks have navigation, quizzes and the challenge; fade decks
/// only switch themes and reveal fade-in items while scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckVariant {
    #[default]
    Interactive,
    Fade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Canned content of the "generate → stream → score" sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeScript {
    /// Draft prompt; `{point}` is replaced by the user's input.
    pub draft_template: String,
    /// Text streamed as the generated response.
    pub response: String,
    /// Text streamed into the evaluation panel.
    pub evaluation: String,
    /// Final score on a 0-10 scale.
    pub score: f64,
    /// Default label of the generate-response button.
    #[serde(default = "default_speech_label")]
    pub speech_label: String,
}

fn default_speech_label() -> String {
    "Generate Speech".to_string()
}

/// One full-screen panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Paragraphs revealed one by one the first time they scroll into view.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fade: Vec<String>,
    #[serde(flatten)]
    pub kind: SectionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionKind {
    Intro,
    Content,
    Quiz {
        question: String,
        options: Vec<QuizOption>,
        explanation: String,
    },
    PointInput {
        #[serde(default)]
        placeholder: String,
    },
    EditPrompt,
    Result {
        #[serde(default = "default_true")]
        try_again: bool,
        #[serde(default = "default_true")]
        done: bool,
    },
}

fn default_true() -> bool {
    true
}

impl SectionSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            theme: None,
            fade: Vec::new(),
            kind,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_fade<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fade = items.into_iter().map(Into::into).collect();
        self
    }
}

impl Deck {
    pub fn is_interactive(&self) -> bool {
        self.variant == DeckVariant::Interactive
    }
}
