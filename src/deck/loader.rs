use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::deck::builtin;
use crate::deck::types::{Deck, DeckVariant, SectionKind};
use crate::quiz::{QuizGroup, QuizGroupError};
use crate::reveal::draft::POINT_PLACEHOLDER;
use crate::reveal::score::SCORE_SCALE;

/// Errors that can occur when loading or validating a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Failed to read deck file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck file '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse deck file '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Deck '{id}' not found")]
    UnknownDeck { id: String },

    #[error("Deck '{deck}' has no sections")]
    Empty { deck: String },

    #[error("Section id '{section}' is used more than once")]
    DuplicateSection { section: String },

    #[error("Quiz in section '{section}': {source}")]
    QuizCorrectCount {
        section: String,
        #[source]
        source: QuizGroupError,
    },

    #[error("Challenge layout invalid: {message}")]
    ChallengeLayout { message: String },

    #[error("Score {score} is outside 0-10")]
    ScoreOutOfRange { score: f64 },

    #[error("Draft template must contain the {{point}} placeholder")]
    MissingPlaceholder,
}

/// Section indices of the three challenge panels, in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeLayout {
    pub input: usize,
    pub editor: usize,
    pub result: usize,
}

impl Deck {
    /// Loads a built-in deck by id.
    pub fn builtin(id: &str) -> Result<Self, DeckError> {
        builtin::find(id).ok_or_else(|| DeckError::UnknownDeck { id: id.to_string() })
    }

    /// Loads a deck file. `.json` files are parsed as JSON, everything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path).map_err(|e| DeckError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let deck: Deck = if is_json {
            serde_json::from_str(&content).map_err(|e| DeckError::ParseJson {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            toml::from_str(&content).map_err(|e| DeckError::ParseToml {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        deck.validate()?;
        Ok(deck)
    }

    /// Validates the deck.
    ///
    /// Checks:
    /// - At least one section, with unique ids
    /// - Every quiz has exactly one correct option
    /// - Interactive decks with a challenge carry its three panels in order
    /// - Score is on the 0-10 scale and the template has a `{point}` slot
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.sections.is_empty() {
            return Err(DeckError::Empty {
                deck: self.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(DeckError::DuplicateSection {
                    section: section.id.clone(),
                });
            }
            if let SectionKind::Quiz { options, .. } = &section.kind {
                QuizGroup::new(options.clone()).map_err(|source| {
                    DeckError::QuizCorrectCount {
                        section: section.id.clone(),
                        source,
                    }
                })?;
            }
        }

        if let Some(challenge) = &self.challenge {
            if !(0.0..=SCORE_SCALE).contains(&challenge.score) {
                return Err(DeckError::ScoreOutOfRange {
                    score: challenge.score,
                });
            }
            if !challenge.draft_template.contains(POINT_PLACEHOLDER) {
                return Err(DeckError::MissingPlaceholder);
            }
        }

        self.challenge_layout()?;
        Ok(())
    }

    /// Locates the challenge panels.
    ///
    /// Returns `Ok(None)` for decks without a challenge (and for fade decks,
    /// which ignore it).
    pub fn challenge_layout(&self) -> Result<Option<ChallengeLayout>, DeckError> {
        let input = self.single_section("point_input", |k| {
            matches!(k, SectionKind::PointInput { .. })
        })?;
        let editor = self.single_section("edit_prompt", |k| matches!(k, SectionKind::EditPrompt))?;
        let result = self.single_section("result", |k| matches!(k, SectionKind::Result { .. }))?;

        if self.challenge.is_none() || self.variant == DeckVariant::Fade {
            if input.is_some() || editor.is_some() || result.is_some() {
                return Err(DeckError::ChallengeLayout {
                    message: "challenge panels need an interactive deck with a challenge script"
                        .to_string(),
                });
            }
            return Ok(None);
        }

        match (input, editor, result) {
            (Some(input), Some(editor), Some(result)) if input < editor && editor < result => {
                Ok(Some(ChallengeLayout {
                    input,
                    editor,
                    result,
                }))
            }
            (Some(_), Some(_), Some(_)) => Err(DeckError::ChallengeLayout {
                message: "point_input, edit_prompt and result must appear in that order"
                    .to_string(),
            }),
            _ => Err(DeckError::ChallengeLayout {
                message: "point_input, edit_prompt and result sections are required".to_string(),
            }),
        }
    }

    fn single_section(
        &self,
        name: &str,
        predicate: impl Fn(&SectionKind) -> bool,
    ) -> Result<Option<usize>, DeckError> {
        let mut matches = self
            .sections
            .iter()
            .enumerate()
            .filter(|(_, section)| predicate(&section.kind))
            .map(|(index, _)| index);
        let first = matches.next();
        if matches.next().is_some() {
            return Err(DeckError::ChallengeLayout {
                message: format!("more than one {} section", name),
            });
        }
        Ok(first)
    }
}
