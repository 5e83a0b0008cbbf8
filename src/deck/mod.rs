pub mod builtin;
mod loader;
mod types;

pub use loader::{ChallengeLayout, DeckError};
pub use types::{ChallengeScript, Deck, DeckVariant, SectionKind, SectionSpec, Theme};
