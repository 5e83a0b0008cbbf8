//! Scripted reveal: draft prompt, streamed response, streamed evaluation and
//! the animated score.

pub mod draft;
mod intent;
mod reducer;
mod scheduler;
pub mod score;
mod state;
pub mod stream;

pub use intent::RevealIntent;
pub use reducer::RevealReducer;
pub use scheduler::Scheduler;
pub use score::{ScoreAnimation, ScoreFrame};
pub use state::{RevealScript, RevealStage, RevealState};
pub use stream::{CharPacing, FixedJitter, JitterSource, RandomJitter, TextStream};
