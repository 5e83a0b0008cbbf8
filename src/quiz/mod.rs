mod intent;
mod model;
mod reducer;
mod state;

pub use intent::QuizIntent;
pub use model::{OptionMark, Outcome, QuizGroup, QuizGroupError, QuizOption};
pub use reducer::QuizReducer;
pub use state::QuizAnswer;
