//! Model-View-Intent primitives.
//!
//! Quiz answers and the reveal sequence are plain states changed only by
//! reducers; the app controller dispatches intents and the renderer reads
//! the resulting state.
//!
//! ```text
//! key / tick ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
