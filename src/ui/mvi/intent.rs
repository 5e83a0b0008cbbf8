/// Marker trait for intents: user actions (option picked, button pressed)
/// and scheduler steps (next character, score frame).
pub trait Intent: Send + 'static {}
