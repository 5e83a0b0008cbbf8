pub mod navigation;
pub mod observer;
pub mod progress;
pub mod viewport;

pub use navigation::{sibling, Direction};
pub use observer::{Crossing, VisibilityObserver};
pub use progress::{progress_percent, ProgressBar, ProgressTracker, SECTION_THRESHOLD};
pub use viewport::Viewport;
