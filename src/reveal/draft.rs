//! Draft prompt built from the user's key point.

/// Placeholder replaced by the user's input.
pub const POINT_PLACEHOLDER: &str = "{point}";

/// Inputs must be longer than this many characters to enable drafting.
pub const MIN_POINT_CHARS: usize = 5;

/// Interpolates `point` into `template`. No generation happens here.
pub fn render_draft(template: &str, point: &str) -> String {
    template.replace(POINT_PLACEHOLDER, point)
}

pub fn can_draft(point: &str) -> bool {
    point.chars().count() > MIN_POINT_CHARS
}
