//! Sibling lookup for the next/back/skip controls.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Section adjacent to `from`, if any.
pub fn sibling(from: usize, count: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Next => (from + 1 < count).then_some(from + 1),
        Direction::Previous => from.checked_sub(1),
    }
}
