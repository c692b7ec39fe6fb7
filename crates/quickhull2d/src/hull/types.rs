//! Orientation classes and hull errors.

use thiserror::Error;

/// Orientation of a point relative to a directed segment `a -> b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Positive cross product; the point lies left of the segment.
    Left,
    /// Negative cross product; the point lies right of the segment.
    Right,
    /// Zero cross product; the point lies on the carrier line.
    OnLine,
}

impl Side {
    /// Mirror across the segment. `OnLine` is its own mirror.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::OnLine => Side::OnLine,
        }
    }
}

/// Errors surfaced by [`convex_hull`](super::convex_hull).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than 3 input points cannot bound a 2D area.
    #[error("convex hull requires at least 3 points, got {0}")]
    InsufficientPoints(usize),
}
