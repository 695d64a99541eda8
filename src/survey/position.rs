// SPDX-License-Identifier: MPL-2.0
//! Marker position expressed in percent of the quadrant's bounding box.

use iced::{Point, Size};

/// A point inside the quadrant, as percentage offsets from its top-left
/// corner. Both components stay within `[0, 100]`; every constructor clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Lower bound of a position component, in percent.
pub const MIN_PERCENT: f32 = 0.0;

/// Upper bound of a position component, in percent.
pub const MAX_PERCENT: f32 = 100.0;

impl Position {
    /// The center of the quadrant. Every new question starts here.
    pub const CENTER: Position = Position { x: 50.0, y: 50.0 };

    /// Creates a position, clamping both components to `[0, 100]`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(MIN_PERCENT, MAX_PERCENT),
            y: y.clamp(MIN_PERCENT, MAX_PERCENT),
        }
    }

    /// Maps a cursor point relative to the quadrant's top-left corner into
    /// percent coordinates. Points outside the box clamp to its edges.
    ///
    /// Returns `None` for a degenerate bounding box (zero width or height),
    /// which matches the "element not yet laid out" no-op behavior.
    #[must_use]
    pub fn from_cursor(cursor: Point, bounds: Size) -> Option<Self> {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }

        Some(Self::new(
            (cursor.x / bounds.width) * MAX_PERCENT,
            (cursor.y / bounds.height) * MAX_PERCENT,
        ))
    }

    /// Converts this position back to a point inside the given bounds,
    /// used to place the marker when drawing.
    #[must_use]
    pub fn to_point(self, bounds: Size) -> Point {
        Point::new(
            bounds.width * self.x / MAX_PERCENT,
            bounds.height * self.y / MAX_PERCENT,
        )
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}
