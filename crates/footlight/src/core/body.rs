use glam::Vec2;

use crate::api::types::Color;

/// Geometry of an actor: an axis-aligned rectangle with a heading.
///
/// Position is kept in f32 so sub-pixel movement accumulates across frames.
/// Rotation is degrees, always normalized into `[0, 360)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner in world space.
    pub pos: Vec2,
    /// Width and height. Positive, and in practice immutable after construction.
    pub size: Vec2,
    /// Fill color used by the default rectangle draw.
    pub color: Color,
    rotation: f32,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "body size must be positive");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            color,
            rotation: 0.0,
        }
    }

    /// Current heading in degrees, guaranteed to be in `[0, 360)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set the heading. Any input angle is accepted; floored modulo wraps
    /// negative and oversized values into `[0, 360)`.
    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle.rem_euclid(360.0);
    }

    /// Rotate by `delta` degrees relative to the current heading.
    pub fn turn(&mut self, delta: f32) {
        self.set_rotation(self.rotation + delta);
    }

    /// Move `distance` units along the current heading.
    pub fn advance(&mut self, distance: f32) {
        self.pos += distance * Vec2::from_angle(self.rotation.to_radians());
    }

    /// Translate unconditionally, ignoring the heading.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos += Vec2::new(dx, dy);
    }

    /// Absolute placement of the top-left corner.
    pub fn set_location(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict axis-aligned overlap test. Boxes that share only an edge do
    /// NOT count as overlapping.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}
