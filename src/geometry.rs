//! Pointer/rectangle geometry shared by the widgets and the panel.

/// A pointer position in overlay coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle used for hit testing and fills.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict interior containment: points exactly on an edge do not hit.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }
}

/// Linear map of `v` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Unclamped: values outside the input range extrapolate. Callers that need
/// clamping (track widgets) clamp the result themselves.
pub fn map_range(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if in_max == in_min {
        return out_min;
    }
    (v - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}
