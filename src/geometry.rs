use serde::{Deserialize, Serialize};

/// A point in host coordinates (e.g. client pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of an interactive region, read from the host at
/// interaction time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal position as a fraction of the width, clamped to the box.
    /// A degenerate (zero or negative width) box maps everything to 0.
    pub fn normalized_x(&self, x: f64) -> f64 {
        normalize(x - self.x, self.width)
    }

    /// Vertical position as a fraction of the height, clamped to the box.
    pub fn normalized_y(&self, y: f64) -> f64 {
        normalize(y - self.y, self.height)
    }
}

fn normalize(offset: f64, extent: f64) -> f64 {
    if !(extent > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    offset.clamp(0.0, extent) / extent
}
