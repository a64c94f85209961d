use std::str::FromStr;

use crate::error::PickerError;
use crate::geometry::{Bounds, Point};
use crate::math::round2;
use crate::state::ColorPatch;

/// The draggable regions of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// 2D saturation/value canvas
    Canvas,
    /// 1D hue slider
    Hue,
    /// 1D alpha slider
    Alpha,
}

impl FromStr for DragTarget {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canvas" => Ok(DragTarget::Canvas),
            "hue" => Ok(DragTarget::Hue),
            "alpha" => Ok(DragTarget::Alpha),
            _ => Err(PickerError::UnknownRegion(s.to_string())),
        }
    }
}

impl DragTarget {
    /// Host-facing region name, the inverse of `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            DragTarget::Canvas => "canvas",
            DragTarget::Hue => "hue",
            DragTarget::Alpha => "alpha",
        }
    }

    /// Map a pointer position to the partial color this region controls.
    /// Positions outside `bounds` clamp to its edges.
    pub fn patch_at(self, bounds: Bounds, point: Point) -> ColorPatch {
        match self {
            DragTarget::Canvas => ColorPatch::saturation_value(
                bounds.normalized_x(point.x) * 100.0,
                100.0 - bounds.normalized_y(point.y) * 100.0,
            ),
            DragTarget::Hue => ColorPatch::hue(bounds.normalized_x(point.x)),
            DragTarget::Alpha => ColorPatch::alpha(round2(bounds.normalized_x(point.x))),
        }
    }
}

/// One pointer drag, from press to release.
///
/// The region's bounds are captured when the drag starts; moves anywhere
/// on screen map through them until the session ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    target: DragTarget,
    bounds: Bounds,
}

impl DragSession {
    pub fn start(target: DragTarget, bounds: Bounds) -> Self {
        Self { target, bounds }
    }

    pub fn target(&self) -> DragTarget {
        self.target
    }

    pub fn patch_at(&self, point: Point) -> ColorPatch {
        self.target.patch_at(self.bounds, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Bounds = Bounds::new(0.0, 0.0, 200.0, 200.0);

    #[test]
    fn canvas_center_is_half_saturation_half_value() {
        let patch = DragTarget::Canvas.patch_at(BOX, Point::new(100.0, 100.0));
        assert_eq!(patch.s, Some(50.0));
        assert_eq!(patch.v, Some(50.0));
        assert_eq!(patch.h, None);
    }

    #[test]
    fn canvas_beyond_bottom_right_clamps() {
        let patch = DragTarget::Canvas.patch_at(BOX, Point::new(900.0, 900.0));
        assert_eq!(patch.s, Some(100.0));
        assert_eq!(patch.v, Some(0.0));
    }

    #[test]
    fn canvas_top_left_is_white_corner() {
        let patch = DragTarget::Canvas.patch_at(BOX, Point::new(-10.0, -10.0));
        assert_eq!(patch.s, Some(0.0));
        assert_eq!(patch.v, Some(100.0));
    }

    #[test]
    fn hue_beyond_right_edge_is_max() {
        let patch = DragTarget::Hue.patch_at(BOX, Point::new(250.0, 5.0));
        assert_eq!(patch.h, Some(1.0));
    }

    #[test]
    fn alpha_rounded_to_two_decimals() {
        let slider = Bounds::new(0.0, 0.0, 300.0, 10.0);
        let patch = DragTarget::Alpha.patch_at(slider, Point::new(100.0, 0.0));
        assert_eq!(patch.a, Some(0.33));
        let past_end = DragTarget::Alpha.patch_at(slider, Point::new(400.0, 0.0));
        assert_eq!(past_end.a, Some(1.0));
    }

    #[test]
    fn session_uses_captured_bounds() {
        let session = DragSession::start(DragTarget::Hue, Bounds::new(100.0, 0.0, 100.0, 10.0));
        assert_eq!(session.patch_at(Point::new(150.0, 500.0)).h, Some(0.5));
        assert_eq!(session.target(), DragTarget::Hue);
    }

    #[test]
    fn parse_region_names() {
        assert_eq!("canvas".parse::<DragTarget>().unwrap(), DragTarget::Canvas);
        assert_eq!(" Hue ".parse::<DragTarget>().unwrap(), DragTarget::Hue);
        assert!("wheel".parse::<DragTarget>().is_err());
        for target in [DragTarget::Canvas, DragTarget::Hue, DragTarget::Alpha] {
            assert_eq!(target.as_str().parse::<DragTarget>().unwrap(), target);
        }
    }
}
