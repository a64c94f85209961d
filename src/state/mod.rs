//! The single live color of a picker and the update protocol every
//! mutation goes through.
//!
//! Views are never patched individually: each `update` merges a partial
//! into the color and re-renders the whole [`ColorView`] from it.

pub mod view;

use serde::{Deserialize, Serialize};

use crate::math::hsv::rgb_to_hsv;
use crate::math::Rgb;
pub use view::{CanonicalFormat, ColorView};

/// The color entity: hue in [0, 1], saturation/value in [0, 100],
/// alpha in [0, 1].
///
/// Hue 1.0 is kept as-is (right end of the hue slider) and renders the
/// same as 0.0; any other value outside [0, 1] wraps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl Default for Hsva {
    /// Pure red, fully opaque.
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 100.0,
            v: 100.0,
            a: 1.0,
        }
    }
}

impl Hsva {
    /// Build from RGB channels and an alpha, via `rgb_to_hsv`.
    pub fn from_rgb(rgb: Rgb, alpha: f64) -> Self {
        let hsv = rgb_to_hsv(rgb);
        Self {
            h: hsv.h,
            s: hsv.s,
            v: hsv.v,
            a: alpha,
        }
        .sanitized()
    }

    /// Bring every component back into its domain.
    pub fn sanitized(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: clamp_or(self.s, 0.0, 100.0),
            v: clamp_or(self.v, 0.0, 100.0),
            a: clamp_or(self.a, 0.0, 1.0),
        }
    }
}

fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        0.0
    } else if (0.0..=1.0).contains(&h) {
        h
    } else {
        h.rem_euclid(1.0)
    }
}

fn clamp_or(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// A partial color update. Unset (or non-finite) fields keep their
/// current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorPatch {
    pub h: Option<f64>,
    pub s: Option<f64>,
    pub v: Option<f64>,
    pub a: Option<f64>,
}

impl ColorPatch {
    pub fn hue(h: f64) -> Self {
        Self {
            h: Some(h),
            ..Self::default()
        }
    }

    pub fn saturation_value(s: f64, v: f64) -> Self {
        Self {
            s: Some(s),
            v: Some(v),
            ..Self::default()
        }
    }

    pub fn alpha(a: f64) -> Self {
        Self {
            a: Some(a),
            ..Self::default()
        }
    }

    /// Replace every component.
    pub fn full(color: Hsva) -> Self {
        Self {
            h: Some(color.h),
            s: Some(color.s),
            v: Some(color.v),
            a: Some(color.a),
        }
    }

    fn apply_to(self, color: Hsva) -> Hsva {
        let pick = |field: Option<f64>, current: f64| match field {
            Some(value) if value.is_finite() => value,
            _ => current,
        };
        Hsva {
            h: pick(self.h, color.h),
            s: pick(self.s, color.s),
            v: pick(self.v, color.v),
            a: pick(self.a, color.a),
        }
    }
}

/// Owner of the live color and its derived views.
#[derive(Debug, Clone)]
pub struct ColorState {
    color: Hsva,
    view: ColorView,
}

impl ColorState {
    pub fn new() -> Self {
        Self::with_color(Hsva::default())
    }

    pub fn with_color(color: Hsva) -> Self {
        let color = color.sanitized();
        Self {
            color,
            view: ColorView::render(&color),
        }
    }

    pub fn color(&self) -> Hsva {
        self.color
    }

    pub fn view(&self) -> &ColorView {
        &self.view
    }

    /// Merge `patch` into the live color and re-render every view.
    pub fn update(&mut self, patch: ColorPatch) -> &ColorView {
        self.color = patch.apply_to(self.color).sanitized();
        self.refresh()
    }

    /// Re-render every view from the unchanged color. This is how invalid
    /// user text gets replaced by the canonical value again.
    pub fn refresh(&mut self) -> &ColorView {
        self.view = ColorView::render(&self.color);
        log::trace!("color state rendered: {}", self.view.canonical);
        &self.view
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}
