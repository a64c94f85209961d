use napi_derive::napi;

use crate::geometry::Bounds;
use crate::input::DragTarget;
use crate::state::{CanonicalFormat, ColorView};

/// Configuration passed from JS when a picker is created
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    /// Identifiers of the host elements that were found
    pub available_elements: Vec<String>,
    /// Hex or RGBA text for the starting color; opaque red when absent
    pub initial_color: Option<String>,
}

/// Bounding box of a draggable region, e.g. from getBoundingClientRect()
#[napi(object)]
#[derive(Debug, Clone, Copy)]
pub struct RegionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<RegionRect> for Bounds {
    fn from(rect: RegionRect) -> Self {
        Bounds::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Flattened ColorView plus widget flags, returned to JS after every event
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PickerSnapshot {
    pub hex: String,
    pub rgba: String,
    pub rgba_solid: String,
    pub canonical: String,
    /// "hex" | "rgba"
    pub format: String,
    pub hue_color: String,
    pub alpha_track: String,
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub alpha: f64,
    pub canvas_x_pct: f64,
    pub canvas_y_pct: f64,
    pub hue_pct: f64,
    pub alpha_pct: f64,
    pub is_open: bool,
    pub is_dragging: bool,
    /// "canvas" | "hue" | "alpha" while a drag is active
    pub active_drag: Option<String>,
}

impl PickerSnapshot {
    pub fn new(view: &ColorView, is_open: bool, active_drag: Option<DragTarget>) -> Self {
        let format = match view.format {
            CanonicalFormat::Hex => "hex",
            CanonicalFormat::Rgba => "rgba",
        };
        Self {
            hex: view.hex.clone(),
            rgba: view.rgba.clone(),
            rgba_solid: view.rgba_solid.clone(),
            canonical: view.canonical.clone(),
            format: format.to_string(),
            hue_color: view.hue_color.clone(),
            alpha_track: view.alpha_track.clone(),
            r: view.rgb.r as u32,
            g: view.rgb.g as u32,
            b: view.rgb.b as u32,
            alpha: view.alpha,
            canvas_x_pct: view.canvas_x_pct,
            canvas_y_pct: view.canvas_y_pct,
            hue_pct: view.hue_pct,
            alpha_pct: view.alpha_pct,
            is_open,
            is_dragging: active_drag.is_some(),
            active_drag: active_drag.map(|target| target.as_str().to_string()),
        }
    }
}
