use napi::bindgen_prelude::Buffer;

use crate::error::PickerError;
use crate::format::{normalize_hex_input, parse_color_input};
use crate::geometry::Point;
use crate::input::{validate_elements, ClickTarget, CommitTrigger, DragTarget, InputController, TextField};
use crate::state::Hsva;
use crate::types::{PickerOptions, PickerSnapshot, RegionRect};

/// Validate the host setup and build the controller for one picker.
///
/// Missing elements are fatal; the error lists all of them.
pub fn build_controller(options: &PickerOptions) -> Result<InputController, PickerError> {
    validate_elements(options.available_elements.as_slice())?;

    let color = match options.initial_color.as_deref() {
        Some(text) => {
            let parsed = parse_color_input(text, 1.0).ok_or_else(|| PickerError::InvalidInitialColor {
                text: text.to_string(),
            })?;
            Hsva::from_rgb(parsed.rgb, parsed.alpha)
        }
        None => Hsva::default(),
    };

    Ok(InputController::with_color(color))
}

/// One color picker instance, driven from JS.
///
/// Every mutating method returns a fresh snapshot so the host can
/// re-render all views from it.
#[napi]
pub struct ColorPicker {
    controller: InputController,
}

#[napi]
impl ColorPicker {
    #[napi(factory)]
    pub fn create(options: PickerOptions) -> napi::Result<Self> {
        Ok(Self {
            controller: build_controller(&options)?,
        })
    }

    #[napi]
    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot::new(
            self.controller.view(),
            self.controller.is_open(),
            self.controller.active_drag(),
        )
    }

    /// The full view as JSON (camelCase keys).
    #[napi]
    pub fn view_json(&self) -> napi::Result<String> {
        let json = serde_json::to_string(self.controller.view()).map_err(PickerError::from)?;
        Ok(json)
    }

    /// `region`: "canvas" | "hue" | "alpha"
    #[napi]
    pub fn pointer_down(&mut self, region: String, rect: RegionRect, x: f64, y: f64) -> napi::Result<PickerSnapshot> {
        let target: DragTarget = region.parse()?;
        self.controller.pointer_down(target, rect.into(), Point::new(x, y));
        Ok(self.snapshot())
    }

    /// Returns `null` when no drag is active.
    #[napi]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<PickerSnapshot> {
        self.controller.pointer_move(Point::new(x, y))?;
        Some(self.snapshot())
    }

    #[napi]
    pub fn pointer_up(&mut self) -> bool {
        self.controller.pointer_up()
    }

    /// `field`: "hex" | "format". Only the "Enter" key commits.
    #[napi]
    pub fn key_down(&mut self, field: String, key: String, text: String) -> napi::Result<PickerSnapshot> {
        let field: TextField = field.parse()?;
        self.controller.key_down(field, &key, &text);
        Ok(self.snapshot())
    }

    #[napi]
    pub fn blur(&mut self, field: String, text: String) -> napi::Result<PickerSnapshot> {
        let field: TextField = field.parse()?;
        self.controller.commit_text(field, &text, CommitTrigger::Blur);
        Ok(self.snapshot())
    }

    /// `target`: "trigger" | "panel" | "hex-field" | "outside".
    /// Returns whether the panel is open afterwards.
    #[napi]
    pub fn click(&mut self, target: String) -> napi::Result<bool> {
        let target: ClickTarget = target.parse()?;
        Ok(self.controller.click(target))
    }

    /// RGBA8 pixels of the saturation/value canvas at the current hue.
    #[napi]
    pub fn render_canvas(&self, width: u32, height: u32) -> napi::Result<Buffer> {
        let hue = self.controller.state().color().h;
        Ok(crate::engine::render_sv_canvas(hue, width, height)?.into())
    }

    /// RGBA8 pixels of the alpha track for the current color.
    #[napi]
    pub fn render_alpha_strip(&self, width: u32, height: u32) -> napi::Result<Buffer> {
        let rgb = self.controller.view().rgb;
        Ok(crate::engine::render_alpha_strip(rgb, width, height)?.into())
    }

    /// RGBA8 pixels of the hue track; independent of any picker state.
    #[napi]
    pub fn render_hue_strip(width: u32, height: u32) -> napi::Result<Buffer> {
        Ok(crate::engine::render_hue_strip(width, height)?.into())
    }
}

/// Repair typed hex text into `#RRGGBB` without a picker instance.
#[napi]
pub fn normalize_hex(text: String) -> String {
    normalize_hex_input(&text)
}
