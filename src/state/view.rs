use serde::Serialize;

use super::Hsva;
use crate::format::{to_hex, to_rgba_solid, to_rgba_string};
use crate::geometry::{Bounds, Point};
use crate::math::composite::composite_over;
use crate::math::hsv::hsv_to_rgb;
use crate::math::{round2, Rgb};

/// Which textual form is canonical for the current color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalFormat {
    Hex,
    Rgba,
}

impl CanonicalFormat {
    /// RGBA form while any transparency is present, hex otherwise.
    pub fn for_alpha(alpha: f64) -> Self {
        if alpha < 1.0 {
            CanonicalFormat::Rgba
        } else {
            CanonicalFormat::Hex
        }
    }
}

/// Everything a host displays, rendered from one [`Hsva`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorView {
    pub rgb: Rgb,
    /// Alpha at display precision.
    pub alpha: f64,
    /// `#RRGGBB`, shown in the hex-only field.
    pub hex: String,
    /// `RGBA(r, g, b, a)`, the alpha-blended preview value.
    pub rgba: String,
    /// `RGBA(r, g, b, 1)`, the solid swatch value.
    pub rgba_solid: String,
    pub format: CanonicalFormat,
    /// Text for the combined hex/RGBA field.
    pub canonical: String,
    /// Pure hue at full saturation and value, the canvas backdrop.
    pub hue_color: String,
    /// CSS background for the alpha slider track.
    pub alpha_track: String,
    pub canvas_x_pct: f64,
    pub canvas_y_pct: f64,
    pub hue_pct: f64,
    pub alpha_pct: f64,
}

impl ColorView {
    pub fn render(color: &Hsva) -> Self {
        let rgb = hsv_to_rgb(color.h, color.s, color.v);
        let hex = to_hex(rgb);
        let rgba = to_rgba_string(rgb, color.a);
        let format = CanonicalFormat::for_alpha(color.a);
        let canonical = match format {
            CanonicalFormat::Hex => hex.clone(),
            CanonicalFormat::Rgba => rgba.clone(),
        };

        Self {
            rgb,
            alpha: round2(color.a),
            alpha_track: format!("linear-gradient(to right, transparent, {hex})"),
            hue_color: to_hex(hsv_to_rgb(color.h, 100.0, 100.0)),
            rgba_solid: to_rgba_solid(rgb),
            hex,
            rgba,
            format,
            canonical,
            canvas_x_pct: color.s,
            canvas_y_pct: 100.0 - color.v,
            hue_pct: color.h * 100.0,
            alpha_pct: color.a * 100.0,
        }
    }

    /// Canvas dot offset in pixels from the canvas's top-left corner.
    pub fn canvas_indicator_px(&self, canvas: Bounds) -> Point {
        Point::new(
            self.canvas_x_pct * canvas.width / 100.0,
            self.canvas_y_pct * canvas.height / 100.0,
        )
    }

    /// Hue thumb offset in pixels from the slider's left edge.
    pub fn hue_thumb_px(&self, slider: Bounds) -> f64 {
        self.hue_pct * slider.width / 100.0
    }

    /// Alpha thumb offset in pixels from the slider's left edge.
    pub fn alpha_thumb_px(&self, slider: Bounds) -> f64 {
        self.alpha_pct * slider.width / 100.0
    }

    /// The color as it appears over an opaque backdrop.
    pub fn preview_over(&self, backdrop: Rgb) -> Rgb {
        composite_over(self.rgb, backdrop, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(h: f64, s: f64, v: f64, a: f64) -> Hsva {
        Hsva { h, s, v, a }
    }

    #[test]
    fn opaque_color_is_hex_form() {
        let view = ColorView::render(&color(0.0, 100.0, 100.0, 1.0));
        assert_eq!(view.format, CanonicalFormat::Hex);
        assert_eq!(view.canonical, "#FF0000");
    }

    #[test]
    fn translucent_color_is_rgba_form() {
        let view = ColorView::render(&color(0.0, 100.0, 100.0, 0.5));
        assert_eq!(view.format, CanonicalFormat::Rgba);
        assert_eq!(view.canonical, "RGBA(255, 0, 0, 0.5)");
        assert_eq!(view.hex, "#FF0000");
        assert_eq!(view.rgba_solid, "RGBA(255, 0, 0, 1)");
    }

    #[test]
    fn alpha_display_precision() {
        let view = ColorView::render(&color(0.0, 100.0, 100.0, 0.123456));
        assert_eq!(view.alpha, 0.12);
        assert_eq!(view.rgba, "RGBA(255, 0, 0, 0.12)");
    }

    #[test]
    fn hue_backdrop_ignores_saturation_and_value() {
        let view = ColorView::render(&color(2.0 / 3.0, 10.0, 20.0, 1.0));
        assert_eq!(view.hue_color, "#0000FF");
    }

    #[test]
    fn alpha_track_gradient_ends_at_hex() {
        let view = ColorView::render(&color(0.0, 0.0, 100.0, 0.3));
        assert_eq!(view.alpha_track, "linear-gradient(to right, transparent, #FFFFFF)");
    }

    #[test]
    fn indicator_positions() {
        let view = ColorView::render(&color(0.25, 30.0, 80.0, 0.5));
        assert_eq!(view.canvas_x_pct, 30.0);
        assert_eq!(view.canvas_y_pct, 20.0);
        assert_eq!(view.hue_pct, 25.0);
        assert_eq!(view.alpha_pct, 50.0);

        let dot = view.canvas_indicator_px(Bounds::new(100.0, 100.0, 200.0, 150.0));
        assert_eq!(dot, Point::new(60.0, 30.0));
        assert_eq!(view.hue_thumb_px(Bounds::new(0.0, 0.0, 300.0, 10.0)), 75.0);
        assert_eq!(view.alpha_thumb_px(Bounds::new(0.0, 0.0, 300.0, 10.0)), 150.0);
    }

    #[test]
    fn preview_blends_over_backdrop() {
        let view = ColorView::render(&color(0.0, 100.0, 100.0, 0.5));
        assert_eq!(view.preview_over(Rgb::WHITE), Rgb::new(255, 128, 128));
    }

    #[test]
    fn view_serializes_camel_case() {
        let view = ColorView::render(&color(0.0, 100.0, 100.0, 1.0));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["rgbaSolid"], "RGBA(255, 0, 0, 1)");
        assert_eq!(json["format"], "hex");
        assert_eq!(json["rgb"]["r"], 255);
    }
}
