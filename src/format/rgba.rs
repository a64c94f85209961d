use crate::math::{round2, Rgb};

/// Render alpha at display precision, shortest form (`1`, `0.5`, `0.25`).
pub fn format_alpha(alpha: f64) -> String {
    format!("{}", round2(alpha.clamp(0.0, 1.0)))
}

/// Render `RGBA(r, g, b, a)` with alpha rounded to 2 decimals.
pub fn to_rgba_string(rgb: Rgb, alpha: f64) -> String {
    format!("RGBA({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, format_alpha(alpha))
}

/// Opaque variant used for the solid swatch; alpha is always 1.
pub fn to_rgba_solid(rgb: Rgb) -> String {
    to_rgba_string(rgb, 1.0)
}
