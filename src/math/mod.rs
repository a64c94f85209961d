pub mod composite;
pub mod hsv;

use serde::{Deserialize, Serialize};

/// 8-bit sRGB channels, the form every view is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue in [0, 1], saturation and value as percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Round to 2 decimal places, the precision of every displayed alpha.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
