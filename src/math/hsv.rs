use super::{Hsv, Rgb};

/// Convert HSV to 8-bit RGB using the six-sector table.
///
/// `h` is in [0, 1] (1.0 lands in sector 0 again), `s` and `v` are
/// percentages. Inputs must already be clamped; see `ColorState::update`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let s = s / 100.0;
    let v = v / 100.0;

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert 8-bit RGB to HSV.
///
/// Hue follows whichever channel is the maximum; a red maximum with
/// g < b wraps by adding a full turn before the final division by 6.
/// Grays (max == min) get hue 0, black gets saturation 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let (rf, gf, bf) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
    let maxf = max as f64 / 255.0;
    let diff = (max - min) as f64 / 255.0;

    let s = if max == 0 { 0.0 } else { diff / maxf };

    let h = if max == min {
        0.0
    } else if max == r {
        let wrap = if g < b { 6.0 } else { 0.0 };
        ((gf - bf) / diff + wrap) / 6.0
    } else if max == g {
        ((bf - rf) / diff + 2.0) / 6.0
    } else {
        ((rf - gf) / diff + 4.0) / 6.0
    };

    Hsv {
        h,
        s: s * 100.0,
        v: maxf * 100.0,
    }
}
