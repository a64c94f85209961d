use std::sync::LazyLock;

use regex::Regex;

use super::hex::{decode_hex, normalize_hex_input};
use crate::math::{round2, Rgb};

/// Bare hex digits that route to the hex repair path without a `#`.
static BARE_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-F]{3,6}$").expect("valid bare hex pattern"));

/// `RGB(r, g, b)` or `RGBA(r, g, b, a)`, any case, loose whitespace.
/// Captures are digit-only, so negative channels never match.
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)RGBA?\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*(?:,\s*([0-9.]+))?\s*\)",
    )
    .expect("valid rgba pattern")
});

/// A successfully parsed color: channels plus a display-precision alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedColor {
    pub rgb: Rgb,
    pub alpha: f64,
}

/// Parse typed color text into channels and alpha.
///
/// Hex-shaped text (leading `#`, or 3-6 bare hex digits) goes through
/// [`normalize_hex_input`] and keeps `current_alpha`; that path is total.
/// Otherwise an `RGB(...)`/`RGBA(...)` form is tried: channels saturate at
/// 255, alpha is clamped to [0, 1] and rounded to 2 decimals, defaulting
/// to 1 when absent.
///
/// Returns `None` when neither form matches; callers keep the current
/// color and re-render it.
pub fn parse_color_input(text: &str, current_alpha: f64) -> Option<ParsedColor> {
    let value = text.trim().to_uppercase();

    if value.starts_with('#') || BARE_HEX_RE.is_match(&value) {
        let rgb = decode_hex(&normalize_hex_input(&value))?;
        return Some(ParsedColor {
            rgb,
            alpha: current_alpha,
        });
    }

    let caps = RGBA_RE.captures(&value)?;
    let channel = |idx: usize| -> u8 {
        // digit-only capture: the only parse failure is overflow
        caps[idx].parse::<u32>().map_or(255, |n| n.min(255)) as u8
    };
    let rgb = Rgb::new(channel(1), channel(2), channel(3));

    let alpha = match caps.get(4) {
        Some(m) => round2(parse_decimal_prefix(m.as_str())?.clamp(0.0, 1.0)),
        None => 1.0,
    };

    Some(ParsedColor { rgb, alpha })
}

/// Parse the longest leading decimal of a digits-and-dots string:
/// `1.` -> 1, `0.5.` -> 0.5, `.25` -> 0.25. `None` when no digit leads.
fn parse_decimal_prefix(text: &str) -> Option<f64> {
    let end = text
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .nth(1)
        .map_or(text.len(), |(i, _)| i);
    let prefix = text[..end].trim_end_matches('.');
    if prefix.is_empty() {
        return None;
    }
    prefix.parse().ok()
}
