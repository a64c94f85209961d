use crate::math::Rgb;

/// Returned by [`normalize_hex_input`] for anything that is not hex-shaped.
pub const FALLBACK_HEX: &str = "#FFFFFF";

/// Render RGB as `#RRGGBB`, uppercase, two digits per channel.
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Repair user-typed hex text into canonical `#RRGGBB`.
///
/// All whitespace and one leading `#` are dropped and the digits
/// uppercased, then by digit count:
/// - 1 digit: repeated 6 times (`F` -> `#FFFFFF`)
/// - 2 digits: repeated 3 times (`1A` -> `#1A1A1A`)
/// - 3 digits: each digit doubled, CSS shorthand (`ABC` -> `#AABBCC`)
/// - 4-5 digits: right-padded with `0` (`12345` -> `#123450`)
/// - 6 digits: kept
///
/// Anything else (no digits, non-hex characters, 7+ digits) falls back to
/// [`FALLBACK_HEX`]. Never fails.
pub fn normalize_hex_input(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix('#')
        .unwrap_or(&compact)
        .to_ascii_uppercase();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return FALLBACK_HEX.to_string();
    }

    let expanded = match digits.len() {
        1 => digits.repeat(6),
        2 => digits.repeat(3),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        4 | 5 => format!("{digits:0<6}"),
        6 => digits,
        _ => return FALLBACK_HEX.to_string(),
    };

    format!("#{expanded}")
}

/// Decode canonical `#RRGGBB` (leading `#` optional) into channels.
/// Returns `None` unless exactly 6 hex digits follow.
pub fn decode_hex(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}
