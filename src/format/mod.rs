pub mod color_parse;
pub mod hex;
pub mod rgba;

pub use color_parse::{parse_color_input, ParsedColor};
pub use hex::{decode_hex, normalize_hex_input, to_hex};
pub use rgba::{format_alpha, to_rgba_solid, to_rgba_string};
