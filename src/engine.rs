use rayon::prelude::*;

use crate::error::PickerError;
use crate::math::composite::composite_over;
use crate::math::hsv::hsv_to_rgb;
use crate::math::Rgb;

/// Side of one checkerboard square behind the alpha strip, in pixels.
pub const CHECKER_CELL: u32 = 8;
const CHECKER_LIGHT: Rgb = Rgb::WHITE;
const CHECKER_DARK: Rgb = Rgb::new(204, 204, 204);

/// Largest accepted width or height of a raster, in pixels.
pub const MAX_RASTER_SIDE: u32 = 8192;
/// Largest accepted pixel count of a raster (64 MiB of RGBA8).
pub const MAX_RASTER_PIXELS: usize = 4096 * 4096;

/// Render the saturation/value canvas for `hue` as RGBA8 pixels, row-major.
///
/// Saturation grows left to right (0 -> 100), value falls top to bottom
/// (100 -> 0), the same mapping pointer input uses, so the first and last
/// pixel of each axis hit the extremes exactly.
///
/// Rows are rendered in parallel with Rayon; each row only writes its own
/// slice of the buffer.
///
/// Fails with `RasterTooLarge` beyond [`MAX_RASTER_SIDE`] or
/// [`MAX_RASTER_PIXELS`]; zero-sized rasters are empty.
pub fn render_sv_canvas(hue: f64, width: u32, height: u32) -> Result<Vec<u8>, PickerError> {
    render_rows(width, height, |x, y| {
        let s = axis_fraction(x, width) * 100.0;
        let v = 100.0 - axis_fraction(y, height) * 100.0;
        (hsv_to_rgb(hue, s, v), 255)
    })
}

/// Render the hue slider track: full saturation and value, hue 0 -> 1
/// left to right.
pub fn render_hue_strip(width: u32, height: u32) -> Result<Vec<u8>, PickerError> {
    render_rows(width, height, |x, _| {
        (hsv_to_rgb(axis_fraction(x, width), 100.0, 100.0), 255)
    })
}

/// Render the alpha slider track: `rgb` fading in from transparent,
/// pre-composited over a checkerboard so the result is opaque.
pub fn render_alpha_strip(rgb: Rgb, width: u32, height: u32) -> Result<Vec<u8>, PickerError> {
    render_rows(width, height, |x, y| {
        let light = ((x / CHECKER_CELL) + (y / CHECKER_CELL)) % 2 == 0;
        let backdrop = if light { CHECKER_LIGHT } else { CHECKER_DARK };
        (composite_over(rgb, backdrop, axis_fraction(x, width)), 255)
    })
}

fn axis_fraction(index: u32, extent: u32) -> f64 {
    if extent <= 1 {
        0.0
    } else {
        index as f64 / (extent - 1) as f64
    }
}

/// Byte length of a `width` x `height` RGBA8 raster, if within limits.
fn raster_len(width: u32, height: u32) -> Result<usize, PickerError> {
    let too_large = || PickerError::RasterTooLarge { width, height };
    if width > MAX_RASTER_SIDE || height > MAX_RASTER_SIDE {
        return Err(too_large());
    }
    let pixels = (width as usize)
        .checked_mul(height as usize)
        .filter(|&pixels| pixels <= MAX_RASTER_PIXELS)
        .ok_or_else(too_large)?;
    pixels.checked_mul(4).ok_or_else(too_large)
}

fn render_rows<F>(width: u32, height: u32, pixel: F) -> Result<Vec<u8>, PickerError>
where
    F: Fn(u32, u32) -> (Rgb, u8) + Sync,
{
    let len = raster_len(width, height)?;
    if len == 0 {
        return Ok(Vec::new());
    }

    let row_bytes = width as usize * 4;
    let mut buffer = vec![0u8; len];

    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let (rgb, alpha) = pixel(x as u32, y as u32);
                px.copy_from_slice(&[rgb.r, rgb.g, rgb.b, alpha]);
            }
        });

    Ok(buffer)
}
