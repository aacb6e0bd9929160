use crate::color::Rgb;

/// Size of one hue sector in degrees
const SECTOR_DEGREES: u32 = 60;

/// Convert a hue/saturation/value triple into RGB channels
///
/// * `hue` - hue in degrees, taken modulo 360
/// * `saturation` - saturation in percent (0-100)
/// * `value` - value in percent (0-100), scaled to the 0-255 channel range
///
/// Percentages above 100 are clamped.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn hsv_to_rgb(hue: u32, saturation: u32, value: u32) -> Rgb {
    let hue = hue % 360;
    let saturation = saturation.min(100);
    let value = value.min(100);

    let rgb_max = (value as f32 * 2.55) as u32;
    let rgb_min = (rgb_max as f32 * (100 - saturation) as f32 / 100.0) as u32;

    let sector = hue / SECTOR_DEGREES;
    let diff = hue % SECTOR_DEGREES;

    // Channel adjustment inside the sector
    let rgb_adj = (rgb_max - rgb_min) * diff / SECTOR_DEGREES;

    let (r, g, b) = match sector {
        0 => (rgb_max, rgb_min + rgb_adj, rgb_min),
        1 => (rgb_max - rgb_adj, rgb_max, rgb_min),
        2 => (rgb_min, rgb_max, rgb_min + rgb_adj),
        3 => (rgb_min, rgb_max - rgb_adj, rgb_max),
        4 => (rgb_min + rgb_adj, rgb_min, rgb_max),
        _ => (rgb_max, rgb_min, rgb_max - rgb_adj),
    };

    Rgb {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}
