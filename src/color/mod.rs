mod hsv;
mod wire;

pub use hsv::hsv_to_rgb;
use smart_leds::RGB8;
pub use wire::Grb;

pub type Rgb = RGB8;
