//! Native wire pixel layout
//!
//! WS2812-style strips clock channels in green, red, blue order.

use bytemuck::{Pod, Zeroable};

use crate::color::Rgb;

/// Single pixel in the strip's native channel order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Grb {
    pub g: u8,
    pub r: u8,
    pub b: u8,
}

impl Grb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a pixel from channels given in wire order
    pub const fn new(g: u8, r: u8, b: u8) -> Self {
        Self { g, r, b }
    }

    /// Same intensity on every channel
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl From<Rgb> for Grb {
    fn from(color: Rgb) -> Self {
        Self::new(color.g, color.r, color.b)
    }
}

impl From<Grb> for Rgb {
    fn from(pixel: Grb) -> Self {
        pixel.to_rgb()
    }
}
