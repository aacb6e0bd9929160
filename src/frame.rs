//! Pixel frame buffer
//!
//! One frame covers the whole strip. The buffer is owned by the engine and
//! recycled between ticks, the transmission pipeline only borrows it.

use crate::color::Grb;

/// Full strip buffer in native wire order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame<const N: usize> {
    pixels: [Grb; N],
}

impl<const N: usize> Default for PixelFrame<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelFrame<N> {
    /// Create a dark frame
    pub const fn new() -> Self {
        Self {
            pixels: [Grb::BLACK; N],
        }
    }

    /// Number of pixels in the frame
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(Grb::BLACK);
    }

    /// Set every pixel to the same value
    pub fn fill(&mut self, pixel: Grb) {
        self.pixels.fill(pixel);
    }

    /// Set a single pixel, indices past the end are ignored
    pub fn set(&mut self, index: usize, pixel: Grb) {
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = pixel;
        }
    }

    pub fn get(&self, index: usize) -> Option<Grb> {
        self.pixels.get(index).copied()
    }

    pub const fn pixels(&self) -> &[Grb; N] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Grb; N] {
        &mut self.pixels
    }

    /// Raw byte view handed to the protocol transmitter (N * 3 bytes)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
