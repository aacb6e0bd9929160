//! Two color block chase
//!
//! Pixels are split into periods, the first `lit` pixels of every period get
//! the primary color and the rest the secondary one. The pattern slides by
//! one pixel per tick.

use super::Effect;
use crate::color::Grb;
use crate::pipeline::FrameTiming;

const GOLD: Grb = Grb::new(30, 50, 0);
const CYAN: Grb = Grb::new(50, 0, 50);
const MAGENTA: Grb = Grb::new(0, 50, 50);
const RED: Grb = Grb::new(0, 50, 0);
const GREEN: Grb = Grb::new(50, 0, 0);

/// Sliding blocks of two colors, shared by the chase modes
#[derive(Debug, Clone)]
pub struct ChaseEffect {
    period: usize,
    lit: usize,
    primary: Grb,
    secondary: Grb,
    timing: FrameTiming,
    offset: usize,
}

impl ChaseEffect {
    /// Create a chase with `lit` primary pixels out of every `period`
    ///
    /// A zero period is treated as one.
    pub const fn new(
        period: usize,
        lit: usize,
        primary: Grb,
        secondary: Grb,
        timing: FrameTiming,
    ) -> Self {
        Self {
            period: if period == 0 { 1 } else { period },
            lit,
            primary,
            secondary,
            timing,
            offset: 0,
        }
    }

    /// Gold blocks on black
    pub const fn waterloo() -> Self {
        Self::new(10, 5, GOLD, Grb::BLACK, FrameTiming::synced(50))
    }

    /// Cyan and magenta stripes
    pub const fn neon_stripes() -> Self {
        Self::new(20, 10, CYAN, MAGENTA, FrameTiming::free_running(40))
    }

    /// Red and green halves
    pub const fn christmas() -> Self {
        Self::new(12, 6, RED, GREEN, FrameTiming::synced(60))
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset % self.period;
        self
    }

    /// Offset used by the next rendered frame
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn period(&self) -> usize {
        self.period
    }
}

impl Effect for ChaseEffect {
    fn timing(&self) -> FrameTiming {
        self.timing
    }

    fn render(&mut self, leds: &mut [Grb]) {
        for (index, led) in leds.iter_mut().enumerate() {
            *led = if (index + self.offset) % self.period < self.lit {
                self.primary
            } else {
                self.secondary
            };
        }
        self.offset = (self.offset + 1) % self.period;
    }
}
