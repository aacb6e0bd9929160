//! Rainbow chase
//!
//! The strip is painted in three interleaved passes (every third pixel),
//! each pass is sent to the strip on its own. The hue wheel rotates by one
//! sector after all passes are out.

use super::Effect;
use crate::color::{Grb, hsv_to_rgb};
use crate::pipeline::{FrameSink, FrameTiming, TransmitError};

const PASSES: usize = 3;
const SATURATION: u32 = 100;
const VALUE: u32 = 10;
const ROTATION_STEP: u32 = 60;
const TIMING: FrameTiming = FrameTiming::synced(10);

#[derive(Debug, Clone, Default)]
pub struct RainbowChaseEffect {
    /// Hue offset in degrees
    rotation: u32,
}

impl RainbowChaseEffect {
    pub const fn new() -> Self {
        Self { rotation: 0 }
    }

    #[must_use]
    pub const fn with_rotation(mut self, rotation: u32) -> Self {
        self.rotation = rotation % 360;
        self
    }

    pub const fn rotation(&self) -> u32 {
        self.rotation
    }

    #[allow(clippy::cast_possible_truncation)]
    fn paint_pass(&self, leds: &mut [Grb], pass: usize) {
        let len = leds.len();
        for (index, led) in leds.iter_mut().enumerate().skip(pass).step_by(PASSES) {
            let hue = (index * 360 / len) as u32 + self.rotation;
            *led = hsv_to_rgb(hue, SATURATION, VALUE).into();
        }
    }

    fn advance(&mut self) {
        self.rotation = (self.rotation + ROTATION_STEP) % 360;
    }
}

impl Effect for RainbowChaseEffect {
    fn timing(&self) -> FrameTiming {
        TIMING
    }

    fn render(&mut self, leds: &mut [Grb]) {
        for pass in 0..PASSES {
            self.paint_pass(leds, pass);
        }
        self.advance();
    }

    fn tick<S: FrameSink>(&mut self, leds: &mut [Grb], sink: &mut S) -> Result<(), TransmitError> {
        let mut result = Ok(());
        for pass in 0..PASSES {
            self.paint_pass(leds, pass);
            // A dropped pass does not stop the remaining ones
            if let Err(err) = sink.submit(leds, TIMING) {
                result = Err(err);
            }
        }
        self.advance();
        result
    }
}
