use super::Effect;
use crate::color::Grb;
use crate::pipeline::FrameTiming;

const BOLT_WIDTH: i32 = 15;
const PEAK: i32 = 50;
const STEP: i32 = 2;

/// White bolt travelling along the strip with a fading tail
///
/// The bolt enters from before the first pixel once it left the strip.
#[derive(Debug, Clone, Default)]
pub struct LightningEffect {
    /// Position of the brightest pixel, may lie outside the strip
    position: i32,
}

impl LightningEffect {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    #[must_use]
    pub const fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub const fn position(&self) -> i32 {
        self.position
    }
}

impl Effect for LightningEffect {
    fn timing(&self) -> FrameTiming {
        FrameTiming::synced(20)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, leds: &mut [Grb]) {
        let len = i32::try_from(leds.len()).unwrap_or(i32::MAX);
        for (index, led) in (0..len).zip(leds.iter_mut()) {
            let distance = index - self.position;
            *led = if (0..BOLT_WIDTH).contains(&distance) {
                Grb::gray((PEAK - distance * PEAK / BOLT_WIDTH) as u8)
            } else {
                Grb::BLACK
            };
        }

        self.position += STEP;
        if self.position > len.saturating_add(BOLT_WIDTH) {
            self.position = -BOLT_WIDTH;
        }
    }
}
