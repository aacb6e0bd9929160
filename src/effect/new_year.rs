//! Gold and silver stripes with a pulsing sparkle layer

use super::Effect;
use crate::color::Grb;
use crate::pipeline::FrameTiming;

const STRIPE_PERIOD: usize = 20;
const STRIPE_WIDTH: usize = 10;
/// Ticks per one pixel of stripe drift
const DRIFT_TICKS: u32 = 20;
/// Counter wraps once both the drift and the sparkle hash repeat
const COUNTER_CYCLE: u32 = 6400;

const GOLD_SPARKLE_THRESHOLD: usize = 40;
const SILVER_SPARKLE_THRESHOLD: usize = 30;
const GOLD: Grb = Grb::new(25, 40, 0);
const SILVER: Grb = Grb::gray(30);

const MAX_PULSE: i32 = 30;
const PULSE_STEP: i32 = 2;

#[derive(Debug, Clone)]
pub struct NewYearEffect {
    counter: u32,
    pulse: i32,
    direction: i32,
}

impl Default for NewYearEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl NewYearEffect {
    pub const fn new() -> Self {
        Self {
            counter: 0,
            pulse: 0,
            direction: 1,
        }
    }

    #[must_use]
    pub const fn with_counter(mut self, counter: u32) -> Self {
        self.counter = counter % COUNTER_CYCLE;
        self
    }

    #[must_use]
    pub const fn with_pulse(mut self, pulse: i32, rising: bool) -> Self {
        self.pulse = if pulse < 0 {
            0
        } else if pulse > MAX_PULSE {
            MAX_PULSE
        } else {
            pulse
        };
        self.direction = if rising { 1 } else { -1 };
        self
    }

    pub const fn pulse(&self) -> i32 {
        self.pulse
    }

    fn advance(&mut self) {
        self.pulse += self.direction * PULSE_STEP;
        if self.pulse >= MAX_PULSE || self.pulse <= 0 {
            self.direction = -self.direction;
        }
        self.counter = (self.counter + 1) % COUNTER_CYCLE;
    }
}

impl Effect for NewYearEffect {
    fn timing(&self) -> FrameTiming {
        FrameTiming::free_running(25)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, leds: &mut [Grb]) {
        let counter = self.counter as usize;
        let drift = (self.counter / DRIFT_TICKS) as usize;
        // Pulse stays within 0..=MAX_PULSE
        let pulse = self.pulse.clamp(0, MAX_PULSE) as u8;

        for (index, led) in leds.iter_mut().enumerate() {
            let sparkle = (index * 67 + counter * 43) % 256;
            *led = if (index + drift) % STRIPE_PERIOD < STRIPE_WIDTH {
                if sparkle < GOLD_SPARKLE_THRESHOLD {
                    Grb::new(pulse + 20, pulse + 30, 0)
                } else {
                    GOLD
                }
            } else if sparkle < SILVER_SPARKLE_THRESHOLD {
                Grb::gray(pulse + 15)
            } else {
                SILVER
            };
        }

        self.advance();
    }
}
