use super::Effect;
use crate::color::Grb;
use crate::pipeline::FrameTiming;

const MAX_LEVEL: i32 = 50;

/// Purple pulse ramping between dark and `MAX_LEVEL`
#[derive(Debug, Clone)]
pub struct BreathingEffect {
    level: i32,
    direction: i32,
}

impl Default for BreathingEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingEffect {
    pub const fn new() -> Self {
        Self {
            level: 0,
            direction: 1,
        }
    }

    #[must_use]
    pub const fn with_level(mut self, level: i32, rising: bool) -> Self {
        self.level = if level < 0 {
            0
        } else if level > MAX_LEVEL {
            MAX_LEVEL
        } else {
            level
        };
        self.direction = if rising { 1 } else { -1 };
        self
    }

    pub const fn level(&self) -> i32 {
        self.level
    }
}

impl Effect for BreathingEffect {
    fn timing(&self) -> FrameTiming {
        FrameTiming::free_running(20)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, leds: &mut [Grb]) {
        let level = self.level as u8;
        leds.fill(Grb::new(0, level, level));

        self.level += self.direction;
        if self.level >= MAX_LEVEL || self.level <= 0 {
            self.direction = -self.direction;
        }
    }
}
