use super::Effect;
use crate::color::Grb;
use crate::pipeline::FrameTiming;

const THRESHOLD: usize = 30;
const STAR: Grb = Grb::gray(50);

/// Twinkling stars over a dark strip
///
/// Uses a cheap position/counter hash instead of a random source, so the
/// sequence repeats every 256 ticks.
#[derive(Debug, Clone, Default)]
pub struct SparkleEffect {
    counter: u8,
}

impl SparkleEffect {
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    #[must_use]
    pub const fn with_counter(mut self, counter: u8) -> Self {
        self.counter = counter;
        self
    }

    pub const fn counter(&self) -> u8 {
        self.counter
    }
}

impl Effect for SparkleEffect {
    fn timing(&self) -> FrameTiming {
        FrameTiming::free_running(100)
    }

    fn render(&mut self, leds: &mut [Grb]) {
        let counter = usize::from(self.counter);
        for (index, led) in leds.iter_mut().enumerate() {
            let noise = (index * 73 + counter * 97) % 256;
            *led = if noise < THRESHOLD { STAR } else { Grb::BLACK };
        }
        self.counter = self.counter.wrapping_add(1);
    }
}
