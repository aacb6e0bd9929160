use super::Effect;
use crate::color::Grb;
use crate::pipeline::FrameTiming;

/// Dark strip, refreshed at a slow pace
#[derive(Debug, Clone, Default)]
pub struct OffEffect;

impl Effect for OffEffect {
    fn timing(&self) -> FrameTiming {
        FrameTiming::free_running(100)
    }

    fn render(&mut self, leds: &mut [Grb]) {
        leds.fill(Grb::BLACK);
    }
}
