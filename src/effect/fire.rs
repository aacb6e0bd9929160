use super::Effect;
use crate::color::Grb;
use crate::pipeline::FrameTiming;

/// Flicker bands, hottest first: (threshold, pixel)
const BANDS: [(usize, Grb); 3] = [
    (200, Grb::new(40, 50, 0)),
    (130, Grb::new(25, 50, 0)),
    (60, Grb::new(15, 45, 0)),
];
const COALS: Grb = Grb::new(5, 35, 0);

/// Flickering flames in red and orange
#[derive(Debug, Clone, Default)]
pub struct FireEffect {
    offset: u8,
}

impl FireEffect {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: u8) -> Self {
        self.offset = offset;
        self
    }
}

fn flame(flicker: usize) -> Grb {
    BANDS
        .iter()
        .find(|(threshold, _)| flicker > *threshold)
        .map(|(_, pixel)| *pixel)
        .unwrap_or(COALS)
}

impl Effect for FireEffect {
    fn timing(&self) -> FrameTiming {
        FrameTiming::free_running(30)
    }

    fn render(&mut self, leds: &mut [Grb]) {
        let offset = usize::from(self.offset);
        for (index, led) in leds.iter_mut().enumerate() {
            *led = flame((index * 29 + offset * 17) % 256);
        }
        self.offset = self.offset.wrapping_add(1);
    }
}
