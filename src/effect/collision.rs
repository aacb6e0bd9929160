//! Collision waves followed by fireworks
//!
//! Two dots enter from both ends and run towards each other. When they meet
//! a block grows around the center for a fixed number of ticks, after which
//! the strip turns into an endless three color firework field.

use log::debug;

use super::Effect;
use crate::color::Grb;
use crate::pipeline::FrameTiming;

const ENTRY_MARGIN: f32 = 10.0;
const DOT_SPEED: f32 = 1.5;
const EXPAND_SPEED: f32 = 2.0;
const BLOCK_HALF_WIDTH: i32 = 15;
/// Collision count at which the fireworks start
const EXPAND_TICKS: u32 = 30;

const BURST_THRESHOLD: usize = 80;
/// Fireworks counter wraps once the burst hash and palette repeat
const FIREWORKS_CYCLE: u32 = 768;

const MAGENTA: Grb = Grb::new(20, 50, 40);
const CYAN: Grb = Grb::new(50, 0, 50);
const YELLOW: Grb = Grb::new(40, 50, 0);
const BLOCK: Grb = Grb::new(25, 35, 35);
const FIREWORK_PALETTE: [Grb; 3] = [MAGENTA, CYAN, YELLOW];

/// Visible stage of the collision effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPhase {
    /// Dots are running towards each other
    Approach,
    /// Dots met, the center block is growing
    Expand,
    /// Terminal stage
    Fireworks,
}

/// Two dots colliding in the middle of the strip
#[derive(Debug, Clone)]
pub struct CollisionEffect {
    left: f32,
    right: f32,
    collision_count: u32,
    fireworks: bool,
    fireworks_counter: u32,
}

impl CollisionEffect {
    /// Create the effect for a strip of `led_count` pixels
    #[allow(clippy::cast_precision_loss)]
    pub fn new(led_count: usize) -> Self {
        Self {
            left: -ENTRY_MARGIN,
            right: led_count as f32 + ENTRY_MARGIN,
            collision_count: 0,
            fireworks: false,
            fireworks_counter: 0,
        }
    }

    pub const fn phase(&self) -> CollisionPhase {
        if self.fireworks {
            CollisionPhase::Fireworks
        } else if self.collision_count > 0 {
            CollisionPhase::Expand
        } else {
            CollisionPhase::Approach
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn render_waves(&mut self, leds: &mut [Grb]) {
        let len = i32::try_from(leds.len()).unwrap_or(i32::MAX);

        draw(leds, self.left as i32, MAGENTA);
        draw(leds, self.right as i32, CYAN);

        self.left += DOT_SPEED;
        self.right -= DOT_SPEED;

        if self.left >= self.right && self.collision_count == 0 {
            debug!("collision: dots met, expanding");
            self.collision_count = 1;
            self.left = (len / 2 - BLOCK_HALF_WIDTH) as f32;
            self.right = (len / 2 + BLOCK_HALF_WIDTH) as f32;
        } else if self.collision_count > 0 {
            let start = (self.left as i32).max(0);
            let end = (self.right as i32).min(len - 1);
            for index in start..=end {
                draw(leds, index, BLOCK);
            }

            self.left -= EXPAND_SPEED;
            self.right += EXPAND_SPEED;
            self.collision_count += 1;
        }

        if self.collision_count > EXPAND_TICKS {
            debug!("collision: switching to fireworks");
            self.fireworks = true;
            self.fireworks_counter = 0;
        }
    }

    fn render_fireworks(&mut self, leds: &mut [Grb]) {
        let counter = self.fireworks_counter as usize;
        for (index, led) in leds.iter_mut().enumerate() {
            let burst = (index * 73 + counter * 91) % 256;
            if burst < BURST_THRESHOLD {
                *led = FIREWORK_PALETTE[(index + counter) % FIREWORK_PALETTE.len()];
            }
        }
        self.fireworks_counter = (self.fireworks_counter + 1) % FIREWORKS_CYCLE;
    }
}

/// Set a pixel if the position is on the strip
#[allow(clippy::cast_sign_loss)]
fn draw(leds: &mut [Grb], position: i32, pixel: Grb) {
    if position < 0 {
        return;
    }
    if let Some(led) = leds.get_mut(position as usize) {
        *led = pixel;
    }
}

impl Effect for CollisionEffect {
    fn timing(&self) -> FrameTiming {
        FrameTiming::free_running(40)
    }

    fn render(&mut self, leds: &mut [Grb]) {
        leds.fill(Grb::BLACK);
        if self.fireworks {
            self.render_fireworks(leds);
        } else {
            self.render_waves(leds);
        }
    }
}
