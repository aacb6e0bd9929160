//! Effect system with one slot variant per display mode
//!
//! The engine holds one slot per mode for its whole lifetime. Effects keep
//! their own progress inside the slot, so a mode picks up where it left off
//! when it is selected again.

mod breathing;
mod chase;
mod collision;
mod fire;
mod lightning;
mod new_year;
mod off;
mod rainbow;
mod sparkle;

pub use breathing::BreathingEffect;
pub use chase::ChaseEffect;
pub use collision::{CollisionEffect, CollisionPhase};
pub use fire::FireEffect;
pub use lightning::LightningEffect;
pub use new_year::NewYearEffect;
pub use off::OffEffect;
pub use rainbow::RainbowChaseEffect;
pub use sparkle::SparkleEffect;

use crate::color::Grb;
use crate::mode::ModeId;
use crate::pipeline::{FrameSink, FrameTiming, TransmitError};

pub trait Effect {
    /// Transmission policy for frames of this effect
    fn timing(&self) -> FrameTiming;

    /// Render the next frame and advance the effect state
    fn render(&mut self, leds: &mut [Grb]);

    /// Render and submit one tick worth of frames
    fn tick<S: FrameSink>(&mut self, leds: &mut [Grb], sink: &mut S) -> Result<(), TransmitError> {
        self.render(leds);
        sink.submit(leds, self.timing())
    }
}

/// Generator state of a single mode, dispatched without trait objects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Dark strip (mode 0)
    Off(OffEffect),
    /// Rotating rainbow sent in three passes (mode 1)
    RainbowChase(RainbowChaseEffect),
    /// Gold blocks on black (mode 7)
    WaterlooChase(ChaseEffect),
    /// Purple pulse (mode 8)
    Breathing(BreathingEffect),
    /// White stars (mode 9)
    Sparkle(SparkleEffect),
    /// Red and orange flicker (mode 10)
    Fire(FireEffect),
    /// Cyan and magenta stripes (mode 11)
    NeonStripes(ChaseEffect),
    /// Travelling white bolt (mode 12)
    Lightning(LightningEffect),
    /// Red and green blocks (mode 13)
    Christmas(ChaseEffect),
    /// Gold and silver stripes (mode 14)
    NewYear(NewYearEffect),
    /// Collision waves, then fireworks (mode 15)
    CollisionFireworks(CollisionEffect),
}

impl ModeId {
    /// Create the effect for this mode on a strip of `led_count` pixels
    pub fn to_slot(self, led_count: usize) -> EffectSlot {
        match self {
            Self::Off => EffectSlot::Off(OffEffect),
            Self::RainbowChase => EffectSlot::RainbowChase(RainbowChaseEffect::new()),
            Self::WaterlooChase => EffectSlot::WaterlooChase(ChaseEffect::waterloo()),
            Self::Breathing => EffectSlot::Breathing(BreathingEffect::new()),
            Self::Sparkle => EffectSlot::Sparkle(SparkleEffect::new()),
            Self::Fire => EffectSlot::Fire(FireEffect::new()),
            Self::NeonStripes => EffectSlot::NeonStripes(ChaseEffect::neon_stripes()),
            Self::Lightning => EffectSlot::Lightning(LightningEffect::new()),
            Self::Christmas => EffectSlot::Christmas(ChaseEffect::christmas()),
            Self::NewYear => EffectSlot::NewYear(NewYearEffect::new()),
            Self::CollisionFireworks => {
                EffectSlot::CollisionFireworks(CollisionEffect::new(led_count))
            }
        }
    }
}

impl EffectSlot {
    /// Mode this slot renders
    pub fn id(&self) -> ModeId {
        match self {
            Self::Off(_) => ModeId::Off,
            Self::RainbowChase(_) => ModeId::RainbowChase,
            Self::WaterlooChase(_) => ModeId::WaterlooChase,
            Self::Breathing(_) => ModeId::Breathing,
            Self::Sparkle(_) => ModeId::Sparkle,
            Self::Fire(_) => ModeId::Fire,
            Self::NeonStripes(_) => ModeId::NeonStripes,
            Self::Lightning(_) => ModeId::Lightning,
            Self::Christmas(_) => ModeId::Christmas,
            Self::NewYear(_) => ModeId::NewYear,
            Self::CollisionFireworks(_) => ModeId::CollisionFireworks,
        }
    }

    pub fn timing(&self) -> FrameTiming {
        match self {
            Self::Off(effect) => effect.timing(),
            Self::RainbowChase(effect) => effect.timing(),
            Self::WaterlooChase(effect) | Self::NeonStripes(effect) | Self::Christmas(effect) => {
                effect.timing()
            }
            Self::Breathing(effect) => effect.timing(),
            Self::Sparkle(effect) => effect.timing(),
            Self::Fire(effect) => effect.timing(),
            Self::Lightning(effect) => effect.timing(),
            Self::NewYear(effect) => effect.timing(),
            Self::CollisionFireworks(effect) => effect.timing(),
        }
    }

    /// Render the next frame without submitting it
    pub fn render(&mut self, leds: &mut [Grb]) {
        match self {
            Self::Off(effect) => effect.render(leds),
            Self::RainbowChase(effect) => effect.render(leds),
            Self::WaterlooChase(effect) | Self::NeonStripes(effect) | Self::Christmas(effect) => {
                effect.render(leds);
            }
            Self::Breathing(effect) => effect.render(leds),
            Self::Sparkle(effect) => effect.render(leds),
            Self::Fire(effect) => effect.render(leds),
            Self::Lightning(effect) => effect.render(leds),
            Self::NewYear(effect) => effect.render(leds),
            Self::CollisionFireworks(effect) => effect.render(leds),
        }
    }

    /// Render and submit the frames of one tick
    pub fn tick<S: FrameSink>(&mut self, leds: &mut [Grb], sink: &mut S) -> Result<(), TransmitError> {
        match self {
            Self::Off(effect) => effect.tick(leds, sink),
            Self::RainbowChase(effect) => effect.tick(leds, sink),
            Self::WaterlooChase(effect) | Self::NeonStripes(effect) | Self::Christmas(effect) => {
                effect.tick(leds, sink)
            }
            Self::Breathing(effect) => effect.tick(leds, sink),
            Self::Sparkle(effect) => effect.tick(leds, sink),
            Self::Fire(effect) => effect.tick(leds, sink),
            Self::Lightning(effect) => effect.tick(leds, sink),
            Self::NewYear(effect) => effect.tick(leds, sink),
            Self::CollisionFireworks(effect) => effect.tick(leds, sink),
        }
    }
}
