use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use log::info;

use crate::config::{ConfigError, EngineConfig};
use crate::connectivity::ConnectivityGate;
use crate::effect::EffectSlot;
use crate::frame::PixelFrame;
use crate::mode::{ModeId, ModeSelector};
use crate::pipeline::{FrameSink, TransmitError};

const SLOT_COUNT: usize = ModeId::CATALOG.len();

/// Mode engine - the animation loop orchestrator
///
/// Every tick re-reads the shared selector and lets the matching effect
/// render into the owned frame buffer. Unknown modes leave the frame as it
/// is and only pace the loop.
pub struct ModeEngine<'a, const N: usize> {
    // External dependencies and configuration
    selector: &'a ModeSelector,
    idle_pace: Duration,

    // Internal state
    frame: PixelFrame<N>,
    slots: [EffectSlot; SLOT_COUNT],
    last_mode: Option<i32>,
    dropped_ticks: u32,
}

impl<'a, const N: usize> ModeEngine<'a, N> {
    pub fn new(selector: &'a ModeSelector, config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            selector,
            idle_pace: config.idle_pace,
            frame: PixelFrame::new(),
            slots: ModeId::CATALOG.map(|mode| mode.to_slot(N)),
            last_mode: None,
            dropped_ticks: 0,
        })
    }

    /// Process one tick
    ///
    /// Returns the last transmission error of the tick, the engine itself
    /// just moves on to the next tick.
    pub fn tick<S: FrameSink>(&mut self, sink: &mut S) -> Result<(), TransmitError> {
        let raw = self.selector.get();
        let mode = ModeId::from_raw(raw);
        self.log_mode_change(raw, mode);

        let Some(slot) = mode.and_then(|mode| self.slots.iter_mut().find(|slot| slot.id() == mode))
        else {
            sink.idle(self.idle_pace);
            return Ok(());
        };

        let result = slot.tick(self.frame.pixels_mut(), sink);
        if result.is_err() {
            self.dropped_ticks = self.dropped_ticks.saturating_add(1);
        }
        result
    }

    /// Run the animation loop forever
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> ! {
        loop {
            let _ = self.tick(sink);
        }
    }

    /// Block until the network is up, then run the animation loop
    ///
    /// Nothing is submitted to `sink` before the gate opens.
    pub fn run_when_connected<D: DelayNs, S: FrameSink>(
        &mut self,
        gate: &ConnectivityGate,
        delay: &mut D,
        sink: &mut S,
    ) -> ! {
        gate.wait_connected(delay);
        info!("network ready, starting animation loop");
        self.run(sink)
    }

    /// Frame produced by the latest tick
    pub const fn frame(&self) -> &PixelFrame<N> {
        &self.frame
    }

    /// Effect state of a mode
    pub fn slot(&self, mode: ModeId) -> Option<&EffectSlot> {
        self.slots.iter().find(|slot| slot.id() == mode)
    }

    /// Number of ticks that lost at least one frame
    pub const fn dropped_ticks(&self) -> u32 {
        self.dropped_ticks
    }

    fn log_mode_change(&mut self, raw: i32, mode: Option<ModeId>) {
        if self.last_mode == Some(raw) {
            return;
        }
        self.last_mode = Some(raw);
        match mode {
            Some(mode) => info!("mode {} active: {}", raw, mode.as_str()),
            None => info!("mode {} is not assigned, idling", raw),
        }
    }
}
