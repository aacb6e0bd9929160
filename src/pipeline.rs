//! Frame transmission pipeline
//!
//! Hands finished frames to the protocol transmitter, optionally waits for
//! the hardware to finish clocking them out, then paces the animation loop.
//! The caller owns the frame, the pipeline only borrows it for one submission.

use core::fmt;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use log::warn;

use crate::Transmitter;
use crate::color::Grb;
use crate::config::{ConfigError, EngineConfig};

/// Errors reported at the transmitter boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmitError {
    /// The transmitter refused the frame
    Rejected,
    /// No free slot in the transmitter queue
    QueueFull,
    /// Hardware did not report completion in time
    Timeout,
}

impl fmt::Display for TransmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => f.write_str("frame rejected by transmitter"),
            Self::QueueFull => f.write_str("transmit queue is full"),
            Self::Timeout => f.write_str("timed out waiting for transmission to finish"),
        }
    }
}

/// Per-frame transmission policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTiming {
    /// Block until the hardware finished sending the frame
    pub wait_for_completion: bool,
    /// Delay applied after the frame was submitted
    pub pace: Duration,
}

impl FrameTiming {
    /// Frame is submitted and the loop moves on without waiting for hardware
    pub const fn free_running(pace_ms: u64) -> Self {
        Self {
            wait_for_completion: false,
            pace: Duration::from_millis(pace_ms),
        }
    }

    /// Loop waits for the hardware to finish before pacing
    pub const fn synced(pace_ms: u64) -> Self {
        Self {
            wait_for_completion: true,
            pace: Duration::from_millis(pace_ms),
        }
    }
}

/// Destination of rendered frames
pub trait FrameSink {
    /// Submit a frame and apply its timing policy
    fn submit(&mut self, pixels: &[Grb], timing: FrameTiming) -> Result<(), TransmitError>;

    /// Pace the loop without submitting anything
    fn idle(&mut self, pace: Duration);
}

/// Pipeline over a protocol transmitter and a blocking delay provider
pub struct TransmitPipeline<T: Transmitter, D: DelayNs> {
    transmitter: T,
    delay: D,
    completion_timeout: Duration,
}

impl<T: Transmitter, D: DelayNs> TransmitPipeline<T, D> {
    pub fn new(transmitter: T, delay: D, config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            transmitter,
            delay,
            completion_timeout: config.completion_timeout,
        })
    }

    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    fn send(&mut self, bytes: &[u8], wait_for_completion: bool) -> Result<(), TransmitError> {
        self.transmitter.transmit(bytes)?;
        if wait_for_completion {
            self.transmitter.wait_all_done(self.completion_timeout)?;
        }
        Ok(())
    }

    fn pause(&mut self, pace: Duration) {
        let millis = u32::try_from(pace.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(millis);
    }
}

impl<T: Transmitter, D: DelayNs> FrameSink for TransmitPipeline<T, D> {
    fn submit(&mut self, pixels: &[Grb], timing: FrameTiming) -> Result<(), TransmitError> {
        let result = self.send(bytemuck::cast_slice(pixels), timing.wait_for_completion);
        if let Err(err) = result {
            warn!("frame dropped: {}", err);
        }
        // Pacing applies even when the frame was dropped
        self.pause(timing.pace);
        result
    }

    fn idle(&mut self, pace: Duration) {
        self.pause(pace);
    }
}
