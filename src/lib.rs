#![no_std]

pub mod color;
pub mod config;
pub mod connectivity;
pub mod control;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod frame;
pub mod logging;
pub mod mode;
pub mod pipeline;

pub use color::{Grb, Rgb, hsv_to_rgb};
pub use config::{ConfigError, DEFAULT_LED_COUNT, EngineConfig};
pub use connectivity::ConnectivityGate;
pub use control::{ControlResponse, ControlSurface, HttpMethod};
pub use driver::SmartLedsTransmitter;
pub use effect::{Effect, EffectSlot};
pub use engine::ModeEngine;
pub use frame::PixelFrame;
pub use mode::{DEFAULT_MODE, ModeId, ModeSelector};
pub use pipeline::{FrameSink, FrameTiming, TransmitError, TransmitPipeline};

pub use embassy_time::Duration;

/// One-wire protocol transmitter
///
/// Implement this trait to support different hardware platforms.
/// The transmission pipeline is generic over this trait.
pub trait Transmitter {
    /// Queue `data` (pixels * 3 bytes in wire order) for a single transmission
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError>;

    /// Block until every queued transmission finished, at most `timeout`
    fn wait_all_done(&mut self, timeout: Duration) -> Result<(), TransmitError>;
}
