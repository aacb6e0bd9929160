//! Bridge to `smart-leds` drivers
//!
//! Any blocking [`SmartLedsWrite`] implementation can act as the protocol
//! transmitter. Such drivers return only after the data is clocked out, so
//! waiting for completion is a no-op.

use embassy_time::Duration;
use smart_leds::SmartLedsWrite;

use crate::Transmitter;
use crate::color::{Grb, Rgb};
use crate::pipeline::TransmitError;

pub struct SmartLedsTransmitter<W> {
    writer: W,
}

impl<W> SmartLedsTransmitter<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Transmitter for SmartLedsTransmitter<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError> {
        let pixels: &[Grb] =
            bytemuck::try_cast_slice(data).map_err(|_| TransmitError::Rejected)?;
        // Drivers apply their own wire order, hand them plain RGB
        self.writer
            .write(pixels.iter().map(|pixel| pixel.to_rgb()))
            .map_err(|_| TransmitError::Rejected)
    }

    fn wait_all_done(&mut self, _timeout: Duration) -> Result<(), TransmitError> {
        Ok(())
    }
}
