//! Connectivity gate
//!
//! The network side marks the link up or down, the animation side blocks in
//! [`ConnectivityGate::wait_connected`] before its loop starts.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use log::{info, warn};

/// Interval between connectivity checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct ConnectivityGate {
    connected: Mutex<Cell<bool>>,
    poll_interval: Duration,
}

impl Default for ConnectivityGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityGate {
    pub const fn new() -> Self {
        Self::with_poll_interval(DEFAULT_POLL_INTERVAL)
    }

    pub const fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            connected: Mutex::new(Cell::new(false)),
            poll_interval,
        }
    }

    /// Network is associated and has an address
    pub fn mark_connected(&self) {
        if !self.swap(true) {
            info!("network connected");
        }
    }

    /// Link dropped, the gate closes until the next `mark_connected`
    pub fn mark_disconnected(&self) {
        if self.swap(false) {
            warn!("network disconnected, waiting for reconnect");
        }
    }

    pub fn is_connected(&self) -> bool {
        critical_section::with(|cs| self.connected.borrow(cs).get())
    }

    /// Block until the network is connected
    pub fn wait_connected<D: DelayNs>(&self, delay: &mut D) {
        let millis = u32::try_from(self.poll_interval.as_millis()).unwrap_or(u32::MAX);
        while !self.is_connected() {
            delay.delay_ms(millis);
        }
    }

    fn swap(&self, connected: bool) -> bool {
        critical_section::with(|cs| self.connected.borrow(cs).replace(connected))
    }
}
