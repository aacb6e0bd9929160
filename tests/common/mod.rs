#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use myrtio_strip_modes::{
    ConnectivityGate, Duration, FrameSink, FrameTiming, Grb, TransmitError, Transmitter,
};

/// Sink that keeps every submitted frame
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<(Vec<Grb>, FrameTiming)>,
    pub idles: Vec<Duration>,
}

impl RecordingSink {
    pub fn last_frame(&self) -> &[Grb] {
        &self.frames.last().expect("no frame submitted").0
    }

    pub fn last_timing(&self) -> FrameTiming {
        self.frames.last().expect("no frame submitted").1
    }
}

impl FrameSink for RecordingSink {
    fn submit(&mut self, pixels: &[Grb], timing: FrameTiming) -> Result<(), TransmitError> {
        self.frames.push((pixels.to_vec(), timing));
        Ok(())
    }

    fn idle(&mut self, pace: Duration) {
        self.idles.push(pace);
    }
}

/// Transmitter that records calls and fails on demand
#[derive(Default)]
pub struct MockTransmitter {
    pub sent: Vec<Vec<u8>>,
    pub waits: Vec<Duration>,
    pub reject: bool,
    pub time_out: bool,
}

impl Transmitter for MockTransmitter {
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError> {
        if self.reject {
            return Err(TransmitError::Rejected);
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn wait_all_done(&mut self, timeout: Duration) -> Result<(), TransmitError> {
        self.waits.push(timeout);
        if self.time_out {
            return Err(TransmitError::Timeout);
        }
        Ok(())
    }
}

/// Delay that only records requested milliseconds
#[derive(Default)]
pub struct RecordingDelay {
    pub millis: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.millis.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.millis.push(ms);
    }
}

/// Delay that brings the link up after a number of polls
pub struct ConnectingDelay<'a> {
    pub gate: &'a ConnectivityGate,
    pub polls_left: usize,
    pub millis: Vec<u32>,
}

impl<'a> ConnectingDelay<'a> {
    pub fn new(gate: &'a ConnectivityGate, polls_left: usize) -> Self {
        Self {
            gate,
            polls_left,
            millis: Vec::new(),
        }
    }
}

impl DelayNs for ConnectingDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.millis.push(ms);
        self.polls_left = self.polls_left.saturating_sub(1);
        if self.polls_left == 0 {
            self.gate.mark_connected();
        }
    }
}
