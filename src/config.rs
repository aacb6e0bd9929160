//! Engine configuration
//!
//! Defaults match the stock 300 pixel WS2812B strip.

use core::fmt;

use embassy_time::Duration;

/// Number of pixels on the stock strip
pub const DEFAULT_LED_COUNT: usize = 300;

/// Upper bound for a single hardware completion wait
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_millis(1000);

/// Pace of ticks for unknown modes
pub const DEFAULT_IDLE_PACE: Duration = Duration::from_millis(100);

/// Invalid configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Completion timeout must be non-zero
    ZeroTimeout,
    /// Idle ticks would spin without pacing
    ZeroIdlePace,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTimeout => f.write_str("completion timeout must be non-zero"),
            Self::ZeroIdlePace => f.write_str("idle pace must be non-zero"),
        }
    }
}

/// Configuration for the mode engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bound for waits on hardware completion
    pub completion_timeout: Duration,
    /// Delay applied on ticks that render nothing
    pub idle_pace: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            completion_timeout: DEFAULT_COMPLETION_TIMEOUT,
            idle_pace: DEFAULT_IDLE_PACE,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.completion_timeout.as_ticks() == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.idle_pace.as_ticks() == 0 {
            return Err(ConfigError::ZeroIdlePace);
        }
        Ok(())
    }
}
