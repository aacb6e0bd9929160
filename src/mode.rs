//! Mode identifiers and the shared mode selector
//!
//! The selector is the only state shared between the control surface and
//! the animation loop. Writes and reads go through a critical section, so a
//! write that has returned is observed by the next read.

use core::cell::Cell;

use critical_section::Mutex;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_RAINBOW_CHASE: &str = "rainbow_chase";
const MODE_NAME_WATERLOO_CHASE: &str = "waterloo_chase";
const MODE_NAME_BREATHING: &str = "breathing";
const MODE_NAME_SPARKLE: &str = "sparkle";
const MODE_NAME_FIRE: &str = "fire";
const MODE_NAME_NEON_STRIPES: &str = "neon_stripes";
const MODE_NAME_LIGHTNING: &str = "lightning";
const MODE_NAME_CHRISTMAS: &str = "christmas";
const MODE_NAME_NEW_YEAR: &str = "new_year";
const MODE_NAME_COLLISION: &str = "collision_fireworks";

const MODE_ID_OFF: i32 = 0;
const MODE_ID_RAINBOW_CHASE: i32 = 1;
// Ids 2..=6 are reserved and render nothing
const MODE_ID_WATERLOO_CHASE: i32 = 7;
const MODE_ID_BREATHING: i32 = 8;
const MODE_ID_SPARKLE: i32 = 9;
const MODE_ID_FIRE: i32 = 10;
const MODE_ID_NEON_STRIPES: i32 = 11;
const MODE_ID_LIGHTNING: i32 = 12;
const MODE_ID_CHRISTMAS: i32 = 13;
const MODE_ID_NEW_YEAR: i32 = 14;
const MODE_ID_COLLISION: i32 = 15;

/// Mode selected after boot
pub const DEFAULT_MODE: i32 = MODE_ID_RAINBOW_CHASE;

/// Known display modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ModeId {
    Off = MODE_ID_OFF,
    RainbowChase = MODE_ID_RAINBOW_CHASE,
    WaterlooChase = MODE_ID_WATERLOO_CHASE,
    Breathing = MODE_ID_BREATHING,
    Sparkle = MODE_ID_SPARKLE,
    Fire = MODE_ID_FIRE,
    NeonStripes = MODE_ID_NEON_STRIPES,
    Lightning = MODE_ID_LIGHTNING,
    Christmas = MODE_ID_CHRISTMAS,
    NewYear = MODE_ID_NEW_YEAR,
    CollisionFireworks = MODE_ID_COLLISION,
}

impl ModeId {
    /// Modes in the order they are offered on the control page
    pub const CATALOG: [Self; 11] = [
        Self::RainbowChase,
        Self::WaterlooChase,
        Self::Breathing,
        Self::Sparkle,
        Self::Fire,
        Self::NeonStripes,
        Self::Lightning,
        Self::Christmas,
        Self::NewYear,
        Self::CollisionFireworks,
        Self::Off,
    ];

    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_RAINBOW_CHASE => Self::RainbowChase,
            MODE_ID_WATERLOO_CHASE => Self::WaterlooChase,
            MODE_ID_BREATHING => Self::Breathing,
            MODE_ID_SPARKLE => Self::Sparkle,
            MODE_ID_FIRE => Self::Fire,
            MODE_ID_NEON_STRIPES => Self::NeonStripes,
            MODE_ID_LIGHTNING => Self::Lightning,
            MODE_ID_CHRISTMAS => Self::Christmas,
            MODE_ID_NEW_YEAR => Self::NewYear,
            MODE_ID_COLLISION => Self::CollisionFireworks,
            _ => return None,
        })
    }

    pub const fn raw(self) -> i32 {
        self as i32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::RainbowChase => MODE_NAME_RAINBOW_CHASE,
            Self::WaterlooChase => MODE_NAME_WATERLOO_CHASE,
            Self::Breathing => MODE_NAME_BREATHING,
            Self::Sparkle => MODE_NAME_SPARKLE,
            Self::Fire => MODE_NAME_FIRE,
            Self::NeonStripes => MODE_NAME_NEON_STRIPES,
            Self::Lightning => MODE_NAME_LIGHTNING,
            Self::Christmas => MODE_NAME_CHRISTMAS,
            Self::NewYear => MODE_NAME_NEW_YEAR,
            Self::CollisionFireworks => MODE_NAME_COLLISION,
        }
    }

    /// Human readable button label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "POWER OFF",
            Self::RainbowChase => "RAINBOW CHASE",
            Self::WaterlooChase => "WATERLOO CHASE",
            Self::Breathing => "BREATHING PULSE",
            Self::Sparkle => "SPARKLE",
            Self::Fire => "FIRE EFFECT",
            Self::NeonStripes => "NEON STRIPES",
            Self::Lightning => "LIGHTNING",
            Self::Christmas => "CHRISTMAS",
            Self::NewYear => "HAPPY NEW YEAR",
            Self::CollisionFireworks => "RYAN'S FAVORITE",
        }
    }
}

/// Shared mode cell, last writer wins
pub struct ModeSelector {
    current: Mutex<Cell<i32>>,
}

impl ModeSelector {
    pub const fn new(initial: i32) -> Self {
        Self {
            current: Mutex::new(Cell::new(initial)),
        }
    }

    /// Latest committed raw mode value
    pub fn get(&self) -> i32 {
        critical_section::with(|cs| self.current.borrow(cs).get())
    }

    /// Store a raw mode value
    ///
    /// Values are not validated, unknown ids render as no-op ticks.
    pub fn set(&self, mode: i32) {
        critical_section::with(|cs| self.current.borrow(cs).set(mode));
    }

    pub fn set_mode(&self, mode: ModeId) {
        self.set(mode.raw());
    }

    /// Current mode if it is a known one
    pub fn mode(&self) -> Option<ModeId> {
        ModeId::from_raw(self.get())
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MODE)
    }
}
