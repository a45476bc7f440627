//! Pocket Pet - a virtual pet with tap-driven care and timed minigames
//!
//! Core modules:
//! - `sim`: Deterministic minigame engine (timers, spawning, scoring, lifecycle)
//! - `pet`: Creature stats, mood and identity
//! - `home`: The hosting screen that owns the pet and runs minigames
//! - `settings`: Data-driven tuning for decay and both minigames

pub mod error;
pub mod home;
pub mod pet;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, Result};
pub use home::{HomeEvent, HomeScreen, Notice};
pub use pet::{Accessory, ColorTheme, CreatureStats, Customization, Identity, Mood};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Countdown resolution: one clock tick per second
    pub const CLOCK_TICK_MS: u64 = 1000;
    /// Delay between a session ending and its result being delivered
    pub const RESULT_DELAY_MS: u64 = 1000;
    /// Pending items disappear after this long if never tapped
    pub const ITEM_LIFETIME_MS: u64 = 3000;

    /// Feeding minigame
    pub const FEEDING_DURATION_SECS: u32 = 15;
    pub const FEEDING_SPAWN_MS: u64 = 800;
    pub const FEEDING_THRESHOLD: u32 = 50;

    /// Pool minigame
    pub const POOL_DURATION_SECS: u32 = 20;
    pub const POOL_SPAWN_MS: u64 = 1000;
    pub const POOL_THRESHOLD: u32 = 80;
    /// How far a ring falls over its lifetime
    pub const POOL_RING_FALL: f32 = 300.0;

    /// Passive stat decay cadence (30 seconds)
    pub const DECAY_INTERVAL_MS: u64 = 30_000;

    /// Stat bounds
    pub const STAT_MIN: f32 = 0.0;
    pub const STAT_MAX: f32 = 100.0;

    /// Customization
    pub const NAME_MAX_CHARS: usize = 15;
    pub const DEFAULT_NAME: &str = "Pikachu";
}

/// Clamp a stat value into the valid range
#[inline]
pub fn clamp_stat(value: f32) -> f32 {
    value.clamp(consts::STAT_MIN, consts::STAT_MAX)
}
