//! The creature itself: needs, derived mood, and appearance

pub mod identity;
pub mod stats;

pub use identity::{Accessory, ColorTheme, Customization, Identity, sanitize_name};
pub use stats::{
    Change, Condition, CreatureStats, DecayRates, IdleStyle, Mood, StatChange, StatKind, StatLevel,
};
