//! Deterministic minigame simulation
//!
//! All minigame logic lives here. This module must be pure and deterministic:
//! - Virtual time only (advanced explicitly by the host)
//! - Seeded RNG only
//! - Owned timers only, cancelled with their session
//! - No rendering or platform dependencies

pub mod item;
pub mod presets;
pub mod score;
pub mod session;
pub mod timer;

pub use item::{CollectibleItem, ItemId, ItemStyle, Motion, PlayArea, PointTable, Tier};
pub use presets::MinigameKind;
pub use score::{ScoreBoard, evaluate};
pub use session::{
    Outcome, Phase, Session, SessionConfig, SessionConfigBuilder, SessionEvent, SessionResult,
};
pub use timer::{Delay, Interval};
