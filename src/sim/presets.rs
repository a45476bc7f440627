//! The two shipped minigames
//!
//! Both are plain [`SessionConfig`] values for the shared session engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::item::{ItemStyle, Motion, PlayArea, PointTable};
use super::session::SessionConfig;
use crate::consts::*;

/// Which minigame a session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinigameKind {
    /// Tap falling food before it disappears
    Feeding,
    /// Catch rings sinking through the pool
    Pool,
}

impl MinigameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinigameKind::Feeding => "feeding",
            MinigameKind::Pool => "pool",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MinigameKind::Feeding => "Feeding Time!",
            MinigameKind::Pool => "Pool Day!",
        }
    }

    /// Built-in configuration
    pub fn default_config(&self) -> SessionConfig {
        match self {
            MinigameKind::Feeding => feeding(),
            MinigameKind::Pool => pool(),
        }
    }
}

/// Feeding: 15 seconds, food every 800ms, 50 points to win
pub fn feeding() -> SessionConfig {
    SessionConfig {
        name: MinigameKind::Feeding.as_str().to_string(),
        duration_secs: FEEDING_DURATION_SECS,
        spawn_interval_ms: FEEDING_SPAWN_MS,
        item_lifetime_ms: ITEM_LIFETIME_MS,
        result_delay_ms: RESULT_DELAY_MS,
        threshold: FEEDING_THRESHOLD,
        points: PointTable {
            low: ItemStyle::new("Cookie", "#8D6E63", 5),
            medium: ItemStyle::new("Apple", "#4CAF50", 10),
            high: ItemStyle::new("Fish", "#2196F3", 15),
        },
        play_area: PlayArea::new(Vec2::new(50.0, 100.0), Vec2::new(300.0, 300.0)),
        size_range: (50.0, 50.0),
        motion: Motion::Static,
    }
}

/// Pool: 20 seconds, a ring every second, 80 points to win.
///
/// Rings enter along the top edge and sink while they are catchable.
pub fn pool() -> SessionConfig {
    SessionConfig {
        name: MinigameKind::Pool.as_str().to_string(),
        duration_secs: POOL_DURATION_SECS,
        spawn_interval_ms: POOL_SPAWN_MS,
        item_lifetime_ms: ITEM_LIFETIME_MS,
        result_delay_ms: RESULT_DELAY_MS,
        threshold: POOL_THRESHOLD,
        points: PointTable {
            low: ItemStyle::new("Teal ring", "#4ECDC4", 5),
            medium: ItemStyle::new("Red ring", "#FF6B6B", 10),
            high: ItemStyle::new("Blue ring", "#45B7D1", 15),
        },
        play_area: PlayArea::new(Vec2::new(20.0, 0.0), Vec2::new(300.0, 0.0)),
        size_range: (40.0, 70.0),
        motion: Motion::Falling {
            distance: POOL_RING_FALL,
        },
    }
}
