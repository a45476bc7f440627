//! Collectible items spawned during a minigame

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque item handle, unique within one session engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u32);

impl ItemId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Value tier of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Low, Tier::Medium, Tier::High];

    /// Uniform pick over all tiers
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// How an item of a given tier looks and what it is worth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    /// Display name ("Apple", "Red ring", ...)
    pub label: String,
    /// Display color as a hex string
    pub color: String,
    pub points: u32,
}

impl ItemStyle {
    pub fn new(label: &str, color: &str, points: u32) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            points,
        }
    }
}

/// Tier → style lookup for one minigame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointTable {
    pub low: ItemStyle,
    pub medium: ItemStyle,
    pub high: ItemStyle,
}

impl PointTable {
    pub fn style(&self, tier: Tier) -> &ItemStyle {
        match tier {
            Tier::Low => &self.low,
            Tier::Medium => &self.medium,
            Tier::High => &self.high,
        }
    }

    pub fn points(&self, tier: Tier) -> u32 {
        self.style(tier).points
    }
}

/// Axis-aligned spawn rectangle (inclusive of `min`, exclusive of `max`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayArea {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// A degenerate axis (min == max) is allowed and pins that coordinate
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Uniform point inside the area
    pub fn sample(&self, rng: &mut impl Rng) -> Vec2 {
        let t = Vec2::new(rng.random::<f32>(), rng.random::<f32>());
        self.min + (self.max - self.min) * t
    }
}

/// Movement applied over an item's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Motion {
    #[default]
    Static,
    /// Falls straight down, covering `distance` by the time it expires
    Falling { distance: f32 },
}

/// A transient, tappable item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleItem {
    pub id: ItemId,
    pub tier: Tier,
    pub points: u32,
    /// Spawn position
    pub pos: Vec2,
    /// Display diameter
    pub size: f32,
    pub motion: Motion,
    pub spawned_at_ms: u64,
    pub expires_at_ms: u64,
}

impl CollectibleItem {
    pub(crate) fn new(id: u32, tier: Tier, points: u32, pos: Vec2, size: f32) -> Self {
        Self {
            id: ItemId(id),
            tier,
            points,
            pos,
            size,
            motion: Motion::Static,
            spawned_at_ms: 0,
            expires_at_ms: 0,
        }
    }

    pub(crate) fn with_lifetime(mut self, spawned_at_ms: u64, lifetime_ms: u64) -> Self {
        self.spawned_at_ms = spawned_at_ms;
        self.expires_at_ms = spawned_at_ms + lifetime_ms;
        self
    }

    pub(crate) fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_ms
    }

    /// Fraction of the lifetime already used, 0 at spawn and 1 at expiry
    pub fn age_fraction(&self, now_ms: u64) -> f32 {
        let lifetime = self.expires_at_ms.saturating_sub(self.spawned_at_ms);
        if lifetime == 0 {
            return 1.0;
        }
        let age = now_ms.saturating_sub(self.spawned_at_ms).min(lifetime);
        age as f32 / lifetime as f32
    }

    /// Where the item is drawn at `now_ms`
    pub fn position_at(&self, now_ms: u64) -> Vec2 {
        match self.motion {
            Motion::Static => self.pos,
            Motion::Falling { distance } => {
                self.pos + Vec2::new(0.0, distance * self.age_fraction(now_ms))
            }
        }
    }
}
