//! Creature needs and what they look like from the outside

use serde::{Deserialize, Serialize};

use crate::clamp_stat;

/// One of the five needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Happiness,
    Hunger,
    Cleanliness,
    Energy,
    Fun,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Happiness,
        StatKind::Hunger,
        StatKind::Cleanliness,
        StatKind::Energy,
        StatKind::Fun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Happiness => "Happy",
            StatKind::Hunger => "Fed",
            StatKind::Cleanliness => "Clean",
            StatKind::Energy => "Energy",
            StatKind::Fun => "Fun",
        }
    }
}

/// Bar color band for a stat value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatLevel {
    Good,
    Fair,
    Poor,
}

impl StatLevel {
    pub fn of(value: f32) -> Self {
        if value > 70.0 {
            StatLevel::Good
        } else if value > 40.0 {
            StatLevel::Fair
        } else {
            StatLevel::Poor
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StatLevel::Good => "#4CAF50",
            StatLevel::Fair => "#FF9800",
            StatLevel::Poor => "#F44336",
        }
    }
}

/// Overall mood, from the average of all five needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    VeryHappy,
    Content,
    Unhappy,
    VerySad,
}

impl Mood {
    pub fn from_average(avg: f32) -> Self {
        if avg > 80.0 {
            Mood::VeryHappy
        } else if avg > 60.0 {
            Mood::Content
        } else if avg > 40.0 {
            Mood::Unhappy
        } else {
            Mood::VerySad
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "😊",
            Mood::Content => "😐",
            Mood::Unhappy => "😕",
            Mood::VerySad => "😢",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Content => "Content",
            Mood::Unhappy => "Unhappy",
            Mood::VerySad => "Very Sad",
        }
    }
}

/// Idle animation the pet falls into when left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdleStyle {
    /// Big fast bounces
    Excited,
    Bouncy,
    Swaying,
    /// Barely moving
    Droopy,
}

/// Status badges shown next to the pet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub hungry: bool,
    pub tired: bool,
}

/// An edit to one stat
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Change {
    #[default]
    Keep,
    Add(f32),
    Set(f32),
}

impl Change {
    fn apply(self, value: f32) -> f32 {
        match self {
            Change::Keep => value,
            Change::Add(delta) => clamp_stat(value + delta),
            Change::Set(v) => clamp_stat(v),
        }
    }
}

/// A set of per-stat edits applied together
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatChange {
    pub happiness: Change,
    pub hunger: Change,
    pub cleanliness: Change,
    pub energy: Change,
    pub fun: Change,
}

impl StatChange {
    pub const NONE: StatChange = StatChange {
        happiness: Change::Keep,
        hunger: Change::Keep,
        cleanliness: Change::Keep,
        energy: Change::Keep,
        fun: Change::Keep,
    };

    /// Petting the creature
    pub const TAP: StatChange = StatChange {
        happiness: Change::Add(5.0),
        ..StatChange::NONE
    };

    pub const CLEAN: StatChange = StatChange {
        cleanliness: Change::Set(100.0),
        happiness: Change::Add(10.0),
        ..StatChange::NONE
    };

    pub const PLAY: StatChange = StatChange {
        happiness: Change::Add(15.0),
        energy: Change::Add(-10.0),
        ..StatChange::NONE
    };

    pub const REST: StatChange = StatChange {
        energy: Change::Set(100.0),
        happiness: Change::Add(5.0),
        ..StatChange::NONE
    };

    /// Won the feeding minigame
    pub const FEEDING_REWARD: StatChange = StatChange {
        hunger: Change::Set(100.0),
        happiness: Change::Add(20.0),
        energy: Change::Add(10.0),
        ..StatChange::NONE
    };

    /// Won the pool minigame (swimming is tiring)
    pub const POOL_REWARD: StatChange = StatChange {
        fun: Change::Set(100.0),
        happiness: Change::Add(25.0),
        energy: Change::Add(-15.0),
        ..StatChange::NONE
    };
}

/// Amount each stat loses per decay tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRates {
    pub happiness: f32,
    pub hunger: f32,
    pub cleanliness: f32,
    pub energy: f32,
    pub fun: f32,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            happiness: 0.5,
            hunger: 1.0,
            cleanliness: 0.3,
            energy: 0.5,
            fun: 0.8,
        }
    }
}

/// The creature's five needs, each kept within [0, 100].
///
/// `hunger` reads as "how well fed": 100 is full.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreatureStats {
    pub happiness: f32,
    pub hunger: f32,
    pub cleanliness: f32,
    pub energy: f32,
    pub fun: f32,
}

impl Default for CreatureStats {
    fn default() -> Self {
        Self {
            happiness: 80.0,
            hunger: 60.0,
            cleanliness: 90.0,
            energy: 70.0,
            fun: 50.0,
        }
    }
}

impl CreatureStats {
    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Happiness => self.happiness,
            StatKind::Hunger => self.hunger,
            StatKind::Cleanliness => self.cleanliness,
            StatKind::Energy => self.energy,
            StatKind::Fun => self.fun,
        }
    }

    pub fn level(&self, kind: StatKind) -> StatLevel {
        StatLevel::of(self.get(kind))
    }

    pub fn apply(&mut self, change: &StatChange) {
        self.happiness = change.happiness.apply(self.happiness);
        self.hunger = change.hunger.apply(self.hunger);
        self.cleanliness = change.cleanliness.apply(self.cleanliness);
        self.energy = change.energy.apply(self.energy);
        self.fun = change.fun.apply(self.fun);
    }

    /// One passive decay step, floored at zero
    pub fn decay(&mut self, rates: &DecayRates) {
        self.happiness = clamp_stat(self.happiness - rates.happiness);
        self.hunger = clamp_stat(self.hunger - rates.hunger);
        self.cleanliness = clamp_stat(self.cleanliness - rates.cleanliness);
        self.energy = clamp_stat(self.energy - rates.energy);
        self.fun = clamp_stat(self.fun - rates.fun);
    }

    pub fn average(&self) -> f32 {
        StatKind::ALL.iter().map(|&k| self.get(k)).sum::<f32>() / StatKind::ALL.len() as f32
    }

    pub fn mood(&self) -> Mood {
        Mood::from_average(self.average())
    }

    pub fn idle_style(&self) -> IdleStyle {
        if self.happiness > 60.0 && self.fun > 50.0 {
            IdleStyle::Excited
        } else if self.happiness > 60.0 {
            IdleStyle::Bouncy
        } else if self.happiness > 30.0 {
            IdleStyle::Swaying
        } else {
            IdleStyle::Droopy
        }
    }

    /// Too tired to animate at full speed
    pub fn is_sluggish(&self) -> bool {
        self.energy < 20.0
    }

    pub fn condition(&self) -> Condition {
        Condition {
            hungry: self.hunger < 30.0,
            tired: self.energy < 30.0,
        }
    }

    /// Background glow strength (0.0 - 0.5)
    pub fn glow(&self) -> f32 {
        self.happiness / 200.0
    }

    /// Clean pets sparkle when tapped
    pub fn sparkles_on_tap(&self) -> bool {
        self.cleanliness > 80.0
    }
}
