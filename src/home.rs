//! Home screen: owns the pet, runs passive decay, hosts minigames
//!
//! Like a session, the screen is driven purely by `advance(dt_ms)` plus
//! direct calls for each button. Its decay timer and any open minigame are
//! owned values, so `teardown` (or dropping the screen) leaves nothing running.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::pet::{CreatureStats, Customization, Identity, Mood, StatChange};
use crate::settings::Settings;
use crate::sim::{
    Interval, ItemId, MinigameKind, Outcome, Phase, Session, SessionEvent, SessionResult,
};

/// A user-facing message (the host decides how to show it)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(title: &str, message: String) -> Self {
        Self {
            title: title.to_string(),
            message,
        }
    }
}

/// Everything the screen reports back to its presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HomeEvent {
    /// Passive decay ran
    Decayed,
    GameOpened(MinigameKind),
    /// Forwarded from the open minigame
    Game(MinigameKind, SessionEvent),
    /// The minigame overlay went away; `result` is None if it was never started
    GameClosed {
        kind: MinigameKind,
        result: Option<SessionResult>,
    },
    Notice(Notice),
    Customized,
}

#[derive(Debug)]
struct ActiveGame {
    kind: MinigameKind,
    session: Session,
}

/// Stat changes granted for winning a minigame
pub fn reward(kind: MinigameKind) -> StatChange {
    match kind {
        MinigameKind::Feeding => StatChange::FEEDING_REWARD,
        MinigameKind::Pool => StatChange::POOL_REWARD,
    }
}

/// The message shown when a minigame result comes in
pub fn result_notice(kind: MinigameKind, result: &SessionResult, pet_name: &str) -> Notice {
    let score = result.score;
    match (kind, result.success) {
        (MinigameKind::Feeding, true) => Notice::new(
            "🎉 Great Job!",
            format!("You scored {score} points! {pet_name} is well-fed and happy!"),
        ),
        (MinigameKind::Feeding, false) => Notice::new(
            "😅 Almost There!",
            format!("You scored {score} points. {pet_name} got some food but is still a bit hungry."),
        ),
        (MinigameKind::Pool, true) => {
            Notice::new("🎉 Splash-tastic!", format!("You scored {score} points!"))
        }
        (MinigameKind::Pool, false) => {
            Notice::new("🐠 Good Swim!", format!("You scored {score} points!"))
        }
    }
}

#[derive(Debug)]
pub struct HomeScreen {
    settings: Settings,
    stats: CreatureStats,
    identity: Identity,
    /// Seeds each minigame session
    rng: Pcg32,
    decay: Interval,
    now_ms: u64,
    last_interaction_ms: u64,
    game: Option<ActiveGame>,
    events: Vec<HomeEvent>,
    torn_down: bool,
}

impl HomeScreen {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut decay = Interval::new(settings.decay_interval_ms);
        decay.start(0);
        log::info!("Home screen ready (seed {})", seed);
        Self {
            settings,
            stats: CreatureStats::default(),
            identity: Identity::default(),
            rng: Pcg32::seed_from_u64(seed),
            decay,
            now_ms: 0,
            last_interaction_ms: 0,
            game: None,
            events: Vec::new(),
            torn_down: false,
        }
    }

    pub fn stats(&self) -> &CreatureStats {
        &self.stats
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mood(&self) -> Mood {
        self.stats.mood()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Time since the pet was last tapped
    pub fn idle_for_ms(&self) -> u64 {
        self.now_ms - self.last_interaction_ms
    }

    /// The open minigame, if any
    pub fn game(&self) -> Option<(MinigameKind, &Session)> {
        self.game.as_ref().map(|g| (g.kind, &g.session))
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Advance wall-clock time for decay and the open minigame
    pub fn advance(&mut self, dt_ms: u64) {
        if self.torn_down {
            return;
        }
        let target = self.now_ms + dt_ms;

        if let Some(game) = self.game.as_mut() {
            game.session.advance(dt_ms);
        }
        self.pump_game();

        while self.decay.fire_if_due(target) {
            self.stats.decay(&self.settings.decay);
            log::debug!("Decay tick: {:?}", self.stats);
            self.events.push(HomeEvent::Decayed);
        }

        self.now_ms = target;
    }

    /// Pet the creature. Returns true if it sparkles (it's nice and clean).
    pub fn tap_pet(&mut self) -> bool {
        let sparkles = self.stats.sparkles_on_tap();
        self.stats.apply(&StatChange::TAP);
        self.last_interaction_ms = self.now_ms;
        sparkles
    }

    pub fn clean(&mut self) {
        self.stats.apply(&StatChange::CLEAN);
        let message = format!("{} is now squeaky clean and happy!", self.identity.name);
        self.notify(Notice::new("✨ Sparkling Clean!", message));
    }

    pub fn play(&mut self) {
        self.stats.apply(&StatChange::PLAY);
        let message = format!("{} had a great time playing!", self.identity.name);
        self.notify(Notice::new("🎮 Playtime!", message));
    }

    pub fn rest(&mut self) {
        self.stats.apply(&StatChange::REST);
        let message = format!("{} is fully rested!", self.identity.name);
        self.notify(Notice::new("😴 Sweet Dreams!", message));
    }

    /// Open the feeding minigame
    pub fn feed(&mut self) {
        self.open_game(MinigameKind::Feeding);
    }

    /// Open the pool minigame
    pub fn swim(&mut self) {
        self.open_game(MinigameKind::Pool);
    }

    /// Open a minigame on its start screen, closing any other one first
    pub fn open_game(&mut self, kind: MinigameKind) {
        if self.torn_down {
            return;
        }
        self.close_game();

        let config = self.settings.minigame(kind).clone();
        let session = Session::with_seed(config, self.rng.next_u64());
        self.game = Some(ActiveGame { kind, session });
        log::info!("Opened {} minigame", kind.as_str());
        self.events.push(HomeEvent::GameOpened(kind));
    }

    /// Start (or play again) the open minigame
    pub fn start_game(&mut self) -> bool {
        let started = match self.game.as_mut() {
            Some(game) => game.session.start(),
            None => false,
        };
        self.pump_game();
        started
    }

    /// Tap an item in the open minigame
    pub fn collect(&mut self, id: ItemId) -> Option<u32> {
        let points = self.game.as_mut()?.session.collect(id);
        self.pump_game();
        points
    }

    /// "Done" on the end screen: take the result now
    pub fn finish_game(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.session.finish();
        }
        self.pump_game();
    }

    /// Close the minigame overlay. A running game counts as a loss.
    pub fn close_game(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.session.abort() {
            self.pump_game();
        }
        // Never started: nothing to report
        if let Some(game) = self.game.take() {
            log::info!("Closed {} minigame", game.kind.as_str());
            self.events.push(HomeEvent::GameClosed {
                kind: game.kind,
                result: None,
            });
        }
    }

    pub fn customize(&mut self, custom: Customization) {
        self.identity.apply(custom);
        log::info!(
            "Customized: {} ({}, {})",
            self.identity.name,
            self.identity.color.name(),
            self.identity.accessory.name()
        );
        self.events.push(HomeEvent::Customized);
    }

    /// Stop decay and close any open game; later calls to `advance` do nothing
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.close_game();
        self.decay.cancel();
        self.torn_down = true;
        log::info!("Home screen torn down");
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<HomeEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify(&mut self, notice: Notice) {
        self.events.push(HomeEvent::Notice(notice));
    }

    /// Forward session events and act on a delivered result
    fn pump_game(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let kind = game.kind;
        let generation = game.session.generation();
        let running = game.session.phase() == Phase::Running;
        let events = game.session.drain_events();

        let mut closing = None;
        for event in events {
            let finished = match &event {
                SessionEvent::Finished(result) => Some(*result),
                _ => None,
            };
            self.events.push(HomeEvent::Game(kind, event));

            if let Some(result) = finished {
                self.apply_result(kind, &result);
                // A result from an earlier run can arrive on restart; keep the new run open
                if result.generation == generation && !running {
                    closing = Some(result);
                }
            }
        }

        if let Some(result) = closing {
            self.game = None;
            log::info!("Closed {} minigame", kind.as_str());
            self.events.push(HomeEvent::GameClosed {
                kind,
                result: Some(result),
            });
        }
    }

    fn apply_result(&mut self, kind: MinigameKind, result: &SessionResult) {
        if result.success {
            self.stats.apply(&reward(kind));
            log::info!("{} reward applied: {:?}", kind.as_str(), self.stats);
        }
        if result.outcome == Outcome::Completed {
            let notice = result_notice(kind, result, &self.identity.name);
            self.notify(notice);
        }
    }
}
