//! Minigame session engine
//!
//! One engine serves every minigame; a [`SessionConfig`] supplies the spawn
//! cadence, item lifetime, point table, duration and success threshold.
//! Time only moves through [`Session::advance`], and every timer the session
//! uses is owned by it, so a seeded RNG reproduces a run exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::item::{CollectibleItem, ItemId, ItemStyle, Motion, PlayArea, PointTable, Tier};
use super::score::{ScoreBoard, evaluate};
use super::timer::{Delay, Interval};
use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Lifecycle stage of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Never started: no items, clock unseeded
    Idle,
    /// Clock counting down, spawner active
    Running,
    /// Clock and spawner stopped, result computed
    Ended,
}

/// How a session came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Countdown reached zero
    Completed,
    /// Closed by the player before the countdown finished
    Abandoned,
}

/// The single result reported for each session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Which run of the engine this result belongs to
    pub generation: u32,
    pub score: u32,
    pub success: bool,
    pub outcome: Outcome,
}

/// Something observable that happened inside the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    Started { generation: u32 },
    Spawned { id: ItemId, tier: Tier },
    Expired { id: ItemId },
    Collected { id: ItemId, points: u32, score: u32 },
    Tick { remaining_secs: u32 },
    /// Phase moved to Ended (the result is delivered separately)
    Ended { score: u32, success: bool },
    /// Result delivery; exactly one per session
    Finished(SessionResult),
}

/// Tuning for one minigame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub name: String,
    pub duration_secs: u32,
    pub spawn_interval_ms: u64,
    pub item_lifetime_ms: u64,
    /// Gap between the session ending and the result being delivered
    pub result_delay_ms: u64,
    pub threshold: u32,
    pub points: PointTable,
    pub play_area: PlayArea,
    /// Item diameter range (min, max)
    pub size_range: (f32, f32),
    pub motion: Motion,
}

impl SessionConfig {
    pub fn builder(name: &str) -> SessionConfigBuilder {
        SessionConfigBuilder::new(name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.item_lifetime_ms == 0 {
            return Err(ConfigError::ZeroLifetime);
        }
        if !self.play_area.is_valid() {
            return Err(ConfigError::InvalidPlayArea {
                min: self.play_area.min.into(),
                max: self.play_area.max.into(),
            });
        }
        let (lo, hi) = self.size_range;
        if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
            return Err(ConfigError::InvalidSizeRange(lo, hi));
        }
        if let Some(tier) = Tier::ALL.into_iter().find(|&t| self.points.points(t) == 0) {
            return Err(ConfigError::WorthlessTier(tier));
        }
        Ok(())
    }
}

/// Builder for [`SessionConfig`]; unset fields take the shared defaults
#[derive(Debug, Clone)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    fn new(name: &str) -> Self {
        Self {
            config: SessionConfig {
                name: name.to_string(),
                duration_secs: FEEDING_DURATION_SECS,
                spawn_interval_ms: FEEDING_SPAWN_MS,
                item_lifetime_ms: ITEM_LIFETIME_MS,
                result_delay_ms: RESULT_DELAY_MS,
                threshold: FEEDING_THRESHOLD,
                points: PointTable {
                    low: ItemStyle::new("Low", "#9E9E9E", 5),
                    medium: ItemStyle::new("Medium", "#FF9800", 10),
                    high: ItemStyle::new("High", "#F44336", 15),
                },
                play_area: PlayArea::new(Vec2::ZERO, Vec2::new(300.0, 300.0)),
                size_range: (50.0, 50.0),
                motion: Motion::Static,
            },
        }
    }

    pub fn duration_secs(mut self, secs: u32) -> Self {
        self.config.duration_secs = secs;
        self
    }

    pub fn spawn_interval_ms(mut self, ms: u64) -> Self {
        self.config.spawn_interval_ms = ms;
        self
    }

    pub fn item_lifetime_ms(mut self, ms: u64) -> Self {
        self.config.item_lifetime_ms = ms;
        self
    }

    pub fn result_delay_ms(mut self, ms: u64) -> Self {
        self.config.result_delay_ms = ms;
        self
    }

    pub fn threshold(mut self, threshold: u32) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn points(mut self, low: ItemStyle, medium: ItemStyle, high: ItemStyle) -> Self {
        self.config.points = PointTable { low, medium, high };
        self
    }

    pub fn play_area(mut self, min: Vec2, max: Vec2) -> Self {
        self.config.play_area = PlayArea::new(min, max);
        self
    }

    pub fn size_range(mut self, min: f32, max: f32) -> Self {
        self.config.size_range = (min, max);
        self
    }

    pub fn motion(mut self, motion: Motion) -> Self {
        self.config.motion = motion;
        self
    }

    pub fn build(self) -> Result<SessionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// A restartable minigame session
#[derive(Debug, Clone)]
pub struct Session<R = Pcg32> {
    config: SessionConfig,
    rng: R,
    phase: Phase,
    generation: u32,
    now_ms: u64,
    remaining_secs: u32,
    board: ScoreBoard,
    /// Pending items (sorted by id)
    items: Vec<CollectibleItem>,
    clock: Interval,
    spawner: Interval,
    result_timer: Delay,
    /// Computed at natural end, waiting out the presentation delay
    pending: Option<SessionResult>,
    /// Delivered but not yet pulled through `take_result`
    ready: Option<SessionResult>,
    events: Vec<SessionEvent>,
    next_id: u32,
}

impl Session<Pcg32> {
    /// Create a session with the default seeded RNG
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(config: SessionConfig, rng: R) -> Self {
        let clock = Interval::new(CLOCK_TICK_MS);
        let spawner = Interval::new(config.spawn_interval_ms);
        Self {
            config,
            rng,
            phase: Phase::Idle,
            generation: 0,
            now_ms: 0,
            remaining_secs: 0,
            board: ScoreBoard::new(),
            items: Vec::new(),
            clock,
            spawner,
            result_timer: Delay::new(),
            pending: None,
            ready: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn collected_count(&self) -> u32 {
        self.board.collected()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Items that can currently be tapped
    pub fn items(&self) -> &[CollectibleItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&CollectibleItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// True between a natural end and its delayed result delivery
    pub fn is_result_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin a fresh run (Idle → Running or Ended → Running).
    ///
    /// Returns false if already running. A result still waiting out its
    /// presentation delay is delivered before the new run begins.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running {
            log::debug!("{}: start ignored, already running", self.config.name);
            return false;
        }
        self.flush_pending();

        self.generation += 1;
        self.phase = Phase::Running;
        self.board.reset();
        self.items.clear();
        self.remaining_secs = self.config.duration_secs;
        self.clock.start(self.now_ms);
        self.spawner.start(self.now_ms);
        self.result_timer.cancel();

        log::info!(
            "{}: session {} started ({}s, target {})",
            self.config.name,
            self.generation,
            self.config.duration_secs,
            self.config.threshold
        );
        self.events.push(SessionEvent::Started {
            generation: self.generation,
        });
        true
    }

    /// Advance virtual time, firing every due timer in timestamp order.
    ///
    /// Timers due at the same instant run as: item expiry, clock tick,
    /// spawn, result delivery.
    pub fn advance(&mut self, dt_ms: u64) {
        let target = self.now_ms + dt_ms;

        while let Some(due) = self.next_due().filter(|&due| due <= target) {
            self.now_ms = due;

            self.expire_items();

            while self.clock.fire_if_due(self.now_ms) {
                self.tick();
            }

            while self.spawner.fire_if_due(self.now_ms) {
                self.spawn();
            }

            if self.result_timer.fire_if_due(self.now_ms) {
                self.flush_pending();
            }
        }

        self.now_ms = target;
    }

    /// Tap an item. Returns the points scored, or None if the item is gone
    /// (collected, expired, or the session is not running).
    pub fn collect(&mut self, id: ItemId) -> Option<u32> {
        if self.phase != Phase::Running {
            log::debug!("{}: collect {:?} ignored, not running", self.config.name, id);
            return None;
        }
        let Some(idx) = self.items.iter().position(|i| i.id == id) else {
            log::debug!("{}: collect {:?} ignored, already gone", self.config.name, id);
            return None;
        };

        let item = self.items.remove(idx);
        let score = self.board.add(item.points);
        log::debug!(
            "{}: collected {:?} (+{}) score={}",
            self.config.name,
            id,
            item.points,
            score
        );
        self.events.push(SessionEvent::Collected {
            id,
            points: item.points,
            score,
        });
        Some(item.points)
    }

    /// Close the session early.
    ///
    /// While running this ends the session and delivers an abandoned
    /// (failed) result immediately. After a natural end it delivers the
    /// pending result now instead of waiting. Returns false if there was
    /// nothing to close.
    pub fn abort(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.stop();
                self.phase = Phase::Ended;
                let result = SessionResult {
                    generation: self.generation,
                    score: self.board.score(),
                    success: false,
                    outcome: Outcome::Abandoned,
                };
                log::info!(
                    "{}: session {} abandoned at {}s left (score {})",
                    self.config.name,
                    self.generation,
                    self.remaining_secs,
                    result.score
                );
                self.events.push(SessionEvent::Ended {
                    score: result.score,
                    success: false,
                });
                self.deliver(result);
                true
            }
            Phase::Ended => self.flush_pending(),
            Phase::Idle => false,
        }
    }

    /// Acknowledge the end screen: deliver a pending result without waiting
    pub fn finish(&mut self) -> bool {
        self.flush_pending()
    }

    /// Pull the most recently delivered result (one-shot)
    pub fn take_result(&mut self) -> Option<SessionResult> {
        self.ready.take()
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn next_due(&self) -> Option<u64> {
        let expiry = self.items.iter().map(|i| i.expires_at_ms).min();
        [
            expiry,
            self.clock.due_at(),
            self.spawner.due_at(),
            self.result_timer.due_at(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn expire_items(&mut self) {
        let now = self.now_ms;
        let name = &self.config.name;
        let events = &mut self.events;
        self.items.retain(|item| {
            if item.is_expired_at(now) {
                log::trace!("{}: {:?} expired", name, item.id);
                events.push(SessionEvent::Expired { id: item.id });
                false
            } else {
                true
            }
        });
    }

    fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.events.push(SessionEvent::Tick {
            remaining_secs: self.remaining_secs,
        });
        if self.remaining_secs == 0 {
            self.end_naturally();
        }
    }

    fn spawn(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let tier = Tier::random(&mut self.rng);
        let pos = self.config.play_area.sample(&mut self.rng);
        let (lo, hi) = self.config.size_range;
        let size = lo + (hi - lo) * self.rng.random::<f32>();

        let id = self.next_id;
        self.next_id += 1;
        let item = CollectibleItem::new(id, tier, self.config.points.points(tier), pos, size)
            .with_lifetime(self.now_ms, self.config.item_lifetime_ms)
            .with_motion(self.config.motion);

        log::trace!(
            "{}: spawned {:?} {:?} at ({:.0}, {:.0})",
            self.config.name,
            item.id,
            tier,
            pos.x,
            pos.y
        );
        self.events.push(SessionEvent::Spawned { id: item.id, tier });
        self.items.push(item);
    }

    fn end_naturally(&mut self) {
        self.stop();
        self.phase = Phase::Ended;

        let score = self.board.score();
        let success = evaluate(score, self.config.threshold);
        log::info!(
            "{}: session {} over, score {} ({})",
            self.config.name,
            self.generation,
            score,
            if success { "success" } else { "short" }
        );
        self.events.push(SessionEvent::Ended { score, success });

        self.pending = Some(SessionResult {
            generation: self.generation,
            score,
            success,
            outcome: Outcome::Completed,
        });
        self.result_timer
            .schedule(self.now_ms, self.config.result_delay_ms);
    }

    /// Cancel clock and spawner and drop all pending items
    fn stop(&mut self) {
        self.clock.cancel();
        self.spawner.cancel();
        self.items.clear();
    }

    fn flush_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(result) => {
                self.deliver(result);
                true
            }
            None => false,
        }
    }

    fn deliver(&mut self, result: SessionResult) {
        self.result_timer.cancel();
        self.pending = None;
        self.ready = Some(result);
        log::info!(
            "{}: result for session {}: {:?} score={} success={}",
            self.config.name,
            result.generation,
            result.outcome,
            result.score,
            result.success
        );
        self.events.push(SessionEvent::Finished(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::presets;
    use proptest::prelude::*;

    fn finished(events: &[SessionEvent]) -> Vec<SessionResult> {
        events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Finished(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_from_idle() {
        let mut session = Session::with_seed(presets::feeding(), 1);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.items().is_empty());

        assert!(session.start());
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.remaining_secs(), 15);
        assert_eq!(session.score(), 0);

        // Starting again while running does nothing
        assert!(!session.start());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut session = Session::with_seed(presets::feeding(), 2);
        session.start();

        session.advance(799);
        assert!(session.items().is_empty());
        session.advance(1);
        assert_eq!(session.items().len(), 1);
        session.advance(800);
        assert_eq!(session.items().len(), 2);
    }

    #[test]
    fn test_items_expire_after_lifetime() {
        let mut session = Session::with_seed(presets::feeding(), 3);
        session.start();
        session.advance(800);
        let id = session.items()[0].id;

        session.advance(2999);
        assert!(session.item(id).is_some());
        session.advance(1);
        assert!(session.item(id).is_none());

        // Expired items can't be collected and don't score
        assert_eq!(session.collect(id), None);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_double_collect_scores_once() {
        let mut session = Session::with_seed(presets::feeding(), 4);
        session.start();
        session.advance(800);
        let item = session.items()[0].clone();

        assert_eq!(session.collect(item.id), Some(item.points));
        assert_eq!(session.collect(item.id), None);
        assert_eq!(session.score(), item.points);
        assert_eq!(session.collected_count(), 1);
    }

    #[test]
    fn test_countdown_is_monotonic_and_ends_once() {
        let mut session = Session::with_seed(presets::feeding(), 5);
        session.start();

        let mut last = session.remaining_secs();
        for _ in 0..40 {
            session.advance(500);
            let now = session.remaining_secs();
            assert!(now <= last);
            last = now;
        }
        assert_eq!(session.remaining_secs(), 0);
        assert_eq!(session.phase(), Phase::Ended);
        assert!(session.items().is_empty());

        let events = session.drain_events();
        let ends = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::Ended { .. }))
            .count();
        assert_eq!(ends, 1);
        assert_eq!(finished(&events).len(), 1);
    }

    #[test]
    fn test_no_spawn_at_the_instant_the_clock_ends() {
        // Pool: 20s duration, 1s spawn cadence, both due at t=20000
        let mut session = Session::with_seed(presets::pool(), 6);
        session.start();
        session.advance(19_999);
        let spawned_before = session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, SessionEvent::Spawned { .. }))
            .count();
        assert_eq!(spawned_before, 19);

        session.advance(1);
        assert_eq!(session.phase(), Phase::Ended);
        assert!(
            !session
                .drain_events()
                .iter()
                .any(|e| matches!(e, SessionEvent::Spawned { .. }))
        );
    }

    #[test]
    fn test_fish_only_run_fails() {
        let config = SessionConfig::builder("feeding")
            .points(
                ItemStyle::new("Fish", "#2196F3", 15),
                ItemStyle::new("Fish", "#2196F3", 15),
                ItemStyle::new("Fish", "#2196F3", 15),
            )
            .build()
            .unwrap();
        let mut session = Session::with_seed(config, 7);
        session.start();

        session.advance(800);
        let fish = session.items()[0].id;
        assert_eq!(session.collect(fish), Some(15));

        // Let the clock run out without collecting anything else
        session.advance(14_200);
        assert_eq!(session.phase(), Phase::Ended);
        assert_eq!(session.score(), 15);
        assert!(finished(&session.drain_events()).is_empty());
        assert!(session.is_result_pending());

        // Result arrives after the presentation delay
        session.advance(999);
        assert!(session.take_result().is_none());
        session.advance(1);
        let events = session.drain_events();
        let results = finished(&events);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 15);
        assert!(!results[0].success);
        assert_eq!(results[0].outcome, Outcome::Completed);

        // Nothing more ever fires for this session
        session.advance(60_000);
        assert!(finished(&session.drain_events()).is_empty());
        assert_eq!(session.take_result().map(|r| r.score), Some(15));
        assert_eq!(session.take_result(), None);
    }

    #[test]
    fn test_exact_threshold_succeeds() {
        let apple = || ItemStyle::new("Apple", "#4CAF50", 10);
        let config = SessionConfig::builder("feeding")
            .points(apple(), apple(), apple())
            .threshold(50)
            .build()
            .unwrap();
        let mut session = Session::with_seed(config, 8);
        session.start();

        while session.score() < 50 {
            session.advance(800);
            let id = session.items()[0].id;
            session.collect(id);
        }
        assert_eq!(session.score(), 50);

        session.advance(30_000);
        let result = session.take_result().unwrap();
        assert_eq!(result.score, 50);
        assert!(result.success);
    }

    #[test]
    fn test_pool_exact_threshold_succeeds() {
        let red = || ItemStyle::new("Red ring", "#FF6B6B", 10);
        let mut config = presets::pool();
        config.points = PointTable {
            low: red(),
            medium: red(),
            high: red(),
        };
        let mut session = Session::with_seed(config, 13);
        session.start();

        for _ in 0..8 {
            session.advance(1000);
            let id = session.items()[0].id;
            assert_eq!(session.collect(id), Some(10));
        }
        assert_eq!(session.score(), 80);

        session.advance(30_000);
        let result = session.take_result().unwrap();
        assert_eq!(result.score, 80);
        assert!(result.success);
    }

    #[test]
    fn test_abort_stops_spawning_and_reports_once() {
        let mut session = Session::with_seed(presets::feeding(), 9);
        session.start();
        session.advance(4000);
        assert!(!session.items().is_empty());
        session.drain_events();

        assert!(session.abort());
        assert_eq!(session.phase(), Phase::Ended);
        assert!(session.items().is_empty());

        session.advance(60_000);
        let events = session.drain_events();
        assert!(!events.iter().any(|e| matches!(e, SessionEvent::Spawned { .. })));
        let results = finished(&events);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].outcome, Outcome::Abandoned);
        assert!(!results[0].success);

        // A second abort has nothing left to close
        assert!(!session.abort());
        assert!(finished(&session.drain_events()).is_empty());
    }

    #[test]
    fn test_abort_during_result_delay_delivers_natural_result() {
        let mut session = Session::with_seed(presets::feeding(), 10);
        session.start();
        session.advance(15_000);
        assert!(session.is_result_pending());
        session.drain_events();

        assert!(session.abort());
        session.advance(5_000);
        let results = finished(&session.drain_events());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].outcome, Outcome::Completed);
    }

    #[test]
    fn test_restart_resets_and_flushes_pending_result() {
        let mut session = Session::with_seed(presets::feeding(), 11);
        session.start();
        session.advance(800);
        let id = session.items()[0].id;
        session.collect(id);
        session.advance(14_200);
        assert_eq!(session.phase(), Phase::Ended);
        session.drain_events();

        assert!(session.start());
        assert_eq!(session.generation(), 2);
        assert_eq!(session.score(), 0);
        assert!(session.items().is_empty());
        assert_eq!(session.remaining_secs(), 15);

        let events = session.drain_events();
        let results = finished(&events);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].generation, 1);
        assert!(matches!(events.last(), Some(SessionEvent::Started { generation: 2 })));

        // The old delay timer must not deliver anything into the new run
        session.advance(3_000);
        assert!(finished(&session.drain_events()).is_empty());
    }

    #[test]
    fn test_large_step_matches_small_steps() {
        let mut coarse = Session::with_seed(presets::pool(), 12);
        let mut fine = Session::with_seed(presets::pool(), 12);
        coarse.start();
        fine.start();

        coarse.advance(25_000);
        for _ in 0..250 {
            fine.advance(100);
        }
        assert_eq!(coarse.drain_events(), fine.drain_events());
    }

    #[test]
    fn test_determinism() {
        let mut a = Session::with_seed(presets::feeding(), 99_999);
        let mut b = Session::with_seed(presets::feeding(), 99_999);
        a.start();
        b.start();
        a.advance(5_000);
        b.advance(5_000);

        let ids: Vec<_> = a.items().iter().map(|i| (i.id, i.tier, i.pos)).collect();
        let ids_b: Vec<_> = b.items().iter().map(|i| (i.id, i.tier, i.pos)).collect();
        assert_eq!(ids, ids_b);
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        assert!(matches!(
            SessionConfig::builder("x").duration_secs(0).build(),
            Err(ConfigError::ZeroDuration)
        ));
        assert!(matches!(
            SessionConfig::builder("x").spawn_interval_ms(0).build(),
            Err(ConfigError::ZeroSpawnInterval)
        ));
        assert!(matches!(
            SessionConfig::builder("x").item_lifetime_ms(0).build(),
            Err(ConfigError::ZeroLifetime)
        ));
        assert!(matches!(
            SessionConfig::builder("x")
                .play_area(Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0))
                .build(),
            Err(ConfigError::InvalidPlayArea { .. })
        ));
        assert!(matches!(
            SessionConfig::builder("x").size_range(70.0, 40.0).build(),
            Err(ConfigError::InvalidSizeRange(..))
        ));
        assert!(matches!(
            SessionConfig::builder("x")
                .points(
                    ItemStyle::new("a", "#000", 0),
                    ItemStyle::new("b", "#000", 1),
                    ItemStyle::new("c", "#000", 2),
                )
                .build(),
            Err(ConfigError::WorthlessTier(Tier::Low))
        ));
    }

    proptest! {
        /// Score always equals the sum of points of items actually collected,
        /// whatever the tap pattern.
        #[test]
        fn prop_score_is_sum_of_collected(
            seed in any::<u64>(),
            steps in proptest::collection::vec((1u64..1500, any::<bool>(), any::<bool>()), 1..60),
        ) {
            let mut session = Session::with_seed(presets::feeding(), seed);
            session.start();
            let mut expected = 0u32;

            for (dt, tap, double_tap) in steps {
                session.advance(dt);
                if tap {
                    if let Some(id) = session.items().first().map(|i| i.id) {
                        if let Some(points) = session.collect(id) {
                            expected += points;
                        }
                        if double_tap {
                            prop_assert_eq!(session.collect(id), None);
                        }
                    }
                }
                prop_assert_eq!(session.score(), expected);
                if session.phase() != Phase::Running {
                    prop_assert!(session.items().is_empty());
                }
            }
        }
    }
}
