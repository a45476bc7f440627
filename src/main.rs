//! Pocket Pet headless demo
//!
//! Runs a short scripted visit to the home screen on a fixed timestep:
//! pet the creature, play both minigames with a simple autoplayer, let the
//! needs decay for a while, then tear everything down.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pocket_pet::pet::{Accessory, ColorTheme, StatKind};
    use pocket_pet::sim::{MinigameKind, Tier};
    use pocket_pet::{HomeEvent, HomeScreen, Settings};

    /// Simulation step for the demo loop (10 Hz is plenty for tap games)
    const STEP_MS: u64 = 100;
    /// Upper bound on how long a single minigame may take
    const MAX_GAME_MS: u64 = 60_000;

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Pocket Pet starting...");

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0xC0FFEE);
        let mut home = HomeScreen::new(Settings::default(), seed);

        home.tap_pet();
        home.clean();

        let mut custom = home.identity().customization();
        custom.name = "Sparky".to_string();
        custom.color = ColorTheme::ElectricBlue;
        custom.accessory = Accessory::Glasses;
        home.customize(custom);

        play_minigame(&mut home, MinigameKind::Feeding, seed);
        play_minigame(&mut home, MinigameKind::Pool, seed.rotate_left(17));

        // Leave the pet alone for two minutes
        for _ in 0..(120_000 / STEP_MS) {
            home.advance(STEP_MS);
        }
        report(&mut home);

        home.rest();
        report(&mut home);
        home.teardown();
    }

    /// Autoplayer: taps the best item on screen, skipping some to look human
    fn play_minigame(home: &mut HomeScreen, kind: MinigameKind, seed: u64) {
        home.open_game(kind);
        home.start_game();

        let mut elapsed = 0;
        let mut tick = seed;
        while home.game().is_some() && elapsed < MAX_GAME_MS {
            home.advance(STEP_MS);
            elapsed += STEP_MS;

            let target = home.game().and_then(|(_, session)| {
                session
                    .items()
                    .iter()
                    .max_by_key(|i| (tier_rank(i.tier), std::cmp::Reverse(i.id)))
                    .map(|i| i.id)
            });

            // Miss roughly a third of the opportunities
            tick = tick.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if let Some(id) = target {
                if (tick >> 33) % 3 != 0 {
                    home.collect(id);
                }
            }
            report(home);
        }

        if home.game().is_some() {
            log::warn!("{} did not finish in time, closing", kind.as_str());
            home.close_game();
            report(home);
        }
    }

    fn tier_rank(tier: Tier) -> u8 {
        match tier {
            Tier::Low => 0,
            Tier::Medium => 1,
            Tier::High => 2,
        }
    }

    /// Log whatever the screen reported since last time
    fn report(home: &mut HomeScreen) {
        for event in home.drain_events() {
            match event {
                HomeEvent::Notice(notice) => log::info!("[{}] {}", notice.title, notice.message),
                HomeEvent::GameClosed { kind, result } => {
                    log::info!("{} closed: {:?}", kind.title(), result)
                }
                HomeEvent::Decayed => {
                    let stats = home.stats();
                    let line: Vec<String> = StatKind::ALL
                        .iter()
                        .map(|&k| format!("{}={:.1}", k.label(), stats.get(k)))
                        .collect();
                    log::info!(
                        "{} feels {} {} ({})",
                        home.identity().name,
                        home.mood().text(),
                        home.mood().emoji(),
                        line.join(" ")
                    );
                }
                other => log::trace!("{:?}", other),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedders drive `pocket_pet::HomeScreen` directly on the web
}
