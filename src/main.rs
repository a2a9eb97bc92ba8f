//! Raindrop entry point
//!
//! Runs a headless game on a virtual 60 Hz clock with the autopilot steering
//! the bucket. Pass a JSON field config path as the first argument to
//! override the defaults.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use raindrop::consts::FRAME_DT;
use raindrop::host::{Game, LogAudio, LogRenderer, autopilot};
use raindrop::sim::{GameEvent, SeededSpawner};
use raindrop::FieldConfig;

/// One minute of play
const FRAMES: u32 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Raindrop (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => FieldConfig::load_or_default(path),
        None => FieldConfig::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut game = match Game::new(
        config,
        SeededSpawner::new(seed),
        LogRenderer,
        LogAudio::default(),
        Duration::ZERO,
    ) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid field config: {}", e);
            std::process::exit(1);
        }
    };

    let mut now = Duration::ZERO;
    let mut missed = 0u32;
    for _ in 0..FRAMES {
        now += Duration::from_secs_f32(FRAME_DT);
        let input = autopilot(game.state());
        let events = game.frame(&input, FRAME_DT, now);
        missed += events
            .iter()
            .filter(|e| matches!(e, GameEvent::Missed { .. }))
            .count() as u32;
    }

    println!(
        "Drops collected: {}, missed: {}, still falling: {}",
        game.state().score(),
        missed,
        game.state().drops().len()
    );
}
