//! Asteroid Rush entry point
//!
//! Natively this runs a headless autopilot session: the ship strafes, fires
//! continuously, cycles weapons and restarts after each death. Usage:
//!
//! ```text
//! asteroid-rush [--hitboxes] [--no-hud] [--show-shape] [--no-blink] [--no-background] [tuning.json]
//! ```

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use asteroid_rush::platform::{HeadlessPlatform, Key, KeySet, Platform};
use asteroid_rush::{App, Settings, Tuning};

/// One minute at 60 FPS
const AUTOPILOT_FRAMES: u64 = 3600;
const FRAME_DT: f32 = 1.0 / 60.0;
const WEAPON_SWAP_EVERY: u64 = 600;
const RESTART_EVERY: u64 = 90;

/// Keys the autopilot holds on `frame`
fn autopilot(frame: u64) -> KeySet {
    let mut keys = KeySet::from([Key::Fire]);

    let sway = (frame as f32 / 45.0).sin();
    if sway > 0.3 {
        keys.insert(Key::Right);
    } else if sway < -0.3 {
        keys.insert(Key::Left);
    }

    if frame > 0 && frame % WEAPON_SWAP_EVERY == 0 {
        keys.insert(Key::CycleWeapon);
    }
    if frame % RESTART_EVERY == 0 {
        keys.insert(Key::Restart);
    }
    keys
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Asteroid Rush (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut settings = Settings::default();
    let rest = settings.apply_flags(args.iter().map(String::as_str));
    let tuning = Tuning::load_or_default(rest.first().map(Path::new));

    let seed = seed_from_clock();
    let mut platform = HeadlessPlatform::new(tuning.viewport(), FRAME_DT)
        .with_frame_limit(AUTOPILOT_FRAMES)
        .with_autopilot(autopilot);

    let mut app = App::new(tuning, settings, seed);
    let stats = app.run(&mut platform);

    log::info!(
        "seed {}: {} frames, {} shots, {} spawned, {} destroyed, {} hits taken, {} deaths, {} restarts",
        seed,
        stats.frames,
        stats.shots,
        stats.asteroids_spawned,
        stats.asteroids_destroyed,
        stats.hits_taken,
        stats.deaths,
        stats.restarts
    );
    log::debug!(
        "Last frame issued {} draw calls at t={:.2}s",
        platform.draw_list.len(),
        platform.time()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the deliverable on wasm
}
