//! Frame driver
//!
//! Owns the game state and presentation settings, and runs the
//! poll → tick → events → draw loop against any [`Platform`].

use serde::{Deserialize, Serialize};

use crate::platform::{Platform, poll_input};
use crate::renderer::draw_frame;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};
use crate::tuning::Tuning;

/// Per-run counters built from drained game events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub frames: u64,
    pub shots: u64,
    pub asteroids_spawned: u64,
    pub asteroids_destroyed: u64,
    pub hits_taken: u64,
    pub deaths: u64,
    pub restarts: u64,
}

impl RunStats {
    pub fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ShotFired { .. } => self.shots += 1,
            GameEvent::AsteroidSpawned { .. } => self.asteroids_spawned += 1,
            GameEvent::AsteroidDestroyed { .. } => self.asteroids_destroyed += 1,
            GameEvent::ShipHit { .. } => self.hits_taken += 1,
            GameEvent::ShipDestroyed => self.deaths += 1,
            GameEvent::Restarted => self.restarts += 1,
        }
    }
}

/// Game instance holding all state
pub struct App {
    pub state: GameState,
    pub settings: Settings,
    pub stats: RunStats,
    last_phase: GamePhase,
}

impl App {
    pub fn new(tuning: Tuning, settings: Settings, seed: u64) -> Self {
        let state = GameState::new(tuning, seed);
        let last_phase = state.phase;
        Self {
            state,
            settings,
            stats: RunStats::default(),
            last_phase,
        }
    }

    /// Run one frame: input, simulation, events, drawing
    pub fn frame<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        platform.begin_frame();

        let dt = platform.frame_time();
        let input = poll_input(platform);
        tick(&mut self.state, &input, dt);

        for event in self.state.drain_events() {
            match event {
                GameEvent::ShipHit { damage, hp } => {
                    log::debug!("Ship hit for {} ({} HP left)", damage, hp)
                }
                GameEvent::AsteroidDestroyed { shape, weapon } => {
                    log::debug!("{} destroyed by {}", shape.name(), weapon.name())
                }
                _ => {}
            }
            self.stats.record(&event);
        }
        self.stats.frames += 1;

        if self.state.phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }

        draw_frame(&self.state, &self.settings, platform);
        platform.end_frame();
    }

    /// Run until the platform asks to close; returns the run's counters
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) -> RunStats {
        let viewport = platform.viewport();
        if viewport != self.state.viewport {
            log::warn!(
                "Platform viewport {}x{} differs from tuning {}x{}; using the platform's",
                viewport.width,
                viewport.height,
                self.state.viewport.width,
                self.state.viewport.height
            );
            let mut tuning = self.state.tuning.clone();
            tuning.screen_width = viewport.width;
            tuning.screen_height = viewport.height;
            self.state = GameState::new(tuning, self.state.seed);
            self.last_phase = self.state.phase;
        }

        log::info!("Starting run with seed {}", self.state.seed);
        while !platform.should_close() {
            self.frame(platform);
        }
        log::info!(
            "Run finished after {} frames ({:.1}s simulated)",
            self.stats.frames,
            self.state.elapsed
        );
        self.stats.clone()
    }
}
