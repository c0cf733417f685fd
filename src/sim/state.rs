//! Game state and core simulation types
//!
//! `GameState` is the single owner of every live entity. Nothing outside the
//! simulation holds references into it; the renderer reads a snapshot.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidShape, SizeClass};
use super::projectile::{Projectile, WeaponKind};
use super::ship::Ship;
use super::spawn::{ShapeSelection, next_spawn_interval};
use crate::tuning::Tuning;

/// Fixed-size screen rectangle the game plays in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Inclusive containment test on [0, w] x [0, h]
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.contains_with_margin(p, 0.0)
    }

    /// Containment test on the rect grown by `margin` on every side
    #[inline]
    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        let size = self.size();
        p.x >= -margin && p.x <= size.x + margin && p.y >= -margin && p.y <= size.y + margin
    }
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship alive
    Playing,
    /// Ship destroyed and falling; waiting for restart
    GameOver,
}

/// Something that happened during a tick (drained by the app each frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { weapon: WeaponKind },
    AsteroidSpawned { shape: AsteroidShape, size: SizeClass },
    AsteroidDestroyed { shape: AsteroidShape, weapon: WeaponKind },
    ShipHit { damage: i32, hp: i32 },
    ShipDestroyed,
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance sheet this run was started with
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Live asteroids, in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Live projectiles, in fire order
    pub projectiles: Vec<Projectile>,
    /// Shape used for the next spawn
    pub shape: ShapeSelection,
    /// Weapon the ship fires
    pub weapon: WeaponKind,
    /// Seconds of fire credit accumulated toward the next shot
    pub shot_timer: f32,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
    /// Seconds to wait before the next spawn
    pub spawn_interval: f32,
    /// Frames simulated since start
    pub frame: u64,
    /// Seconds simulated since start
    pub elapsed: f64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let viewport = tuning.viewport();
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_interval = next_spawn_interval(&mut rng, &tuning);
        let ship = Ship::new(&tuning.ship, viewport);

        Self {
            seed,
            viewport,
            phase: GamePhase::Playing,
            ship,
            asteroids: Vec::with_capacity(tuning.spawn.max_asteroids),
            projectiles: Vec::with_capacity(256),
            shape: ShapeSelection::Fixed(AsteroidShape::Triangle),
            weapon: WeaponKind::Laser,
            shot_timer: 0.0,
            spawn_timer: 0.0,
            spawn_interval,
            frame: 0,
            elapsed: 0.0,
            events: Vec::new(),
            rng,
            tuning,
        }
    }

    /// Fresh ship, empty field, spawn clock reset. Fire credit is dropped so
    /// the new ship starts like one from [`GameState::new`]. Shape and weapon
    /// selections carry over.
    pub fn restart(&mut self) {
        self.ship = Ship::new(&self.tuning.ship, self.viewport);
        self.asteroids.clear();
        self.projectiles.clear();
        self.shot_timer = 0.0;
        self.spawn_timer = 0.0;
        self.spawn_interval = next_spawn_interval(&mut self.rng, &self.tuning);
        self.phase = GamePhase::Playing;
    }

    #[inline]
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_playing_with_centered_ship() {
        let state = GameState::new(Tuning::default(), 7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ship.pos, Vec2::new(400.0, 400.0));
        assert!(state.asteroids.is_empty());
        assert!(state.projectiles.is_empty());
        assert!((0.5..=3.0).contains(&state.spawn_interval));
    }

    #[test]
    fn test_viewport_margin() {
        let vp = Viewport::new(800, 600);
        assert!(vp.contains(Vec2::new(0.0, 600.0)));
        assert!(!vp.contains(Vec2::new(-0.1, 10.0)));
        assert!(vp.contains_with_margin(Vec2::new(-15.0, 10.0), 16.0));
        assert!(!vp.contains_with_margin(Vec2::new(10.0, 617.0), 16.0));
    }

    #[test]
    fn test_same_seed_same_interval() {
        let a = GameState::new(Tuning::default(), 99);
        let b = GameState::new(Tuning::default(), 99);
        assert_eq!(a.spawn_interval, b.spawn_interval);
    }

    #[test]
    fn test_restart_matches_fresh_state() {
        let mut state = GameState::new(Tuning::default(), 5);
        state.shot_timer = 0.04;
        state.spawn_timer = 2.0;
        state.weapon = WeaponKind::Rocket;
        state.ship.take_damage(500);
        state.phase = GamePhase::GameOver;

        state.restart();
        assert_eq!(state.shot_timer, 0.0);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ship.hp, state.tuning.ship.max_hp);
        assert!(state.ship.is_alive());
        // Selections carry over
        assert_eq!(state.weapon, WeaponKind::Rocket);
    }
}
