//! Asteroid Rush - survive the rock storm
//!
//! Core modules:
//! - `sim`: Seeded simulation (entities, spawning, collisions, game state)
//! - `renderer`: Render pass that draws a state snapshot through the platform
//! - `platform`: Windowing/input/drawing abstraction the core calls into
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use app::{App, RunStats};
pub use settings::Settings;
pub use tuning::{ConfigError, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default viewport size (pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 800;

    /// Ship defaults
    pub const SHIP_MAX_HP: i32 = 100;
    pub const SHIP_SPEED: f32 = 250.0;
    pub const SHIP_RADIUS: f32 = 12.0;
    /// Tilt (degrees) while strafing, and how fast the sprite leans into it
    pub const SHIP_TILT_ANGLE: f32 = 10.0;
    pub const SHIP_TILT_SMOOTHING: f32 = 8.0;

    /// Asteroid radius for the smallest size class
    pub const ASTEROID_BASE_RADIUS: f32 = 16.0;
    pub const ASTEROID_SPEED_MIN: f32 = 125.0;
    pub const ASTEROID_SPEED_MAX: f32 = 250.0;
    /// Spin range (degrees per second)
    pub const ASTEROID_SPIN_MIN: f32 = 50.0;
    pub const ASTEROID_SPIN_MAX: f32 = 240.0;
    /// Aim jitter radius as a fraction of min(width, height)
    pub const ASTEROID_AIM_JITTER: f32 = 0.1;

    /// Spawn pacing
    pub const SPAWN_INTERVAL_MIN: f32 = 0.5;
    pub const SPAWN_INTERVAL_MAX: f32 = 3.0;
    pub const MAX_ASTEROIDS: usize = 150;

    /// Laser query rectangle (trails behind the projectile)
    pub const LASER_WIDTH: f32 = 4.0;
    pub const LASER_LENGTH: f32 = 30.0;
}

/// Rotate a vector by an angle given in degrees
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit direction from a set of held directions; zero when nothing (or
/// opposing keys only) is held
#[inline]
pub fn input_direction(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if up {
        dir.y -= 1.0;
    }
    if down {
        dir.y += 1.0;
    }
    if left {
        dir.x -= 1.0;
    }
    if right {
        dir.x += 1.0;
    }
    dir.normalize_or_zero()
}
