//! Projectiles and the weapons that fire them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Quad, Rect};
use super::state::Viewport;
use crate::consts::{LASER_LENGTH, LASER_WIDTH};

/// Weapon the ship currently fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Thin fast beam segments, medium damage
    #[default]
    Laser,
    /// Round slugs, light damage, widest hitbox
    Bullet,
    /// Heavy hitter
    Rocket,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Laser, WeaponKind::Bullet, WeaponKind::Rocket];

    /// Next weapon in the cycle (wraps around)
    pub fn next(self) -> Self {
        match self {
            WeaponKind::Laser => WeaponKind::Bullet,
            WeaponKind::Bullet => WeaponKind::Rocket,
            WeaponKind::Rocket => WeaponKind::Laser,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Laser => "LASER",
            WeaponKind::Bullet => "BULLET",
            WeaponKind::Rocket => "ROCKET",
        }
    }

    /// Damage dealt per hit
    pub fn damage(self) -> i32 {
        match self {
            WeaponKind::Laser => 20,
            WeaponKind::Bullet => 10,
            WeaponKind::Rocket => 40,
        }
    }

    /// Collision radius
    pub fn radius(self) -> f32 {
        match self {
            WeaponKind::Bullet => 5.0,
            WeaponKind::Laser | WeaponKind::Rocket => 2.0,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    pub weapon: WeaponKind,
}

impl Projectile {
    /// Fire straight up (screen space) at `speed` pixels/s
    pub fn new(weapon: WeaponKind, pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, -speed),
            damage: weapon.damage(),
            weapon,
        }
    }

    /// Advance; returns true once the projectile has left the screen
    pub fn update(&mut self, dt: f32, viewport: Viewport) -> bool {
        self.pos += self.vel * dt;
        !viewport.contains(self.pos)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.weapon.radius()
    }

    /// Thin projectiles hit oriented hitboxes with their trailing line
    /// rectangle instead of a circle. Lasers and rockets share the thin radius.
    pub fn uses_line_query(&self) -> bool {
        self.radius() < WeaponKind::Bullet.radius()
    }

    /// Rectangle swept behind the projectile (the drawn laser beam)
    pub fn line_rect(&self) -> Rect {
        Rect::new(
            self.pos.x - LASER_WIDTH / 2.0,
            self.pos.y - LASER_LENGTH,
            LASER_WIDTH,
            LASER_LENGTH,
        )
    }

    /// Line rectangle as a quad for the separating-axis test
    pub fn line_quad(&self) -> Quad {
        self.line_rect().corners()
    }
}
