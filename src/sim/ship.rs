//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::WeaponKind;
use super::state::Viewport;
use super::tick::TickInput;
use crate::input_direction;
use crate::tuning::{ShipTuning, WeaponTable};

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Velocity applied during the last update (pixels/s)
    pub vel: Vec2,
    pub hp: i32,
    pub alive: bool,
    pub speed: f32,
    pub radius: f32,
    /// Visual lean into horizontal movement (degrees)
    pub tilt: f32,
    tilt_angle: f32,
    tilt_smoothing: f32,
    weapons: WeaponTable,
}

impl Ship {
    /// A fresh ship at the centre of the screen
    pub fn new(tuning: &ShipTuning, viewport: Viewport) -> Self {
        Self {
            pos: viewport.center(),
            vel: Vec2::ZERO,
            hp: tuning.max_hp,
            alive: true,
            speed: tuning.speed,
            radius: tuning.radius,
            tilt: 0.0,
            tilt_angle: tuning.tilt_angle,
            tilt_smoothing: tuning.tilt_smoothing,
            weapons: tuning.weapons.clone(),
        }
    }

    /// Move from held directions, or fall off screen once destroyed
    pub fn update(&mut self, dt: f32, input: &TickInput) {
        if self.alive {
            let dir = input_direction(input.up, input.down, input.left, input.right);
            self.vel = dir * self.speed;
            self.pos += self.vel * dt;

            let target_tilt = if input.left {
                -self.tilt_angle
            } else if input.right {
                self.tilt_angle
            } else {
                0.0
            };
            self.tilt += (target_tilt - self.tilt) * self.tilt_smoothing * dt;
        } else {
            self.vel = Vec2::new(0.0, self.speed);
            self.pos += self.vel * dt;
            self.tilt = 0.0;
        }
    }

    /// Apply damage. Returns true if this hit destroyed the ship.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.alive = false;
            return true;
        }
        false
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Shots per second for a weapon
    pub fn fire_rate(&self, weapon: WeaponKind) -> f32 {
        self.weapons.get(weapon).fire_rate
    }

    /// Pixels between consecutive shots in flight
    pub fn shot_spacing(&self, weapon: WeaponKind) -> f32 {
        self.weapons.get(weapon).spacing
    }

    /// Seconds between shots
    pub fn cooldown(&self, weapon: WeaponKind) -> f32 {
        1.0 / self.fire_rate(weapon)
    }

    /// Speed that keeps shots `spacing` pixels apart at the weapon's fire rate
    pub fn projectile_speed(&self, weapon: WeaponKind) -> f32 {
        self.shot_spacing(weapon) * self.fire_rate(weapon)
    }

    /// Where projectiles leave the ship
    pub fn muzzle(&self) -> Vec2 {
        self.pos - Vec2::new(0.0, self.radius)
    }
}
