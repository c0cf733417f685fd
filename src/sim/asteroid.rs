//! Asteroids: shapes, size classes and the edge-spawn initialiser

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Quad, oriented_quad};
use super::state::Viewport;
use crate::tuning::AsteroidTuning;

/// Asteroid outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidShape {
    /// Sprite-drawn, with an oriented hitbox
    Triangle,
    Square,
    Pentagon,
}

impl AsteroidShape {
    pub const ALL: [AsteroidShape; 3] = [
        AsteroidShape::Triangle,
        AsteroidShape::Square,
        AsteroidShape::Pentagon,
    ];

    /// Polygon side count
    pub fn sides(self) -> u32 {
        match self {
            AsteroidShape::Triangle => 3,
            AsteroidShape::Square => 4,
            AsteroidShape::Pentagon => 5,
        }
    }

    /// Damage dealt to the ship by a small asteroid of this shape
    pub fn base_damage(self) -> i32 {
        match self {
            AsteroidShape::Triangle => 5,
            AsteroidShape::Square => 10,
            AsteroidShape::Pentagon => 15,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AsteroidShape::Triangle => "TRIANGLE",
            AsteroidShape::Square => "SQUARE",
            AsteroidShape::Pentagon => "PENTAGON",
        }
    }
}

/// Size class; the value is the multiplier on base radius and damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeClass {
    #[default]
    Small = 1,
    Medium = 2,
    Large = 4,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    #[inline]
    pub fn multiplier(self) -> i32 {
        self as i32
    }
}

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// An asteroid drifting across the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
    pub vel: Vec2,
    /// Degrees per second
    pub spin: f32,
    pub shape: AsteroidShape,
    pub size: SizeClass,
    radius: f32,
    /// Oriented hitbox half extents, for shapes that have one
    half_extents: Option<Vec2>,
}

impl Asteroid {
    /// Build an asteroid with explicit kinematics (spawning goes through
    /// [`Asteroid::spawn`])
    pub fn new(
        shape: AsteroidShape,
        size: SizeClass,
        pos: Vec2,
        vel: Vec2,
        rotation: f32,
        spin: f32,
        tuning: &AsteroidTuning,
    ) -> Self {
        let scale = size.multiplier() as f32;
        let half_extents = (shape == AsteroidShape::Triangle).then(|| {
            tuning.triangle_sprite * tuning.triangle_sprite_scale * scale * tuning.hitbox_shrink
                * 0.5
        });

        Self {
            pos,
            rotation,
            vel,
            spin,
            shape,
            size,
            radius: tuning.base_radius * scale,
            half_extents,
        }
    }

    /// Spawn just outside a random screen edge, heading for a point near the
    /// centre.
    ///
    /// The aim point uses a uniform angle and a uniform radius within the
    /// jitter cap, so aims cluster toward the exact centre.
    pub fn spawn<R: Rng>(
        shape: AsteroidShape,
        size: SizeClass,
        viewport: Viewport,
        rng: &mut R,
        tuning: &AsteroidTuning,
    ) -> Self {
        let mut asteroid = Self::new(shape, size, Vec2::ZERO, Vec2::ZERO, 0.0, 0.0, tuning);
        let r = asteroid.radius;
        let (w, h) = (viewport.width as f32, viewport.height as f32);

        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        asteroid.pos = match edge {
            Edge::Top => Vec2::new(rng.random_range(0.0..=w), -r),
            Edge::Right => Vec2::new(w + r, rng.random_range(0.0..=h)),
            Edge::Bottom => Vec2::new(rng.random_range(0.0..=w), h + r),
            Edge::Left => Vec2::new(-r, rng.random_range(0.0..=h)),
        };

        let max_offset = w.min(h) * tuning.aim_jitter;
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let offset = rng.random_range(0.0..=max_offset);
        let target = viewport.center() + Vec2::from_angle(angle) * offset;

        let dir = (target - asteroid.pos).normalize_or_zero();
        asteroid.vel = dir * rng.random_range(tuning.speed_min..=tuning.speed_max);
        asteroid.spin = rng.random_range(tuning.spin_min..=tuning.spin_max);
        asteroid.rotation = rng.random_range(0.0..360.0);

        log::trace!(
            "Spawned {:?} {:?} asteroid on {:?} edge at ({:.0}, {:.0})",
            size,
            shape,
            edge,
            asteroid.pos.x,
            asteroid.pos.y
        );
        asteroid
    }

    /// Integrate motion. Returns false once fully off screen.
    pub fn update(&mut self, dt: f32, viewport: Viewport) -> bool {
        self.pos += self.vel * dt;
        self.rotation += self.spin * dt;
        viewport.contains_with_margin(self.pos, self.radius)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn damage(&self) -> i32 {
        self.shape.base_damage() * self.size.multiplier()
    }

    /// Oriented hitbox corners, if this shape has one
    pub fn obb(&self) -> Option<Quad> {
        self.half_extents
            .map(|half| oriented_quad(self.pos, half, self.rotation))
    }
}
