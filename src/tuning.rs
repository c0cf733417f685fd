//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a run can be
//! re-balanced from a JSON file without recompiling. Missing fields fall back
//! to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Viewport, WeaponKind};

/// Errors raised while loading a tuning file
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Value out of range
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Fire cadence for one weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponTuning {
    /// Shots per second
    pub fire_rate: f32,
    /// Pixels between consecutive shots in flight
    pub spacing: f32,
}

impl WeaponTuning {
    pub const fn new(fire_rate: f32, spacing: f32) -> Self {
        Self { fire_rate, spacing }
    }
}

/// Per-weapon fire cadence table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTable {
    pub laser: WeaponTuning,
    pub bullet: WeaponTuning,
    pub rocket: WeaponTuning,
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self {
            laser: WeaponTuning::new(18.0, 40.0),
            bullet: WeaponTuning::new(22.0, 20.0),
            // Rockets share the bullet cadence
            rocket: WeaponTuning::new(22.0, 20.0),
        }
    }
}

impl WeaponTable {
    pub fn get(&self, weapon: WeaponKind) -> &WeaponTuning {
        match weapon {
            WeaponKind::Laser => &self.laser,
            WeaponKind::Bullet => &self.bullet,
            WeaponKind::Rocket => &self.rocket,
        }
    }
}

/// Player ship balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    pub max_hp: i32,
    /// Movement speed (pixels/s), also the fall speed once destroyed
    pub speed: f32,
    /// Collision radius
    pub radius: f32,
    /// Sprite tilt while strafing (degrees)
    pub tilt_angle: f32,
    pub tilt_smoothing: f32,
    pub weapons: WeaponTable,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            max_hp: SHIP_MAX_HP,
            speed: SHIP_SPEED,
            radius: SHIP_RADIUS,
            tilt_angle: SHIP_TILT_ANGLE,
            tilt_smoothing: SHIP_TILT_SMOOTHING,
            weapons: WeaponTable::default(),
        }
    }
}

/// Asteroid balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    /// Radius of a small asteroid; larger classes multiply it
    pub base_radius: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Spin range (degrees/s)
    pub spin_min: f32,
    pub spin_max: f32,
    /// Aim jitter radius as a fraction of min(width, height)
    pub aim_jitter: f32,
    /// Source size of the triangle sprite (pixels)
    pub triangle_sprite: Vec2,
    /// Draw scale applied to the triangle sprite
    pub triangle_sprite_scale: f32,
    /// Hitbox shrink relative to the drawn sprite
    pub hitbox_shrink: f32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            base_radius: ASTEROID_BASE_RADIUS,
            speed_min: ASTEROID_SPEED_MIN,
            speed_max: ASTEROID_SPEED_MAX,
            spin_min: ASTEROID_SPIN_MIN,
            spin_max: ASTEROID_SPIN_MAX,
            aim_jitter: ASTEROID_AIM_JITTER,
            triangle_sprite: Vec2::new(160.0, 160.0),
            triangle_sprite_scale: 0.2,
            hitbox_shrink: 0.8,
        }
    }
}

/// Spawn pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Seconds between spawns, drawn uniformly from [min, max]
    pub interval_min: f32,
    pub interval_max: f32,
    /// Population cap
    pub max_asteroids: usize,
    /// Draw a random size class per spawn instead of always small
    pub random_sizes: bool,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval_min: SPAWN_INTERVAL_MIN,
            interval_max: SPAWN_INTERVAL_MAX,
            max_asteroids: MAX_ASTEROIDS,
            random_sizes: false,
        }
    }
}

/// Complete balance sheet for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: u32,
    pub screen_height: u32,
    pub ship: ShipTuning,
    pub asteroids: AsteroidTuning,
    pub spawn: SpawnTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ship: ShipTuning::default(),
            asteroids: AsteroidTuning::default(),
            spawn: SpawnTuning::default(),
        }
    }
}

impl Tuning {
    /// Viewport the simulation runs in
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.screen_width, self.screen_height)
    }

    /// Parse and validate a tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load tuning from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::load_from_file(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Failed to load tuning from {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON (for writing a starter file)
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid("viewport must be non-empty".into()));
        }
        if self.ship.max_hp <= 0 {
            return Err(ConfigError::Invalid("ship.max_hp must be positive".into()));
        }
        positive("ship.speed", self.ship.speed)?;
        positive("ship.radius", self.ship.radius)?;
        finite("ship.tilt_angle", self.ship.tilt_angle)?;
        finite("ship.tilt_smoothing", self.ship.tilt_smoothing)?;
        for weapon in WeaponKind::ALL {
            let w = self.ship.weapons.get(weapon);
            positive(&format!("{} fire_rate", weapon.name()), w.fire_rate)?;
            positive(&format!("{} spacing", weapon.name()), w.spacing)?;
        }

        range("spawn interval", self.spawn.interval_min, self.spawn.interval_max)?;
        positive("spawn.interval_min", self.spawn.interval_min)?;

        let a = &self.asteroids;
        range("asteroid speed", a.speed_min, a.speed_max)?;
        range("asteroid spin", a.spin_min, a.spin_max)?;
        positive("asteroids.base_radius", a.base_radius)?;
        finite("asteroids.aim_jitter", a.aim_jitter)?;
        if a.aim_jitter < 0.0 {
            return Err(ConfigError::Invalid(
                "asteroids.aim_jitter must be non-negative".into(),
            ));
        }
        positive("asteroids.triangle_sprite.x", a.triangle_sprite.x)?;
        positive("asteroids.triangle_sprite.y", a.triangle_sprite.y)?;
        positive("asteroids.triangle_sprite_scale", a.triangle_sprite_scale)?;
        positive("asteroids.hitbox_shrink", a.hitbox_shrink)?;
        Ok(())
    }
}

fn finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite")))
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive")))
    }
}

/// Finite bounds with min <= max
fn range(name: &str, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(name, min)?;
    finite(name, max)?;
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} range must satisfy min <= max")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "ship": { "speed": 300.0 } }"#).unwrap();
        assert_eq!(tuning.ship.speed, 300.0);
        assert_eq!(tuning.ship.max_hp, SHIP_MAX_HP);
        assert_eq!(tuning.spawn.max_asteroids, MAX_ASTEROIDS);
        assert_eq!(tuning.ship.weapons.laser.fire_rate, 18.0);
    }

    #[test]
    fn test_rejects_zero_fire_rate() {
        let json = r#"{ "ship": { "weapons": { "bullet": { "fire_rate": 0.0, "spacing": 20.0 } } } }"#;
        assert!(matches!(Tuning::from_json(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_inverted_spawn_range() {
        let json = r#"{ "spawn": { "interval_min": 3.0, "interval_max": 1.0 } }"#;
        assert!(matches!(Tuning::from_json(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        // 1e39 overflows f32 and parses as infinity
        for json in [
            r#"{ "asteroids": { "speed_max": 1e39 } }"#,
            r#"{ "asteroids": { "spin_max": 1e39 } }"#,
            r#"{ "asteroids": { "aim_jitter": 1e39 } }"#,
            r#"{ "asteroids": { "base_radius": 1e39 } }"#,
            r#"{ "spawn": { "interval_max": 1e39 } }"#,
            r#"{ "ship": { "speed": 1e39 } }"#,
        ] {
            assert!(
                matches!(Tuning::from_json(json), Err(ConfigError::Invalid(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_sizes_and_spacing() {
        for json in [
            r#"{ "ship": { "weapons": { "laser": { "fire_rate": 18.0, "spacing": 0.0 } } } }"#,
            r#"{ "ship": { "weapons": { "rocket": { "fire_rate": 22.0, "spacing": -20.0 } } } }"#,
            r#"{ "ship": { "speed": 0.0 } }"#,
            r#"{ "ship": { "radius": -1.0 } }"#,
            r#"{ "asteroids": { "triangle_sprite": [0.0, 160.0] } }"#,
            r#"{ "asteroids": { "triangle_sprite_scale": 0.0 } }"#,
            r#"{ "asteroids": { "hitbox_shrink": 0.0 } }"#,
        ] {
            assert!(
                matches!(Tuning::from_json(json), Err(ConfigError::Invalid(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default(Some(Path::new("/definitely/not/here.json")));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_json_roundtrip_preserves_tuning() {
        let mut tuning = Tuning::default();
        tuning.spawn.random_sizes = true;
        let json = tuning.to_json_pretty().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
