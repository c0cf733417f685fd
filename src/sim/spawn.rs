//! Entity factory: asteroid spawning and projectile creation

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidShape, SizeClass};
use super::projectile::{Projectile, WeaponKind};
use super::ship::Ship;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Which shape the next spawned asteroid takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeSelection {
    Fixed(AsteroidShape),
    /// Uniform over the concrete shapes, drawn per spawn
    Random,
}

impl Default for ShapeSelection {
    fn default() -> Self {
        ShapeSelection::Fixed(AsteroidShape::Triangle)
    }
}

impl ShapeSelection {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> AsteroidShape {
        match self {
            ShapeSelection::Fixed(shape) => shape,
            ShapeSelection::Random => {
                AsteroidShape::ALL[rng.random_range(0..AsteroidShape::ALL.len())]
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeSelection::Fixed(shape) => shape.name(),
            ShapeSelection::Random => "RANDOM",
        }
    }
}

/// Seconds until the next spawn
pub fn next_spawn_interval<R: Rng>(rng: &mut R, tuning: &Tuning) -> f32 {
    rng.random_range(tuning.spawn.interval_min..=tuning.spawn.interval_max)
}

/// Spawn one asteroid of the selected shape into the field
pub fn spawn_asteroid(state: &mut GameState) {
    let shape = state.shape.resolve(&mut state.rng);
    let size = if state.tuning.spawn.random_sizes {
        SizeClass::ALL[state.rng.random_range(0..SizeClass::ALL.len())]
    } else {
        SizeClass::Small
    };

    let asteroid = Asteroid::spawn(
        shape,
        size,
        state.viewport,
        &mut state.rng,
        &state.tuning.asteroids,
    );
    state.asteroids.push(asteroid);
    state.push_event(GameEvent::AsteroidSpawned { shape, size });
}

/// A projectile leaving the ship's nose at the weapon's speed
pub fn make_projectile(weapon: WeaponKind, ship: &Ship) -> Projectile {
    Projectile::new(weapon, ship.muzzle(), ship.projectile_speed(weapon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    #[test]
    fn test_random_selection_covers_all_shapes() {
        let mut rng = Pcg32::seed_from_u64(3);
        let seen: HashSet<_> = (0..200)
            .map(|_| ShapeSelection::Random.resolve(&mut rng))
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_fixed_selection_is_fixed() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(
                ShapeSelection::Fixed(AsteroidShape::Square).resolve(&mut rng),
                AsteroidShape::Square
            );
        }
    }

    #[test]
    fn test_spawn_interval_in_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..500 {
            let t = next_spawn_interval(&mut rng, &tuning);
            assert!((0.5..=3.0).contains(&t));
        }
    }

    #[test]
    fn test_spawn_asteroid_pushes_and_reports() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.shape = ShapeSelection::Fixed(AsteroidShape::Pentagon);
        spawn_asteroid(&mut state);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].shape, AsteroidShape::Pentagon);
        assert_eq!(state.asteroids[0].size, SizeClass::Small);
        assert_eq!(
            state.events,
            vec![GameEvent::AsteroidSpawned {
                shape: AsteroidShape::Pentagon,
                size: SizeClass::Small
            }]
        );
    }

    #[test]
    fn test_random_sizes_when_enabled() {
        let mut tuning = Tuning::default();
        tuning.spawn.random_sizes = true;
        let mut state = GameState::new(tuning, 21);
        for _ in 0..60 {
            spawn_asteroid(&mut state);
        }
        let sizes: HashSet<_> = state.asteroids.iter().map(|a| a.size).collect();
        assert_eq!(sizes.len(), 3);
    }

    #[test]
    fn test_projectile_from_ship_nose() {
        let state = GameState::new(Tuning::default(), 1);
        let p = make_projectile(WeaponKind::Bullet, &state.ship);
        assert_eq!(p.pos, state.ship.muzzle());
        assert_eq!(p.vel.y, -440.0);
        assert_eq!(p.damage, 10);
    }
}
