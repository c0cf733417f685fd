//! Variable timestep simulation tick
//!
//! Core game loop that advances the simulation by one rendered frame. The
//! order of the phases matters: restart is handled after the ship moves,
//! projectiles are resolved before asteroids move, and the ship is tested
//! against asteroids before they are advanced.

use super::collision::{circles_overlap, quad_overlaps_quad};
use super::spawn::{ShapeSelection, make_projectile, next_spawn_interval, spawn_asteroid};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held movement directions
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire held
    pub fire: bool,
    /// Restart pressed this frame (only honoured after game over)
    pub restart: bool,
    /// Shape picked this frame
    pub select_shape: Option<ShapeSelection>,
    /// Weapon cycle pressed this frame
    pub cycle_weapon: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.ship.update(dt, input);

    if !state.ship.is_alive() && input.restart {
        state.restart();
        state.push_event(GameEvent::Restarted);
        log::info!("Restarted (seed {}, frame {})", state.seed, state.frame);
    }

    if let Some(selection) = input.select_shape {
        if selection != state.shape {
            log::debug!("Asteroid shape: {}", selection.name());
        }
        state.shape = selection;
    }
    if input.cycle_weapon {
        state.weapon = state.weapon.next();
        log::debug!("Weapon: {}", state.weapon.name());
    }

    fire(state, input.fire, dt);

    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval
        && state.asteroids.len() < state.tuning.spawn.max_asteroids
    {
        spawn_asteroid(state);
        state.spawn_timer = 0.0;
        state.spawn_interval = next_spawn_interval(&mut state.rng, &state.tuning);
    }

    let viewport = state.viewport;
    state.projectiles.retain_mut(|p| !p.update(dt, viewport));

    resolve_projectile_hits(state);
    resolve_ship_hits_and_advance(state, dt);

    let phase = if state.ship.is_alive() {
        GamePhase::Playing
    } else {
        GamePhase::GameOver
    };
    if phase != state.phase && phase == GamePhase::GameOver {
        log::info!(
            "Game over after {:.1}s ({} asteroids on screen)",
            state.elapsed,
            state.asteroids.len()
        );
    }
    state.phase = phase;
    state.frame += 1;
    state.elapsed += f64::from(dt);
}

/// Fire-rate gate. Emits as many shots as the accumulated time covers so low
/// frame rates don't lower the effective fire rate. While not firing the
/// credit is wrapped to under one cooldown so a re-press never bursts.
fn fire(state: &mut GameState, held: bool, dt: f32) {
    let weapon = state.weapon;
    let cooldown = state.ship.cooldown(weapon);

    if state.ship.is_alive() && held {
        state.shot_timer += dt;
        while state.shot_timer >= cooldown {
            let projectile = make_projectile(weapon, &state.ship);
            state.projectiles.push(projectile);
            state.push_event(GameEvent::ShotFired { weapon });
            state.shot_timer -= cooldown;
        }
    } else if state.shot_timer > cooldown {
        state.shot_timer %= cooldown;
    }
}

/// Projectile vs asteroid, first match wins.
///
/// Thin projectiles test their trailing line rect against oriented hitboxes;
/// everything else is a circle test.
fn resolve_projectile_hits(state: &mut GameState) {
    let mut pi = 0;
    while pi < state.projectiles.len() {
        let projectile = &state.projectiles[pi];
        let hit = state.asteroids.iter().position(|asteroid| {
            match asteroid.obb() {
                Some(obb) if projectile.uses_line_query() => {
                    quad_overlaps_quad(&obb, &projectile.line_quad())
                }
                _ => circles_overlap(
                    projectile.pos,
                    projectile.radius(),
                    asteroid.pos,
                    asteroid.radius(),
                ),
            }
        });

        match hit {
            Some(ai) => {
                let asteroid = state.asteroids.remove(ai);
                let projectile = state.projectiles.remove(pi);
                state.push_event(GameEvent::AsteroidDestroyed {
                    shape: asteroid.shape,
                    weapon: projectile.weapon,
                });
            }
            None => pi += 1,
        }
    }
}

/// Ship vs asteroid, then move and cull the survivors.
///
/// An asteroid that hits the ship is removed without moving. Several
/// asteroids may hit in the same frame.
fn resolve_ship_hits_and_advance(state: &mut GameState, dt: f32) {
    let viewport = state.viewport;
    let ship = &mut state.ship;
    let events = &mut state.events;

    state.asteroids.retain_mut(|asteroid| {
        if ship.is_alive()
            && circles_overlap(ship.pos, ship.radius, asteroid.pos, asteroid.radius())
        {
            let damage = asteroid.damage();
            let destroyed = ship.take_damage(damage);
            events.push(GameEvent::ShipHit {
                damage,
                hp: ship.hp,
            });
            if destroyed {
                events.push(GameEvent::ShipDestroyed);
            }
            return false;
        }
        asteroid.update(dt, viewport)
    });
}
