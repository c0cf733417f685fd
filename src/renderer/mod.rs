//! Render pass
//!
//! Reads a [`GameState`] snapshot and issues draw calls on a [`Platform`].
//! Never mutates the simulation.

pub mod draw_list;
pub mod shapes;

pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::platform::{Color, Platform, SpriteKey};
use crate::settings::Settings;
use crate::sim::{Asteroid, AsteroidShape, GameState, Projectile, WeaponKind};

const HUD_FONT: i32 = 20;
const TITLE_FONT: i32 = 40;
const ROCKET_DRAW_RADIUS: f32 = 8.0;
const HITBOX_COLOR: Color = Color::YELLOW;

/// Draw one frame of `state`
pub fn draw_frame<P: Platform + ?Sized>(state: &GameState, settings: &Settings, platform: &mut P) {
    draw_background(state, settings, platform);

    if settings.show_hud {
        draw_hud(state, settings, platform);
    }

    for projectile in &state.projectiles {
        draw_projectile(projectile, platform);
    }
    for asteroid in &state.asteroids {
        draw_asteroid(state, asteroid, platform);
    }

    draw_ship(state, settings, platform);

    if settings.show_hitboxes {
        draw_hitboxes(state, platform);
    }

    if !state.ship.is_alive() {
        draw_game_over(state, platform);
    }
}

fn draw_background<P: Platform + ?Sized>(state: &GameState, settings: &Settings, platform: &mut P) {
    platform.clear(Color::BLACK);
    if settings.background {
        let size = state.viewport.size();
        platform.draw_sprite(SpriteKey::Background, size * 0.5, size, 0.0);
    }
}

fn draw_hud<P: Platform + ?Sized>(state: &GameState, settings: &Settings, platform: &mut P) {
    let hp = format!("HP: {}", state.ship.hp);
    platform.draw_text(&hp, 10, 10, HUD_FONT, Color::GREEN);

    let weapon = format!("Weapon: {}", state.weapon.name());
    platform.draw_text(&weapon, 10, 40, HUD_FONT, Color::BLUE);

    if settings.show_shape {
        let shape = format!("Shape: {}", state.shape.name());
        platform.draw_text(&shape, 10, 70, HUD_FONT, Color::LIGHT_GRAY);
    }
}

fn draw_projectile<P: Platform + ?Sized>(projectile: &Projectile, platform: &mut P) {
    match projectile.weapon {
        WeaponKind::Bullet => platform.draw_circle(projectile.pos, projectile.radius(), Color::WHITE),
        WeaponKind::Laser => platform.draw_rect(projectile.line_rect(), Color::RED),
        WeaponKind::Rocket => platform.draw_circle(projectile.pos, ROCKET_DRAW_RADIUS, Color::ORANGE),
    }
}

fn draw_asteroid<P: Platform + ?Sized>(state: &GameState, asteroid: &Asteroid, platform: &mut P) {
    match asteroid.shape {
        AsteroidShape::Triangle => {
            let size = shapes::triangle_sprite_size(asteroid, &state.tuning.asteroids);
            platform.draw_sprite(SpriteKey::TriangleAsteroid, asteroid.pos, size, asteroid.rotation);
        }
        AsteroidShape::Square | AsteroidShape::Pentagon => platform.draw_polygon_outline(
            asteroid.pos,
            asteroid.shape.sides(),
            asteroid.radius(),
            asteroid.rotation,
            Color::WHITE,
        ),
    }
}

fn draw_ship<P: Platform + ?Sized>(state: &GameState, settings: &Settings, platform: &mut P) {
    let ship = &state.ship;
    if !ship.is_alive() && !settings.dead_ship_visible(platform.time()) {
        return;
    }
    let size = Vec2::splat(ship.radius * 2.0);
    platform.draw_sprite(SpriteKey::Ship, ship.pos, size, ship.tilt);
}

fn draw_hitboxes<P: Platform + ?Sized>(state: &GameState, platform: &mut P) {
    platform.draw_circle(state.ship.pos, state.ship.radius, HITBOX_COLOR);

    for asteroid in &state.asteroids {
        match asteroid.obb() {
            Some(quad) => {
                for (from, to) in shapes::quad_edges(&quad) {
                    platform.draw_line(from, to, HITBOX_COLOR);
                }
            }
            None => platform.draw_circle(asteroid.pos, asteroid.radius(), HITBOX_COLOR),
        }
    }

    for projectile in &state.projectiles {
        if projectile.uses_line_query() {
            for (from, to) in shapes::quad_edges(&projectile.line_quad()) {
                platform.draw_line(from, to, HITBOX_COLOR);
            }
        } else {
            platform.draw_circle(projectile.pos, projectile.radius(), HITBOX_COLOR);
        }
    }
}

fn draw_game_over<P: Platform + ?Sized>(state: &GameState, platform: &mut P) {
    let width = state.viewport.width;
    let mid = state.viewport.height as i32 / 2;

    let title = "GAME OVER";
    let x = shapes::centered_x(width, platform.measure_text(title, TITLE_FONT));
    platform.draw_text(title, x, mid - 40, TITLE_FONT, Color::RED);

    let hint = "Press R to restart";
    let x = shapes::centered_x(width, platform.measure_text(hint, HUD_FONT));
    platform.draw_text(hint, x, mid + 10, HUD_FONT, Color::LIGHT_GRAY);
}
