//! Platform abstraction layer
//!
//! The simulation never touches a window, a texture or a keyboard. A platform
//! provides:
//! - Time (frame delta, wall clock for blinking)
//! - Input state for a fixed set of logical keys
//! - A fixed viewport
//! - A handful of draw primitives
//!
//! Sprites are named by [`SpriteKey`], so a platform loads each texture once
//! and shares it across every entity that draws it.

pub mod headless;

pub use headless::{HeadlessPlatform, KeySet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{AsteroidShape, Rect, ShapeSelection, TickInput, Viewport};

/// Logical inputs the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Restart,
    Shape1,
    Shape2,
    Shape3,
    Shape4,
    CycleWeapon,
}

/// RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const ORANGE: Color = Color::rgb(255, 161, 0);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
}

/// Textures the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKey {
    Background,
    Ship,
    TriangleAsteroid,
}

/// Window, clock, input and drawing surface the game runs on
pub trait Platform {
    /// Fixed for the lifetime of the process
    fn viewport(&self) -> Viewport;
    /// Seconds since the previous frame
    fn frame_time(&self) -> f32;
    /// Seconds since start (for cosmetic effects only)
    fn time(&self) -> f64;
    /// Window closed / process asked to stop
    fn should_close(&self) -> bool;

    /// Held this frame
    fn is_down(&self, key: Key) -> bool;
    /// Went down this frame
    fn was_pressed(&self, key: Key) -> bool;

    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    fn clear(&mut self, color: Color);

    /// Draw a texture centred on `center`, scaled to `size` pixels and
    /// rotated about its centre
    fn draw_sprite(&mut self, sprite: SpriteKey, center: Vec2, size: Vec2, rotation_deg: f32);
    fn draw_polygon_outline(
        &mut self,
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation_deg: f32,
        color: Color,
    );
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);
    /// Width in pixels of `text` at `size`
    fn measure_text(&self, text: &str, size: i32) -> i32;
}

/// Translate the platform's key state into one frame of simulation input
pub fn poll_input<P: Platform + ?Sized>(platform: &P) -> TickInput {
    let select_shape = [
        (Key::Shape1, ShapeSelection::Fixed(AsteroidShape::Triangle)),
        (Key::Shape2, ShapeSelection::Fixed(AsteroidShape::Square)),
        (Key::Shape3, ShapeSelection::Fixed(AsteroidShape::Pentagon)),
        (Key::Shape4, ShapeSelection::Random),
    ]
    .into_iter()
    .rev()
    .find(|(key, _)| platform.was_pressed(*key))
    .map(|(_, selection)| selection);

    TickInput {
        up: platform.is_down(Key::Up),
        down: platform.is_down(Key::Down),
        left: platform.is_down(Key::Left),
        right: platform.is_down(Key::Right),
        fire: platform.is_down(Key::Fire),
        restart: platform.was_pressed(Key::Restart),
        select_shape,
        cycle_weapon: platform.was_pressed(Key::CycleWeapon),
    }
}
