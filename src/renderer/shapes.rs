//! Outline geometry for the debug overlay and sprite sizing

use glam::Vec2;

use crate::sim::{Asteroid, Quad};
use crate::tuning::AsteroidTuning;

/// The four closed edges of a quad, in corner order
pub fn quad_edges(quad: &Quad) -> [(Vec2, Vec2); 4] {
    [
        (quad[0], quad[1]),
        (quad[1], quad[2]),
        (quad[2], quad[3]),
        (quad[3], quad[0]),
    ]
}

/// On-screen size of the triangle sprite for this asteroid
pub fn triangle_sprite_size(asteroid: &Asteroid, tuning: &AsteroidTuning) -> Vec2 {
    tuning.triangle_sprite * tuning.triangle_sprite_scale * asteroid.size.multiplier() as f32
}

/// Left edge that centres text of `text_width` on a screen `screen_width` wide
#[inline]
pub fn centered_x(screen_width: u32, text_width: i32) -> i32 {
    screen_width as i32 / 2 - text_width / 2
}
