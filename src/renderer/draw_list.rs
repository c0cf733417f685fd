//! Recorded draw commands
//!
//! Headless platforms record what a frame would draw instead of rasterising
//! it. Tests inspect the list; the native binary logs a summary.

use glam::Vec2;

use crate::platform::{Color, SpriteKey};
use crate::sim::Rect;

/// One draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite {
        sprite: SpriteKey,
        center: Vec2,
        size: Vec2,
        rotation: f32,
    },
    PolygonOutline {
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        size: i32,
        color: Color,
    },
}

/// Draw calls for a single frame, in submission order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn this frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// Number of sprite draws using `sprite`
    pub fn sprite_count(&self, sprite: SpriteKey) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { sprite: s, .. } if *s == sprite))
            .count()
    }

    /// Number of polygon outlines with `sides` sides
    pub fn polygon_count(&self, sides: u32) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::PolygonOutline { sides: n, .. } if *n == sides))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}
