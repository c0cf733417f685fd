//! Windowless platform
//!
//! Plays back scripted (or generated) key states at a fixed frame time and
//! records draw calls into a [`DrawList`]. Used by the native binary's
//! autopilot run and by tests.

use std::collections::{BTreeSet, VecDeque};

use glam::Vec2;

use super::{Color, Key, Platform, SpriteKey};
use crate::renderer::{DrawCommand, DrawList};
use crate::sim::{Rect, Viewport};

/// Keys held during one frame
pub type KeySet = BTreeSet<Key>;

/// Generates the held keys for a frame number
pub type Autopilot = Box<dyn FnMut(u64) -> KeySet>;

/// Scripted frame: how long it lasted and which keys were held
#[derive(Debug, Clone)]
struct ScriptedFrame {
    dt: f32,
    keys: KeySet,
}

/// Headless platform with scripted input
pub struct HeadlessPlatform {
    viewport: Viewport,
    default_dt: f32,
    dt: f32,
    time: f64,
    frame: u64,
    max_frames: Option<u64>,
    script: VecDeque<ScriptedFrame>,
    autopilot: Option<Autopilot>,
    current: KeySet,
    previous: KeySet,
    /// Draw calls of the most recent frame
    pub draw_list: DrawList,
}

impl HeadlessPlatform {
    pub fn new(viewport: Viewport, dt: f32) -> Self {
        Self {
            viewport,
            default_dt: dt,
            dt,
            time: 0.0,
            frame: 0,
            max_frames: None,
            script: VecDeque::new(),
            autopilot: None,
            current: KeySet::new(),
            previous: KeySet::new(),
            draw_list: DrawList::new(),
        }
    }

    /// Stop after `frames` frames
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Generate input once the script runs out
    pub fn with_autopilot(mut self, autopilot: impl FnMut(u64) -> KeySet + 'static) -> Self {
        self.autopilot = Some(Box::new(autopilot));
        self
    }

    /// Queue a frame at the default frame time
    pub fn push_frame(&mut self, keys: KeySet) {
        let dt = self.default_dt;
        self.push_frame_dt(dt, keys);
    }

    /// Queue a frame with its own frame time
    pub fn push_frame_dt(&mut self, dt: f32, keys: KeySet) {
        self.script.push_back(ScriptedFrame { dt, keys });
    }

    /// Queue `count` identical frames
    pub fn push_frames(&mut self, count: usize, keys: &KeySet) {
        for _ in 0..count {
            self.push_frame(keys.clone());
        }
    }

    /// Frames completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Platform for HeadlessPlatform {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn frame_time(&self) -> f32 {
        self.dt
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn should_close(&self) -> bool {
        let limit_hit = self.max_frames.is_some_and(|max| self.frame >= max);
        let out_of_input = self.autopilot.is_none() && self.script.is_empty();
        limit_hit || out_of_input
    }

    fn is_down(&self, key: Key) -> bool {
        self.current.contains(&key)
    }

    fn was_pressed(&self, key: Key) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    /// Advances input to the next scripted frame
    fn begin_frame(&mut self) {
        self.previous = std::mem::take(&mut self.current);
        if let Some(next) = self.script.pop_front() {
            self.dt = next.dt;
            self.current = next.keys;
        } else if let Some(autopilot) = self.autopilot.as_mut() {
            self.dt = self.default_dt;
            self.current = autopilot(self.frame);
        } else {
            self.dt = self.default_dt;
        }
        self.draw_list.clear();
    }

    fn end_frame(&mut self) {
        self.frame += 1;
        self.time += f64::from(self.dt);
    }

    fn clear(&mut self, color: Color) {
        self.draw_list.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: SpriteKey, center: Vec2, size: Vec2, rotation_deg: f32) {
        self.draw_list.push(DrawCommand::Sprite {
            sprite,
            center,
            size,
            rotation: rotation_deg,
        });
    }

    fn draw_polygon_outline(
        &mut self,
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation_deg: f32,
        color: Color,
    ) {
        self.draw_list.push(DrawCommand::PolygonOutline {
            center,
            sides,
            radius,
            rotation: rotation_deg,
            color,
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push(DrawCommand::Rect { rect, color });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_list.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.draw_list.push(DrawCommand::Line { from, to, color });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        self.draw_list.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    /// Monospace estimate: half the font size per character
    fn measure_text(&self, text: &str, size: i32) -> i32 {
        text.chars().count() as i32 * size / 2
    }
}
