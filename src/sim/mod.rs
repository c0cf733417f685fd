//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only (owned by `GameState`)
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod projectile;
pub mod ship;
pub mod spawn;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidShape, Edge, SizeClass};
pub use collision::{
    Quad, Rect, circles_overlap, oriented_quad, point_in_convex_quad, quad_overlaps_quad,
    rect_overlaps_quad,
};
pub use projectile::{Projectile, WeaponKind};
pub use ship::Ship;
pub use spawn::{ShapeSelection, make_projectile, next_spawn_interval, spawn_asteroid};
pub use state::{GameEvent, GamePhase, GameState, Viewport};
pub use tick::{TickInput, tick};
