//! Hoopshot - a basketball shooting mini-game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shot planning, physics, collisions, scoring)
//! - `settings`: Tunable physics and gameplay configuration
//! - `demo`: Seeded auto-player that drives a session headlessly
//!
//! Rendering, camera control and HUD widgets live outside this crate. A host
//! feeds [`sim::InputEvent`]s and a per-frame time delta into a
//! [`sim::Session`] and draws the [`sim::Frame`] it gets back.

pub mod demo;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::{Vec2, Vec3};

/// Court and equipment geometry, fixed for the whole session
pub mod consts {
    /// Court dimensions (X is the long axis, Z the short one)
    pub const COURT_LENGTH: f32 = 30.0;
    pub const COURT_WIDTH: f32 = 15.0;
    /// Height of the playing surface above the world origin
    pub const COURT_SURFACE_Y: f32 = 0.11;
    /// Keeps the ball off the boundary lines when walking it around
    pub const COURT_MARGIN: f32 = 0.5;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.22;
    /// Ball center height when resting on the court
    pub const BALL_REST_Y: f32 = BALL_RADIUS + COURT_SURFACE_Y;

    /// Hoop defaults - 10 feet, regulation-ish ring
    pub const RIM_HEIGHT: f32 = 3.05;
    pub const RIM_RADIUS: f32 = 0.25;
    /// Distance of each rim center from the court center along X
    pub const RIM_CENTER_X: f32 = 13.06;

    /// Points awarded for a made basket
    pub const POINTS_PER_MAKE: u32 = 2;
    /// Shot power range
    pub const MAX_POWER: u32 = 100;

    /// Upper bound on integration substeps in one tick
    pub const MAX_SUBSTEPS: u32 = 64;
}

/// Project a world-space vector onto the court plane (x, z)
#[inline]
pub fn horizontal(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Distance between two points measured in the court plane only
#[inline]
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    horizontal(a).distance(horizontal(b))
}

/// Lift a court-plane vector back into world space at the given height
#[inline]
pub fn from_horizontal(v: Vec2, y: f32) -> Vec3 {
    Vec3::new(v.x, y, v.y)
}
