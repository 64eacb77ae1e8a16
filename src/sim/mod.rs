//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Input only arrives as `InputEvent`s
//! - No rendering or platform dependencies

pub mod collision;
pub mod court;
pub mod input;
pub mod judge;
pub mod physics;
pub mod shot;
pub mod state;
pub mod tick;

pub use collision::{GroundContact, RimContact, reflect_velocity, resolve_ground, resolve_rim};
pub use court::{CourtBounds, Hoop, HoopSide};
pub use input::{InputEvent, InputState, MoveDir, Triggers};
pub use judge::ScoreJudge;
pub use physics::integrate;
pub use shot::{ShotPlan, horizontal_launch_speed, nearest_hoop, plan_shot};
pub use state::{
    Ball, BallPose, BallState, Frame, GameEvent, GameState, ScoreSnapshot, ShotAttempt, ShotResult,
};
pub use tick::{Session, tick};
