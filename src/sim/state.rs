//! Game state and core simulation types

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::court::HoopSide;
use crate::consts::*;

/// Ball flight state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Resting on the court, can be walked around and shot
    Grounded,
    /// In flight, not yet counted as a make
    AirborneUnscored,
    /// In flight after passing through the target rim
    AirborneScored,
}

impl BallState {
    #[inline]
    pub fn in_flight(self) -> bool {
        !matches!(self, BallState::Grounded)
    }

    #[inline]
    pub fn scored(self) -> bool {
        matches!(self, BallState::AirborneScored)
    }
}

/// The basketball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    pub state: BallState,
    /// Visual spin only, never fed back into the dynamics
    pub orientation: Quat,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// Ball resting at center court
    pub fn new() -> Self {
        Self {
            pos: Self::start_pos(),
            vel: Vec3::ZERO,
            radius: BALL_RADIUS,
            state: BallState::Grounded,
            orientation: Quat::IDENTITY,
        }
    }

    #[inline]
    pub fn start_pos() -> Vec3 {
        Vec3::new(0.0, BALL_REST_Y, 0.0)
    }

    /// Center height at which the ball touches the court
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.radius + COURT_SURFACE_Y
    }

    /// Height of the lowest point of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn in_flight(&self) -> bool {
        self.state.in_flight()
    }

    /// Put the ball back at the starting pose
    pub fn reset(&mut self) {
        self.pos = Self::start_pos();
        self.vel = Vec3::ZERO;
        self.state = BallState::Grounded;
        self.orientation = Quat::IDENTITY;
    }

    /// Launch from the current position
    pub fn launch(&mut self, vel: Vec3) {
        self.vel = vel;
        self.state = BallState::AirborneUnscored;
    }

    /// Come to rest where the ball is
    pub fn settle(&mut self) {
        self.pos.y = self.ground_y();
        self.vel = Vec3::ZERO;
        self.state = BallState::Grounded;
    }

    pub fn pose(&self) -> BallPose {
        BallPose {
            position: self.pos,
            orientation: self.orientation,
        }
    }
}

/// What the renderer needs to draw the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallPose {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Outcome of a single attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    Made,
    Missed,
}

/// The shot currently in the air
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotAttempt {
    pub target: HoopSide,
    pub launch_vel: Vec3,
    /// Predicted time to reach rim height over the rim center
    pub flight_time: f32,
}

/// Scoreboard - survives ball resets, lives for the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub attempts: u32,
    pub makes: u32,
    pub last_result: Option<ShotResult>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a new attempt, returning its 1-based number
    pub fn record_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    pub fn record_make(&mut self) {
        self.score += POINTS_PER_MAKE;
        self.makes += 1;
        self.last_result = Some(ShotResult::Made);
    }

    pub fn record_miss(&mut self) {
        self.last_result = Some(ShotResult::Missed);
    }

    /// Makes over attempts, in percent (0 before the first attempt)
    pub fn shooting_percentage(&self) -> f32 {
        if self.attempts == 0 {
            0.0
        } else {
            self.makes as f32 / self.attempts as f32 * 100.0
        }
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            score: self.score,
            attempts: self.attempts,
            makes: self.makes,
            percentage: self.shooting_percentage(),
            last_result: self.last_result,
        }
    }
}

/// HUD view of the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub score: u32,
    pub attempts: u32,
    pub makes: u32,
    pub percentage: f32,
    pub last_result: Option<ShotResult>,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotTaken {
        target: HoopSide,
        velocity: Vec3,
        attempt: u32,
    },
    RimHit {
        hoop: HoopSide,
    },
    /// Ground bounce with vertical speeds before and after
    Bounce {
        incoming: f32,
        outgoing: f32,
    },
    Result(ShotResult),
    BallReset,
    PowerChanged(u32),
}

/// Everything published to the renderer/HUD after one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub pose: BallPose,
    /// Present only when the scoreboard changed this tick
    pub scoreboard: Option<ScoreSnapshot>,
    pub events: Vec<GameEvent>,
}

impl Frame {
    /// The shot result reported this tick, if any
    pub fn shot_result(&self) -> Option<ShotResult> {
        self.events.iter().find_map(|e| match e {
            GameEvent::Result(result) => Some(*result),
            _ => None,
        })
    }
}
